//! Command-line front end for `othello-engine`: console players, the game
//! session loop and game log fingerprints.

pub mod connectors;
pub mod fingerprint;
pub mod session;
pub mod version;

pub use session::Session;
pub use version::VersionInfo;
