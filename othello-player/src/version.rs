//! Build information printed by `othello --version`.

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VersionInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub profile: &'static str,
}

impl VersionInfo {
    /// Information about this build of the crate.
    pub fn current() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            profile: if cfg!(debug_assertions) {
                "debug"
            } else {
                "release"
            },
        }
    }
}

impl fmt::Display for VersionInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Othello Rust {} ({} {})", self.version, self.name, self.profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_version() {
        let info = VersionInfo {
            name: "othello-player",
            version: "1.2.3",
            profile: "release",
        };
        assert_eq!(info.to_string(), "Othello Rust 1.2.3 (othello-player release)");
        assert!(VersionInfo::current().to_string().starts_with("Othello Rust "));
    }
}
