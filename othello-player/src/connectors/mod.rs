//! Connectors let people play the engine through different interfaces.

mod console;
mod human;

pub use console::{Console, SharedConsole};
pub use human::HumanSelector;
