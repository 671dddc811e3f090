//! Configuration and installation discovery.
//!
//! - `Config` - user settings persisted as TOML
//! - `Installation` - a validated osu! folder and the directories derived from it

mod installation;
mod settings;

pub use installation::*;
pub use settings::*;
