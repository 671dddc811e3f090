//! CLI command implementations.

pub mod export;
pub mod import;
pub mod inspect;
pub mod locate;
pub mod reset_cache;
pub mod search;
pub mod set_folder;
pub mod users;
