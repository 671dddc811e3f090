//! The score query language and sort engine.
//!
//! A search string is split on whitespace; each token is one of:
//! - a mod filter: `+hdhr` (include), `-dt` (exclude), `*nm` (exact)
//! - an attribute comparison: `pp>200`, `acc>=98.5`, `ar<=9`
//! - free text matched against title, artist and player
//!
//! All tokens must match. Filtering and sorting never mutate their input.

mod attribute;
mod filter;
mod mods;
mod sort;
mod term;

pub use attribute::*;
pub use filter::*;
pub use mods::*;
pub use sort::*;
pub use term::*;
