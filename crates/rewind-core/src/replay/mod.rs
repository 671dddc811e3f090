//! Replay file decoding and lookup.
//!
//! - `codec` - ULEB128 integers and tagged strings
//! - `ReplayHeader` - the leading fields of a replay file
//! - `ReplayLocator` - finds the replay of a specific play on disk
//! - `replay_file_name` - export naming

mod codec;
mod export;
mod header;
mod locator;

pub use codec::*;
pub use export::*;
pub use header::*;
pub use locator::*;
