//! Integer field extraction for binary pattern matching.
//!
//! [extract_integer] decodes a fixed width integer out of a binary term at a
//! bit offset. Byte aligned 8, 16, 32 and 64 bit fields are read directly,
//! other widths go through [extract_any_integer].

mod error;
mod extract;
mod flags;
mod generic;
mod matcher;
pub mod read;
mod term;
mod value;

pub use error::ExtractError;
pub use extract::{extract_integer, try_extract_integer};
pub use flags::{BitstringFlags, Endianness, Signedness};
pub use generic::{extract_any_integer, try_extract_any_integer};
pub use matcher::MatchState;
pub use term::{Binary, BinaryTerm};
pub use value::{reinterpret_u16, reinterpret_u32, reinterpret_u64, reinterpret_u8, sign_extend, TaggedInt};
