//! Encoding-agnostic iteration and search over UTF-8, UTF-16 and UTF-32 text.
//!
//! Text is kept in whatever width it arrived in (`&[u8]`, `&str`, `&[u16]`,
//! `&[u32]`) and read through [`UtfIter`], a position that decodes one
//! scalar value at a time and can step in both directions. The algorithms
//! ([`compare`], [`expect`], [`find_char`], [`search`], [`skipws`], ...) are
//! written once against that iterator and give the same answers, counted in
//! scalar values, for every width.
//!
//! Malformed input never stops a walk: each malformed unit reads as
//! [`REPLACEMENT_CHARACTER`]. Searches that find nothing return the end of the
//! searched range.
//!
//! ```rust
//! use unitext::{distance, find_first_of, search, skipws, utf_begin};
//!
//! let utf8 = " €uro ∈lement";
//! let utf16: Vec<u16> = utf8.encode_utf16().collect();
//!
//! let mut it = utf_begin(&utf16);
//! assert_eq!(skipws(&mut it), 1);
//! assert_eq!(it.get(), '€');
//!
//! let hit = search(&utf16, "∈lement");
//! assert_eq!(distance(utf_begin(&utf16), hit), 6);
//! assert_eq!(distance(utf_begin(utf8), find_first_of(utf8, "∈")), 6);
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod algorithm;
mod chars;
pub mod convert;
mod decode;
mod error;
mod iter;
mod options;

#[cfg(test)]
mod tests;

pub use algorithm::{
    compare, expect, find_char, find_first_not_of, find_first_of, find_if, find_last_char,
    find_last_if, find_last_not_of, find_last_of, search, skip_while, skipws,
};
pub use chars::{CharSet, char_is_unicode, char_is_whitespace};
#[cfg(any(test, feature = "fuzzing"))]
#[doc(hidden)]
pub use decode::assert_symmetric_walk;
pub use decode::{CharInfo, CodeUnit, Encoding, REPLACEMENT_CHARACTER};
pub use error::UtfError;
pub use iter::{UtfIter, UtfRange, distance, utf_begin, utf_end, utf_range};
pub use options::{InvalidPolicy, TranscodeOptions};
