//! Per-width decoding primitives.
//!
//! [`CodeUnit`] is the single capability the rest of the crate is written
//! against. It is implemented for `u8` (UTF-8), `u16` (UTF-16) and `u32`
//! (UTF-32), and converts between raw code units and [`char`]s in both
//! directions.
//!
//! Invariants
//! - Decoding never fails. A malformed unit decodes as
//!   [`REPLACEMENT_CHARACTER`] with a length of exactly one unit, so every walk
//!   over a buffer makes progress.
//! - [`CodeUnit::decode_back`] is the inverse of [`CodeUnit::decode`]: walking
//!   backward from the end of any buffer, well-formed or not, visits the same
//!   offsets as walking forward from the start.

use alloc::vec::Vec;
use core::fmt;

/// The scalar value substituted for malformed input (`U+FFFD`).
pub const REPLACEMENT_CHARACTER: char = char::REPLACEMENT_CHARACTER;

/// The three storage encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Encoding {
    /// 8-bit code units.
    Utf8,
    /// 16-bit code units, supplementary planes as surrogate pairs.
    Utf16,
    /// 32-bit code units, one per scalar value.
    Utf32,
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Encoding::Utf8 => "UTF-8",
            Encoding::Utf16 => "UTF-16",
            Encoding::Utf32 => "UTF-32",
        })
    }
}

/// One decoded scalar, the number of code units it occupies, and whether the
/// units were well-formed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharInfo {
    /// The decoded scalar, or [`REPLACEMENT_CHARACTER`] if `valid` is false.
    pub ch: char,
    /// Number of code units consumed (1-4 for UTF-8, 1-2 for UTF-16, 1 for
    /// UTF-32). Always 1 for malformed input.
    pub len: u8,
    /// False if the units at this position were malformed.
    pub valid: bool,
}

impl CharInfo {
    /// The record produced for a malformed unit.
    pub const INVALID: CharInfo = CharInfo {
        ch: REPLACEMENT_CHARACTER,
        len: 1,
        valid: false,
    };

    #[inline]
    #[expect(clippy::cast_possible_truncation)]
    fn scalar(ch: char, len: usize) -> Self {
        CharInfo {
            ch,
            len: len as u8,
            valid: true,
        }
    }

    /// `len` as a `usize`, for offset arithmetic.
    #[inline]
    #[must_use]
    pub fn units(&self) -> usize {
        usize::from(self.len)
    }
}

/// A fixed-width code unit together with the rules for decoding it.
///
/// Every algorithm in this crate is generic over this trait, which is what
/// makes their results independent of the storage width.
///
/// # Panics
///
/// The decoding functions take offsets that the caller has already checked:
/// [`decode`](Self::decode) requires `offset < units.len()` and
/// [`decode_back`](Self::decode_back) requires `0 < offset <= units.len()`.
/// Anything else panics.
pub trait CodeUnit: Copy + Eq + Ord + fmt::Debug + Send + Sync + 'static {
    /// The encoding these units belong to.
    const ENCODING: Encoding;

    /// The longest sequence one scalar can occupy.
    const MAX_UNITS: usize;

    /// Decodes the scalar starting at `offset`.
    fn decode(units: &[Self], offset: usize) -> CharInfo;

    /// Returns the start offset of the scalar that ends at `offset`.
    ///
    /// If a well-formed sequence ends exactly at `offset` its start is
    /// returned, otherwise `offset - 1`.
    fn decode_back(units: &[Self], offset: usize) -> usize;

    /// Appends the encoding of `ch` to `out`.
    fn encode(ch: char, out: &mut Vec<Self>);

    /// Whether `offset` is a position forward iteration from the start of
    /// `units` would visit: the end of the buffer, or an offset no
    /// well-formed multi-unit sequence straddles.
    fn is_boundary(units: &[Self], offset: usize) -> bool {
        if offset > units.len() {
            return false;
        }
        (1..Self::MAX_UNITS)
            .take_while(|&k| k <= offset)
            .all(|k| {
                let info = Self::decode(units, offset - k);
                !info.valid || info.units() <= k
            })
    }
}

#[inline]
fn check_back(len: usize, offset: usize) {
    assert!(
        offset > 0 && offset <= len,
        "cannot decode backward from offset {offset} (buffer length {len})"
    );
}

impl CodeUnit for u8 {
    const ENCODING: Encoding = Encoding::Utf8;
    const MAX_UNITS: usize = 4;

    #[inline]
    fn decode(units: &[u8], offset: usize) -> CharInfo {
        let lead = units[offset];
        if lead.is_ascii() {
            return CharInfo::scalar(char::from(lead), 1);
        }
        match bstr::decode_utf8(&units[offset..]) {
            (Some(ch), len) => CharInfo::scalar(ch, len),
            (None, _) => CharInfo::INVALID,
        }
    }

    #[inline]
    fn decode_back(units: &[u8], offset: usize) -> usize {
        check_back(units.len(), offset);
        if units[offset - 1].is_ascii() {
            return offset - 1;
        }
        match bstr::decode_last_utf8(&units[..offset]) {
            (Some(_), len) => offset - len,
            (None, _) => offset - 1,
        }
    }

    fn encode(ch: char, out: &mut Vec<u8>) {
        let mut tmp = [0u8; 4];
        out.extend_from_slice(ch.encode_utf8(&mut tmp).as_bytes());
    }
}

const fn is_high_surrogate(u: u16) -> bool {
    matches!(u, 0xD800..=0xDBFF)
}

const fn is_low_surrogate(u: u16) -> bool {
    matches!(u, 0xDC00..=0xDFFF)
}

impl CodeUnit for u16 {
    const ENCODING: Encoding = Encoding::Utf16;
    const MAX_UNITS: usize = 2;

    #[inline]
    fn decode(units: &[u16], offset: usize) -> CharInfo {
        match char::decode_utf16(units[offset..].iter().copied()).next() {
            Some(Ok(ch)) => CharInfo::scalar(ch, ch.len_utf16()),
            _ => CharInfo::INVALID,
        }
    }

    #[inline]
    fn decode_back(units: &[u16], offset: usize) -> usize {
        check_back(units.len(), offset);
        if offset >= 2 && is_low_surrogate(units[offset - 1]) && is_high_surrogate(units[offset - 2])
        {
            offset - 2
        } else {
            offset - 1
        }
    }

    fn encode(ch: char, out: &mut Vec<u16>) {
        let mut tmp = [0u16; 2];
        out.extend_from_slice(ch.encode_utf16(&mut tmp));
    }
}

impl CodeUnit for u32 {
    const ENCODING: Encoding = Encoding::Utf32;
    const MAX_UNITS: usize = 1;

    #[inline]
    fn decode(units: &[u32], offset: usize) -> CharInfo {
        char::from_u32(units[offset]).map_or(CharInfo::INVALID, |ch| CharInfo::scalar(ch, 1))
    }

    #[inline]
    fn decode_back(units: &[u32], offset: usize) -> usize {
        check_back(units.len(), offset);
        offset - 1
    }

    fn encode(ch: char, out: &mut Vec<u32>) {
        out.push(u32::from(ch));
    }
}

/// Walks `units` forward and backward, panicking unless both walks visit the
/// same offsets and every visited offset is a boundary. Returns the number of
/// scalars.
#[cfg(any(test, feature = "fuzzing"))]
#[doc(hidden)]
pub fn assert_symmetric_walk<U: CodeUnit>(units: &[U]) -> usize {
    let mut forward = Vec::new();
    let mut offset = 0;
    while offset < units.len() {
        assert!(U::is_boundary(units, offset), "forward offset {offset} is not a boundary");
        forward.push(offset);
        let info = U::decode(units, offset);
        assert!(info.len >= 1, "no progress at {offset}");
        offset += info.units();
    }
    assert_eq!(offset, units.len(), "forward walk overshot the buffer");

    let mut backward = Vec::with_capacity(forward.len());
    let mut offset = units.len();
    while offset > 0 {
        offset = U::decode_back(units, offset);
        backward.push(offset);
    }
    backward.reverse();

    assert_eq!(forward, backward, "forward and backward walks disagree");
    forward.len()
}
