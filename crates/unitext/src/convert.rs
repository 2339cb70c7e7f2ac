//! Transcoding between the three widths, and validation.
//!
//! Every function reads its input through [`UtfRange`], so the input may be
//! anything the algorithms accept. By default malformed units become
//! [`REPLACEMENT_CHARACTER`](crate::REPLACEMENT_CHARACTER), one per unit, the
//! same as iteration sees them. [`recode_with`] and [`validate`] can report
//! them instead.
//!
//! ```rust
//! use unitext::convert;
//!
//! let utf16 = convert::to_utf16("€uro 𝄞");
//! assert_eq!(utf16.len(), 7);
//! assert_eq!(convert::to_utf8(&utf16), "€uro 𝄞");
//! assert_eq!(convert::to_utf8(b"a\xffb"), "a\u{FFFD}b");
//! ```

use alloc::{string::String, vec::Vec};

use crate::{
    decode::{CodeUnit, Encoding},
    error::UtfError,
    iter::UtfRange,
    options::{InvalidPolicy, TranscodeOptions},
};

/// Walks `range`, handing each scalar to `push`. Returns the number of
/// replaced units, or the first malformed offset under
/// [`InvalidPolicy::Reject`].
fn transcode<U: CodeUnit>(
    range: UtfRange<'_, U>,
    policy: InvalidPolicy,
    target: Encoding,
    mut push: impl FnMut(char),
) -> Result<usize, UtfError> {
    let end = range.end();
    let mut it = range.begin();
    let mut replaced = 0;
    while it.offset() < end.offset() {
        let info = it.info();
        if !info.valid {
            if policy == InvalidPolicy::Reject {
                log::trace!(
                    "rejected malformed {} unit at offset {}",
                    U::ENCODING,
                    it.offset()
                );
                return Err(UtfError::InvalidSequence {
                    encoding: U::ENCODING,
                    offset: it.offset(),
                });
            }
            replaced += 1;
        }
        push(info.ch);
        it.advance();
    }
    if replaced > 0 {
        log::debug!(
            "replaced {replaced} malformed {} unit(s) while converting to {target}",
            U::ENCODING
        );
    }
    Ok(replaced)
}

/// Re-encodes `src` as `V` units, replacing malformed input.
///
/// ```rust
/// use unitext::convert::recode;
///
/// let wide: Vec<u32> = recode::<u16, u32>(&[0x20AC, 0xD834, 0xDD1E]);
/// assert_eq!(wide, [0x20AC, 0x1D11E]);
/// ```
#[must_use]
pub fn recode<'a, U: CodeUnit, V: CodeUnit>(src: impl Into<UtfRange<'a, U>>) -> Vec<V> {
    let range: UtfRange<'a, U> = src.into();
    let mut out = Vec::with_capacity(range.units().len());
    // Replacing never fails.
    let _ = transcode(range, InvalidPolicy::Replace, V::ENCODING, |ch| {
        V::encode(ch, &mut out);
    });
    out
}

/// Re-encodes `src` as `V` units under `options`.
///
/// # Errors
///
/// [`UtfError::InvalidSequence`] with the offset of the first malformed unit
/// when `options.invalid` is [`InvalidPolicy::Reject`].
pub fn recode_with<'a, U: CodeUnit, V: CodeUnit>(
    src: impl Into<UtfRange<'a, U>>,
    options: TranscodeOptions,
) -> Result<Vec<V>, UtfError> {
    let range: UtfRange<'a, U> = src.into();
    let mut out = Vec::with_capacity(range.units().len());
    transcode(range, options.invalid, V::ENCODING, |ch| {
        V::encode(ch, &mut out);
    })?;
    Ok(out)
}

/// Decodes `src` into a `String`, replacing malformed input.
#[must_use]
pub fn to_utf8<'a, U: CodeUnit>(src: impl Into<UtfRange<'a, U>>) -> String {
    let range: UtfRange<'a, U> = src.into();
    let mut out = String::with_capacity(range.units().len());
    let _ = transcode(range, InvalidPolicy::Replace, Encoding::Utf8, |ch| out.push(ch));
    out
}

/// Re-encodes `src` as UTF-16, replacing malformed input.
#[must_use]
pub fn to_utf16<'a, U: CodeUnit>(src: impl Into<UtfRange<'a, U>>) -> Vec<u16> {
    recode(src)
}

/// Re-encodes `src` as UTF-32, replacing malformed input.
#[must_use]
pub fn to_utf32<'a, U: CodeUnit>(src: impl Into<UtfRange<'a, U>>) -> Vec<u32> {
    recode(src)
}

/// Checks that `src` is well-formed.
///
/// Offsets in the error count code units from the start of the underlying
/// buffer, not of `src`.
///
/// # Errors
///
/// [`UtfError::InvalidSequence`] at the first malformed unit.
pub fn validate<'a, U: CodeUnit>(src: impl Into<UtfRange<'a, U>>) -> Result<(), UtfError> {
    let range: UtfRange<'a, U> = src.into();
    transcode(range, InvalidPolicy::Reject, U::ENCODING, |_| {})?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use alloc::{string::ToString, vec};

    use super::*;
    use crate::{UtfIter, find_char, utf_end};

    const STRICT: TranscodeOptions = TranscodeOptions {
        invalid: InvalidPolicy::Reject,
    };

    #[test]
    fn converts_between_all_widths() {
        let text = "€uro ∈lement 𝄞";
        let utf16: Vec<u16> = text.encode_utf16().collect();
        let utf32: Vec<u32> = text.chars().map(u32::from).collect();

        assert_eq!(to_utf16(text), utf16);
        assert_eq!(to_utf32(text), utf32);
        assert_eq!(to_utf8(&utf16), text);
        assert_eq!(to_utf8(&utf32), text);
        assert_eq!(recode::<u16, u32>(&utf16), utf32);
        assert_eq!(recode::<u32, u16>(&utf32), utf16);
        assert_eq!(recode::<u32, u8>(&utf32), text.as_bytes());
        assert_eq!(recode_with::<u16, u8>(&utf16, STRICT), Ok(text.as_bytes().to_vec()));
    }

    #[test]
    fn replaces_each_malformed_unit() {
        assert_eq!(to_utf8(b"a\xE2\x82b"), "a\u{FFFD}\u{FFFD}b");
        assert_eq!(to_utf8(&[0x61u16, 0xD800, 0x62]), "a\u{FFFD}b");
        assert_eq!(to_utf16(&[0x41u32, 0xDFFF, 0x11_0000]), vec![0x41, 0xFFFD, 0xFFFD]);
        assert_eq!(
            recode_with::<u8, u32>(b"\xC0\x80", TranscodeOptions::default()),
            Ok(vec![0xFFFD, 0xFFFD])
        );
    }

    #[test]
    fn strict_mode_reports_first_malformed_offset() {
        assert_eq!(
            recode_with::<u8, u16>(b"ok\xFFok\xFF", STRICT),
            Err(UtfError::InvalidSequence {
                encoding: Encoding::Utf8,
                offset: 2,
            })
        );
        assert_eq!(
            recode_with::<u16, u8>(&[0x61, 0x62, 0xDC00], STRICT),
            Err(UtfError::InvalidSequence {
                encoding: Encoding::Utf16,
                offset: 2,
            })
        );
        assert_eq!(
            validate(&[0x1F600u32, 0x11_0000]),
            Err(UtfError::InvalidSequence {
                encoding: Encoding::Utf32,
                offset: 1,
            })
        );
    }

    #[test]
    fn validate_accepts_well_formed_input() {
        assert_eq!(validate(""), Ok(()));
        assert_eq!(validate("€uro 𝄞"), Ok(()));
        assert_eq!(validate(&[0xD834u16, 0xDD1E]), Ok(()));
    }

    #[test]
    fn sub_range_offsets_are_absolute() {
        let bytes: &[u8] = b"\xFFab\xFFcd";
        let a = find_char(bytes, 'a');
        let tail = UtfRange::new(a, utf_end(bytes));
        assert_eq!(
            validate(tail.clone()),
            Err(UtfError::InvalidSequence {
                encoding: Encoding::Utf8,
                offset: 3,
            })
        );
        assert_eq!(to_utf8(tail), "ab\u{FFFD}cd");

        let clean = UtfRange::new(a, UtfIter::at(bytes, 3));
        assert_eq!(validate(clean), Ok(()));
    }

    #[test]
    fn error_messages_name_encoding_and_offset() {
        let err = validate(b"ab\x80").unwrap_err();
        assert_eq!(err.to_string(), "invalid UTF-8 sequence at offset 2");
    }
}
