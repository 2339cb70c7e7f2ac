//! Positions and spans over a buffer of code units.
//!
//! [`UtfIter`] is a `(buffer, offset)` handle that decodes on demand.
//! [`UtfRange`] is a half-open span between two of them and the
//! [`Iterator`] over its `char`s.
//!
//! Both borrow the buffer, so neither can outlive it and the buffer cannot
//! change underneath them.
//!
//! Misuse (reading at the end, stepping past either end, positioning inside a
//! multi-unit sequence, mixing buffers) is a caller bug and panics. Malformed
//! units are not: they read as
//! [`REPLACEMENT_CHARACTER`](crate::REPLACEMENT_CHARACTER).

use alloc::{string::String, vec::Vec};
use core::{cmp::Ordering, fmt, iter::FusedIterator, ptr};

use crate::{
    decode::{CharInfo, CodeUnit},
    error::UtfError,
};

/// A decodable position within a buffer of code units.
///
/// The offset is always the buffer length or a boundary offset (see
/// [`CodeUnit::is_boundary`]). Two iterators are equal when they point into
/// the same buffer at the same offset; iterators into different buffers are
/// unordered.
#[derive(Clone, Copy)]
pub struct UtfIter<'a, U: CodeUnit> {
    units: &'a [U],
    offset: usize,
}

impl<'a, U: CodeUnit> UtfIter<'a, U> {
    /// An iterator at the first scalar of `units`.
    #[must_use]
    pub fn begin(units: &'a [U]) -> Self {
        Self { units, offset: 0 }
    }

    /// The end position of `units`.
    #[must_use]
    pub fn end(units: &'a [U]) -> Self {
        Self {
            units,
            offset: units.len(),
        }
    }

    /// An iterator at `offset`.
    ///
    /// # Panics
    ///
    /// If `offset` is not a boundary of `units`.
    #[must_use]
    pub fn at(units: &'a [U], offset: usize) -> Self {
        assert!(
            U::is_boundary(units, offset),
            "offset {offset} is not a codepoint boundary (buffer length {})",
            units.len()
        );
        Self { units, offset }
    }

    /// An iterator at `offset`, or [`UtfError::NotBoundary`] if `offset` falls
    /// inside a sequence or past the end.
    ///
    /// # Errors
    ///
    /// See above.
    pub fn try_at(units: &'a [U], offset: usize) -> Result<Self, UtfError> {
        if U::is_boundary(units, offset) {
            Ok(Self { units, offset })
        } else {
            log::trace!(
                "rejected {} offset {offset} (buffer length {})",
                U::ENCODING,
                units.len()
            );
            Err(UtfError::NotBoundary {
                offset,
                len: units.len(),
            })
        }
    }

    /// Offset in code units from the start of the buffer.
    #[inline]
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The buffer this iterator points into.
    #[inline]
    #[must_use]
    pub fn units(&self) -> &'a [U] {
        self.units
    }

    /// True at offset zero.
    #[inline]
    #[must_use]
    pub fn is_begin(&self) -> bool {
        self.offset == 0
    }

    /// True at the end of the buffer.
    #[inline]
    #[must_use]
    pub fn is_end(&self) -> bool {
        self.offset == self.units.len()
    }

    /// Decodes the scalar at this position.
    ///
    /// # Panics
    ///
    /// At the end of the buffer.
    #[inline]
    #[must_use]
    pub fn info(&self) -> CharInfo {
        assert!(
            !self.is_end(),
            "dereferenced an iterator at the end of its buffer (offset {})",
            self.offset
        );
        U::decode(self.units, self.offset)
    }

    /// The scalar at this position.
    ///
    /// # Panics
    ///
    /// At the end of the buffer.
    #[inline]
    #[must_use]
    pub fn get(&self) -> char {
        self.info().ch
    }

    /// Steps over the scalar at this position.
    ///
    /// # Panics
    ///
    /// At the end of the buffer.
    #[inline]
    pub fn advance(&mut self) {
        self.offset += self.info().units();
    }

    /// Steps back to the start of the previous scalar.
    ///
    /// # Panics
    ///
    /// At the start of the buffer.
    #[inline]
    pub fn retreat(&mut self) {
        assert!(
            !self.is_begin(),
            "retreated an iterator at the start of its buffer"
        );
        self.offset = U::decode_back(self.units, self.offset);
    }

    /// True if both iterators point into the same buffer.
    #[inline]
    #[must_use]
    pub fn same_buffer(&self, other: &Self) -> bool {
        ptr::eq(self.units, other.units)
    }
}

impl<U: CodeUnit> PartialEq for UtfIter<'_, U> {
    fn eq(&self, other: &Self) -> bool {
        self.offset == other.offset && self.same_buffer(other)
    }
}

impl<U: CodeUnit> Eq for UtfIter<'_, U> {}

impl<U: CodeUnit> PartialOrd for UtfIter<'_, U> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.same_buffer(other)
            .then(|| self.offset.cmp(&other.offset))
    }
}

impl<U: CodeUnit> fmt::Debug for UtfIter<'_, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UtfIter")
            .field("encoding", &U::ENCODING)
            .field("offset", &self.offset)
            .field("len", &self.units.len())
            .finish()
    }
}

/// Number of scalars from `first` to `last`, negative if `last` comes first.
///
/// Counts decode steps; there is no shortcut for the variable-width
/// encodings.
///
/// # Panics
///
/// If the iterators point into different buffers.
#[must_use]
#[expect(clippy::cast_possible_wrap)]
pub fn distance<U: CodeUnit>(first: UtfIter<'_, U>, last: UtfIter<'_, U>) -> isize {
    assert!(
        first.same_buffer(&last),
        "distance between iterators over different buffers"
    );
    // A slice never holds more than isize::MAX units.
    if first.offset <= last.offset {
        count_steps(first, last) as isize
    } else {
        -(count_steps(last, first) as isize)
    }
}

fn count_steps<U: CodeUnit>(mut from: UtfIter<'_, U>, to: UtfIter<'_, U>) -> usize {
    let mut n = 0;
    while from.offset < to.offset {
        from.advance();
        n += 1;
    }
    n
}

/// A half-open span `[begin, end)` of scalars within one buffer.
///
/// Iterating a range yields its `char`s and shrinks it from the front (or from
/// the back, via [`DoubleEndedIterator`]).
#[derive(Clone, PartialEq, Eq)]
pub struct UtfRange<'a, U: CodeUnit> {
    begin: UtfIter<'a, U>,
    end: UtfIter<'a, U>,
}

impl<'a, U: CodeUnit> UtfRange<'a, U> {
    /// The span between two iterators.
    ///
    /// # Panics
    ///
    /// If the iterators point into different buffers or `begin` is after
    /// `end`.
    #[must_use]
    pub fn new(begin: UtfIter<'a, U>, end: UtfIter<'a, U>) -> Self {
        assert!(
            begin.same_buffer(&end),
            "range over iterators from different buffers"
        );
        assert!(
            begin.offset <= end.offset,
            "range begin {} is after end {}",
            begin.offset,
            end.offset
        );
        Self { begin, end }
    }

    /// The whole of `units`.
    #[must_use]
    pub fn from_units(units: &'a [U]) -> Self {
        Self {
            begin: UtfIter::begin(units),
            end: UtfIter::end(units),
        }
    }

    /// First position of the span.
    #[inline]
    #[must_use]
    pub fn begin(&self) -> UtfIter<'a, U> {
        self.begin
    }

    /// One past the last position of the span. Also the "not found" result of
    /// every search over this range.
    #[inline]
    #[must_use]
    pub fn end(&self) -> UtfIter<'a, U> {
        self.end
    }

    /// True if the span holds no scalars.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.begin.offset == self.end.offset
    }

    /// The code units covered by the span.
    #[must_use]
    pub fn units(&self) -> &'a [U] {
        &self.begin.units[self.begin.offset..self.end.offset]
    }
}

impl<U: CodeUnit> Iterator for UtfRange<'_, U> {
    type Item = char;

    #[inline]
    fn next(&mut self) -> Option<char> {
        if self.is_empty() {
            return None;
        }
        let ch = self.begin.get();
        self.begin.advance();
        Some(ch)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end.offset - self.begin.offset;
        (remaining.div_ceil(U::MAX_UNITS), Some(remaining))
    }
}

impl<U: CodeUnit> DoubleEndedIterator for UtfRange<'_, U> {
    #[inline]
    fn next_back(&mut self) -> Option<char> {
        if self.is_empty() {
            return None;
        }
        self.end.retreat();
        Some(self.end.get())
    }
}

impl<U: CodeUnit> FusedIterator for UtfRange<'_, U> {}

impl<U: CodeUnit> fmt::Debug for UtfRange<'_, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UtfRange")
            .field("encoding", &U::ENCODING)
            .field("begin", &self.begin.offset)
            .field("end", &self.end.offset)
            .finish()
    }
}

impl<U: CodeUnit> fmt::Display for UtfRange<'_, U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.clone().try_for_each(|ch| fmt::Write::write_char(f, ch))
    }
}

impl<'a, U: CodeUnit> From<&'a [U]> for UtfRange<'a, U> {
    fn from(units: &'a [U]) -> Self {
        Self::from_units(units)
    }
}

impl<'a, U: CodeUnit, const N: usize> From<&'a [U; N]> for UtfRange<'a, U> {
    fn from(units: &'a [U; N]) -> Self {
        Self::from_units(units)
    }
}

impl<'a, U: CodeUnit> From<&'a Vec<U>> for UtfRange<'a, U> {
    fn from(units: &'a Vec<U>) -> Self {
        Self::from_units(units)
    }
}

impl<'a> From<&'a str> for UtfRange<'a, u8> {
    fn from(s: &'a str) -> Self {
        Self::from_units(s.as_bytes())
    }
}

impl<'a> From<&'a String> for UtfRange<'a, u8> {
    fn from(s: &'a String) -> Self {
        Self::from_units(s.as_bytes())
    }
}

/// First position of a buffer, string or range.
pub fn utf_begin<'a, U: CodeUnit>(src: impl Into<UtfRange<'a, U>>) -> UtfIter<'a, U> {
    let range: UtfRange<'a, U> = src.into();
    range.begin()
}

/// End position of a buffer, string or range.
pub fn utf_end<'a, U: CodeUnit>(src: impl Into<UtfRange<'a, U>>) -> UtfIter<'a, U> {
    let range: UtfRange<'a, U> = src.into();
    range.end()
}

/// The whole of a buffer or string as a range.
pub fn utf_range<'a, U: CodeUnit>(src: impl Into<UtfRange<'a, U>>) -> UtfRange<'a, U> {
    src.into()
}
