//! Single-codepoint property predicates and codepoint sets.

use alloc::vec::Vec;

/// Whether `ch` has the Unicode `White_Space` property.
///
/// This is the classifier used by [`skipws`](crate::skipws). It covers the
/// ASCII controls `\t \n \x0B \x0C \r`, space, `U+0085`, `U+00A0`, `U+1680`,
/// `U+2000..=U+200A`, `U+2028`, `U+2029`, `U+202F`, `U+205F` and `U+3000`.
#[inline]
#[must_use]
pub fn char_is_whitespace(ch: char) -> bool {
    ch.is_whitespace()
}

/// Whether `value` is a Unicode scalar value (not a surrogate, at most
/// `U+10FFFF`).
#[inline]
#[must_use]
pub const fn char_is_unicode(value: u32) -> bool {
    char::from_u32(value).is_some()
}

/// An immutable set of codepoints, used by the `find_*_of` family.
///
/// Built once from the characters of a pattern; membership is a binary
/// search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharSet {
    chars: Vec<char>,
}

impl CharSet {
    /// Returns true if `ch` is in the set.
    #[inline]
    #[must_use]
    pub fn contains(&self, ch: char) -> bool {
        self.chars.binary_search(&ch).is_ok()
    }

    /// Number of distinct codepoints in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Returns true if the set has no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}

impl FromIterator<char> for CharSet {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        let mut chars: Vec<char> = iter.into_iter().collect();
        chars.sort_unstable();
        chars.dedup();
        Self { chars }
    }
}
