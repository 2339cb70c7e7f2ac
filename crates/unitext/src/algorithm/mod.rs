//! Comparison, matching, searching and skipping over decoded text.
//!
//! Every function here is written against [`UtfIter`]/[`UtfRange`] only, so
//! results are the same whichever width backs the subject. Subjects and
//! patterns are taken as anything convertible to a [`UtfRange`]: slices,
//! arrays and `Vec`s of code units, `&str`/`&String` for UTF-8, or a range.
//! A pattern does not need to share the subject's width.
//!
//! Not-found convention
//! - Every `find_*` and [`search`] returns `range.end()` when nothing
//!   qualifies, in both scan directions, so "found" is always
//!   `result != range.end()`.
//!
//! Malformed units in a subject read as
//! [`REPLACEMENT_CHARACTER`](crate::REPLACEMENT_CHARACTER) and take part in
//! matching like any other scalar.

use alloc::vec::Vec;

use crate::{
    chars::{CharSet, char_is_whitespace},
    decode::CodeUnit,
    iter::{UtfIter, UtfRange},
};

/// Lexicographic "less than" over decoded scalars.
///
/// A proper prefix sorts before the longer string; a string never sorts
/// before itself.
///
/// ```rust
/// use unitext::compare;
///
/// let world: Vec<u16> = "world".encode_utf16().collect();
/// assert!(compare("Hello", &world));
/// assert!(compare("Hello", "Hello world"));
/// assert!(!compare("Hello", "Hello"));
/// ```
pub fn compare<'a, 'b, U: CodeUnit, V: CodeUnit>(
    a: impl Into<UtfRange<'a, U>>,
    b: impl Into<UtfRange<'b, V>>,
) -> bool {
    let a: UtfRange<'a, U> = a.into();
    let b: UtfRange<'b, V> = b.into();
    a.lt(b)
}

/// Matches `literal` at `it`.
///
/// On a complete match of a non-empty literal, moves `it` past the match and
/// returns true. Otherwise (mismatch, running into the end of the buffer, or
/// an empty literal) leaves `it` where it was and returns false.
pub fn expect<'b, U: CodeUnit, V: CodeUnit>(
    it: &mut UtfIter<'_, U>,
    literal: impl Into<UtfRange<'b, V>>,
) -> bool {
    let literal: UtfRange<'b, V> = literal.into();
    if literal.is_empty() {
        return false;
    }
    let mut cursor = *it;
    for ch in literal {
        if cursor.is_end() || cursor.get() != ch {
            return false;
        }
        cursor.advance();
    }
    *it = cursor;
    true
}

/// First position in `range` whose scalar satisfies `pred`, or `range.end()`.
pub fn find_if<'a, U: CodeUnit>(
    range: impl Into<UtfRange<'a, U>>,
    mut pred: impl FnMut(char) -> bool,
) -> UtfIter<'a, U> {
    let range: UtfRange<'a, U> = range.into();
    let end = range.end();
    let mut it = range.begin();
    while it.offset() < end.offset() {
        if pred(it.get()) {
            return it;
        }
        it.advance();
    }
    end
}

/// Last position in `range` whose scalar satisfies `pred`, or `range.end()`.
pub fn find_last_if<'a, U: CodeUnit>(
    range: impl Into<UtfRange<'a, U>>,
    mut pred: impl FnMut(char) -> bool,
) -> UtfIter<'a, U> {
    let range: UtfRange<'a, U> = range.into();
    let begin = range.begin();
    let end = range.end();
    let mut it = end;
    while it.offset() > begin.offset() {
        it.retreat();
        if pred(it.get()) {
            return it;
        }
    }
    end
}

/// First occurrence of `target`, or `range.end()`.
///
/// ```rust
/// use unitext::{distance, find_char, utf_begin};
///
/// let s = "€uro €uro €uro";
/// assert_eq!(distance(utf_begin(s), find_char(s, 'o')), 3);
/// assert_eq!(find_char(s, 'z'), unitext::utf_end(s));
/// ```
pub fn find_char<'a, U: CodeUnit>(range: impl Into<UtfRange<'a, U>>, target: char) -> UtfIter<'a, U> {
    find_if(range, |ch| ch == target)
}

/// Last occurrence of `target`, or `range.end()` (not `range.begin()`).
pub fn find_last_char<'a, U: CodeUnit>(
    range: impl Into<UtfRange<'a, U>>,
    target: char,
) -> UtfIter<'a, U> {
    find_last_if(range, |ch| ch == target)
}

fn char_set<'b, V: CodeUnit>(set: impl Into<UtfRange<'b, V>>) -> CharSet {
    let set: UtfRange<'b, V> = set.into();
    set.collect()
}

/// First scalar that is one of the characters of `set`, or `range.end()`.
pub fn find_first_of<'a, 'b, U: CodeUnit, V: CodeUnit>(
    range: impl Into<UtfRange<'a, U>>,
    set: impl Into<UtfRange<'b, V>>,
) -> UtfIter<'a, U> {
    let set = char_set(set);
    find_if(range, |ch| set.contains(ch))
}

/// First scalar that is none of the characters of `set`, or `range.end()`.
pub fn find_first_not_of<'a, 'b, U: CodeUnit, V: CodeUnit>(
    range: impl Into<UtfRange<'a, U>>,
    set: impl Into<UtfRange<'b, V>>,
) -> UtfIter<'a, U> {
    let set = char_set(set);
    find_if(range, |ch| !set.contains(ch))
}

/// Last scalar that is one of the characters of `set`, or `range.end()`.
pub fn find_last_of<'a, 'b, U: CodeUnit, V: CodeUnit>(
    range: impl Into<UtfRange<'a, U>>,
    set: impl Into<UtfRange<'b, V>>,
) -> UtfIter<'a, U> {
    let set = char_set(set);
    find_last_if(range, |ch| set.contains(ch))
}

/// Last scalar that is none of the characters of `set`, or `range.end()`.
pub fn find_last_not_of<'a, 'b, U: CodeUnit, V: CodeUnit>(
    range: impl Into<UtfRange<'a, U>>,
    set: impl Into<UtfRange<'b, V>>,
) -> UtfIter<'a, U> {
    let set = char_set(set);
    find_last_if(range, |ch| !set.contains(ch))
}

/// First position where `pattern` occurs as a contiguous run of scalars.
///
/// An empty pattern matches at `range.begin()`. Returns `range.end()` if there
/// is no match; a match may not extend past `range.end()`.
///
/// ```rust
/// use unitext::{distance, search, utf_begin};
///
/// let s: Vec<u32> = "€uro ∈lement".chars().map(u32::from).collect();
/// assert_eq!(distance(utf_begin(&s), search(&s, "∈lement")), 5);
/// assert_eq!(distance(utf_begin(&s), search(&s, "")), 0);
/// ```
pub fn search<'a, 'b, U: CodeUnit, V: CodeUnit>(
    range: impl Into<UtfRange<'a, U>>,
    pattern: impl Into<UtfRange<'b, V>>,
) -> UtfIter<'a, U> {
    let range: UtfRange<'a, U> = range.into();
    let pattern: UtfRange<'b, V> = pattern.into();
    let needle: Vec<char> = pattern.collect();
    let end = range.end();
    let mut start = range.begin();
    loop {
        if matches_at(start, end, &needle) {
            return start;
        }
        if start.offset() >= end.offset() {
            return end;
        }
        start.advance();
    }
}

fn matches_at<U: CodeUnit>(mut it: UtfIter<'_, U>, end: UtfIter<'_, U>, needle: &[char]) -> bool {
    for &ch in needle {
        if it.offset() >= end.offset() || it.get() != ch {
            return false;
        }
        it.advance();
    }
    true
}

/// Advances `it` over the run of scalars satisfying `pred` and returns how
/// many were skipped. Stops at the first other scalar or the end of the
/// buffer.
pub fn skip_while<U: CodeUnit>(it: &mut UtfIter<'_, U>, mut pred: impl FnMut(char) -> bool) -> usize {
    let mut skipped = 0;
    while !it.is_end() && pred(it.get()) {
        it.advance();
        skipped += 1;
    }
    skipped
}

/// Advances `it` over a run of whitespace (see
/// [`char_is_whitespace`](crate::char_is_whitespace)) and returns how many
/// scalars were skipped.
///
/// ```rust
/// use unitext::{skipws, utf_begin};
///
/// let s = " \r\n Hello \r\n ";
/// let mut it = utf_begin(s);
/// assert_eq!(skipws(&mut it), 4);
/// assert_eq!(it.get(), 'H');
/// ```
pub fn skipws<U: CodeUnit>(it: &mut UtfIter<'_, U>) -> usize {
    skip_while(it, char_is_whitespace)
}
