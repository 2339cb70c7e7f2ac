#![expect(missing_docs)]

use core::fmt::Write;

use unitext::{CodeUnit, UtfIter, find_char, utf_begin, utf_end, utf_range};

/// One line per scalar read forward (offset, units consumed, value), then the
/// offsets a backward walk visits.
fn render_walk<U: CodeUnit>(units: &[U]) -> String {
    let mut out = String::new();
    let mut it = utf_begin(units);
    while !it.is_end() {
        let info = it.info();
        writeln!(
            out,
            "{:02} +{} U+{:04X}{}",
            it.offset(),
            info.len,
            u32::from(info.ch),
            if info.valid { "" } else { " invalid" }
        )
        .unwrap();
        it.advance();
    }

    let mut back = Vec::new();
    let mut it = utf_end(units);
    while !it.is_begin() {
        it.retreat();
        back.push(it.offset().to_string());
    }
    write!(out, "back {}", back.join(" ")).unwrap();
    out
}

#[test]
fn snapshot_malformed_utf8_walk() {
    // Truncated, overlong, encoded-surrogate and out-of-range sequences between
    // well-formed one-, three- and four-byte scalars.
    let bytes: &[u8] = b"A\xE2\x82\xACB\xE2\x82C\xF0\x9D\x84\x9E\xC0\x80\xED\xA0\x80\xF4\x90\x80\x80z";
    insta::assert_snapshot!(render_walk(bytes), @"
    00 +1 U+0041
    01 +3 U+20AC
    04 +1 U+0042
    05 +1 U+FFFD invalid
    06 +1 U+FFFD invalid
    07 +1 U+0043
    08 +4 U+1D11E
    12 +1 U+FFFD invalid
    13 +1 U+FFFD invalid
    14 +1 U+FFFD invalid
    15 +1 U+FFFD invalid
    16 +1 U+FFFD invalid
    17 +1 U+FFFD invalid
    18 +1 U+FFFD invalid
    19 +1 U+FFFD invalid
    20 +1 U+FFFD invalid
    21 +1 U+007A
    back 21 20 19 18 17 16 15 14 13 12 8 7 6 5 4 1 0
    ");
}

#[test]
fn snapshot_malformed_utf16_walk() {
    let units: &[u16] = &[0x61, 0xD834, 0xDD1E, 0xDC00, 0xD800, 0x62];
    insta::assert_snapshot!(render_walk(units), @"
    00 +1 U+0061
    01 +2 U+1D11E
    03 +1 U+FFFD invalid
    04 +1 U+FFFD invalid
    05 +1 U+0062
    back 5 4 3 1 0
    ");
}

#[test]
fn snapshot_debug_and_errors() {
    let text = "€uro";
    let r = utf_range(text);
    insta::assert_debug_snapshot!(r, @"
    UtfRange {
        encoding: Utf8,
        begin: 0,
        end: 6,
    }
    ");
    insta::assert_debug_snapshot!(find_char(text, 'r'), @"
    UtfIter {
        encoding: Utf8,
        offset: 4,
        len: 6,
    }
    ");
    insta::assert_snapshot!(
        UtfIter::try_at(text.as_bytes(), 1).unwrap_err().to_string(),
        @"offset 1 is not a codepoint boundary (buffer length 6)"
    );
}
