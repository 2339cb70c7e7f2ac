#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use unitext::{
    CodeUnit, UtfIter, assert_symmetric_walk, convert, distance, find_char, find_last_not_of,
    find_last_of, search, utf_begin, utf_range,
};

#[derive(Debug, Arbitrary)]
enum Subject {
    Utf8(Vec<u8>),
    Utf16(Vec<u16>),
    Utf32(Vec<u32>),
}

#[derive(Debug, Arbitrary)]
struct Case {
    subject: Subject,
    pattern: String,
    target: char,
}

fn index<U: CodeUnit>(units: &[U], it: UtfIter<'_, U>) -> isize {
    distance(utf_begin(units), it)
}

/// Results of the searches over `units`, as scalar indices.
fn searches<U: CodeUnit>(units: &[U], pattern: &str, target: char) -> [isize; 4] {
    [
        index(units, find_char(units, target)),
        index(units, find_last_of(units, pattern)),
        index(units, find_last_not_of(units, pattern)),
        index(units, search(units, pattern)),
    ]
}

fn check<U: CodeUnit>(units: &[U], case: &Case) {
    let scalars = assert_symmetric_walk(units);
    assert_eq!(utf_range(units).count(), scalars);
    assert_eq!(utf_range(units).rev().count(), scalars);

    // Malformed units are read as U+FFFD, so the replaced UTF-32 copy holds
    // the same scalars at the same indices.
    let wide = convert::to_utf32(units);
    assert_eq!(wide.len(), scalars);
    assert!(convert::validate(&wide).is_ok());
    assert_eq!(
        searches(units, &case.pattern, case.target),
        searches(&wide, &case.pattern, case.target)
    );
}

fuzz_target!(|case: Case| {
    match &case.subject {
        Subject::Utf8(units) => check(units, &case),
        Subject::Utf16(units) => check(units, &case),
        Subject::Utf32(units) => check(units, &case),
    }
});
