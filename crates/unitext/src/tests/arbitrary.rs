use alloc::{boxed::Box, string::String, vec::Vec};

use quickcheck::{Arbitrary, Gen};

use crate::{CodeUnit, char_is_unicode};

/// Characters that make searches and whitespace skipping interesting: ASCII,
/// the ASCII and wide spaces, and two- three- and four-byte scalars.
const ALPHABET: &[char] = &[
    'a', 'b', 'c', ' ', '\t', '\n', '\u{A0}', '\u{3000}', 'é', '€', '∈', '𝄞',
];

/// A string of 1 to 10 scalar values.
///
/// Half the characters come from [`ALPHABET`] so that generated patterns
/// actually occur in generated subjects; the rest are drawn from the whole
/// codepoint range, surrogates excluded.
#[derive(Debug, Clone)]
pub(crate) struct Scalars(pub String);

impl Arbitrary for Scalars {
    fn arbitrary(g: &mut Gen) -> Self {
        let len = 1 + usize::arbitrary(g) % 10;
        let mut s = String::new();
        let mut n = 0;
        while n < len {
            if bool::arbitrary(g) {
                s.push(*g.choose(ALPHABET).unwrap());
                n += 1;
                continue;
            }
            let value = u32::arbitrary(g) % 0x11_0000;
            if char_is_unicode(value) {
                s.push(char::from_u32(value).unwrap());
                n += 1;
            }
        }
        Self(s)
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        let chars: Vec<char> = self.0.chars().collect();
        if chars.len() <= 1 {
            return Box::new(core::iter::empty());
        }
        Box::new((0..chars.len()).map(move |skip| {
            Self(
                chars
                    .iter()
                    .enumerate()
                    .filter_map(|(i, &ch)| (i != skip).then_some(ch))
                    .collect(),
            )
        }))
    }
}

/// Code units with a list of values worth generating more often than chance
/// would: lead and continuation bytes, surrogates, and the edges of the
/// scalar range.
pub(crate) trait InterestingUnit: CodeUnit + Arbitrary {
    const INTERESTING: &'static [Self];
}

impl InterestingUnit for u8 {
    const INTERESTING: &'static [u8] = &[
        0x00, 0x41, 0x7F, 0x80, 0x82, 0x8F, 0x90, 0x9F, 0xA0, 0xBF, 0xC0, 0xC1, 0xC2, 0xDF,
        0xE0, 0xE2, 0xED, 0xEF, 0xF0, 0xF4, 0xF5, 0xFF,
    ];
}

impl InterestingUnit for u16 {
    const INTERESTING: &'static [u16] = &[
        0x0041, 0x00E9, 0x20AC, 0xD800, 0xD834, 0xDBFF, 0xDC00, 0xDD1E, 0xDFFF, 0xFFFD, 0xFFFF,
    ];
}

impl InterestingUnit for u32 {
    const INTERESTING: &'static [u32] = &[
        0x41, 0x20AC, 0xD800, 0xDFFF, 0x1_D11E, 0x10_FFFF, 0x11_0000, u32::MAX,
    ];
}

/// An arbitrary, usually malformed, buffer of code units.
#[derive(Debug, Clone)]
pub(crate) struct Units<U>(pub Vec<U>);

impl<U: InterestingUnit> Arbitrary for Units<U> {
    fn arbitrary(g: &mut Gen) -> Self {
        let len = usize::arbitrary(g) % 24;
        let units = (0..len)
            .map(|_| {
                if bool::arbitrary(g) {
                    *g.choose(U::INTERESTING).unwrap()
                } else {
                    U::arbitrary(g)
                }
            })
            .collect();
        Self(units)
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        Box::new(self.0.shrink().map(Self))
    }
}
