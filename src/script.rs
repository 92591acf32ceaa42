//! Persian / Arabic script data: character classes, numeral tables and the
//! canonicalization table used by [`CanonicalizeChars`](crate::CanonicalizeChars).

pub mod data;

use std::borrow::Cow;

pub const ZWNJ: char = '\u{200C}';
pub const RLM: char = '\u{200F}';
pub const KASHIDA: char = '\u{0640}';

/// Index-aligned numeral tables, 0–9.
pub const PERSIAN_DIGITS: [char; 10] = ['۰', '۱', '۲', '۳', '۴', '۵', '۶', '۷', '۸', '۹'];
pub const ARABIC_DIGITS: [char; 10] = ['٠', '١', '٢', '٣', '٤', '٥', '٦', '٧', '٨', '٩'];
pub const LATIN_DIGITS: [char; 10] = ['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];

/// Canonical replacement for `c`, if the table has one.
#[inline(always)]
pub fn canonical(c: char) -> Option<&'static str> {
    data::CANONICAL.get(&c).copied()
}

#[inline(always)]
pub const fn is_persian_digit(c: char) -> bool {
    matches!(c, '۰'..='۹')
}

#[inline(always)]
pub const fn is_arabic_digit(c: char) -> bool {
    matches!(c, '٠'..='٩')
}

/// ASCII `[A-Za-z0-9_]`.
#[inline(always)]
pub const fn is_latin_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Letters of the Arabic block as used in Persian text, after canonicalization.
#[inline(always)]
pub const fn is_persian_letter(c: char) -> bool {
    let cp = c as u32;
    if cp < 0x0621 || cp > 0x06FF {
        return false;
    }
    matches!(cp,
        0x0621..=0x063A |
        0x0641..=0x064A |
        0x066E..=0x06D3 |
        0x06D5 |
        0x06FA..=0x06FC |
        0x06FF
    )
}

/// Letters that never join the following letter, so a ZWNJ after them is
/// redundant.
#[inline(always)]
pub const fn is_non_connecting(c: char) -> bool {
    matches!(
        c,
        'ا' | 'آ' | 'أ' | 'إ' | 'ة' | 'د' | 'ذ' | 'ر' | 'ز' | 'ژ' | 'و' | 'ؤ'
    )
}

/// Combining harakat and hamza marks. They sit on the preceding letter and do
/// not change how it joins.
#[inline(always)]
pub const fn is_arabic_mark(c: char) -> bool {
    matches!(c, '\u{064B}'..='\u{065F}' | '\u{0670}')
}

/// The last letter before `end`, skipping combining marks.
pub fn base_letter_before(text: &str, end: usize) -> Option<char> {
    text[..end].chars().rev().find(|&c| !is_arabic_mark(c))
}

#[inline(always)]
fn digit_value(c: char) -> Option<usize> {
    match c {
        '0'..='9' => Some(c as usize - '0' as usize),
        '۰'..='۹' => Some(c as usize - '۰' as usize),
        '٠'..='٩' => Some(c as usize - '٠' as usize),
        _ => None,
    }
}

fn map_digits<'a>(text: &'a str, target: &[char; 10]) -> Cow<'a, str> {
    let needs = |c: char| digit_value(c).is_some_and(|d| target[d] != c);
    let Some(first) = text.find(needs) else {
        return Cow::Borrowed(text);
    };
    let mut out = String::with_capacity(text.len() + 16);
    out.push_str(&text[..first]);
    out.extend(
        text[first..]
            .chars()
            .map(|c| digit_value(c).map_or(c, |d| target[d])),
    );
    Cow::Owned(out)
}

/// Latin and Arabic-indic digits → Persian digits.
pub fn to_persian_digits(text: &str) -> Cow<'_, str> {
    map_digits(text, &PERSIAN_DIGITS)
}

/// Persian and Arabic-indic digits → Latin digits.
pub fn to_latin_digits(text: &str) -> Cow<'_, str> {
    map_digits(text, &LATIN_DIGITS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn canonical_rows_are_disjoint_from_outputs() {
        let outputs: HashSet<char> = data::CANONICAL
            .values()
            .flat_map(|s| s.chars())
            .collect();
        for key in data::CANONICAL.keys() {
            assert!(
                !outputs.contains(key),
                "U+{:04X} is both a key and part of a replacement",
                *key as u32
            );
        }
    }

    #[test]
    fn pipeline_output_characters_are_not_canonicalized_away() {
        for c in ['،', '؛', '؟', '٪', '«', '»', '…', '–', '—', '\u{0654}', ZWNJ, KASHIDA] {
            assert_eq!(canonical(c), None, "U+{:04X}", c as u32);
        }
        for &c in &PERSIAN_DIGITS {
            assert_eq!(canonical(c), None);
        }
    }

    #[test]
    fn arabic_variants_map_to_persian_letters() {
        assert_eq!(canonical('ك'), Some("ک"));
        assert_eq!(canonical('ي'), Some("ی"));
        assert_eq!(canonical('ى'), Some("ی"));
        assert_eq!(canonical('ة'), Some("ه"));
        assert_eq!(canonical('ۀ'), Some("ه"));
        assert_eq!(canonical('\u{FEFB}'), Some("لا"));
        assert_eq!(canonical('\u{FDFC}'), Some("ریال"));
        assert_eq!(canonical('\u{FDFA}'), Some("صلی الله علیه وسلم"));
        assert_eq!(canonical('\u{0610}'), Some(""));
        assert_eq!(canonical('ک'), None);
        assert_eq!(canonical('a'), None);
    }

    #[test]
    fn every_replacement_is_canonical_persian() {
        for value in data::CANONICAL.values() {
            for c in value.chars() {
                assert!(
                    c == ' ' || is_persian_letter(c),
                    "unexpected U+{:04X} in replacement",
                    c as u32
                );
            }
        }
    }

    #[test]
    fn digit_helpers_go_both_ways() {
        assert_eq!(to_persian_digits("12 ٣٤"), "۱۲ ۳۴");
        assert_eq!(to_latin_digits("۱۲ ٣٤"), "12 34");
        assert!(matches!(to_persian_digits("۱۲"), Cow::Borrowed(_)));
        assert!(matches!(to_latin_digits("abc"), Cow::Borrowed(_)));
    }

    #[test]
    fn letter_classes() {
        assert!(is_persian_letter('پ'));
        assert!(is_persian_letter('ی'));
        assert!(!is_persian_letter('۱'));
        assert!(!is_persian_letter('،'));
        assert!(!is_persian_letter('ـ'));
        assert!(is_non_connecting('ر'));
        assert!(!is_non_connecting('ب'));
        assert_eq!(base_letter_before("خانهٔ", "خانهٔ".len()), Some('ه'));
        assert_eq!(base_letter_before("", 0), None);
    }
}
