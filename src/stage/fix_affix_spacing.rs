//! stage/fix_affix_spacing.rs
//! Joins the verbal prefixes `می` / `نمی` and the suffixes `تر`, `ها`, `های`
//! to their word with a ZWNJ (or nothing, after a non-connecting letter).

use crate::{
    context::Context,
    script::{ZWNJ, base_letter_before, is_non_connecting, is_persian_letter},
    stage::{Stage, StageError, rewrite_matches},
};
use memchr::memmem;
use regex::Regex;
use std::{borrow::Cow, sync::LazyLock};

static PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(^|\s)(ن?می)( +)").expect("valid prefix regex"));
static SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" +(تر|های?)").expect("valid suffix regex"));

/// What goes between a word ending in `prev` and a suffix, or `None` when the
/// word is not Persian and the spacing is left as it is.
#[inline(always)]
fn joiner_after(prev: Option<char>) -> Option<&'static str> {
    match prev {
        Some(c) if is_persian_letter(c) && is_non_connecting(c) => Some(""),
        Some(c) if is_persian_letter(c) => Some("\u{200C}"),
        _ => None,
    }
}

/// Whether a ZWNJ placed before `c` survives the joiner cleanup.
#[inline(always)]
fn keeps_joiner(c: char) -> bool {
    !(c.is_whitespace()
        || c == ZWNJ
        || c == '_'
        || c.is_ascii_alphanumeric()
        || "[].،«»:()؛؟?;$!@-=+\\".contains(c))
}

/// Affix spacing: `می روم` → `می‌روم`, `کتاب ها` → `کتاب‌ها`.
///
/// - `fix_perfix_spacing`: `می` / `نمی` standing as a word, followed by spaces
///   and a character a joiner may precede (a letter or a Persian digit, not
///   Latin text or punctuation), get a ZWNJ instead of the spaces.
/// - `fix_suffix_spacing`: spaces before `تر`, `ها`, `های` are replaced by a
///   ZWNJ after a connecting letter, and removed after a non-connecting one
///   (`زیبا تر` → `زیباتر`). `ها`/`های` must end a word. Nothing is done
///   after a non-Persian word.
///
/// Neither rule consumes the whitespace that follows, so chains such as
/// `بزرگ تر ها` are handled in one pass.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixAffixSpacing;

impl Stage for FixAffixSpacing {
    fn name(&self) -> &'static str {
        "fix_affix_spacing"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, ctx: &Context) -> Result<bool, StageError> {
        let o = &ctx.options;
        let bytes = text.as_bytes();
        Ok((o.fix_prefix_spacing && memmem::find(bytes, "می ".as_bytes()).is_some())
            || (o.fix_suffix_spacing
                && (memmem::find(bytes, " تر".as_bytes()).is_some()
                    || memmem::find(bytes, " ها".as_bytes()).is_some())))
    }

    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        if !self.needs_apply(&text, ctx)? {
            return Ok(text);
        }
        let o = &ctx.options;
        let mut text = text;

        if o.fix_prefix_spacing {
            text = rewrite_matches(text, &PREFIX, |caps, hay| {
                let next = hay[caps.get_match().end()..].chars().next()?;
                keeps_joiner(next).then(|| format!("{}{}{ZWNJ}", &caps[1], &caps[2]))
            });
        }

        if o.fix_suffix_spacing {
            text = rewrite_matches(text, &SUFFIX, |caps, hay| {
                let m = caps.get_match();
                let suffix = &caps[1];
                if suffix.starts_with("ها")
                    && !hay[m.end()..].chars().next().is_some_and(char::is_whitespace)
                {
                    return None;
                }
                let joiner = joiner_after(base_letter_before(hay, m.start()))?;
                Some(format!("{joiner}{suffix}"))
            });
        }

        Ok(text)
    }
}

#[cfg(test)]
use crate::testing::stage_contract::StageTestConfig;

#[cfg(test)]
impl StageTestConfig for FixAffixSpacing {
    fn samples() -> &'static [&'static str] {
        &[
            "می روم",
            "نمی دانم",
            "کتاب ها را",
            "بزرگ تر ها را",
            "درخت های بلند",
            "این می",
            "Hello World",
            "",
        ]
    }

    fn should_pass_through() -> &'static [&'static str] {
        &[
            "hello",
            "می\u{200c}روم",
            "کتاب\u{200c}ها را",
            "کتاب ها",
            "book ها را",
            "می 5",
            "",
        ]
    }

    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[
            ("می روم", "می\u{200c}روم"),
            ("نمی دانم", "نمی\u{200c}دانم"),
            ("می  خواهم", "می\u{200c}خواهم"),
            ("می ۵", "می\u{200c}۵"),
            ("کتاب ها را", "کتاب\u{200c}ها را"),
            ("بزرگ تر", "بزرگ\u{200c}تر"),
            ("زیبا تر", "زیباتر"),
            ("کار ها را", "کارها را"),
            ("درخت های بلند", "درخت\u{200c}های بلند"),
        ]
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::Options;

    fn apply(input: &str) -> String {
        FixAffixSpacing
            .apply(Cow::Borrowed(input), &Context::default())
            .unwrap()
            .into_owned()
    }

    #[test]
    fn prefix_must_stand_alone() {
        assert_eq!(apply("کمی راه"), "کمی راه");
        assert_eq!(apply("او می رود"), "او می\u{200c}رود");
        assert_eq!(apply("خط\nمی رود"), "خط\nمی\u{200c}رود");
    }

    #[test]
    fn prefix_joins_anything_a_joiner_may_precede() {
        assert_eq!(apply("نمی ۲۰"), "نمی\u{200c}۲۰");
        assert_eq!(apply("می «رود»"), "می «رود»");
        assert_eq!(apply("می abc"), "می abc");
        assert!(keeps_joiner('۵'));
        assert!(!keeps_joiner('5'));
        assert!(!keeps_joiner('؟'));
    }

    #[test]
    fn suffix_chain_in_one_pass() {
        assert_eq!(apply("بزرگ تر ها را"), "بزرگ\u{200c}ترها را");
        assert_eq!(apply("تلخ تر های"), "تلخ\u{200c}تر های");
    }

    #[test]
    fn marks_on_the_last_letter_are_skipped() {
        assert_eq!(apply("خانهٔ ها را"), "خانهٔ\u{200c}ها را");
    }

    #[test]
    fn ha_must_end_the_word() {
        assert_eq!(apply("کتاب هاله"), "کتاب هاله");
    }

    #[test]
    fn flags_are_separate() {
        let ctx = Context::with_modified(Options::default(), |o| o.fix_suffix_spacing = false);
        let out = FixAffixSpacing
            .apply(Cow::Borrowed("می روم کتاب ها را"), &ctx)
            .unwrap();
        assert_eq!(out, "می\u{200c}روم کتاب ها را");
    }

    #[test]
    fn joiner_depends_on_the_letter() {
        assert_eq!(joiner_after(Some('ب')), Some("\u{200C}"));
        assert_eq!(joiner_after(Some('ر')), Some(""));
        assert_eq!(joiner_after(Some('k')), None);
        assert_eq!(joiner_after(None), None);
    }
}
