//! stage/fix_brace_spacing.rs
//! Spacing around brackets, quotes and sentence punctuation.

use crate::{
    context::Context,
    stage::{
        Stage, StageError,
        cleanup_marks::{collapse_repeated_marks, may_have_repeated_marks},
        replace_all, rewrite_matches,
    },
};
use regex::Regex;
use std::{borrow::Cow, sync::LazyLock};

/// Opening / closing pairs, in the order they are processed.
const PAIRS: [(char, char); 5] = [('(', ')'), ('[', ']'), ('{', '}'), ('“', '”'), ('«', '»')];

/// Characters that can trigger any rule of this stage.
const TRIGGERS: &[char] = &[
    '(', ')', '[', ']', '{', '}', '“', '”', '«', '»', ':', ';', ',', '؛', '،', '.', '؟', '!',
];

struct PairRules {
    /// Eats horizontal space and ZWNJ around the pair, and whitespace inside.
    outer: Regex,
    /// Trims ASCII whitespace just inside the pair.
    inner: Regex,
}

static PAIR_RULES: LazyLock<Vec<PairRules>> = LazyLock::new(|| {
    PAIRS
        .iter()
        .map(|&(open, close)| {
            let o = regex::escape(&open.to_string());
            let c = regex::escape(&close.to_string());
            PairRules {
                outer: Regex::new(&format!(
                    r"[ \t\x{{200C}}]*({o})\s*([^{c}]+?)\s*?({c})[ \t\x{{200C}}]*"
                ))
                .expect("valid pair regex"),
                inner: Regex::new(&format!(
                    r"({o})[\t\n\x0B\x0C\r ]*([^{c}]+?)[\t\n\x0B\x0C\r ]*?({c})"
                ))
                .expect("valid pair regex"),
            }
        })
        .collect()
});

static PUNCTUATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[ \t\x{200C}]*([:;,؛،.؟!])[ \t\x{200C}]*").expect("valid punctuation regex")
});
static CLOCK_TIME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([۰-۹]+):\s+([۰-۹]+)").expect("valid time regex"));
static SPACED_MARKS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[؟!](?:\s[؟!])+").expect("valid marks regex"));

/// Brace, quote and punctuation spacing, gated by
/// `fix_spacing_for_braces_and_quotes`.
///
/// For each of `()`, `[]`, `{}`, `“”`, `«»`: whitespace just inside the pair
/// is removed and exactly one space is put on each side. Sentence punctuation
/// loses the space before it and gets one after it, except between the two
/// halves of a Persian clock time (`۱۰:۳۰`). Runs such as `؟ !` are glued
/// together, and collapsed again when `cleanup_extra_marks` is on.
///
/// The surrounding spaces this stage leaves behind are squeezed by
/// [`NormalizeWhitespace`](crate::NormalizeWhitespace), which runs after it.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixBraceSpacing;

impl Stage for FixBraceSpacing {
    fn name(&self) -> &'static str {
        "fix_brace_spacing"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, ctx: &Context) -> Result<bool, StageError> {
        Ok(ctx.options.fix_spacing_for_braces_and_quotes && text.contains(TRIGGERS))
    }

    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        if !self.needs_apply(&text, ctx)? {
            return Ok(text);
        }
        // Text already in normal form goes through rules that undo each other
        // (pair spacing, `:` around clock times); hand the original back then.
        let original = match &text {
            Cow::Borrowed(s) => Some(*s),
            Cow::Owned(_) => None,
        };
        let mut text = text;

        for rules in PAIR_RULES.iter() {
            text = replace_all(text, &rules.outer, " $1$2$3 ");
        }
        for rules in PAIR_RULES.iter() {
            text = replace_all(text, &rules.inner, " $1$2$3 ");
        }

        text = replace_all(text, &PUNCTUATION, "$1 ");
        text = replace_all(text, &CLOCK_TIME, "$1:$2");
        text = rewrite_matches(text, &SPACED_MARKS, |caps, _| {
            Some(caps[0].chars().filter(|c| !c.is_whitespace()).collect())
        });

        if ctx.options.cleanup_extra_marks && may_have_repeated_marks(&text) {
            text = collapse_repeated_marks(text);
        }
        match original {
            Some(s) if text == s => Ok(Cow::Borrowed(s)),
            _ => Ok(text),
        }
    }
}

#[cfg(test)]
use crate::testing::stage_contract::StageTestConfig;

#[cfg(test)]
impl StageTestConfig for FixBraceSpacing {
    fn samples() -> &'static [&'static str] {
        &[
            "سلام( دنیا )خوب",
            "سلام ، دنیا",
            "ساعت ۱۰: ۳۰",
            "«سلام»",
            "چرا ؟ !",
            "او گفت:«سلام»",
            "Hello World",
            "",
        ]
    }

    fn should_pass_through() -> &'static [&'static str] {
        &["hello", "سلام، دنیا", "  «سلام»  ", "بله. ", "ساعت ۱۰:۳۰", ""]
    }

    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[
            ("سلام( دنیا )خوب", "سلام  (دنیا)  خوب"),
            ("سلام ، دنیا", "سلام، دنیا"),
            ("ساعت ۱۰: ۳۰", "ساعت ۱۰:۳۰"),
            ("«سلام»", "  «سلام»  "),
            ("چرا ؟ !", "چرا؟! "),
            ("او گفت:«سلام»", "او گفت: «سلام»  "),
        ]
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::Options;

    fn apply_with(input: &str, f: impl FnOnce(&mut Options)) -> String {
        let ctx = Context::with_modified(Options::default(), f);
        FixBraceSpacing
            .apply(Cow::Borrowed(input), &ctx)
            .unwrap()
            .into_owned()
    }

    #[test]
    fn spaced_marks_collapse_only_with_cleanup_extra_marks() {
        assert_eq!(apply_with("نه ! !", |_| {}), "نه! ");
        assert_eq!(apply_with("نه ! !", |o| o.cleanup_extra_marks = false), "نه!! ");
    }

    #[test]
    fn latin_clock_time_is_not_special() {
        assert_eq!(apply_with("10:30", |_| {}), "10: 30");
    }

    #[test]
    fn each_pair_type_is_spaced() {
        assert_eq!(apply_with("a[ b ]c", |_| {}), "a  [b]  c");
        assert_eq!(apply_with("a{b}c", |_| {}), "a  {b}  c");
        assert_eq!(apply_with("a“b”c", |_| {}), "a  “b”  c");
    }
}
