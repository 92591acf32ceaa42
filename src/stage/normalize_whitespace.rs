use crate::{
    context::Context,
    script::ZWNJ,
    stage::{Stage, StageError, replace_all, rewrite_matches},
};
use memchr::{memchr, memmem};
use regex::Regex;
use std::{borrow::Cow, sync::LazyLock};

static SPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" {2,}").expect("valid space regex"));
static NEWLINE_PADDING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t\x{200C}]*(\n+)[ \t\x{200C}]*").expect("valid newline regex"));

#[inline(always)]
fn is_edge_space(c: char) -> bool {
    c.is_whitespace() || c == ZWNJ
}

/// Final spacing pass.
///
/// | Flag                    | Effect                                                          |
/// |-------------------------|-----------------------------------------------------------------|
/// | `cleanup_spacing`       | runs of spaces → one space; spaces, tabs and ZWNJ around line breaks are dropped |
/// | `cleanup_begin_and_end` | leading and trailing whitespace and ZWNJ are trimmed            |
///
/// Trimming a borrowed buffer re-slices it; nothing is copied.
#[derive(Debug, Default, Clone, Copy)]
pub struct NormalizeWhitespace;

impl Stage for NormalizeWhitespace {
    fn name(&self) -> &'static str {
        "normalize_whitespace"
    }

    fn needs_apply(&self, text: &str, ctx: &Context) -> Result<bool, StageError> {
        let o = &ctx.options;
        if text.is_empty() {
            return Ok(false);
        }

        if o.cleanup_begin_and_end
            && (text.starts_with(is_edge_space) || text.ends_with(is_edge_space))
        {
            return Ok(true);
        }

        let bytes = text.as_bytes();
        Ok(o.cleanup_spacing
            && (memmem::find(bytes, b"  ").is_some() || memchr(b'\n', bytes).is_some()))
    }

    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        if !self.needs_apply(&text, ctx)? {
            return Ok(text);
        }
        let o = &ctx.options;
        let mut text = text;

        if o.cleanup_spacing {
            text = replace_all(text, &SPACE_RUN, " ");
            text = rewrite_matches(text, &NEWLINE_PADDING, |caps, _| {
                let newlines = &caps[1];
                (caps.get_match().len() != newlines.len()).then(|| newlines.to_owned())
            });
        }

        if o.cleanup_begin_and_end {
            text = match text {
                Cow::Borrowed(s) => Cow::Borrowed(s.trim_matches(is_edge_space)),
                Cow::Owned(s) => {
                    let trimmed = s.trim_matches(is_edge_space);
                    if trimmed.len() == s.len() {
                        Cow::Owned(s)
                    } else {
                        Cow::Owned(trimmed.to_owned())
                    }
                }
            };
        }
        Ok(text)
    }
}

#[cfg(test)]
use crate::testing::stage_contract::StageTestConfig;

#[cfg(test)]
impl StageTestConfig for NormalizeWhitespace {
    fn samples() -> &'static [&'static str] {
        &[
            "  سلام   دنیا  ",
            "خط \n  دوم",
            "\u{200c}سلام\u{200c}",
            "a\nb",
            "Hello World",
            "",
        ]
    }

    fn should_pass_through() -> &'static [&'static str] {
        &["hello", "abc def", "a\nb", "a\n\nb", "می\u{200c}روم", ""]
    }

    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[
            ("  سلام   دنیا  ", "سلام دنیا"),
            ("خط \n  دوم", "خط\nدوم"),
            ("\u{200c}سلام\u{200c}", "سلام"),
            ("\t\u{a0}x\n", "x"),
        ]
    }
}

#[cfg(test)]
mod contract_tests {
    use super::*;
    use crate::assert_stage_contract;

    #[test]
    fn universal_contract_compliance() {
        assert_stage_contract!(NormalizeWhitespace);
    }
}
