//! stage/cleanup_marks.rs
//! Repeated `!` / `؟` and kashida (tatweel) cleanup.

use crate::{
    context::Context,
    script::KASHIDA,
    stage::{Stage, StageError, replace_all},
};
use memchr::memmem;
use regex::Regex;
use std::{borrow::Cow, sync::LazyLock};

pub(crate) static REPEATED_EXCLAMATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!{2,}").expect("valid regex"));
pub(crate) static REPEATED_QUESTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"؟{2,}").expect("valid regex"));
static KASHIDA_AFTER_SPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\s)ـ+").expect("valid regex"));
static KASHIDA_BEFORE_SPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"ـ+(\s)").expect("valid regex"));
static INNER_KASHIDA: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\S)ـ+(\S)").expect("valid regex"));

/// `!!!` → `!` and `؟؟` → `؟`.
pub(crate) fn collapse_repeated_marks(text: Cow<'_, str>) -> Cow<'_, str> {
    let text = replace_all(text, &REPEATED_EXCLAMATION, "!");
    replace_all(text, &REPEATED_QUESTION, "؟")
}

#[inline(always)]
pub(crate) fn may_have_repeated_marks(text: &str) -> bool {
    memmem::find(text.as_bytes(), b"!!").is_some() || text.contains("؟؟")
}

/// Mark cleanup.
///
/// - `cleanup_extra_marks`: runs of `!` or `؟` collapse to one.
/// - `kashidas_as_parenthetic`: a kashida run touching whitespace is a dash
///   in disguise (`متن ـــ توضیح`) and becomes `–`.
/// - `cleanup_kashidas`: kashidas inside a word are removed (`کـــتاب` → `کتاب`).
#[derive(Debug, Default, Clone, Copy)]
pub struct CleanupMarks;

impl Stage for CleanupMarks {
    fn name(&self) -> &'static str {
        "cleanup_marks"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, ctx: &Context) -> Result<bool, StageError> {
        let o = &ctx.options;
        Ok((o.cleanup_extra_marks && may_have_repeated_marks(text))
            || ((o.kashidas_as_parenthetic || o.cleanup_kashidas) && text.contains(KASHIDA)))
    }

    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        if !self.needs_apply(&text, ctx)? {
            return Ok(text);
        }
        let o = &ctx.options;
        let mut text = text;

        if o.cleanup_extra_marks {
            text = collapse_repeated_marks(text);
        }
        if o.kashidas_as_parenthetic {
            text = replace_all(text, &KASHIDA_AFTER_SPACE, "$1–");
            text = replace_all(text, &KASHIDA_BEFORE_SPACE, "–$1");
        }
        if o.cleanup_kashidas {
            text = replace_all(text, &INNER_KASHIDA, "$1$2");
        }
        Ok(text)
    }
}

#[cfg(test)]
use crate::testing::stage_contract::StageTestConfig;

#[cfg(test)]
impl StageTestConfig for CleanupMarks {
    fn samples() -> &'static [&'static str] {
        &["واقعا!!!", "چرا؟؟", "کـــتاب", "متن ـــ توضیح", "Hello World", ""]
    }

    fn should_pass_through() -> &'static [&'static str] {
        &["hello!", "چرا؟ واقعا!", "کتاب", "", "ـ"]
    }

    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[
            ("واقعا!!!", "واقعا!"),
            ("چرا؟؟", "چرا؟"),
            ("کـــتاب", "کتاب"),
            ("متن ـــ توضیح", "متن – توضیح"),
        ]
    }
}

#[cfg(test)]
mod contract_tests {
    use super::*;
    use crate::assert_stage_contract;

    #[test]
    fn universal_contract_compliance() {
        assert_stage_contract!(CleanupMarks);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Options;

    fn apply_with(input: &str, f: impl FnOnce(&mut Options)) -> String {
        let ctx = Context::with_modified(Options::default(), f);
        CleanupMarks
            .apply(Cow::Borrowed(input), &ctx)
            .unwrap()
            .into_owned()
    }

    #[test]
    fn trailing_kashida_becomes_a_dash() {
        assert_eq!(apply_with("متنـــ بعد", |_| {}), "متن– بعد");
    }

    #[test]
    fn inner_kashida_kept_when_disabled() {
        assert_eq!(apply_with("کـتاب", |o| o.cleanup_kashidas = false), "کـتاب");
    }

    #[test]
    fn mixed_marks_are_not_collapsed_here() {
        assert_eq!(apply_with("چرا؟!؟!", |_| {}), "چرا؟!؟!");
    }
}
