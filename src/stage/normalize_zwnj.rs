//! stage/normalize_zwnj.rs
//! Removes zero-width non-joiners that cannot join anything.

use crate::{
    context::Context,
    stage::{Stage, StageError, replace_all},
};
use memchr::memmem;
use regex::Regex;
use std::{borrow::Cow, sync::LazyLock};

const ZWNJ_UTF8: &[u8] = "\u{200C}".as_bytes();

/// ---------------------------------------------------------------------------
///    Rule table – applied top to bottom
/// ---------------------------------------------------------------------------
macro_rules! define_zwnj_rules {
    ($( $(#[$doc:meta])* $pattern:literal => $rep:literal ),* $(,)?) => {
        static RULES: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
            vec![$( (Regex::new($pattern).expect("valid zwnj regex"), $rep) ),*]
        });
    };
}

define_zwnj_rules! {
    // runs collapse first so the adjacency rules see a single ZWNJ
    r"\x{200C}{2,}" => "\u{200C}",
    // after digits, non-connecting letters and joining-neutral punctuation
    r"([۰-۹0-9إأةؤورزژاآدذ،؛,:«»\\/@#$٪×*()ـ\-=|])\x{200C}" => "$1",
    // next to Latin word characters
    r"\x{200C}([A-Za-z0-9_])" => "$1",
    r"([A-Za-z0-9_])\x{200C}" => "$1",
    // next to whitespace, brackets and sentence punctuation
    r"\x{200C}([\s\[\].،«»:()؛؟?;$!@\-=+\\])" => "$1",
    r"([\s\[\].،«»:()؛؟?;$!@\-=+\\])\x{200C}" => "$1",
    r"\s+\x{200C}|\x{200C}\s+" => " ",
}

/// ZWNJ cleanup, gated by `cleanup_zwnj`.
///
/// A ZWNJ only means something between two letters that would otherwise
/// join. Runs collapse to one, and the joiner is dropped after non-connecting
/// letters and digits, next to Latin text, and next to whitespace or
/// punctuation. Arabic-indic digits have already been converted by the time
/// this runs, so only Persian and Latin digits are listed.
#[derive(Debug, Default, Clone, Copy)]
pub struct NormalizeZwnj;

impl Stage for NormalizeZwnj {
    fn name(&self) -> &'static str {
        "normalize_zwnj"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, ctx: &Context) -> Result<bool, StageError> {
        Ok(ctx.options.cleanup_zwnj && memmem::find(text.as_bytes(), ZWNJ_UTF8).is_some())
    }

    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        if !self.needs_apply(&text, ctx)? {
            return Ok(text);
        }
        Ok(RULES
            .iter()
            .fold(text, |text, (re, rep)| replace_all(text, re, rep)))
    }
}

#[cfg(test)]
use crate::testing::stage_contract::StageTestConfig;

#[cfg(test)]
impl StageTestConfig for NormalizeZwnj {
    fn samples() -> &'static [&'static str] {
        &[
            "سلام\u{200c}\u{200c}دنیا",
            "کتاب\u{200c} ها",
            "می\u{200c}روم",
            "\u{200c}\u{200c}\u{200c}",
            "Hello World",
            "",
        ]
    }

    fn should_pass_through() -> &'static [&'static str] {
        &["hello", "می\u{200c}روم", "کتاب\u{200c}ها", "سلام دنیا", ""]
    }

    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[
            ("سلام\u{200c}\u{200c}دنیا", "سلام\u{200c}دنیا"),
            ("دار\u{200c}و", "دارو"),
            ("abc\u{200c}def", "abcdef"),
            ("کتاب\u{200c} ها", "کتاب ها"),
            ("سلام\u{200c}!", "سلام!"),
        ]
    }
}

#[cfg(test)]
mod contract_tests {
    use super::*;
    use crate::assert_stage_contract;

    #[test]
    fn universal_contract_compliance() {
        assert_stage_contract!(NormalizeZwnj);
    }
}
