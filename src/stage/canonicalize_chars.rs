//! stage/canonicalize_chars.rs
//! Arabic presentation forms, Arabic letter variants and ligatures → canonical Persian letters
//! Single left-to-right pass over the `phf` table in `script::data`
//! Zero-copy when no listed code point is present

use crate::{
    context::Context,
    script::canonical,
    stage::{Stage, StageError},
};
use std::borrow::Cow;

/// Rewrites every code point listed in the canonicalization table.
///
/// Always runs: there is no flag for it. Some rows expand (`ﷲ` → `الله`) and
/// some delete (isolated harakat, annotation marks), so this is not a 1:1
/// char mapper.
#[derive(Debug, Default, Clone, Copy)]
pub struct CanonicalizeChars;

impl Stage for CanonicalizeChars {
    fn name(&self) -> &'static str {
        "canonicalize_chars"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, _ctx: &Context) -> Result<bool, StageError> {
        if text.is_ascii() {
            return Ok(false);
        }
        Ok(text.chars().any(|c| canonical(c).is_some()))
    }

    fn apply<'a>(&self, text: Cow<'a, str>, _ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        if text.is_ascii() {
            return Ok(text);
        }
        let Some(first) = text
            .char_indices()
            .find_map(|(i, c)| canonical(c).map(|_| i))
        else {
            return Ok(text);
        };

        let mut out = String::with_capacity(text.len() + 8);
        out.push_str(&text[..first]);
        for c in text[first..].chars() {
            match canonical(c) {
                Some(rep) => out.push_str(rep),
                None => out.push(c),
            }
        }
        Ok(Cow::Owned(out))
    }
}

#[cfg(test)]
use crate::testing::stage_contract::StageTestConfig;

#[cfg(test)]
impl StageTestConfig for CanonicalizeChars {
    fn samples() -> &'static [&'static str] {
        &["ويراستار", "كتاب های من", "\u{FEFB}", "Hello World", "ﺳﻼﻡ", ""]
    }

    fn should_pass_through() -> &'static [&'static str] {
        &["ویراستار", "hello", "کتاب\u{200c}ها", "۱۲۳ ٤٥", "«سلام»", ""]
    }

    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[
            ("كمك", "کمک"),
            ("\u{FEFB}", "لا"),
            ("\u{FDFC}", "ریال"),
            ("مي كند", "می کند"),
        ]
    }

    fn gated_by_options() -> bool {
        false
    }
}

#[cfg(test)]
mod contract_tests {
    use super::*;
    use crate::assert_stage_contract;

    #[test]
    fn universal_contract_compliance() {
        assert_stage_contract!(CanonicalizeChars);
    }
}
