//! stage/normalize_punctuation.rs
//! Line endings, HTML entities, dashes, ellipses, quotes, izafe hamzeh, stray RLM
//! and Arabic-indic digits.

use crate::{
    context::Context,
    options::Options,
    script::{ARABIC_DIGITS, PERSIAN_DIGITS, RLM, is_arabic_digit},
    stage::{Stage, StageError, map_chars, replace_all, replace_str},
};
use memchr::{memchr, memchr3, memmem};
use regex::Regex;
use std::{borrow::Cow, sync::LazyLock};

static EOL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\r\n|\n\r|\r").expect("valid eol regex"));
static THREE_DOTS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\.{3,}").expect("valid ellipsis regex"));
static CURLY_PAIR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"“(.+?)”").expect("valid curly quote regex"));
static HAMZEH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\S)ه[\s\x{200C}]+[یي](\s)").expect("valid hamzeh regex")
});
static STRAY_RLM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([^a-zA-Z\-_])\x{200F}").expect("valid rlm regex"));

/// Typographic punctuation fixes, one sub-rule per flag.
///
/// Rules run in a fixed order: `---` is rewritten before `--`, HTML entities
/// are decoded before anything that could match what they decode to, and
/// Arabic-indic digits are converted here so that the ZWNJ cleanup that
/// follows sees Persian digits.
///
/// | Flag                       | Rewrite                                   |
/// |----------------------------|-------------------------------------------|
/// | `normalize_eol`            | `\r\n`, `\n\r`, `\r` → `\n`                |
/// | `decode_htmlentities`      | `&amp;`, `&#62;`, … → decoded text        |
/// | `fix_dashes`               | `---` → `—`, then `--` → `–`              |
/// | `fix_three_dots`           | optional whitespace + `...` → `…`         |
/// | `fix_english_quotes_pairs` | `“x”` → `«x»`                             |
/// | `fix_english_quotes`       | `"x"`, `'x'`, `` `x` ``, `''x''` → `«x»`  |
/// | `fix_hamzeh`               | `خانه ی من` → `خانهٔ من`                  |
/// | `cleanup_rlm`              | RLM after non-Latin text → ZWNJ           |
/// | `fix_arabic_numbers`       | `٠`–`٩` → `۰`–`۹`                         |
#[derive(Debug, Default, Clone, Copy)]
pub struct NormalizePunctuation;

impl NormalizePunctuation {
    fn any_rule_may_fire(text: &str, o: &Options) -> bool {
        let bytes = text.as_bytes();
        (o.normalize_eol && memchr(b'\r', bytes).is_some())
            || (o.decode_htmlentities && memchr(b'&', bytes).is_some())
            || (o.fix_dashes && memmem::find(bytes, b"--").is_some())
            || (o.fix_three_dots && memmem::find(bytes, b"...").is_some())
            || (o.fix_english_quotes_pairs && text.contains('“'))
            || (o.fix_english_quotes && memchr3(b'"', b'\'', b'`', bytes).is_some())
            || (o.fix_hamzeh && text.contains('ه'))
            || (o.cleanup_rlm && text.contains(RLM))
            || (o.fix_arabic_numbers && text.chars().any(is_arabic_digit))
    }
}

impl Stage for NormalizePunctuation {
    fn name(&self) -> &'static str {
        "normalize_punctuation"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, ctx: &Context) -> Result<bool, StageError> {
        Ok(Self::any_rule_may_fire(text, &ctx.options))
    }

    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        let o = &ctx.options;
        if !Self::any_rule_may_fire(&text, o) {
            return Ok(text);
        }

        let mut text = text;
        if o.normalize_eol {
            text = replace_all(text, &EOL, "\n");
        }
        if o.decode_htmlentities && memchr(b'&', text.as_bytes()).is_some() {
            let mut decoded = String::with_capacity(text.len());
            html_escape::decode_html_entities_to_string(&text, &mut decoded);
            if decoded != text.as_ref() {
                text = Cow::Owned(decoded);
            }
        }
        if o.fix_dashes {
            text = replace_str(text, "---", "—");
            text = replace_str(text, "--", "–");
        }
        if o.fix_three_dots {
            text = replace_all(text, &THREE_DOTS, "…");
        }
        if o.fix_english_quotes_pairs {
            text = replace_all(text, &CURLY_PAIR, "«$1»");
        }
        if o.fix_english_quotes {
            text = convert_straight_quotes(text);
        }
        if o.fix_hamzeh {
            text = replace_all(text, &HAMZEH, "${1}هٔ${2}");
        }
        if o.cleanup_rlm {
            text = replace_all(text, &STRAY_RLM, "${1}\u{200C}");
        }
        if o.fix_arabic_numbers {
            text = map_chars(text, |c| {
                is_arabic_digit(c).then(|| {
                    let d = ARABIC_DIGITS.iter().position(|&a| a == c).unwrap_or(0);
                    PERSIAN_DIGITS[d]
                })
            });
        }
        Ok(text)
    }
}

#[inline(always)]
fn is_straight_quote(b: u8) -> bool {
    matches!(b, b'"' | b'\'' | b'`')
}

/// Straight quotes → guillemets.
///
/// The opening delimiter is a run of `"`, `'` and `` ` `` taken verbatim; the
/// closing delimiter must repeat the same sequence. Longer delimiters are tried
/// first so `''x''` pairs as one quote rather than two empty ones. The quoted
/// text is non-empty, stays on one line and ends at the earliest repeat of the
/// delimiter.
fn convert_straight_quotes(text: Cow<'_, str>) -> Cow<'_, str> {
    let bytes = text.as_bytes();
    let mut out: Option<String> = None;
    let mut copied = 0;
    let mut i = 0;

    while i < bytes.len() {
        if !is_straight_quote(bytes[i]) {
            i += 1;
            continue;
        }
        let run = bytes[i..].iter().take_while(|&&b| is_straight_quote(b)).count();

        let mut matched = None;
        for len in (1..=run).rev() {
            let delim = &text[i..i + len];
            let start = i + len;
            let line_end = memchr(b'\n', &bytes[start..]).map_or(bytes.len(), |p| start + p);
            let Some(first) = text[start..line_end].chars().next() else {
                continue;
            };
            let search_from = start + first.len_utf8();
            if let Some(p) = text[search_from..line_end].find(delim) {
                matched = Some((start, search_from + p, len));
                break;
            }
        }

        match matched {
            Some((start, close, len)) => {
                let buf = out.get_or_insert_with(|| String::with_capacity(text.len() + 8));
                buf.push_str(&text[copied..i]);
                buf.push('«');
                buf.push_str(&text[start..close]);
                buf.push('»');
                i = close + len;
                copied = i;
            }
            None => i += 1,
        }
    }

    match out {
        None => text,
        Some(mut buf) => {
            buf.push_str(&text[copied..]);
            Cow::Owned(buf)
        }
    }
}

#[cfg(test)]
use crate::testing::stage_contract::StageTestConfig;

#[cfg(test)]
impl StageTestConfig for NormalizePunctuation {
    fn samples() -> &'static [&'static str] {
        &[
            "تست\r\nخط جدید",
            "a---b--c",
            "صبر کن ...",
            "“سلام”",
            "\"سلام\"",
            "it's",
            "خانه ی من",
            "٣٤ تا",
            "Hello World",
            "",
        ]
    }

    fn should_pass_through() -> &'static [&'static str] {
        &["hello", "world", "it's", "سلام دنیا", "a - b", "۱۲", "«نقل»", ""]
    }

    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[
            ("تست\r\nخط جدید", "تست\nخط جدید"),
            ("&#62;", ">"),
            ("a---b--c", "a—b–c"),
            ("صبر کن ...", "صبر کن…"),
            ("“سلام”", "«سلام»"),
            ("\"سلام\"", "«سلام»"),
            ("''نقل''", "«نقل»"),
            ("`کد`", "«کد»"),
            ("خانه ی من", "خانهٔ من"),
            ("سلام\u{200F}", "سلام\u{200C}"),
            ("٣٤", "۳۴"),
        ]
    }
}

#[cfg(test)]
mod contract_tests {
    use super::*;
    use crate::assert_stage_contract;

    #[test]
    fn universal_contract_compliance() {
        assert_stage_contract!(NormalizePunctuation);
    }
}
