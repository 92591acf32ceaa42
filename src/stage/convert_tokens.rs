//! stage/convert_tokens.rs
//! Per-token conversion of Latin digits, `,` `;` `%` and `?` to their Persian forms.
//! Tokens that look like Latin words or numeric character references are left alone.

use crate::{
    context::Context,
    options::Options,
    script::PERSIAN_DIGITS,
    stage::{Stage, StageError},
};
use memchr::{memchr, memchr3};
use std::{borrow::Cow, iter::FusedIterator};

#[inline(always)]
fn is_ascii_ws(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r')
}

/// A maximal run of non-whitespace together with the whitespace around it.
///
/// `leading` is empty only for a token at the very start of the text.
/// Consecutive tokens share whitespace: one token's `trailing` is the next
/// one's `leading`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Token<'a> {
    leading: &'a str,
    word: &'a str,
    trailing: &'a str,
    /// Byte offset of `word` in the text.
    start: usize,
}

/// Splits text on ASCII whitespace (space, `\t`, `\n`, `\v`, `\f`, `\r`).
struct Tokens<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Tokens<'a> {
    fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }

    fn skip_ws(&self, from: usize) -> usize {
        let bytes = self.text.as_bytes();
        from + bytes[from..].iter().take_while(|&&b| is_ascii_ws(b)).count()
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        let bytes = self.text.as_bytes();
        let start = self.skip_ws(self.pos);
        if start >= bytes.len() {
            self.pos = bytes.len();
            return None;
        }
        let end = start + bytes[start..].iter().take_while(|&&b| !is_ascii_ws(b)).count();
        let after = self.skip_ws(end);
        let token = Token {
            leading: &self.text[self.pos..start],
            word: &self.text[start..end],
            trailing: &self.text[end..after],
            start,
        };
        self.pos = end;
        Some(token)
    }
}

impl FusedIterator for Tokens<'_> {}

/// Two or more consecutive `[a-zA-Z\-_]`.
fn has_latin_run(word: &str) -> bool {
    let mut run = 0;
    for b in word.bytes() {
        if b.is_ascii_alphabetic() || b == b'-' || b == b'_' {
            run += 1;
            if run >= 2 {
                return true;
            }
        } else {
            run = 0;
        }
    }
    false
}

/// `&#` digits `;` anywhere in the word.
fn has_numeric_char_ref(word: &str) -> bool {
    let bytes = word.as_bytes();
    let mut from = 0;
    while let Some(p) = memchr::memmem::find(&bytes[from..], b"&#") {
        let digits_start = from + p + 2;
        let digits = bytes[digits_start..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count();
        if digits > 0 && bytes.get(digits_start + digits) == Some(&b';') {
            return true;
        }
        from = digits_start;
    }
    false
}

/// `1.` at the start of a line, followed by whitespace: a Markdown ordered
/// list marker.
fn is_list_marker(token: &Token<'_>) -> bool {
    let line_start = token.leading.is_empty() || token.leading.ends_with(['\n', '\r']);
    let Some(digits) = token.word.strip_suffix('.') else {
        return false;
    };
    line_start
        && !token.trailing.is_empty()
        && !digits.is_empty()
        && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Token-level conversion of Latin digits and Latin punctuation.
///
/// The text is split on ASCII whitespace and each token is converted
/// independently, so that identifiers such as `abc123`, `x-ray` or a
/// numeric character reference keep their Latin digits.
///
/// | Flag                                             | Effect                                  |
/// |--------------------------------------------------|-----------------------------------------|
/// | `fix_english_numbers`                            | `0`–`9` → `۰`–`۹`                       |
/// | `fix_misc_non_persian_chars`                     | `,` `;` `%` → `،` `؛` `٪`               |
/// | `fix_question_mark`                              | `?` → `؟`                               |
/// | `skip_markdown_ordered_lists_numbers_conversion` | leave `1.` list markers in Latin digits |
#[derive(Debug, Default, Clone, Copy)]
pub struct ConvertTokens;

impl ConvertTokens {
    #[inline(always)]
    fn converter(o: &Options) -> impl Fn(char) -> Option<char> + Copy {
        let (digits, misc, question) = (
            o.fix_english_numbers,
            o.fix_misc_non_persian_chars,
            o.fix_question_mark,
        );
        move |c| match c {
            '0'..='9' if digits => Some(PERSIAN_DIGITS[c as usize - '0' as usize]),
            ',' if misc => Some('،'),
            ';' if misc => Some('؛'),
            '%' if misc => Some('٪'),
            '?' if question => Some('؟'),
            _ => None,
        }
    }

    fn is_protected(token: &Token<'_>, o: &Options) -> bool {
        has_latin_run(token.word)
            || has_numeric_char_ref(token.word)
            || (o.skip_markdown_ordered_lists_numbers_conversion && is_list_marker(token))
    }
}

impl Stage for ConvertTokens {
    fn name(&self) -> &'static str {
        "convert_tokens"
    }

    #[inline(always)]
    fn needs_apply(&self, text: &str, ctx: &Context) -> Result<bool, StageError> {
        let o = &ctx.options;
        let bytes = text.as_bytes();
        Ok((o.fix_english_numbers && bytes.iter().any(u8::is_ascii_digit))
            || (o.fix_misc_non_persian_chars && memchr3(b',', b';', b'%', bytes).is_some())
            || (o.fix_question_mark && memchr(b'?', bytes).is_some()))
    }

    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        if !self.needs_apply(&text, ctx)? {
            return Ok(text);
        }
        let o = &ctx.options;
        let convert = Self::converter(o);

        let mut out: Option<String> = None;
        let mut copied = 0;
        for token in Tokens::new(&text) {
            if !token.word.chars().any(|c| convert(c).is_some()) || Self::is_protected(&token, o) {
                continue;
            }
            let buf = out.get_or_insert_with(|| String::with_capacity(text.len() + 16));
            buf.push_str(&text[copied..token.start]);
            buf.extend(token.word.chars().map(|c| convert(c).unwrap_or(c)));
            copied = token.start + token.word.len();
        }

        Ok(match out {
            None => text,
            Some(mut buf) => {
                buf.push_str(&text[copied..]);
                Cow::Owned(buf)
            }
        })
    }
}

#[cfg(test)]
use crate::testing::stage_contract::StageTestConfig;

#[cfg(test)]
impl StageTestConfig for ConvertTokens {
    fn samples() -> &'static [&'static str] {
        &[
            "ساعت 10",
            "سلام, دنیا; 50%",
            "abc123 و 45",
            "1. مورد\n2. مورد",
            "چرا?",
            "Hello World",
            "",
        ]
    }

    fn should_pass_through() -> &'static [&'static str] {
        &["hello", "abc123", "x-ray", "&#1234;", "1. مورد", "۱۲۳", "سلام", ""]
    }

    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[
            ("ساعت 10", "ساعت ۱۰"),
            ("سلام, دنیا; 50%", "سلام، دنیا؛ ۵۰٪"),
            ("چرا?", "چرا؟"),
            ("x-ray 5", "x-ray ۵"),
            ("&#1234; 5", "&#1234; ۵"),
            ("متن\n2. دوم", "متن\n2. دوم"),
        ]
    }
}
