//! Core normalization stage abstraction.
//!
//! A stage is one group of ordered rewrite rules over the whole buffer. Every
//! stage follows the same allocation discipline: `needs_apply` is a cheap
//! pre-scan that may over-report but never under-report, and `apply` hands
//! back the input `Cow` untouched when none of its rules match. A pipeline of
//! stages over clean text therefore never allocates.

pub mod canonicalize_chars;
pub mod cleanup_marks;
pub mod convert_tokens;
pub mod fix_affix_spacing;
pub mod fix_brace_spacing;
pub mod normalize_punctuation;
pub mod normalize_whitespace;
pub mod normalize_zwnj;

use crate::context::Context;
use regex::{Captures, Regex};
use std::borrow::Cow;
use thiserror::Error;

/// Public error type for every stage.
#[derive(Debug, Error)]
pub enum StageError {
    #[error("Normalization failed at stage `{0}`: {1}")]
    Failed(&'static str, String),
}

/// A single normalisation step.
pub trait Stage: Send + Sync {
    /// Human-readable name – used for logging and error messages.
    fn name(&self) -> &'static str;

    /// Fast pre-check. Returning `Ok(false)` skips the whole stage, so it must
    /// only do so when `apply` would leave the text unchanged.
    fn needs_apply(&self, text: &str, ctx: &Context) -> Result<bool, StageError>;

    /// Allocation-aware transformation. Must always be correct.
    fn apply<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Result<Cow<'a, str>, StageError>;
}

// ──────────────────────────────────────────────────────────────
//  Cow-preserving rewrite helpers shared by the stages
// ──────────────────────────────────────────────────────────────

/// `Regex::replace_all` over a `Cow`, keeping the original buffer when the
/// rewrite turns out to be the identity.
///
/// Several rules match text that is already in normal form (`" (x) "` for
/// the brace rule, `"\n"` for newline padding); comparing once here keeps
/// clean input zero-copy.
pub(crate) fn replace_all<'a>(text: Cow<'a, str>, re: &Regex, rep: &str) -> Cow<'a, str> {
    let replaced = match re.replace_all(&text, rep) {
        Cow::Borrowed(_) => None,
        Cow::Owned(o) if o == *text => None,
        Cow::Owned(o) => Some(o),
    };
    match replaced {
        Some(o) => Cow::Owned(o),
        None => text,
    }
}

/// Per-character substitution; `f` returns `None` to keep a character.
pub(crate) fn map_chars<'a>(text: Cow<'a, str>, f: impl Fn(char) -> Option<char>) -> Cow<'a, str> {
    let Some((first, _)) = text.char_indices().find(|&(_, c)| f(c).is_some()) else {
        return text;
    };
    let mut out = String::with_capacity(text.len());
    out.push_str(&text[..first]);
    out.extend(text[first..].chars().map(|c| f(c).unwrap_or(c)));
    Cow::Owned(out)
}

/// Rewrite every match of `re` with `f(captures, haystack)`.
///
/// `f` returns `None` to leave a match as it is, which lets a rule inspect
/// context outside the match (the character before it, the one after it)
/// without lookaround.
pub(crate) fn rewrite_matches<'a>(
    text: Cow<'a, str>,
    re: &Regex,
    mut f: impl FnMut(&Captures<'_>, &str) -> Option<String>,
) -> Cow<'a, str> {
    let mut out: Option<String> = None;
    let mut last = 0;
    for caps in re.captures_iter(&text) {
        let m = caps.get_match();
        if let Some(replacement) = f(&caps, &text) {
            let buf = out.get_or_insert_with(|| String::with_capacity(text.len() + 16));
            buf.push_str(&text[last..m.start()]);
            buf.push_str(&replacement);
            last = m.end();
        }
    }
    match out {
        None => text,
        Some(mut buf) => {
            buf.push_str(&text[last..]);
            Cow::Owned(buf)
        }
    }
}

/// Plain substring replacement over a `Cow`.
pub(crate) fn replace_str<'a>(text: Cow<'a, str>, from: &str, to: &str) -> Cow<'a, str> {
    if memchr::memmem::find(text.as_bytes(), from.as_bytes()).is_none() {
        return text;
    }
    Cow::Owned(text.replace(from, to))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::LazyLock;

    static DIGITS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]+").unwrap());

    #[test]
    fn replace_all_keeps_borrowed_on_miss() {
        let input = "no digits here";
        let out = replace_all(Cow::Borrowed(input), &DIGITS, "#");
        assert!(matches!(out, Cow::Borrowed(s) if s.as_ptr() == input.as_ptr()));
    }

    #[test]
    fn replace_all_reuses_owned_buffer_on_miss() {
        let owned = String::from("still no digits");
        let ptr = owned.as_ptr();
        let out = replace_all(Cow::Owned(owned), &DIGITS, "#");
        assert!(matches!(out, Cow::Owned(ref s) if s.as_ptr() == ptr));
    }

    #[test]
    fn rewrite_matches_can_decline() {
        let out = rewrite_matches(Cow::Borrowed("1 22 333"), &DIGITS, |caps, _| {
            (caps[0].len() > 1).then(|| "#".to_string())
        });
        assert_eq!(out, "1 # #");

        let out = rewrite_matches(Cow::Borrowed("1 2"), &DIGITS, |_, _| None);
        assert!(matches!(out, Cow::Borrowed(_)));
    }

    #[test]
    fn rewrite_matches_sees_the_haystack() {
        let out = rewrite_matches(Cow::Borrowed("a1 b2"), &DIGITS, |caps, hay| {
            let m = caps.get_match();
            hay[..m.start()].ends_with('b').then(|| "!".to_string())
        });
        assert_eq!(out, "a1 b!");
    }

    #[test]
    fn replace_all_treats_identity_rewrite_as_miss() {
        let input = "a 1 b";
        let out = replace_all(Cow::Borrowed(input), &DIGITS, "1");
        assert!(matches!(out, Cow::Borrowed(_)));
        assert_eq!(replace_all(Cow::Borrowed(input), &DIGITS, "2"), "a 2 b");
    }

    #[test]
    fn map_chars_copies_only_from_first_hit() {
        let swap = |c: char| (c == '?').then_some('؟');
        assert!(matches!(map_chars(Cow::Borrowed("abc"), swap), Cow::Borrowed(_)));
        assert_eq!(map_chars(Cow::Borrowed("چرا? چرا?"), swap), "چرا؟ چرا؟");
    }

    #[test]
    fn replace_str_is_zero_copy_on_miss() {
        let out = replace_str(Cow::Borrowed("abc"), "--", "–");
        assert!(matches!(out, Cow::Borrowed(_)));
        assert_eq!(replace_str(Cow::Borrowed("a--b"), "--", "–"), "a–b");
    }
}
