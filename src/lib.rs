//! Persian (Farsi) text normalization.
//!
//! `virgool` rewrites inconsistent Persian text into a canonical,
//! typographically correct form: Arabic presentation forms become Persian
//! letters, Latin punctuation and digits become their Persian counterparts,
//! zero-width non-joiners are cleaned up and inserted around common affixes,
//! and spacing around brackets, quotes and punctuation is normalized.
//!
//! Regions the caller wants left alone (HTML tags, URIs, `[...]`, `{...}`,
//! `<code>`, fenced code and `<pre>` blocks) are lifted out before the
//! pipeline runs and put back verbatim afterwards.
//!
//! ```
//! use virgool::{Options, normalize};
//!
//! let out = normalize("ويراستار به شما كمك مي كند", &Options::default());
//! assert_eq!(out, "ویراستار به شما کمک می\u{200c}کند");
//! ```

/// Debug logging, compiled out unless the `logging` feature is enabled.
#[cfg(not(feature = "logging"))]
macro_rules! log_debug {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "logging")]
macro_rules! log_debug {
    ($($arg:tt)*) => { log::debug!($($arg)*) };
}

pub mod context;
pub mod options;
pub mod process;
pub mod profile;
pub mod script;
pub mod spans;
pub mod stage;
#[cfg(test)]
mod testing;
pub mod virgool;

pub use context::Context;
pub use options::{Options, OptionsError};
pub use spans::{SpanKind, SpanRegistry};
pub use stage::canonicalize_chars::CanonicalizeChars;
pub use stage::cleanup_marks::CleanupMarks;
pub use stage::convert_tokens::ConvertTokens;
pub use stage::fix_affix_spacing::FixAffixSpacing;
pub use stage::fix_brace_spacing::FixBraceSpacing;
pub use stage::normalize_punctuation::NormalizePunctuation;
pub use stage::normalize_whitespace::NormalizeWhitespace;
pub use stage::normalize_zwnj::NormalizeZwnj;
pub use virgool::{Virgool, VirgoolError};

/// Normalize `text` with the full pipeline.
///
/// Never fails: should a stage report an error, the input is returned as-is.
pub fn normalize(text: &str, options: &Options) -> String {
    let virgool = Virgool::builder().options(*options).build();
    match virgool.normalize(text) {
        Ok(out) => out.into_owned(),
        Err(_e) => {
            log_debug!("normalization fell back to the input: {}", _e);
            text.to_owned()
        }
    }
}

#[cfg(test)]
mod tests {
    include!("tests/unit.rs");
    include!("tests/integration.rs");
    include!("tests/proptest.rs");
}
