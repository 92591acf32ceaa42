//! Pipeline configuration.
//!
//! Every rewrite rule is gated by one named boolean flag. All flags default
//! to `true`; a caller-supplied mapping overlays the defaults key by key.
//! Flag names are part of the configuration format and are kept verbatim,
//! including the historical spellings `fix_perfix_spacing`, `aggresive`,
//! `preserve_HTML` and `preserve_URIs`.

use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OptionsError {
    #[error("option `{key}` expects a boolean, found {found}")]
    NotBoolean { key: String, found: &'static str },

    #[error("options document must be a JSON object, found {0}")]
    NotAnObject(&'static str),

    #[error("invalid options document: {0}")]
    Json(#[from] serde_json::Error),
}

/// ---------------------------------------------------------------------------
///    Macro – generates the struct, defaults and key lookup from one table
/// ---------------------------------------------------------------------------
macro_rules! define_options {
    ($( $(#[$doc:meta])* $field:ident => $key:literal ),* $(,)?) => {
        /// Resolved configuration: one flag per rewrite rule.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub struct Options {
            $( $(#[$doc])* pub $field: bool, )*
        }

        impl Default for Options {
            fn default() -> Self {
                Self { $( $field: true, )* }
            }
        }

        impl Options {
            /// External flag names, in declaration order.
            pub const KEYS: &'static [&'static str] = &[$($key),*];

            /// Read a flag by its external name.
            pub fn get(&self, key: &str) -> Option<bool> {
                match key {
                    $( $key => Some(self.$field), )*
                    _ => None,
                }
            }

            /// Set a flag by its external name. Returns `false` for unknown keys.
            pub fn set(&mut self, key: &str, value: bool) -> bool {
                match key {
                    $( $key => { self.$field = value; true } )*
                    _ => false,
                }
            }

            /// Every flag switched off. Handy for exercising a single rule.
            pub fn none() -> Self {
                Self { $( $field: false, )* }
            }
        }
    };
}

define_options! {
    /// `\r\n`, `\n\r` and lone `\r` → `\n`.
    normalize_eol => "normalize_eol",
    /// Decode HTML character references.
    decode_htmlentities => "decode_htmlentities",
    /// `---` → em dash, `--` → en dash.
    fix_dashes => "fix_dashes",
    /// Three or more dots → ellipsis.
    fix_three_dots => "fix_three_dots",
    /// `“…”` → `«…»`.
    fix_english_quotes_pairs => "fix_english_quotes_pairs",
    /// `"…"`, `'…'`, `` `…` `` → `«…»`.
    fix_english_quotes => "fix_english_quotes",
    /// `ه ی` → `هٔ` in izafe position.
    fix_hamzeh => "fix_hamzeh",
    /// RLM after non-Latin text → ZWNJ.
    cleanup_rlm => "cleanup_rlm",
    cleanup_zwnj => "cleanup_zwnj",
    fix_spacing_for_braces_and_quotes => "fix_spacing_for_braces_and_quotes",
    fix_arabic_numbers => "fix_arabic_numbers",
    fix_english_numbers => "fix_english_numbers",
    fix_question_mark => "fix_question_mark",
    /// Keep `1. ` at the start of a line in Latin digits.
    skip_markdown_ordered_lists_numbers_conversion => "skip_markdown_ordered_lists_numbers_conversion",
    fix_prefix_spacing => "fix_perfix_spacing",
    fix_suffix_spacing => "fix_suffix_spacing",
    /// `,` `;` `%` → `،` `؛` `٪`.
    fix_misc_non_persian_chars => "fix_misc_non_persian_chars",
    /// Accepted for compatibility; no rule reads it.
    aggressive => "aggresive",
    kashidas_as_parenthetic => "kashidas_as_parenthetic",
    cleanup_kashidas => "cleanup_kashidas",
    cleanup_extra_marks => "cleanup_extra_marks",
    cleanup_spacing => "cleanup_spacing",
    cleanup_begin_and_end => "cleanup_begin_and_end",
    preserve_html => "preserve_HTML",
    preserve_uris => "preserve_URIs",
    preserve_brackets => "preserve_brackets",
    preserve_braces => "preserve_braces",
    preserve_code => "preserve_code",
    preserve_pre => "preserve_pre",
}

impl Options {
    /// Overlay a JSON object onto `self`.
    ///
    /// Known keys must carry a boolean; unknown keys are ignored.
    pub fn overlay(mut self, map: &Map<String, Value>) -> Result<Self, OptionsError> {
        for (key, value) in map {
            if self.get(key).is_none() {
                log_debug!("ignoring unknown option `{}`", key);
                continue;
            }
            let Value::Bool(flag) = value else {
                return Err(OptionsError::NotBoolean {
                    key: key.clone(),
                    found: json_kind(value),
                });
            };
            self.set(key, *flag);
        }
        Ok(self)
    }

    /// Parse a JSON object and overlay it onto the defaults.
    pub fn from_json(document: &str) -> Result<Self, OptionsError> {
        match serde_json::from_str::<Value>(document)? {
            Value::Object(map) => Self::default().overlay(&map),
            other => Err(OptionsError::NotAnObject(json_kind(&other))),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn defaults_are_all_enabled() {
        let options = Options::default();
        assert_eq!(Options::KEYS.len(), 29);
        for key in Options::KEYS {
            assert_eq!(options.get(key), Some(true), "{key}");
        }
    }

    #[test]
    fn historical_spellings_are_the_external_names() {
        let mut options = Options::default();
        assert!(options.set("fix_perfix_spacing", false));
        assert!(options.set("aggresive", false));
        assert!(options.set("preserve_HTML", false));
        assert!(options.set("preserve_URIs", false));
        assert!(!options.fix_prefix_spacing);
        assert!(!options.aggressive);
        assert!(!options.preserve_html);
        assert!(!options.preserve_uris);
        assert!(!options.set("fix_prefix_spacing", false));
    }

    #[test]
    fn overlay_only_touches_given_keys() {
        let map = json!({ "preserve_brackets": false, "preserve_braces": false });
        let options = Options::default()
            .overlay(map.as_object().unwrap())
            .unwrap();
        assert!(!options.preserve_brackets);
        assert!(!options.preserve_braces);
        assert!(options.preserve_html);
        assert!(options.fix_dashes);
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let options = Options::from_json(r#"{"no_such_flag": 42, "fix_dashes": false}"#).unwrap();
        assert!(!options.fix_dashes);
        assert_eq!(options, Options { fix_dashes: false, ..Options::default() });
    }

    #[test]
    fn non_boolean_value_is_rejected() {
        let err = Options::from_json(r#"{"fix_dashes": "yes"}"#).unwrap_err();
        match err {
            OptionsError::NotBoolean { key, found } => {
                assert_eq!(key, "fix_dashes");
                assert_eq!(found, "string");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn document_must_be_an_object() {
        assert!(matches!(
            Options::from_json("[true]"),
            Err(OptionsError::NotAnObject("array"))
        ));
        assert!(matches!(Options::from_json("{"), Err(OptionsError::Json(_))));
    }

    #[test]
    fn none_disables_everything() {
        let options = Options::none();
        assert!(Options::KEYS.iter().all(|k| options.get(k) == Some(false)));
    }
}
