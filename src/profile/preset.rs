use crate::{
    CanonicalizeChars, CleanupMarks, ConvertTokens, FixAffixSpacing, FixBraceSpacing,
    NormalizePunctuation, NormalizeWhitespace, NormalizeZwnj, process::Process, profile::Profile,
};

/// The full pipeline, in its canonical order.
pub fn standard() -> Profile<impl Process> {
    Profile::builder("standard")
        .add_stage(CanonicalizeChars)
        .add_stage(NormalizePunctuation)
        .add_stage(NormalizeZwnj)
        .add_stage(ConvertTokens)
        .add_stage(FixAffixSpacing)
        .add_stage(CleanupMarks)
        .add_stage(FixBraceSpacing)
        .add_stage(NormalizeWhitespace)
        .build()
}

/// Letters, punctuation, joiners and digits only. Spacing is left exactly as
/// it was, which suits text that is aligned or laid out by hand.
pub fn orthography() -> Profile<impl Process> {
    Profile::builder("orthography")
        .add_stage(CanonicalizeChars)
        .add_stage(NormalizePunctuation)
        .add_stage(NormalizeZwnj)
        .add_stage(ConvertTokens)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::Context;
    use std::borrow::Cow;

    #[test]
    fn orthography_keeps_spacing() {
        let ctx = Context::default();
        let out = orthography()
            .run(Cow::Borrowed("  كتاب ( 12 )  "), &ctx)
            .unwrap();
        assert_eq!(out, "  کتاب ( ۱۲ )  ");
    }

    #[test]
    fn standard_fixes_spacing_too() {
        let ctx = Context::default();
        let out = standard()
            .run(Cow::Borrowed("  كتاب ( 12 )  "), &ctx)
            .unwrap();
        assert_eq!(out, "کتاب (۱۲)");
    }
}
