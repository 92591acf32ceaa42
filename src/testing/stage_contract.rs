use crate::{context::Context, options::Options, stage::Stage};
use std::borrow::Cow;

/// Trait that stages implement to opt into the universal test suite.
pub trait StageTestConfig: Stage + Sized {
    /// General test samples (may or may not trigger changes).
    fn samples() -> &'static [&'static str] {
        &["سلام دنیا", "Hello World", " متن  کوتاه ", ""]
    }

    /// Samples that must come back unchanged and without allocating.
    fn should_pass_through() -> &'static [&'static str] {
        &["hello", "world", "abc def", "سلام", ""]
    }

    /// Input/output pairs under the default options.
    fn should_transform() -> &'static [(&'static str, &'static str)] {
        &[]
    }

    /// `false` for stages that run regardless of the flags.
    fn gated_by_options() -> bool {
        true
    }
}

/// Assert that a stage satisfies the universal contracts every stage in the
/// pipeline relies on:
///
/// 1. `zero_copy_when_no_changes` → clean input comes back as the same buffer
/// 2. `stage_is_idempotent` → applying twice yields the same result as once
/// 3. `needs_apply_is_sound` → `false` is only ever returned for text `apply` leaves alone
/// 4. `handles_empty_string_and_ascii` → graceful on edge cases
/// 5. `no_panic_on_mixed_scripts` → survives pathological real-world input
/// 6. `disabled_flags_are_a_no_op` → with every flag off the stage does nothing
#[macro_export]
macro_rules! assert_stage_contract {
    ($stage:expr) => {
        $crate::testing::stage_contract::zero_copy_when_no_changes(&$stage);
        $crate::testing::stage_contract::stage_is_idempotent(&$stage);
        $crate::testing::stage_contract::needs_apply_is_sound(&$stage);
        $crate::testing::stage_contract::handles_empty_string_and_ascii(&$stage);
        $crate::testing::stage_contract::no_panic_on_mixed_scripts(&$stage);
        $crate::testing::stage_contract::disabled_flags_are_a_no_op(&$stage);
    };
}

// ============================================================================
// Universal contract tests
// ============================================================================

fn run<'a, S: Stage>(stage: &S, text: Cow<'a, str>, ctx: &Context) -> Cow<'a, str> {
    if stage.needs_apply(&text, ctx).unwrap() {
        stage.apply(text, ctx).unwrap()
    } else {
        text
    }
}

pub fn zero_copy_when_no_changes<S: StageTestConfig>(stage: &S) {
    let ctx = Context::default();

    for &input in S::should_pass_through() {
        let out = run(stage, Cow::Borrowed(input), &ctx);
        assert_eq!(out.as_ref(), input, "stage `{}` changed `{input}`", stage.name());
        assert!(
            std::ptr::eq(input, out.as_ref()),
            "zero-copy violated on pass-through sample (stage: `{}`, input: `{input}`)",
            stage.name()
        );

        // apply() alone must honour the same guarantee, even when needs_apply
        // would have skipped it.
        let out = stage.apply(Cow::Borrowed(input), &ctx).unwrap();
        assert!(matches!(out, Cow::Borrowed(s) if std::ptr::eq(s, input)));
    }

    for &(input, expected) in S::should_transform() {
        let out = run(stage, Cow::Borrowed(input), &ctx);
        assert_eq!(
            out.as_ref(),
            expected,
            "stage `{}` on `{input}`",
            stage.name()
        );
    }
}

pub fn stage_is_idempotent<S: StageTestConfig>(stage: &S) {
    let ctx = Context::default();
    let inputs = S::samples()
        .iter()
        .copied()
        .chain(S::should_transform().iter().map(|&(input, _)| input));
    for input in inputs {
        let once = stage.apply(Cow::Borrowed(input), &ctx).unwrap();
        let twice = stage.apply(Cow::Owned(once.to_string()), &ctx).unwrap();
        assert_eq!(
            once,
            twice,
            "apply() of `{}` not idempotent on `{input}`",
            stage.name()
        );
    }
}

pub fn needs_apply_is_sound<S: StageTestConfig>(stage: &S) {
    let ctx = Context::default();
    let inputs = S::samples()
        .iter()
        .chain(S::should_pass_through())
        .copied()
        .chain(S::should_transform().iter().map(|&(input, _)| input))
        .chain(["", "hello", "world123", " !@#"]);
    for input in inputs {
        check_soundness(stage, input, &ctx);
    }

    for &(input, expected) in S::should_transform() {
        if input != expected {
            assert!(
                stage.needs_apply(input, &ctx).unwrap(),
                "needs_apply() of `{}` missed `{input}`",
                stage.name()
            );
        }
    }
}

#[inline(always)]
fn check_soundness<S: Stage>(stage: &S, input: &str, ctx: &Context) {
    let predicted = stage.needs_apply(input, ctx).expect("needs_apply errored");
    // Owned input so that stages which rebuild their buffer are not penalised.
    let output = stage
        .apply(Cow::Owned(input.to_owned()), ctx)
        .expect("apply errored");
    if !predicted {
        assert_eq!(
            output,
            input,
            "needs_apply() of `{}` said no, but apply() changed `{input}`",
            stage.name()
        );
    }
}

pub fn handles_empty_string_and_ascii<S: StageTestConfig>(stage: &S) {
    let ctx = Context::default();
    let empty = run(stage, Cow::Borrowed(""), &ctx);
    assert_eq!(empty.as_ref(), "");

    let ascii = "hello world";
    let result = stage.apply(Cow::Borrowed(ascii), &ctx).unwrap();
    assert_eq!(result.as_ref(), ascii);
}

pub fn no_panic_on_mixed_scripts<S: StageTestConfig>(stage: &S) {
    let ctx = Context::default();
    for input in [
        "Hello 世界 русский Türkçe العربية 简体中文",
        "فارسی\u{200c}\u{200c} ۱۲۳ ٤٥ 6?! \"' ` “ « ( [ {",
        "\r\n\r\u{200f}\u{200c}ـــ---...",
        "می ",
        " ها",
        "\"",
    ] {
        let _ = stage.apply(Cow::Borrowed(input), &ctx);
    }
}

pub fn disabled_flags_are_a_no_op<S: StageTestConfig>(stage: &S) {
    if !S::gated_by_options() {
        return;
    }
    let ctx = Context::new(Options::none());
    let inputs = S::samples()
        .iter()
        .copied()
        .chain(S::should_transform().iter().map(|&(input, _)| input));
    for input in inputs {
        assert!(!stage.needs_apply(input, &ctx).unwrap());
        let out = stage.apply(Cow::Borrowed(input), &ctx).unwrap();
        assert!(
            matches!(out, Cow::Borrowed(s) if std::ptr::eq(s, input)),
            "stage `{}` touched `{input}` with every flag off",
            stage.name()
        );
    }
}
