//! How a profile runs its stages.
//!
//! A [`ChainedProcess`] nests stages by type, so a profile built with
//! `Profile::builder` is resolved at compile time. A [`DynamicProcess`] holds
//! boxed stages and serves the plugin builder and `Virgool::add_stage`.
use crate::{
    context::Context,
    stage::{Stage, StageError},
};
use smallvec::SmallVec;
use std::{borrow::Cow, sync::Arc};

/// Anything that turns text into normalized text: one stage, or many in order.
pub trait Process {
    fn process<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Result<Cow<'a, str>, StageError>;
}

/// Runs `stage` only when its pre-check asks for it; otherwise the buffer
/// passes through untouched.
#[inline(always)]
fn run_stage<'a, S: Stage + ?Sized>(
    stage: &S,
    text: Cow<'a, str>,
    ctx: &Context,
) -> Result<Cow<'a, str>, StageError> {
    if stage.needs_apply(&text, ctx)? {
        log_debug!("applying stage `{}`", stage.name());
        stage.apply(text, ctx)
    } else {
        Ok(text)
    }
}

/// The end of every chain.
pub struct EmptyProcess;

impl Process for EmptyProcess {
    #[inline(always)]
    fn process<'a>(&self, text: Cow<'a, str>, _ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        Ok(text)
    }
}

/// `previous` runs first, then `stage`.
pub struct ChainedProcess<S: Stage, P: Process> {
    pub stage: S,
    pub previous: P,
}

impl<S: Stage, P: Process> Process for ChainedProcess<S, P> {
    #[inline(always)]
    fn process<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        run_stage(&self.stage, self.previous.process(text, ctx)?, ctx)
    }
}

/// Stages in insertion order, chosen at runtime.
#[derive(Default)]
pub struct DynamicProcess {
    pub(crate) stages: SmallVec<[Arc<dyn Stage>; 12]>,
}

impl DynamicProcess {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `stage`; it runs after every stage already pushed.
    pub fn push<T: Stage + 'static>(mut self, stage: T) -> Self {
        self.stages.push(Arc::new(stage));
        self
    }

    /// Stage names, in execution order.
    pub fn stage_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.stages.iter().map(|s| s.name())
    }
}

impl Process for DynamicProcess {
    fn process<'a>(&self, text: Cow<'a, str>, ctx: &Context) -> Result<Cow<'a, str>, StageError> {
        self.stages
            .iter()
            .try_fold(text, |text, stage| run_stage(stage.as_ref(), text, ctx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ConvertTokens, NormalizePunctuation, NormalizeWhitespace};

    struct AlwaysFails;

    impl Stage for AlwaysFails {
        fn name(&self) -> &'static str {
            "always_fails"
        }

        fn needs_apply(&self, _text: &str, _ctx: &Context) -> Result<bool, StageError> {
            Ok(true)
        }

        fn apply<'a>(&self, _text: Cow<'a, str>, _ctx: &Context) -> Result<Cow<'a, str>, StageError> {
            Err(StageError::Failed("always_fails", "nope".into()))
        }
    }

    #[test]
    fn chained_runs_previous_first() {
        // Punctuation turns `٣` into `۳` before the token pass sees it, and the
        // whitespace pass trims last.
        let process = ChainedProcess {
            stage: NormalizeWhitespace,
            previous: ChainedProcess {
                stage: ConvertTokens,
                previous: ChainedProcess {
                    stage: NormalizePunctuation,
                    previous: EmptyProcess,
                },
            },
        };
        let out = process
            .process(Cow::Borrowed(" ٣ و 4 "), &Context::default())
            .unwrap();
        assert_eq!(out, "۳ و ۴");
    }

    #[test]
    fn dynamic_matches_static_and_skips_clean_text() {
        let process = DynamicProcess::new()
            .push(NormalizePunctuation)
            .push(ConvertTokens)
            .push(NormalizeWhitespace);
        assert_eq!(
            process.stage_names().collect::<Vec<_>>(),
            ["normalize_punctuation", "convert_tokens", "normalize_whitespace"]
        );
        let ctx = Context::default();
        assert_eq!(process.process(Cow::Borrowed(" ٣ و 4 "), &ctx).unwrap(), "۳ و ۴");

        let clean = "متن تمیز";
        let out = process.process(Cow::Borrowed(clean), &ctx).unwrap();
        assert!(matches!(out, Cow::Borrowed(s) if std::ptr::eq(s, clean)));
    }

    #[test]
    fn errors_propagate() {
        let process = DynamicProcess::new().push(AlwaysFails);
        let err = process
            .process(Cow::Borrowed("x"), &Context::default())
            .unwrap_err();
        assert_eq!(err.to_string(), "Normalization failed at stage `always_fails`: nope");
    }
}
