use thiserror::Error;

use crate::{
    CanonicalizeChars, CleanupMarks, ConvertTokens, FixAffixSpacing, FixBraceSpacing,
    NormalizePunctuation, NormalizeWhitespace, NormalizeZwnj,
    context::Context,
    options::Options,
    process::{DynamicProcess, Process},
    profile::{Profile, ProfileError},
    spans,
    stage::{Stage, StageError},
};
use std::borrow::Cow;

#[derive(Debug, Error)]
pub enum VirgoolError {
    #[error("stage error: {0}")]
    Stage(#[from] StageError),
    #[error("profile error: {0}")]
    Profile(#[from] ProfileError),
}

/// Reusable normalizer: resolved options plus a stage list, run between span
/// protection and restoration.
pub struct Virgool {
    ctx: Context,
    pipeline: DynamicProcess,
}

impl Default for Virgool {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl Virgool {
    pub fn builder() -> VirgoolBuilder {
        VirgoolBuilder::default()
    }

    pub fn options(&self) -> &Options {
        &self.ctx.options
    }

    /// Normalize `text`. Borrows the input when nothing changes.
    pub fn normalize<'a>(&self, text: &'a str) -> Result<Cow<'a, str>, VirgoolError> {
        let (protected, mut registry) = spans::protect(Cow::Borrowed(text), &self.ctx.options);
        let processed = self.pipeline.process(protected, &self.ctx)?;
        Ok(reborrow(registry.restore(processed), text))
    }

    /// Run a caller-built profile instead of the configured stages, inside
    /// the same protect/restore bracket.
    pub fn normalize_with_profile<'a, P: Process>(
        &self,
        profile: &Profile<P>,
        text: &'a str,
    ) -> Result<Cow<'a, str>, VirgoolError> {
        let (protected, mut registry) = spans::protect(Cow::Borrowed(text), &self.ctx.options);
        let processed = profile.run(protected, &self.ctx)?;
        Ok(reborrow(registry.restore(processed), text))
    }
}

#[derive(Default)]
pub struct VirgoolBuilder {
    options: Options,
    pipeline: Option<DynamicProcess>,
}

impl VirgoolBuilder {
    pub fn options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }

    /// Replace the standard stage list with custom stages, run in the order
    /// they are added.
    pub fn add_stage<T: Stage + 'static>(mut self, stage: T) -> Self {
        let pipeline = self.pipeline.take().unwrap_or_default();
        self.pipeline = Some(pipeline.push(stage));
        self
    }

    pub fn build(self) -> Virgool {
        let ctx = Context::new(self.options);
        let pipeline = self.pipeline.unwrap_or_else(standard_stages);
        Virgool { ctx, pipeline }
    }
}

/// Stages such as brace spacing may rebuild text that was already in normal
/// form; hand the caller's buffer back in that case.
#[inline]
fn reborrow<'a>(out: Cow<'a, str>, input: &'a str) -> Cow<'a, str> {
    match out {
        Cow::Owned(s) if s == input => Cow::Borrowed(input),
        other => other,
    }
}

fn standard_stages() -> DynamicProcess {
    DynamicProcess::new()
        .push(CanonicalizeChars)
        .push(NormalizePunctuation)
        .push(NormalizeZwnj)
        .push(ConvertTokens)
        .push(FixAffixSpacing)
        .push(CleanupMarks)
        .push(FixBraceSpacing)
        .push(NormalizeWhitespace)
}
