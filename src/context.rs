// src/context.rs
// Runtime state shared by every stage of one normalization run.
// Tiny and Copy: stages read flags from it in their hot paths.

use crate::options::Options;

/// Runtime context passed to every normalization stage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Context {
    pub options: Options,
}

impl Context {
    #[inline(always)]
    pub fn new(options: Options) -> Self {
        Self { options }
    }

    /// Start from `options` and let the caller flip individual flags.
    #[inline(always)]
    pub fn with_modified(options: Options, f: impl FnOnce(&mut Options)) -> Self {
        let mut options = options;
        f(&mut options);
        Self { options }
    }
}
