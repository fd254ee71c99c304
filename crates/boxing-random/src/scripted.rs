//! Scripted source for deterministic tests

use crate::{check_sample, RandomError};
use boxing_domain::traits::RandomSource;
use std::collections::VecDeque;

/// Random source that replays a fixed script of draws and failures
///
/// Once the script runs out every call fails with `Unavailable`.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    script: VecDeque<Result<f64, RandomError>>,
    calls: usize,
}

impl ScriptedSource {
    /// Create a source that returns `draws` in order
    pub fn new(draws: impl IntoIterator<Item = f64>) -> Self {
        Self {
            script: draws.into_iter().map(Ok).collect(),
            calls: 0,
        }
    }

    /// Queue another draw
    pub fn push(&mut self, draw: f64) -> &mut Self {
        self.script.push_back(Ok(draw));
        self
    }

    /// Queue a failure
    pub fn push_error(&mut self, error: RandomError) -> &mut Self {
        self.script.push_back(Err(error));
        self
    }

    /// Number of times `next` has been called
    pub fn calls(&self) -> usize {
        self.calls
    }

    /// Number of scripted entries not yet consumed
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl RandomSource for ScriptedSource {
    type Error = RandomError;

    fn next(&mut self) -> Result<f64, Self::Error> {
        self.calls += 1;
        match self.script.pop_front() {
            Some(entry) => entry.and_then(check_sample),
            None => Err(RandomError::Unavailable("Scripted source is exhausted".to_string())),
        }
    }
}
