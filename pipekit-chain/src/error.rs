//! Error types for pipekit-chain.
//!
//! Two kinds of failure are kept apart:
//! - Building a chain (`ChainError`): the stage cap from settings was hit.
//! - Running a `TryChain` (`StageError`): a stage returned `Err`.

use thiserror::Error;

/// Errors raised while assembling a chain.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChainError {
    /// Adding the stage would exceed `ChainSettings::max_stages`.
    #[error("chain `{chain}` is capped at {limit} stages; cannot add `{stage}`")]
    StageLimitExceeded {
        chain: String,
        stage: String,
        limit: usize,
    },
}

/// A stage of a `TryChain` returned an error.
///
/// `source` is the stage's error exactly as returned; the other fields only say
/// where it happened.
#[derive(Debug, Error)]
#[error("chain `{chain}` failed at stage {index} (`{stage}`): {source}")]
pub struct StageError<E>
where
    E: std::error::Error + 'static,
{
    pub chain: String,
    pub stage: String,
    pub index: usize,
    #[source]
    pub source: E,
}

impl<E> StageError<E>
where
    E: std::error::Error + 'static,
{
    /// Drop the location and return the stage's own error.
    pub fn into_source(self) -> E {
        self.source
    }
}
