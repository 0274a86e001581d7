//! Errors returned by an [AltDaInputFetcher].
//!
//! [AltDaInputFetcher]: crate::traits::AltDaInputFetcher

use alloc::string::String;
use thiserror::Error;

/// The outcome of a failed alt-DA input lookup.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AltDaError {
    /// The challenge for a previously derived commitment expired, and the pipeline must be reset to
    /// drop the data derived from it.
    #[error("reorg required")]
    ReorgRequired,
    /// The commitment was challenged and the input was not resolved before the challenge expired.
    #[error("challenge expired")]
    ChallengeExpired,
    /// The input is missing and the challenge window for the commitment has passed.
    #[error("missing past window")]
    MissingPastWindow,
    /// The commitment is being challenged and the input may still be resolved on L1.
    #[error("challenge pending")]
    ChallengePending,
    /// The DA service does not know the input.
    #[error("input not found")]
    NotFound,
    /// Alt-DA is not enabled for this chain.
    #[error("alt-DA is not enabled")]
    NotEnabled,
    /// Error pertaining to the DA service transport.
    #[error("{0}")]
    Backend(String),
}
