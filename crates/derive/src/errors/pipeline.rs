//! This module contains the errors surfaced by the data sources to the derivation pipeline.

use alloc::string::String;
use alloy_primitives::B256;

/// A result type for the data source iterators.
pub type PipelineResult<T> = Result<T, PipelineErrorKind>;

/// [crate::ensure] is a short-hand for bubbling up errors in the case of a condition not being met.
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $err:expr) => {
        if !($cond) {
            return Err($err);
        }
    };
}

/// A top level filter for [PipelineError] that sorts by severity.
///
/// The severity tells the caller how to recover: retry the same call ([Self::Temporary]), roll
/// back to a safe point ([Self::Reset]), or stop ([Self::Critical]).
#[derive(derive_more::Display, Debug, PartialEq, Eq)]
pub enum PipelineErrorKind {
    /// A temporary error.
    #[display("Temporary error: {_0}")]
    Temporary(PipelineError),
    /// A critical error.
    #[display("Critical error: {_0}")]
    Critical(PipelineError),
    /// A reset error.
    #[display("Pipeline reset: {_0}")]
    Reset(ResetError),
}

impl PipelineErrorKind {
    /// Returns `true` if the error is the end-of-data signal.
    pub const fn is_eof(&self) -> bool {
        matches!(self, Self::Temporary(PipelineError::Eof))
    }

    /// Returns `true` if the error asks the caller to retry once more data is available.
    pub const fn is_not_enough_data(&self) -> bool {
        matches!(self, Self::Temporary(PipelineError::NotEnoughData))
    }
}

impl From<ResetError> for PipelineErrorKind {
    fn from(err: ResetError) -> Self {
        Self::Reset(err)
    }
}

impl core::error::Error for PipelineErrorKind {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Temporary(err) => Some(err),
            Self::Critical(err) => Some(err),
            Self::Reset(err) => Some(err),
        }
    }
}

/// An error encountered while reading data from L1.
#[derive(derive_more::Display, Debug, PartialEq, Eq)]
pub enum PipelineError {
    /// The data source has no more data for the current block.
    #[display("EOF")]
    Eof,
    /// There is not enough data to complete the processing of the stage. If the operation is
    /// re-tried, more data will come in allowing the pipeline to progress, or eventually a
    /// [PipelineError::Eof] will be encountered.
    #[display("Not enough data")]
    NotEnoughData,
    /// The resolved blob bodies could not be matched up with the blob references in the block.
    #[display("Blob count mismatch: expected {_0}, got {_1}")]
    BlobCountMismatch(usize, usize),
    /// A blob item was read before its body was filled in.
    #[display("Blob read before its body was resolved")]
    UnresolvedBlob,
    /// An alt-DA input could not be resolved.
    #[display("Alt-DA error: {_0}")]
    AltDa(String),
    /// Provider error variant.
    #[display("Provider error: {_0}")]
    Provider(String),
}

impl core::error::Error for PipelineError {}

impl PipelineError {
    /// Wrap [PipelineError] as a [PipelineErrorKind::Critical].
    pub const fn crit(self) -> PipelineErrorKind {
        PipelineErrorKind::Critical(self)
    }

    /// Wrap [PipelineError] as a [PipelineErrorKind::Temporary].
    pub const fn temp(self) -> PipelineErrorKind {
        PipelineErrorKind::Temporary(self)
    }
}

/// A reset error
#[derive(derive_more::Display, Clone, Debug, Eq, PartialEq)]
pub enum ResetError {
    /// The block being read is no longer known to the L1 provider.
    #[display("Block not found: {_0}")]
    BlockNotFound(B256),
    /// The alt-DA manager requires the pipeline to be reset, typically because a challenge for a
    /// previously derived commitment expired.
    #[display("Alt-DA reorg required: {_0}")]
    AltDaReorgRequired(String),
}

impl core::error::Error for ResetError {}

impl ResetError {
    /// Wrap [ResetError] as a [PipelineErrorKind::Reset].
    pub const fn reset(self) -> PipelineErrorKind {
        PipelineErrorKind::Reset(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use core::error::Error;

    #[test]
    fn test_pipeline_error_kind_source() {
        let err = PipelineErrorKind::Temporary(PipelineError::Eof);
        assert!(err.source().is_some());

        let err = PipelineErrorKind::Critical(PipelineError::Eof);
        assert!(err.source().is_some());

        let err = PipelineErrorKind::Reset(ResetError::BlockNotFound(Default::default()));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_pipeline_error_source() {
        let err = PipelineError::Eof;
        assert!(err.source().is_none());

        let err = PipelineError::AltDa("missing past window".to_string());
        assert!(err.source().is_none());
    }

    #[test]
    fn test_signal_predicates() {
        assert!(PipelineError::Eof.temp().is_eof());
        assert!(!PipelineError::Eof.crit().is_eof());
        assert!(PipelineError::NotEnoughData.temp().is_not_enough_data());
        assert!(!PipelineError::NotEnoughData.temp().is_eof());
        assert!(!ResetError::BlockNotFound(B256::ZERO).reset().is_not_enough_data());
    }

    #[test]
    fn test_reset_error_kinds() {
        let reset_errors = [
            ResetError::BlockNotFound(Default::default()),
            ResetError::AltDaReorgRequired("reorg required".to_string()),
        ];
        for error in reset_errors.into_iter() {
            let expected = PipelineErrorKind::Reset(error.clone());
            assert_eq!(error.reset(), expected);
        }
    }

    #[test]
    fn test_error_display() {
        let err = PipelineError::BlobCountMismatch(2, 1).crit();
        assert_eq!(err.to_string(), "Critical error: Blob count mismatch: expected 2, got 1");

        let err = PipelineError::NotEnoughData.temp();
        assert_eq!(err.to_string(), "Temporary error: Not enough data");

        let err: PipelineErrorKind = ResetError::AltDaReorgRequired("reorg".to_string()).into();
        assert_eq!(err.to_string(), "Pipeline reset: Alt-DA reorg required: reorg");
    }
}
