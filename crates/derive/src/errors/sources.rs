//! Error types for the L1 providers.

use super::{PipelineError, PipelineErrorKind, ResetError};
use alloc::string::{String, ToString};
use alloy_primitives::B256;
use thiserror::Error;

/// An error returned by a [ChainProvider].
///
/// [ChainProvider]: crate::traits::ChainProvider
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChainProviderError {
    /// The requested block is not known to the provider.
    #[error("Block not found: {0}")]
    BlockNotFound(B256),
    /// Error pertaining to the backend transport.
    #[error("{0}")]
    Backend(String),
}

impl From<ChainProviderError> for PipelineErrorKind {
    fn from(val: ChainProviderError) -> Self {
        match val {
            ChainProviderError::BlockNotFound(hash) => ResetError::BlockNotFound(hash).reset(),
            ChainProviderError::Backend(_) => PipelineError::Provider(val.to_string()).temp(),
        }
    }
}

/// An error returned by a [BlobProvider].
///
/// [BlobProvider]: crate::traits::BlobProvider
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BlobProviderError {
    /// Error pertaining to the backend transport.
    #[error("{0}")]
    Backend(String),
}
