//! Error types for the confluence data sources.

mod pipeline;
pub use pipeline::{PipelineError, PipelineErrorKind, PipelineResult, ResetError};

mod sources;
pub use sources::{BlobProviderError, ChainProviderError};
