#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), no_std)]
#![cfg_attr(not(any(test, feature = "test-utils")), warn(unused_crate_dependencies))]

extern crate alloc;

/// Re-export commonly used types and traits.
pub mod prelude {
    pub use crate::{
        batch_tx::is_valid_batch_tx,
        config::SourceConfig,
        errors::{PipelineError, PipelineErrorKind, PipelineResult, ResetError},
        traits::{AsyncIterator, BlobProvider, ChainProvider, DataAvailabilityProvider},
    };
}

pub mod batch_tx;
pub mod config;
pub mod errors;
pub mod traits;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use confluence_primitives::prelude::*;
