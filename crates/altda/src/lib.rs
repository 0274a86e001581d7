#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), no_std)]
#![cfg_attr(not(any(test, feature = "test-utils")), warn(unused_crate_dependencies))]

extern crate alloc;

pub mod commitment;
pub mod data_source;
pub mod errors;
pub mod source;
pub mod traits;

/// The prelude exports common types and traits.
pub mod prelude {
    pub use crate::{
        commitment::{CommitmentData, CommitmentError, CommitmentType, TX_DATA_VERSION_1},
        data_source::MixedDataSource,
        errors::AltDaError,
        source::{BlobOrCalldata, MixedSource},
        traits::AltDaInputFetcher,
    };
    pub use confluence_derive::config::{SourceConfig, MAX_INPUT_SIZE};
}

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
