#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod blob;
pub mod blob_hash;
pub mod block;

/// The prelude exports common types and traits.
pub mod prelude {
    pub use crate::{
        blob::{BlobData, BlobDecodingError, BLOB_ENCODING_VERSION, BLOB_MAX_DATA_SIZE},
        blob_hash::IndexedBlobHash,
        block::{BlockID, BlockInfo},
    };
}

pub use alloy_eips::eip4844::{Blob, BYTES_PER_BLOB};
