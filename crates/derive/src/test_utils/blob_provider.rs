//! An implementation of the [BlobProvider] trait for tests.

use crate::{errors::BlobProviderError, traits::BlobProvider};
use alloc::{boxed::Box, vec::Vec};
use alloy_eips::eip4844::Blob;
use alloy_primitives::B256;
use async_trait::async_trait;
use confluence_primitives::{blob_hash::IndexedBlobHash, block::BlockInfo};

/// A mock blob provider for testing.
#[derive(Debug, Clone, Default)]
pub struct TestBlobProvider {
    /// Maps blob hashes to blob data using a tuple list.
    pub blobs: Vec<(B256, Blob)>,
    /// If set, every request fails with this error.
    pub error: Option<BlobProviderError>,
    /// The arguments of every `get_blobs` call, in call order.
    pub calls: Vec<(BlockInfo, Vec<IndexedBlobHash>)>,
}

impl TestBlobProvider {
    /// Insert a blob into the mock blob provider.
    pub fn insert_blob(&mut self, hash: B256, blob: Blob) {
        self.blobs.push((hash, blob));
    }

    /// Makes every subsequent request fail with the given error.
    pub fn set_error(&mut self, error: BlobProviderError) {
        self.error = Some(error);
    }
}

#[async_trait]
impl BlobProvider for TestBlobProvider {
    type Error = BlobProviderError;

    /// Returns the known blobs for the requested hashes. Unknown hashes are left out, so the
    /// response can be shorter than the request.
    async fn get_blobs(
        &mut self,
        block_ref: &BlockInfo,
        blob_hashes: &[IndexedBlobHash],
    ) -> Result<Vec<Box<Blob>>, Self::Error> {
        self.calls.push((*block_ref, blob_hashes.to_vec()));
        if let Some(err) = &self.error {
            return Err(err.clone());
        }
        Ok(blob_hashes
            .iter()
            .filter_map(|blob_hash| self.blobs.iter().find(|(h, _)| *h == blob_hash.hash))
            .map(|(_, blob)| Box::new(*blob))
            .collect())
    }
}
