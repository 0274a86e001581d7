//! Indexed Blob Hash.

use alloy_primitives::B256;

/// A blob hash paired with the position of its blob in the block's blob sidecar.
///
/// The index counts every blob in the block, including blobs carried by transactions that are not
/// batcher transactions, since blob bodies are addressed by their position in the full sidecar.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IndexedBlobHash {
    /// The index of the blob
    pub index: u64,
    /// The hash of the blob
    pub hash: B256,
}

impl IndexedBlobHash {
    /// Creates a new [IndexedBlobHash].
    pub const fn new(index: u64, hash: B256) -> Self {
        Self { index, hash }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indexed_blob_hash() {
        let hash = B256::from([1; 32]);
        let indexed_blob_hash = IndexedBlobHash::new(1, hash);

        assert_eq!(indexed_blob_hash.index, 1);
        assert_eq!(indexed_blob_hash.hash, hash);
    }

    #[test]
    #[cfg(feature = "serde")]
    fn test_indexed_blob_hash_serde_roundtrip() {
        let hash = B256::from([1; 32]);
        let indexed_blob_hash = IndexedBlobHash { index: 1, hash };

        let serialized = serde_json::to_string(&indexed_blob_hash).unwrap();
        let deserialized: IndexedBlobHash = serde_json::from_str(&serialized).unwrap();

        assert_eq!(indexed_blob_hash, deserialized);
    }
}
