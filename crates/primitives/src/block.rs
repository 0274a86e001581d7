//! This module contains the L1 block reference types.

use alloy_primitives::{BlockHash, BlockNumber, B256};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Block Header Info
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub struct BlockInfo {
    /// The block hash
    pub hash: B256,
    /// The block number
    pub number: u64,
    /// The parent block hash
    pub parent_hash: B256,
    /// The block timestamp
    pub timestamp: u64,
}

impl BlockInfo {
    /// Instantiates a new [BlockInfo].
    pub const fn new(hash: B256, number: u64, parent_hash: B256, timestamp: u64) -> Self {
        Self { hash, number, parent_hash, timestamp }
    }

    /// Returns the block ID.
    pub const fn id(&self) -> BlockID {
        BlockID { hash: self.hash, number: self.number }
    }
}

impl core::fmt::Display for BlockInfo {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "BlockInfo {{ hash: {}, number: {}, parent_hash: {}, timestamp: {} }}",
            self.hash, self.number, self.parent_hash, self.timestamp
        )
    }
}

/// Block ID identifies a block by its hash and number
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub struct BlockID {
    /// The block hash
    pub hash: BlockHash,
    /// The block number
    pub number: BlockNumber,
}

impl core::fmt::Display for BlockID {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{{ hash: {}, number: {} }}", self.hash, self.number)
    }
}

impl From<BlockInfo> for BlockID {
    fn from(info: BlockInfo) -> Self {
        info.id()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloy_primitives::b256;

    #[test]
    fn test_block_info_id() {
        let hash = b256!("1111111111111111111111111111111111111111111111111111111111111111");
        let info = BlockInfo::new(hash, 42, B256::ZERO, 1_700_000_000);
        assert_eq!(info.id(), BlockID { hash, number: 42 });
        assert_eq!(BlockID::from(info), info.id());
    }

    #[test]
    fn test_block_id_display() {
        let id = BlockID { hash: B256::ZERO, number: 7 };
        assert_eq!(
            id.to_string(),
            "{ hash: 0x0000000000000000000000000000000000000000000000000000000000000000, number: 7 }"
        );
    }

    #[test]
    #[cfg(feature = "serde")]
    fn test_block_info_serde_roundtrip() {
        let info = BlockInfo { number: 10, timestamp: 12, ..Default::default() };
        let serialized = serde_json::to_string(&info).unwrap();
        let deserialized: BlockInfo = serde_json::from_str(&serialized).unwrap();
        assert_eq!(info, deserialized);
    }
}
