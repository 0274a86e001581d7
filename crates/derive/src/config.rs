//! Contains the [SourceConfig], the chain parameters a data source needs to pick out batcher
//! transactions.

use alloy_primitives::Address;

/// Max input size ensures the canonical chain cannot include input batches too large to
/// challenge in the Data Availability Challenge contract. Value in number of bytes.
/// This value can only be changed in a hard fork.
pub const MAX_INPUT_SIZE: usize = 130672;

/// The configuration of an L1 data source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SourceConfig {
    /// The L1 chain ID batcher transactions are signed for.
    pub l1_chain_id: u64,
    /// The address batcher transactions are sent to.
    pub batch_inbox_address: Address,
    /// The largest input that a keccak256 alt-DA commitment may resolve to.
    #[cfg_attr(feature = "serde", serde(default = "default_max_input_size"))]
    pub max_input_size: usize,
}

impl SourceConfig {
    /// Creates a new [SourceConfig] with the default maximum alt-DA input size.
    pub const fn new(l1_chain_id: u64, batch_inbox_address: Address) -> Self {
        Self { l1_chain_id, batch_inbox_address, max_input_size: MAX_INPUT_SIZE }
    }

    /// Sets the maximum alt-DA input size.
    pub const fn with_max_input_size(mut self, max_input_size: usize) -> Self {
        self.max_input_size = max_input_size;
        self
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self::new(1, Address::ZERO)
    }
}

#[cfg(feature = "serde")]
const fn default_max_input_size() -> usize {
    MAX_INPUT_SIZE
}
