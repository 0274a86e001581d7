//! An implementation of the [ChainProvider] trait for tests.

use crate::{errors::ChainProviderError, traits::ChainProvider};
use alloc::{boxed::Box, vec::Vec};
use alloy_consensus::TxEnvelope;
use alloy_primitives::B256;
use async_trait::async_trait;
use confluence_primitives::block::BlockInfo;

/// A mock chain provider for testing.
#[derive(Debug, Clone, Default)]
pub struct TestChainProvider {
    /// Blocks known to the provider.
    pub blocks: Vec<BlockInfo>,
    /// Maps block hashes to transactions using a tuple list.
    pub transactions: Vec<(B256, Vec<TxEnvelope>)>,
    /// If set, every request fails with this error.
    pub error: Option<ChainProviderError>,
    /// The hashes of every requested block, in request order.
    pub requests: Vec<B256>,
}

impl TestChainProvider {
    /// Insert a block into the mock chain provider.
    pub fn insert_block(&mut self, block: BlockInfo) {
        self.blocks.push(block);
    }

    /// Insert a block with transactions into the mock chain provider.
    pub fn insert_block_with_transactions(&mut self, block: BlockInfo, txs: Vec<TxEnvelope>) {
        self.blocks.push(block);
        self.transactions.push((block.hash, txs));
    }

    /// Makes every subsequent request fail with the given error.
    pub fn set_error(&mut self, error: ChainProviderError) {
        self.error = Some(error);
    }
}

#[async_trait]
impl ChainProvider for TestChainProvider {
    type Error = ChainProviderError;

    async fn block_info_and_transactions_by_hash(
        &mut self,
        hash: B256,
    ) -> Result<(BlockInfo, Vec<TxEnvelope>), Self::Error> {
        self.requests.push(hash);
        if let Some(err) = &self.error {
            return Err(err.clone());
        }
        let block = self
            .blocks
            .iter()
            .find(|b| b.hash == hash)
            .copied()
            .ok_or(ChainProviderError::BlockNotFound(hash))?;
        let txs = self
            .transactions
            .iter()
            .find(|(h, _)| *h == hash)
            .map(|(_, txs)| txs.clone())
            .unwrap_or_default();
        Ok((block, txs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{PipelineErrorKind, ResetError};

    #[tokio::test]
    async fn test_missing_block_classifies_as_reset() {
        let mut provider = TestChainProvider::default();
        let hash = B256::repeat_byte(0x01);
        let err = provider.block_info_and_transactions_by_hash(hash).await.unwrap_err();
        assert_eq!(err, ChainProviderError::BlockNotFound(hash));
        let kind: PipelineErrorKind = err.into();
        assert_eq!(kind, ResetError::BlockNotFound(hash).reset());
        assert_eq!(provider.requests, vec![hash]);
    }

    #[tokio::test]
    async fn test_block_without_transactions() {
        let mut provider = TestChainProvider::default();
        let block = BlockInfo { hash: B256::repeat_byte(0x02), number: 3, ..Default::default() };
        provider.insert_block(block);
        let (info, txs) = provider.block_info_and_transactions_by_hash(block.hash).await.unwrap();
        assert_eq!(info, block);
        assert!(txs.is_empty());
    }
}
