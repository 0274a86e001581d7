//! This module contains the traits for the alt-DA extension of the derivation pipeline.

use crate::{commitment::CommitmentData, errors::AltDaError};
use alloc::boxed::Box;
use alloy_primitives::Bytes;
use async_trait::async_trait;
use confluence_derive::traits::ChainProvider;
use confluence_primitives::block::BlockID;

/// Resolves alt-DA commitments to their inputs.
#[async_trait]
pub trait AltDaInputFetcher<CP: ChainProvider + Send + Sync> {
    /// Get the input for the given commitment at the given block from the DA storage service.
    ///
    /// `fetcher` gives the implementation access to L1, which it needs to track the challenge
    /// status of the commitment.
    async fn get_input(
        &mut self,
        fetcher: &CP,
        commitment: &CommitmentData,
        block: BlockID,
    ) -> Result<Bytes, AltDaError>;
}

/// The fetcher of a chain without alt-DA. Every lookup fails with [AltDaError::NotEnabled].
#[async_trait]
impl<CP: ChainProvider + Send + Sync> AltDaInputFetcher<CP> for () {
    async fn get_input(
        &mut self,
        _fetcher: &CP,
        _commitment: &CommitmentData,
        _block: BlockID,
    ) -> Result<Bytes, AltDaError> {
        Err(AltDaError::NotEnabled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use confluence_derive::test_utils::TestChainProvider;

    #[tokio::test]
    async fn test_disabled_fetcher() {
        let chain_provider = TestChainProvider::default();
        let commitment = CommitmentData::keccak256(b"input");
        let result = <() as AltDaInputFetcher<TestChainProvider>>::get_input(
            &mut (),
            &chain_provider,
            &commitment,
            BlockID::default(),
        )
        .await;
        assert_eq!(result, Err(AltDaError::NotEnabled));
    }
}
