//! Contains the [MixedDataSource], which is a concrete implementation of the
//! [DataAvailabilityProvider] trait that reads calldata, blobs and alt-DA inputs.

use crate::{source::MixedSource, traits::AltDaInputFetcher};
use alloc::{boxed::Box, fmt::Debug};
use alloy_primitives::{Address, Bytes};
use async_trait::async_trait;
use confluence_derive::{
    config::SourceConfig,
    errors::PipelineResult,
    traits::{BlobProvider, ChainProvider, DataAvailabilityProvider},
};
use confluence_primitives::block::BlockInfo;

/// A factory for [MixedSource]s. Opens a fresh source for every L1 block.
#[derive(Debug, Clone)]
pub struct MixedDataSource<CP, B, F>
where
    CP: ChainProvider + Send + Sync + Clone,
    B: BlobProvider + Send + Clone,
    F: AltDaInputFetcher<CP> + Send + Clone,
{
    /// The chain provider to use for the factory.
    pub chain_provider: CP,
    /// The blob provider.
    pub blob_provider: B,
    /// The alt-DA input fetcher.
    pub altda_fetcher: F,
    /// The source configuration.
    pub config: SourceConfig,
}

impl<CP, B, F> MixedDataSource<CP, B, F>
where
    CP: ChainProvider + Send + Sync + Clone,
    B: BlobProvider + Send + Clone,
    F: AltDaInputFetcher<CP> + Send + Clone,
{
    /// Creates a new factory.
    pub const fn new(
        chain_provider: CP,
        blob_provider: B,
        altda_fetcher: F,
        config: SourceConfig,
    ) -> Self {
        Self { chain_provider, blob_provider, altda_fetcher, config }
    }
}

#[async_trait]
impl<CP, B, F> DataAvailabilityProvider for MixedDataSource<CP, B, F>
where
    CP: ChainProvider + Send + Sync + Clone + Debug,
    B: BlobProvider + Send + Sync + Clone + Debug,
    F: AltDaInputFetcher<CP> + Send + Sync + Clone + Debug,
{
    type Item = Bytes;
    type DataIter = MixedSource<CP, B, F>;

    async fn open_data(
        &self,
        block_ref: &BlockInfo,
        batcher_address: Address,
    ) -> PipelineResult<Self::DataIter> {
        Ok(MixedSource::new(
            self.chain_provider.clone(),
            self.blob_provider.clone(),
            self.altda_fetcher.clone(),
            self.config,
            *block_ref,
            batcher_address,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{commitment::CommitmentData, test_utils::TestAltDaInputFetcher};
    use alloc::vec;
    use alloy_primitives::{address, B256};
    use confluence_derive::{
        test_utils::{signed_calldata_tx, test_signer, TestBlobProvider, TestChainProvider},
        traits::AsyncIterator,
    };

    const INBOX: Address = address!("ff00000000000000000000000000000000000010");

    #[tokio::test]
    async fn test_open_data_creates_unopened_source() {
        let batcher = test_signer(1);
        let block = BlockInfo { hash: B256::repeat_byte(0x01), number: 5, ..Default::default() };
        let mut chain_provider = TestChainProvider::default();
        chain_provider.insert_block_with_transactions(
            block,
            vec![
                signed_calldata_tx(&batcher, 1, INBOX, Bytes::from_static(&[0x00, 0x01])),
                signed_calldata_tx(&batcher, 1, INBOX, CommitmentData::keccak256(b"in").tx_data()),
            ],
        );
        let altda = TestAltDaInputFetcher::new([Ok(Bytes::from_static(b"in"))]);
        let factory = MixedDataSource::new(
            chain_provider,
            TestBlobProvider::default(),
            altda,
            SourceConfig::new(1, INBOX),
        );

        let mut source = factory.open_data(&block, batcher.address()).await.unwrap();
        assert_eq!(source.block_ref, block);
        assert_eq!(source.batcher_address, batcher.address());
        assert!(source.data.is_none());

        assert_eq!(source.next().await.unwrap(), Bytes::from_static(&[0x00, 0x01]));
        assert_eq!(source.next().await.unwrap(), Bytes::from_static(b"in"));
        assert!(source.next().await.unwrap_err().is_eof());

        // Every opened source starts from the factory's state, not a previous source's.
        let mut again = factory.open_data(&block, batcher.address()).await.unwrap();
        assert!(again.data.is_none());
        assert_eq!(again.next().await.unwrap(), Bytes::from_static(&[0x00, 0x01]));
    }

    #[tokio::test]
    async fn test_open_data_other_batcher() {
        let batcher = test_signer(1);
        let block = BlockInfo { hash: B256::repeat_byte(0x01), ..Default::default() };
        let mut chain_provider = TestChainProvider::default();
        chain_provider.insert_block_with_transactions(
            block,
            vec![signed_calldata_tx(&batcher, 1, INBOX, Bytes::from_static(&[0x00, 0x01]))],
        );
        let config = SourceConfig::new(1, INBOX);
        let factory = MixedDataSource::new(chain_provider, TestBlobProvider::default(), (), config);

        let mut source = factory.open_data(&block, test_signer(2).address()).await.unwrap();
        assert!(source.next().await.unwrap_err().is_eof());
    }
}
