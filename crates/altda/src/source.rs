//! Contains the [MixedSource], a data iterator over the calldata, blob and alt-DA submissions of
//! the batcher in a single L1 block.

use crate::{
    commitment::{CommitmentData, CommitmentType, TX_DATA_VERSION_1},
    errors::AltDaError,
    traits::AltDaInputFetcher,
};
use alloc::{boxed::Box, collections::VecDeque, format, string::ToString, vec::Vec};
use alloy_consensus::{Transaction, TxEnvelope};
use alloy_eips::eip4844::Blob;
use alloy_primitives::{Address, Bytes};
use async_trait::async_trait;
use confluence_derive::{
    batch_tx::is_valid_batch_tx,
    config::SourceConfig,
    ensure,
    errors::{PipelineError, PipelineErrorKind, PipelineResult, ResetError},
    traits::{AsyncIterator, BlobProvider, ChainProvider},
};
use confluence_primitives::{blob::BlobData, blob_hash::IndexedBlobHash, block::BlockInfo};
use tracing::{debug, error, warn};

/// A pending data item of a [MixedSource].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlobOrCalldata {
    /// A blob. Empty until its body is fetched.
    Blob(BlobData),
    /// The calldata of a batcher transaction.
    Calldata(Bytes),
}

/// A data iterator that reads the batcher's submissions in an L1 block, in submission order.
///
/// The block is fetched on the first call to [AsyncIterator::next]. Items are then served one at
/// a time: blob bodies are decoded, calldata is forwarded as-is, and calldata tagged with
/// [TX_DATA_VERSION_1] is decoded as an alt-DA commitment and resolved through the
/// [AltDaInputFetcher]. The iterator holds no state across blocks and is discarded once it returns
/// [PipelineError::Eof] or a critical error.
///
/// Block fetch failures take the severity of the [ChainProvider]'s error: a missing block must
/// convert to a [PipelineErrorKind::Reset], anything else to a [PipelineErrorKind::Temporary].
///
/// A commitment stays pending until the fetcher answers for it, so a pull that is cancelled while
/// resolving an alt-DA input retries the same commitment.
#[derive(Debug, Clone)]
pub struct MixedSource<CP, B, F>
where
    CP: ChainProvider + Send + Sync,
    B: BlobProvider + Send,
    F: AltDaInputFetcher<CP> + Send,
{
    /// Chain provider.
    pub chain_provider: CP,
    /// Fetches blob bodies.
    pub blob_fetcher: B,
    /// Resolves alt-DA commitments.
    pub altda_fetcher: F,
    /// The source configuration.
    pub config: SourceConfig,
    /// The address of the batcher.
    pub batcher_address: Address,
    /// Block Ref
    pub block_ref: BlockInfo,
    /// The items left to serve. `None` until the block is opened.
    pub data: Option<VecDeque<BlobOrCalldata>>,
    /// The commitment being resolved, if any.
    pub commitment: Option<CommitmentData>,
}

impl<CP, B, F> MixedSource<CP, B, F>
where
    CP: ChainProvider + Send + Sync,
    B: BlobProvider + Send,
    F: AltDaInputFetcher<CP> + Send,
{
    /// Creates a new, unopened mixed source for the given block.
    pub const fn new(
        chain_provider: CP,
        blob_fetcher: B,
        altda_fetcher: F,
        config: SourceConfig,
        block_ref: BlockInfo,
        batcher_address: Address,
    ) -> Self {
        Self {
            chain_provider,
            blob_fetcher,
            altda_fetcher,
            config,
            batcher_address,
            block_ref,
            data: None,
            commitment: None,
        }
    }

    /// Fetches the block's transactions and builds the list of items to serve, with blob bodies
    /// filled in.
    async fn load(&mut self) -> PipelineResult<VecDeque<BlobOrCalldata>> {
        let hash = self.block_ref.hash;
        let (_, txs) = self
            .chain_provider
            .block_info_and_transactions_by_hash(hash)
            .await
            .map_err(Into::<PipelineErrorKind>::into)?;

        let (mut data, hashes) =
            extract_data_and_hashes(&txs, &self.config, self.batcher_address);
        debug!(
            target: "mixed-source",
            "Opened block {} with {} items, {} of them blobs",
            self.block_ref.number,
            data.len(),
            hashes.len()
        );

        if hashes.is_empty() {
            return Ok(data.into());
        }

        let blobs = match self.blob_fetcher.get_blobs(&self.block_ref, &hashes).await {
            Ok(blobs) => blobs,
            Err(err) => {
                warn!(
                    target: "blob-resolution",
                    "Failed to fetch {} blobs for block {}, continuing with calldata only: {err}",
                    hashes.len(),
                    self.block_ref.number
                );
                data.retain(|item| matches!(item, BlobOrCalldata::Calldata(_)));
                return Ok(data.into());
            }
        };

        if let Err(err) = fill_blobs(&mut data, blobs) {
            error!(
                target: "blob-resolution",
                "Failed to fill blobs for block {}: {err}",
                self.block_ref.number
            );
            return Err(err);
        }
        debug!(target: "blob-resolution", "Resolved {} blobs", hashes.len());

        Ok(data.into())
    }

    /// Resolves an alt-DA commitment. Returns `None` if the input must be skipped.
    async fn resolve_commitment(
        &mut self,
        commitment: &CommitmentData,
    ) -> PipelineResult<Option<Bytes>> {
        let block = self.block_ref.id();
        let result = self.altda_fetcher.get_input(&self.chain_provider, commitment, block).await;
        let data = match result {
            Ok(data) => data,
            Err(err @ AltDaError::ReorgRequired) => {
                // The challenge for a previously derived commitment expired.
                return Err(ResetError::AltDaReorgRequired(err.to_string()).reset());
            }
            Err(AltDaError::ChallengeExpired) => {
                warn!(
                    target: "mixed-source",
                    "Challenge expired, skipping batch with commitment {commitment}"
                );
                return Ok(None);
            }
            Err(err @ AltDaError::MissingPastWindow) => {
                return Err(PipelineError::AltDa(format!(
                    "data for commitment {commitment} not available: {err}"
                ))
                .crit());
            }
            Err(AltDaError::ChallengePending) => {
                debug!(target: "mixed-source", "Challenge pending for commitment {commitment}");
                return Err(PipelineError::NotEnoughData.temp());
            }
            Err(err) => {
                return Err(PipelineError::AltDa(format!(
                    "failed to fetch input data with commitment {commitment}: {err}"
                ))
                .temp());
            }
        };

        // Keccak256 inputs must stay small enough to be challenged on L1.
        if commitment.commitment_type() == CommitmentType::Keccak256 &&
            data.len() > self.config.max_input_size
        {
            warn!(
                target: "mixed-source",
                "Input data exceeds max size, skipping: {} > {}",
                data.len(),
                self.config.max_input_size
            );
            return Ok(None);
        }

        Ok(Some(data))
    }
}

#[async_trait]
impl<CP, B, F> AsyncIterator for MixedSource<CP, B, F>
where
    CP: ChainProvider + Send + Sync,
    B: BlobProvider + Send,
    F: AltDaInputFetcher<CP> + Send,
{
    type Item = Bytes;

    async fn next(&mut self) -> PipelineResult<Self::Item> {
        if self.data.is_none() {
            let data = self.load().await?;
            self.data = Some(data);
        }

        loop {
            if let Some(commitment) = self.commitment.clone() {
                let resolved = self.resolve_commitment(&commitment).await;
                self.commitment = None;
                if let Some(data) = resolved? {
                    return Ok(data);
                }
            }

            let Some(next) = self.data.as_mut().and_then(VecDeque::pop_front) else {
                return Err(PipelineError::Eof.temp());
            };

            let calldata = match next {
                BlobOrCalldata::Blob(blob) => {
                    if blob.is_empty() {
                        return Err(PipelineError::UnresolvedBlob.crit());
                    }
                    match blob.decode() {
                        Ok(data) => return Ok(data),
                        Err(err) => {
                            error!(
                                target: "mixed-source",
                                "Ignoring blob due to parse failure: {err}"
                            );
                            continue;
                        }
                    }
                }
                BlobOrCalldata::Calldata(calldata) => calldata,
            };

            let Some((version, commitment)) = calldata.split_first() else {
                return Err(PipelineError::NotEnoughData.temp());
            };

            // Calldata that is not an alt-DA commitment is forwarded for the frame decoder to
            // validate.
            if *version != TX_DATA_VERSION_1 {
                return Ok(calldata);
            }

            match CommitmentData::decode(commitment) {
                Ok(commitment) => self.commitment = Some(commitment),
                Err(err) => {
                    warn!(target: "mixed-source", "Invalid commitment {calldata}: {err}");
                    return Err(PipelineError::NotEnoughData.temp());
                }
            }
        }
    }
}

/// Scans the block's transactions for the batcher's submissions.
///
/// Returns the items in submission order, with an empty blob slot for every blob, and the hashes
/// of those blobs. Blob indices count every blob in the block, including the blobs of transactions
/// that are not from the batcher.
pub fn extract_data_and_hashes(
    txs: &[TxEnvelope],
    config: &SourceConfig,
    batcher_address: Address,
) -> (Vec<BlobOrCalldata>, Vec<IndexedBlobHash>) {
    let mut data = Vec::new();
    let mut hashes = Vec::new();
    let mut index = 0u64;
    for tx in txs {
        let blob_hashes = tx.blob_versioned_hashes().unwrap_or_default();
        if !is_valid_batch_tx(tx, config, batcher_address) {
            index += blob_hashes.len() as u64;
            continue;
        }

        if !tx.input().is_empty() {
            data.push(BlobOrCalldata::Calldata(tx.input().clone()));
        }
        for hash in blob_hashes {
            data.push(BlobOrCalldata::Blob(BlobData::default()));
            hashes.push(IndexedBlobHash::new(index, *hash));
            index += 1;
        }
    }
    (data, hashes)
}

/// Fills the blob slots in `data` with `blobs`, in order. Fails if the number of blobs does not
/// match the number of slots.
pub fn fill_blobs(data: &mut [BlobOrCalldata], blobs: Vec<Box<Blob>>) -> PipelineResult<()> {
    let expected = data.iter().filter(|item| matches!(item, BlobOrCalldata::Blob(_))).count();
    let got = blobs.len();
    ensure!(expected == got, PipelineError::BlobCountMismatch(expected, got).crit());

    let slots = data.iter_mut().filter_map(|item| match item {
        BlobOrCalldata::Blob(slot) => Some(slot),
        BlobOrCalldata::Calldata(_) => None,
    });
    for (slot, blob) in slots.zip(blobs) {
        slot.fill(blob);
    }
    Ok(())
}
