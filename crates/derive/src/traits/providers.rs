//! Chain providers for the data sources.

use crate::errors::PipelineErrorKind;
use alloc::{boxed::Box, string::ToString, vec::Vec};
use alloy_consensus::TxEnvelope;
use alloy_primitives::B256;
use async_trait::async_trait;
use confluence_primitives::block::BlockInfo;
use core::fmt::Display;

/// Describes the functionality of a data source that can provide information from the blockchain.
#[async_trait]
pub trait ChainProvider {
    /// The error type for the [ChainProvider].
    ///
    /// Converting into a [PipelineErrorKind] must classify a missing block as a reset and every
    /// other failure as temporary.
    type Error: Display + ToString + Into<PipelineErrorKind>;

    /// Returns the [BlockInfo] and list of [TxEnvelope]s from the given block hash.
    async fn block_info_and_transactions_by_hash(
        &mut self,
        hash: B256,
    ) -> Result<(BlockInfo, Vec<TxEnvelope>), Self::Error>;
}
