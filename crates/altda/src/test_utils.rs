//! Test utilities for the alt-DA crate.

use crate::{commitment::CommitmentData, errors::AltDaError, traits::AltDaInputFetcher};
use alloc::{boxed::Box, collections::VecDeque, vec::Vec};
use alloy_primitives::Bytes;
use async_trait::async_trait;
use confluence_derive::traits::ChainProvider;
use confluence_primitives::block::BlockID;

/// A mock alt-DA input fetcher for testing.
#[derive(Debug, Clone, Default)]
pub struct TestAltDaInputFetcher {
    /// Results to return, in order.
    pub results: VecDeque<Result<Bytes, AltDaError>>,
    /// The arguments of every `get_input` call, in call order.
    pub calls: Vec<(CommitmentData, BlockID)>,
}

impl TestAltDaInputFetcher {
    /// Creates a fetcher that returns the given results in order.
    pub fn new(results: impl IntoIterator<Item = Result<Bytes, AltDaError>>) -> Self {
        Self { results: results.into_iter().collect(), calls: Vec::new() }
    }
}

#[async_trait]
impl<CP: ChainProvider + Send + Sync> AltDaInputFetcher<CP> for TestAltDaInputFetcher {
    /// Returns the next scripted result, or [AltDaError::NotFound] once the script is exhausted.
    async fn get_input(
        &mut self,
        _fetcher: &CP,
        commitment: &CommitmentData,
        block: BlockID,
    ) -> Result<Bytes, AltDaError> {
        self.calls.push((commitment.clone(), block));
        self.results.pop_front().unwrap_or(Err(AltDaError::NotFound))
    }
}
