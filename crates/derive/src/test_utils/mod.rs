//! Test Utilities for `confluence-derive`.

mod blob_provider;
pub use blob_provider::TestBlobProvider;

mod chain_providers;
pub use chain_providers::TestChainProvider;

mod tracing;
pub use tracing::{CollectedEvent, CollectingLayer, TraceStorage};

mod transactions;
pub use transactions::{signed_blob_tx, signed_calldata_tx, test_signer};
