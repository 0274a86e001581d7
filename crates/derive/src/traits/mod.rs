//! This module contains the traits describing the L1 providers the data sources read from, and the
//! iterator interface the data sources expose.

mod data_sources;
pub use data_sources::{AsyncIterator, BlobProvider, DataAvailabilityProvider};

mod providers;
pub use providers::ChainProvider;
