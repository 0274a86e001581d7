//! The filter that picks batcher transactions out of an L1 block.

use crate::config::SourceConfig;
use alloy_consensus::{transaction::SignerRecoverable, Transaction, TxEnvelope};
use alloy_primitives::Address;
use tracing::warn;

/// Returns `true` if the transaction was sent to the batch inbox by the batcher.
///
/// A transaction qualifies when it calls the configured batch inbox address, is signed for the
/// configured L1 chain (pre-EIP-155 legacy transactions carry no chain ID and are accepted), and
/// its signature recovers to `batcher_address`.
pub fn is_valid_batch_tx(tx: &TxEnvelope, cfg: &SourceConfig, batcher_address: Address) -> bool {
    if tx.to() != Some(cfg.batch_inbox_address) {
        return false;
    }

    if let Some(chain_id) = tx.chain_id() {
        if chain_id != cfg.l1_chain_id {
            warn!(
                target: "batch-tx",
                "tx in inbox signed for chain {chain_id}, expected {}: {}",
                cfg.l1_chain_id,
                tx.tx_hash()
            );
            return false;
        }
    }

    match tx.recover_signer() {
        Ok(signer) if signer == batcher_address => true,
        Ok(signer) => {
            warn!(
                target: "batch-tx",
                "tx in inbox with unauthorized submitter {signer}: {}",
                tx.tx_hash()
            );
            false
        }
        Err(err) => {
            warn!(target: "batch-tx", "tx in inbox with invalid signature: {err}");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{
        signed_blob_tx, signed_calldata_tx, test_signer, CollectingLayer, TraceStorage,
    };
    use alloy_primitives::{address, Bytes, B256};
    use tracing::Level;
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    const INBOX: Address = address!("ff00000000000000000000000000000000000010");

    fn cfg() -> SourceConfig {
        SourceConfig::new(1, INBOX)
    }

    #[test]
    fn test_valid_calldata_tx() {
        let signer = test_signer(1);
        let tx = signed_calldata_tx(&signer, 1, INBOX, Bytes::from_static(&[0x00, 0x01]));
        assert!(is_valid_batch_tx(&tx, &cfg(), signer.address()));
    }

    #[test]
    fn test_valid_blob_tx() {
        let signer = test_signer(1);
        let tx = signed_blob_tx(&signer, 1, INBOX, Bytes::new(), vec![B256::repeat_byte(1)]);
        assert!(is_valid_batch_tx(&tx, &cfg(), signer.address()));
    }

    #[test]
    fn test_wrong_inbox() {
        let signer = test_signer(1);
        let tx = signed_calldata_tx(&signer, 1, Address::ZERO, Bytes::from_static(&[0x00]));
        assert!(!is_valid_batch_tx(&tx, &cfg(), signer.address()));
    }

    #[test]
    fn test_unauthorized_submitter() {
        let trace_store: TraceStorage = Default::default();
        let layer = CollectingLayer::new(trace_store.clone());
        let _guard = tracing_subscriber::Registry::default().with(layer).set_default();

        let signer = test_signer(1);
        let other = test_signer(2);
        let tx = signed_calldata_tx(&other, 1, INBOX, Bytes::from_static(&[0x00]));
        assert!(!is_valid_batch_tx(&tx, &cfg(), signer.address()));

        let logs = trace_store.get_by_level(Level::WARN);
        assert_eq!(logs.len(), 1);
        assert!(logs[0].contains("unauthorized submitter"));
    }

    #[test]
    fn test_wrong_chain_id() {
        let signer = test_signer(1);
        let tx = signed_calldata_tx(&signer, 5, INBOX, Bytes::from_static(&[0x00]));
        assert!(!is_valid_batch_tx(&tx, &cfg(), signer.address()));
    }
}
