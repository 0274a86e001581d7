//! Signed L1 transaction fixtures.

use alloc::vec::Vec;
use alloy_consensus::{SignableTransaction, TxEip1559, TxEip4844, TxEnvelope};
use alloy_primitives::{Address, Bytes, TxKind, B256, U256};
use alloy_signer::SignerSync;
use alloy_signer_local::PrivateKeySigner;

/// Returns a deterministic signer. Different seeds yield different addresses.
pub fn test_signer(seed: u8) -> PrivateKeySigner {
    let mut key = B256::repeat_byte(0x11);
    key.0[31] = seed.max(1);
    PrivateKeySigner::from_bytes(&key).expect("valid private key")
}

/// Returns an EIP-1559 transaction to `to` carrying `input`, signed by `signer`.
pub fn signed_calldata_tx(
    signer: &PrivateKeySigner,
    chain_id: u64,
    to: Address,
    input: Bytes,
) -> TxEnvelope {
    let tx = TxEip1559 {
        chain_id,
        nonce: 0,
        gas_limit: 100_000,
        max_fee_per_gas: 20_000_000_000,
        max_priority_fee_per_gas: 1_000_000_000,
        to: TxKind::Call(to),
        value: U256::ZERO,
        access_list: Default::default(),
        input,
    };
    let signature = signer.sign_hash_sync(&tx.signature_hash()).expect("signs");
    tx.into_signed(signature).into()
}

/// Returns an EIP-4844 transaction to `to` carrying `input` and referencing `blob_hashes`, signed
/// by `signer`.
pub fn signed_blob_tx(
    signer: &PrivateKeySigner,
    chain_id: u64,
    to: Address,
    input: Bytes,
    blob_hashes: Vec<B256>,
) -> TxEnvelope {
    let tx = TxEip4844 {
        chain_id,
        nonce: 0,
        gas_limit: 100_000,
        max_fee_per_gas: 20_000_000_000,
        max_priority_fee_per_gas: 1_000_000_000,
        to,
        value: U256::ZERO,
        access_list: Default::default(),
        blob_versioned_hashes: blob_hashes,
        max_fee_per_blob_gas: 20_000_000_000,
        input,
    };
    let signature = signer.sign_hash_sync(&tx.signature_hash()).expect("signs");
    tx.into_signed(signature).into()
}
