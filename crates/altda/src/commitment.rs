//! Alt-DA commitments.
//!
//! A batcher transaction that posts to an alt-DA service carries a commitment instead of the batch
//! itself. The transaction data is laid out as
//!
//! ```text
//! tx_data_version (1 byte) | commitment_type (1 byte) | commitment payload
//! ```
//!
//! where the version is [TX_DATA_VERSION_1]. Keccak256 commitments carry the 32 byte hash of the
//! input, generic commitments carry an opaque, non-empty payload interpreted by the DA service.

use alloc::vec::Vec;
use alloy_primitives::{keccak256, Bytes, B256};
use thiserror::Error;

/// TxDataVersion1 is the version number for batcher transactions containing
/// alt-DA commitments. It should not collide with DerivationVersion which is still
/// used downstream when parsing the frames.
pub const TX_DATA_VERSION_1: u8 = 1;

/// The commitment type byte of a [CommitmentData::Keccak256] commitment.
pub const KECCAK_256_COMMITMENT_TYPE: u8 = 0;

/// The commitment type byte of a [CommitmentData::Generic] commitment.
pub const GENERIC_COMMITMENT_TYPE: u8 = 1;

/// An error decoding or verifying a commitment.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitmentError {
    /// The commitment holds no bytes at all.
    #[error("Empty commitment")]
    Empty,
    /// The commitment type byte is unknown.
    #[error("Unknown commitment type: {0}")]
    UnknownType(u8),
    /// A keccak256 commitment payload is not 32 bytes long.
    #[error("Invalid keccak256 commitment length: {0}")]
    InvalidKeccak256Length(usize),
    /// A generic commitment carries no payload.
    #[error("Empty generic commitment")]
    EmptyGeneric,
    /// The input does not hash to the commitment.
    #[error("Commitment mismatch")]
    Mismatch,
}

/// The type of a commitment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum CommitmentType {
    /// The commitment is the keccak256 hash of the input.
    Keccak256 = KECCAK_256_COMMITMENT_TYPE,
    /// The commitment is opaque to the derivation pipeline.
    Generic = GENERIC_COMMITMENT_TYPE,
}

impl TryFrom<u8> for CommitmentType {
    type Error = CommitmentError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            KECCAK_256_COMMITMENT_TYPE => Ok(Self::Keccak256),
            GENERIC_COMMITMENT_TYPE => Ok(Self::Generic),
            other => Err(CommitmentError::UnknownType(other)),
        }
    }
}

/// A decoded alt-DA commitment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CommitmentData {
    /// A keccak256 commitment.
    Keccak256(B256),
    /// A generic commitment.
    Generic(Bytes),
}

impl CommitmentData {
    /// Creates the keccak256 commitment to the given input.
    pub fn keccak256(input: &[u8]) -> Self {
        Self::Keccak256(keccak256(input))
    }

    /// Decodes a commitment from `commitment_type | payload`, with the transaction data version
    /// byte already stripped.
    pub fn decode(data: &[u8]) -> Result<Self, CommitmentError> {
        let (ty, payload) = data.split_first().ok_or(CommitmentError::Empty)?;
        match CommitmentType::try_from(*ty)? {
            CommitmentType::Keccak256 => {
                if payload.len() != B256::len_bytes() {
                    return Err(CommitmentError::InvalidKeccak256Length(payload.len()));
                }
                Ok(Self::Keccak256(B256::from_slice(payload)))
            }
            CommitmentType::Generic => {
                if payload.is_empty() {
                    return Err(CommitmentError::EmptyGeneric);
                }
                Ok(Self::Generic(Bytes::copy_from_slice(payload)))
            }
        }
    }

    /// Returns the [CommitmentType].
    pub const fn commitment_type(&self) -> CommitmentType {
        match self {
            Self::Keccak256(_) => CommitmentType::Keccak256,
            Self::Generic(_) => CommitmentType::Generic,
        }
    }

    /// Returns the commitment payload, without the type byte.
    pub fn payload(&self) -> &[u8] {
        match self {
            Self::Keccak256(hash) => hash.as_slice(),
            Self::Generic(bytes) => bytes.as_ref(),
        }
    }

    /// Encodes the commitment as `commitment_type | payload`.
    pub fn encode(&self) -> Bytes {
        let payload = self.payload();
        let mut out = Vec::with_capacity(1 + payload.len());
        out.push(self.commitment_type() as u8);
        out.extend_from_slice(payload);
        out.into()
    }

    /// Encodes the commitment as batcher transaction data, prefixed with [TX_DATA_VERSION_1].
    pub fn tx_data(&self) -> Bytes {
        let encoded = self.encode();
        let mut out = Vec::with_capacity(1 + encoded.len());
        out.push(TX_DATA_VERSION_1);
        out.extend_from_slice(&encoded);
        out.into()
    }

    /// Checks that `input` is the data committed to. Generic commitments cannot be checked
    /// locally and always pass.
    pub fn verify(&self, input: &[u8]) -> Result<(), CommitmentError> {
        match self {
            Self::Keccak256(hash) if *hash != keccak256(input) => Err(CommitmentError::Mismatch),
            _ => Ok(()),
        }
    }
}

impl core::fmt::Display for CommitmentData {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.encode())
    }
}
