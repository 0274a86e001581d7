//! EIP4844 blob body codec.
//!
//! Batch data is packed into a blob as 4096 field elements of 32 bytes each. The two high order
//! bits of every field element must be zero, so each field element carries 31 full bytes plus 6
//! bits. Every group of 4 field elements (one "round") carries 127 bytes of data: 4 × 31 bytes, plus
//! 3 bytes reassembled from the 4 × 6 bit chunks held in the first byte of each field element. The
//! first field element additionally holds the encoding version and a 3 byte big-endian length.

use alloc::{boxed::Box, vec};
use alloy_eips::eip4844::{Blob, BYTES_PER_BLOB};
use alloy_primitives::Bytes;
use thiserror::Error;

/// The blob encoding version
pub const BLOB_ENCODING_VERSION: u8 = 0;

/// Maximum blob data size
pub const BLOB_MAX_DATA_SIZE: usize = (4 * 31 + 3) * 1024 - 4; // 130044

/// Blob Encoding/Decoding Rounds
pub(crate) const BLOB_ENCODING_ROUNDS: usize = 1024;

/// Offset of the encoding version byte within the first field element.
const BLOB_VERSION_OFFSET: usize = 1;

/// Blob Decoding Error
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlobDecodingError {
    /// Invalid field element
    #[error("Invalid field element")]
    InvalidFieldElement,
    /// Invalid encoding version
    #[error("Invalid encoding version")]
    InvalidEncodingVersion,
    /// Invalid length
    #[error("Invalid length")]
    InvalidLength,
    /// Missing Data
    #[error("Missing data")]
    MissingData,
}

/// A blob slot. Empty until the blob body is fetched and filled in.
#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct BlobData {
    /// The blob body
    pub data: Option<Box<Blob>>,
}

impl BlobData {
    /// Creates a [BlobData] holding the given blob body.
    pub const fn new(blob: Box<Blob>) -> Self {
        Self { data: Some(blob) }
    }

    /// Fills in the fetched blob body.
    pub fn fill(&mut self, blob: Box<Blob>) {
        self.data = Some(blob);
    }

    /// Returns if the blob body has not been filled in.
    pub const fn is_empty(&self) -> bool {
        self.data.is_none()
    }

    /// Decodes the blob into raw byte data.
    /// Returns a [BlobDecodingError] if the blob is invalid.
    pub fn decode(&self) -> Result<Bytes, BlobDecodingError> {
        let data = &self.data.as_ref().ok_or(BlobDecodingError::MissingData)?.0;

        // Validate the blob encoding version
        if data[BLOB_VERSION_OFFSET] != BLOB_ENCODING_VERSION {
            return Err(BlobDecodingError::InvalidEncodingVersion);
        }

        // Decode the 3 byte big endian length value into a 4 byte integer
        let length = u32::from_be_bytes([0, data[2], data[3], data[4]]) as usize;

        // Validate the length
        if length > BLOB_MAX_DATA_SIZE {
            return Err(BlobDecodingError::InvalidLength);
        }

        // Round 0 copies the remaining 27 bytes of the first field element
        let mut output = vec![0u8; BLOB_MAX_DATA_SIZE];
        output[0..27].copy_from_slice(&data[5..32]);

        // Process the remaining 3 field elements to complete round 0
        let mut output_pos = 28;
        let mut input_pos = 32;
        let mut encoded_byte = [0u8; 4];
        encoded_byte[0] = data[0];

        for b in encoded_byte.iter_mut().skip(1) {
            let (enc, opos, ipos) =
                Self::decode_field_element(data, output_pos, input_pos, &mut output)?;
            *b = enc;
            output_pos = opos;
            input_pos = ipos;
        }

        // Reassemble the 4 by 6 bit encoded chunks into 3 bytes of output
        output_pos = Self::reassemble_bytes(output_pos, &encoded_byte, &mut output);

        // In each remaining round, decode 4 field elements (128 bytes) of the
        // input into 127 bytes of output
        for _ in 1..BLOB_ENCODING_ROUNDS {
            if output_pos >= length {
                break;
            }

            for d in &mut encoded_byte {
                let (enc, opos, ipos) =
                    Self::decode_field_element(data, output_pos, input_pos, &mut output)?;
                *d = enc;
                output_pos = opos;
                input_pos = ipos;
            }
            output_pos = Self::reassemble_bytes(output_pos, &encoded_byte, &mut output);
        }

        // Everything past the declared length must be zero, in both the output and the blob.
        if output.iter().skip(length).any(|b| *b != 0) {
            return Err(BlobDecodingError::InvalidFieldElement);
        }
        output.truncate(length);
        if data[input_pos..].iter().any(|b| *b != 0) {
            return Err(BlobDecodingError::InvalidFieldElement);
        }

        Ok(Bytes::from(output))
    }

    /// Decodes the next input field element by writing its lower 31 bytes into its
    /// appropriate place in the output and checking the high order byte is valid.
    /// Returns a [BlobDecodingError] if a field element is seen with either of its
    /// two high order bits set.
    fn decode_field_element(
        data: &[u8; BYTES_PER_BLOB],
        output_pos: usize,
        input_pos: usize,
        output: &mut [u8],
    ) -> Result<(u8, usize, usize), BlobDecodingError> {
        // two highest order bits of the first byte of each field element should always be 0
        if data[input_pos] & 0b1100_0000 != 0 {
            return Err(BlobDecodingError::InvalidFieldElement);
        }
        output[output_pos..output_pos + 31].copy_from_slice(&data[input_pos + 1..input_pos + 32]);
        Ok((data[input_pos], output_pos + 32, input_pos + 32))
    }

    /// Reassemble 4 by 6 bit encoded chunks into 3 bytes of output and place them in their
    /// appropriate output positions.
    fn reassemble_bytes(mut output_pos: usize, encoded_byte: &[u8; 4], output: &mut [u8]) -> usize {
        output_pos -= 1;
        let x = (encoded_byte[0] & 0b0011_1111) | ((encoded_byte[1] & 0b0011_0000) << 2);
        let y = (encoded_byte[1] & 0b0000_1111) | ((encoded_byte[3] & 0b0000_1111) << 4);
        let z = (encoded_byte[2] & 0b0011_1111) | ((encoded_byte[3] & 0b0011_0000) << 2);
        output[output_pos - 32] = z;
        output[output_pos - (32 * 2)] = y;
        output[output_pos - (32 * 3)] = x;
        output_pos
    }

    /// Encodes raw byte data into a blob body, the inverse of [BlobData::decode].
    /// Returns [BlobDecodingError::InvalidLength] if the data does not fit in a blob.
    pub fn encode(data: &[u8]) -> Result<Box<Blob>, BlobDecodingError> {
        if data.len() > BLOB_MAX_DATA_SIZE {
            return Err(BlobDecodingError::InvalidLength);
        }

        let mut blob = Box::new(Blob::ZERO);
        let mut read = 0;
        let mut write = 0;
        let mut buf = [0u8; 31];

        for round in 0..BLOB_ENCODING_ROUNDS {
            if read >= data.len() {
                break;
            }

            // The first field element carries the version and the length in bytes [1:5].
            if round == 0 {
                buf[0] = BLOB_ENCODING_VERSION;
                buf[1..4].copy_from_slice(&(data.len() as u32).to_be_bytes()[1..]);
                let n = data.len().min(27);
                buf[4..4 + n].copy_from_slice(&data[..n]);
                buf[4 + n..].fill(0);
                read += n;
            } else {
                read += read_31(data, read, &mut buf);
            }
            let x = read_1(data, &mut read);
            write_field_element(&mut blob.0, &mut write, x & 0b0011_1111, &buf);

            read += read_31(data, read, &mut buf);
            let y = read_1(data, &mut read);
            write_field_element(
                &mut blob.0,
                &mut write,
                (y & 0b0000_1111) | ((x & 0b1100_0000) >> 2),
                &buf,
            );

            read += read_31(data, read, &mut buf);
            let z = read_1(data, &mut read);
            write_field_element(&mut blob.0, &mut write, z & 0b0011_1111, &buf);

            read += read_31(data, read, &mut buf);
            write_field_element(
                &mut blob.0,
                &mut write,
                ((z & 0b1100_0000) >> 2) | ((y & 0b1111_0000) >> 4),
                &buf,
            );
        }

        Ok(blob)
    }
}

/// Copies up to 31 bytes of `data` starting at `offset` into `buf`, zero padding the rest.
/// Returns the number of bytes read.
fn read_31(data: &[u8], offset: usize, buf: &mut [u8; 31]) -> usize {
    let n = data.len().saturating_sub(offset).min(31);
    buf[..n].copy_from_slice(&data[offset..offset + n]);
    buf[n..].fill(0);
    n
}

/// Reads a single byte of `data`, or zero past its end.
fn read_1(data: &[u8], offset: &mut usize) -> u8 {
    data.get(*offset).map_or(0, |b| {
        *offset += 1;
        *b
    })
}

/// Writes a field element made of the 6 bit high order byte and 31 bytes of `buf`.
fn write_field_element(
    blob: &mut [u8; BYTES_PER_BLOB],
    offset: &mut usize,
    high: u8,
    buf: &[u8; 31],
) {
    blob[*offset] = high;
    blob[*offset + 1..*offset + 32].copy_from_slice(buf);
    *offset += 32;
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use proptest::prelude::*;

    #[test]
    fn test_is_empty() {
        let blob_data = BlobData::default();
        assert!(blob_data.is_empty());
    }

    #[test]
    fn test_fill_blob() {
        let mut blob_data = BlobData::default();
        blob_data.fill(Box::new(Blob::with_last_byte(1u8)));
        assert!(!blob_data.is_empty());
        assert_eq!(blob_data.data.unwrap().0[BYTES_PER_BLOB - 1], 1);
    }

    #[test]
    fn test_reassemble_bytes() {
        let mut output = vec![0u8; 128];
        let encoded_byte = [0x00, 0x00, 0x00, 0x00];
        let output_pos = BlobData::reassemble_bytes(127, &encoded_byte, &mut output);
        assert_eq!(output_pos, 126);
        assert_eq!(output, vec![0u8; 128]);
    }

    #[test]
    fn test_blob_data_decode_missing_data() {
        let blob_data = BlobData::default();
        assert_eq!(blob_data.decode(), Err(BlobDecodingError::MissingData));
    }

    #[test]
    fn test_blob_data_decode_invalid_encoding_version() {
        let mut blob = Box::new(Blob::ZERO);
        blob.0[BLOB_VERSION_OFFSET] = 1;
        let blob_data = BlobData::new(blob);
        assert_eq!(blob_data.decode(), Err(BlobDecodingError::InvalidEncodingVersion));
    }

    #[test]
    fn test_blob_data_decode_invalid_length() {
        let mut blob = Box::new(Blob::ZERO);
        blob.0[2] = 0xFF;
        blob.0[3] = 0xFF;
        blob.0[4] = 0xFF;
        let blob_data = BlobData::new(blob);
        assert_eq!(blob_data.decode(), Err(BlobDecodingError::InvalidLength));
    }

    #[test]
    fn test_blob_data_decode_invalid_field_element() {
        let mut blob = BlobData::encode(b"hello world").unwrap();
        // Set the high order bits of the second field element.
        blob.0[32] |= 0b1100_0000;
        assert_eq!(BlobData::new(blob).decode(), Err(BlobDecodingError::InvalidFieldElement));
    }

    #[test]
    fn test_blob_data_decode_trailing_data() {
        let mut blob = BlobData::encode(b"hello world").unwrap();
        blob.0[BYTES_PER_BLOB - 1] = 1;
        assert_eq!(BlobData::new(blob).decode(), Err(BlobDecodingError::InvalidFieldElement));
    }

    #[test]
    fn test_blob_data_decode_zero_blob() {
        let blob_data = BlobData::new(Box::new(Blob::ZERO));
        assert_eq!(blob_data.decode(), Ok(Bytes::new()));
    }

    #[test]
    fn test_encode_too_large() {
        let data = vec![1u8; BLOB_MAX_DATA_SIZE + 1];
        assert_eq!(BlobData::encode(&data), Err(BlobDecodingError::InvalidLength));
    }

    #[test]
    fn test_encode_decode_max_size() {
        let data = (0..BLOB_MAX_DATA_SIZE).map(|i| (i % 251) as u8).collect::<Vec<_>>();
        let blob = BlobData::encode(&data).unwrap();
        assert_eq!(BlobData::new(blob).decode().unwrap().as_ref(), data.as_slice());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn test_decode_recovers_encoded_data(data in proptest::collection::vec(any::<u8>(), 0..2048)) {
            let blob = BlobData::encode(&data).unwrap();
            let decoded = BlobData::new(blob).decode().unwrap();
            prop_assert_eq!(decoded.as_ref(), data.as_slice());
        }
    }
}
