//! Address checksum: CRC-32C truncated to 16 bits.
//!
//! This guards against transcription typos. It is not a MAC and says nothing
//! about who produced an address.

use crc::{Crc, CRC_32_ISCSI};

/// Length of the checksum in bytes.
pub const CHECKSUM_LEN: usize = 2;

/// CRC-32 with the Castagnoli polynomial (iSCSI, SCTP).
const CRC32C: Crc<u32> = Crc::<u32>::new(&CRC_32_ISCSI);

/// Compute the 2-byte checksum of `payload`.
///
/// The low 16 bits of the CRC-32C, most significant byte first.
pub fn checksum(payload: &[u8]) -> [u8; CHECKSUM_LEN] {
    let crc = CRC32C.checksum(payload);
    (crc as u16).to_be_bytes()
}
