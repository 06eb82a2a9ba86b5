use crc::{Crc, CRC_16_ARC};

const CRC16: Crc<u16> = Crc::<u16>::new(&CRC_16_ARC);

/// CRC-16/ARC over the exact byte span.
///
/// On the wire the two checksum bytes follow the frame block high
/// byte first, and the checksum covers the whole block including the
/// leading device-id byte.
#[must_use]
pub fn checksum16(dat: &[u8]) -> u16 {
    CRC16.checksum(dat)
}
