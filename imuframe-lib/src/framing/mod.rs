//! IMU telemetry frame decoding.
//!
//! Locates frames in a noisy byte stream by scanning for sync-byte
//! pairs, validates each candidate against its trailing CRC-16, and
//! yields only the blocks that pass.
mod bytes;
mod checksum;
mod decoder;

pub use checksum::checksum16;
pub use decoder::*;

use crate::{record::Record, Result};

/// Frame sync marker byte; two in a row start a frame.
pub const SYNC: u8 = 0xaa;
/// Fixed value of the on-wire length byte.
pub const FRAME_LEN: u8 = 45;
/// Device id expected as the first block byte.
pub const DEVICE_ID: u8 = 0x87;
/// Length of the block following the length byte: the device id plus
/// the record bytes. The trailing CRC-16 covers this entire block.
pub const BLOCK_LEN: usize = FRAME_LEN as usize - 2;

/// A frame block that has passed checksum validation.
///
/// Candidates that fail any framing check or the checksum never
/// surface as a `Frame`; they are only reflected in [Stats].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Validated block bytes, device id first.
    pub data: Vec<u8>,
    /// CRC-16 decoded from the two bytes following the block.
    pub checksum: u16,
}

impl Frame {
    /// Decode the record bytes after the leading device-id byte.
    ///
    /// # Errors
    /// [`Error::NotEnoughData`](crate::Error::NotEnoughData) if the
    /// block is shorter than the record layout requires.
    pub fn record(&self) -> Result<Record> {
        Record::decode(self.data.get(1..).unwrap_or(&[]))
    }
}

/// Counters for one decode run.
///
/// `total` counts every candidate that reached checksum evaluation,
/// regardless of outcome; `valid` only those that passed. Frames
/// rejected before the checksum stage (bad sync, length, or device
/// id) are not candidates and count toward neither.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stats {
    pub total: usize,
    pub valid: usize,
}

impl Stats {
    #[must_use]
    pub fn invalid(&self) -> usize {
        self.total - self.valid
    }
}
