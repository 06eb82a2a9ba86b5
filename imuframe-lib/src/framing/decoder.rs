use std::io::Read;
use std::mem;

use tracing::trace;

use super::bytes::Bytes;
use super::checksum::checksum16;
use super::{Frame, Stats, BLOCK_LEN, DEVICE_ID, FRAME_LEN, SYNC};
use crate::Result;

/// Framing states. The transition function in
/// [`FrameDecoder::next_frame`] matches exhaustively, so an unhandled
/// state cannot exist at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Scanning for the first sync byte.
    SearchSync,
    /// One sync byte seen; the next byte must also be sync.
    ReadSync,
    /// Expecting the fixed length byte.
    ReadLength,
    /// Expecting the block: device id plus record bytes.
    ReadBlock,
    /// Expecting the two trailing checksum bytes.
    ReadChecksum,
}

/// Decodes frames from a byte stream.
///
/// Drives the framing state machine: two consecutive sync bytes, the
/// fixed length byte, a [BLOCK_LEN] block beginning with the device
/// id, then a big-endian CRC-16 over the block. Any mismatch discards
/// all progress and resumes scanning for sync; nothing of a failed
/// candidate survives. End of input from any state ends the decode.
///
/// # Example
/// ```
/// use imuframe::framing::{checksum16, FrameDecoder, BLOCK_LEN, DEVICE_ID};
///
/// let mut dat = vec![0xaa, 0xaa, 45];
/// let mut block = vec![0u8; BLOCK_LEN];
/// block[0] = DEVICE_ID;
/// dat.extend_from_slice(&block);
/// dat.extend_from_slice(&checksum16(&block).to_be_bytes());
///
/// let mut decoder = FrameDecoder::new(&dat[..]);
/// let frame = decoder.next_frame().unwrap().unwrap();
/// assert_eq!(frame.data, block);
/// assert_eq!(decoder.stats().valid, 1);
/// ```
pub struct FrameDecoder<R>
where
    R: Read + Send,
{
    bytes: Bytes<R>,
    state: State,
    /// Candidate block; replaced wholesale each ReadBlock transition.
    block: Vec<u8>,
    stats: Stats,
}

impl<R> FrameDecoder<R>
where
    R: Read + Send,
{
    pub fn new(reader: R) -> Self {
        FrameDecoder {
            bytes: Bytes::new(reader),
            state: State::SearchSync,
            block: Vec::new(),
            stats: Stats::default(),
        }
    }

    /// Counters as of the last call to [`FrameDecoder::next_frame`].
    #[must_use]
    pub fn stats(&self) -> Stats {
        self.stats
    }

    /// Decode until the next validated frame, or `None` when the
    /// input is exhausted. A candidate truncated by end of input is
    /// dropped without being counted unless its checksum bytes were
    /// fully read.
    ///
    /// # Errors
    /// Any I/O error other than end of input.
    pub fn next_frame(&mut self) -> Result<Option<Frame>> {
        loop {
            match self.state {
                State::SearchSync => {
                    let Some(b) = self.bytes.next()? else {
                        return Ok(None);
                    };
                    if b == SYNC {
                        self.state = State::ReadSync;
                    }
                }
                State::ReadSync => {
                    let Some(b) = self.bytes.next()? else {
                        return Ok(None);
                    };
                    self.state = if b == SYNC {
                        State::ReadLength
                    } else {
                        State::SearchSync
                    };
                }
                State::ReadLength => {
                    let Some(b) = self.bytes.next()? else {
                        return Ok(None);
                    };
                    if b == FRAME_LEN {
                        self.state = State::ReadBlock;
                    } else {
                        trace!(
                            offset = self.bytes.offset(),
                            length = b,
                            "bad length byte, resyncing"
                        );
                        self.state = State::SearchSync;
                    }
                }
                State::ReadBlock => {
                    let mut block = vec![0u8; BLOCK_LEN];
                    if !self.bytes.fill(&mut block)? {
                        return Ok(None);
                    }
                    if block[0] == DEVICE_ID {
                        self.block = block;
                        self.state = State::ReadChecksum;
                    } else {
                        trace!(
                            offset = self.bytes.offset(),
                            device_id = block[0],
                            "bad device id, resyncing"
                        );
                        self.state = State::SearchSync;
                    }
                }
                State::ReadChecksum => {
                    let mut buf = [0u8; 2];
                    if !self.bytes.fill(&mut buf)? {
                        return Ok(None);
                    }
                    let expected = u16::from_be_bytes(buf);
                    let actual = checksum16(&self.block);
                    self.stats.total += 1;
                    self.state = State::SearchSync;
                    if actual == expected {
                        self.stats.valid += 1;
                        let data = mem::take(&mut self.block);
                        return Ok(Some(Frame {
                            data,
                            checksum: expected,
                        }));
                    }
                    trace!(
                        offset = self.bytes.offset(),
                        expected,
                        actual,
                        "checksum mismatch, resyncing"
                    );
                    self.block.clear();
                }
            }
        }
    }
}

impl<R> Iterator for FrameDecoder<R>
where
    R: Read + Send,
{
    type Item = Result<Frame>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next_frame() {
            Ok(Some(frame)) => Some(Ok(frame)),
            Ok(None) => None,
            Err(err) => Some(Err(err)),
        }
    }
}

/// Creates a [FrameDecoder] over `reader`.
///
/// Iterating it yields only validated frames; candidates that fail
/// the checksum are counted in [`FrameDecoder::stats`] but never
/// produced.
pub fn read_frames<R>(reader: R) -> FrameDecoder<R>
where
    R: Read + Send,
{
    FrameDecoder::new(reader)
}
