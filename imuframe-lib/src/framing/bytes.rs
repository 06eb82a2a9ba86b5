use std::io::{self, ErrorKind, Read};

/// Bytes provides sequential single-byte and exact-count reads from a
/// reader, translating end-of-input into a terminal signal rather
/// than an error. There is no seeking or pushback; bytes are consumed
/// strictly forward.
pub struct Bytes<R>
where
    R: Read + Send,
{
    reader: R,
    num_read: usize,
    buf: [u8; 1],
}

impl<R> Bytes<R>
where
    R: Read + Send,
{
    pub fn new(reader: R) -> Self {
        Bytes {
            reader,
            num_read: 0,
            buf: [0u8; 1],
        }
    }

    /// Read the next byte, or `None` when the source is exhausted.
    pub fn next(&mut self) -> Result<Option<u8>, io::Error> {
        let n = self.reader.read(&mut self.buf)?;
        if n == 0 {
            return Ok(None);
        }
        self.num_read += 1;
        Ok(Some(self.buf[0]))
    }

    /// Fill `buf` exactly, returning `false` if the source ends
    /// first. A short read discards whatever was read; it is never a
    /// partial success.
    pub fn fill(&mut self, buf: &mut [u8]) -> Result<bool, io::Error> {
        if let Err(err) = self.reader.read_exact(buf) {
            if err.kind() == ErrorKind::UnexpectedEof {
                return Ok(false);
            }
            return Err(err);
        }
        self.num_read += buf.len();
        Ok(true)
    }

    /// Count of bytes consumed so far.
    pub fn offset(&self) -> usize {
        self.num_read
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_produces_bytes_in_order_then_none() {
        let dat = [0, 1, 2];
        let mut bytes = Bytes::new(&dat[..]);

        assert_eq!(bytes.next().unwrap(), Some(0));
        assert_eq!(bytes.next().unwrap(), Some(1));
        assert_eq!(bytes.next().unwrap(), Some(2));
        assert_eq!(bytes.offset(), 3);
        assert_eq!(bytes.next().unwrap(), None);
        assert_eq!(bytes.offset(), 3);
    }

    #[test]
    fn fill_returns_true_when_buffer_filled() {
        let dat = [1, 2, 3, 4, 5];
        let mut bytes = Bytes::new(&dat[..]);

        let buf = &mut [0u8; 3][..];
        let more = bytes.fill(buf).expect("fill should not fail");
        assert!(more);
        assert_eq!(buf, [1, 2, 3]);
        assert_eq!(bytes.offset(), 3);
    }

    #[test]
    fn fill_returns_false_on_short_source() {
        let dat = [1, 2];
        let mut bytes = Bytes::new(&dat[..]);

        let buf = &mut [0u8; 3][..];
        let more = bytes.fill(buf).expect("fill should not fail");
        assert!(!more, "short read must not be a partial success");
    }

    #[test]
    fn fill_after_next_continues_from_cursor() {
        let dat = [9, 1, 2, 3];
        let mut bytes = Bytes::new(&dat[..]);

        assert_eq!(bytes.next().unwrap(), Some(9));
        let buf = &mut [0u8; 3][..];
        assert!(bytes.fill(buf).unwrap());
        assert_eq!(buf, [1, 2, 3]);
        assert_eq!(bytes.offset(), 4);
    }
}
