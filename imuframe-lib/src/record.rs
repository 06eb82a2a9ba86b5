//! Typed decoding of a validated frame's record bytes.

use crate::{Error, Result};

/// One decoded IMU telemetry sample.
///
/// Field layout on the wire is fixed-offset and little-endian,
/// starting at the byte after the device id: accelerations and
/// angular rates as 32-bit signed values, temperature-compensated
/// values as 16-bit signed, then status/sequence, timestamp, a status
/// code, and a sequence number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Record {
    pub ax: i32,
    pub ay: i32,
    pub az: i32,
    pub wx: i32,
    pub wy: i32,
    pub wz: i32,
    pub tax: i16,
    pub tay: i16,
    pub taz: i16,
    pub twx: i16,
    pub twy: i16,
    pub twz: i16,
    pub s: i16,
    pub timestamp: i16,
    pub status: u8,
    pub number: u8,
}

fn i32_le(dat: &[u8], off: usize) -> i32 {
    i32::from_le_bytes([dat[off], dat[off + 1], dat[off + 2], dat[off + 3]])
}

fn i16_le(dat: &[u8], off: usize) -> i16 {
    i16::from_le_bytes([dat[off], dat[off + 1]])
}

impl Record {
    /// Record length in bytes, not counting the device-id byte.
    pub const LEN: usize = 42;

    /// Decode from the bytes following the device-id byte.
    ///
    /// # Errors
    /// [`Error::NotEnoughData`] if `dat` is shorter than
    /// [`Record::LEN`]; the layout is never silently truncated.
    pub fn decode(dat: &[u8]) -> Result<Self> {
        if dat.len() < Self::LEN {
            return Err(Error::NotEnoughData {
                actual: dat.len(),
                minimum: Self::LEN,
            });
        }

        Ok(Record {
            ax: i32_le(dat, 0),
            ay: i32_le(dat, 4),
            az: i32_le(dat, 8),
            wx: i32_le(dat, 12),
            wy: i32_le(dat, 16),
            wz: i32_le(dat, 20),
            tax: i16_le(dat, 24),
            tay: i16_le(dat, 26),
            taz: i16_le(dat, 28),
            twx: i16_le(dat, 30),
            twy: i16_le(dat, 32),
            twz: i16_le(dat, 34),
            s: i16_le(dat, 36),
            timestamp: i16_le(dat, 38),
            status: dat[40],
            number: dat[41],
        })
    }

    /// Encode into the wire layout, without the device-id byte.
    #[must_use]
    pub fn encode(&self) -> [u8; Self::LEN] {
        let mut dat = [0u8; Self::LEN];
        dat[0..4].copy_from_slice(&self.ax.to_le_bytes());
        dat[4..8].copy_from_slice(&self.ay.to_le_bytes());
        dat[8..12].copy_from_slice(&self.az.to_le_bytes());
        dat[12..16].copy_from_slice(&self.wx.to_le_bytes());
        dat[16..20].copy_from_slice(&self.wy.to_le_bytes());
        dat[20..24].copy_from_slice(&self.wz.to_le_bytes());
        dat[24..26].copy_from_slice(&self.tax.to_le_bytes());
        dat[26..28].copy_from_slice(&self.tay.to_le_bytes());
        dat[28..30].copy_from_slice(&self.taz.to_le_bytes());
        dat[30..32].copy_from_slice(&self.twx.to_le_bytes());
        dat[32..34].copy_from_slice(&self.twy.to_le_bytes());
        dat[34..36].copy_from_slice(&self.twz.to_le_bytes());
        dat[36..38].copy_from_slice(&self.s.to_le_bytes());
        dat[38..40].copy_from_slice(&self.timestamp.to_le_bytes());
        dat[40] = self.status;
        dat[41] = self.number;
        dat
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_known_bytes() {
        let mut dat = [0u8; Record::LEN];
        dat[0..4].copy_from_slice(&1i32.to_le_bytes());
        dat[4..8].copy_from_slice(&(-2i32).to_le_bytes());
        dat[8..12].copy_from_slice(&3i32.to_le_bytes());
        dat[20..24].copy_from_slice(&(-40_000i32).to_le_bytes());
        dat[24..26].copy_from_slice(&(-7i16).to_le_bytes());
        dat[36..38].copy_from_slice(&1234i16.to_le_bytes());
        dat[38..40].copy_from_slice(&(-1i16).to_le_bytes());
        dat[40] = 0x0f;
        dat[41] = 99;

        let rec = Record::decode(&dat).unwrap();
        assert_eq!(rec.ax, 1);
        assert_eq!(rec.ay, -2);
        assert_eq!(rec.az, 3);
        assert_eq!(rec.wx, 0);
        assert_eq!(rec.wz, -40_000);
        assert_eq!(rec.tax, -7);
        assert_eq!(rec.s, 1234);
        assert_eq!(rec.timestamp, -1);
        assert_eq!(rec.status, 0x0f);
        assert_eq!(rec.number, 99);
    }

    #[test]
    fn decode_all_zero() {
        let dat = [0u8; Record::LEN];
        let rec = Record::decode(&dat).unwrap();
        assert_eq!(rec.ax, 0);
        assert_eq!(rec.number, 0);
    }

    #[test]
    fn decode_is_err_when_too_short() {
        let dat = [0u8; Record::LEN - 1];
        let err = Record::decode(&dat).unwrap_err();
        match err {
            crate::Error::NotEnoughData { actual, minimum } => {
                assert_eq!(actual, Record::LEN - 1);
                assert_eq!(minimum, Record::LEN);
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn round_trip() {
        let rec = Record {
            ax: i32::MIN,
            ay: -1,
            az: i32::MAX,
            wx: 77,
            wy: -77,
            wz: 0,
            tax: i16::MIN,
            tay: 0,
            taz: i16::MAX,
            twx: 21,
            twy: -21,
            twz: 1,
            s: -512,
            timestamp: 30_000,
            status: 0xff,
            number: 0,
        };
        assert_eq!(Record::decode(&rec.encode()).unwrap(), rec);
    }
}
