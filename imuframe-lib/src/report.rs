//! Tabular text rendering of decoded records.

use std::io::{Read, Write};

use tracing::warn;

use crate::framing::{FrameDecoder, Stats};
use crate::record::Record;
use crate::{Error, Result};

/// Report column names, in output order.
pub const COLUMNS: [&str; 16] = [
    "Ax", "Ay", "Az", "Wx", "Wy", "Wz", "Tax", "Tay", "Taz", "Twx", "Twy", "Twz", "S",
    "Timestamp", "Status", "Number",
];

// The S column is always narrow regardless of the configured width.
const S_WIDTH: usize = 4;

#[derive(Debug, Clone, Copy)]
pub struct ReportOptions {
    /// Width every field except `S` is right-justified in.
    pub column_width: usize,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self { column_width: 10 }
    }
}

/// Renders records as right-justified fixed-width rows.
///
/// The header row is written once, just before the first record; a
/// run that never produces a record produces no header either. The
/// final summary goes to a separate diagnostic writer via
/// [`ReportWriter::finish`].
pub struct ReportWriter<W>
where
    W: Write,
{
    out: W,
    column_width: usize,
    wrote_header: bool,
}

impl<W> ReportWriter<W>
where
    W: Write,
{
    pub fn new(out: W, opts: &ReportOptions) -> Self {
        ReportWriter {
            out,
            column_width: opts.column_width,
            wrote_header: false,
        }
    }

    fn width_for(&self, column: &str) -> usize {
        if column == "S" {
            S_WIDTH
        } else {
            self.column_width
        }
    }

    fn write_header(&mut self) -> Result<()> {
        for name in COLUMNS {
            write!(self.out, "{:>width$}", name, width = self.width_for(name))?;
        }
        writeln!(self.out)?;
        self.wrote_header = true;
        Ok(())
    }

    /// Write one record row, emitting the header first if this is the
    /// first record.
    ///
    /// # Errors
    /// Any error writing to the output.
    pub fn write_record(&mut self, rec: &Record) -> Result<()> {
        if !self.wrote_header {
            self.write_header()?;
        }
        let w = self.column_width;
        write!(self.out, "{:>w$}{:>w$}{:>w$}", rec.ax, rec.ay, rec.az)?;
        write!(self.out, "{:>w$}{:>w$}{:>w$}", rec.wx, rec.wy, rec.wz)?;
        write!(self.out, "{:>w$}{:>w$}{:>w$}", rec.tax, rec.tay, rec.taz)?;
        write!(self.out, "{:>w$}{:>w$}{:>w$}", rec.twx, rec.twy, rec.twz)?;
        write!(self.out, "{:>S_WIDTH$}", rec.s)?;
        write!(self.out, "{:>w$}{:>w$}{:>w$}", rec.timestamp, rec.status, rec.number)?;
        writeln!(self.out)?;
        Ok(())
    }

    /// Flush the report and write the summary line to `diag`.
    ///
    /// # Errors
    /// Any error flushing the report or writing the summary.
    pub fn finish<D>(&mut self, mut diag: D, stats: &Stats) -> Result<()>
    where
        D: Write,
    {
        self.out.flush()?;
        writeln!(
            diag,
            "total: {}, valid: {}, invalid: {}",
            stats.total,
            stats.valid,
            stats.invalid()
        )?;
        Ok(())
    }
}

/// Decode every frame in `reader` and render the report to `out`,
/// finishing with a summary line on `diag`. Returns the run counters.
///
/// A frame whose block is too short for the record layout is skipped
/// with a warning; its checksum already passed, so it still counts in
/// the returned [Stats].
///
/// # Errors
/// Any I/O error reading the stream or writing the report.
pub fn write_report<R, W, D>(reader: R, out: W, diag: D, opts: &ReportOptions) -> Result<Stats>
where
    R: Read + Send,
    W: Write,
    D: Write,
{
    let mut decoder = FrameDecoder::new(reader);
    let mut report = ReportWriter::new(out, opts);

    while let Some(frame) = decoder.next_frame()? {
        match frame.record() {
            Ok(record) => report.write_record(&record)?,
            Err(Error::NotEnoughData { actual, minimum }) => {
                warn!(actual, minimum, "block too short for record layout, skipping");
            }
            Err(err) => return Err(err),
        }
    }

    let stats = decoder.stats();
    report.finish(diag, &stats)?;
    Ok(stats)
}
