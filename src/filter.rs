use crate::error::PairFilterError;
use crate::options::FilterOptions;
use crate::reader::SamLineReader;
use crate::record::{SamLine, SamRecord};
use crate::stats::FilterStats;
use crate::util::create_file;

use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Adjacent-pair state machine with a single pending slot.
///
/// Headers are written as soon as they are pushed. A record either waits in
/// the slot, completes a pair with the record already waiting there, or
/// displaces it. Displaced and trailing records are never written.
#[derive(Debug, Default)]
pub struct PairFilter {
    pending: Option<SamRecord>,
    stats: FilterStats,
}

impl PairFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record waiting for its mate, if any.
    #[inline]
    pub fn pending(&self) -> Option<&SamRecord> {
        self.pending.as_ref()
    }

    pub fn push<W: Write + ?Sized>(&mut self, line: SamLine, out: &mut W) -> io::Result<()> {
        let rec = match line {
            SamLine::Header(h) => {
                self.stats.header_lines += 1;
                return write_line(out, &h);
            }
            SamLine::Record(rec) => rec,
        };
        self.stats.records += 1;

        match self.pending.take() {
            None => self.pending = Some(rec),
            Some(prev) if prev.same_read(&rec) => {
                write_line(out, prev.as_bytes())?;
                write_line(out, rec.as_bytes())?;
                self.stats.pairs_emitted += 1;
            }
            Some(prev) => {
                log::debug!(
                    "dropping unpaired record {}",
                    String::from_utf8_lossy(prev.read_name())
                );
                self.stats.records_dropped += 1;
                self.pending = Some(rec);
            }
        }
        Ok(())
    }

    /// End of input: discard whatever is still pending and return the counters.
    pub fn finish(mut self) -> FilterStats {
        if let Some(prev) = self.pending.take() {
            log::debug!(
                "dropping trailing unpaired record {}",
                String::from_utf8_lossy(prev.read_name())
            );
            self.stats.records_dropped += 1;
        }
        self.stats
    }
}

#[inline]
fn write_line<W: Write + ?Sized>(out: &mut W, line: &[u8]) -> io::Result<()> {
    out.write_all(line)?;
    out.write_all(b"\n")
}

/// Run every line of `reader` through a fresh [`PairFilter`] into `writer`.
///
/// The writer is flushed before returning so buffered write failures surface here.
pub fn filter_pairs<W: Write>(
    mut reader: SamLineReader,
    mut writer: W,
) -> Result<FilterStats, PairFilterError> {
    let mut filter = PairFilter::new();
    while let Some(line) = reader.next_line() {
        let line = line?;
        filter
            .push(line, &mut writer)
            .map_err(|e| PairFilterError::write_err(e, reader.ctx()))?;
    }
    writer
        .flush()
        .map_err(|e| PairFilterError::write_err(e, reader.ctx()))?;
    Ok(filter.finish())
}

/// Filter the SAM file at `input` into `output` (created or truncated).
///
/// The input is opened first; if that fails the output is left untouched.
pub fn filter_sam_files<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
    opts: &FilterOptions,
) -> Result<FilterStats, PairFilterError> {
    let reader = SamLineReader::from_path(input.as_ref(), opts)?;
    let output = output.as_ref();
    let f = create_file(output).map_err(|source| PairFilterError::CreateOutput {
        path: output.to_path_buf(),
        source,
    })?;
    let writer = BufWriter::with_capacity(opts.write_buffer, f);

    let stats = filter_pairs(reader, writer)?;
    log::info!(
        "{} -> {}: {stats}",
        input.as_ref().display(),
        output.display()
    );
    Ok(stats)
}
