use std::fmt;

/// Counters collected over one filtering run.
///
/// `records == 2 * pairs_emitted + records_dropped` holds once the run is finished.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterStats {
    pub header_lines: u64,
    pub records: u64,
    pub pairs_emitted: u64,
    pub records_dropped: u64,
}

impl FilterStats {
    /// Data lines written to the output.
    #[inline]
    pub fn records_emitted(&self) -> u64 {
        self.pairs_emitted * 2
    }
}

impl fmt::Display for FilterStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} header lines, {} records, {} pairs kept, {} records dropped",
            self.header_lines, self.records, self.pairs_emitted, self.records_dropped
        )
    }
}
