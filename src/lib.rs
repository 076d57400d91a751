//! Streaming SAM filter that keeps adjacent read-name pairs.
//!
//! - Header lines (`@...`) pass through verbatim and immediately.
//! - Data records are keyed on their read name (first tab-delimited field).
//! - Two adjacent records with the same read name are emitted as a pair;
//!   unpaired records are dropped.
//! - Single pass, one-record lookback, no validation beyond the first field.

pub mod error;
pub mod filter;
pub mod options;
pub mod reader;
pub mod record;
pub mod stats;
mod util;

pub use crate::error::{IoContext, PairFilterError};
pub use crate::filter::{PairFilter, filter_pairs, filter_sam_files};
pub use crate::options::FilterOptions;
pub use crate::reader::SamLineReader;
pub use crate::record::{SamLine, SamRecord};
pub use crate::stats::FilterStats;
