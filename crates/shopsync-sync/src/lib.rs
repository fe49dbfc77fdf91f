//! Drives catalog pages into the search index.
//!
//! [`run_sequential`] walks the catalog one page at a time. [`run_parallel`]
//! fires a fixed-width round of batch pipelines that all start from the same
//! cursor and reconciles their outcomes into the next round's cursor.

pub mod driver;
pub mod error;
pub mod pipeline;
pub mod scheduler;
pub mod source;

#[cfg(test)]
mod test_support;

pub use driver::run_sequential;
pub use error::SyncError;
pub use pipeline::{process_batch, BatchOutcome};
pub use scheduler::{reconcile_round, run_parallel, NextRound, DEFAULT_PARALLEL_WIDTH};
pub use source::{CatalogPageSource, PageSource, RecordSink};

/// Totals reported when a run finishes without error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncSummary {
    /// Fetch calls that completed without error, including ones that
    /// returned no data.
    pub fetches: usize,
    /// Records written, counting duplicate upserts.
    pub records_synced: usize,
    /// Fetch steps for the sequential driver, rounds for the parallel scheduler.
    pub rounds: usize,
}
