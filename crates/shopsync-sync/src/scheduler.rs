//! Parallel batch scheduler.
//!
//! Every round launches `width` pipelines at once, and every one of them
//! starts from the cursor captured when the round began. They therefore fetch
//! and upsert the same page; the index absorbs the duplicates because writes
//! are keyed by `objectID`. The round's outcomes then pick the cursor for the
//! next round.

use futures::future::join_all;
use shopsync_core::Cursor;

use crate::error::SyncError;
use crate::pipeline::{process_batch, BatchOutcome};
use crate::source::{PageSource, RecordSink};
use crate::SyncSummary;

pub const DEFAULT_PARALLEL_WIDTH: usize = 5;

/// Decision taken after a round completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NextRound {
    Continue(Cursor),
    Done,
}

/// Picks the next cursor from a round's outcomes, in launch order.
///
/// The last outcome reporting `has_next_page` wins. If none do, or the winner
/// came from an empty page and carries no cursor, the run is done.
#[must_use]
pub fn reconcile_round(outcomes: &[BatchOutcome]) -> NextRound {
    match outcomes.iter().rev().find(|o| o.has_next_page) {
        Some(BatchOutcome {
            cursor: Some(cursor),
            ..
        }) => NextRound::Continue(cursor.clone()),
        _ => NextRound::Done,
    }
}

/// Runs rounds of `width` concurrent pipelines until no pipeline reports
/// another page.
///
/// The round waits for every pipeline before looking at results, so siblings
/// of a failed pipeline still finish their fetch and sync.
///
/// # Errors
///
/// The first error in launch order aborts the run once its round has joined.
pub async fn run_parallel<S, K>(
    source: &S,
    sink: &K,
    width: usize,
) -> Result<SyncSummary, SyncError>
where
    S: PageSource + ?Sized,
    K: RecordSink + ?Sized,
{
    let width = width.max(1);
    let mut summary = SyncSummary::default();
    let mut cursor: Option<Cursor> = None;

    loop {
        summary.rounds += 1;
        tracing::info!(
            round = summary.rounds,
            width,
            cursor = cursor.as_ref().map(Cursor::as_str),
            "starting batch round"
        );

        let round_cursor = cursor.as_ref();
        let results = join_all((0..width).map(|_| process_batch(source, sink, round_cursor))).await;

        let mut outcomes = Vec::with_capacity(results.len());
        for (slot, result) in results.into_iter().enumerate() {
            match result {
                Ok(outcome) => outcomes.push(outcome),
                Err(e) => {
                    tracing::error!(
                        round = summary.rounds,
                        batch = slot,
                        cursor = round_cursor.map(Cursor::as_str),
                        error = %e,
                        "batch failed; aborting run"
                    );
                    return Err(e);
                }
            }
        }

        let round_records: usize = outcomes.iter().map(|o| o.record_count).sum();
        summary.fetches += outcomes.len();
        summary.records_synced += round_records;
        tracing::info!(
            round = summary.rounds,
            records = round_records,
            total = summary.records_synced,
            "batch round synced"
        );

        match reconcile_round(&outcomes) {
            NextRound::Continue(next) => cursor = Some(next),
            NextRound::Done => break,
        }
    }

    Ok(summary)
}

#[cfg(test)]
#[path = "scheduler_test.rs"]
mod tests;
