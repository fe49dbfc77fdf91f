//! One fetch-transform-sync pass over a single page.

use shopsync_core::Cursor;
use shopsync_shopify::page_to_records;

use crate::error::SyncError;
use crate::source::{PageSource, RecordSink};

/// What a single batch pipeline reports back to the scheduler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchOutcome {
    pub has_next_page: bool,
    /// Last edge cursor of the fetched page; `None` for an empty page.
    pub cursor: Option<Cursor>,
    pub record_count: usize,
}

impl BatchOutcome {
    /// Outcome of a fetch that returned no usable data.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            has_next_page: false,
            cursor: None,
            record_count: 0,
        }
    }
}

/// Fetches the page after `cursor`, flattens it, and syncs any records.
///
/// # Errors
///
/// Returns [`SyncError::Fetch`] if the page request fails and
/// [`SyncError::Sync`] if the index rejects the batch.
pub async fn process_batch<S, K>(
    source: &S,
    sink: &K,
    cursor: Option<&Cursor>,
) -> Result<BatchOutcome, SyncError>
where
    S: PageSource + ?Sized,
    K: RecordSink + ?Sized,
{
    let Some(page) = source.fetch_page(cursor).await? else {
        return Ok(BatchOutcome::empty());
    };

    let records = page_to_records(&page);
    if !records.is_empty() {
        sink.save(&records).await?;
    }

    Ok(BatchOutcome {
        has_next_page: page.has_next_page(),
        cursor: page.last_cursor().cloned(),
        record_count: records.len(),
    })
}
