//! Sequential pagination driver.

use shopsync_core::Cursor;
use shopsync_shopify::page_to_records;

use crate::error::SyncError;
use crate::source::{PageSource, RecordSink};
use crate::SyncSummary;

/// Walks the catalog one page at a time until no continuation remains.
///
/// Each page is synced before the next is requested, so batches reach the
/// index strictly in page order. The run ends when a page reports no further
/// pages, when a page has no edges to take a cursor from, or when the catalog
/// answers without data.
///
/// # Errors
///
/// The first fetch or sync failure aborts the run and is returned as-is;
/// records synced before it stay in the index.
pub async fn run_sequential<S, K>(source: &S, sink: &K) -> Result<SyncSummary, SyncError>
where
    S: PageSource + ?Sized,
    K: RecordSink + ?Sized,
{
    let mut summary = SyncSummary::default();
    let mut cursor: Option<Cursor> = None;

    loop {
        summary.rounds += 1;
        tracing::info!(cursor = cursor.as_ref().map(Cursor::as_str), "fetching products page");

        let fetched = source.fetch_page(cursor.as_ref()).await;
        if fetched.is_ok() {
            summary.fetches += 1;
        }
        let page = match fetched {
            Ok(Some(page)) => page,
            Ok(None) => {
                tracing::warn!("catalog returned no data; stopping");
                break;
            }
            Err(e) => {
                tracing::error!(error = %e, "page fetch failed; aborting run");
                return Err(e.into());
            }
        };

        let records = page_to_records(&page);
        if !records.is_empty() {
            if let Err(e) = sink.save(&records).await {
                tracing::error!(error = %e, records = records.len(), "sync failed; aborting run");
                return Err(e.into());
            }
        }
        summary.records_synced += records.len();
        tracing::info!(
            page = summary.fetches,
            records = records.len(),
            total = summary.records_synced,
            "page synced"
        );

        match (page.has_next_page(), page.last_cursor()) {
            (true, Some(next)) => cursor = Some(next.clone()),
            (true, None) => {
                tracing::warn!("page reported more results but had no edges; stopping");
                break;
            }
            (false, _) => break,
        }
    }

    Ok(summary)
}
