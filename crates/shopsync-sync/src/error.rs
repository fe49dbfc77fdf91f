use shopsync_algolia::IndexError;
use shopsync_shopify::CatalogError;
use thiserror::Error;

/// A failure that aborts the whole run.
#[derive(Debug, Error)]
pub enum SyncError {
    #[error("failed to fetch catalog page: {0}")]
    Fetch(#[from] CatalogError),

    #[error("failed to sync records to index: {0}")]
    Sync(#[from] IndexError),
}
