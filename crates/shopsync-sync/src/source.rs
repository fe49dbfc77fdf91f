//! Seams between the sync loops and the two remote APIs.

use async_trait::async_trait;
use shopsync_algolia::{IndexClient, IndexError};
use shopsync_core::{BatchSize, Cursor, SearchRecord};
use shopsync_shopify::{CatalogClient, CatalogError, ProductsPage};

/// Produces catalog pages for a fixed country, locale and page size.
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Fetches the page after `cursor` (the first page when `None`).
    ///
    /// `Ok(None)` means the catalog answered without usable data; callers
    /// treat it as an empty, terminal page.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] on transport failure, a non-success status,
    /// or a body that is not a products response.
    async fn fetch_page(&self, cursor: Option<&Cursor>)
        -> Result<Option<ProductsPage>, CatalogError>;
}

/// Receives non-empty record batches.
#[async_trait]
pub trait RecordSink: Send + Sync {
    /// Upserts `records`, keyed by their object id.
    ///
    /// # Errors
    ///
    /// Returns [`IndexError`] when the write is not acknowledged.
    async fn save(&self, records: &[SearchRecord]) -> Result<(), IndexError>;
}

/// [`PageSource`] backed by the Shopify Admin GraphQL API.
pub struct CatalogPageSource {
    client: CatalogClient,
    country: String,
    locale: String,
    batch_size: BatchSize,
}

impl CatalogPageSource {
    #[must_use]
    pub fn new(client: CatalogClient, country: &str, locale: &str, batch_size: BatchSize) -> Self {
        Self {
            client,
            country: country.to_owned(),
            locale: locale.to_owned(),
            batch_size,
        }
    }
}

#[async_trait]
impl PageSource for CatalogPageSource {
    async fn fetch_page(
        &self,
        cursor: Option<&Cursor>,
    ) -> Result<Option<ProductsPage>, CatalogError> {
        self.client
            .fetch_products_page(&self.country, &self.locale, self.batch_size, cursor)
            .await
    }
}

#[async_trait]
impl RecordSink for IndexClient {
    async fn save(&self, records: &[SearchRecord]) -> Result<(), IndexError> {
        let ack = self.save_objects(records).await?;
        tracing::debug!(
            index = self.index_name(),
            task_id = ack.task_id,
            acknowledged = ack.object_ids.len(),
            "index accepted batch"
        );
        Ok(())
    }
}
