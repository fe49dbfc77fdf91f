//! In-memory `PageSource` / `RecordSink` fakes for driver and scheduler tests.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{json, Value};
use shopsync_algolia::IndexError;
use shopsync_core::{Cursor, SearchRecord};
use shopsync_shopify::{CatalogError, ProductsPage};
use tokio::sync::Barrier;

use crate::source::{PageSource, RecordSink};

type Scripted = Result<Option<ProductsPage>, CatalogError>;

/// Builds a page with one product per `(cursor, variant_count)` entry.
///
/// Variant ids are `"{cursor}-v{n}"`, so they are unique within a page.
pub(crate) fn page(products: &[(&str, usize)], has_next_page: bool) -> ProductsPage {
    let edges: Vec<Value> = products
        .iter()
        .map(|(cursor, variants)| {
            let variant_edges: Vec<Value> = (0..*variants)
                .map(|n| {
                    json!({ "node": {
                        "id": format!("{cursor}-v{n}"),
                        "title": "Default Title",
                        "contextualPricing": {
                            "price": { "amount": "1.00", "currencyCode": "USD" },
                            "compareAtPrice": null
                        }
                    }})
                })
                .collect();
            json!({
                "cursor": cursor,
                "node": {
                    "id": format!("product-{cursor}"),
                    "title": "Product",
                    "translations": [],
                    "variants": { "edges": variant_edges }
                }
            })
        })
        .collect();

    serde_json::from_value(json!({
        "edges": edges,
        "pageInfo": { "hasNextPage": has_next_page }
    }))
    .expect("fixture page should deserialize")
}

pub(crate) fn catalog_failure(status: u16) -> CatalogError {
    CatalogError::UnexpectedStatus {
        status,
        url: "http://catalog.test/graphql.json".to_owned(),
    }
}

/// Replays scripted fetch results in call order and records the cursor of
/// every call.
pub(crate) struct FakeSource {
    responses: Mutex<VecDeque<Scripted>>,
    cursors: Mutex<Vec<Option<String>>>,
    barrier: Option<Barrier>,
}

impl FakeSource {
    pub(crate) fn new(responses: Vec<Scripted>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            cursors: Mutex::new(Vec::new()),
            barrier: None,
        }
    }

    /// Every fetch waits until `n` fetches are in flight together, so a test
    /// using it hangs unless the caller really runs `n` fetches concurrently.
    pub(crate) fn concurrent(responses: Vec<Scripted>, n: usize) -> Self {
        Self {
            barrier: Some(Barrier::new(n)),
            ..Self::new(responses)
        }
    }

    pub(crate) fn cursors(&self) -> Vec<Option<String>> {
        self.cursors.lock().unwrap().clone()
    }
}

#[async_trait]
impl PageSource for FakeSource {
    async fn fetch_page(&self, cursor: Option<&Cursor>) -> Result<Option<ProductsPage>, CatalogError> {
        self.cursors
            .lock()
            .unwrap()
            .push(cursor.map(|c| c.as_str().to_owned()));
        let next = self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .expect("unexpected extra fetch");
        if let Some(barrier) = &self.barrier {
            barrier.wait().await;
        }
        next
    }
}

/// Records every saved batch; optionally fails one call by index.
#[derive(Default)]
pub(crate) struct FakeSink {
    batches: Mutex<Vec<Vec<SearchRecord>>>,
    calls: AtomicUsize,
    fail_on_call: Option<(usize, u16)>,
}

impl FakeSink {
    pub(crate) fn failing_on(call: usize, status: u16) -> Self {
        Self {
            fail_on_call: Some((call, status)),
            ..Self::default()
        }
    }

    pub(crate) fn batch_sizes(&self) -> Vec<usize> {
        self.batches.lock().unwrap().iter().map(Vec::len).collect()
    }

    pub(crate) fn object_ids(&self) -> Vec<String> {
        self.batches
            .lock()
            .unwrap()
            .iter()
            .flatten()
            .map(|r| r.object_id.clone())
            .collect()
    }
}

#[async_trait]
impl RecordSink for FakeSink {
    async fn save(&self, records: &[SearchRecord]) -> Result<(), IndexError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some((fail_call, status)) = self.fail_on_call {
            if call == fail_call {
                return Err(IndexError::UnexpectedStatus {
                    index: "test".to_owned(),
                    status,
                    message: "rejected".to_owned(),
                });
            }
        }
        self.batches.lock().unwrap().push(records.to_vec());
        Ok(())
    }
}
