//! Response types for the `products` query.
//!
//! ## Notes on the response shape
//!
//! ### Envelope
//! A 200 response may still carry an `errors` member. It is usually a list of
//! `{ message, locations, path, extensions }` objects, but some gateway
//! rejections send a single string instead. When errors are present `data`
//! is often `null`.
//!
//! ### `translations`
//! Empty list when the product has no translation for the requested locale.
//! Only the entry keyed `"title"` is used.
//!
//! ### `contextualPricing`
//! `compareAtPrice` is `null` when the variant is not on sale. Amounts are
//! decimal strings such as `"12.99"`. The whole object can be missing when the
//! variant is not sold in the requested country.
//!
//! ### `price` on variants
//! The shop-currency base price. Kept for debugging but never copied into
//! search records.

use rust_decimal::Decimal;
use serde::Deserialize;
use shopsync_core::Cursor;

/// Top-level GraphQL response envelope.
#[derive(Debug, Deserialize)]
pub struct GraphqlResponse<T> {
    pub data: Option<T>,

    #[serde(default)]
    pub errors: Option<GraphqlErrors>,
}

/// The `errors` member of a GraphQL response.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum GraphqlErrors {
    List(Vec<GraphqlErrorEntry>),
    Message(String),
}

impl GraphqlErrors {
    /// Flattens the error payload into human-readable messages.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        match self {
            GraphqlErrors::List(entries) => entries.iter().map(|e| e.message.clone()).collect(),
            GraphqlErrors::Message(message) => vec![message.clone()],
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            GraphqlErrors::List(entries) => entries.is_empty(),
            GraphqlErrors::Message(message) => message.is_empty(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct GraphqlErrorEntry {
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct ProductsData {
    #[serde(default)]
    pub products: Option<ProductsPage>,
}

/// One page of the `products` connection.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductsPage {
    #[serde(default)]
    pub edges: Vec<ProductEdge>,
    pub page_info: PageInfo,
}

impl ProductsPage {
    #[must_use]
    pub fn has_next_page(&self) -> bool {
        self.page_info.has_next_page
    }

    /// Cursor of the last edge, or `None` for a page without edges.
    #[must_use]
    pub fn last_cursor(&self) -> Option<&Cursor> {
        self.edges.last().map(|edge| &edge.cursor)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub has_next_page: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProductEdge {
    pub cursor: Cursor,
    pub node: ProductNode,
}

/// A product as returned by the query.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductNode {
    /// Global ID, e.g. `gid://shopify/Product/123`.
    pub id: String,

    pub title: String,

    /// `ACTIVE`, `DRAFT` or `ARCHIVED`; the query only asks for active products.
    #[serde(default)]
    pub status: Option<String>,

    #[serde(default)]
    pub published_in_context: Option<bool>,

    #[serde(default)]
    pub translations: Vec<Translation>,

    #[serde(default)]
    pub variants: VariantConnection,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Translation {
    pub key: String,
    #[serde(default)]
    pub value: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct VariantConnection {
    #[serde(default)]
    pub edges: Vec<VariantEdge>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VariantEdge {
    pub node: VariantNode,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantNode {
    /// Global ID, e.g. `gid://shopify/ProductVariant/456`. Becomes the record's `objectID`.
    pub id: String,

    pub title: String,

    #[serde(default)]
    pub price: Option<String>,

    #[serde(default)]
    pub contextual_pricing: Option<ContextualPricing>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContextualPricing {
    #[serde(default)]
    pub price: Option<Money>,

    #[serde(default)]
    pub compare_at_price: Option<Money>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Money {
    pub amount: Decimal,
    #[serde(default)]
    pub currency_code: Option<String>,
}
