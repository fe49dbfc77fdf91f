pub mod client;
pub mod error;
pub mod query;
pub mod transform;
pub mod types;

pub use client::CatalogClient;
pub use error::CatalogError;
pub use query::{products_query, GraphqlRequest, ProductsVariables};
pub use transform::page_to_records;
pub use types::{ProductNode, ProductsPage, VariantNode};
