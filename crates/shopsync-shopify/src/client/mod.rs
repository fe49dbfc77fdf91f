//! HTTP client for the Shopify Admin GraphQL `products` query.

mod endpoint;

use std::time::Duration;

use reqwest::{Client, Url};
use shopsync_core::{BatchSize, Cursor};

use crate::error::CatalogError;
use crate::query::products_query;
use crate::types::{GraphqlResponse, ProductsData, ProductsPage};

const ACCESS_TOKEN_HEADER: &str = "X-Shopify-Access-Token";

/// Client for the catalog's GraphQL endpoint.
///
/// One request per page, no retries. Non-2xx responses and undecodable bodies
/// are typed errors; GraphQL-level errors inside a 200 response are logged
/// and reported as "no data" (`Ok(None)`).
pub struct CatalogClient {
    client: Client,
    endpoint: Url,
    access_token: String,
}

impl CatalogClient {
    /// Creates a client for `https://{store}/admin/api/{api_version}/graphql.json`.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::InvalidEndpoint`] if `store` is empty or not a host.
    /// - [`CatalogError::Http`] if the underlying `reqwest::Client` cannot be built.
    pub fn new(
        store: &str,
        api_version: &str,
        access_token: &str,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, CatalogError> {
        let endpoint = endpoint::graphql_endpoint(store, api_version)?;
        Self::build(endpoint, access_token, timeout_secs, user_agent)
    }

    /// Creates a client posting to an explicit endpoint URL (for wiremock tests).
    ///
    /// # Errors
    ///
    /// - [`CatalogError::InvalidEndpoint`] if `endpoint` is not a valid URL.
    /// - [`CatalogError::Http`] if the underlying `reqwest::Client` cannot be built.
    pub fn with_endpoint(
        endpoint: &str,
        access_token: &str,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, CatalogError> {
        let url = Url::parse(endpoint).map_err(|e| CatalogError::InvalidEndpoint {
            endpoint: endpoint.to_owned(),
            reason: e.to_string(),
        })?;
        Self::build(url, access_token, timeout_secs, user_agent)
    }

    fn build(
        endpoint: Url,
        access_token: &str,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, CatalogError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self {
            client,
            endpoint,
            access_token: access_token.to_owned(),
        })
    }

    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Fetches one page of active products starting after `cursor`.
    ///
    /// Returns `Ok(None)` when the response carries GraphQL errors or no
    /// `products` payload; the errors are logged at `warn`.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::Http`] on network or TLS failure.
    /// - [`CatalogError::UnexpectedStatus`] on any non-2xx status.
    /// - [`CatalogError::Deserialize`] if the body is not the expected JSON.
    pub async fn fetch_products_page(
        &self,
        country: &str,
        locale: &str,
        batch_size: BatchSize,
        cursor: Option<&Cursor>,
    ) -> Result<Option<ProductsPage>, CatalogError> {
        let request = products_query(country, locale, batch_size, cursor);
        tracing::debug!(
            country,
            locale,
            first = batch_size.get(),
            cursor = cursor.map(Cursor::as_str),
            "fetching products page"
        );

        let response = self
            .client
            .post(self.endpoint.clone())
            .header(ACCESS_TOKEN_HEADER, &self.access_token)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::UnexpectedStatus {
                status: status.as_u16(),
                url: self.endpoint.to_string(),
            });
        }

        let body = response.text().await?;
        let parsed = serde_json::from_str::<GraphqlResponse<ProductsData>>(&body).map_err(|e| {
            CatalogError::Deserialize {
                context: format!(
                    "products page after cursor {}",
                    cursor.map_or("<start>", Cursor::as_str)
                ),
                source: e,
            }
        })?;

        if let Some(errors) = parsed.errors.filter(|e| !e.is_empty()) {
            tracing::warn!(
                cursor = cursor.map(Cursor::as_str),
                errors = ?errors.messages(),
                "catalog returned GraphQL errors; treating page as empty"
            );
            return Ok(None);
        }

        let page = parsed.data.and_then(|d| d.products);
        if page.is_none() {
            tracing::warn!(
                cursor = cursor.map(Cursor::as_str),
                "catalog response has no products payload; treating page as empty"
            );
        }
        Ok(page)
    }
}

#[cfg(test)]
#[path = "../client_test.rs"]
mod tests;
