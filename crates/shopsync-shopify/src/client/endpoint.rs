//! Admin GraphQL endpoint construction from a configured store domain.

use reqwest::Url;

use crate::error::CatalogError;

/// Builds `https://{host}/admin/api/{api_version}/graphql.json`.
///
/// `store` may be a bare domain (`"example.myshopify.com"`) or a URL with a
/// scheme and path (`"https://example.myshopify.com/admin"`); only the host
/// and port are kept.
///
/// # Errors
///
/// Returns [`CatalogError::InvalidEndpoint`] if `store` is empty or has no
/// parseable host.
pub(crate) fn graphql_endpoint(store: &str, api_version: &str) -> Result<Url, CatalogError> {
    let trimmed = store.trim();
    if trimmed.is_empty() {
        return Err(CatalogError::InvalidEndpoint {
            endpoint: store.to_owned(),
            reason: "store domain is empty; set SHOPIFY_STORE".to_owned(),
        });
    }

    let with_scheme = if trimmed.contains("://") {
        trimmed.to_owned()
    } else {
        format!("https://{trimmed}")
    };

    let parsed = Url::parse(&with_scheme).map_err(|e| CatalogError::InvalidEndpoint {
        endpoint: store.to_owned(),
        reason: e.to_string(),
    })?;

    let host = parsed
        .host_str()
        .filter(|h| !h.is_empty())
        .ok_or_else(|| CatalogError::InvalidEndpoint {
            endpoint: store.to_owned(),
            reason: "no host".to_owned(),
        })?;

    let authority = match parsed.port() {
        Some(port) => format!("{host}:{port}"),
        None => host.to_owned(),
    };

    let endpoint = format!(
        "{scheme}://{authority}/admin/api/{version}/graphql.json",
        scheme = parsed.scheme(),
        version = api_version.trim_matches('/'),
    );
    Url::parse(&endpoint).map_err(|e| CatalogError::InvalidEndpoint {
        endpoint,
        reason: e.to_string(),
    })
}
