//! Paginated `products` query for the Shopify Admin GraphQL API.
//!
//! The query document is fixed; country, locale, page size and cursor travel
//! as typed GraphQL variables, so caller-supplied values never become part of
//! the query syntax. An unknown country code or locale is forwarded as-is and
//! rejected by the API as an application-level error.

use serde::Serialize;
use shopsync_core::{BatchSize, Cursor};

/// Active products with their localized title and country-contextual prices.
///
/// `$first` bounds both the product page and each product's variant list.
pub const PRODUCTS_QUERY: &str = r#"query Products($first: Int!, $after: String, $country: CountryCode!, $locale: String!) {
  products(first: $first, after: $after, query: "status:active") {
    edges {
      cursor
      node {
        id
        title
        status
        publishedInContext(context: { country: $country })
        translations(locale: $locale) {
          key
          value
        }
        variants(first: $first) {
          edges {
            node {
              id
              title
              price
              contextualPricing(context: { country: $country }) {
                price {
                  amount
                  currencyCode
                }
                compareAtPrice {
                  amount
                  currencyCode
                }
              }
            }
          }
        }
      }
    }
    pageInfo {
      hasNextPage
    }
  }
}"#;

/// Request body posted to the GraphQL endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct GraphqlRequest {
    pub query: &'static str,
    pub variables: ProductsVariables,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductsVariables {
    pub first: u32,
    /// `null` requests the first page.
    pub after: Option<String>,
    pub country: String,
    pub locale: String,
}

/// Builds the products request for one page.
#[must_use]
pub fn products_query(
    country: &str,
    locale: &str,
    batch_size: BatchSize,
    cursor: Option<&Cursor>,
) -> GraphqlRequest {
    GraphqlRequest {
        query: PRODUCTS_QUERY,
        variables: ProductsVariables {
            first: batch_size.get(),
            after: cursor.map(|c| c.as_str().to_owned()),
            country: country.to_owned(),
            locale: locale.to_owned(),
        },
    }
}
