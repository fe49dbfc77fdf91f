//! Flattening of catalog pages into search records.

use rust_decimal::Decimal;
use shopsync_core::SearchRecord;

use crate::types::{Money, ProductNode, ProductsPage, VariantNode};

/// Converts a page into one [`SearchRecord`] per variant.
///
/// Records follow edge order: every variant of the first product, then every
/// variant of the second, and so on. Products without variants contribute
/// nothing. Pure; calling it twice on the same page yields the same output.
#[must_use]
pub fn page_to_records(page: &ProductsPage) -> Vec<SearchRecord> {
    page.edges
        .iter()
        .flat_map(|edge| product_records(&edge.node))
        .collect()
}

fn product_records(product: &ProductNode) -> impl Iterator<Item = SearchRecord> + '_ {
    let title = translated_title(product);
    product
        .variants
        .edges
        .iter()
        .map(move |edge| variant_record(&edge.node, title))
}

/// The `"title"` translation when present and non-empty, else the product title.
fn translated_title(product: &ProductNode) -> &str {
    product
        .translations
        .iter()
        .find(|t| t.key == "title")
        .and_then(|t| t.value.as_deref())
        .filter(|value| !value.is_empty())
        .unwrap_or(product.title.as_str())
}

fn variant_record(variant: &VariantNode, title: &str) -> SearchRecord {
    let pricing = variant.contextual_pricing.as_ref();
    SearchRecord {
        object_id: variant.id.clone(),
        title: title.to_owned(),
        price: amount_or_zero(pricing.and_then(|p| p.price.as_ref())),
        compare_at_price: amount_or_zero(pricing.and_then(|p| p.compare_at_price.as_ref())),
    }
}

fn amount_or_zero(money: Option<&Money>) -> Decimal {
    money.map_or(Decimal::ZERO, |m| m.amount)
}

#[cfg(test)]
#[path = "transform_test.rs"]
mod tests;
