//! Product Fetcher: the product query followed by the recommendations query.

use pdp_core::{Product, ProductSummary, SelectedOption, StoreContext, Variant};

use crate::client::StorefrontClient;
use crate::error::PageError;

/// Result of a successful fetch, with the variant already resolved.
#[derive(Debug, Clone)]
pub struct FetchedProduct {
    pub product: Product,
    pub recommendations: Vec<ProductSummary>,
    pub selected_variant: Option<Variant>,
}

/// Fetches a product by handle and then its recommendations.
///
/// The calls are sequential because the recommendations query needs the
/// product id. Nothing is cached.
///
/// # Errors
///
/// - [`PageError::ProductNotFound`] when the handle resolves to no product
///   or to one without an id; the recommendations query is not issued.
/// - [`PageError::Storefront`] for any transport, status, GraphQL, or decode
///   failure of either query.
pub async fn fetch_product(
    client: &StorefrontClient,
    context: &StoreContext,
    handle: &str,
    selected_options: &[SelectedOption],
) -> Result<FetchedProduct, PageError> {
    let Some(product) = client
        .product_by_handle(handle, selected_options, context)
        .await?
        .filter(|product| !product.id.trim().is_empty())
    else {
        tracing::warn!(handle, "storefront returned no product for handle");
        return Err(PageError::ProductNotFound {
            handle: handle.to_owned(),
        });
    };

    let recommendations = client.recommendations(&product.id, context).await?;
    let selected_variant = resolve_selected_variant(&product);

    Ok(FetchedProduct {
        product,
        recommendations,
        selected_variant,
    })
}

/// Picks the variant to show.
///
/// The options-matched `selected_variant` always wins; the first positional
/// fallback is used only when no variant matched. `None` when the product
/// has no variants at all.
#[must_use]
pub fn resolve_selected_variant(product: &Product) -> Option<Variant> {
    product
        .selected_variant
        .clone()
        .or_else(|| product.variants.nodes.first().cloned())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn variant(id: &str) -> serde_json::Value {
        json!({
            "id": id,
            "title": id,
            "availableForSale": true,
            "price": {"amount": "10.00", "currencyCode": "USD"},
            "product": {"title": "Classic Tee", "handle": "classic-tee"}
        })
    }

    fn product(selected: Option<&str>, fallback: &[&str]) -> Product {
        serde_json::from_value(json!({
            "id": "gid://shopify/Product/1",
            "title": "Classic Tee",
            "handle": "classic-tee",
            "selectedVariant": selected.map(variant),
            "variants": {"nodes": fallback.iter().map(|id| variant(id)).collect::<Vec<_>>()}
        }))
        .unwrap()
    }

    #[test]
    fn matched_variant_takes_priority_over_fallback() {
        let resolved = resolve_selected_variant(&product(Some("matched"), &["fallback"]));
        assert_eq!(resolved.map(|v| v.id), Some("matched".to_owned()));
    }

    #[test]
    fn falls_back_to_first_positional_variant() {
        let resolved = resolve_selected_variant(&product(None, &["first", "second"]));
        assert_eq!(resolved.map(|v| v.id), Some("first".to_owned()));
    }

    #[test]
    fn no_variants_resolves_to_none() {
        assert!(resolve_selected_variant(&product(None, &[])).is_none());
    }
}
