//! Page Orchestrator: composes selection parsing, fetching, and media
//! normalization into the payload handed to the presentation layer.

use serde::Serialize;

use pdp_core::{
    normalize_media, parse_selected_options, product_analytics, AddToCartForm, GalleryMedia,
    Product, ProductAnalytics, ProductSummary, StoreContext, Variant,
};

use crate::client::StorefrontClient;
use crate::error::PageError;
use crate::fetcher::{fetch_product, FetchedProduct};

/// Quantity submitted by the page's add-to-cart form.
const DEFAULT_CART_QUANTITY: u32 = 1;

/// Everything the product page renders, assembled once per request.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPage {
    pub product: Product,
    pub product_recommendations: Vec<ProductSummary>,
    pub selected_variant: Option<Variant>,
    pub store_domain: String,
    pub analytics: ProductAnalytics,
    /// `None` means render no gallery at all.
    pub gallery: Option<Vec<GalleryMedia>>,
    /// Whether purchase affordances should be shown.
    pub orderable: bool,
    /// Present only when `orderable`.
    pub add_to_cart: Option<AddToCartForm>,
}

/// Loads the product page for `handle`, selecting a variant from the
/// request's query pairs.
///
/// # Errors
///
/// - [`PageError::ProductNotFound`] when the handle matches no product.
/// - [`PageError::Storefront`] when either storefront query fails.
/// - [`PageError::Core`] if the add-to-cart payload cannot be encoded.
pub async fn load_product_page<K, V>(
    client: &StorefrontClient,
    context: &StoreContext,
    handle: &str,
    query_pairs: impl IntoIterator<Item = (K, V)>,
) -> Result<ProductPage, PageError>
where
    K: Into<String>,
    V: Into<String>,
{
    let selected_options = parse_selected_options(query_pairs);
    let fetched = fetch_product(client, context, handle, &selected_options).await?;
    let page = assemble_page(fetched, context)?;

    tracing::info!(
        handle,
        product_id = %page.product.id,
        selected_variant = page.selected_variant.as_ref().map(|v| v.id.as_str()),
        recommendations = page.product_recommendations.len(),
        orderable = page.orderable,
        "assembled product page"
    );

    Ok(page)
}

/// Builds the payload from already-fetched data.
///
/// # Errors
///
/// Returns [`PageError::Core`] if the add-to-cart payload cannot be encoded.
pub fn assemble_page(
    fetched: FetchedProduct,
    context: &StoreContext,
) -> Result<ProductPage, PageError> {
    let FetchedProduct {
        product,
        recommendations,
        selected_variant,
    } = fetched;

    let gallery = normalize_media(&product.media.nodes);
    let analytics = product_analytics(&product, selected_variant.as_ref());
    let orderable = selected_variant
        .as_ref()
        .is_some_and(|variant| variant.available_for_sale);

    let add_to_cart = match selected_variant.as_ref() {
        Some(variant) if orderable => Some(AddToCartForm::new(
            variant,
            DEFAULT_CART_QUANTITY,
            &context.country,
            &analytics,
        )?),
        _ => None,
    };

    Ok(ProductPage {
        product,
        product_recommendations: recommendations,
        selected_variant,
        store_domain: context.store_domain.clone(),
        analytics,
        gallery,
        orderable,
        add_to_cart,
    })
}
