//! Page-view analytics descriptor handed to the presentation layer and
//! embedded in the add-to-cart form.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::product::{Product, Variant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageType {
    Product,
}

/// One line of the analytics `products` list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsProduct {
    pub product_gid: String,
    pub variant_gid: String,
    pub name: String,
    pub variant_name: String,
    pub brand: String,
    pub price: Decimal,
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductAnalytics {
    pub page_type: PageType,
    pub resource_id: String,
    pub products: Vec<AnalyticsProduct>,
    pub total_value: Option<Decimal>,
}

/// Builds the product page analytics descriptor.
///
/// Without a selected variant the `products` list is empty and
/// `total_value` is `None`.
#[must_use]
pub fn product_analytics(product: &Product, selected_variant: Option<&Variant>) -> ProductAnalytics {
    let products: Vec<AnalyticsProduct> = selected_variant
        .map(|variant| AnalyticsProduct {
            product_gid: product.id.clone(),
            variant_gid: variant.id.clone(),
            name: product.title.clone(),
            variant_name: variant.title.clone(),
            brand: product.vendor.clone(),
            price: variant.price.amount,
            quantity: 1,
        })
        .into_iter()
        .collect();

    ProductAnalytics {
        page_type: PageType::Product,
        resource_id: product.id.clone(),
        products,
        total_value: selected_variant.map(|variant| variant.price.amount),
    }
}
