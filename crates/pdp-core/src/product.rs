//! Storefront product shapes as returned by the `Product` and
//! `productRecommendations` queries and re-emitted in the page payload.
//!
//! Field names follow the Storefront GraphQL schema (camelCase on the wire).
//! Connections keep their `{ "nodes": [...] }` wrapper so the payload mirrors
//! what a renderer written against the Storefront API already expects.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

use crate::media::MediaRecord;
use crate::selection::SelectedOption;

/// A GraphQL connection reduced to its `nodes` list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Connection<T> {
    #[serde(default = "Vec::new")]
    pub nodes: Vec<T>,
}

impl<T> Default for Connection<T> {
    fn default() -> Self {
        Self { nodes: Vec::new() }
    }
}

/// Shopify `MoneyV2`. The amount arrives as a decimal string (`"19.99"`)
/// and is kept as a [`Decimal`] to avoid float rounding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Money {
    pub amount: Decimal,
    pub currency_code: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    #[serde(default)]
    pub id: Option<String>,
    pub url: String,
    #[serde(default)]
    pub alt_text: Option<String>,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
}

/// A configurable product option and its declared values, e.g.
/// `Size: [S, M, L]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductOption {
    pub name: String,
    #[serde(default)]
    pub values: Vec<String>,
}

/// Parent reference carried on every variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantProduct {
    pub title: String,
    pub handle: String,
}

/// A purchasable configuration of a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Variant {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub sku: Option<String>,
    pub available_for_sale: bool,
    pub price: Money,
    #[serde(default)]
    pub compare_at_price: Option<Money>,
    #[serde(default)]
    pub unit_price: Option<Money>,
    #[serde(default)]
    pub selected_options: Vec<SelectedOption>,
    #[serde(default)]
    pub image: Option<Image>,
    pub product: VariantProduct,
}

/// Reads `null` the same as an absent field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// The product being viewed.
///
/// `selected_variant` is the storefront's match for the request's selected
/// options; `variants` is the short positional fallback list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Empty when the storefront sent no id; the fetcher treats that as
    /// not found.
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub vendor: String,
    pub handle: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub description_html: String,
    #[serde(default)]
    pub options: Vec<ProductOption>,
    #[serde(default)]
    pub selected_variant: Option<Variant>,
    #[serde(default)]
    pub media: Connection<MediaRecord>,
    #[serde(default)]
    pub variants: Connection<Variant>,
}

/// A lightweight product used in recommendation lists. Carries no
/// descriptions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSummary {
    pub id: String,
    pub title: String,
    pub handle: String,
    #[serde(default)]
    pub vendor: String,
    #[serde(default)]
    pub published_at: Option<String>,
    #[serde(default)]
    pub variants: Connection<Variant>,
}

impl ProductSummary {
    /// The variant a product card shows: the first one returned.
    #[must_use]
    pub fn featured_variant(&self) -> Option<&Variant> {
        self.variants.nodes.first()
    }
}
