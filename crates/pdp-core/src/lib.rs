//! Domain types and pure data shaping for the product detail page.
//!
//! Nothing in this crate performs I/O. The storefront client and the page
//! orchestrator live in `pdp-storefront`; this crate owns the shapes they
//! exchange and the request-scoped transforms applied to them.

pub mod analytics;
pub mod app_config;
pub mod cart;
pub mod config;
pub mod context;
pub mod media;
pub mod product;
pub mod selection;

use thiserror::Error;

pub use analytics::{product_analytics, AnalyticsProduct, PageType, ProductAnalytics};
pub use app_config::{AppConfig, Environment};
pub use cart::{AddToCartForm, CartLine, ADD_TO_CART_ACTION};
pub use config::{load_app_config, load_app_config_from_env};
pub use context::StoreContext;
pub use media::{
    normalize_media, GalleryMedia, MediaContentType, MediaRecord, MediaTypeTag, ModelRenderHints,
};
pub use product::{
    Connection, Image, Money, Product, ProductOption, ProductSummary, Variant, VariantProduct,
};
pub use selection::{parse_query_pairs, parse_selected_options, SelectedOption};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("failed to encode {context} as JSON: {source}")]
    Encode {
        context: &'static str,
        #[source]
        source: serde_json::Error,
    },
}
