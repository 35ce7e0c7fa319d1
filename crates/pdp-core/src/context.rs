//! Per-deployment storefront context handed explicitly to the fetch and
//! payload-assembly steps.

use serde::Serialize;

/// Store identity and locale for one page request.
///
/// Built once at startup from [`crate::AppConfig`] and cloned into each
/// request; nothing downstream reads locale or domain from globals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreContext {
    /// Storefront origin, e.g. `"https://hydrogen-preview.myshopify.com"`.
    pub store_domain: String,
    /// Upper-case ISO country code, e.g. `"US"`.
    pub country: String,
    /// Upper-case language code, e.g. `"EN"`.
    pub language: String,
}

impl StoreContext {
    #[must_use]
    pub fn new(
        store_domain: impl Into<String>,
        country: impl Into<String>,
        language: impl Into<String>,
    ) -> Self {
        Self {
            store_domain: store_domain.into(),
            country: country.into().to_uppercase(),
            language: language.into().to_uppercase(),
        }
    }
}
