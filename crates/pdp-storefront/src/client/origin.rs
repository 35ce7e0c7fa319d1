//! Storefront origin resolution.

use crate::error::StorefrontError;

/// Resolves a configured storefront domain to its scheme+host origin.
///
/// Accepts a bare host (`"shop.myshopify.com"`, assumed `https`) or a full
/// URL with any path (`"https://shop.example.com/collections/all"`).
///
/// # Errors
///
/// Returns [`StorefrontError::InvalidEndpoint`] if the value cannot be parsed
/// as a URL with a host.
pub fn storefront_origin(store_domain: &str) -> Result<String, StorefrontError> {
    let trimmed = store_domain.trim();
    let candidate = if trimmed.contains("://") {
        trimmed.to_owned()
    } else {
        format!("https://{trimmed}")
    };

    let url = reqwest::Url::parse(&candidate).map_err(|e| StorefrontError::InvalidEndpoint {
        domain: store_domain.to_owned(),
        reason: e.to_string(),
    })?;

    if url.host_str().is_none_or(str::is_empty) {
        return Err(StorefrontError::InvalidEndpoint {
            domain: store_domain.to_owned(),
            reason: "no host".to_owned(),
        });
    }

    Ok(url.origin().ascii_serialization())
}
