//! `product` command: loads one page payload through the same orchestrator
//! the HTTP service uses and writes it to stdout.

use pdp_core::{AppConfig, StoreContext};
use pdp_storefront::{load_product_page, PageError, StorefrontClient};

/// Parses a `Name=Value` argument into a query pair.
///
/// The value may itself contain `=`; only the first one splits.
pub(crate) fn parse_option_arg(raw: &str) -> Result<(String, String), String> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected Name=Value, got '{raw}'"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("option name is empty in '{raw}'"));
    }
    Ok((name.to_string(), value.trim().to_string()))
}

/// Fetches and prints the page payload for `handle`.
///
/// # Errors
///
/// Returns an error if the client cannot be built, the product does not
/// exist, or the storefront request fails.
pub(crate) async fn run_product(
    config: &AppConfig,
    handle: &str,
    options: Vec<(String, String)>,
    pretty: bool,
) -> anyhow::Result<()> {
    let storefront = StorefrontClient::from_config(config)?;
    let context = StoreContext::new(
        storefront.store_origin(),
        config.country.clone(),
        config.language.clone(),
    );

    let page = match load_product_page(&storefront, &context, handle, options).await {
        Ok(page) => page,
        Err(PageError::ProductNotFound { handle }) => {
            anyhow::bail!("product not found: '{handle}'");
        }
        Err(e) => return Err(e.into()),
    };

    let rendered = if pretty {
        serde_json::to_string_pretty(&page)?
    } else {
        serde_json::to_string(&page)?
    };
    println!("{rendered}");
    Ok(())
}
