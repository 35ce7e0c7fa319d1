use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorefrontError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("GraphQL errors from {operation}: {}", messages.join("; "))]
    GraphQl {
        operation: String,
        messages: Vec<String>,
    },

    #[error("{operation} response carried no data")]
    MissingData { operation: String },

    #[error("rate limited by storefront (retry after {retry_after_secs:?}s)")]
    RateLimited { retry_after_secs: Option<u64> },

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("invalid storefront domain \"{domain}\": {reason}")]
    InvalidEndpoint { domain: String, reason: String },
}

/// Failure of a product page load.
#[derive(Debug, Error)]
pub enum PageError {
    /// The handle resolved to no product. Terminal; surfaced as a 404.
    #[error("product not found: {handle}")]
    ProductNotFound { handle: String },

    #[error(transparent)]
    Storefront(#[from] StorefrontError),

    #[error(transparent)]
    Core(#[from] pdp_core::CoreError),
}
