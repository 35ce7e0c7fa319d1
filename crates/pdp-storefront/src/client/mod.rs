//! HTTP client for the Shopify Storefront GraphQL API.

mod origin;

use std::time::Duration;

use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;

use pdp_core::{AppConfig, Product, ProductSummary, SelectedOption, StoreContext};

use crate::error::StorefrontError;
use crate::queries::{
    PRODUCT_OPERATION, PRODUCT_QUERY, RECOMMENDATIONS_OPERATION, RECOMMENDATIONS_QUERY,
};
use crate::retry::retry_with_backoff;
use crate::types::{
    GraphQlRequest, GraphQlResponse, ProductQueryData, ProductVariables,
    RecommendationsQueryData, RecommendationsVariables,
};

pub use origin::storefront_origin;

/// Header carrying the public Storefront API access token.
pub const ACCESS_TOKEN_HEADER: &str = "X-Shopify-Storefront-Access-Token";

/// Shopify's non-standard throttling status, used alongside 429.
const SHOPIFY_THROTTLED: u16 = 430;

/// Client for one storefront's GraphQL endpoint.
///
/// Every call is a `POST {origin}/api/{version}/graphql.json`. HTTP 429/430
/// become [`StorefrontError::RateLimited`], other non-2xx statuses become
/// [`StorefrontError::UnexpectedStatus`], and GraphQL `errors` become
/// [`StorefrontError::GraphQl`]. Transient failures are retried per
/// [`Self::with_retries`]; retries are off by default.
pub struct StorefrontClient {
    client: Client,
    endpoint: Url,
    store_origin: String,
    access_token: String,
    max_retries: u32,
    backoff_base_ms: u64,
}

impl StorefrontClient {
    /// Creates a client for `store_domain` with the given timeout and
    /// `User-Agent`.
    ///
    /// # Errors
    ///
    /// - [`StorefrontError::InvalidEndpoint`] if `store_domain` or
    ///   `api_version` does not form a valid endpoint URL.
    /// - [`StorefrontError::Http`] if the `reqwest::Client` cannot be built.
    pub fn new(
        store_domain: &str,
        access_token: &str,
        api_version: &str,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, StorefrontError> {
        let store_origin = storefront_origin(store_domain)?;
        let endpoint = Url::parse(&format!(
            "{store_origin}/api/{}/graphql.json",
            api_version.trim_matches('/')
        ))
        .map_err(|e| StorefrontError::InvalidEndpoint {
            domain: store_domain.to_owned(),
            reason: format!("api version \"{api_version}\" does not form a valid URL: {e}"),
        })?;

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(5))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            endpoint,
            store_origin,
            access_token: access_token.to_owned(),
            max_retries: 0,
            backoff_base_ms: 0,
        })
    }

    /// Builds a client from application config, including its retry policy.
    ///
    /// # Errors
    ///
    /// See [`Self::new`].
    pub fn from_config(config: &AppConfig) -> Result<Self, StorefrontError> {
        Ok(Self::new(
            &config.storefront_domain,
            &config.storefront_token,
            &config.storefront_api_version,
            config.request_timeout_secs,
            &config.user_agent,
        )?
        .with_retries(config.max_retries, config.retry_backoff_base_ms))
    }

    /// Enables up to `max_retries` additional attempts on transient errors,
    /// with exponential back-off starting at `backoff_base_ms`.
    #[must_use]
    pub fn with_retries(mut self, max_retries: u32, backoff_base_ms: u64) -> Self {
        self.max_retries = max_retries;
        self.backoff_base_ms = backoff_base_ms;
        self
    }

    /// Scheme+host origin of the storefront, e.g. `"https://shop.myshopify.com"`.
    #[must_use]
    pub fn store_origin(&self) -> &str {
        &self.store_origin
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        self.endpoint.as_str()
    }

    /// Runs the `Product` query. Returns `Ok(None)` when the handle matches
    /// no product.
    ///
    /// # Errors
    ///
    /// Propagates any [`StorefrontError`] from the request.
    pub async fn product_by_handle(
        &self,
        handle: &str,
        selected_options: &[SelectedOption],
        context: &StoreContext,
    ) -> Result<Option<Product>, StorefrontError> {
        tracing::debug!(
            handle,
            selected_options = selected_options.len(),
            "querying storefront product"
        );

        let data: ProductQueryData = self
            .execute(
                PRODUCT_OPERATION,
                PRODUCT_QUERY,
                ProductVariables {
                    handle,
                    selected_options,
                    country: &context.country,
                    language: &context.language,
                },
            )
            .await?;

        Ok(data.product)
    }

    /// Runs the `productRecommendations` query. A `null` result is an empty
    /// list.
    ///
    /// # Errors
    ///
    /// Propagates any [`StorefrontError`] from the request.
    pub async fn recommendations(
        &self,
        product_id: &str,
        context: &StoreContext,
    ) -> Result<Vec<ProductSummary>, StorefrontError> {
        tracing::debug!(product_id, "querying storefront recommendations");

        let data: RecommendationsQueryData = self
            .execute(
                RECOMMENDATIONS_OPERATION,
                RECOMMENDATIONS_QUERY,
                RecommendationsVariables {
                    product_id,
                    country: &context.country,
                    language: &context.language,
                },
            )
            .await?;

        Ok(data.product_recommendations.unwrap_or_default())
    }

    async fn execute<V, T>(
        &self,
        operation: &str,
        query: &str,
        variables: V,
    ) -> Result<T, StorefrontError>
    where
        V: Serialize,
        T: DeserializeOwned,
    {
        let body = GraphQlRequest {
            query,
            operation_name: operation,
            variables,
        };
        let body = &body;

        retry_with_backoff(self.max_retries, self.backoff_base_ms, || async move {
            let response = self
                .client
                .post(self.endpoint.clone())
                .header(ACCESS_TOKEN_HEADER, &self.access_token)
                .header(reqwest::header::ACCEPT, "application/json")
                .json(body)
                .send()
                .await?;
            let status = response.status();

            if status == StatusCode::TOO_MANY_REQUESTS || status.as_u16() == SHOPIFY_THROTTLED {
                let retry_after_secs = response
                    .headers()
                    .get(reqwest::header::RETRY_AFTER)
                    .and_then(|v| v.to_str().ok())
                    .and_then(|s| s.trim().parse::<u64>().ok());
                return Err(StorefrontError::RateLimited { retry_after_secs });
            }

            if !status.is_success() {
                return Err(StorefrontError::UnexpectedStatus {
                    status: status.as_u16(),
                    url: self.endpoint.to_string(),
                });
            }

            let text = response.text().await?;
            let parsed = serde_json::from_str::<GraphQlResponse<T>>(&text).map_err(|e| {
                StorefrontError::Deserialize {
                    context: format!("{operation} response"),
                    source: e,
                }
            })?;

            parsed.into_data(operation)
        })
        .await
    }
}

#[cfg(test)]
#[path = "../client_test.rs"]
mod tests;
