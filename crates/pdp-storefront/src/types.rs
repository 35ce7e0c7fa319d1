//! Storefront GraphQL request and response envelopes.
//!
//! The product shapes themselves live in `pdp-core`; this module only wraps
//! them in the GraphQL transport format:
//!
//! ```json
//! { "data": { ... } | null, "errors": [ { "message": "..." } ] }
//! ```
//!
//! `errors` is omitted entirely on success. Throttling is reported either as
//! HTTP 429/430 or as a `THROTTLED` error entry with HTTP 200.

use serde::{Deserialize, Serialize};

use pdp_core::{Product, ProductSummary, SelectedOption};

use crate::error::StorefrontError;

/// POST body sent to `graphql.json`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphQlRequest<'a, V: Serialize> {
    pub query: &'a str,
    pub operation_name: &'a str,
    pub variables: V,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductVariables<'a> {
    pub handle: &'a str,
    pub selected_options: &'a [SelectedOption],
    pub country: &'a str,
    pub language: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationsVariables<'a> {
    pub product_id: &'a str,
    pub country: &'a str,
    pub language: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct GraphQlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphQlErrorEntry>,
}

#[derive(Debug, Deserialize)]
pub struct GraphQlErrorEntry {
    pub message: String,
    #[serde(default)]
    pub extensions: Option<GraphQlErrorExtensions>,
}

#[derive(Debug, Deserialize)]
pub struct GraphQlErrorExtensions {
    #[serde(default)]
    pub code: Option<String>,
}

impl<T> GraphQlResponse<T> {
    /// Unwraps `data`, treating any `errors` entry as a failure of the whole
    /// operation.
    ///
    /// # Errors
    ///
    /// - [`StorefrontError::RateLimited`] when an error carries the
    ///   `THROTTLED` code.
    /// - [`StorefrontError::GraphQl`] for any other error entry.
    /// - [`StorefrontError::MissingData`] when neither data nor errors are
    ///   present.
    pub fn into_data(self, operation: &str) -> Result<T, StorefrontError> {
        if !self.errors.is_empty() {
            let throttled = self.errors.iter().any(|e| {
                e.extensions
                    .as_ref()
                    .and_then(|ext| ext.code.as_deref())
                    .is_some_and(|code| code == "THROTTLED")
            });
            if throttled {
                return Err(StorefrontError::RateLimited {
                    retry_after_secs: None,
                });
            }

            return Err(StorefrontError::GraphQl {
                operation: operation.to_owned(),
                messages: self.errors.into_iter().map(|e| e.message).collect(),
            });
        }

        self.data.ok_or_else(|| StorefrontError::MissingData {
            operation: operation.to_owned(),
        })
    }
}

/// `data` of the `Product` query. `product` is `null` for unknown handles.
#[derive(Debug, Deserialize)]
pub struct ProductQueryData {
    #[serde(default)]
    pub product: Option<Product>,
}

/// `data` of the `productRecommendations` query. The field is `null` when
/// the storefront has nothing to recommend.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationsQueryData {
    #[serde(default)]
    pub product_recommendations: Option<Vec<ProductSummary>>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn into_data_returns_data_on_success() {
        let response: GraphQlResponse<ProductQueryData> =
            serde_json::from_value(json!({"data": {"product": null}})).unwrap();
        let data = response.into_data("Product").unwrap();
        assert!(data.product.is_none());
    }

    #[test]
    fn into_data_surfaces_error_messages() {
        let response: GraphQlResponse<ProductQueryData> = serde_json::from_value(json!({
            "data": null,
            "errors": [
                {"message": "Field 'bogus' doesn't exist on type 'Product'"},
                {"message": "Variable $handle is required"}
            ]
        }))
        .unwrap();

        let err = response.into_data("Product").unwrap_err();
        match err {
            StorefrontError::GraphQl {
                operation,
                messages,
            } => {
                assert_eq!(operation, "Product");
                assert_eq!(messages.len(), 2);
            }
            other => panic!("expected GraphQl error, got: {other:?}"),
        }
    }

    #[test]
    fn into_data_maps_throttled_code_to_rate_limited() {
        let response: GraphQlResponse<ProductQueryData> = serde_json::from_value(json!({
            "errors": [{"message": "Throttled", "extensions": {"code": "THROTTLED"}}]
        }))
        .unwrap();
        let err = response.into_data("Product").unwrap_err();
        assert!(matches!(err, StorefrontError::RateLimited { .. }));
    }

    #[test]
    fn into_data_requires_data_without_errors() {
        let response: GraphQlResponse<ProductQueryData> =
            serde_json::from_value(json!({})).unwrap();
        let err = response.into_data("Product").unwrap_err();
        assert!(matches!(err, StorefrontError::MissingData { .. }));
    }

    #[test]
    fn product_variables_use_storefront_names() {
        let options = vec![SelectedOption::new("Color", "Blue")];
        let variables = ProductVariables {
            handle: "classic-tee",
            selected_options: &options,
            country: "US",
            language: "EN",
        };
        let value = serde_json::to_value(&variables).unwrap();
        assert_eq!(
            value,
            json!({
                "handle": "classic-tee",
                "selectedOptions": [{"name": "Color", "value": "Blue"}],
                "country": "US",
                "language": "EN"
            })
        );
    }
}
