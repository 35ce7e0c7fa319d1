//! Add-to-cart form descriptor.
//!
//! The presentation layer renders these fields as hidden inputs of a POST
//! form targeting the cart handler. `analytics` and `lines` travel as JSON
//! strings inside the form body.

use serde::{Deserialize, Serialize};

use crate::analytics::ProductAnalytics;
use crate::product::Variant;
use crate::CoreError;

pub const ADD_TO_CART_ACTION: &str = "ADD_TO_CART";

/// One cart line as the cart handler expects it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub merchandise_id: String,
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddToCartForm {
    pub cart_action: String,
    pub country_code: String,
    pub analytics: String,
    pub lines: String,
}

impl AddToCartForm {
    /// Builds the form for `quantity` units of `variant`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Encode`] if the analytics or lines payload cannot
    /// be encoded as JSON.
    pub fn new(
        variant: &Variant,
        quantity: u32,
        country_code: &str,
        analytics: &ProductAnalytics,
    ) -> Result<Self, CoreError> {
        let lines = vec![CartLine {
            merchandise_id: variant.id.clone(),
            quantity,
        }];

        let analytics = serde_json::to_string(analytics).map_err(|source| CoreError::Encode {
            context: "cart analytics",
            source,
        })?;
        let lines = serde_json::to_string(&lines).map_err(|source| CoreError::Encode {
            context: "cart lines",
            source,
        })?;

        Ok(Self {
            cart_action: ADD_TO_CART_ACTION.to_owned(),
            country_code: country_code.to_owned(),
            analytics,
            lines,
        })
    }

    /// Hidden-input `(name, value)` pairs in submission order.
    #[must_use]
    pub fn to_form_fields(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("cartAction", self.cart_action.as_str()),
            ("countryCode", self.country_code.as_str()),
            ("analytics", self.analytics.as_str()),
            ("lines", self.lines.as_str()),
        ]
    }

    /// Decodes the `lines` field back into cart lines.
    ///
    /// # Errors
    ///
    /// Returns the JSON error if `lines` is not a valid encoded line list.
    pub fn decoded_lines(&self) -> Result<Vec<CartLine>, serde_json::Error> {
        serde_json::from_str(&self.lines)
    }
}
