//! Selected-option parsing from request query strings.

use percent_encoding::percent_decode_str;
use serde::{Deserialize, Serialize};

/// A shopper's requested option value, e.g. `Color=Blue`.
///
/// Serializes to the Storefront API `SelectedOptionInput` shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedOption {
    pub name: String,
    pub value: String,
}

impl SelectedOption {
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Builds one [`SelectedOption`] per input pair, preserving input order.
///
/// Names are not checked against the product's declared options; the
/// storefront ignores names it does not recognise when matching a variant.
#[must_use]
pub fn parse_selected_options<I, K, V>(pairs: I) -> Vec<SelectedOption>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    pairs
        .into_iter()
        .map(|(name, value)| SelectedOption::new(name, value))
        .collect()
}

/// Decodes a raw `application/x-www-form-urlencoded` query string into
/// ordered key/value pairs.
///
/// A leading `?` is ignored, `+` decodes to a space, and invalid UTF-8 is
/// replaced lossily. Segments with an empty key are dropped; a key without
/// `=` gets an empty value.
#[must_use]
pub fn parse_query_pairs(raw: &str) -> Vec<(String, String)> {
    raw.trim_start_matches('?')
        .split('&')
        .filter(|segment| !segment.is_empty())
        .filter_map(|segment| {
            let (key, value) = segment.split_once('=').unwrap_or((segment, ""));
            let key = decode_component(key);
            if key.is_empty() {
                return None;
            }
            Some((key, decode_component(value)))
        })
        .collect()
}

fn decode_component(component: &str) -> String {
    let spaced = component.replace('+', " ");
    percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_option_per_pair_in_input_order() {
        let options = parse_selected_options([("Size", "M"), ("Color", "Blue"), ("Fit", "Slim")]);
        assert_eq!(
            options,
            vec![
                SelectedOption::new("Size", "M"),
                SelectedOption::new("Color", "Blue"),
                SelectedOption::new("Fit", "Slim"),
            ]
        );
    }

    #[test]
    fn empty_input_yields_no_options() {
        let options = parse_selected_options(Vec::<(String, String)>::new());
        assert!(options.is_empty());
    }

    #[test]
    fn unknown_option_names_pass_through() {
        let options = parse_selected_options([("utm_source", "newsletter")]);
        assert_eq!(options, vec![SelectedOption::new("utm_source", "newsletter")]);
    }

    #[test]
    fn query_pairs_decode_percent_and_plus() {
        let pairs = parse_query_pairs("?Color=Navy+Blue&Size=X%2FL");
        assert_eq!(
            pairs,
            vec![
                ("Color".to_owned(), "Navy Blue".to_owned()),
                ("Size".to_owned(), "X/L".to_owned()),
            ]
        );
    }

    #[test]
    fn query_pairs_keep_order_and_missing_values() {
        let pairs = parse_query_pairs("b=2&a&=orphan&&c=");
        assert_eq!(
            pairs,
            vec![
                ("b".to_owned(), "2".to_owned()),
                ("a".to_owned(), String::new()),
                ("c".to_owned(), String::new()),
            ]
        );
    }

    #[test]
    fn query_pairs_empty_string() {
        assert!(parse_query_pairs("").is_empty());
        assert!(parse_query_pairs("?").is_empty());
    }

    #[test]
    fn selected_option_serializes_as_storefront_input() {
        let json = serde_json::to_value(SelectedOption::new("Color", "Blue")).unwrap();
        assert_eq!(json, serde_json::json!({"name": "Color", "value": "Blue"}));
    }
}
