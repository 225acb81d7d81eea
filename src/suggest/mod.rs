//! Variable suggestions: lookup, caching, and delivery.

mod cache;
mod client;
mod fetch;

pub use cache::SuggestionCache;
pub use client::{ENDPOINT_ENV, LookupReply, SuggestionClient};
pub use fetch::{LookupError, fetch_suggestions};

use serde::Deserialize;

/// An autocomplete candidate returned by the variable lookup endpoint.
///
/// Read-only external data; consumed transiently to build a variable token.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Suggestion {
    pub name: String,
    #[serde(default)]
    pub category: String,
    /// Raw payload value. The endpoint may send a number, a string, or
    /// null; only numbers survive into a token value.
    #[serde(default)]
    pub value: serde_json::Value,
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub inputs: Option<String>,
}

impl Suggestion {
    /// The numeric payload, if the endpoint supplied one.
    pub fn numeric_value(&self) -> Option<f64> {
        self.value.as_f64()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserializes_full_record() {
        let suggestion: Suggestion = serde_json::from_str(
            r#"{"name": "revenue", "category": "kpi", "value": 120.5, "id": "r1", "inputs": "q1"}"#,
        )
        .unwrap();
        assert_eq!(suggestion.name, "revenue");
        assert_eq!(suggestion.category, "kpi");
        assert_eq!(suggestion.numeric_value(), Some(120.5));
        assert_eq!(suggestion.inputs.as_deref(), Some("q1"));
    }

    #[test]
    fn test_non_numeric_values_have_no_numeric_payload() {
        let suggestion: Suggestion =
            serde_json::from_str(r#"{"name": "a", "value": "text"}"#).unwrap();
        assert_eq!(suggestion.numeric_value(), None);

        let suggestion: Suggestion =
            serde_json::from_str(r#"{"name": "b", "value": null}"#).unwrap();
        assert_eq!(suggestion.numeric_value(), None);

        let suggestion: Suggestion = serde_json::from_str(r#"{"name": "c"}"#).unwrap();
        assert_eq!(suggestion.numeric_value(), None);
    }
}
