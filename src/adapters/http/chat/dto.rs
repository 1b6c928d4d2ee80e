//! HTTP DTOs for the chat endpoint.

use serde_json::Value;

use crate::domain::chat::Query;
use crate::domain::relay::RelayError;

/// Parses a `POST /api/chat` body into a [`Query`].
///
/// Malformed JSON, a missing field, a non-string value and an empty string are
/// all reported as [`RelayError::MissingQuery`].
pub fn parse_chat_request(body: &[u8]) -> Result<Query, RelayError> {
    let value: Value = serde_json::from_slice(body).map_err(|_| RelayError::MissingQuery)?;

    value
        .get("query")
        .and_then(Value::as_str)
        .and_then(|text| Query::new(text).ok())
        .ok_or(RelayError::MissingQuery)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn accepts_string_query() {
        let query = parse_chat_request(br#"{"query":"CORS error in my API"}"#).unwrap();
        assert_eq!(query.as_str(), "CORS error in my API");
    }

    #[test]
    fn ignores_extra_fields() {
        let query = parse_chat_request(br#"{"query":"x","lang":"en"}"#).unwrap();
        assert_eq!(query.as_str(), "x");
    }

    #[test]
    fn rejects_malformed_json() {
        assert_eq!(parse_chat_request(b"{not json"), Err(RelayError::MissingQuery));
        assert_eq!(parse_chat_request(b""), Err(RelayError::MissingQuery));
    }

    #[test]
    fn rejects_missing_empty_and_null() {
        for body in [r#"{}"#, r#"{"query":""}"#, r#"{"query":null}"#, r#"[]"#, r#""query""#] {
            assert_eq!(
                parse_chat_request(body.as_bytes()),
                Err(RelayError::MissingQuery),
                "body {body} should be rejected"
            );
        }
    }

    fn non_string_json() -> impl Strategy<Value = Value> {
        prop_oneof![
            Just(Value::Null),
            any::<bool>().prop_map(Value::Bool),
            any::<i64>().prop_map(Value::from),
            any::<f64>()
                .prop_filter("finite", |f| f.is_finite())
                .prop_map(Value::from),
            prop::collection::vec(any::<i32>().prop_map(Value::from), 0..4).prop_map(Value::Array),
            Just(serde_json::json!({ "nested": "query" })),
        ]
    }

    proptest! {
        #[test]
        fn non_string_queries_are_rejected(value in non_string_json()) {
            let body = serde_json::to_vec(&serde_json::json!({ "query": value })).unwrap();
            prop_assert_eq!(parse_chat_request(&body), Err(RelayError::MissingQuery));
        }

        #[test]
        fn non_empty_strings_are_accepted(text in ".{1,40}") {
            let body = serde_json::to_vec(&serde_json::json!({ "query": text })).unwrap();
            let query = parse_chat_request(&body).unwrap();
            prop_assert_eq!(query.as_str(), text.as_str());
        }
    }
}
