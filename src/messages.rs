/// Wire types for Selection Search
use serde::{Deserialize, Serialize};

/// Message sent from the content script to the background relay.
///
/// Serializes as `{"action": "search", "query": "..."}`. Deserialization of
/// anything else fails, which is how malformed or unrelated messages get
/// ignored: the relay simply drops payloads it cannot decode.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum RelayMessage {
    Search { query: String },
}

/// Payload for `chrome.search.query`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SearchRequest {
    pub text: String,
    pub disposition: Disposition,
}

/// Where the browser opens the search results. The relay only ever asks
/// for a new tab.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Disposition {
    NewTab,
}

impl SearchRequest {
    /// The relay always opens results in a new tab.
    pub fn new_tab(text: String) -> SearchRequest {
        SearchRequest {
            text,
            disposition: Disposition::NewTab,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_relay_message_wire_shape() {
        let message = RelayMessage::Search {
            query: "rust wasm".to_string(),
        };

        let value = serde_json::to_value(&message).unwrap();

        assert_eq!(value, json!({"action": "search", "query": "rust wasm"}));
    }

    #[test]
    fn test_relay_message_round_trip() {
        let message = RelayMessage::Search {
            query: "hello".to_string(),
        };

        let encoded = serde_json::to_string(&message).unwrap();
        let decoded: RelayMessage = serde_json::from_str(&encoded).unwrap();

        assert_eq!(decoded, message);
    }

    #[test]
    fn test_unknown_action_is_rejected() {
        let value = json!({"action": "translate", "query": "hello"});

        assert!(serde_json::from_value::<RelayMessage>(value).is_err());
    }

    #[test]
    fn test_missing_query_is_rejected() {
        let value = json!({"action": "search"});

        assert!(serde_json::from_value::<RelayMessage>(value).is_err());
    }

    #[test]
    fn test_non_object_payload_is_rejected() {
        assert!(serde_json::from_value::<RelayMessage>(json!("search")).is_err());
        assert!(serde_json::from_value::<RelayMessage>(json!(42)).is_err());
    }

    #[test]
    fn test_search_request_wire_shape() {
        let request = SearchRequest::new_tab("rust wasm".to_string());

        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(value, json!({"text": "rust wasm", "disposition": "NEW_TAB"}));
    }

    #[test]
    fn test_disposition_name_matches_chrome_api() {
        assert_eq!(
            serde_json::to_value(Disposition::NewTab).unwrap(),
            json!("NEW_TAB")
        );
    }
}
