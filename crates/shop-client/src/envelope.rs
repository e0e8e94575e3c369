//! # Response Envelope
//!
//! Every storefront backend response wraps its payload in the same
//! `{ success, data, message }` envelope.

use serde::Deserialize;

/// Standard backend response wrapper
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Payload {
        count: u32,
    }

    #[test]
    fn test_success_envelope() {
        let envelope: Envelope<Payload> =
            serde_json::from_str(r#"{"success":true,"data":{"count":3},"message":null}"#).unwrap();

        assert!(envelope.success);
        assert_eq!(envelope.data, Some(Payload { count: 3 }));
        assert_eq!(envelope.message, None);
    }

    #[test]
    fn test_failure_envelope_with_message() {
        let envelope: Envelope<Payload> =
            serde_json::from_str(r#"{"success":false,"message":"Item no longer available"}"#)
                .unwrap();

        assert!(!envelope.success);
        assert_eq!(envelope.data, None);
        assert_eq!(
            envelope.message,
            Some("Item no longer available".to_string())
        );
    }
}
