//! Response envelope decoding.
//!
//! Every endpoint answers `{"success": true, <noun>: payload, ...}` or
//! `{"success": false, "error": "message"}`. The HTTP status is not
//! consulted: failures arrive with 4xx/5xx codes but still carry a
//! well-formed envelope.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::{DeckError, Result};

/// Message used when the backend reports failure without one.
pub const GENERIC_BACKEND_ERROR: &str = "The server could not complete the request.";

#[derive(Deserialize)]
struct RawEnvelope {
    success: bool,
    #[serde(default)]
    error: Option<String>,
    #[serde(flatten)]
    payload: Map<String, Value>,
}

fn open(body: &str) -> Result<Map<String, Value>> {
    let envelope: RawEnvelope = serde_json::from_str(body)?;
    if envelope.success {
        Ok(envelope.payload)
    } else {
        let message = envelope
            .error
            .filter(|e| !e.trim().is_empty())
            .unwrap_or_else(|| GENERIC_BACKEND_ERROR.to_string());
        Err(DeckError::Backend(message))
    }
}

/// Decode the payload stored under `key`.
///
/// `success: false` becomes `Backend`; a body that is not an envelope, or
/// a successful envelope without `key`, becomes `Transport`.
pub fn decode_payload<T: DeserializeOwned>(body: &str, key: &str) -> Result<T> {
    let mut payload = open(body)?;
    let value = payload
        .remove(key)
        .ok_or_else(|| DeckError::transport(format!("response is missing '{}'", key)))?;
    Ok(serde_json::from_value(value)?)
}

/// Decode the whole payload (every key except `success`).
///
/// For endpoints that spread their result into the envelope.
pub fn decode_flat<T: DeserializeOwned>(body: &str) -> Result<T> {
    let payload = open(body)?;
    Ok(serde_json::from_value(Value::Object(payload))?)
}

/// Decode an envelope that carries no payload.
pub fn decode_ack(body: &str) -> Result<()> {
    open(body).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::Deck;

    #[test]
    fn test_success_payload() {
        let body = r#"{"success": true, "deck": {"strategy": "control", "color": "Blue", "main_deck": []}}"#;
        let deck: Deck = decode_payload(body, "deck").unwrap();
        assert_eq!(deck.strategy, "control");
    }

    #[test]
    fn test_failure_carries_message() {
        let body = r#"{"success": false, "error": "Deck not found"}"#;
        let err = decode_payload::<Deck>(body, "deck").unwrap_err();
        assert_eq!(err, DeckError::backend("Deck not found"));
    }

    #[test]
    fn test_failure_without_message() {
        let body = r#"{"success": false}"#;
        let err = decode_ack(body).unwrap_err();
        assert_eq!(err, DeckError::backend(GENERIC_BACKEND_ERROR));
    }

    #[test]
    fn test_blank_error_uses_generic_message() {
        let err = decode_ack(r#"{"success": false, "error": "  "}"#).unwrap_err();
        assert_eq!(err, DeckError::backend(GENERIC_BACKEND_ERROR));
    }

    #[test]
    fn test_missing_key_is_transport() {
        let body = r#"{"success": true}"#;
        let err = decode_payload::<Deck>(body, "deck").unwrap_err();
        assert!(err.is_transport());
    }

    #[test]
    fn test_malformed_body_is_transport() {
        for body in ["<html>502 Bad Gateway</html>", "", r#"{"deck": {}}"#, r#"{"success": "yes"}"#] {
            let err = decode_ack(body).unwrap_err();
            assert!(err.is_transport(), "body {:?} gave {:?}", body, err);
        }
    }

    #[test]
    fn test_wrong_payload_shape_is_transport() {
        let body = r#"{"success": true, "deck": [1, 2, 3]}"#;
        let err = decode_payload::<Deck>(body, "deck").unwrap_err();
        assert!(err.is_transport());
    }

    #[test]
    fn test_ack() {
        assert!(decode_ack(r#"{"success": true}"#).is_ok());
    }

    #[test]
    fn test_flat_payload() {
        #[derive(serde::Deserialize)]
        struct Added {
            deck_code: String,
            message: String,
        }

        let body = r#"{"success": true, "message": "Added", "deck_code": "ST-01", "added_cards": []}"#;
        let added: Added = decode_flat(body).unwrap();
        assert_eq!(added.deck_code, "ST-01");
        assert_eq!(added.message, "Added");
    }
}
