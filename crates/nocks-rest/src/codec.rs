//! JSON encoding of request bodies and unwrapping of the response envelope

use serde_json::{Map, Value};

use crate::dispatch::ResponseMode;
use crate::error::{RestError, RestResult};

/// Encode request parameters as a JSON object, keeping key order
pub(crate) fn encode_params(params: &Map<String, Value>) -> RestResult<Vec<u8>> {
    serde_json::to_vec(params).map_err(|e| RestError::invalid(format!("unencodable parameters: {e}")))
}

/// Decode a raw body into a JSON value
pub(crate) fn decode_body(status: u16, body: &[u8]) -> RestResult<Value> {
    serde_json::from_slice(body).map_err(|e| RestError::malformed(status, format!("invalid JSON: {e}")))
}

/// Take the payload selected by `mode` out of the envelope
///
/// A missing or `null` payload is an error. On 401/403 it is reported as an
/// authentication failure, since the API answers those without a `data` key.
pub(crate) fn unwrap_envelope(status: u16, envelope: Value, mode: ResponseMode) -> RestResult<Value> {
    let selected = match mode {
        ResponseMode::Data => envelope.get("data"),
        ResponseMode::Pagination => envelope.get("meta").and_then(|m| m.get("pagination")),
    };

    match selected {
        Some(value) if !value.is_null() => Ok(value.clone()),
        _ if status == 401 || status == 403 => Err(RestError::Authentication {
            status,
            message: error_message(&envelope).unwrap_or_else(|| "access denied".to_string()),
        }),
        _ => Err(RestError::malformed(
            status,
            format!("missing `{}` in response", mode.path()),
        )),
    }
}

/// Best effort extraction of an error message from a non-data envelope
fn error_message(envelope: &Value) -> Option<String> {
    let candidates = [
        envelope.get("message"),
        envelope.get("error").and_then(|e| e.get("message")),
        envelope.get("error"),
    ];

    candidates
        .into_iter()
        .flatten()
        .find_map(|v| v.as_str().map(str::to_string))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_encode_preserves_key_order() {
        let mut params = Map::new();
        params.insert("currency".to_string(), json!("EUR"));
        params.insert("payment_method".to_string(), json!({"method": "sepa"}));

        let encoded = encode_params(&params).unwrap();
        assert_eq!(
            String::from_utf8(encoded).unwrap(),
            r#"{"currency":"EUR","payment_method":{"method":"sepa"}}"#
        );
    }

    #[test]
    fn test_decode_rejects_html() {
        let err = decode_body(502, b"<html>Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, RestError::MalformedResponse { status: 502, .. }));
    }

    #[test]
    fn test_unwrap_data() {
        let envelope = json!({"data": {"uuid": "x"}, "meta": {"pagination": {"total": 1}}});
        let data = unwrap_envelope(200, envelope, ResponseMode::Data).unwrap();
        assert_eq!(data, json!({"uuid": "x"}));
    }

    #[test]
    fn test_unwrap_pagination_ignores_data() {
        let envelope = json!({"data": [], "meta": {"pagination": {"total": 1}}});
        let meta = unwrap_envelope(200, envelope, ResponseMode::Pagination).unwrap();
        assert_eq!(meta, json!({"total": 1}));
    }

    #[test]
    fn test_unwrap_missing_path() {
        let err = unwrap_envelope(200, json!({"data": []}), ResponseMode::Pagination).unwrap_err();
        assert!(matches!(err, RestError::MalformedResponse { .. }));
        assert!(err.to_string().contains("meta.pagination"));

        let err = unwrap_envelope(200, json!({"data": null}), ResponseMode::Data).unwrap_err();
        assert!(matches!(err, RestError::MalformedResponse { .. }));
    }

    #[test]
    fn test_unwrap_unauthorized() {
        let envelope = json!({"message": "Unauthenticated."});
        let err = unwrap_envelope(401, envelope, ResponseMode::Data).unwrap_err();
        match err {
            RestError::Authentication { status, message } => {
                assert_eq!(status, 401);
                assert_eq!(message, "Unauthenticated.");
            }
            other => panic!("expected authentication error, got {other:?}"),
        }
    }

    #[test]
    fn test_unauthorized_with_data_is_decoded() {
        let envelope = json!({"data": {"uuid": "x"}});
        assert!(unwrap_envelope(403, envelope, ResponseMode::Data).is_ok());
    }
}
