use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde_json::Value;

use crate::errors::ChatError;

/// Outcome of reading the `message` field from a request body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageField {
    Valid(String),
    InvalidFormat,
    Empty,
}

pub fn v_path<'a>(root: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let mut cur = root;
    for key in path {
        cur = cur.get(*key)?;
    }
    Some(cur)
}

pub fn v_str<'a>(root: &'a Value, path: &[&str]) -> Option<&'a str> {
    v_path(root, path).and_then(|v| v.as_str())
}

/// HTTP method of an API Gateway proxy event (HTTP API v2, Function URL, or
/// REST v1), upper-cased.
pub fn request_method(payload: &Value) -> Option<String> {
    v_str(payload, &["requestContext", "http", "method"])
        .or_else(|| v_str(payload, &["httpMethod"]))
        .map(str::to_ascii_uppercase)
}

/// Raw request body, base64-decoded when the event says so.
pub fn request_body(payload: &Value) -> Result<String, ChatError> {
    let Some(body) = payload.get("body").and_then(|b| b.as_str()) else {
        return Err(ChatError::ParseError("request body is missing".to_string()));
    };

    let encoded = payload
        .get("isBase64Encoded")
        .and_then(Value::as_bool)
        .unwrap_or(false);

    if !encoded {
        return Ok(body.to_string());
    }

    let bytes = STANDARD
        .decode(body)
        .map_err(|e| ChatError::ParseError(format!("Failed to decode base64 body: {e}")))?;
    String::from_utf8(bytes)
        .map_err(|e| ChatError::ParseError(format!("Request body is not UTF-8: {e}")))
}

/// Parses the body as JSON. `null` is rejected like a missing body.
pub fn parse_json_body(body: &str) -> Result<Value, ChatError> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| ChatError::ParseError(format!("Invalid JSON body: {e}")))?;
    if value.is_null() {
        return Err(ChatError::ParseError("request body is missing".to_string()));
    }
    Ok(value)
}

pub fn message_field(body: &Value) -> MessageField {
    match body.get("message").and_then(Value::as_str) {
        None => MessageField::InvalidFormat,
        Some(m) if m.trim().is_empty() => MessageField::Empty,
        Some(m) => MessageField::Valid(m.to_string()),
    }
}
