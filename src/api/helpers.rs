//! Response builders for the API Lambda.
//!
//! Every response is an API Gateway proxy result carrying the CORS headers,
//! so browsers can call the endpoint from any origin.

use serde::Serialize;
use serde_json::{Value, json};

use crate::core::models::{ErrorBody, iso_timestamp};

pub const ALLOW_METHODS: &str = "GET,OPTIONS,PATCH,DELETE,POST,PUT";
pub const ALLOW_HEADERS: &str = "X-CSRF-Token, X-Requested-With, Accept, Accept-Version, Content-Length, Content-MD5, Content-Type, Date, X-Api-Version";

pub const MSG_METHOD_NOT_ALLOWED: &str = "only POST supported";
pub const MSG_INVALID_FORMAT: &str = "invalid message format";
pub const MSG_EMPTY_MESSAGE: &str = "message cannot be empty";
pub const MSG_INTERNAL_ERROR: &str = "internal server error";

fn cors_headers(json_body: bool) -> Value {
    let mut headers = json!({
        "Access-Control-Allow-Credentials": "true",
        "Access-Control-Allow-Origin": "*",
        "Access-Control-Allow-Methods": ALLOW_METHODS,
        "Access-Control-Allow-Headers": ALLOW_HEADERS,
    });
    if json_body {
        headers["Content-Type"] = json!("application/json");
    }
    headers
}

/// Returns a response with the given status and a JSON-serialized body.
#[must_use]
pub fn json_response<T: Serialize>(status_code: u16, body: &T) -> Value {
    let body = serde_json::to_string(body)
        .unwrap_or_else(|_| json!({ "error": MSG_INTERNAL_ERROR }).to_string());
    json!({
        "statusCode": status_code,
        "headers": cors_headers(true),
        "body": body
    })
}

/// Returns the 200 preflight response with an empty body.
#[must_use]
pub fn preflight() -> Value {
    json!({
        "statusCode": 200,
        "headers": cors_headers(false),
        "body": ""
    })
}

/// Returns a client error response with the given status code and message.
#[must_use]
pub fn err_response(status_code: u16, message: &str) -> Value {
    json_response(
        status_code,
        &ErrorBody {
            error: message.to_string(),
            timestamp: None,
        },
    )
}

/// Returns a 500 response. Blank messages are replaced by a generic one.
#[must_use]
pub fn internal_error(message: &str) -> Value {
    let error = if message.trim().is_empty() {
        MSG_INTERNAL_ERROR.to_string()
    } else {
        message.to_string()
    };
    json_response(
        500,
        &ErrorBody {
            error,
            timestamp: Some(iso_timestamp()),
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_err_response_has_cors_and_body() {
        let v = err_response(400, MSG_INVALID_FORMAT);
        assert_eq!(v["statusCode"], 400);
        assert_eq!(v["headers"]["Access-Control-Allow-Origin"], "*");
        assert_eq!(v["headers"]["Content-Type"], "application/json");
        let body: Value = serde_json::from_str(v["body"].as_str().unwrap()).unwrap();
        assert_eq!(body, json!({ "error": "invalid message format" }));
    }

    #[test]
    fn test_preflight_is_empty() {
        let v = preflight();
        assert_eq!(v["statusCode"], 200);
        assert_eq!(v["body"], "");
        assert_eq!(v["headers"]["Access-Control-Allow-Methods"], ALLOW_METHODS);
        assert!(v["headers"].get("Content-Type").is_none());
    }

    #[test]
    fn test_internal_error_falls_back_to_generic_message() {
        let v = internal_error("");
        let body: Value = serde_json::from_str(v["body"].as_str().unwrap()).unwrap();
        assert_eq!(body["error"], MSG_INTERNAL_ERROR);
        assert!(body["timestamp"].as_str().unwrap().ends_with('Z'));
    }
}
