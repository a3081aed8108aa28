//! API Lambda handler for the chat endpoint.
//!
//! This module handles:
//! - CORS preflight and method filtering
//! - Request validation (body, `message` field)
//! - Reply generation (delegated to `ai::ResponseGenerator`)

use super::helpers;
use super::parsing::{self, MessageField};
use crate::ai::ResponseGenerator;
use crate::core::config::AppConfig;
use crate::core::models::{ChatReply, iso_timestamp};
use crate::errors::ChatError;
use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::{error, info, warn};

pub use self::function_handler as handler;

/// Lambda handler for the API entrypoint.
///
/// Configuration is read once per invocation and only turned into a
/// `ResponseGenerator` for POST requests.
///
/// # Errors
///
/// Never returns `Err`; every failure is mapped to an HTTP status in the
/// returned proxy response.
#[tracing::instrument(level = "info", skip(event), fields(request_id = %event.context.request_id))]
pub async fn function_handler(event: LambdaEvent<Value>) -> Result<Value, Error> {
    Ok(handle_with_config(AppConfig::from_env(), &event.payload).await)
}

/// Routes one event given the outcome of reading configuration.
///
/// Preflight and method checks never depend on configuration, so a bad
/// setting only fails POST requests.
pub async fn handle_with_config(config: Result<AppConfig, String>, payload: &Value) -> Value {
    if let Some(response) = route_method(payload) {
        return response;
    }

    let config = match config {
        Ok(c) => c,
        Err(e) => {
            error!("Config error: {}", e);
            return helpers::internal_error(&e);
        }
    };

    let generator = match ResponseGenerator::from_config(&config) {
        Ok(g) => g,
        Err(e) => {
            error!("Failed to initialize response generator: {}", e);
            return helpers::internal_error(&e.to_string());
        }
    };

    respond_post(&generator, payload).await
}

/// Routes one API Gateway proxy event and builds the proxy response.
pub async fn handle_request(generator: &ResponseGenerator, payload: &Value) -> Value {
    if let Some(response) = route_method(payload) {
        return response;
    }

    respond_post(generator, payload).await
}

async fn respond_post(generator: &ResponseGenerator, payload: &Value) -> Value {
    match handle_post(generator, payload).await {
        Ok(response) => response,
        Err(e) => {
            error!("Error handling chat request: {}", e);
            helpers::internal_error(&e.to_string())
        }
    }
}

/// Answers preflight and non-POST requests; `None` means carry on with POST.
fn route_method(payload: &Value) -> Option<Value> {
    let method = parsing::request_method(payload);
    info!(method = ?method, "API Lambda received request");

    match method.as_deref() {
        Some("OPTIONS") => Some(helpers::preflight()),
        Some("POST") => None,
        _ => Some(helpers::err_response(405, helpers::MSG_METHOD_NOT_ALLOWED)),
    }
}

async fn handle_post(generator: &ResponseGenerator, payload: &Value) -> Result<Value, ChatError> {
    let body = parsing::request_body(payload)?;
    let json_body = parsing::parse_json_body(&body)?;

    let message = match parsing::message_field(&json_body) {
        MessageField::Valid(m) => m,
        MessageField::InvalidFormat => {
            warn!("Rejected request: message missing or not a string");
            return Ok(helpers::err_response(400, helpers::MSG_INVALID_FORMAT));
        }
        MessageField::Empty => {
            warn!("Rejected request: message is blank");
            return Ok(helpers::err_response(400, helpers::MSG_EMPTY_MESSAGE));
        }
    };

    let (reply, source) = generator.generate_with_source(&message).await;
    info!(source = ?source, reply_chars = reply.chars().count(), "Reply ready");

    Ok(helpers::json_response(
        200,
        &ChatReply {
            success: true,
            user_message: message,
            ai_response: reply,
            timestamp: iso_timestamp(),
        },
    ))
}
