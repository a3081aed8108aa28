/// Chatdesk - a serverless customer-service chat endpoint.
///
/// This crate implements a single AWS Lambda that accepts a chat message over
/// HTTP and answers it:
/// 1. With Google Gemini, when a `GEMINI_API_KEY` is configured
/// 2. With a fixed keyword-matched reply otherwise, or whenever the remote
///    call fails or times out
///
/// # Architecture
///
/// The system uses:
/// - AWS Lambda (API Gateway proxy events) for serverless execution
/// - reqwest for the Gemini `generateContent` call
/// - Tokio for the async runtime and the remote-call timeout
///
/// # Example
///
/// ```no_run
/// use chatdesk::ai::ResponseGenerator;
/// use chatdesk::core::config::AppConfig;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     chatdesk::setup_logging();
///
///     let config = AppConfig {
///         gemini_api_key: None,
///         gemini_model: None,
///         gemini_api_base: None,
///         remote_timeout_secs: 25,
///     };
///
///     let generator = ResponseGenerator::from_config(&config)?;
///     let reply = generator.generate("hello").await;
///     println!("{reply}");
///
///     Ok(())
/// }
/// ```
pub mod ai;
pub mod api;
pub mod core;
pub mod errors;

pub use errors::ChatError;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// This function sets up tracing-subscriber with a JSON formatter suitable for
/// `CloudWatch` Logs integration. It should be called once at process start.
/// Calling it again is a no-op.
///
/// # Example
///
/// ```
/// chatdesk::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    let _ = tracing_subscriber::registry().with(fmt_layer).try_init();
}
