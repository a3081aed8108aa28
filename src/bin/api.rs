pub use chatdesk::api::handler;

#[tokio::main]
async fn main() -> Result<(), lambda_runtime::Error> {
    chatdesk::setup_logging();
    lambda_runtime::run(lambda_runtime::service_fn(handler)).await
}
