mod config;
mod error;
mod greeting;

use crate::config::Config;
use crate::greeting::hello;
use axum::Router;
use lambda_http::{run, tracing, Error};

// Every path and method gets the greeting; API Gateway keeps the stage
// name in the path.
fn app() -> Router {
    Router::new().fallback(hello)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = Config::from_env()?;

    tracing_subscriber::fmt()
        .json()
        .with_max_level(config.log_level)
        .with_current_span(false)
        .with_ansi(false)
        .without_time()
        .with_target(true)
        .init();

    tracing::debug!(?config, "starting hello-lambda");

    run(app()).await
}
