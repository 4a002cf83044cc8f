mod cli;
mod demo;
mod infra;
mod routes;
mod server;

use crypto_selector::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
