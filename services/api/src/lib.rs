mod cli;
mod demo;
mod infra;
mod report;
mod routes;
mod server;

use sme_credit::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
