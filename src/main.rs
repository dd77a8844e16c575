//! Food delivery app - Entry Point
//!
//! Runs the login and menu flows as a terminal shell over stdin/stdout.

use log::{error, info};
use std::process::ExitCode;
use tokio::io::{BufReader, stdin, stdout};

use food_delivery::error::AppError;
use food_delivery::session::JsonFileStore;
use food_delivery::{App, AppConfig, shell};

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize the logger (env_logger picks up RUST_LOG environment variable)
    env_logger::init();

    match launch().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

async fn launch() -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let store = JsonFileStore::new(config.session_store_path());
    info!("Session store: {}", store.path().display());

    let mut app = App::new(config, store);
    info!("Launching app...");

    shell::run(&mut app, BufReader::new(stdin()), stdout()).await
}
