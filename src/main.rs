//! Payroll Engine HTTP server.
//!
//! Environment:
//! - `PAYROLL_CONFIG_DIR`: directory holding `policy.yaml` (built-in policy when unset)
//! - `PAYROLL_BIND_ADDR`: listen address, `127.0.0.1:3000` by default
//! - `RUST_LOG`: log filter, `info,payroll_engine=debug` by default

use std::env;

use tokio::{net::TcpListener, signal};
use tracing::info;
use tracing_subscriber::EnvFilter;

use payroll_engine::api::{AppState, create_router};
use payroll_engine::config::ConfigLoader;
use payroll_engine::ledger::PayrollLedger;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,payroll_engine=debug")),
        )
        .init();

    let loader = match env::var("PAYROLL_CONFIG_DIR") {
        Ok(dir) => {
            info!(config_dir = %dir, "Loading pay policy");
            ConfigLoader::load(&dir)?
        }
        Err(_) => {
            info!("PAYROLL_CONFIG_DIR not set, using built-in pay policy");
            ConfigLoader::default()
        }
    };

    let state = AppState::new(PayrollLedger::with_policy(loader.into_policy()));
    let router = create_router(state);

    let bind_addr = env::var("PAYROLL_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
    let listener = TcpListener::bind(&bind_addr).await?;
    info!(address = %bind_addr, "Payroll engine listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            // A failed signal handler just means we run until killed
            let _ = signal::ctrl_c().await;
            info!("Shutdown signal received");
        })
        .await?;

    info!("Payroll engine stopped");
    Ok(())
}
