// === Core modules ===
pub mod api;
pub mod config;
pub mod devices;
pub mod display;
pub mod error;
pub mod util;

// === CLI entrypoint ===
pub mod cli;

/// Entrypoint used by `main.rs` and tests to run the full CLI.
pub async fn run_cli() -> error::Result<()> {
    cli::cli().await
}
