#[tokio::main]
async fn main() {
    // Logs go to stderr so stdout stays a clean, scriptable surface.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = awtrix3_client::run_cli().await {
        eprintln!("Error: {e}");
        std::process::exit(e.exit_code());
    }
}
