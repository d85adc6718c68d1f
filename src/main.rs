use clap::Parser;
use daybook::cli::{output, run, Cli};
use tokio::signal;
use tracing::info;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    let _ = rustls::crypto::ring::default_provider().install_default();

    let cli = Cli::parse();

    tokio::select! {
        result = run::execute(&cli) => {
            if let Err(e) = result {
                output::error(&e.to_string());
                std::process::exit(1);
            }
        }
        _ = signal::ctrl_c() => {
            info!("Interrupted");
            std::process::exit(130);
        }
    }
}
