//! spanbar: column-spanning bars with centered labels, drawn with Iced.
//!
//! Run with:  `RUST_LOG=info spanbar`

use anyhow::Result;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Structured logging; RUST_LOG controls verbosity (default: info).
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("spanbar v{} starting", env!("CARGO_PKG_VERSION"));

    spanbar_window::run().map_err(Into::into)
}
