use thiserror::Error;

/// Error type shared by the host-facing crates.
///
/// The widget itself never fails: out-of-range input is clamped. Errors only
/// arise at the edges (reading config, starting the window).
#[derive(Debug, Error)]
pub enum SpanBarError {
    #[error("config error: {0}")]
    Config(String),

    #[error("window error: {0}")]
    Window(String),

    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

pub type Result<T, E = SpanBarError> = std::result::Result<T, E>;
