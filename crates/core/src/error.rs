use thiserror::Error;

/// Top-level error type used across the entire SDK.
///
/// The symbol update path never produces one of these — bad data degrades
/// to the "no content" state instead. Errors are reserved for the fallible
/// edges: configuration, registry wiring, payload files, snapshot output.
#[derive(Debug, Error)]
pub enum VizletError {
    #[error("config error: {0}")]
    Config(String),

    #[error("registry error: {0}")]
    Registry(String),

    #[error("data error: {0}")]
    Data(String),

    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

pub type Result<T, E = VizletError> = std::result::Result<T, E>;
