//! Domain error types.

/// Top-level error type for khata.
#[derive(Debug, thiserror::Error)]
pub enum KhataError {
    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("missing config key [{section}] {key}")]
    ConfigMissing { section: String, key: String },

    #[error("invalid config value [{section}] {key}: {reason}")]
    ConfigInvalid {
        section: String,
        key: String,
        reason: String,
    },

    #[error("data error: {reason}")]
    Data { reason: String },

    #[error("no NAV history for scheme {scheme}")]
    NoNavHistory { scheme: String },

    #[error(
        "insufficient NAV history for {scheme}: have {available} periods, requested {requested}"
    )]
    InsufficientHistory {
        scheme: String,
        available: usize,
        requested: usize,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<&KhataError> for std::process::ExitCode {
    fn from(err: &KhataError) -> Self {
        let code: u8 = match err {
            KhataError::Io(_) => 1,
            KhataError::ConfigParse { .. }
            | KhataError::ConfigMissing { .. }
            | KhataError::ConfigInvalid { .. } => 2,
            KhataError::Data { .. } => 3,
            KhataError::NoNavHistory { .. } | KhataError::InsufficientHistory { .. } => 5,
        };
        std::process::ExitCode::from(code)
    }
}
