use thiserror::Error;

#[derive(Error, Debug)]
pub enum CtpError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Whitelist {file}, line {line}: {reason}")]
    Whitelist {
        file: String,
        line: usize,
        reason: String,
    },

    #[error("Whitelist {file}: {source}")]
    WhitelistRead {
        file: String,
        source: std::io::Error,
    },

    #[error("{institution} row {line}: expected at least {expected} fields, found {found}")]
    ShortRow {
        institution: &'static str,
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("{institution} row {line}: invalid amount '{value}'")]
    Amount {
        institution: &'static str,
        line: u64,
        value: String,
    },

    #[error("Settings error: {0}")]
    Settings(String),

    #[error("Could not determine the desktop directory")]
    NoDesktop,

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, CtpError>;
