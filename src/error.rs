use thiserror::Error;

/// Input errors. Both are fatal to a run; the binary reports them with the
/// same generic message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScaleError {
    #[error("invalid root {0:?}")]
    InvalidRoot(String),

    #[error("invalid mode {0:?}")]
    InvalidMode(String),
}

pub type Result<T> = std::result::Result<T, ScaleError>;
