use thiserror::Error;

#[derive(Debug, Error)]
pub enum FormEchoError {
    #[error("VALIDATION ERROR: {code} - {message}")]
    Validation { code: &'static str, message: String },

    #[error("CONFIG ERROR: {code} - {message}")]
    Config { code: &'static str, message: String },

    #[error("IO ERROR: {0}")]
    Io(#[from] std::io::Error),
}

impl FormEchoError {
    /// Error code for validation and configuration failures.
    pub fn code(&self) -> Option<&'static str> {
        match self {
            FormEchoError::Validation { code, .. } | FormEchoError::Config { code, .. } => {
                Some(code)
            }
            FormEchoError::Io(_) => None,
        }
    }
}
