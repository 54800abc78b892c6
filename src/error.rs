use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid store URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("store rejected insert ({status}): {message}")]
    Rejected {
        status: u16,
        code: Option<String>,
        message: String,
    },
}

#[derive(Debug, Error)]
pub enum ContactError {
    #[error("Please fill in all fields")]
    MissingFields,

    #[error("unknown form field: {0}")]
    UnknownField(String),

    #[error(transparent)]
    Remote(#[from] StoreError),
}

impl ContactError {
    /// Text shown next to the form. Remote detail stays in the logs.
    pub fn user_message(&self) -> String {
        match self {
            ContactError::MissingFields | ContactError::UnknownField(_) => self.to_string(),
            ContactError::Remote(_) => "Failed to send message. Please try again.".to_string(),
        }
    }
}
