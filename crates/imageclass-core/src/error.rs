//! Error types for imageclass

use thiserror::Error;

/// Alert text for a file whose media type is not `image/*`.
pub const INVALID_FILE_MESSAGE: &str = "Please upload an image file.";

/// Alert text for any transport, HTTP or decoding failure.
pub const REQUEST_FAILED_MESSAGE: &str =
    "An error occurred during prediction. Please ensure the backend is running and the API URL is correct.";

/// Alert text for a file that could not be read from disk.
pub const UNREADABLE_FILE_MESSAGE: &str = "Could not read the selected file.";

/// Main error type for imageclass operations
#[derive(Error, Debug)]
pub enum ClassifyError {
    /// Selected file is not an image
    #[error("Not an image file: {name} ({media_type})")]
    InvalidFileType { name: String, media_type: String },

    /// Service answered with a non-2xx status
    #[error("HTTP error! status: {status}")]
    Http { status: u16, detail: Option<String> },

    /// Request could not be sent or the body could not be received
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Body was not the JSON shape the service promises
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// Service reported `success: false`
    #[error("Prediction failed: {}", .0.as_deref().unwrap_or("Unknown error"))]
    Service(Option<String>),

    /// Base URL or other startup setting is unusable
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using ClassifyError
pub type ClassifyResult<T> = Result<T, ClassifyError>;

impl From<serde_json::Error> for ClassifyError {
    fn from(err: serde_json::Error) -> Self {
        ClassifyError::MalformedResponse(err.to_string())
    }
}

/// What kind of problem an [`Alert`] reports
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlertKind {
    /// Rejected at selection time
    InvalidFile,
    /// File could not be read
    UnreadableFile,
    /// Service answered `success: false`
    ServiceRejected,
    /// Network, HTTP or decode failure
    RequestFailed,
}

/// User-visible message raised by a failed selection or prediction
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alert {
    pub kind: AlertKind,
    pub message: String,
}

impl Alert {
    pub fn new(kind: AlertKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Dialog title for this alert
    pub fn title(&self) -> &'static str {
        match self.kind {
            AlertKind::InvalidFile | AlertKind::UnreadableFile => "Invalid file",
            AlertKind::ServiceRejected | AlertKind::RequestFailed => "Prediction error",
        }
    }
}

impl ClassifyError {
    /// Maps the error onto the alert the user sees.
    ///
    /// Everything below the service's own `success: false` answer collapses
    /// into one generic message; the detail only goes to the log.
    pub fn alert(&self) -> Alert {
        match self {
            ClassifyError::InvalidFileType { .. } => {
                Alert::new(AlertKind::InvalidFile, INVALID_FILE_MESSAGE)
            }
            ClassifyError::Io(_) => Alert::new(AlertKind::UnreadableFile, UNREADABLE_FILE_MESSAGE),
            ClassifyError::Service(_) => Alert::new(AlertKind::ServiceRejected, self.to_string()),
            ClassifyError::Http { .. }
            | ClassifyError::Network(_)
            | ClassifyError::MalformedResponse(_)
            | ClassifyError::InvalidConfig(_) => {
                Alert::new(AlertKind::RequestFailed, REQUEST_FAILED_MESSAGE)
            }
        }
    }
}
