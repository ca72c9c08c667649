// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    Io(String),
    Config(String),
    /// Request rejected or backend unreachable.
    Network(String),
    /// Target already gone server-side.
    NotFound(String),
    /// Backend answered with a non-success status or an explicit failure body.
    Http {
        status: u16,
        message: String,
    },
    Decode(String),
    Validation(ValidationError),
}

/// Rejections detected locally, before any request is issued.
/// Used to provide user-friendly, localized warnings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// The gallery would be left without images.
    LastImage,

    /// The image has no backend public identifier and cannot be targeted.
    MissingPublicId,

    /// The requested image index does not exist in the gallery.
    IndexOutOfRange { index: usize, len: usize },
}

impl ValidationError {
    /// Returns the i18n message key for this validation failure.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            ValidationError::LastImage => "notification-delete-last-image",
            ValidationError::MissingPublicId => "notification-delete-missing-public-id",
            ValidationError::IndexOutOfRange { .. } => "notification-delete-invalid-image",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::LastImage => write!(f, "Cannot delete the last image of a gallery"),
            ValidationError::MissingPublicId => write!(f, "Image has no public identifier"),
            ValidationError::IndexOutOfRange { index, len } => {
                write!(f, "Image index {} out of range (gallery has {})", index, len)
            }
        }
    }
}

impl Error {
    /// Returns the i18n message key used when this error is shown to the user.
    ///
    /// `NotFound` has no dedicated handling and is presented as a network failure.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Io(_) => "error-io",
            Error::Config(_) => "error-config",
            Error::Network(_) | Error::NotFound(_) => "error-network",
            Error::Http { .. } => "error-http",
            Error::Decode(_) => "error-decode",
            Error::Validation(err) => err.i18n_key(),
        }
    }

    /// Whether the error stems from local validation rather than I/O.
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation(_))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Network(e) => write!(f, "Network Error: {}", e),
            Error::NotFound(e) => write!(f, "Not Found: {}", e),
            Error::Http { status, message } => write!(f, "HTTP {}: {}", status, message),
            Error::Decode(e) => write!(f, "Decode Error: {}", e),
            Error::Validation(e) => write!(f, "Validation Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<ValidationError> for Error {
    fn from(err: ValidationError) -> Self {
        Error::Validation(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Decode(err.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) if status == reqwest::StatusCode::NOT_FOUND => {
                Error::NotFound(err.to_string())
            }
            Some(status) => Error::Http {
                status: status.as_u16(),
                message: err.to_string(),
            },
            None if err.is_decode() => Error::Decode(err.to_string()),
            None => Error::Network(err.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
