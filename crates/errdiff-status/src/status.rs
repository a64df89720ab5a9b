//! The Status error type.

use std::error::Error as StdError;
use std::fmt;

use crate::{StatusCode, chain};

/// An error carrying a [`StatusCode`] and a description.
///
/// Renders as `rpc error: code = <Name> desc = <description>`.
#[derive(Debug)]
pub struct Status {
    code: StatusCode,
    message: String,
    source: Option<Box<dyn StdError + Send + Sync + 'static>>,
}

impl Status {
    /// Create a new status with the given code and description.
    pub fn new(code: StatusCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Get the status code.
    pub fn code(&self) -> StatusCode {
        self.code
    }

    /// Get the description
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the source error (if any).
    pub fn source_ref(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        self.source.as_ref().map(|e| e.as_ref())
    }

    /// Set the source error.
    ///
    /// # Panics (debug only)
    /// Panics in debug mode if source was already set.
    pub fn with_source<E>(mut self, source: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        debug_assert!(self.source.is_none(), "source error already set");
        self.source = Some(Box::new(source));
        self
    }

    /// Recover the status carried somewhere in `err`'s cause chain.
    ///
    /// Errors without one become `Unknown` with the rendered message as
    /// description. The source is not carried over.
    pub fn from_error(err: &(dyn StdError + 'static)) -> Self {
        match chain(err).find_map(|link| link.downcast_ref::<Status>()) {
            Some(status) => Status::new(status.code, status.message.clone()),
            None => Status::new(StatusCode::Unknown, err.to_string()),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rpc error: code = {} desc = {}", self.code, self.message)
    }
}

impl StdError for Status {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn StdError + 'static))
    }
}

impl From<StatusCode> for Status {
    fn from(code: StatusCode) -> Self {
        Status::new(code, "")
    }
}

impl Status {
    /// Create a Canceled status
    pub fn canceled(message: impl Into<String>) -> Self {
        Self::new(StatusCode::Canceled, message)
    }

    /// Create an Unknown status
    pub fn unknown(message: impl Into<String>) -> Self {
        Self::new(StatusCode::Unknown, message)
    }

    /// Create an InvalidArgument status
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(StatusCode::InvalidArgument, message)
    }

    /// Create a DeadlineExceeded status
    pub fn deadline_exceeded(message: impl Into<String>) -> Self {
        Self::new(StatusCode::DeadlineExceeded, message)
    }

    /// Create a NotFound status
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NotFound, message)
    }

    /// Create an AlreadyExists status
    pub fn already_exists(message: impl Into<String>) -> Self {
        Self::new(StatusCode::AlreadyExists, message)
    }

    /// Create a PermissionDenied status
    pub fn permission_denied(message: impl Into<String>) -> Self {
        Self::new(StatusCode::PermissionDenied, message)
    }

    /// Create a ResourceExhausted status
    pub fn resource_exhausted(message: impl Into<String>) -> Self {
        Self::new(StatusCode::ResourceExhausted, message)
    }

    /// Create a FailedPrecondition status
    pub fn failed_precondition(message: impl Into<String>) -> Self {
        Self::new(StatusCode::FailedPrecondition, message)
    }

    /// Create an Aborted status
    pub fn aborted(message: impl Into<String>) -> Self {
        Self::new(StatusCode::Aborted, message)
    }

    /// Create an OutOfRange status
    pub fn out_of_range(message: impl Into<String>) -> Self {
        Self::new(StatusCode::OutOfRange, message)
    }

    /// Create an Unimplemented status
    pub fn unimplemented(message: impl Into<String>) -> Self {
        Self::new(StatusCode::Unimplemented, message)
    }

    /// Create an Internal status
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::Internal, message)
    }

    /// Create an Unavailable status
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::new(StatusCode::Unavailable, message)
    }

    /// Create a DataLoss status
    pub fn data_loss(message: impl Into<String>) -> Self {
        Self::new(StatusCode::DataLoss, message)
    }

    /// Create an Unauthenticated status
    pub fn unauthenticated(message: impl Into<String>) -> Self {
        Self::new(StatusCode::Unauthenticated, message)
    }
}
