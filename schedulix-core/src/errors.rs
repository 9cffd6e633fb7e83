//! # Errors
//!
//! Structured errors for the Schedulix client core.
//! Core goals:
//! - consistent status codes + error names across every crate in the
//!   workspace
//! - can be carried through `anyhow::Error` (slices and the client facade
//!   pass errors across crate seams without losing structure)
//! - transport-agnostic (the facade decides how a response maps in,
//!   the UI decides how an error renders out)

use std::collections::BTreeMap;
use std::fmt;

use anyhow::Error as AnyError;

/// A convenience result type for Schedulix core APIs.
pub type CoreResult<T> = std::result::Result<T, AnyError>;

/// Error classes the client distinguishes, keyed by the HTTP status the
/// REST boundary reports them with. Transport failures that never produced
/// a status are folded into `Timeout` and `Unavailable`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    BadRequest,       // 400
    NotAuthenticated, // 401
    Forbidden,        // 403
    NotFound,         // 404
    Timeout,          // 408
    Conflict,         // 409
    Unprocessable,    // 422
    TooManyRequests,  // 429
    GeneralError,     // 500
    BadGateway,       // 502
    Unavailable,      // 503
}

impl ErrorKind {
    pub fn status_code(&self) -> u16 {
        match self {
            ErrorKind::BadRequest => 400,
            ErrorKind::NotAuthenticated => 401,
            ErrorKind::Forbidden => 403,
            ErrorKind::NotFound => 404,
            ErrorKind::Timeout => 408,
            ErrorKind::Conflict => 409,
            ErrorKind::Unprocessable => 422,
            ErrorKind::TooManyRequests => 429,
            ErrorKind::GeneralError => 500,
            ErrorKind::BadGateway => 502,
            ErrorKind::Unavailable => 503,
        }
    }

    /// Error `name` (e.g. "NotFound")
    pub fn name(&self) -> &'static str {
        match self {
            ErrorKind::BadRequest => "BadRequest",
            ErrorKind::NotAuthenticated => "NotAuthenticated",
            ErrorKind::Forbidden => "Forbidden",
            ErrorKind::NotFound => "NotFound",
            ErrorKind::Timeout => "Timeout",
            ErrorKind::Conflict => "Conflict",
            ErrorKind::Unprocessable => "Unprocessable",
            ErrorKind::TooManyRequests => "TooManyRequests",
            ErrorKind::GeneralError => "GeneralError",
            ErrorKind::BadGateway => "BadGateway",
            ErrorKind::Unavailable => "Unavailable",
        }
    }

    /// Map a response status to a kind. Unknown 4xx degrade to
    /// `BadRequest`, everything else to `GeneralError`.
    pub fn from_status(status: u16) -> Self {
        match status {
            400 => ErrorKind::BadRequest,
            401 => ErrorKind::NotAuthenticated,
            403 => ErrorKind::Forbidden,
            404 => ErrorKind::NotFound,
            408 => ErrorKind::Timeout,
            409 => ErrorKind::Conflict,
            422 => ErrorKind::Unprocessable,
            429 => ErrorKind::TooManyRequests,
            502 => ErrorKind::BadGateway,
            503 => ErrorKind::Unavailable,
            s if (400..500).contains(&s) => ErrorKind::BadRequest,
            _ => ErrorKind::GeneralError,
        }
    }
}

/// A structured Schedulix error that can live inside `anyhow::Error`.
///
/// Fields:
/// - kind (status class)
/// - message (human-readable, banner-friendly)
/// - field_errors (validation failures keyed by field name, for inline
///   form display)
/// - source (underlying transport error, never shown to users)
#[derive(Debug)]
pub struct SchedulixError {
    pub kind: ErrorKind,
    pub message: String,
    pub field_errors: Option<BTreeMap<String, String>>,
    pub source: Option<AnyError>,
}

impl SchedulixError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            field_errors: None,
            source: None,
        }
    }

    pub fn with_field_errors(mut self, errors: BTreeMap<String, String>) -> Self {
        self.field_errors = Some(errors);
        self
    }

    pub fn with_source(mut self, source: AnyError) -> Self {
        self.source = Some(source);
        self
    }

    pub fn code(&self) -> u16 {
        self.kind.status_code()
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    /// Validation failures keyed by field, if the server sent any.
    pub fn field_errors(&self) -> Option<&BTreeMap<String, String>> {
        self.field_errors.as_ref()
    }

    /// Convert into `anyhow::Error` so it flows across crate seams.
    pub fn into_anyhow(self) -> AnyError {
        AnyError::new(self)
    }

    /// Downcast an `anyhow::Error` to a `SchedulixError` if possible.
    pub fn from_anyhow(err: &AnyError) -> Option<&SchedulixError> {
        err.downcast_ref::<SchedulixError>()
    }

    /// Turn any error into a SchedulixError:
    /// - if it's already one, keep it (lossless)
    /// - otherwise wrap as GeneralError
    pub fn normalize(err: AnyError) -> SchedulixError {
        match err.downcast::<SchedulixError>() {
            Ok(e) => e,
            Err(other) => {
                SchedulixError::new(ErrorKind::GeneralError, other.to_string()).with_source(other)
            }
        }
    }

    /// The message a slice should surface, falling back to `fallback`
    /// when the error carries no usable text.
    pub fn display_message(err: &AnyError, fallback: &str) -> String {
        match Self::from_anyhow(err) {
            Some(e) if !e.message.is_empty() => e.message.clone(),
            Some(_) => fallback.to_string(),
            None => {
                let s = err.to_string();
                if s.is_empty() {
                    fallback.to_string()
                } else {
                    s
                }
            }
        }
    }

    // ---- Constructors ----

    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::BadRequest, msg)
    }
    pub fn not_authenticated(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotAuthenticated, msg)
    }
    pub fn forbidden(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::Forbidden, msg)
    }
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, msg)
    }
    pub fn timeout(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::Timeout, msg)
    }
    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::Conflict, msg)
    }
    pub fn unprocessable(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unprocessable, msg)
    }
    pub fn general_error(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::GeneralError, msg)
    }
    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unavailable, msg)
    }
}

impl fmt::Display for SchedulixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}): {}", self.name(), self.code(), self.message)
    }
}

impl std::error::Error for SchedulixError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping_round_trips_known_codes() {
        for kind in [
            ErrorKind::BadRequest,
            ErrorKind::NotAuthenticated,
            ErrorKind::Forbidden,
            ErrorKind::NotFound,
            ErrorKind::Timeout,
            ErrorKind::Conflict,
            ErrorKind::Unprocessable,
            ErrorKind::TooManyRequests,
            ErrorKind::BadGateway,
            ErrorKind::Unavailable,
        ] {
            assert_eq!(ErrorKind::from_status(kind.status_code()), kind);
        }
    }

    #[test]
    fn unknown_client_status_degrades_to_bad_request() {
        assert_eq!(ErrorKind::from_status(418), ErrorKind::BadRequest);
        assert_eq!(ErrorKind::from_status(500), ErrorKind::GeneralError);
        assert_eq!(ErrorKind::from_status(599), ErrorKind::GeneralError);
    }

    #[test]
    fn normalize_preserves_structured_errors() {
        let err = SchedulixError::unprocessable("Validation failed").into_anyhow();
        let back = SchedulixError::normalize(err);
        assert_eq!(back.kind, ErrorKind::Unprocessable);
        assert_eq!(back.message, "Validation failed");
    }

    #[test]
    fn display_message_prefers_server_text_over_fallback() {
        let err = SchedulixError::not_found("Patient not found").into_anyhow();
        assert_eq!(
            SchedulixError::display_message(&err, "Failed to fetch patient"),
            "Patient not found"
        );

        let bare = anyhow::anyhow!("connection reset");
        assert_eq!(
            SchedulixError::display_message(&bare, "Failed to fetch patient"),
            "connection reset"
        );
    }
}
