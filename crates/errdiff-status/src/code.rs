//! Status codes for RPC-style outcomes

use std::error::Error as StdError;

use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString, FromRepr, IntoStaticStr};

use crate::{Error, ErrorKind, Status, chain};

/// The outcome code attached to a [`Status`].
///
/// The set is closed. `Ok` is the reserved "no error" member and `Unknown` is
/// what an error without an explicit code maps to. Names render exactly as the
/// wire names (`OK`, `InvalidArgument`, ...).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Default,
    Display,
    EnumString,
    EnumIter,
    FromRepr,
    IntoStaticStr,
)]
#[repr(i32)]
pub enum StatusCode {
    /// Not an error; returned on success.
    #[default]
    #[strum(serialize = "OK")]
    Ok = 0,

    /// The operation was cancelled, typically by the caller.
    Canceled = 1,

    /// Unknown error, also used for errors that carry no code.
    Unknown = 2,

    /// The client specified an invalid argument.
    InvalidArgument = 3,

    /// The deadline expired before the operation could complete.
    DeadlineExceeded = 4,

    /// Some requested entity was not found.
    NotFound = 5,

    /// The entity a client attempted to create already exists.
    AlreadyExists = 6,

    /// The caller does not have permission to execute the operation.
    PermissionDenied = 7,

    /// Some resource has been exhausted.
    ResourceExhausted = 8,

    /// The system is not in a state required for the operation.
    FailedPrecondition = 9,

    /// The operation was aborted, typically due to a concurrency issue.
    Aborted = 10,

    /// The operation was attempted past the valid range.
    OutOfRange = 11,

    /// The operation is not implemented or not supported.
    Unimplemented = 12,

    /// Internal invariants were broken.
    Internal = 13,

    /// The service is currently unavailable.
    Unavailable = 14,

    /// Unrecoverable data loss or corruption.
    DataLoss = 15,

    /// The request does not have valid authentication credentials.
    Unauthenticated = 16,
}

impl StatusCode {
    /// Returns the code name as a static string
    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }

    /// Numeric value of the code.
    pub fn as_i32(&self) -> i32 {
        *self as i32
    }

    /// Look up a code by its numeric value.
    pub fn from_i32(value: i32) -> Option<Self> {
        Self::from_repr(value)
    }

    /// True only for `OK`.
    pub fn is_ok(&self) -> bool {
        matches!(self, StatusCode::Ok)
    }

    /// Every code, in numeric order.
    pub fn all() -> impl Iterator<Item = StatusCode> {
        <Self as IntoEnumIterator>::iter()
    }

    /// Extract the code carried by `err`.
    ///
    /// `None` maps to `OK`. Otherwise the cause chain is searched for the first
    /// [`Status`], and an error that carries none maps to `Unknown`.
    pub fn of(err: Option<&(dyn StdError + 'static)>) -> StatusCode {
        let Some(err) = err else {
            return StatusCode::Ok;
        };

        chain(err)
            .find_map(|link| link.downcast_ref::<Status>())
            .map(Status::code)
            .unwrap_or_else(|| {
                tracing::trace!("no status in chain of '{}', using Unknown", err);
                StatusCode::Unknown
            })
    }

    /// Parse a code from its canonical name.
    pub fn parse(name: &str) -> crate::Result<Self> {
        name.parse::<StatusCode>().map_err(|_| {
            Error::new(ErrorKind::UnknownName, format!("'{}' is not a status code", name))
                .with_context("name", name)
        })
    }
}

impl From<StatusCode> for i32 {
    fn from(code: StatusCode) -> Self {
        code.as_i32()
    }
}

impl TryFrom<i32> for StatusCode {
    type Error = Error;

    fn try_from(value: i32) -> Result<Self, Error> {
        Self::from_i32(value).ok_or_else(|| {
            Error::new(
                ErrorKind::OutOfRange,
                format!("{} is not a status code", value),
            )
            .with_context("value", value.to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt;

    #[derive(Debug)]
    struct Plain;

    impl fmt::Display for Plain {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "plain")
        }
    }

    impl StdError for Plain {}

    #[test]
    fn test_code_display() {
        assert_eq!(StatusCode::Ok.to_string(), "OK");
        assert_eq!(StatusCode::InvalidArgument.to_string(), "InvalidArgument");
        assert_eq!(StatusCode::Unimplemented.as_str(), "Unimplemented");
        assert_eq!(StatusCode::Canceled.as_str(), "Canceled");
    }

    #[test]
    fn test_parse_round_trips_names() {
        for code in StatusCode::all() {
            assert_eq!(StatusCode::parse(code.as_str()).unwrap(), code);
        }
        assert_eq!("OK".parse::<StatusCode>().unwrap(), StatusCode::Ok);
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        let err = StatusCode::parse("Ok").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownName);
        assert!(StatusCode::parse("notfound").is_err());
    }

    #[test]
    fn test_numeric_values() {
        assert_eq!(StatusCode::Ok.as_i32(), 0);
        assert_eq!(StatusCode::Unimplemented.as_i32(), 12);
        assert_eq!(i32::from(StatusCode::Unauthenticated), 16);
        assert_eq!(StatusCode::from_i32(3), Some(StatusCode::InvalidArgument));
        assert_eq!(StatusCode::from_i32(17), None);
        assert_eq!(StatusCode::from_i32(-1), None);
    }

    #[test]
    fn test_try_from_out_of_range() {
        assert_eq!(StatusCode::try_from(14i32).unwrap(), StatusCode::Unavailable);

        let err = StatusCode::try_from(42i32).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::OutOfRange);
        assert_eq!(err.context(), &[("value", "42".to_string())]);
    }

    #[test]
    fn test_all_in_numeric_order() {
        let values: Vec<i32> = StatusCode::all().map(|c| c.as_i32()).collect();
        assert_eq!(values, (0..=16).collect::<Vec<_>>());
    }

    #[test]
    fn test_is_ok() {
        assert!(StatusCode::Ok.is_ok());
        assert!(StatusCode::default().is_ok());
        assert!(!StatusCode::Unknown.is_ok());
    }

    #[test]
    fn test_of_none_is_ok() {
        assert_eq!(StatusCode::of(None), StatusCode::Ok);
    }

    #[test]
    fn test_of_plain_error_is_unknown() {
        assert_eq!(StatusCode::of(Some(&Plain)), StatusCode::Unknown);
    }

    #[test]
    fn test_of_status() {
        let err = Status::unimplemented("");
        assert_eq!(StatusCode::of(Some(&err)), StatusCode::Unimplemented);
    }

    #[test]
    fn test_of_wrapped_status() {
        let err = std::io::Error::other(Status::unavailable("backend down"));
        assert_eq!(StatusCode::of(Some(&err)), StatusCode::Unavailable);

        let err = Status::internal("outer").with_source(Status::not_found("inner"));
        assert_eq!(StatusCode::of(Some(&err)), StatusCode::Internal);
    }
}
