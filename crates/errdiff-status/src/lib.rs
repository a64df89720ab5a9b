//! # errdiff-status
//!
//! RPC-style status codes and the error type that carries them.
//!
//! ## Design Philosophy
//!
//! - **StatusCode**: a closed enumeration of outcome codes, `OK` meaning no error
//! - **Status**: an error that carries a code, a description and an optional source
//! - **StatusCode::of**: total code extraction, `Unknown` when an error carries no code
//!
//! ## Usage
//!
//! ```rust
//! use errdiff_status::{Status, StatusCode};
//!
//! let err = Status::not_found("user 42");
//! assert_eq!(err.to_string(), "rpc error: code = NotFound desc = user 42");
//! assert_eq!(StatusCode::of(Some(&err)), StatusCode::NotFound);
//!
//! let plain = std::fmt::Error;
//! assert_eq!(StatusCode::of(Some(&plain)), StatusCode::Unknown);
//! assert_eq!(StatusCode::of(None), StatusCode::Ok);
//! ```

mod chain;
mod code;
mod error;
mod status;

pub use chain::{Chain, chain};
pub use code::StatusCode;
pub use error::{Error, ErrorKind};
pub use status::Status;

/// Result type alias using the errdiff-status Error
pub type Result<T> = std::result::Result<T, Error>;
