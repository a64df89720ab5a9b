//! # errdiff
//!
//! Compare errors in tests, by error, by message or by status code.
//!
//! Similar in spirit to a value diff, but for errors in table-driven tests.
//! Every comparison returns an empty string when the error matches and a
//! readable description of the mismatch otherwise.
//!
//! - [`check`]: the error is expected to be `want` or to wrap it
//! - [`text`]: the rendered message must equal `want` exactly
//! - [`code`]: the carried [`StatusCode`] must equal `want` (`OK` means no error)
//!
//! ## Usage
//!
//! ```rust
//! use std::io;
//! use errdiff::{ResultExt, Status, StatusCode};
//!
//! fn open(name: &str) -> Result<(), io::Error> {
//!     Err(io::Error::new(io::ErrorKind::NotFound, format!("{name}: not found")))
//! }
//!
//! let want = io::Error::new(io::ErrorKind::NotFound, "a.txt: not found");
//! let got = open("a.txt");
//! assert_eq!(errdiff::check(got.err_ref(), Some(&want)), "");
//! assert_eq!(errdiff::text(got.err_ref(), "a.txt: not found"), "");
//!
//! let got = open("b.txt");
//! assert_eq!(
//!     errdiff::check(got.err_ref(), None),
//!     "got err=b.txt: not found, want err=nil"
//! );
//!
//! let rpc = Status::unimplemented("");
//! assert_eq!(errdiff::code(Some(&rpc), StatusCode::Unimplemented), "");
//! ```

pub mod chain;
mod diff;
mod macros;
mod result;

pub use chain::{contains, contains_as, find};
pub use diff::{Diff, check, code, text};
pub use errdiff_status::{Chain, Status, StatusCode};
pub use result::{ResultExt, err_of};
