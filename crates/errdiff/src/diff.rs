//! The three error comparisons.
//!
//! Each returns `""` when `got` matches and a one-line description otherwise.
//! None of them fail: a mismatch is only ever reported through the string.

use std::error::Error as StdError;
use std::fmt;

use errdiff_status::StatusCode;

use crate::chain::contains;

/// Describe the difference between the `got` error and the `want` error.
///
/// Matches when both are absent, when the rendered messages are identical, or
/// when `want` appears in `got`'s cause chain.
#[tracing::instrument(skip_all)]
pub fn check(
    got: Option<&(dyn StdError + 'static)>,
    want: Option<&(dyn StdError + 'static)>,
) -> String {
    match (got, want) {
        (None, None) => String::new(),
        (Some(got), None) => mismatch(format!("got err={}, want err=nil", got)),
        (None, Some(want)) => mismatch(format!("got err=nil, want err={}", want)),
        (Some(got), Some(want)) => {
            if got.to_string() == want.to_string() || contains(got, want) {
                return String::new();
            }
            mismatch(format!("got err={}, want err={}", got, want))
        }
    }
}

/// Describe the difference between the `got` error's message and `want`.
///
/// Exact and case-sensitive. An empty `want` means no error is expected.
#[tracing::instrument(skip_all)]
pub fn text(got: Option<&(dyn StdError + 'static)>, want: &str) -> String {
    match got {
        None if want.is_empty() => String::new(),
        Some(got) if want.is_empty() => mismatch(format!("got err={}, want err=nil", got)),
        None => mismatch(format!("got err=nil, want err={}", want)),
        Some(got) => {
            let rendered = got.to_string();
            if rendered == want {
                return String::new();
            }
            mismatch(format!("got err={}, want err={}", rendered, want))
        }
    }
}

/// Describe the difference between the `got` error's status code and `want`.
///
/// `StatusCode::Ok` means no error is expected. Errors that carry no status
/// count as `Unknown`.
#[tracing::instrument(skip_all)]
pub fn code(got: Option<&(dyn StdError + 'static)>, want: StatusCode) -> String {
    match got {
        None if want.is_ok() => String::new(),
        None => mismatch(format!("got err=nil, want code={}", want)),
        Some(err) if want.is_ok() => mismatch(format!("got err={}, want code={}", err, want)),
        Some(err) => {
            let found = StatusCode::of(got);
            if found == want {
                return String::new();
            }
            tracing::trace!("code mismatch: found {} want {}", found, want);
            mismatch(format!("got err={}, want code={}", err, want))
        }
    }
}

fn mismatch(diff: String) -> String {
    tracing::trace!(diff = %diff, "errors differ");
    diff
}

/// Owned outcome of a comparison.
///
/// A thin wrapper over the diff string for callers who would rather ask
/// `is_match()` than compare against `""`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Diff(String);

impl Diff {
    /// Compare two errors, see [`check`].
    pub fn check(
        got: Option<&(dyn StdError + 'static)>,
        want: Option<&(dyn StdError + 'static)>,
    ) -> Self {
        Self(check(got, want))
    }

    /// Compare an error's message, see [`text`].
    pub fn text(got: Option<&(dyn StdError + 'static)>, want: &str) -> Self {
        Self(text(got, want))
    }

    /// Compare an error's status code, see [`code`].
    pub fn code(got: Option<&(dyn StdError + 'static)>, want: StatusCode) -> Self {
        Self(code(got, want))
    }

    pub fn is_match(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Diff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Diff {
    fn from(diff: String) -> Self {
        Self(diff)
    }
}

impl From<Diff> for String {
    fn from(diff: Diff) -> Self {
        diff.0
    }
}

impl PartialEq<str> for Diff {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Diff {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
