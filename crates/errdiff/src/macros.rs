//! Assertion macros over the comparisons.

/// Assert that `got` matches `want` as per [`check`](crate::check).
///
/// ```rust
/// let err = std::fmt::Error;
/// errdiff::assert_check!(Some(&err), Some(&std::fmt::Error));
/// errdiff::assert_check!(None, None, "case {}", 3);
/// ```
#[macro_export]
macro_rules! assert_check {
    ($got:expr, $want:expr $(,)?) => {{
        let diff = $crate::check($got, $want);
        if !diff.is_empty() {
            panic!("{} {}", stringify!($got), diff);
        }
    }};
    ($got:expr, $want:expr, $($arg:tt)+) => {{
        let diff = $crate::check($got, $want);
        if !diff.is_empty() {
            panic!("{}: {}", format_args!($($arg)+), diff);
        }
    }};
}

/// Assert that `got`'s message matches `want` as per [`text`](crate::text).
#[macro_export]
macro_rules! assert_text {
    ($got:expr, $want:expr $(,)?) => {{
        let diff = $crate::text($got, $want);
        if !diff.is_empty() {
            panic!("{} {}", stringify!($got), diff);
        }
    }};
    ($got:expr, $want:expr, $($arg:tt)+) => {{
        let diff = $crate::text($got, $want);
        if !diff.is_empty() {
            panic!("{}: {}", format_args!($($arg)+), diff);
        }
    }};
}

/// Assert that `got`'s status code matches `want` as per [`code`](crate::code).
#[macro_export]
macro_rules! assert_code {
    ($got:expr, $want:expr $(,)?) => {{
        let diff = $crate::code($got, $want);
        if !diff.is_empty() {
            panic!("{} {}", stringify!($got), diff);
        }
    }};
    ($got:expr, $want:expr, $($arg:tt)+) => {{
        let diff = $crate::code($got, $want);
        if !diff.is_empty() {
            panic!("{}: {}", format_args!($($arg)+), diff);
        }
    }};
}

#[cfg(test)]
mod tests {
    use crate::{Status, StatusCode};

    #[test]
    fn test_assert_macros_pass() {
        let err = Status::not_found("key");
        assert_check!(Some(&err), Some(&Status::not_found("key")));
        assert_text!(Some(&err), "rpc error: code = NotFound desc = key");
        assert_code!(Some(&err), StatusCode::NotFound, "lookup {}", "key");
        assert_code!(None, StatusCode::Ok);
    }

    #[test]
    #[should_panic(expected = "got err=nil, want code=NotFound")]
    fn test_assert_code_panics_with_diff() {
        assert_code!(None, StatusCode::NotFound);
    }

    #[test]
    #[should_panic(expected = "case 2: got err=ab, want err=abc")]
    fn test_assert_text_panics_with_message() {
        let err = std::io::Error::other("ab");
        assert_text!(Some(&err), "abc", "case {}", 2);
    }
}
