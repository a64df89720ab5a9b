use std::error::Error as StdError;
use std::fmt;

use tracing_subscriber::EnvFilter;

/// Install a test subscriber when `RUST_LOG` is set.
#[allow(dead_code)]
pub fn init_tracing() {
    if std::env::var("RUST_LOG").is_ok() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }
}

/// Error with a fixed message, like a package-level sentinel.
#[allow(dead_code)]
#[derive(Debug, PartialEq)]
pub struct Sentinel(pub &'static str);

impl fmt::Display for Sentinel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl StdError for Sentinel {}

#[allow(dead_code)]
pub static EOF: Sentinel = Sentinel("EOF");

/// Freshly built error with an owned message.
#[allow(dead_code)]
#[derive(Debug)]
pub struct Msg(pub String);

#[allow(dead_code)]
pub fn msg(text: &str) -> Msg {
    Msg(text.to_string())
}

impl fmt::Display for Msg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl StdError for Msg {}

/// A list of messages rendered comma separated.
#[allow(dead_code)]
#[derive(Debug, Clone)]
pub struct ErrList(pub Vec<&'static str>);

impl fmt::Display for ErrList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(", "))
    }
}

impl StdError for ErrList {}

/// Adds context in front of a wrapped cause.
#[allow(dead_code)]
#[derive(Debug)]
pub struct Wrapped {
    pub context: &'static str,
    pub source: Box<dyn StdError + Send + Sync>,
}

#[allow(dead_code)]
pub fn wrap(context: &'static str, source: impl StdError + Send + Sync + 'static) -> Wrapped {
    Wrapped {
        context,
        source: Box::new(source),
    }
}

impl fmt::Display for Wrapped {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.context, self.source)
    }
}

impl StdError for Wrapped {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(self.source.as_ref())
    }
}
