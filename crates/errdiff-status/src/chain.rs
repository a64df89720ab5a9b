//! Cause chain traversal over `std::error::Error::source`.

use std::error::Error as StdError;
use std::io;

/// Iterator over an error and its successive causes.
///
/// The first item is the error itself. `io::Error` keeps its payload out of
/// `source()`, so the walk steps into `io::Error::get_ref` instead.
#[derive(Clone)]
pub struct Chain<'a> {
    next: Option<&'a (dyn StdError + 'static)>,
}

impl<'a> Chain<'a> {
    pub fn new(err: &'a (dyn StdError + 'static)) -> Self {
        Self { next: Some(err) }
    }
}

/// Walk `err` and everything it wraps.
pub fn chain<'a>(err: &'a (dyn StdError + 'static)) -> Chain<'a> {
    Chain::new(err)
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a (dyn StdError + 'static);

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = cause(current);
        Some(current)
    }
}

impl std::iter::FusedIterator for Chain<'_> {}

fn cause<'a>(err: &'a (dyn StdError + 'static)) -> Option<&'a (dyn StdError + 'static)> {
    if let Some(payload) = err.downcast_ref::<io::Error>().and_then(io::Error::get_ref) {
        let payload: &(dyn StdError + 'static) = payload;
        return Some(payload);
    }
    err.source()
}
