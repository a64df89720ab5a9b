use std::error::Error as StdError;

/// Borrow the error of `result`, if any, in the form the comparisons take.
pub fn err_of<T, E>(result: &Result<T, E>) -> Option<&(dyn StdError + 'static)>
where
    E: StdError + 'static,
{
    result.as_ref().err().map(|e| e as &(dyn StdError + 'static))
}

/// `result.err_ref()` as a method form of [`err_of`].
pub trait ResultExt {
    fn err_ref(&self) -> Option<&(dyn StdError + 'static)>;
}

impl<T, E> ResultExt for Result<T, E>
where
    E: StdError + 'static,
{
    fn err_ref(&self) -> Option<&(dyn StdError + 'static)> {
        err_of(self)
    }
}
