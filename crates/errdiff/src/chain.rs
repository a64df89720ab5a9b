//! Cause chain containment.
//!
//! An error "contains" another when some link of its cause chain is the same
//! error: either the very same object, or a value of the same type with the
//! same content.

use std::error::Error as StdError;

pub use errdiff_status::{Chain, chain};

/// Whether `want` appears anywhere in `got`'s cause chain, `got` included.
///
/// A link matches when it is the same object as `want`, or when it renders the
/// same `Display` and the same `Debug` text. `Debug` carries the concrete type
/// and its fields, so a different type with an equal message does not match.
///
/// An address alone does not identify an object: zero-sized values all share
/// one, and a struct shares its address with its first field. The identity
/// path therefore needs a non-zero size and the same `Debug` text as well.
#[tracing::instrument(skip_all)]
pub fn contains(got: &(dyn StdError + 'static), want: &(dyn StdError + 'static)) -> bool {
    let want_text = want.to_string();
    let want_debug = format!("{:?}", want);
    let want_size = std::mem::size_of_val(want);

    for (depth, link) in chain(got).enumerate() {
        let link_debug = format!("{:?}", link);
        if want_size != 0
            && std::ptr::addr_eq(link as *const dyn StdError, want as *const dyn StdError)
            && link_debug == want_debug
        {
            tracing::trace!("same object as want at depth {}", depth);
            return true;
        }
        if link_debug == want_debug && link.to_string() == want_text {
            tracing::trace!("equal value to want at depth {}: {}", depth, want_text);
            return true;
        }
    }
    false
}

/// Typed containment: some link downcasts to `E` and equals `want`.
pub fn contains_as<E>(got: &(dyn StdError + 'static), want: &E) -> bool
where
    E: StdError + PartialEq + 'static,
{
    chain(got)
        .filter_map(|link| link.downcast_ref::<E>())
        .any(|link| link == want)
}

/// First link of `got`'s cause chain that is an `E`.
pub fn find<'a, E>(got: &'a (dyn StdError + 'static)) -> Option<&'a E>
where
    E: StdError + 'static,
{
    chain(got).find_map(|link| link.downcast_ref::<E>())
}
