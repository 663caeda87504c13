//! Error types for `CircBuf`.

use core::error::Error;
use core::fmt;

/// Error value indicating insufficient capacity.
///
/// Returned by [`CircBuf::try_push_back`](crate::CircBuf::try_push_back),
/// which refuses to evict; the rejected element rides along so the caller
/// can recover it.
#[derive(Clone, Copy, Eq, Ord, PartialEq, PartialOrd)]
pub struct CapacityError<T = ()> {
    /// The element that could not be stored.
    pub element: T,
}

const CAPERROR: &str = "insufficient capacity";

impl<T> Error for CapacityError<T> {}

impl<T> fmt::Display for CapacityError<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(CAPERROR)
    }
}

impl<T> fmt::Debug for CapacityError<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "CapacityError: {}", CAPERROR)
    }
}
