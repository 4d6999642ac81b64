//! Capacity overflow signaling.

use core::fmt;

/// The error produced when an operation would exceed a
/// [`FixedVect`](crate::FixedVect)'s capacity.
///
/// Operations that take ownership of an element hand it back inside the
/// error, so nothing is lost on rejection:
///
/// ```
/// use fixed_vect::{CapacityError, FixedVect};
///
/// let mut fv = FixedVect::<i32, 1>::new();
/// fv.push(1).unwrap();
///
/// assert_eq!(fv.push(2), Err(CapacityError::new(2)));
/// assert_eq!(fv.push(3).unwrap_err().element(), 3);
/// ```
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct CapacityError<T = ()> {
    element: T,
}

impl<T> CapacityError<T> {
    /// Wraps the element that could not be stored.
    pub const fn new(element: T) -> Self {
        Self { element }
    }

    /// Returns the element that could not be stored.
    pub fn element(self) -> T {
        self.element
    }

    /// Discards the payload, keeping only the fact that capacity ran out.
    pub fn simplify(self) -> CapacityError {
        CapacityError::new(())
    }
}

impl<T> fmt::Display for CapacityError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("insufficient capacity")
    }
}

// The payload need not be `Debug`; the message is the same regardless of
// what failed to fit.
impl<T> fmt::Debug for CapacityError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CapacityError: insufficient capacity")
    }
}

impl<T> core::error::Error for CapacityError<T> {}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::CapacityError;

    #[test]
    fn test_element_round_trips() {
        let sut = CapacityError::new(42);
        assert_eq!(sut.element(), 42);
    }

    #[test]
    fn test_simplify_drops_the_payload() {
        let sut = CapacityError::new("unstorable").simplify();
        assert_eq!(sut, CapacityError::new(()));
    }

    #[test]
    fn test_display_is_payload_agnostic() {
        assert_eq!(CapacityError::new(7).to_string(), "insufficient capacity");
        assert_eq!(CapacityError::new(()).to_string(), "insufficient capacity");
    }

    #[test]
    fn test_debug_is_payload_agnostic() {
        struct Opaque;

        let message = alloc::format!("{:?}", CapacityError::new(Opaque));
        assert_eq!(message, "CapacityError: insufficient capacity");
    }
}
