//! The outcome of applying arguments to a curried callable.

use super::curried::Curried;

/// Result of a successful [`Curried::apply`].
///
/// A callable is either still accumulating arguments, in which case the
/// application yields a new callable, or it has been saturated and the
/// underlying function's result is returned directly.
///
/// # Examples
///
/// ```
/// use autocurry::curry::{Applied, Curried};
///
/// let add = Curried::from_array(|[x, y]: [i32; 2]| x + y);
///
/// match add.apply([1]).unwrap() {
///     Applied::Partial(add_one) => assert_eq!(add_one.remaining(), 1),
///     Applied::Complete(_) => unreachable!(),
/// }
///
/// assert!(add.apply([1, 2]).unwrap().is_complete());
/// ```
#[derive(Clone, Debug)]
pub enum Applied<T> {
    /// Fewer arguments than the arity have been supplied so far.
    Partial(Curried<T>),
    /// The underlying function was invoked; this is its result.
    Complete(T),
}

impl<T> Applied<T> {
    /// Returns `true` if more arguments are needed.
    pub const fn is_partial(&self) -> bool {
        matches!(self, Self::Partial(_))
    }

    /// Returns `true` if the underlying function was invoked.
    pub const fn is_complete(&self) -> bool {
        matches!(self, Self::Complete(_))
    }

    /// Converts into the result of the underlying function, if it was invoked.
    pub fn into_complete(self) -> Option<T> {
        match self {
            Self::Complete(value) => Some(value),
            Self::Partial(_) => None,
        }
    }

    /// Converts into the partially applied callable, if more arguments are needed.
    pub fn into_partial(self) -> Option<Curried<T>> {
        match self {
            Self::Partial(curried) => Some(curried),
            Self::Complete(_) => None,
        }
    }

    /// Returns a reference to the result, if the underlying function was invoked.
    pub const fn complete(&self) -> Option<&T> {
        match self {
            Self::Complete(value) => Some(value),
            Self::Partial(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_complete_accessors() {
        let applied: Applied<i32> = Applied::Complete(6);
        assert!(applied.is_complete());
        assert!(!applied.is_partial());
        assert_eq!(applied.complete(), Some(&6));
        assert!(applied.clone().into_partial().is_none());
        assert_eq!(applied.into_complete(), Some(6));
    }

    #[rstest]
    fn test_partial_accessors() {
        let add = Curried::from_array(|[x, y]: [i32; 2]| x + y);
        let applied = add.apply([1]).unwrap();
        assert!(applied.is_partial());
        assert_eq!(applied.complete(), None);
        assert!(applied.clone().into_complete().is_none());
        assert_eq!(applied.into_partial().map(|curried| curried.remaining()), Some(1));
    }
}
