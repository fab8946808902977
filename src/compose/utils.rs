//! Helper callables (combinators) for composition.
//!
//! - [`identity`]: The identity callable (I combinator)
//! - [`constant`]: A callable that always returns the same value (K combinator)
//!
//! Both are unary [`Curried`] values, so they compose with `*` and `|`.

use crate::curry::{Curried, Shareable};

/// Returns a unary callable that yields its argument unchanged.
///
/// The identity is the unit element of composition:
/// - `identity() * f` behaves like `f`
/// - `f * identity()` behaves like `f`
///
/// # Examples
///
/// ```
/// use autocurry::compose::identity;
/// use autocurry::curry::Curried;
///
/// let double = Curried::unary(|x: i32| x * 2);
/// assert_eq!((identity::<i32>() * &double).apply([5]), Ok(10));
/// ```
pub fn identity<T: 'static>() -> Curried<T> {
    Curried::unary(|value| value)
}

/// Returns a unary callable that ignores its argument and yields `value`.
///
/// # Examples
///
/// ```
/// use autocurry::compose::constant;
/// use autocurry::curry::Curried;
///
/// let double = Curried::unary(|x: i32| x * 2);
/// assert_eq!((&double | constant(7)).apply([100]), Ok(7));
/// ```
pub fn constant<T>(value: T) -> Curried<T>
where
    T: Clone + Shareable + 'static,
{
    Curried::unary(move |_| value.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_identity_with_string() {
        let result = identity::<String>().apply([String::from("hello")]).unwrap();
        assert_eq!(result.into_complete().as_deref(), Some("hello"));
    }

    #[rstest]
    fn test_constant_ignores_argument() {
        let always_hello = constant("hello");
        assert_eq!(always_hello.apply(["ignored"]).unwrap().into_complete(), Some("hello"));
    }
}
