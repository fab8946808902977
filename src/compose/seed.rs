//! Seeding a pipeline with an initial value.

use std::iter;
use std::ops::Shr;

use super::composition::{Callable, saturate};
use crate::error::CurryError;

/// An initial value waiting to be fed into a pipeline.
///
/// Created by [`pass`]. Supplying it evaluates the pipeline immediately and
/// yields the final value rather than a callable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Seed<T>(T);

/// Starts a point-free pipeline with `value`.
///
/// # Examples
///
/// ```
/// use autocurry::compose::pass;
/// use autocurry::curry::Curried;
///
/// let add = Curried::from_array(|[x, y]: [i32; 2]| x + y);
/// let mult = Curried::from_array(|[x, y]: [i32; 2]| x * y);
/// let add_five = add.apply([5]).unwrap().into_partial().unwrap();
/// let times_five = mult.apply([5]).unwrap().into_partial().unwrap();
///
/// // 5 -> add_five -> 10 -> times_five -> 50
/// assert_eq!(pass(5) >> (&add_five | &times_five), Ok(50));
/// // 5 -> times_five -> 25 -> add_five -> 30
/// assert_eq!(pass(5) >> (&add_five * &times_five), Ok(30));
/// ```
pub const fn pass<T>(value: T) -> Seed<T> {
    Seed(value)
}

impl<T> Seed<T> {
    /// The seeded value.
    pub const fn value(&self) -> &T {
        &self.0
    }

    /// Unwraps the seeded value without running anything.
    pub fn into_value(self) -> T {
        self.0
    }
}

impl<T: Clone> Seed<T> {
    /// Feeds the seeded value into `pipeline` as its sole argument.
    ///
    /// Forward and reverse compositions are both evaluated by their own
    /// ordering rules; a single curried callable is simply applied.
    ///
    /// # Errors
    ///
    /// - [`CurryError::ArityExceeded`] from any stage.
    /// - [`CurryError::StageUnsaturated`] when the pipeline produces a
    ///   partial application instead of a value.
    pub fn supply<C>(self, pipeline: C) -> Result<T, CurryError>
    where
        C: Into<Callable<T>>,
    {
        match pipeline.into() {
            Callable::Composed(composition) => composition.apply(iter::once(self.0)),
            Callable::Curried(curried) => saturate(0, curried.apply_once(iter::once(self.0))?),
        }
    }
}

impl<T: Clone, C: Into<Callable<T>>> Shr<C> for Seed<T> {
    type Output = Result<T, CurryError>;

    fn shr(self, pipeline: C) -> Self::Output {
        self.supply(pipeline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curry::Curried;
    use rstest::rstest;

    #[rstest]
    fn test_seed_accessors() {
        let seed = pass(String::from("seed"));
        assert_eq!(seed.value(), "seed");
        assert_eq!(seed.into_value(), "seed");
    }

    #[rstest]
    fn test_supply_single_callable() {
        let negate = Curried::unary(|x: i32| -x);
        assert_eq!(pass(3).supply(&negate), Ok(-3));
    }

    #[rstest]
    fn test_supply_to_unsaturated_callable_fails() {
        let add = Curried::from_array(|[x, y]: [i32; 2]| x + y);
        assert_eq!(
            pass(3).supply(add),
            Err(CurryError::StageUnsaturated {
                stage: 0,
                arity: 2,
                supplied: 1,
            })
        );
    }
}
