//! Operator overloads for composition.
//!
//! - `f * g` is [`forward`]: `g` runs first.
//! - `f | g` is [`reverse`]: `f` runs first.
//!
//! Both operators are implemented for owned and borrowed [`Curried`],
//! [`Composition`] and [`Callable`] values only, so numeric `*` and `|` are
//! unaffected. The right-hand side may also be an ordinary function; wrap a
//! left-hand function in [`Callable::from`].

use std::ops::{BitOr, Mul};

use super::composition::{Callable, Composition, forward, reverse};
use crate::curry::Curried;

macro_rules! impl_composition_operators {
    ($($receiver:ty),+ $(,)?) => {
        $(
            impl<T: Clone, R: Into<Callable<T>>> Mul<R> for $receiver {
                type Output = Composition<T>;

                fn mul(self, inner: R) -> Self::Output {
                    forward(self, inner)
                }
            }

            impl<T: Clone, R: Into<Callable<T>>> BitOr<R> for $receiver {
                type Output = Composition<T>;

                fn bitor(self, then: R) -> Self::Output {
                    reverse(self, then)
                }
            }
        )+
    };
}

impl_composition_operators!(
    Curried<T>,
    &Curried<T>,
    Composition<T>,
    &Composition<T>,
    Callable<T>,
    &Callable<T>,
);
