//! Function composition over curried callables.
//!
//! This module combines [`Curried`](crate::curry::Curried) callables into
//! flat chains and feeds values through them.
//!
//! # Overview
//!
//! - [`forward`] / `f * g`: Compose right-to-left (mathematical composition)
//! - [`reverse`] / `f | g`: Compose left-to-right (data flow style)
//! - [`pass`]: Seed a pipeline with an initial value, evaluated by `>>` or
//!   [`Seed::supply`]
//!
//! Ordinary `Fn(T) -> T` functions take part as unary stages wherever an
//! `Into<Callable<T>>` is accepted.
//!
//! # Helper Callables
//!
//! - [`identity`]: Returns its argument unchanged
//! - [`constant`]: Always returns the same value
//!
//! # Examples
//!
//! ## Forward composition (right-to-left)
//!
//! ```
//! use autocurry::curry::Curried;
//!
//! let negate = Curried::unary(|x: i32| -x);
//! let plus_one = Curried::unary(|x: i32| x + 1);
//!
//! // (negate * plus_one)(x) = negate(plus_one(x))
//! assert_eq!((&negate * &plus_one).apply([5]), Ok(-6));
//! ```
//!
//! ## Reverse composition (left-to-right)
//!
//! ```
//! use autocurry::curry::Curried;
//!
//! let negate = Curried::unary(|x: i32| -x);
//! let plus_one = Curried::unary(|x: i32| x + 1);
//!
//! // (negate | plus_one)(x) = plus_one(negate(x))
//! assert_eq!((&negate | &plus_one).apply([5]), Ok(-4));
//! ```
//!
//! ## Composing partial applications
//!
//! ```
//! use autocurry::compose::pass;
//! use autocurry::curry::Curried;
//!
//! let add = Curried::from_array(|[x, y]: [i32; 2]| x + y);
//! let mult = Curried::from_array(|[x, y]: [i32; 2]| x * y);
//!
//! let add_five = add.apply([5]).unwrap().into_partial().unwrap();
//! let double = mult.apply([2]).unwrap().into_partial().unwrap();
//!
//! assert_eq!((&add_five * &double).apply([5]), Ok(15));
//! assert_eq!(pass(5) >> (&add_five | &double), Ok(20));
//! ```
//!
//! # Evaluation Rules
//!
//! Only the first stage of a chain may take several arguments. Every later
//! stage receives exactly one argument, the previous result, so later stages
//! should have one argument left to bind. A stage that does not saturate
//! fails the call with
//! [`CurryError::StageUnsaturated`](crate::error::CurryError::StageUnsaturated).
//!
//! # Laws
//!
//! - **Associativity**: `(f * g) * h == f * (g * h)` and `(f | g) | h == f | (g | h)`
//! - **Left Identity**: `identity() * f == f`
//! - **Right Identity**: `f * identity() == f`
//! - **Duality**: `f * g == g | f`

mod composition;
mod operators;
mod seed;
mod utils;

pub use composition::{Callable, Composition, Direction, forward, reverse};
pub use seed::{Seed, pass};
pub use utils::{constant, identity};
