//! # autocurry
//!
//! Arity-aware automatic currying and operator-based function composition.
//!
//! ## Overview
//!
//! A [`Curried`](curry::Curried) callable wraps a function of fixed arity.
//! Calling it with fewer arguments than the arity returns a new, partially
//! applied callable; calling it with exactly enough arguments invokes the
//! function; calling it with too many is an error. Curried callables compose
//! with two operators:
//!
//! - **Forward composition** (`f * g`): `(f * g)(x) = f(g(x))`
//! - **Reverse composition** (`f | g`): `(f | g)(x) = g(f(x))`
//!
//! and [`pass`](compose::pass) seeds a pipeline with an initial value.
//!
//! ## Feature Flags
//!
//! - `derive`: The [`curried!`] macro, which infers arity from a closure
//! - `selector`: Per-receiver method tables with declarative currying directives
//! - `arc`: Use `Arc` instead of `Rc` so every callable is `Send + Sync`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use autocurry::prelude::*;
//!
//! let add = Curried::from_array(|[x, y, z]: [i32; 3]| x + y + z);
//!
//! assert_eq!(add.apply([1, 2, 3]).unwrap().into_complete(), Some(6));
//!
//! let add_one = add.apply([1]).unwrap().into_partial().unwrap();
//! let add_three = add_one.apply([2]).unwrap().into_partial().unwrap();
//! assert_eq!(add_three.apply([3]).unwrap().into_complete(), Some(6));
//!
//! let negate = Curried::unary(|x: i32| -x);
//! let plus_one = Curried::unary(|x: i32| x + 1);
//!
//! assert_eq!((&negate * &plus_one).apply([5]), Ok(-6));
//! assert_eq!((&negate | &plus_one).apply([5]), Ok(-4));
//! assert_eq!(pass(5) >> (&plus_one | &negate), Ok(-6));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

// Lets `curried!` expansions resolve `::autocurry` inside this crate's own tests.
extern crate self as autocurry;

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types, functions and macros.
///
/// # Usage
///
/// ```rust
/// use autocurry::prelude::*;
/// ```
pub mod prelude {
    pub use crate::compose::*;
    pub use crate::curry::*;
    pub use crate::error::*;

    #[cfg(feature = "selector")]
    pub use crate::selector::*;

    #[cfg(feature = "derive")]
    pub use crate::curried;
}

pub mod compose;
pub mod curry;
pub mod error;

#[cfg(feature = "selector")]
pub mod selector;

/// Curries a closure or a function path with an explicit arity.
///
/// - `curried!(|a, b| body)` takes the arity from the closure's parameter count.
/// - `curried!(function_name, 3)` takes the arity from the integer literal.
///
/// Both forms expand to [`Curried::from_array`](curry::Curried::from_array).
///
/// ```rust
/// use autocurry::curried;
///
/// fn add(x: i32, y: i32, z: i32) -> i32 { x + y + z }
///
/// let from_path = curried!(add, 3);
/// let from_closure = curried!(|x: i32, y: i32| x * y);
///
/// assert_eq!(from_path.apply([1, 2, 3]).unwrap().into_complete(), Some(6));
/// assert!(from_closure.apply([4]).unwrap().is_partial());
/// ```
#[cfg(feature = "derive")]
pub use autocurry_derive::curried;
