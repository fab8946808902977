//! Procedural macros for autocurry.
//!
//! # Available Function-like Macros
//!
//! - [`curried!`]: Wraps a closure or function as an `autocurry::curry::Curried`
//!   callable, inferring the arity
//!
//! # Example
//!
//! ```rust,ignore
//! use autocurry::curried;
//!
//! // Arity from the closure's parameters
//! let add = curried!(|a: i32, b: i32| a + b);
//! let add_five = add.apply([5]).unwrap().into_partial().unwrap();
//! assert_eq!(add_five.apply([10]).unwrap().into_complete(), Some(15));
//!
//! // Explicit arity for a named function
//! fn volume(width: u32, height: u32, depth: u32) -> u32 { width * height * depth }
//! let volume = curried!(volume, 3);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod curried;

use proc_macro::TokenStream;

/// Converts a closure or a function path into a `Curried` callable.
///
/// # Syntax
///
/// - `curried!(|a, b, c| body)`: arity is the closure's parameter count (0 allowed)
/// - `curried!(function_name, arity)`: arity is the integer literal
///
/// Every parameter and the return value must share one type, the `T` of the
/// resulting `Curried<T>`.
///
/// # Compile Errors
///
/// - A bare function name without arity
/// - A non-literal arity
/// - Anything other than a closure or a path
///
/// # Example
///
/// ```rust,ignore
/// use autocurry::curried;
///
/// fn add_three(a: i32, b: i32, c: i32) -> i32 { a + b + c }
///
/// let curried_add = curried!(add_three, 3);
/// let step = curried_add.apply([1, 2]).unwrap().into_partial().unwrap();
/// assert_eq!(step.apply([3]).unwrap().into_complete(), Some(6));
/// ```
#[proc_macro]
pub fn curried(input: TokenStream) -> TokenStream {
    curried::curried_impl(input.into()).into()
}
