//! Arity-aware partial application.
//!
//! A [`Curried`] callable wraps a function of fixed arity `N`. Applying it
//! concatenates the supplied arguments onto the bound ones and then:
//!
//! | total arguments | outcome |
//! |---|---|
//! | `< N` | [`Applied::Partial`] with a new callable holding all arguments |
//! | `== N` | [`Applied::Complete`] with the function's result |
//! | `> N` | [`CurryError::ArityExceeded`](crate::error::CurryError::ArityExceeded) |
//!
//! Batching does not matter, only the cumulative argument sequence does:
//!
//! ```text
//! curried(a)(b)(c) == curried(a, b)(c) == curried(a)(b, c) == curried(a, b, c)
//! ```
//!
//! An arity-0 callable invokes its function on the first application.
//!
//! # Examples
//!
//! ```
//! use autocurry::curry::Curried;
//!
//! let add = Curried::from_array(|[x, y, z]: [i32; 3]| x + y + z);
//!
//! let step = add.apply([1]).unwrap().into_partial().unwrap();
//! let step = step.apply([2]).unwrap().into_partial().unwrap();
//! assert_eq!(step.apply([3]).unwrap().into_complete(), Some(6));
//!
//! assert!(add.apply([1, 2, 3, 4]).is_err());
//! ```

mod applied;
mod curried;
mod shared;

pub use applied::Applied;
pub use curried::{Curried, make_curried};
pub use shared::Shareable;
