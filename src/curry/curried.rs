//! The partial-application engine.

use std::cmp::Ordering;
use std::fmt;

use smallvec::SmallVec;

use super::applied::Applied;
use super::shared::{ReferenceCounter, Shareable, SharedFunction};
use crate::error::CurryError;

/// Number of bound arguments stored inline before spilling to the heap.
const INLINE_ARGUMENTS: usize = 4;

type BoundArguments<T> = SmallVec<[T; INLINE_ARGUMENTS]>;

/// A function of fixed arity together with the arguments bound to it so far.
///
/// Applying a `Curried` never mutates it. Each partial application yields a
/// new `Curried` sharing the same underlying function; the call that brings
/// the argument count to exactly the arity invokes the function and yields
/// its result instead.
///
/// The number of bound arguments never exceeds the arity.
///
/// # Type Parameters
///
/// * `T` - The type of every argument and of the result
///
/// # Examples
///
/// ```
/// use autocurry::curry::{Applied, Curried};
///
/// let add = Curried::from_array(|[x, y, z]: [i32; 3]| x + y + z);
///
/// let Applied::Partial(add_one_two) = add.apply([1, 2]).unwrap() else {
///     panic!("two of three arguments must accumulate");
/// };
/// assert_eq!(add_one_two.bound_count(), 2);
/// assert_eq!(add_one_two.apply([3]).unwrap().into_complete(), Some(6));
///
/// // The original is untouched and can be reused.
/// assert_eq!(add.apply([10, 20, 30]).unwrap().into_complete(), Some(60));
/// ```
#[derive(Clone)]
pub struct Curried<T> {
    function: SharedFunction<T>,
    arity: usize,
    bound: BoundArguments<T>,
}

static_assertions::assert_impl_all!(Curried<String>: Clone);

// Callables cross threads only when the shared function pointer is an `Arc`.
#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(Curried<i32>: Send, Sync);
#[cfg(not(feature = "arc"))]
static_assertions::assert_not_impl_any!(Curried<i32>: Send, Sync);

impl<T: 'static> Curried<T> {
    /// Wraps `function`, declaring that it takes exactly `arity` arguments.
    ///
    /// The engine calls `function` with a vector of exactly `arity` elements.
    /// The declared arity is trusted; it must match what `function` expects.
    ///
    /// # Examples
    ///
    /// ```
    /// use autocurry::curry::Curried;
    ///
    /// let sum = Curried::new(3, |arguments: Vec<i32>| arguments.iter().sum());
    /// assert_eq!(sum.apply([1, 2, 3]).unwrap().into_complete(), Some(6));
    /// ```
    pub fn new<F>(arity: usize, function: F) -> Self
    where
        F: Fn(Vec<T>) -> T + Shareable + 'static,
    {
        Self {
            function: ReferenceCounter::new(function),
            arity,
            bound: SmallVec::new(),
        }
    }

    /// Wraps a function taking its `N` arguments as an array; the arity is `N`.
    ///
    /// # Examples
    ///
    /// ```
    /// use autocurry::curry::Curried;
    ///
    /// let now = Curried::from_array(|[]: [u64; 0]| 42);
    /// assert_eq!(now.arity(), 0);
    /// assert_eq!(now.apply([]).unwrap().into_complete(), Some(42));
    /// ```
    pub fn from_array<const N: usize, F>(function: F) -> Self
    where
        F: Fn([T; N]) -> T + Shareable + 'static,
    {
        Self::new(N, move |arguments: Vec<T>| {
            match <[T; N]>::try_from(arguments) {
                Ok(array) => function(array),
                Err(arguments) => unreachable!(
                    "arity {} function invoked with {} arguments",
                    N,
                    arguments.len()
                ),
            }
        })
    }

    /// Wraps a single-argument function.
    ///
    /// Every stage after the first in a composition receives exactly one
    /// argument, so unary callables are the usual building block for chains.
    ///
    /// # Examples
    ///
    /// ```
    /// use autocurry::curry::Curried;
    ///
    /// let negate = Curried::unary(|x: i32| -x);
    /// assert_eq!(negate.apply([5]).unwrap().into_complete(), Some(-5));
    /// ```
    pub fn unary<F>(function: F) -> Self
    where
        F: Fn(T) -> T + Shareable + 'static,
    {
        Self::from_array(move |[value]: [T; 1]| function(value))
    }
}

impl<T> Curried<T> {
    /// The declared arity of the underlying function.
    pub const fn arity(&self) -> usize {
        self.arity
    }

    /// How many arguments are already bound.
    pub fn bound_count(&self) -> usize {
        self.bound.len()
    }

    /// How many more arguments saturate this callable.
    pub fn remaining(&self) -> usize {
        self.arity - self.bound.len()
    }

    /// The arguments bound so far, in supply order.
    pub fn bound(&self) -> &[T] {
        &self.bound
    }

    /// Applies `arguments`, consuming this callable.
    ///
    /// Same decision as [`apply`](Self::apply) but reuses the bound arguments
    /// instead of cloning them, so `T` need not be [`Clone`].
    ///
    /// # Errors
    ///
    /// Returns [`CurryError::ArityExceeded`] when bound plus supplied
    /// arguments outnumber the arity. The underlying function is not called.
    pub fn apply_once<I>(self, arguments: I) -> Result<Applied<T>, CurryError>
    where
        I: IntoIterator<Item = T>,
    {
        let Self {
            function,
            arity,
            mut bound,
        } = self;
        bound.extend(arguments);
        let supplied = bound.len();

        match supplied.cmp(&arity) {
            Ordering::Less => {
                log::trace!("accumulating {supplied} of {arity} arguments");
                Ok(Applied::Partial(Self {
                    function,
                    arity,
                    bound,
                }))
            }
            Ordering::Equal => {
                log::trace!("invoking arity {arity} function");
                Ok(Applied::Complete(function(bound.into_vec())))
            }
            Ordering::Greater => {
                log::trace!("rejecting {supplied} arguments for arity {arity}");
                Err(CurryError::ArityExceeded { arity, supplied })
            }
        }
    }
}

impl<T: Clone> Curried<T> {
    /// Applies `arguments` after the already-bound ones.
    ///
    /// - Fewer than the arity in total: returns [`Applied::Partial`] holding a
    ///   new callable with every argument so far bound.
    /// - Exactly the arity: invokes the underlying function once and returns
    ///   [`Applied::Complete`] with its result.
    ///
    /// The decision depends only on argument counts, never on their values.
    ///
    /// # Errors
    ///
    /// Returns [`CurryError::ArityExceeded`] when the total exceeds the arity.
    ///
    /// # Examples
    ///
    /// ```
    /// use autocurry::curry::Curried;
    /// use autocurry::error::CurryError;
    ///
    /// let add = Curried::from_array(|[x, y, z]: [i32; 3]| x + y + z);
    /// let add_one_two = add.apply([1, 2]).unwrap().into_partial().unwrap();
    ///
    /// assert_eq!(add_one_two.apply([3]).unwrap().into_complete(), Some(6));
    /// assert_eq!(
    ///     add_one_two.apply([3, 4]).unwrap_err(),
    ///     CurryError::ArityExceeded { arity: 3, supplied: 4 },
    /// );
    /// ```
    pub fn apply<I>(&self, arguments: I) -> Result<Applied<T>, CurryError>
    where
        I: IntoIterator<Item = T>,
    {
        self.clone().apply_once(arguments)
    }
}

impl<T: fmt::Debug> fmt::Debug for Curried<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Curried")
            .field("arity", &self.arity)
            .field("bound", &self.bound)
            .finish_non_exhaustive()
    }
}

/// Wraps `function` as a curried callable of the given arity.
///
/// Shorthand for [`Curried::new`].
pub fn make_curried<T, F>(arity: usize, function: F) -> Curried<T>
where
    T: 'static,
    F: Fn(Vec<T>) -> T + Shareable + 'static,
{
    Curried::new(arity, function)
}
