//! Composition nodes and the `forward` / `reverse` combinators.

use std::fmt;
use std::iter;

use crate::curry::{Applied, Curried, Shareable};
use crate::error::CurryError;

/// The operator that produced a [`Composition`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// `forward(f, g)` / `f * g`: right-to-left, `g` runs first.
    Forward,
    /// `reverse(f, g)` / `f | g`: left-to-right, `f` runs first.
    Reverse,
}

/// Anything that can take part in a composition.
///
/// Both operators and [`Seed::supply`](super::Seed::supply) accept any
/// `Into<Callable<T>>`: owned or borrowed [`Curried`] callables and
/// compositions, and ordinary one-argument functions, which become unary
/// stages.
#[derive(Clone, Debug)]
pub enum Callable<T> {
    /// A single curried callable, possibly partially applied.
    Curried(Curried<T>),
    /// A flattened chain of curried callables.
    Composed(Composition<T>),
}

impl<T> Callable<T> {
    /// Splits into stages in evaluation order, as a non-empty head and tail.
    fn into_stages(self) -> (Curried<T>, Vec<Curried<T>>) {
        match self {
            Self::Curried(curried) => (curried, Vec::new()),
            Self::Composed(composition) => (composition.head, composition.tail),
        }
    }
}

impl<T: Clone> Callable<T> {
    /// Applies `arguments`.
    ///
    /// A curried callable may return a partial application; a composition
    /// always runs to completion and returns [`Applied::Complete`].
    ///
    /// # Errors
    ///
    /// Propagates the error of [`Curried::apply`] or [`Composition::apply`].
    pub fn apply<I>(&self, arguments: I) -> Result<Applied<T>, CurryError>
    where
        I: IntoIterator<Item = T>,
    {
        match self {
            Self::Curried(curried) => curried.apply(arguments),
            Self::Composed(composition) => composition.apply(arguments).map(Applied::Complete),
        }
    }
}

impl<T> From<Curried<T>> for Callable<T> {
    fn from(curried: Curried<T>) -> Self {
        Self::Curried(curried)
    }
}

impl<T: Clone> From<&Curried<T>> for Callable<T> {
    fn from(curried: &Curried<T>) -> Self {
        Self::Curried(curried.clone())
    }
}

impl<T> From<Composition<T>> for Callable<T> {
    fn from(composition: Composition<T>) -> Self {
        Self::Composed(composition)
    }
}

impl<T: Clone> From<&Composition<T>> for Callable<T> {
    fn from(composition: &Composition<T>) -> Self {
        Self::Composed(composition.clone())
    }
}

impl<T: Clone> From<&Callable<T>> for Callable<T> {
    fn from(callable: &Callable<T>) -> Self {
        callable.clone()
    }
}

impl<T, F> From<F> for Callable<T>
where
    T: 'static,
    F: Fn(T) -> T + Shareable + 'static,
{
    fn from(function: F) -> Self {
        Self::Curried(Curried::unary(function))
    }
}

/// A chain of two or more curried callables.
///
/// Stages are kept flat, in the order they run. Composing a composition
/// appends or prepends its stages instead of nesting it, so the result of
/// any sequence of `forward` / `reverse` calls is one flat chain.
///
/// The first stage receives every argument of the call; each later stage
/// receives exactly one argument, the previous stage's result.
#[derive(Clone)]
pub struct Composition<T> {
    head: Curried<T>,
    tail: Vec<Curried<T>>,
    direction: Direction,
}

static_assertions::assert_impl_all!(Composition<String>: Clone);
static_assertions::assert_impl_all!(Callable<String>: Clone);
#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(Composition<i32>: Send, Sync);

impl<T> Composition<T> {
    fn chain(first: Callable<T>, then: Callable<T>, direction: Direction) -> Self {
        let (head, mut tail) = first.into_stages();
        let (then_head, then_tail) = then.into_stages();
        tail.push(then_head);
        tail.extend(then_tail);
        Self {
            head,
            tail,
            direction,
        }
    }

    /// The direction of the operator that produced this node.
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// Number of stages in the flattened chain. Always at least two.
    pub fn len(&self) -> usize {
        1 + self.tail.len()
    }

    /// Always `false`: a composition has at least two stages.
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Iterates over the stages in evaluation order.
    pub fn stages(&self) -> impl Iterator<Item = &Curried<T>> {
        iter::once(&self.head).chain(self.tail.iter())
    }
}

impl<T: Clone> Composition<T> {
    /// Runs the chain on `arguments` and returns the last stage's result.
    ///
    /// # Errors
    ///
    /// - [`CurryError::ArityExceeded`] from any stage, unchanged.
    /// - [`CurryError::StageUnsaturated`] when a stage returns a partial
    ///   application instead of a value.
    ///
    /// # Examples
    ///
    /// ```
    /// use autocurry::compose::{forward, reverse};
    /// use autocurry::curry::Curried;
    ///
    /// let negate = Curried::unary(|x: i32| -x);
    /// let plus_one = Curried::unary(|x: i32| x + 1);
    ///
    /// assert_eq!(forward(&negate, &plus_one).apply([5]), Ok(-6));
    /// assert_eq!(reverse(&negate, &plus_one).apply([5]), Ok(-4));
    /// ```
    pub fn apply<I>(&self, arguments: I) -> Result<T, CurryError>
    where
        I: IntoIterator<Item = T>,
    {
        log::trace!(
            "evaluating {:?} composition of {} stages",
            self.direction,
            self.len()
        );
        let mut value = saturate(0, self.head.apply(arguments)?)?;
        for (offset, stage) in self.tail.iter().enumerate() {
            value = saturate(offset + 1, stage.apply(iter::once(value))?)?;
        }
        Ok(value)
    }
}

impl<T: fmt::Debug> fmt::Debug for Composition<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Composition")
            .field("direction", &self.direction)
            .field("stages", &self.stages().collect::<Vec<_>>())
            .finish()
    }
}

/// Extracts the value of a saturated stage.
pub(super) fn saturate<T>(stage: usize, applied: Applied<T>) -> Result<T, CurryError> {
    match applied {
        Applied::Complete(value) => Ok(value),
        Applied::Partial(curried) => Err(CurryError::StageUnsaturated {
            stage,
            arity: curried.arity(),
            supplied: curried.bound_count(),
        }),
    }
}

/// Forward (right-to-left) composition: `forward(f, g)(args) = f(g(args))`.
///
/// `g` runs first on the original arguments and `f` receives its result.
///
/// # Examples
///
/// ```
/// use autocurry::compose::forward;
/// use autocurry::curry::Curried;
///
/// let add = Curried::from_array(|[x, y]: [i32; 2]| x + y);
/// let mult = Curried::from_array(|[x, y]: [i32; 2]| x * y);
///
/// let add_five = add.apply([5]).unwrap().into_partial().unwrap();
/// let double = mult.apply([2]).unwrap().into_partial().unwrap();
///
/// // add_five(double(5)) = 15
/// assert_eq!(forward(add_five, double).apply([5]), Ok(15));
/// ```
pub fn forward<T, F, G>(outer: F, inner: G) -> Composition<T>
where
    F: Into<Callable<T>>,
    G: Into<Callable<T>>,
{
    Composition::chain(inner.into(), outer.into(), Direction::Forward)
}

/// Reverse (left-to-right) composition: `reverse(f, g)(args) = g(f(args))`.
///
/// `f` runs first on the original arguments and `g` receives its result.
///
/// # Examples
///
/// ```
/// use autocurry::compose::reverse;
/// use autocurry::curry::Curried;
///
/// let add = Curried::from_array(|[x, y]: [i32; 2]| x + y);
/// let mult = Curried::from_array(|[x, y]: [i32; 2]| x * y);
///
/// let add_five = add.apply([5]).unwrap().into_partial().unwrap();
/// let double = mult.apply([2]).unwrap().into_partial().unwrap();
///
/// // double(add_five(5)) = 20
/// assert_eq!(reverse(add_five, double).apply([5]), Ok(20));
/// ```
pub fn reverse<T, F, G>(first: F, then: G) -> Composition<T>
where
    F: Into<Callable<T>>,
    G: Into<Callable<T>>,
{
    Composition::chain(first.into(), then.into(), Direction::Reverse)
}
