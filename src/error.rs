//! Error types for curried application and composition.
//!
//! Every operation in this crate either returns a value (or a new callable)
//! or fails synchronously with exactly one error. Nothing is retried or
//! recovered internally.

use std::fmt;

/// Errors raised while applying a curried callable or evaluating a composition.
///
/// # Examples
///
/// ```rust
/// use autocurry::curry::Curried;
/// use autocurry::error::CurryError;
///
/// let add = Curried::from_array(|[x, y]: [i32; 2]| x + y);
/// let add_one = add.apply([1]).unwrap().into_partial().unwrap();
///
/// assert_eq!(
///     add_one.apply([2, 3]).unwrap_err(),
///     CurryError::ArityExceeded { arity: 2, supplied: 3 },
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CurryError {
    /// More arguments were supplied in total than the function's arity.
    ///
    /// `supplied` counts bound arguments plus the arguments of the failing call.
    ArityExceeded {
        /// The declared arity of the underlying function.
        arity: usize,
        /// The cumulative number of arguments supplied.
        supplied: usize,
    },

    /// A stage of a composition did not saturate, so there was no value to
    /// hand to the next stage (or to return).
    StageUnsaturated {
        /// Zero-based position of the stage in evaluation order.
        stage: usize,
        /// The declared arity of the stage.
        arity: usize,
        /// The number of arguments the stage held after being applied.
        supplied: usize,
    },
}

impl fmt::Display for CurryError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ArityExceeded { arity, supplied } => {
                write!(
                    formatter,
                    "wrong number of arguments: {supplied} supplied for arity {arity}"
                )
            }
            Self::StageUnsaturated {
                stage,
                arity,
                supplied,
            } => {
                write!(
                    formatter,
                    "composition stage {stage} is unsaturated: {supplied} of {arity} arguments"
                )
            }
        }
    }
}

impl std::error::Error for CurryError {}

/// Errors raised by a [`MethodTable`](crate::selector::MethodTable).
///
/// # Examples
///
/// ```rust
/// use autocurry::curry::Curried;
/// use autocurry::error::SelectorError;
/// use autocurry::selector::MethodTable;
///
/// let table = MethodTable::builder()
///     .define("negate", Curried::unary(|x: i32| -x))
///     .build()
///     .unwrap();
///
/// assert_eq!(
///     table.invoke("negate", []).unwrap_err(),
///     SelectorError::ArityMismatch { method: "negate".to_string(), arity: 1, supplied: 0 },
/// );
/// ```
#[cfg(feature = "selector")]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectorError {
    /// No method with this name is defined.
    UnknownMethod(String),

    /// An uncurried method was called with the wrong number of arguments.
    ArityMismatch {
        /// The method name.
        method: String,
        /// The number of arguments the method requires.
        arity: usize,
        /// The number of arguments supplied.
        supplied: usize,
    },

    /// A curried method rejected its arguments.
    Curry(CurryError),
}

#[cfg(feature = "selector")]
impl fmt::Display for SelectorError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownMethod(name) => write!(formatter, "undefined method `{name}`"),
            Self::ArityMismatch {
                method,
                arity,
                supplied,
            } => {
                write!(
                    formatter,
                    "wrong number of arguments for `{method}`: {supplied} supplied, {arity} required"
                )
            }
            Self::Curry(error) => write!(formatter, "{error}"),
        }
    }
}

#[cfg(feature = "selector")]
impl std::error::Error for SelectorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Curry(error) => Some(error),
            Self::UnknownMethod(_) | Self::ArityMismatch { .. } => None,
        }
    }
}

#[cfg(feature = "selector")]
impl From<CurryError> for SelectorError {
    fn from(error: CurryError) -> Self {
        Self::Curry(error)
    }
}
