//! Declarative selection of which methods are curried.
//!
//! A host type builds a [`MethodTable`] once, at initialisation, from
//! `(name, callable)` pairs whose closures capture the receiver. Directives
//! decide which of those methods go through the partial-application engine;
//! the rest behave like ordinary methods and demand exactly their arity.
//!
//! # Directives
//!
//! [`MethodTableBuilder`] replays directives in the order they are written,
//! interleaved with method definitions:
//!
//! - [`curry(names)`](MethodTableBuilder::curry) curries exactly the listed
//!   methods, which must already be defined.
//! - [`curry_all()`](MethodTableBuilder::curry_all) (or `curry` with no names)
//!   curries every method defined after it.
//!
//! A selective directive never affects methods it does not list.
//!
//! [`MethodTable::from_mode`] is the order-free alternative: one resolved
//! [`CurryMode`] applied to every definition.
//!
//! # Examples
//!
//! ```
//! use autocurry::curry::Curried;
//! use autocurry::selector::MethodTable;
//!
//! let identity = || Curried::unary(|x: i32| x);
//!
//! let table = MethodTable::builder()
//!     .define("alpha", identity())
//!     .define("beta", identity())
//!     .curry(["beta"])
//!     .define("epsilon", identity())
//!     .curry_all()
//!     .define("harry", identity())
//!     .build()
//!     .unwrap();
//!
//! assert!(table.invoke("alpha", []).is_err());
//! assert!(table.invoke("beta", []).unwrap().is_partial());
//! assert!(table.invoke("epsilon", []).is_err());
//! assert!(table.invoke("harry", []).unwrap().is_partial());
//! ```

use std::collections::{BTreeMap, BTreeSet};

use crate::curry::{Applied, Curried};
use crate::error::SelectorError;

/// Which methods of a table are curried.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CurryMode {
    /// No method is curried.
    #[default]
    None,
    /// Exactly the named methods are curried.
    Selected(BTreeSet<String>),
    /// Every method is curried.
    All,
}

impl CurryMode {
    /// Builds a [`CurryMode::Selected`] from method names.
    pub fn selected<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Selected(names.into_iter().map(Into::into).collect())
    }

    /// Returns `true` if the method called `name` is curried under this mode.
    pub fn applies_to(&self, name: &str) -> bool {
        match self {
            Self::None => false,
            Self::Selected(names) => names.contains(name),
            Self::All => true,
        }
    }
}

/// A named method: a callable plus whether it is curried.
#[derive(Clone, Debug)]
pub struct Method<T> {
    name: String,
    function: Curried<T>,
    curried: bool,
}

impl<T> Method<T> {
    /// The method name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// How many arguments a complete call needs.
    pub fn arity(&self) -> usize {
        self.function.remaining()
    }

    /// Returns `true` if calls go through the partial-application engine.
    pub const fn is_curried(&self) -> bool {
        self.curried
    }
}

impl<T: Clone> Method<T> {
    /// Calls the method.
    ///
    /// A curried method may return [`Applied::Partial`]. An uncurried one
    /// always returns [`Applied::Complete`] or fails.
    ///
    /// # Errors
    ///
    /// - [`SelectorError::ArityMismatch`] when an uncurried method does not
    ///   receive exactly its arity.
    /// - [`SelectorError::Curry`] when a curried method is over-supplied.
    pub fn invoke<I>(&self, arguments: I) -> Result<Applied<T>, SelectorError>
    where
        I: IntoIterator<Item = T>,
    {
        if self.curried {
            return Ok(self.function.apply(arguments)?);
        }

        let arguments: Vec<T> = arguments.into_iter().collect();
        if arguments.len() != self.arity() {
            return Err(SelectorError::ArityMismatch {
                method: self.name.clone(),
                arity: self.arity(),
                supplied: arguments.len(),
            });
        }
        Ok(self.function.apply(arguments)?)
    }
}

/// The methods of one receiver, keyed by name.
#[derive(Clone, Debug)]
pub struct MethodTable<T> {
    methods: BTreeMap<String, Method<T>>,
}

impl<T> MethodTable<T> {
    /// Starts an order-aware builder.
    pub fn builder() -> MethodTableBuilder<T> {
        MethodTableBuilder::new()
    }

    /// Builds a table by applying `mode` to every definition.
    ///
    /// Later definitions with the same name replace earlier ones.
    ///
    /// # Errors
    ///
    /// Returns [`SelectorError::UnknownMethod`] for the first name in a
    /// [`CurryMode::Selected`] set that no definition provides.
    ///
    /// # Examples
    ///
    /// ```
    /// use autocurry::curry::Curried;
    /// use autocurry::selector::{CurryMode, MethodTable};
    ///
    /// let table = MethodTable::from_mode(
    ///     [
    ///         ("negate", Curried::unary(|x: i32| -x)),
    ///         ("add", Curried::from_array(|[x, y]: [i32; 2]| x + y)),
    ///     ],
    ///     &CurryMode::selected(["add"]),
    /// )
    /// .unwrap();
    ///
    /// assert!(table.is_curried("add"));
    /// assert!(!table.is_curried("negate"));
    /// ```
    pub fn from_mode<I, S>(definitions: I, mode: &CurryMode) -> Result<Self, SelectorError>
    where
        I: IntoIterator<Item = (S, Curried<T>)>,
        S: Into<String>,
    {
        let methods: BTreeMap<String, Method<T>> = definitions
            .into_iter()
            .map(|(name, function)| {
                let name = name.into();
                let curried = mode.applies_to(&name);
                (
                    name.clone(),
                    Method {
                        name,
                        function,
                        curried,
                    },
                )
            })
            .collect();

        if let CurryMode::Selected(names) = mode
            && let Some(name) = names.iter().find(|name| !methods.contains_key(*name))
        {
            return Err(SelectorError::UnknownMethod(name.clone()));
        }
        log::debug!("built method table of {} methods from {mode:?}", methods.len());
        Ok(Self { methods })
    }

    /// Looks up a method by name.
    pub fn method(&self, name: &str) -> Option<&Method<T>> {
        self.methods.get(name)
    }

    /// Returns `true` if `name` is defined and curried.
    pub fn is_curried(&self, name: &str) -> bool {
        self.method(name).is_some_and(Method::is_curried)
    }

    /// Iterates over method names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.methods.keys().map(String::as_str)
    }

    /// Summarises which methods are curried.
    ///
    /// An empty table, or one with no curried methods, reports
    /// [`CurryMode::None`]; a non-empty table whose every method is curried
    /// reports [`CurryMode::All`].
    pub fn mode(&self) -> CurryMode {
        let curried: BTreeSet<String> = self
            .methods
            .values()
            .filter(|method| method.curried)
            .map(|method| method.name.clone())
            .collect();

        if curried.is_empty() {
            CurryMode::None
        } else if curried.len() == self.methods.len() {
            CurryMode::All
        } else {
            CurryMode::Selected(curried)
        }
    }
}

impl<T: Clone> MethodTable<T> {
    /// The curried callable standing in for `name`, if that method is curried.
    pub fn curried(&self, name: &str) -> Option<Curried<T>> {
        self.method(name)
            .filter(|method| method.curried)
            .map(|method| method.function.clone())
    }

    /// Calls the method `name` with `arguments`.
    ///
    /// # Errors
    ///
    /// - [`SelectorError::UnknownMethod`] if `name` is not defined.
    /// - Any error of [`Method::invoke`].
    pub fn invoke<I>(&self, name: &str, arguments: I) -> Result<Applied<T>, SelectorError>
    where
        I: IntoIterator<Item = T>,
    {
        self.method(name)
            .ok_or_else(|| SelectorError::UnknownMethod(name.to_string()))?
            .invoke(arguments)
    }
}

/// Order-aware builder for a [`MethodTable`].
///
/// Definitions and directives are applied in call order.
#[derive(Debug)]
pub struct MethodTableBuilder<T> {
    methods: BTreeMap<String, Method<T>>,
    curry_following: bool,
    unknown: Vec<String>,
}

impl<T> MethodTableBuilder<T> {
    fn new() -> Self {
        Self {
            methods: BTreeMap::new(),
            curry_following: false,
            unknown: Vec::new(),
        }
    }

    /// Defines (or redefines) a method.
    ///
    /// The method is curried if a [`curry_all`](Self::curry_all) directive
    /// came before this definition.
    #[must_use]
    pub fn define(mut self, name: impl Into<String>, function: Curried<T>) -> Self {
        let name = name.into();
        let curried = self.curry_following;
        if curried {
            log::debug!("currying method `{name}` on definition");
        }
        self.methods.insert(
            name.clone(),
            Method {
                name,
                function,
                curried,
            },
        );
        self
    }

    /// Curries the listed, already-defined methods.
    ///
    /// With no names this is [`curry_all`](Self::curry_all). Names that are
    /// not defined yet are reported by [`build`](Self::build).
    #[must_use]
    pub fn curry<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut names = names.into_iter().map(Into::into).peekable();
        if names.peek().is_none() {
            return self.curry_all();
        }

        for name in names {
            match self.methods.get_mut(&name) {
                Some(method) => {
                    log::debug!("currying method `{name}`");
                    method.curried = true;
                }
                None => self.unknown.push(name),
            }
        }
        self
    }

    /// Curries every method defined after this directive.
    #[must_use]
    pub fn curry_all(mut self) -> Self {
        log::debug!("currying all following methods");
        self.curry_following = true;
        self
    }

    /// Finishes the table.
    ///
    /// # Errors
    ///
    /// Returns [`SelectorError::UnknownMethod`] for the first name passed to
    /// [`curry`](Self::curry) that was not defined at that point.
    pub fn build(self) -> Result<MethodTable<T>, SelectorError> {
        match self.unknown.into_iter().next() {
            Some(name) => Err(SelectorError::UnknownMethod(name)),
            None => Ok(MethodTable {
                methods: self.methods,
            }),
        }
    }
}
