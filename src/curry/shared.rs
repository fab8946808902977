//! Shared ownership of wrapped functions.
//!
//! A curried callable and every partial application derived from it point at
//! the same underlying function. With the `arc` feature that pointer is an
//! `Arc` and wrapped functions must be `Send + Sync`; otherwise it is an `Rc`
//! and no extra bounds apply.

/// Reference-counted smart pointer type.
///
/// When the `arc` feature is enabled, this is `std::sync::Arc`,
/// which is thread-safe but has slightly higher overhead.
///
/// When the `arc` feature is disabled (default), this is `std::rc::Rc`,
/// which is faster but not thread-safe.
#[cfg(feature = "arc")]
pub(crate) type ReferenceCounter<T> = std::sync::Arc<T>;

#[cfg(not(feature = "arc"))]
pub(crate) type ReferenceCounter<T> = std::rc::Rc<T>;

/// Bound placed on every wrapped function.
///
/// Equivalent to `Send + Sync` with the `arc` feature, and to no bound at all
/// without it. Implemented for every type that qualifies.
#[cfg(feature = "arc")]
pub trait Shareable: Send + Sync {}

#[cfg(feature = "arc")]
impl<X: Send + Sync + ?Sized> Shareable for X {}

/// Bound placed on every wrapped function.
///
/// Equivalent to `Send + Sync` with the `arc` feature, and to no bound at all
/// without it. Implemented for every type that qualifies.
#[cfg(not(feature = "arc"))]
pub trait Shareable {}

#[cfg(not(feature = "arc"))]
impl<X: ?Sized> Shareable for X {}

#[cfg(feature = "arc")]
pub(crate) type SharedFunction<T> = ReferenceCounter<dyn Fn(Vec<T>) -> T + Send + Sync>;

#[cfg(not(feature = "arc"))]
pub(crate) type SharedFunction<T> = ReferenceCounter<dyn Fn(Vec<T>) -> T>;
