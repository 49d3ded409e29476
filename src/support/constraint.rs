//! Construction-time constraints on identifier strings.
//!
//! Model names and the local-model prefix end up spliced into generated C++
//! source, so both are validated once, when they are built, and carried as
//! constrained values afterwards.
//!
//! The provided [`Identifier`] marker accepts one or more word characters
//! (`\w+`). Each marker is used with the generic [`Constrained<T, C>`] wrapper,
//! where `C` is the marker type implementing [`Constraint<T>`].
//!
//! # Extending
//!
//! You can define custom invariants by implementing [`Constraint<T>`]
//! for your own zero-sized marker types.

mod identifier;

use std::{fmt, marker::PhantomData};

use thiserror::Error;

pub use identifier::Identifier;

/// A trait for enforcing invariants at construction time.
///
/// Implement this trait for any marker type representing a constraint,
/// such as [`Identifier`].
pub trait Constraint<T> {
    /// Checks that the given value satisfies this constraint.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if the value does not satisfy the constraint.
    fn check(value: &T) -> Result<(), ConstraintError>;
}

/// An error returned when a [`Constraint`] is violated.
///
/// This enum is marked `#[non_exhaustive]` and may include additional variants
/// in future releases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConstraintError {
    #[error("value must not be empty")]
    Empty,
    #[error("value must consist of word characters only")]
    NotAnIdentifier,
}

/// A wrapper enforcing a constraint at construction time.
///
/// # Example
///
/// ```
/// use lmod_wrapper::support::constraint::{Constrained, Identifier};
///
/// let name = Constrained::<String, Identifier>::new("relxill".to_string()).unwrap();
/// assert_eq!(name.as_inner(), "relxill");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Constrained<T, C: Constraint<T>> {
    value: T,
    _marker: PhantomData<C>,
}

impl<T, C: Constraint<T>> Constrained<T, C> {
    /// Constructs a new constrained value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value does not satisfy the constraint.
    pub fn new(value: T) -> Result<Self, ConstraintError> {
        C::check(&value)?;
        Ok(Self {
            value,
            _marker: PhantomData,
        })
    }

    /// Constructs a constrained value without validation.
    ///
    /// # Warning
    ///
    /// The caller must ensure the value satisfies the constraint.
    /// Violating this invariant lets invalid identifiers into generated source.
    #[must_use]
    pub fn new_unchecked(value: T) -> Self {
        Self {
            value,
            _marker: PhantomData,
        }
    }

    /// Returns a reference to the inner value.
    pub fn as_inner(&self) -> &T {
        &self.value
    }

    /// Consumes the wrapper and returns the inner value.
    pub fn into_inner(self) -> T {
        self.value
    }
}

/// Returns a reference to the inner unconstrained value.
impl<T, C: Constraint<T>> AsRef<T> for Constrained<T, C> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}

impl<T: fmt::Display, C: Constraint<T>> fmt::Display for Constrained<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}
