use std::sync::LazyLock;

use regex::Regex;

use super::{Constrained, Constraint, ConstraintError};

/// One or more Unicode word characters, the class captured by `\w+`.
static IDENTIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\w+$").expect("identifier pattern is valid"));

/// Marker type enforcing that a string is a word-character identifier.
///
/// This is the same character class the definition parser captures after
/// the `c_<prefix>` marker, so every captured name satisfies it.
///
/// # Examples
///
/// ```
/// use lmod_wrapper::support::constraint::Identifier;
///
/// assert!(Identifier::new("relxilllp").is_ok());
/// assert!(Identifier::new("rel_conv2").is_ok());
///
/// assert!(Identifier::new("").is_err());
/// assert!(Identifier::new("rel-xill").is_err());
/// assert!(Identifier::new("two words").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Identifier;

impl Identifier {
    /// Constructs a [`Constrained<String, Identifier>`] if the value is an identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintError::Empty`] for the empty string and
    /// [`ConstraintError::NotAnIdentifier`] if any character is not a word character.
    pub fn new(
        value: impl Into<String>,
    ) -> Result<Constrained<String, Identifier>, ConstraintError> {
        Constrained::<String, Identifier>::new(value.into())
    }
}

impl<T: AsRef<str>> Constraint<T> for Identifier {
    fn check(value: &T) -> Result<(), ConstraintError> {
        let value = value.as_ref();
        if value.is_empty() {
            Err(ConstraintError::Empty)
        } else if IDENTIFIER.is_match(value) {
            Ok(())
        } else {
            Err(ConstraintError::NotAnIdentifier)
        }
    }
}
