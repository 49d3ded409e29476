use std::fmt;

use crate::support::constraint::{Constrained, ConstraintError, Identifier};

/// Name of a local model, as captured from its definition's marker.
///
/// The name keys the dispatcher lookup and is appended to the prefix to
/// form the generated wrapper symbol.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ModelName(Constrained<String, Identifier>);

impl ModelName {
    /// Creates a model name.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if `name` is empty or is not made of
    /// word characters.
    pub fn new(name: impl Into<String>) -> Result<Self, ConstraintError> {
        Identifier::new(name).map(Self)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_inner()
    }
}

impl fmt::Display for ModelName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
