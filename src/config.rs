//! Generator configuration.
//!
//! The defaults reproduce the RELXILL build: local models are looked up with
//! the `lmod` prefix and every wrapper forwards into
//! `xspec_C_wrapper_eval_model` keyed by a `ModelName` enumerator.

use std::fmt;

use crate::support::constraint::{Constrained, ConstraintError, Identifier};

/// Prefix shared by the `c_<prefix><name>` marker and the generated symbols.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Prefix(Constrained<String, Identifier>);

impl Prefix {
    /// Prefix used by the RELXILL `lmodel.dat`.
    pub const DEFAULT: &'static str = "lmod";

    /// Creates a prefix.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if `prefix` is empty or contains
    /// non-word characters.
    pub fn new(prefix: impl Into<String>) -> Result<Self, ConstraintError> {
        Identifier::new(prefix).map(Self)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_inner()
    }
}

impl Default for Prefix {
    fn default() -> Self {
        Self(Constrained::new_unchecked(Self::DEFAULT.to_string()))
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configuration shared by the definition parser and the wrapper emitter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Local-model prefix, both matched in definitions and prepended to symbols.
    pub prefix: Prefix,

    /// Generic evaluation entry point each wrapper forwards into.
    pub dispatcher: String,

    /// Enumeration that qualifies the model-name lookup key.
    pub name_enum: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            prefix: Prefix::default(),
            dispatcher: "xspec_C_wrapper_eval_model".to_string(),
            name_enum: "ModelName".to_string(),
        }
    }
}
