//! Definition parser.
//!
//! An XSPEC model definition file (`lmodel.dat`) lists one block per local
//! model, separated by a blank line. The first line of each block names the
//! C entry point of the model as `c_<prefix><name>`; everything after it
//! (parameter rows, units, limits) is of no interest to the wrapper
//! generator and is left untouched.
//!
//! Parsing is best-effort. A block whose first line has no marker becomes a
//! [`MalformedBlock`] in the [`ParseOutcome`] and the remaining blocks are
//! still parsed. Only failing to read the file is fatal.

mod block;
mod error;
mod model_name;
mod outcome;
mod parser;

pub use block::{DefinitionBlock, split_blocks};
pub use error::{DefinitionError, MalformedBlock, MalformedReason};
pub use model_name::ModelName;
pub use outcome::{ParseOutcome, ParsedBlock};
pub use parser::DefinitionParser;

use std::path::Path;

use crate::config::Prefix;

/// Parses the definition file at `path` using `prefix`.
///
/// This is a convenience wrapper around [`DefinitionParser::parse_file`].
///
/// # Errors
///
/// Returns a [`DefinitionError`] if the file cannot be read.
pub fn parse_definitions(
    path: impl AsRef<Path>,
    prefix: &Prefix,
) -> Result<ParseOutcome, DefinitionError> {
    DefinitionParser::new(prefix)?.parse_file(path)
}
