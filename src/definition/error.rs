use std::{io, path::PathBuf};

use thiserror::Error;

use crate::support::constraint::ConstraintError;

/// Errors that abort parsing of a definition file.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DefinitionError {
    /// The definition file could not be read.
    #[error("failed to read definition file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The marker pattern built from the prefix did not compile.
    ///
    /// A validated and escaped prefix always forms a valid pattern; this is
    /// only reached if the regex engine refuses it, e.g. over its size limit.
    #[error("invalid marker pattern for prefix `{prefix}`")]
    Pattern {
        prefix: String,
        #[source]
        source: regex::Error,
    },
}

/// A model definition whose first line does not yield a model name.
///
/// Malformed blocks are reported and skipped; they never abort a run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed model definition #{ordinal} at line {line}: {reason}")]
pub struct MalformedBlock {
    /// Position among the retained blocks, starting at 1.
    pub ordinal: usize,

    /// Line in the definition file where the block starts.
    pub line: usize,

    /// Full text of the offending block.
    pub text: String,

    pub reason: MalformedReason,
}

/// Why a definition block did not yield a model name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum MalformedReason {
    /// The first line has no `c_<prefix><name>` marker.
    #[error("first line has no `{marker}<name>` marker")]
    MissingMarker { marker: String },

    /// The marker matched but the captured name was rejected.
    #[error("invalid model name")]
    InvalidName(#[source] ConstraintError),
}
