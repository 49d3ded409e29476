use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors that can occur while writing the generated wrapper file.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum EmitError {
    /// The output file could not be created or written.
    ///
    /// The file may be left partially written.
    #[error("failed to write wrapper file {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
