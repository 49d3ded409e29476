//! Wrapper emitter.
//!
//! XSPEC calls a local model through a C function named `<prefix><name>`
//! with a fixed signature. The generated file holds the [`HEADER`] and one
//! such function per model, each forwarding into the generic dispatcher
//! with the model name as lookup key:
//!
//! ```c
//! extern "C" void lmodrelxill(const double *energy, int Nflux, ...)
//! {
//!     xspec_C_wrapper_eval_model(ModelName::relxill, parameter, flux, Nflux, energy);
//! }
//! ```
//!
//! Neither the dispatcher nor the `ModelName` enumerators are checked here;
//! a missing one surfaces when the generated file is compiled.

mod emitter;
mod error;
mod function;
mod header;

pub use emitter::WrapperEmitter;
pub use error::EmitError;
pub use function::{FORWARDED, PARAMETERS, WrapperFunction};
pub use header::HEADER;

use std::path::Path;

use crate::{config::GeneratorConfig, definition::ModelName};

/// Writes the wrapper file for `names` to `path`.
///
/// This is a convenience wrapper around [`WrapperEmitter::emit`].
///
/// # Errors
///
/// Returns [`EmitError::Write`] if the file cannot be created or written.
pub fn emit_wrappers(
    path: impl AsRef<Path>,
    names: &[ModelName],
    config: &GeneratorConfig,
) -> Result<(), EmitError> {
    WrapperEmitter::new(config).emit(path, names)
}
