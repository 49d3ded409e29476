use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
};

use tracing::debug;

use crate::{config::GeneratorConfig, definition::ModelName};

use super::{EmitError, HEADER, WrapperFunction};

/// Renders the wrapper source file for a list of model names.
#[derive(Debug, Clone, Copy)]
pub struct WrapperEmitter<'a> {
    config: &'a GeneratorConfig,
}

impl<'a> WrapperEmitter<'a> {
    #[must_use]
    pub fn new(config: &'a GeneratorConfig) -> Self {
        Self { config }
    }

    /// Wrapper functions for `names`, in order.
    pub fn functions<'n>(
        &self,
        names: &'n [ModelName],
    ) -> impl Iterator<Item = WrapperFunction<'n>>
    where
        'a: 'n,
    {
        let config = self.config;
        names.iter().map(move |name| WrapperFunction::new(config, name))
    }

    /// Renders the header followed by one wrapper per name.
    #[must_use]
    pub fn render(&self, names: &[ModelName]) -> String {
        self.functions(names)
            .fold(String::from(HEADER), |mut source, function| {
                source.push_str(&function.to_string());
                source
            })
    }

    /// Writes the rendered source to `out`.
    ///
    /// # Errors
    ///
    /// Returns any I/O error raised by `out`.
    pub fn write_to<W: Write>(&self, out: &mut W, names: &[ModelName]) -> io::Result<()> {
        out.write_all(HEADER.as_bytes())?;
        for function in self.functions(names) {
            write!(out, "{function}")?;
        }
        out.flush()
    }

    /// Creates or truncates `path` and writes the rendered source to it.
    ///
    /// # Errors
    ///
    /// Returns [`EmitError::Write`] if the file cannot be created or written.
    pub fn emit(&self, path: impl AsRef<Path>, names: &[ModelName]) -> Result<(), EmitError> {
        let path = path.as_ref();
        let write_error = |source| EmitError::Write {
            path: path.to_path_buf(),
            source,
        };

        let file = File::create(path).map_err(write_error)?;
        self.write_to(&mut BufWriter::new(file), names)
            .map_err(write_error)?;

        debug!(path = %path.display(), functions = names.len(), "wrote wrapper file");
        Ok(())
    }
}
