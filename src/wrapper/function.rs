use std::fmt;

use crate::{config::GeneratorConfig, definition::ModelName};

/// Parameter list of XSPEC's C local-model calling convention.
pub const PARAMETERS: &str = "const double *energy, int Nflux, const double *parameter, \
int spectrum, double *flux, double *fluxError, const char *init";

/// Arguments forwarded to the dispatcher, after the model-name key.
///
/// `spectrum`, `fluxError` and `init` are accepted but not forwarded.
pub const FORWARDED: &str = "parameter, flux, Nflux, energy";

/// A rendered `extern "C"` wrapper for one local model.
///
/// Rendering is a pure function of the configuration and the model name.
#[derive(Debug, Clone, Copy)]
pub struct WrapperFunction<'a> {
    config: &'a GeneratorConfig,
    name: &'a ModelName,
}

impl<'a> WrapperFunction<'a> {
    #[must_use]
    pub fn new(config: &'a GeneratorConfig, name: &'a ModelName) -> Self {
        Self { config, name }
    }

    /// Exported symbol: the prefix followed directly by the model name.
    #[must_use]
    pub fn symbol(&self) -> String {
        format!("{}{}", self.config.prefix, self.name)
    }
}

impl fmt::Display for WrapperFunction<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let GeneratorConfig {
            prefix,
            dispatcher,
            name_enum,
        } = self.config;
        let name = self.name;

        write!(
            f,
            "\nextern \"C\" void {prefix}{name}({PARAMETERS}) \n\
             {{\n    \
             {dispatcher}({name_enum}::{name}, {FORWARDED});\n\
             }} \n"
        )
    }
}
