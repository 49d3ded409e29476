//! # lmod-wrapper
//!
//! Generates the C++ glue between XSPEC and a package of local models.
//!
//! XSPEC loads a local model by calling a C function whose name is given in
//! the model definition file (`lmodel.dat`). This crate reads that file,
//! extracts each model's name, and writes one forwarding wrapper per model
//! into a single source file for the downstream build.
//!
//! ## Crate layout
//!
//! - [`definition`]: Splits the definition file into blocks and extracts model names.
//! - [`wrapper`]: Renders and writes the wrapper source file.
//! - [`config`]: The prefix, dispatcher and enumeration names shared by both.
//! - [`support`]: Constrained identifiers and tracing setup.
//!
//! ## Example
//!
//! ```
//! use lmod_wrapper::{config::GeneratorConfig, definition::DefinitionParser, wrapper::WrapperEmitter};
//!
//! let config = GeneratorConfig::default();
//! let parser = DefinitionParser::new(&config.prefix).unwrap();
//!
//! let outcome = parser.parse_str("relxill 11 0. 1.e20 c_lmodrelxill add 0\n\nrelline 10 0. 1.e20 c_lmodrelline add 0");
//! let names = outcome.into_model_names();
//!
//! let source = WrapperEmitter::new(&config).render(&names);
//! assert!(source.contains("extern \"C\" void lmodrelxill("));
//! assert!(source.contains("extern \"C\" void lmodrelline("));
//! ```

pub mod config;
pub mod definition;
pub mod support;
pub mod wrapper;
