//! `create-lmod-wrapper`: builds the XSPEC local-model wrapper file.
//!
//! ```text
//! create-lmod-wrapper <lmodel.dat> <xspec_wrapper.cpp>
//! ```

use std::{error::Error as _, path::PathBuf, process::ExitCode};

use clap::Parser;
use lmod_wrapper::{
    config::GeneratorConfig,
    definition::{DefinitionError, ParseOutcome, ParsedBlock, parse_definitions},
    support::logging::init_tracing,
    wrapper::{EmitError, emit_wrappers},
};
use thiserror::Error;
use tracing::{error, info, warn};

const USAGE: &str = "
    Usage: create-lmod-wrapper [lmodel.dat] [xspec_wrapper.cpp]
        ";

#[derive(Debug, Parser)]
#[command(name = "create-lmod-wrapper")]
#[command(about = "Generate XSPEC local-model wrappers from a model definition file")]
#[command(disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    /// Model definition file (lmodel.dat)
    input: PathBuf,

    /// Wrapper source file to create or overwrite
    output: PathBuf,
}

#[derive(Debug, Error)]
enum RunError {
    #[error(transparent)]
    Definition(#[from] DefinitionError),

    #[error(transparent)]
    Emit(#[from] EmitError),
}

fn main() -> ExitCode {
    init_tracing();

    let Ok(cli) = Cli::try_parse() else {
        println!("{USAGE}");
        return ExitCode::FAILURE;
    };

    match run(&cli, &GeneratorConfig::default()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "wrapper generation failed");
            eprintln!("Error: {err}");

            let mut source = err.source();
            while let Some(cause) = source {
                eprintln!("  caused by: {cause}");
                source = cause.source();
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli, config: &GeneratorConfig) -> Result<(), RunError> {
    println!(
        "\n *** creating {} by parsing {}:",
        cli.output.display(),
        cli.input.display()
    );

    let outcome = parse_definitions(&cli.input, &config.prefix)?;
    report(&outcome);

    let names = outcome.into_model_names();
    emit_wrappers(&cli.output, &names, config)?;

    info!(
        output = %cli.output.display(),
        models = names.len(),
        "generated wrapper file"
    );
    Ok(())
}

/// Prints one progress line per model and the text of each malformed block.
fn report(outcome: &ParseOutcome) {
    for block in outcome.blocks() {
        match block {
            ParsedBlock::Model(name) => println!("    - {name}"),
            ParsedBlock::Malformed(malformed) => {
                println!(" *** error ***: could not parse the following model definition");
                println!("{}", malformed.text);
            }
        }
    }

    for name in outcome.duplicate_names() {
        warn!(model = %name, "model defined more than once; its wrapper will be duplicated");
    }
}
