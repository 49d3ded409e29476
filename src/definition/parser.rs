use std::{borrow::Cow, fs, path::Path};

use regex::Regex;
use tracing::{debug, info, warn};

use crate::config::Prefix;

use super::{
    DefinitionBlock, DefinitionError, MalformedBlock, MalformedReason, ModelName, ParseOutcome,
    ParsedBlock, split_blocks,
};

/// Extracts model names from `lmodel.dat` style definitions.
///
/// A definition names its model through a `c_<prefix><name>` marker on its
/// first line, the C entry point XSPEC expects for the model. When a line
/// carries several markers the last one wins.
#[derive(Debug, Clone)]
pub struct DefinitionParser {
    marker: String,
    pattern: Regex,
}

impl DefinitionParser {
    /// Creates a parser for definitions using `prefix`.
    ///
    /// # Errors
    ///
    /// Returns [`DefinitionError::Pattern`] if the marker pattern fails to compile.
    pub fn new(prefix: &Prefix) -> Result<Self, DefinitionError> {
        let marker = format!("c_{prefix}");
        let pattern = Regex::new(&format!(r"^.*{}(\w+)", regex::escape(&marker))).map_err(
            |source| DefinitionError::Pattern {
                prefix: prefix.to_string(),
                source,
            },
        )?;

        Ok(Self { marker, pattern })
    }

    /// The literal marker preceding each model name, e.g. `c_lmod`.
    #[must_use]
    pub fn marker(&self) -> &str {
        &self.marker
    }

    /// Extracts the model name from a block's first line.
    ///
    /// # Errors
    ///
    /// Returns a [`MalformedBlock`] if the first line has no marker or the
    /// captured name is not a valid identifier.
    pub fn parse_block(&self, block: &DefinitionBlock<'_>) -> Result<ModelName, MalformedBlock> {
        let captured = self
            .pattern
            .captures(block.first_line())
            .and_then(|captures| captures.get(1))
            .map(|name| name.as_str());

        let Some(captured) = captured else {
            return Err(block.malformed(MalformedReason::MissingMarker {
                marker: self.marker.clone(),
            }));
        };

        ModelName::new(captured).map_err(|err| block.malformed(MalformedReason::InvalidName(err)))
    }

    /// Parses every block of `content`, in order.
    ///
    /// Malformed blocks are recorded in the outcome and parsing continues.
    #[must_use]
    pub fn parse_str(&self, content: &str) -> ParseOutcome {
        let blocks = split_blocks(content)
            .iter()
            .map(|block| {
                debug!(ordinal = block.ordinal(), line = block.line(), "parsing block");
                match self.parse_block(block) {
                    Ok(name) => {
                        info!(model = %name, "parsed model definition");
                        ParsedBlock::Model(name)
                    }
                    Err(malformed) => {
                        warn!(
                            ordinal = malformed.ordinal,
                            line = malformed.line,
                            reason = %malformed.reason,
                            "skipping malformed model definition"
                        );
                        ParsedBlock::Malformed(malformed)
                    }
                }
            })
            .collect();

        ParseOutcome::new(blocks)
    }

    /// Reads and parses a definition file.
    ///
    /// Line endings are normalized to `\n` before splitting.
    ///
    /// # Errors
    ///
    /// Returns [`DefinitionError::Read`] if the file cannot be read as UTF-8 text.
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<ParseOutcome, DefinitionError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| DefinitionError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        debug!(path = %path.display(), bytes = content.len(), "read definition file");
        Ok(self.parse_str(&normalize_newlines(&content)))
    }
}

/// Converts `\r\n` and lone `\r` line endings to `\n`.
fn normalize_newlines(content: &str) -> Cow<'_, str> {
    if content.contains('\r') {
        Cow::Owned(content.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Cow::Borrowed(content)
    }
}
