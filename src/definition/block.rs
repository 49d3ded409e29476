use super::error::{MalformedBlock, MalformedReason};

/// Separator between consecutive model definitions.
const DELIMITER: &str = "\n\n";

/// One blank-line delimited model definition, borrowed from the file content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DefinitionBlock<'a> {
    ordinal: usize,
    line: usize,
    text: &'a str,
}

impl<'a> DefinitionBlock<'a> {
    /// Position among the retained blocks, starting at 1.
    #[must_use]
    pub fn ordinal(&self) -> usize {
        self.ordinal
    }

    /// Line in the definition file where the block starts, starting at 1.
    #[must_use]
    pub fn line(&self) -> usize {
        self.line
    }

    #[must_use]
    pub fn text(&self) -> &'a str {
        self.text
    }

    /// Text up to the first newline; the only part that names the model.
    #[must_use]
    pub fn first_line(&self) -> &'a str {
        self.text
            .split_once('\n')
            .map_or(self.text, |(first, _)| first)
    }

    pub(super) fn malformed(&self, reason: MalformedReason) -> MalformedBlock {
        MalformedBlock {
            ordinal: self.ordinal,
            line: self.line,
            text: self.text.to_string(),
            reason,
        }
    }
}

/// Splits definition file content into model definition blocks.
///
/// Chunks between blank-line delimiters that hold at most one character, or only
/// whitespace, are split noise and are dropped. Retained blocks keep their
/// file order.
#[must_use]
pub fn split_blocks(content: &str) -> Vec<DefinitionBlock<'_>> {
    content
        .split(DELIMITER)
        .scan(1, |line, chunk| {
            let start = *line;
            *line += chunk.matches('\n').count() + DELIMITER.len();
            Some((start, chunk))
        })
        .filter(|(_, chunk)| !is_noise(chunk))
        .enumerate()
        .map(|(index, (line, text))| DefinitionBlock {
            ordinal: index + 1,
            line,
            text,
        })
        .collect()
}

fn is_noise(chunk: &str) -> bool {
    chunk.chars().nth(1).is_none() || chunk.trim().is_empty()
}
