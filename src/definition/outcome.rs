use std::collections::HashSet;

use super::{MalformedBlock, ModelName};

/// Result of parsing a single definition block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedBlock {
    Model(ModelName),
    Malformed(MalformedBlock),
}

/// Per-block parse results of a definition file, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseOutcome {
    blocks: Vec<ParsedBlock>,
}

impl ParseOutcome {
    pub(super) fn new(blocks: Vec<ParsedBlock>) -> Self {
        Self { blocks }
    }

    /// All blocks, well-formed and malformed, in file order.
    #[must_use]
    pub fn blocks(&self) -> &[ParsedBlock] {
        &self.blocks
    }

    /// Names of the well-formed definitions, in file order.
    pub fn model_names(&self) -> impl Iterator<Item = &ModelName> {
        self.blocks.iter().filter_map(|block| match block {
            ParsedBlock::Model(name) => Some(name),
            ParsedBlock::Malformed(_) => None,
        })
    }

    /// Consumes the outcome and returns the model names, in file order.
    #[must_use]
    pub fn into_model_names(self) -> Vec<ModelName> {
        self.blocks
            .into_iter()
            .filter_map(|block| match block {
                ParsedBlock::Model(name) => Some(name),
                ParsedBlock::Malformed(_) => None,
            })
            .collect()
    }

    /// Blocks that were reported and skipped.
    pub fn malformed(&self) -> impl Iterator<Item = &MalformedBlock> {
        self.blocks.iter().filter_map(|block| match block {
            ParsedBlock::Malformed(malformed) => Some(malformed),
            ParsedBlock::Model(_) => None,
        })
    }

    /// Names defined more than once, each listed once in order of first repeat.
    ///
    /// Duplicates are still emitted; each yields another wrapper with the
    /// same symbol.
    #[must_use]
    pub fn duplicate_names(&self) -> Vec<&ModelName> {
        let mut seen = HashSet::new();
        let mut reported = HashSet::new();

        self.model_names()
            .filter(|name| !seen.insert(*name) && reported.insert(*name))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::definition::MalformedReason;

    fn model(name: &str) -> ParsedBlock {
        ParsedBlock::Model(ModelName::new(name).unwrap())
    }

    fn malformed(ordinal: usize) -> ParsedBlock {
        ParsedBlock::Malformed(MalformedBlock {
            ordinal,
            line: 1,
            text: "no marker".to_string(),
            reason: MalformedReason::MissingMarker {
                marker: "c_lmod".to_string(),
            },
        })
    }

    #[test]
    fn separates_models_from_malformed_blocks() {
        let outcome = ParseOutcome::new(vec![model("foo"), malformed(2), model("bar")]);

        let names: Vec<_> = outcome.model_names().map(ModelName::as_str).collect();
        assert_eq!(names, vec!["foo", "bar"]);
        assert_eq!(outcome.malformed().count(), 1);
        assert_eq!(outcome.blocks().len(), 3);

        let owned = outcome.into_model_names();
        assert_eq!(owned.len(), 2);
    }

    #[test]
    fn reports_each_duplicate_once() {
        let outcome = ParseOutcome::new(vec![
            model("a"),
            model("b"),
            model("a"),
            model("c"),
            model("a"),
            model("b"),
        ]);

        let duplicates: Vec<_> = outcome
            .duplicate_names()
            .into_iter()
            .map(ModelName::as_str)
            .collect();
        assert_eq!(duplicates, vec!["a", "b"]);
    }

    #[test]
    fn unique_names_have_no_duplicates() {
        let outcome = ParseOutcome::new(vec![model("a"), model("b")]);
        assert!(outcome.duplicate_names().is_empty());
    }
}
