use std::fmt;
use std::path::Path;
use std::time::Instant;

use tracing::debug;

use crate::ast::TreeStats;
use crate::config::parser::MAX_NESTING_DEPTH;
use crate::errors::{ExprError, ExprResult};
use crate::eval::evaluate;
use crate::render::render_tree;
use crate::{parse_with_depth, read};

#[derive(Debug, Clone, Copy)]
pub struct Options {
    pub max_depth: usize,
    pub tree: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            max_depth: MAX_NESTING_DEPTH,
            tree: true,
        }
    }
}

/// Everything the driver prints to stdout on success: the diagram, an empty
/// line, then the value.
#[derive(Debug)]
pub struct Report {
    pub diagram: Option<String>,
    pub value: i64,
}

impl Report {
    /// Parse, render and evaluate. Any failure discards the whole report.
    pub fn from_source(source: &str, options: Options) -> ExprResult<Self> {
        let start = Instant::now();
        let tree = parse_with_depth(source, options.max_depth)?;
        let stats = TreeStats::of(&tree);
        debug!(
            nodes = stats.nodes,
            leaves = stats.leaves,
            depth = stats.depth,
            "parsed expression"
        );

        let diagram = options.tree.then(|| render_tree(&tree));
        let value = evaluate(&tree)?;
        debug!(value, elapsed = ?start.elapsed(), "evaluated expression");

        Ok(Report { diagram, value })
    }

    pub fn from_file(path: &Path, options: Options) -> ExprResult<Self> {
        let source = read(path)?;
        Self::from_source(&source, options)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(diagram) = &self.diagram {
            writeln!(f, "{}", diagram)?;
        }
        writeln!(f, "{}", self.value)
    }
}

/// The single stderr line printed when the pipeline fails.
pub struct Failure<'a>(pub &'a ExprError);

impl fmt::Display for Failure<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error [{}]: {}", self.0.kind(), self.0)
    }
}
