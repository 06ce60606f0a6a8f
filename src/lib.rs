//! Parser, evaluator and tree printer for a small digit-arithmetic grammar.
//!
//! `+` and `-` bind tighter than `*` and `/`, every operator is
//! right-associative and `{ }` groups a sub-expression:
//!
//! ```
//! let tree = exprtree::parse("2+3*4").unwrap();
//! assert_eq!(exprtree::eval::evaluate(&tree).unwrap(), 20);
//! ```

use std::{borrow::Cow, fs, io, path::Path};

use tracing::debug;

pub mod ast;
pub mod config;
pub mod errors;
pub mod eval;
pub mod frontend;
pub mod render;
pub mod report;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

use crate::ast::Node;
use crate::errors::{ExprError, ExprResult};
use crate::frontend::Parser;

/// Load an expression file. Bytes that are not valid UTF-8 are replaced with
/// U+FFFD, so they only fail the parse if the expression actually reaches them.
pub fn read(path: &Path) -> ExprResult<String> {
    let bytes = fs::read(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => ExprError::InputNotFound {
            path: path.to_path_buf(),
        },
        _ => ExprError::Io(err),
    })?;
    let contents = match String::from_utf8_lossy(&bytes) {
        Cow::Borrowed(text) => text.to_string(),
        Cow::Owned(text) => {
            debug!(path = %path.display(), "input is not valid UTF-8, replacing undecodable bytes");
            text
        }
    };
    debug!(path = %path.display(), bytes = bytes.len(), "read input");
    Ok(contents)
}

pub fn parse(source: &str) -> ExprResult<Node> {
    Parser::new(source).parse()
}

pub fn parse_with_depth(source: &str, max_depth: usize) -> ExprResult<Node> {
    Parser::with_max_depth(source, max_depth).parse()
}
