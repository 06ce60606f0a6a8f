use std::fmt::{self, Write};

use crate::ast::Node;
use crate::config::render::{BRANCH, GAP, LAST_BRANCH, STRAND};

/// Box-drawing diagram of a tree.
///
/// The root label goes on the first line. Below every operator its right
/// child is drawn first with `├── `, then its left child with `└── `. A
/// vertical strand continues past the right child only while that child has
/// children of its own. Leaves add no lines beyond their own label.
///
/// ```text
/// *
/// ├── 4
/// └── +
///     ├── 3
///     └── 2
/// ```
pub struct TreeDiagram<'a>(pub &'a Node);

impl fmt::Display for TreeDiagram<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.0.label())?;
        write_subtree(f, self.0, &mut String::new())
    }
}

fn write_subtree<W: Write>(out: &mut W, node: &Node, prefix: &mut String) -> fmt::Result {
    let (Some(left), Some(right)) = (node.left(), node.right()) else {
        return Ok(());
    };
    let base = prefix.len();

    writeln!(out, "{}{}{}", prefix, BRANCH, right.label())?;
    prefix.push_str(if right.is_leaf() { GAP } else { STRAND });
    write_subtree(out, right, prefix)?;
    prefix.truncate(base);

    writeln!(out, "{}{}{}", prefix, LAST_BRANCH, left.label())?;
    prefix.push_str(GAP);
    write_subtree(out, left, prefix)?;
    prefix.truncate(base);
    Ok(())
}

pub fn render_tree(root: &Node) -> String {
    TreeDiagram(root).to_string()
}
