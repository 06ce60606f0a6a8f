use crate::ast::{Digit, Node, NodeVisitor, Operator};

/// Shape summary of a parsed tree, reported by the driver in verbose mode.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TreeStats {
    pub nodes: usize,
    pub leaves: usize,
    pub depth: usize,
}

impl TreeStats {
    pub fn of(root: &Node) -> Self {
        let mut stats = TreeStats::default();
        stats.depth = root.accept(&mut stats);
        stats
    }
}

// Returns the depth of the visited subtree; counts accumulate on self.
impl NodeVisitor for TreeStats {
    type Output = usize;

    fn visit_literal(&mut self, _digit: Digit) -> usize {
        self.nodes += 1;
        self.leaves += 1;
        1
    }

    fn visit_binary(&mut self, _op: Operator, left: &Node, right: &Node) -> usize {
        self.nodes += 1;
        let left_depth = left.accept(self);
        let right_depth = right.accept(self);
        1 + left_depth.max(right_depth)
    }
}
