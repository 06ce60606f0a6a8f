use crate::ast::{Digit, Node, Operator};

/// Walks a tree one node shape at a time. Implementors decide whether and in
/// which order to descend into children.
pub trait NodeVisitor {
    type Output;

    fn visit_literal(&mut self, digit: Digit) -> Self::Output;
    fn visit_binary(&mut self, op: Operator, left: &Node, right: &Node) -> Self::Output;
}

impl Node {
    pub fn accept<V: NodeVisitor>(&self, visitor: &mut V) -> V::Output {
        match self {
            Node::Literal(digit) => visitor.visit_literal(*digit),
            Node::Binary { op, left, right } => visitor.visit_binary(*op, left, right),
        }
    }
}
