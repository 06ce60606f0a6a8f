use std::fmt;

/// Binary operators of the grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    pub fn symbol(&self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
        }
    }

}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A decimal digit, always in `0..=9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Digit(u8);

impl Digit {
    pub fn new(value: u8) -> Option<Self> {
        (value <= 9).then_some(Digit(value))
    }

    pub fn from_char(ch: char) -> Option<Self> {
        ch.to_digit(10).map(|d| Digit(d as u8))
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    pub fn as_char(&self) -> char {
        (b'0' + self.0) as char
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Expression tree node.
///
/// A node is either a digit leaf or an operator with exactly two owned
/// children; there is no one-child shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Literal(Digit),
    Binary {
        op: Operator,
        left: Box<Node>,
        right: Box<Node>,
    },
}

impl Node {
    pub fn literal(digit: Digit) -> Self {
        Node::Literal(digit)
    }

    pub fn binary(op: Operator, left: Node, right: Node) -> Self {
        Node::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Character shown for this node: the digit or the operator symbol.
    pub fn label(&self) -> char {
        match self {
            Node::Literal(d) => d.as_char(),
            Node::Binary { op, .. } => op.symbol(),
        }
    }

    pub fn left(&self) -> Option<&Node> {
        match self {
            Node::Literal(_) => None,
            Node::Binary { left, .. } => Some(left),
        }
    }

    pub fn right(&self) -> Option<&Node> {
        match self {
            Node::Literal(_) => None,
            Node::Binary { right, .. } => Some(right),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Literal(_))
    }

    pub fn digit(&self) -> Option<u8> {
        match self {
            Node::Literal(d) => Some(d.value()),
            Node::Binary { .. } => None,
        }
    }

    pub fn operator(&self) -> Option<Operator> {
        match self {
            Node::Literal(_) => None,
            Node::Binary { op, .. } => Some(*op),
        }
    }
}
