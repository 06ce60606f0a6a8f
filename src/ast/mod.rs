// Abstract syntax tree for the expression grammar:
//
// <expression> ::= <factor> * <expression> | <factor> / <expression> | <factor>
// <factor>     ::= <term> + <factor> | <term> - <factor> | <term>
// <term>       ::= { <expression> } | <literal>
// <literal>    ::= 0|1|2|3|4|5|6|7|8|9

mod node;
mod stats;
mod visitor;

pub use node::{Digit, Node, Operator};
pub use stats::TreeStats;
pub use visitor::NodeVisitor;
