use crate::ast::{Digit, Node, NodeVisitor, Operator};
use crate::errors::{ExprError, ExprResult};

/// Computes the integer value of a tree, left subtree first.
///
/// Division truncates toward zero. A zero divisor and any result outside the
/// `i64` range are reported as errors instead of producing a value.
#[derive(Debug, Default)]
pub struct Evaluator;

impl Evaluator {
    pub fn new() -> Self {
        Self
    }

    pub fn evaluate(&mut self, root: &Node) -> ExprResult<i64> {
        root.accept(self)
    }

    fn apply(op: Operator, left: i64, right: i64) -> ExprResult<i64> {
        let value = match op {
            Operator::Add => left.checked_add(right),
            Operator::Sub => left.checked_sub(right),
            Operator::Mul => left.checked_mul(right),
            Operator::Div => {
                if right == 0 {
                    return Err(ExprError::DivisionByZero);
                }
                left.checked_div(right)
            }
        };
        value.ok_or(ExprError::ArithmeticOverflow { op })
    }
}

impl NodeVisitor for Evaluator {
    type Output = ExprResult<i64>;

    fn visit_literal(&mut self, digit: Digit) -> ExprResult<i64> {
        Ok(i64::from(digit.value()))
    }

    fn visit_binary(&mut self, op: Operator, left: &Node, right: &Node) -> ExprResult<i64> {
        let left = left.accept(self)?;
        let right = right.accept(self)?;
        Self::apply(op, left, right)
    }
}

pub fn evaluate(root: &Node) -> ExprResult<i64> {
    Evaluator::new().evaluate(root)
}
