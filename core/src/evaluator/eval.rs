//! Core evaluation logic.

use crate::parser::{BinaryOp, Expr};

use super::operators::eval_binary_float;

/// Evaluate an expression tree to a double.
///
/// Operator chains build left-deep trees, so the left spine is walked with a
/// loop and folded back up. Only right operands recurse, and those are nested
/// no deeper than the groups in the source.
pub fn evaluate(expr: &Expr<'_>) -> f64 {
    let mut pending: Vec<(BinaryOp, &Expr<'_>)> = Vec::new();
    let mut node = expr;
    let mut value = loop {
        match node {
            Expr::Number(value) => break *value,
            Expr::Binary { op, left, right } => {
                pending.push((*op, *right));
                node = *left;
            }
        }
    };

    while let Some((op, right)) = pending.pop() {
        value = eval_binary_float(op, value, evaluate(right));
    }
    value
}
