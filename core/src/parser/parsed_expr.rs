use core::fmt;

use crate::parser::BinaryOp;

/// A parsed expression together with the copy of its source that lives in the
/// same region.
#[derive(Debug, Clone, Copy)]
pub struct ParsedExpr<'r> {
    pub source: &'r str,
    pub expr: &'r Expr<'r>,
}

/// Expression tree node. Children are borrowed from the region that holds the
/// whole tree.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Expr<'r> {
    Number(f64),
    Binary {
        op: BinaryOp,
        left: &'r Expr<'r>,
        right: &'r Expr<'r>,
    },
}

impl<'r> Expr<'r> {
    pub fn as_ptr(&self) -> *const Self {
        self as *const _
    }
}

/// Fully parenthesized rendering, handy for checking grouping in tests and
/// debug output.
impl fmt::Display for Expr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Left spines are unrolled so long chains do not recurse.
        let mut pending = Vec::new();
        let mut node = self;
        let leaf = loop {
            match node {
                Expr::Number(value) => break *value,
                Expr::Binary { op, left, right } => {
                    pending.push((*op, *right));
                    node = *left;
                }
            }
        };

        for _ in 0..pending.len() {
            f.write_str("(")?;
        }
        write!(f, "{}", leaf)?;
        while let Some((op, right)) = pending.pop() {
            write!(f, " {} {})", op, right)?;
        }
        Ok(())
    }
}
