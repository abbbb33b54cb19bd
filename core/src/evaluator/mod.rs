//! Tree-walking evaluator for parsed expressions.
//!
//! The evaluator is a pure post-order walk: it never touches the region or
//! mutates the tree, and it cannot fail. Arithmetic follows IEEE 754, so
//! division by zero produces an infinity or NaN instead of an error.
//!
//! Chains of any length are folded iteratively; recursion depth follows group
//! nesting, which the parser bounds with its `max_depth` limit.
//!
//! ## Example
//!
//! ```
//! use tally_core::{evaluator, parser, region::Region};
//!
//! let region = Region::default();
//! let parsed = parser::parse(&region, "4 * 5 + 6 * 7").unwrap();
//! assert_eq!(evaluator::evaluate(parsed.expr), 62.0);
//! ```

mod eval;
mod operators;


pub use eval::evaluate;
