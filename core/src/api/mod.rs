//! Public API for evaluating expressions.
//!
//! A [`Session`] owns one region and evaluates one expression at a time. Every
//! call runs inside a region scope, so the tree built for an expression is
//! discarded as soon as the call returns and the next one starts from an empty
//! region.
//!
//! # Example
//!
//! ```
//! use tally_core::api::{Session, SessionOptions};
//!
//! let mut session = Session::new(SessionOptions::default()).unwrap();
//! assert_eq!(session.evaluate("2 - 1 * 2 + 10").unwrap(), 10.0);
//! assert_eq!(session.region().used(), 0);
//! ```

pub mod error;
pub mod options;
pub mod session;

pub use error::{Diagnostic, Error, RelatedInfo, Severity};
pub use options::SessionOptions;
pub use session::Session;
