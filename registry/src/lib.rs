//! structcheck Registry
//!
//! The closed set of built-in constraints and their predicates.
//!
//! Responsibilities:
//! - Resolve constraint names (case-insensitive) to `Constraint`s
//! - Declare the type class each constraint is defined over
//! - Evaluate a constraint against an inspected value, distinguishing a
//!   failed check from an illegal one

mod constraint;
mod error;
mod evaluate;
mod sign;

pub use constraint::{parse_check_list, Constraint, TypeClass};
pub use error::{ParseConstraintError, ParseResult};
pub use evaluate::{ClassMismatch, Verdict};
pub use sign::Sign;
