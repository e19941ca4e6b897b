//! structcheck
//!
//! Validate arbitrary, possibly self-referential data structures against
//! declarative per-field constraints.
//!
//! Responsibilities:
//! - Reduce the input to its root composite
//! - Walk the value graph breadth-first without revisiting referents
//! - Resolve the constraints of every declared position through a `CheckFinder`
//! - Evaluate them and aggregate failures into an ordered `FailureReport`
//!
//! ```ignore
//! use structcheck::Inspect;
//!
//! #[derive(Inspect)]
//! struct Order {
//!     #[checks("Positive")]
//!     quantity: i32,
//!     #[checks("NotNil")]
//!     customer: Option<Box<Customer>>,
//! }
//!
//! structcheck::validate(&order)?;
//! ```

extern crate self as structcheck;

mod error;
mod finder;
mod helpers;
mod located;
mod report;
mod traversal;
mod validator;

pub use error::{CheckError, CheckResult};
pub use finder::{CheckFinder, FixedFinder, MappingFinder, NilableFinder, TagFinder};
pub use helpers::{
    check_fields_exist, check_fields_not_nil, check_no_nils, field_exists, lookup_field,
    FieldLookup,
};
pub use located::Located;
pub use report::{FailureRecord, FailureReport};
pub use traversal::Traversal;
pub use validator::{custom_validate, traverse, validate, Validator};

pub use structcheck_core::{
    render, short_type_name, AsInspect, Complex, Complex32, Complex64, Composite, Container,
    Identity, Inspect, Kind, Member, Number, Step,
};
pub use structcheck_macros::Inspect;
pub use structcheck_registry::{
    parse_check_list, ClassMismatch, Constraint, ParseConstraintError, Sign, TypeClass, Verdict,
};
