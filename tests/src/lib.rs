//! Integration test framework for structcheck.
//!
//! Cases build an [`Expect`](expectation::Expect) describing the outcome of a
//! validation call and verify it against the actual result.


pub mod prelude {
    pub use crate::error::{ExpectationError, ExpectationResult};
    pub use crate::expectation::{Expect, Outcome};

    pub use structcheck::{
        check_fields_exist, check_fields_not_nil, check_no_nils, custom_validate, field_exists,
        lookup_field, traverse, validate, CheckError, CheckFinder, CheckResult, Complex32,
        Complex64, Constraint, FieldLookup, FixedFinder, Inspect, Located, MappingFinder,
        NilableFinder, TagFinder, Validator,
    };
}
