//! Validation error types.

use thiserror::Error;

use structcheck_registry::{ClassMismatch, Constraint, TypeClass};

use crate::report::FailureReport;

/// Validation errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CheckError {
    /// An indirection on the way to the root composite is absent.
    #[error("Provided value must resolve to a struct. Encountered an absent reference.")]
    NilRoot,

    /// The root resolves to something other than a struct.
    #[error("Provided value must resolve to a struct. Received: {type_name}")]
    InvalidKind { type_name: &'static str },

    /// A constraint name that is not in the registry.
    #[error("Unknown constraint `{name}` for field '{field}'")]
    UnknownConstraint { name: String, field: String },

    /// A constraint applied to a value outside its type class.
    #[error("Constraint {constraint} applies to {class} values, but field '{field}' holds {type_name}")]
    IllegalCheck {
        constraint: Constraint,
        class: TypeClass,
        field: String,
        type_name: &'static str,
    },

    /// Field paths that do not exist in the value.
    #[error("Field(s) {fields:?} do not exist in {type_name}")]
    MissingFields {
        type_name: String,
        fields: Vec<String>,
    },

    /// One or more fields failed their checks.
    #[error("{0}")]
    Failed(FailureReport),
}

impl CheckError {
    pub fn invalid_kind(type_name: &'static str) -> Self {
        Self::InvalidKind { type_name }
    }

    pub fn unknown_constraint(name: impl Into<String>, field: impl Into<String>) -> Self {
        Self::UnknownConstraint {
            name: name.into(),
            field: field.into(),
        }
    }

    pub fn illegal_check(
        constraint: Constraint,
        mismatch: ClassMismatch,
        field: impl Into<String>,
    ) -> Self {
        Self::IllegalCheck {
            constraint,
            class: mismatch.class,
            field: field.into(),
            type_name: mismatch.found,
        }
    }

    pub fn missing_fields(type_name: impl Into<String>, fields: Vec<String>) -> Self {
        Self::MissingFields {
            type_name: type_name.into(),
            fields,
        }
    }

    /// Metadata or constraint mistakes, as opposed to bad data.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::UnknownConstraint { .. } | Self::IllegalCheck { .. } | Self::MissingFields { .. }
        )
    }

    /// The input did not resolve to a struct.
    pub fn is_invalid_root(&self) -> bool {
        matches!(self, Self::NilRoot | Self::InvalidKind { .. })
    }

    /// The failure report, if fields failed their checks.
    pub fn report(&self) -> Option<&FailureReport> {
        match self {
            Self::Failed(report) => Some(report),
            _ => None,
        }
    }
}

/// Result type for validation operations.
pub type CheckResult<T> = Result<T, CheckError>;
