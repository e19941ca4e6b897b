//! Constraint definitions.

use std::fmt;
use std::str::FromStr;

use structcheck_core::Kind;

use crate::error::{ParseConstraintError, ParseResult};

/// Coarse class of runtime values a constraint is defined over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeClass {
    /// Values that may be absent.
    Nilable,
    /// Integers, floats and complex numbers.
    Numeric,
    /// Values with a length.
    Sized,
}

impl TypeClass {
    /// Whether a value of this kind belongs to the class.
    pub fn admits(self, kind: &Kind<'_>) -> bool {
        match self {
            TypeClass::Nilable => matches!(kind, Kind::Optional(_)),
            TypeClass::Numeric => matches!(kind, Kind::Number(_)),
            TypeClass::Sized => matches!(kind, Kind::Container(_)),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            TypeClass::Nilable => "nilable",
            TypeClass::Numeric => "numeric",
            TypeClass::Sized => "sized",
        }
    }
}

impl fmt::Display for TypeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A built-in constraint.
///
/// The set is fixed at compile time; lookup by name goes through `FromStr`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Constraint {
    /// Reference is present.
    NotNil,
    /// Reference is absent.
    Nil,
    /// Sign is greater than zero.
    Positive,
    /// Sign is less than zero.
    Negative,
    /// Value is zero.
    NoSign,
    /// Length is nonzero.
    NotEmpty,
    /// Length is zero.
    Empty,
    /// Value resolves to a nilable value.
    Nilable,
    /// Value resolves to a number.
    Numeric,
    /// Value resolves to a sized value.
    Container,
}

impl Constraint {
    /// Every built-in constraint, in registry order.
    pub const ALL: [Constraint; 10] = [
        Constraint::NotNil,
        Constraint::Nil,
        Constraint::Positive,
        Constraint::Negative,
        Constraint::NoSign,
        Constraint::NotEmpty,
        Constraint::Empty,
        Constraint::Nilable,
        Constraint::Numeric,
        Constraint::Container,
    ];

    /// Canonical name.
    pub fn name(self) -> &'static str {
        match self {
            Constraint::NotNil => "NotNil",
            Constraint::Nil => "Nil",
            Constraint::Positive => "Positive",
            Constraint::Negative => "Negative",
            Constraint::NoSign => "NoSign",
            Constraint::NotEmpty => "NotEmpty",
            Constraint::Empty => "Empty",
            Constraint::Nilable => "Nilable",
            Constraint::Numeric => "Numeric",
            Constraint::Container => "Container",
        }
    }

    /// The class of values this constraint is defined over.
    pub fn class(self) -> TypeClass {
        match self {
            Constraint::NotNil | Constraint::Nil | Constraint::Nilable => TypeClass::Nilable,
            Constraint::Positive
            | Constraint::Negative
            | Constraint::NoSign
            | Constraint::Numeric => TypeClass::Numeric,
            Constraint::NotEmpty | Constraint::Empty | Constraint::Container => TypeClass::Sized,
        }
    }

    /// Class assertions fail, rather than being illegal, outside their class.
    pub fn asserts_class(self) -> bool {
        matches!(
            self,
            Constraint::Nilable | Constraint::Numeric | Constraint::Container
        )
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Constraint {
    type Err = ParseConstraintError;

    fn from_str(s: &str) -> ParseResult<Self> {
        let wanted = s.trim();
        if wanted.eq_ignore_ascii_case("nillable") {
            return Ok(Constraint::Nilable);
        }
        Constraint::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseConstraintError::new(wanted))
    }
}

/// Parse a comma-separated constraint list such as `"NotNil, NotEmpty"`.
///
/// Empty entries are skipped and repeated names keep their first position.
pub fn parse_check_list(list: &str) -> ParseResult<Vec<Constraint>> {
    let mut constraints = Vec::new();
    for entry in list.split(',') {
        if entry.trim().is_empty() {
            continue;
        }
        let constraint: Constraint = entry.parse()?;
        if !constraints.contains(&constraint) {
            constraints.push(constraint);
        }
    }
    Ok(constraints)
}
