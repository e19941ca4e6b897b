//! Constraint evaluation.

use structcheck_core::{Inspect, Kind};

use crate::constraint::{Constraint, TypeClass};
use crate::sign::Sign;

/// Outcome of a legal check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Pass,
    Fail,
}

impl Verdict {
    pub fn is_pass(self) -> bool {
        matches!(self, Verdict::Pass)
    }

    fn from_bool(passed: bool) -> Self {
        if passed {
            Verdict::Pass
        } else {
            Verdict::Fail
        }
    }
}

/// A constraint was applied to a value outside its type class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassMismatch {
    /// The class the constraint is defined over.
    pub class: TypeClass,
    /// Concrete type of the value the constraint was applied to.
    pub found: &'static str,
}

impl Constraint {
    /// Evaluate this constraint against the value declared at a position.
    ///
    /// Legality depends only on the value's kind, which is fixed by its
    /// type: `Positive` on an `Option<i32>` is illegal whether the option is
    /// `Some` or `None`, and `NotNil` on a `Box` is illegal because a box is
    /// never absent. Indirections are not looked through.
    pub fn evaluate(self, value: &dyn Inspect) -> Result<Verdict, ClassMismatch> {
        let class = self.class();
        let kind = value.kind();
        if class.admits(&kind) {
            Ok(self.test(&kind))
        } else if self.asserts_class() {
            Ok(Verdict::Fail)
        } else {
            Err(ClassMismatch {
                class,
                found: value.type_name(),
            })
        }
    }

    /// Whether this constraint can be evaluated against the value at all.
    pub fn applies_to(self, value: &dyn Inspect) -> bool {
        self.evaluate(value).is_ok()
    }

    /// Apply the predicate to a value already known to be in class.
    fn test(self, kind: &Kind<'_>) -> Verdict {
        let passed = match (self, kind) {
            (Constraint::NotNil, Kind::Optional(target)) => target.is_some(),
            (Constraint::Nil, Kind::Optional(target)) => target.is_none(),
            (Constraint::Positive, Kind::Number(n)) => Sign::Positive.matches(n),
            (Constraint::Negative, Kind::Number(n)) => Sign::Negative.matches(n),
            (Constraint::NoSign, Kind::Number(n)) => Sign::Zero.matches(n),
            (Constraint::NotEmpty, Kind::Container(c)) => !c.is_empty(),
            (Constraint::Empty, Kind::Container(c)) => c.is_empty(),
            (Constraint::Nilable | Constraint::Numeric | Constraint::Container, _) => true,
            (constraint, kind) => unreachable!(
                "{constraint} tested against out-of-class {}",
                kind.label()
            ),
        };
        Verdict::from_bool(passed)
    }
}
