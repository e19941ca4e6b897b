//! Strategies that decide which constraints apply to a position.

use std::collections::HashMap;

use structcheck_registry::{parse_check_list, Constraint};

use crate::error::{CheckError, CheckResult};
use crate::located::Located;

/// Resolves the constraints that apply to a declared position.
///
/// Called for the root as well as for every member.
pub trait CheckFinder {
    fn find(&self, node: &Located<'_>) -> CheckResult<Vec<Constraint>>;
}

impl<F> CheckFinder for F
where
    F: Fn(&Located<'_>) -> CheckResult<Vec<Constraint>>,
{
    fn find(&self, node: &Located<'_>) -> CheckResult<Vec<Constraint>> {
        self(node)
    }
}

/// Reads the `#[checks(...)]` list declared on each member.
///
/// Unknown names fail the whole call.
#[derive(Debug, Clone, Copy, Default)]
pub struct TagFinder;

impl CheckFinder for TagFinder {
    fn find(&self, node: &Located<'_>) -> CheckResult<Vec<Constraint>> {
        match node.checks() {
            Some(list) => parse_check_list(list)
                .map_err(|e| CheckError::unknown_constraint(e.name(), node.qualified_name())),
            None => Ok(Vec::new()),
        }
    }
}

/// Looks constraints up by dotted path relative to the root.
///
/// `"customer.name"` addresses the `name` member of the root's `customer`
/// member; the root itself is addressed by `""`. Variant segments are part
/// of the path: `"shape.(Circle).radius"`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MappingFinder {
    checks: HashMap<String, Vec<Constraint>>,
}

impl MappingFinder {
    /// Build from path → constraint list pairs such as `("customer", "NotNil")`.
    ///
    /// Every name is resolved here, so lookups during a walk cannot fail.
    pub fn new<I, K, V>(entries: I) -> CheckResult<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: AsRef<str>,
    {
        let mut finder = Self::default();
        for (path, list) in entries {
            let path = path.into();
            let constraints = parse_check_list(list.as_ref())
                .map_err(|e| CheckError::unknown_constraint(e.name(), path.as_str()))?;
            finder.extend(path, constraints);
        }
        Ok(finder)
    }

    /// Build from already resolved constraints.
    pub fn from_constraints<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, Vec<Constraint>)>,
        K: Into<String>,
    {
        let mut finder = Self::default();
        for (path, constraints) in entries {
            finder.extend(path.into(), constraints);
        }
        finder
    }

    /// Add constraints for a path, keeping the first occurrence of each.
    pub fn insert(&mut self, path: impl Into<String>, constraint: Constraint) {
        self.extend(path.into(), [constraint]);
    }

    fn extend(&mut self, path: String, constraints: impl IntoIterator<Item = Constraint>) {
        let entry = self.checks.entry(path).or_default();
        for constraint in constraints {
            if !entry.contains(&constraint) {
                entry.push(constraint);
            }
        }
    }

    pub fn get(&self, path: &str) -> Option<&[Constraint]> {
        self.checks.get(path).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.checks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }
}

impl CheckFinder for MappingFinder {
    fn find(&self, node: &Located<'_>) -> CheckResult<Vec<Constraint>> {
        Ok(self
            .get(&node.relative_name())
            .map(<[Constraint]>::to_vec)
            .unwrap_or_default())
    }
}

/// The same constraint list for every declared position.
///
/// Each constraint is applied wherever the position's type admits it, so
/// `FixedFinder::new("NotNil")` checks every optional and skips the rest.
/// Class assertions (`Numeric`, `Container`, `Nilable`) apply everywhere.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FixedFinder {
    checks: Vec<Constraint>,
}

impl FixedFinder {
    /// Field name reported for unknown constraints in a fixed list.
    pub const EVERY_FIELD: &'static str = "*";

    /// Build from a list such as `"NotNil, NotEmpty"`, resolving every name
    /// up front.
    pub fn new(list: &str) -> CheckResult<Self> {
        let checks = parse_check_list(list)
            .map_err(|e| CheckError::unknown_constraint(e.name(), Self::EVERY_FIELD))?;
        Ok(Self { checks })
    }

    pub fn from_constraints(checks: impl IntoIterator<Item = Constraint>) -> Self {
        let mut finder = Self::default();
        for constraint in checks {
            if !finder.checks.contains(&constraint) {
                finder.checks.push(constraint);
            }
        }
        finder
    }

    pub fn constraints(&self) -> &[Constraint] {
        &self.checks
    }
}

impl CheckFinder for FixedFinder {
    fn find(&self, node: &Located<'_>) -> CheckResult<Vec<Constraint>> {
        Ok(self
            .checks
            .iter()
            .copied()
            .filter(|constraint| constraint.applies_to(node.value()))
            .collect())
    }
}

/// Requires every position that can be absent to be present.
#[derive(Debug, Clone, Copy, Default)]
pub struct NilableFinder;

impl CheckFinder for NilableFinder {
    fn find(&self, node: &Located<'_>) -> CheckResult<Vec<Constraint>> {
        if Constraint::NotNil.applies_to(node.value()) {
            Ok(vec![Constraint::NotNil])
        } else {
            Ok(Vec::new())
        }
    }
}
