//! Validation entry points.

use std::borrow::Cow;
use std::collections::HashSet;

use structcheck_core::{Composite, Identity, Inspect, Kind, Step};
use structcheck_registry::{Constraint, Verdict};
use tracing::{debug, trace};

use crate::error::{CheckError, CheckResult};
use crate::finder::{CheckFinder, TagFinder};
use crate::located::Located;
use crate::report::{FailureRecord, FailureReport};
use crate::traversal::Traversal;

/// A configured validation pass.
///
/// ```ignore
/// let validator = Validator::with_finder(MappingFinder::new([("customer", "NotNil")])?)
///     .root_name("order")
///     .fail_fast(true);
/// validator.validate(&order)?;
/// ```
#[derive(Debug, Clone)]
pub struct Validator<F = TagFinder> {
    finder: F,
    root_name: Option<Cow<'static, str>>,
    fail_fast: bool,
}

impl Validator<TagFinder> {
    /// A validator reading `#[checks(...)]` declarations.
    pub fn new() -> Self {
        Self::with_finder(TagFinder)
    }
}

impl Default for Validator<TagFinder> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: CheckFinder> Validator<F> {
    /// A validator resolving constraints through `finder`.
    pub fn with_finder(finder: F) -> Self {
        Self {
            finder,
            root_name: None,
            fail_fast: false,
        }
    }

    /// Name the root segment of reported paths instead of using the type name.
    pub fn root_name(mut self, name: impl Into<Cow<'static, str>>) -> Self {
        self.root_name = Some(name.into());
        self
    }

    /// Stop at the first failing field instead of reporting every one.
    pub fn fail_fast(mut self, enabled: bool) -> Self {
        self.fail_fast = enabled;
        self
    }

    pub fn finder(&self) -> &F {
        &self.finder
    }

    /// Walk the declared positions of `value` without checking them.
    pub fn traverse<'a>(&self, value: &'a dyn Inspect) -> CheckResult<Traversal<'a>> {
        let (root, composite) = reduce_root(value)?;
        let name = self
            .root_name
            .clone()
            .unwrap_or(Cow::Borrowed(composite.name()));
        Ok(Traversal::new(root, name))
    }

    /// Check every declared position of `value`.
    ///
    /// Configuration and root errors end the call immediately. Failed checks
    /// are collected and returned together as `CheckError::Failed`.
    pub fn validate(&self, value: &dyn Inspect) -> CheckResult<()> {
        let traversal = self.traverse(value)?;
        debug!(root = value.type_name(), "validating");

        let mut report = FailureReport::new();
        for node in traversal {
            let failed = self.check(&node)?;
            if failed.is_empty() {
                continue;
            }
            trace!(field = %node.qualified_name(), failed = ?failed, "checks failed");
            report.record(FailureRecord::at(&node, failed));
            if self.fail_fast {
                break;
            }
        }

        debug!(failures = report.len(), "validation finished");
        report.into_result()
    }

    /// The constraints that fail at one position.
    fn check(&self, node: &Located<'_>) -> CheckResult<Vec<Constraint>> {
        let mut failed = Vec::new();
        for constraint in self.finder.find(node)? {
            match constraint.evaluate(node.value()) {
                Ok(Verdict::Pass) => {}
                Ok(Verdict::Fail) => failed.push(constraint),
                Err(mismatch) => {
                    return Err(CheckError::illegal_check(
                        constraint,
                        mismatch,
                        node.qualified_name(),
                    ))
                }
            }
        }
        Ok(failed)
    }
}

/// Follow indirections from `value` to the composite it stands for.
fn reduce_root(value: &dyn Inspect) -> CheckResult<(&dyn Inspect, &dyn Composite)> {
    let mut seen = HashSet::new();
    let mut current = value;
    loop {
        let kind = current.kind();
        if let Kind::Composite(composite) = kind {
            return Ok((current, composite));
        }
        match kind.step() {
            Step::Follow(next) if seen.insert(Identity::of(next)) => current = next,
            Step::Absent => return Err(CheckError::NilRoot),
            Step::Follow(_) | Step::Stop => return Err(CheckError::invalid_kind(current.type_name())),
        }
    }
}

/// Validate `value` against its `#[checks(...)]` declarations.
pub fn validate(value: &dyn Inspect) -> CheckResult<()> {
    Validator::new().validate(value)
}

/// Validate `value` with constraints resolved by `finder`.
pub fn custom_validate<F: CheckFinder>(value: &dyn Inspect, finder: F) -> CheckResult<()> {
    Validator::with_finder(finder).validate(value)
}

/// Breadth-first walk of the declared positions of `value`.
pub fn traverse(value: &dyn Inspect) -> CheckResult<Traversal<'_>> {
    Validator::new().traverse(value)
}
