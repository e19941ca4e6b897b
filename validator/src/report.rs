//! Failure aggregation.

use std::fmt;

use structcheck_core::render;
use structcheck_registry::Constraint;

use crate::error::{CheckError, CheckResult};
use crate::located::Located;

/// A field that failed one or more constraints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailureRecord {
    name: String,
    value: String,
    order: Vec<usize>,
    failed: Vec<Constraint>,
}

impl FailureRecord {
    pub fn new(
        name: impl Into<String>,
        value: impl Into<String>,
        order: Vec<usize>,
        failed: Vec<Constraint>,
    ) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            order,
            failed,
        }
    }

    pub(crate) fn at(node: &Located<'_>, failed: Vec<Constraint>) -> Self {
        Self::new(
            node.qualified_name(),
            render(node.value()),
            node.order().to_vec(),
            failed,
        )
    }

    /// Qualified field name, e.g. `Order.customer.name`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rendered value of the field.
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Failed constraints, in the order they were declared.
    pub fn failed(&self) -> &[Constraint] {
        &self.failed
    }

    pub fn failed_names(&self) -> Vec<&'static str> {
        self.failed.iter().map(|c| c.name()).collect()
    }
}

/// Every failing field of one validation call, in structural order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FailureReport {
    records: Vec<FailureRecord>,
}

impl FailureReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a record, keeping records sorted by order key.
    ///
    /// Records with equal keys keep their insertion order.
    pub fn record(&mut self, record: FailureRecord) {
        let at = self
            .records
            .partition_point(|existing| existing.order <= record.order);
        self.records.insert(at, record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[FailureRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FailureRecord> {
        self.records.iter()
    }

    /// The record for a qualified field name.
    pub fn get(&self, name: &str) -> Option<&FailureRecord> {
        self.records.iter().find(|record| record.name == name)
    }

    pub fn field_names(&self) -> Vec<&str> {
        self.records.iter().map(|record| record.name.as_str()).collect()
    }

    /// `Ok` when nothing failed, otherwise `CheckError::Failed`.
    pub fn into_result(self) -> CheckResult<()> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(CheckError::Failed(self))
        }
    }
}

impl<'r> IntoIterator for &'r FailureReport {
    type Item = &'r FailureRecord;
    type IntoIter = std::slice::Iter<'r, FailureRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for FailureReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows: Vec<(String, String, &str)> = self
            .records
            .iter()
            .map(|record| {
                (
                    format!("{}:", record.name),
                    format!("{}:", record.failed_names().join(", ")),
                    record.value.as_str(),
                )
            })
            .collect();

        // Columns are padded to the widest cell plus one space.
        let name_width = rows.iter().map(|(n, _, _)| n.chars().count()).max().unwrap_or(0) + 1;
        let checks_width = rows.iter().map(|(_, c, _)| c.chars().count()).max().unwrap_or(0) + 1;

        write!(f, "The following field(s) failed checks:")?;
        for (name, checks, value) in &rows {
            write!(f, "\n  {name:<name_width$}{checks:<checks_width$}{value}")?;
        }
        Ok(())
    }
}
