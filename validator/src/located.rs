//! Values paired with their position in the walked structure.

use std::borrow::Cow;
use std::fmt;

use structcheck_core::{Inspect, Member};

/// A value together with where it was found.
///
/// `path` holds the human-readable segments from the root (`Order`,
/// `customer`, `(Retail)`, `name`), `order` the member indices used to sort
/// reports. Descending produces a new `Located`; the parent is never changed.
#[derive(Clone)]
pub struct Located<'a> {
    value: &'a dyn Inspect,
    path: Vec<Cow<'static, str>>,
    order: Vec<usize>,
    checks: Option<&'static str>,
}

impl<'a> Located<'a> {
    pub(crate) fn root(value: &'a dyn Inspect, name: Cow<'static, str>) -> Self {
        Self {
            value,
            path: vec![name],
            order: Vec::new(),
            checks: None,
        }
    }

    /// The `index`-th member of a composite reached from this position.
    ///
    /// `labels` are the variant segments crossed between this position and
    /// the composite.
    pub(crate) fn member(&self, labels: &[Cow<'static, str>], index: usize, member: Member<'a>) -> Self {
        let mut path = Vec::with_capacity(self.path.len() + labels.len() + 1);
        path.extend(self.path.iter().cloned());
        path.extend(labels.iter().cloned());
        path.push(Cow::Borrowed(member.name()));

        let mut order = Vec::with_capacity(self.order.len() + 1);
        order.extend_from_slice(&self.order);
        order.push(index);

        Self {
            value: member.value(),
            path,
            order,
            checks: member.checks(),
        }
    }

    pub fn value(&self) -> &'a dyn Inspect {
        self.value
    }

    /// Path segments from the root, the root's own name first.
    pub fn path(&self) -> &[Cow<'static, str>] {
        &self.path
    }

    /// Structural order key: member indices from the root.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Raw `checks` metadata declared on this position.
    pub fn checks(&self) -> Option<&'static str> {
        self.checks
    }

    pub fn is_root(&self) -> bool {
        self.order.is_empty()
    }

    pub fn depth(&self) -> usize {
        self.order.len()
    }

    /// Dotted path including the root name, e.g. `Order.customer.name`.
    pub fn qualified_name(&self) -> String {
        self.path.join(".")
    }

    /// Dotted path without the root name; empty for the root itself.
    pub fn relative_name(&self) -> String {
        self.path.get(1..).unwrap_or_default().join(".")
    }
}

impl fmt::Debug for Located<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Located")
            .field("path", &self.qualified_name())
            .field("order", &self.order)
            .field("checks", &self.checks)
            .field("type", &self.value.type_name())
            .finish()
    }
}
