//! Convenience checks built on the validator.

use std::collections::HashSet;
use std::fmt;

use structcheck_core::{short_type_name, Identity, Inspect, Kind, Step};
use structcheck_registry::Constraint;

use crate::error::{CheckError, CheckResult};
use crate::finder::{MappingFinder, NilableFinder};
use crate::validator::custom_validate;

/// Where a dotted field path leads in a particular value.
#[derive(Clone)]
pub enum FieldLookup<'a> {
    /// The field exists and was reached.
    Found {
        /// Canonical path, including any variant segments crossed.
        path: String,
        value: &'a dyn Inspect,
    },
    /// The path names a member that does not exist.
    Missing,
    /// The walk stopped at an absent reference or at a variant other than
    /// the one the path continues into.
    Unreachable {
        /// Path of the position where the walk stopped.
        at: String,
    },
}

impl fmt::Debug for FieldLookup<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldLookup::Found { path, value } => f
                .debug_struct("Found")
                .field("path", path)
                .field("type", &value.type_name())
                .finish(),
            FieldLookup::Missing => f.write_str("Missing"),
            FieldLookup::Unreachable { at } => {
                f.debug_struct("Unreachable").field("at", at).finish()
            }
        }
    }
}

impl<'a> FieldLookup<'a> {
    pub fn is_found(&self) -> bool {
        matches!(self, FieldLookup::Found { .. })
    }

    pub fn value(&self) -> Option<&'a dyn Inspect> {
        match self {
            FieldLookup::Found { value, .. } => Some(*value),
            _ => None,
        }
    }
}

fn variant_label(segment: &str) -> Option<&str> {
    segment.strip_prefix('(')?.strip_suffix(')')
}

/// Follow a dotted member path such as `"customer.address.city"` from `value`.
///
/// Pointers, present optionals and variant payloads are crossed without a
/// path segment; a `(Variant)` segment additionally requires that variant to
/// be the active one. An absent reference is never looked through.
pub fn lookup_field<'a>(value: &'a dyn Inspect, path: &str) -> FieldLookup<'a> {
    if path.is_empty() {
        return FieldLookup::Found {
            path: String::new(),
            value,
        };
    }

    let mut segments = path.split('.').peekable();
    let mut walked: Vec<String> = Vec::new();
    let mut seen = HashSet::new();
    let mut current = value;

    while let Some(&segment) = segments.peek() {
        let kind = current.kind();
        let next = match kind {
            Kind::Composite(composite) => {
                let Some(member) = composite
                    .members()
                    .into_iter()
                    .find(|member| member.name() == segment)
                else {
                    return FieldLookup::Missing;
                };
                walked.push(segment.to_string());
                segments.next();
                seen.clear();
                current = member.value();
                continue;
            }
            Kind::Variant { name, value: payload } => {
                match variant_label(segment) {
                    Some(label) if label == name => {
                        segments.next();
                    }
                    Some(_) => return FieldLookup::Unreachable { at: walked.join(".") },
                    None => {}
                }
                walked.push(format!("({name})"));
                match payload {
                    Some(payload) => payload,
                    None if segments.peek().is_none() => break,
                    // Another variant may carry the member.
                    None => return FieldLookup::Unreachable { at: walked.join(".") },
                }
            }
            _ => match kind.step() {
                Step::Follow(next) => next,
                Step::Absent => return FieldLookup::Unreachable { at: walked.join(".") },
                Step::Stop => return FieldLookup::Missing,
            },
        };

        // A pointer chain that loops without reaching a composite has no members.
        if !seen.insert(Identity::of(next)) {
            return FieldLookup::Missing;
        }
        current = next;
    }

    FieldLookup::Found {
        path: walked.join("."),
        value: current,
    }
}

/// Whether `path` can name a field of `value`.
///
/// Paths beneath an absent reference are assumed to exist.
pub fn field_exists(value: &dyn Inspect, path: &str) -> bool {
    !matches!(lookup_field(value, path), FieldLookup::Missing)
}

/// Fail with `MissingFields` naming every path that does not exist.
pub fn check_fields_exist<I, S>(value: &dyn Inspect, paths: I) -> CheckResult<()>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let missing: Vec<String> = paths
        .into_iter()
        .filter(|path| !field_exists(value, path.as_ref()))
        .map(|path| path.as_ref().to_string())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(CheckError::missing_fields(
            short_type_name(value.type_name()),
            missing,
        ))
    }
}

/// Require the named fields, and every field on the way to them, to be present.
///
/// `"customer.address"` also checks `"customer"`, so an absent customer is
/// reported rather than hiding the address. Only positions that can be
/// absent receive `NotNil`.
pub fn check_fields_not_nil<I, S>(value: &dyn Inspect, paths: I) -> CheckResult<()>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let paths: Vec<S> = paths.into_iter().collect();
    check_fields_exist(value, &paths)?;

    let mut finder = MappingFinder::default();
    for path in &paths {
        let path: &str = path.as_ref();
        // The root itself is never absent once reduced.
        if path.is_empty() {
            continue;
        }
        let segments: Vec<&str> = path.split('.').collect();
        for end in 1..=segments.len() {
            let prefix = segments[..end].join(".");
            if let FieldLookup::Found { path, value: field } = lookup_field(value, &prefix) {
                if Constraint::NotNil.applies_to(field) {
                    finder.insert(path, Constraint::NotNil);
                }
            }
        }
    }

    custom_validate(value, finder)
}

/// Require every position of `value` that can be absent to be present.
pub fn check_no_nils(value: &dyn Inspect) -> CheckResult<()> {
    custom_validate(value, NilableFinder)
}
