//! Human-readable rendering of inspected values for failure reports.

use crate::{Inspect, Kind};

/// Indirections followed before rendering gives up; pointer cycles stop here.
const MAX_DEPTH: usize = 4;

/// Render a value for display in a failure report.
///
/// Composites are never expanded, so the output stays on one line and is
/// finite for cyclic graphs.
pub fn render(value: &dyn Inspect) -> String {
    render_at(value, 0)
}

fn render_at(value: &dyn Inspect, depth: usize) -> String {
    match value.kind() {
        Kind::Composite(composite) => format!("{} {{ .. }}", composite.name()),
        Kind::Pointer(target) => format!("&{}", render_nested(target, depth)),
        Kind::Optional(None) => "None".to_string(),
        Kind::Optional(Some(target)) => format!("Some({})", render_nested(target, depth)),
        Kind::Variant { name, value: None } => {
            format!("{}::{}", short_type_name(value.type_name()), name)
        }
        Kind::Variant {
            name,
            value: Some(payload),
        } => format!(
            "{}::{}({})",
            short_type_name(value.type_name()),
            name,
            render_nested(payload, depth)
        ),
        Kind::Number(number) => number.to_string(),
        Kind::Container(container) => match container.text {
            Some(text) => format!("{text:?}"),
            None => format!(
                "{}(len={})",
                short_type_name(value.type_name()),
                container.len
            ),
        },
        Kind::Leaf(debug) => format!("{debug:?}"),
    }
}

fn render_nested(value: &dyn Inspect, depth: usize) -> String {
    if depth + 1 >= MAX_DEPTH {
        "..".to_string()
    } else {
        render_at(value, depth + 1)
    }
}

/// Strip module paths from a type name, keeping generic structure.
///
/// `alloc::vec::Vec<alloc::string::String>` becomes `Vec<String>`.
pub fn short_type_name(full: &str) -> String {
    let mut out = String::with_capacity(full.len());
    let mut segment = String::new();
    let mut chars = full.chars().peekable();
    while let Some(c) = chars.next() {
        if c == ':' && chars.peek() == Some(&':') {
            chars.next();
            segment.clear();
        } else if c.is_alphanumeric() || c == '_' {
            segment.push(c);
        } else {
            out.push_str(&segment);
            segment.clear();
            out.push(c);
        }
    }
    out.push_str(&segment);
    out
}
