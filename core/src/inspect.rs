//! The `Inspect` capability.
//!
//! Every value the validator can walk reports a coarse runtime category
//! through [`Inspect::kind`]. Struct-like values decompose into named
//! members, indirections expose their referent, and everything else is a
//! leaf that constraints may be evaluated against but never descended into.

use std::fmt;

use crate::Number;

/// A value whose shape can be examined at runtime.
///
/// Implemented for the standard scalar, text, collection and pointer types.
/// User-defined structs and enums get an implementation from
/// `#[derive(Inspect)]`.
pub trait Inspect {
    /// The coarse runtime category of this value.
    ///
    /// The variant returned is fixed by the type; only the contents (the
    /// referent, the active variant, the length) may vary between values.
    /// Constraint legality is decided from the variant alone.
    fn kind(&self) -> Kind<'_>;

    /// The fully qualified name of the concrete type.
    ///
    /// Through a trait object this reports the concrete runtime type, not
    /// `dyn Inspect`.
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// Conversion of sized `Inspect` types and `dyn Inspect` into a trait object.
///
/// Pointer implementations are written against this trait so that
/// `Box<dyn Inspect>` is as walkable as `Box<T>`.
pub trait AsInspect {
    fn as_inspect(&self) -> &dyn Inspect;
}

impl<T: Inspect> AsInspect for T {
    fn as_inspect(&self) -> &dyn Inspect {
        self
    }
}

impl AsInspect for dyn Inspect + '_ {
    fn as_inspect(&self) -> &dyn Inspect {
        self
    }
}

/// Coarse runtime category of an inspected value.
#[derive(Clone, Copy)]
pub enum Kind<'a> {
    /// Struct-like value with a fixed set of named members.
    Composite(&'a dyn Composite),
    /// Indirection that is never absent (`Box`, `Rc`, `Arc`, `&T`).
    Pointer(&'a dyn Inspect),
    /// Indirection that may be absent (`Option`, `OnceCell`, `Cell<Option<&T>>`).
    Optional(Option<&'a dyn Inspect>),
    /// Union-like value resolved to its active variant.
    Variant {
        /// Name of the active variant.
        name: &'static str,
        /// Payload of a single-field tuple variant, `None` for unit variants.
        value: Option<&'a dyn Inspect>,
    },
    /// Integer, floating point or complex number.
    Number(Number),
    /// Value with a length (text, sequences, maps, sets).
    Container(Container<'a>),
    /// Anything else; rendered with its `Debug` output.
    Leaf(&'a dyn fmt::Debug),
}

/// One step along an indirection chain.
#[derive(Clone, Copy)]
pub enum Step<'a> {
    /// The chain continues at this referent.
    Follow(&'a dyn Inspect),
    /// The chain ends at an absent reference.
    Absent,
    /// The value is not an indirection.
    Stop,
}

impl<'a> Kind<'a> {
    /// Follow this value one level of indirection.
    pub fn step(&self) -> Step<'a> {
        match *self {
            Kind::Pointer(target) => Step::Follow(target),
            Kind::Optional(Some(target)) => Step::Follow(target),
            Kind::Optional(None) => Step::Absent,
            Kind::Variant {
                value: Some(target),
                ..
            } => Step::Follow(target),
            _ => Step::Stop,
        }
    }

    /// Short lowercase label of the category, used in diagnostics.
    pub fn label(&self) -> &'static str {
        match self {
            Kind::Composite(_) => "composite",
            Kind::Pointer(_) => "pointer",
            Kind::Optional(_) => "optional",
            Kind::Variant { .. } => "variant",
            Kind::Number(_) => "number",
            Kind::Container(_) => "container",
            Kind::Leaf(_) => "leaf",
        }
    }

    pub fn is_composite(&self) -> bool {
        matches!(self, Kind::Composite(_))
    }
}

impl fmt::Debug for Kind<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Kind::Composite(c) => write!(f, "Composite({})", c.name()),
            Kind::Pointer(t) => write!(f, "Pointer({})", t.type_name()),
            Kind::Optional(Some(t)) => write!(f, "Optional(Some({}))", t.type_name()),
            Kind::Optional(None) => write!(f, "Optional(None)"),
            Kind::Variant { name, value } => f
                .debug_struct("Variant")
                .field("name", name)
                .field("value", &value.map(|v| v.type_name()))
                .finish(),
            Kind::Number(n) => write!(f, "Number({n})"),
            Kind::Container(c) => write!(f, "Container(len={})", c.len),
            Kind::Leaf(d) => write!(f, "Leaf({d:?})"),
        }
    }
}

/// A struct-like value with a statically bounded set of named members.
pub trait Composite {
    /// Declared name of the type, without module path or generics.
    fn name(&self) -> &'static str;

    /// Members in declaration order.
    fn members(&self) -> Vec<Member<'_>>;
}

/// A named member of a composite together with its constraint metadata.
#[derive(Clone, Copy)]
pub struct Member<'a> {
    name: &'static str,
    checks: Option<&'static str>,
    value: &'a dyn Inspect,
}

impl<'a> Member<'a> {
    pub fn new(name: &'static str, checks: Option<&'static str>, value: &'a dyn Inspect) -> Self {
        Self {
            name,
            checks,
            value,
        }
    }

    /// Member name (`"0"`, `"1"`, ... for tuple structs).
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Raw `checks` metadata attached to the member declaration.
    pub fn checks(&self) -> Option<&'static str> {
        self.checks
    }

    pub fn value(&self) -> &'a dyn Inspect {
        self.value
    }
}

impl fmt::Debug for Member<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Member")
            .field("name", &self.name)
            .field("checks", &self.checks)
            .field("type", &self.value.type_name())
            .finish()
    }
}

/// Length information of a sized value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Container<'a> {
    /// Number of elements (bytes for text).
    pub len: usize,
    /// The text itself, for string-like values.
    pub text: Option<&'a str>,
}

impl<'a> Container<'a> {
    pub fn sized(len: usize) -> Self {
        Self { len, text: None }
    }

    pub fn text(text: &'a str) -> Self {
        Self {
            len: text.len(),
            text: Some(text),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
