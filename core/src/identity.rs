//! Referent identity.

use crate::Inspect;

/// Identity of an inspected value: its address together with its concrete type.
///
/// A struct and its first member share an address, so the type name is part
/// of the key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Identity {
    address: usize,
    type_name: &'static str,
}

impl Identity {
    pub fn of(value: &dyn Inspect) -> Self {
        Self {
            address: value as *const dyn Inspect as *const () as usize,
            type_name: value.type_name(),
        }
    }

    pub fn address(&self) -> usize {
        self.address
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}
