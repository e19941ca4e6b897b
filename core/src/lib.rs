//! structcheck Core Types
//!
//! This crate provides the runtime introspection model the validator walks:
//! - The `Inspect` capability and its coarse `Kind` categories
//! - Struct-like decomposition (`Composite`, `Member`)
//! - Numeric values (`Number`, `Complex`)
//! - Referent identity for cycle suppression (`Identity`)
//! - Human-readable value rendering

mod identity;
mod impls;
mod inspect;
mod number;
mod render;

pub use identity::*;
pub use inspect::*;
pub use number::*;
pub use render::*;
