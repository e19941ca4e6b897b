//! Procedural macros for structcheck
//!
//! This crate provides one macro:
//! - `#[derive(Inspect)]` - Decompose structs into named members and enums
//!   into their active variant so the validator can walk them

use proc_macro::TokenStream;

mod inspect;

/// Derive macro for the `Inspect` trait.
///
/// Structs become composites whose members are walked in declaration order.
/// Enums with unit and single-field tuple variants become unions resolved to
/// their active variant.
///
/// Generated paths go through `::structcheck`, so the deriving crate depends
/// on the `structcheck` facade.
///
/// # Attributes
///
/// - `#[checks("NotNil,NotEmpty")]` or `#[checks = "NotNil"]` on a field -
///   comma-separated, case-insensitive constraint names. Several attributes
///   on one field are combined.
///
/// # Example
///
/// ```ignore
/// #[derive(Inspect)]
/// struct Order {
///     #[checks("Positive")]
///     quantity: i32,
///     #[checks("NotNil")]
///     customer: Option<Box<Customer>>,
/// }
/// ```
#[proc_macro_derive(Inspect, attributes(checks))]
pub fn derive_inspect(input: TokenStream) -> TokenStream {
    inspect::derive_inspect_impl(input)
}
