//! Derive macro generating field lenses for `lenskit`.
//!
//! `#[derive(Lenses)]` adds one associated function per named field,
//! `<field>_lens()`, returning a lens from the struct to that field.
//!
//! ```rust,ignore
//! use lenskit::optics::Lens;
//! use lenskit_derive::Lenses;
//!
//! #[derive(Clone, Lenses)]
//! struct Point {
//!     x: i32,
//!     y: i32,
//! }
//!
//! let moved = Point::x_lens().set(Point { x: 1, y: 2 }, 10);
//! assert_eq!(moved.x, 10);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod lenses;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Derives a lens accessor for every named field of a struct.
///
/// For a field `foo: T` the generated function is
///
/// ```rust,ignore
/// pub fn foo_lens() -> impl ::lenskit::optics::Lens<Self, Self, T, T> + Clone
/// where
///     T: Clone;
/// ```
///
/// The lens is a `KeyPathLens` over the field, so `get` clones the field and
/// `set` overwrites it in place, leaving every other field untouched.
///
/// # Requirements
///
/// - The type must be a struct with named fields.
/// - Every field type must implement `Clone`.
///
/// # Generics
///
/// Generic structs are supported; pick the concrete type at the call site:
///
/// ```rust,ignore
/// #[derive(Clone, Lenses)]
/// struct Labeled<T> {
///     label: String,
///     value: T,
/// }
///
/// let value = Labeled::<u8>::value_lens();
/// ```
#[proc_macro_derive(Lenses)]
pub fn derive_lenses(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    TokenStream::from(lenses::expand(&input))
}
