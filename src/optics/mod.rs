//! Optics for immutable data manipulation.
//!
//! This module provides lenses and isomorphisms: composable accessors that
//! focus on a part of a value and rebuild the whole when that part changes.
//!
//! # Available Optics
//!
//! - [`Lens`]: Focus on a single part (get/set access)
//! - [`Iso`]: Lossless bidirectional conversion, usable as a lens
//! - [`Zip2`] / [`Zip3`]: Several lenses on disjoint parts, viewed as a tuple
//! - [`KeyLens`]: The entry of a map at a fixed key, as an `Option`
//! - [`KeyPathLens`]: A struct field (or nested field path), built with [`lens!`](crate::lens)
//!
//! # Example
//!
//! ```
//! use lenskit::optics::Lens;
//! use lenskit::lens;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Address { street: String, city: String }
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Person { name: String, address: Address }
//!
//! let person_street = lens!(Person, address) >> lens!(Address, street);
//!
//! let person = Person {
//!     name: "Alice".to_string(),
//!     address: Address {
//!         street: "Main St".to_string(),
//!         city: "Tokyo".to_string(),
//!     },
//! };
//!
//! assert_eq!(person_street.get(&person), "Main St");
//!
//! let updated = person_street.set(person, "Oak Ave".to_string());
//! assert_eq!(updated.address.street, "Oak Ave");
//! assert_eq!(updated.address.city, "Tokyo");
//! ```
//!
//! # Example with a map
//!
//! ```
//! use std::collections::HashMap;
//! use lenskit::optics::{Lens, at_key};
//!
//! let whole = HashMap::from([("a", 1), ("b", 2)]);
//! let a = at_key("a");
//!
//! assert_eq!(a.get(&whole), Some(1));
//! assert_eq!(a.set(whole.clone(), Some(5)), HashMap::from([("a", 5), ("b", 2)]));
//! assert_eq!(a.set(whole, None), HashMap::from([("b", 2)]));
//! ```
//!
//! # Lens Laws
//!
//! Every well-behaved Lens satisfies:
//!
//! 1. **SetGet Law**: Setting then getting yields the set value.
//!    ```text
//!    lens.get(&lens.set(source, value)) == value
//!    ```
//!
//! 2. **GetSet Law**: Getting and setting back yields the original.
//!    ```text
//!    lens.set(source, lens.get(&source)) == source
//!    ```
//!
//! 3. **SetSet Law**: Setting a value twice is the same as setting it once.
//!    ```text
//!    lens.set(lens.set(source, value), value) == lens.set(source, value)
//!    ```
//!
//! # Iso Laws
//!
//! 1. **GetReverseGet Law**: `iso.reverse_get(iso.get(source)) == source`
//! 2. **ReverseGetGet Law**: `iso.get(iso.reverse_get(value)) == value`

/// Implements [`Focus`] and the `>>` composition operator for a lens type.
///
/// `[generics] Type => (Part, NewPart)`
macro_rules! impl_compose_operator {
    ([$($generics:tt)*] $lens:ty => ($part:ty, $new_part:ty)) => {
        impl<$($generics)*> $crate::optics::Focus for $lens {
            type Part = $part;
            type NewPart = $new_part;
        }

        impl<$($generics)*, Rhs> ::std::ops::Shr<Rhs> for $lens {
            type Output = $crate::optics::ComposedLens<Self, Rhs, $part, $new_part>;

            fn shr(self, inner: Rhs) -> Self::Output {
                $crate::optics::ComposedLens::new(self, inner)
            }
        }
    };
}

mod field;
mod iso;
mod key;
pub mod laws;
mod lens;
mod standard_optics;
mod zip;

pub use lens::ComposedLens;
pub use lens::Focus;
pub use lens::FunctionLens;
pub use lens::Lens;
pub use lens::SimpleLens;

pub use zip::Zip2;
pub use zip::Zip3;
pub use zip::zip;
pub use zip::zip3;

pub use key::KeyLens;
pub use key::KeyedCollection;
pub use key::at_key;

pub use field::KeyPathLens;

pub use iso::ComposedIso;
pub use iso::FunctionIso;
pub use iso::Iso;
pub use iso::IsoAsLens;
pub use iso::ReversedIso;

pub use standard_optics::FirstLens;
pub use standard_optics::IdentityLens;
pub use standard_optics::NonLens;
pub use standard_optics::SecondLens;
pub use standard_optics::first;
pub use standard_optics::identity;
pub use standard_optics::iso_identity;
pub use standard_optics::iso_swap;
pub use standard_optics::non;
pub use standard_optics::second;

// Lens values are `Send + Sync` whenever their captured functions are.
static_assertions::assert_impl_all!(
    KeyLens<String, i32, std::collections::HashMap<String, i32>>: Send, Sync, Clone
);
static_assertions::assert_impl_all!(
    KeyLens<u8, Vec<u8>, std::collections::BTreeMap<u8, Vec<u8>>>: Send, Sync, Clone
);
static_assertions::assert_impl_all!(FirstLens<i32, i32, String>: Send, Sync, Copy);
static_assertions::assert_impl_all!(NonLens<i32>: Send, Sync, Clone);
type PairGetter = fn(&(i32, i32)) -> i32;
type PairSetter = fn((i32, i32), i32) -> (i32, i32);
static_assertions::assert_impl_all!(
    FunctionLens<(i32, i32), (i32, i32), i32, i32, PairGetter, PairSetter>: Send, Sync, Clone
);
