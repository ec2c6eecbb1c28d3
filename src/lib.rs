//! # lenskit
//!
//! Polymorphic lenses for reading and rebuilding immutable data.
//!
//! ## Overview
//!
//! A lens pairs a getter with a setter for one part of a larger value. Lenses
//! compose, so a deep update is written as a chain of small ones, and the
//! whole is always returned rather than mutated in place. This crate provides:
//!
//! - **Lens**: the four-parameter `Lens<S, T, A, B>` trait with `get`, `set`,
//!   `modify`, composition (`compose` and the `>>` operator) and zipping
//! - **Constructors**: closure-pair lenses, struct field paths (`lens!`),
//!   map entries at a key (`at_key`), tuple halves, `non` for optional parts
//! - **Iso**: lossless conversions, usable as lenses
//! - **Laws**: SetGet, GetSet and SetSet predicates for property tests
//! - **Writer**: a value paired with a log, with lenses on both halves
//!
//! ## Feature Flags
//!
//! - `derive` (default): `#[derive(Lenses)]` for struct fields
//! - `serde`: `Serialize`/`Deserialize` for [`writer::Writer`]
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use std::collections::HashMap;
//! use lenskit::prelude::*;
//!
//! let config = HashMap::from([("retries", 3), ("timeout", 30)]);
//!
//! let retries = at_key("retries");
//! let doubled = retries.modify(config, |count: Option<i32>| count.map(|count| count * 2));
//!
//! assert_eq!(doubled["retries"], 6);
//! assert_eq!(doubled["timeout"], 30);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the optics and the [`Writer`](crate::writer::Writer) type.
///
/// # Usage
///
/// ```rust
/// use lenskit::prelude::*;
/// ```
pub mod prelude {
    pub use crate::optics::*;
    pub use crate::writer::Writer;

    #[cfg(feature = "derive")]
    pub use lenskit_derive::Lenses;
}

pub mod optics;
pub mod writer;

#[cfg(feature = "derive")]
pub use lenskit_derive::Lenses;
