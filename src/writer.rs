//! A value paired with an accumulated log, and lenses into both halves.
//!
//! `Writer<W, A>` is a plain product of a log `W` and a value `A`. It has no
//! field lenses of its own; instead [`product_iso`] restates it as the tuple
//! `(W, A)`, and the lenses in [`lens`] compose that iso with the tuple
//! lenses [`first`](crate::optics::first) and [`second`](crate::optics::second).
//!
//! # Examples
//!
//! ```rust
//! use lenskit::optics::Lens;
//! use lenskit::writer::{self, Writer};
//!
//! let step: Writer<Vec<String>, i32> = Writer::new(vec!["parsed".to_string()], 42);
//!
//! assert_eq!(writer::lens::value().get(&step), 42);
//!
//! let audited = writer::lens::log().modify(step, |mut log: Vec<String>| {
//!     log.push("audited".to_string());
//!     log
//! });
//! assert_eq!(audited.log(), &["parsed", "audited"]);
//! ```

use crate::optics::Iso;

/// A value of type `A` together with a log of type `W`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Writer<W, A> {
    log: W,
    value: A,
}

impl<W, A> Writer<W, A> {
    /// Creates a new Writer from a log and a value.
    pub const fn new(log: W, value: A) -> Self {
        Self { log, value }
    }

    /// Creates a Writer with an empty log.
    pub fn pure(value: A) -> Self
    where
        W: Default,
    {
        Self::new(W::default(), value)
    }

    /// Returns the log.
    pub const fn log(&self) -> &W {
        &self.log
    }

    /// Returns the value.
    pub const fn value(&self) -> &A {
        &self.value
    }

    /// Splits the Writer into its log and value.
    pub fn into_parts(self) -> (W, A) {
        (self.log, self.value)
    }

    /// Applies `function` to the value, keeping the log.
    #[must_use]
    pub fn map<B, F>(self, function: F) -> Writer<W, B>
    where
        F: FnOnce(A) -> B,
    {
        Writer::new(self.log, function(self.value))
    }

    /// Chains a computation that logs, appending its log to this one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lenskit::writer::Writer;
    ///
    /// let halve = |n: i32| Writer::new(vec![format!("halve {n}")], n / 2);
    /// let result = Writer::new(vec!["start".to_string()], 10).flat_map(halve);
    ///
    /// assert_eq!(result.into_parts(), (vec!["start".to_string(), "halve 10".to_string()], 5));
    /// ```
    #[must_use]
    pub fn flat_map<B, F>(self, function: F) -> Writer<W, B>
    where
        F: FnOnce(A) -> Writer<W, B>,
        W: Extend<<W as IntoIterator>::Item> + IntoIterator,
    {
        let Writer { log, value } = function(self.value);
        let mut combined = self.log;
        combined.extend(log);
        Writer::new(combined, value)
    }
}

impl<W> Writer<W, ()> {
    /// Creates a Writer that only records `entry`.
    pub const fn tell(entry: W) -> Self {
        Self::new(entry, ())
    }
}

/// The isomorphism between `Writer<W, A>` and the tuple `(W, A)`.
///
/// # Examples
///
/// ```rust
/// use lenskit::optics::Iso;
/// use lenskit::writer::{Writer, product_iso};
///
/// let iso = product_iso::<&str, u8>();
/// assert_eq!(iso.get(Writer::new("log", 1)), ("log", 1));
/// assert_eq!(iso.reverse_get(("log", 1)), Writer::new("log", 1));
/// ```
#[must_use]
pub fn product_iso<W, A>() -> impl Iso<Writer<W, A>, (W, A)> + Clone {
    crate::iso!(Writer::into_parts, |(log, value): (W, A)| {
        Writer::new(log, value)
    })
}

/// Lenses on the two halves of a [`Writer`].
pub mod lens {
    use super::{Writer, product_iso};
    use crate::optics::{Iso, Lens, first, second};

    /// Focuses on the log of a Writer.
    #[must_use]
    pub fn log<W: Clone, A: Clone>() -> impl Lens<Writer<W, A>, Writer<W, A>, W, W> + Clone {
        product_iso().to_lens() >> first()
    }

    /// Focuses on the value of a Writer.
    #[must_use]
    pub fn value<W: Clone, A: Clone>() -> impl Lens<Writer<W, A>, Writer<W, A>, A, A> + Clone {
        product_iso().to_lens() >> second()
    }
}
