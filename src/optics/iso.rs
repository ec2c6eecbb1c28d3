//! Isomorphisms: lossless conversions between two representations.
//!
//! An Iso converts `S` to `A` and back without losing information. It has no
//! "whole" context of its own, which makes it a lens whose part is the
//! entire value in another shape. Composing an iso (viewed as a lens) with a
//! lens on the other shape focuses on a piece of a type that has no lens of
//! its own, for example a struct restated as a tuple.
//!
//! # Laws
//!
//! 1. **`GetReverseGet` Law**: `iso.reverse_get(iso.get(source)) == source`
//! 2. **`ReverseGetGet` Law**: `iso.get(iso.reverse_get(value)) == value`
//!
//! # Examples
//!
//! ```
//! use lenskit::optics::{FunctionIso, Iso, Lens, first};
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Celsius(f64);
//!
//! let as_pair = FunctionIso::new(
//!     |reading: (Celsius, &'static str)| (reading.0.0, reading.1),
//!     |(degrees, unit): (f64, &'static str)| (Celsius(degrees), unit),
//! );
//!
//! let degrees = as_pair.to_lens() >> first();
//! let reading = (Celsius(20.0), "indoor");
//!
//! assert_eq!(degrees.get(&reading), 20.0);
//! assert_eq!(degrees.set(reading, 21.5), (Celsius(21.5), "indoor"));
//! ```

use std::marker::PhantomData;

use super::Lens;

/// A lossless conversion from `S` to `A` and back.
pub trait Iso<S, A> {
    /// Converts a source into its other representation.
    fn get(&self, source: S) -> A;

    /// Converts the other representation back into a source.
    fn reverse_get(&self, value: A) -> S;

    /// Swaps the direction of this Iso.
    ///
    /// # Example
    ///
    /// ```
    /// use lenskit::optics::{Iso, iso_swap};
    ///
    /// let back = iso_swap::<u8, char>().reverse();
    /// assert_eq!(back.get(('a', 1)), (1, 'a'));
    /// ```
    fn reverse(self) -> ReversedIso<Self>
    where
        Self: Sized,
    {
        ReversedIso::new(self)
    }

    /// Converts, applies `function`, and converts back.
    fn modify<F>(&self, source: S, function: F) -> S
    where
        F: FnOnce(A) -> A,
    {
        self.reverse_get(function(self.get(source)))
    }

    /// Chains this Iso with another one starting from `A`.
    ///
    /// # Example
    ///
    /// ```
    /// use lenskit::optics::{FunctionIso, Iso};
    ///
    /// let widen = FunctionIso::new(|narrow: u16| u32::from(narrow), |wide: u32| wide as u16);
    /// let bytes = FunctionIso::new(u32::to_be_bytes, u32::from_be_bytes);
    /// let chained = widen.compose(bytes);
    ///
    /// assert_eq!(chained.get(258), [0, 0, 1, 2]);
    /// assert_eq!(chained.reverse_get([0, 0, 1, 2]), 258);
    /// ```
    fn compose<B, I>(self, other: I) -> ComposedIso<Self, I, A>
    where
        Self: Sized,
        I: Iso<A, B>,
    {
        ComposedIso::new(self, other)
    }

    /// Views this Iso as a lens from `S` to `A`.
    ///
    /// `set` ignores the old whole; the new part already carries all of its
    /// information.
    fn to_lens(self) -> IsoAsLens<Self, S, A>
    where
        Self: Sized,
    {
        IsoAsLens::new(self)
    }
}

/// An Iso made of a forward and a backward function.
pub struct FunctionIso<S, A, G, Rg> {
    forward: G,
    backward: Rg,
    _marker: PhantomData<(S, A)>,
}

impl<S, A, G, Rg> FunctionIso<S, A, G, Rg>
where
    G: Fn(S) -> A,
    Rg: Fn(A) -> S,
{
    /// Creates a new `FunctionIso`.
    ///
    /// The two functions must be inverses of each other.
    #[must_use]
    pub const fn new(forward: G, backward: Rg) -> Self {
        Self {
            forward,
            backward,
            _marker: PhantomData,
        }
    }
}

impl<S, A, G, Rg> Iso<S, A> for FunctionIso<S, A, G, Rg>
where
    G: Fn(S) -> A,
    Rg: Fn(A) -> S,
{
    fn get(&self, source: S) -> A {
        (self.forward)(source)
    }

    fn reverse_get(&self, value: A) -> S {
        (self.backward)(value)
    }
}

impl<S, A, G: Clone, Rg: Clone> Clone for FunctionIso<S, A, G, Rg> {
    fn clone(&self) -> Self {
        Self {
            forward: self.forward.clone(),
            backward: self.backward.clone(),
            _marker: PhantomData,
        }
    }
}

impl<S, A, G, Rg> std::fmt::Debug for FunctionIso<S, A, G, Rg> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("FunctionIso")
            .finish_non_exhaustive()
    }
}

/// An Iso running in the opposite direction of `I`.
#[derive(Clone, Debug)]
pub struct ReversedIso<I> {
    inner: I,
}

impl<I> ReversedIso<I> {
    /// Creates a new `ReversedIso`.
    #[must_use]
    pub const fn new(inner: I) -> Self {
        Self { inner }
    }
}

impl<S, A, I> Iso<A, S> for ReversedIso<I>
where
    I: Iso<S, A>,
{
    fn get(&self, source: A) -> S {
        self.inner.reverse_get(source)
    }

    fn reverse_get(&self, value: S) -> A {
        self.inner.get(value)
    }
}

/// Two Isos chained through the intermediate representation `A`.
pub struct ComposedIso<I1, I2, A> {
    first: I1,
    second: I2,
    _marker: PhantomData<A>,
}

impl<I1, I2, A> ComposedIso<I1, I2, A> {
    /// Creates a new `ComposedIso`.
    #[must_use]
    pub const fn new(first: I1, second: I2) -> Self {
        Self {
            first,
            second,
            _marker: PhantomData,
        }
    }
}

impl<S, A, B, I1, I2> Iso<S, B> for ComposedIso<I1, I2, A>
where
    I1: Iso<S, A>,
    I2: Iso<A, B>,
{
    fn get(&self, source: S) -> B {
        self.second.get(self.first.get(source))
    }

    fn reverse_get(&self, value: B) -> S {
        self.first.reverse_get(self.second.reverse_get(value))
    }
}

impl<I1: Clone, I2: Clone, A> Clone for ComposedIso<I1, I2, A> {
    fn clone(&self) -> Self {
        Self::new(self.first.clone(), self.second.clone())
    }
}

impl<I1: std::fmt::Debug, I2: std::fmt::Debug, A> std::fmt::Debug for ComposedIso<I1, I2, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ComposedIso")
            .field("first", &self.first)
            .field("second", &self.second)
            .finish()
    }
}

/// An Iso viewed as a lens.
///
/// `get` converts a clone of the whole; `set` converts the new part back and
/// drops the old whole.
pub struct IsoAsLens<I, S, A> {
    iso: I,
    _marker: PhantomData<(S, A)>,
}

impl<I, S, A> IsoAsLens<I, S, A> {
    /// Creates a new `IsoAsLens`.
    #[must_use]
    pub const fn new(iso: I) -> Self {
        Self {
            iso,
            _marker: PhantomData,
        }
    }
}

impl<I, S, A> Lens<S, S, A, A> for IsoAsLens<I, S, A>
where
    I: Iso<S, A>,
    S: Clone,
{
    fn get(&self, source: &S) -> A {
        self.iso.get(source.clone())
    }

    fn set(&self, _source: S, value: A) -> S {
        self.iso.reverse_get(value)
    }
}

impl<I: Clone, S, A> Clone for IsoAsLens<I, S, A> {
    fn clone(&self) -> Self {
        Self::new(self.iso.clone())
    }
}

impl<I: std::fmt::Debug, S, A> std::fmt::Debug for IsoAsLens<I, S, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("IsoAsLens")
            .field("iso", &self.iso)
            .finish()
    }
}

impl_compose_operator!([I, S, A] IsoAsLens<I, S, A> => (A, A));

/// Creates a [`FunctionIso`](crate::optics::FunctionIso) from a forward and
/// a backward function.
///
/// # Example
///
/// ```
/// use lenskit::optics::Iso;
/// use lenskit::iso;
///
/// let swap = iso!(
///     |(a, b): (i32, String)| (b, a),
///     |(b, a): (String, i32)| (a, b)
/// );
///
/// let swapped = swap.get((42, "hello".to_string()));
/// assert_eq!(swapped, ("hello".to_string(), 42));
/// ```
#[macro_export]
macro_rules! iso {
    ($forward:expr, $backward:expr) => {
        $crate::optics::FunctionIso::new($forward, $backward)
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optics::{first, iso_swap, second};

    fn celsius_fahrenheit() -> impl Iso<i64, i64> + Clone {
        FunctionIso::new(|celsius: i64| celsius * 9 / 5 + 32, |fahrenheit: i64| {
            (fahrenheit - 32) * 5 / 9
        })
    }

    #[test]
    fn test_function_iso_roundtrip() {
        let iso = celsius_fahrenheit();
        assert_eq!(iso.get(100), 212);
        assert_eq!(iso.reverse_get(212), 100);
    }

    #[test]
    fn test_reversed_iso_swaps_direction() {
        let iso = celsius_fahrenheit().reverse();
        assert_eq!(iso.get(32), 0);
        assert_eq!(iso.reverse_get(0), 32);
    }

    #[test]
    fn test_iso_modify() {
        let chars = FunctionIso::new(
            |text: String| text.chars().collect::<Vec<_>>(),
            |chars: Vec<char>| chars.into_iter().collect::<String>(),
        );
        let reversed = chars.modify("lens".to_string(), |mut chars: Vec<char>| {
            chars.reverse();
            chars
        });
        assert_eq!(reversed, "snel");
    }

    #[test]
    fn test_composed_iso_double_swap_is_identity() {
        let twice = iso_swap::<i32, char>().compose(iso_swap::<char, i32>());
        assert_eq!(twice.get((1, 'a')), (1, 'a'));
    }

    #[test]
    fn test_iso_as_lens_set_ignores_old_whole() {
        let lens = celsius_fahrenheit().to_lens();
        assert_eq!(lens.get(&100), 212);
        assert_eq!(lens.set(-40, 212), 100);
    }

    #[test]
    fn test_iso_then_tuple_lens() {
        let swapped_first = iso_swap::<i32, char>().to_lens() >> first();
        let swapped_second = iso_swap::<i32, char>().to_lens() >> second();

        assert_eq!(swapped_first.get(&(1, 'a')), 'a');
        assert_eq!(swapped_first.set((1, 'a'), 'b'), (1, 'b'));
        assert_eq!(swapped_second.set((1, 'a'), 7), (7, 'a'));
    }

    #[test]
    fn test_iso_macro() {
        let negate = crate::iso!(|value: i32| -value, |value: i32| -value);
        assert_eq!(negate.get(5), -5);
        assert_eq!(negate.reverse_get(-5), 5);
    }
}
