//! Lens optics for focusing on a part of a larger value.
//!
//! A Lens pairs a getter with a setter. The getter extracts the focused part
//! from a whole; the setter consumes the whole and returns a new one with the
//! part replaced. Lenses compose, so a chain of lenses reaches arbitrarily
//! deep into nested data without the caller spelling out the rebuild.
//!
//! The trait is polymorphic in four type parameters:
//!
//! - `S`: the whole the lens reads from
//! - `T`: the whole the setter produces
//! - `A`: the part the getter yields
//! - `B`: the part the setter accepts
//!
//! Most lenses are monomorphic (`S == T`, `A == B`); [`SimpleLens`] names that
//! case.
//!
//! # Laws
//!
//! A well-behaved monomorphic Lens satisfies:
//!
//! 1. **SetGet Law**: Setting then getting yields the set value.
//!    ```text
//!    lens.get(&lens.set(source, value.clone())) == value
//!    ```
//!
//! 2. **GetSet Law**: Getting and setting back yields the original.
//!    ```text
//!    lens.set(source.clone(), lens.get(&source)) == source
//!    ```
//!
//! 3. **SetSet Law**: Setting the same value twice equals setting it once.
//!    ```text
//!    lens.set(lens.set(source.clone(), value.clone()), value.clone())
//!        == lens.set(source, value)
//!    ```
//!
//! The laws are not enforced by the type system; [`crate::optics::laws`]
//! provides predicates for checking them in property-based tests.
//!
//! # Examples
//!
//! ```
//! use lenskit::optics::{FunctionLens, Lens};
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Point { x: i32, y: i32 }
//!
//! let x_lens = FunctionLens::new(
//!     |point: &Point| point.x,
//!     |point: Point, x: i32| Point { x, ..point },
//! );
//!
//! let point = Point { x: 10, y: 20 };
//! assert_eq!(x_lens.get(&point), 10);
//!
//! let updated = x_lens.set(point, 100);
//! assert_eq!(updated, Point { x: 100, y: 20 });
//! ```

use std::marker::PhantomData;

use super::Zip2;

/// A Lens focuses on a part `A` of a whole `S`.
///
/// Setting a new part `B` into the whole yields a new whole `T`.
///
/// # Type Parameters
///
/// - `S`: The source type (the whole structure)
/// - `T`: The updated source type produced by `set`
/// - `A`: The focused part returned by `get`
/// - `B`: The replacement part accepted by `set`
///
/// # Laws
///
/// 1. **SetGet Law**: `lens.get(&lens.set(source, value)) == value`
/// 2. **GetSet Law**: `lens.set(source, lens.get(&source)) == source`
/// 3. **SetSet Law**: `lens.set(lens.set(source, value), value) == lens.set(source, value)`
pub trait Lens<S, T, A, B> {
    /// Gets the focused part.
    ///
    /// # Arguments
    ///
    /// * `source` - The source structure
    ///
    /// # Returns
    ///
    /// The focused part, owned by the caller
    fn get(&self, source: &S) -> A;

    /// Replaces the focused part, returning a new whole.
    ///
    /// # Arguments
    ///
    /// * `source` - The source structure (consumed)
    /// * `value` - The new value for the focused part
    ///
    /// # Returns
    ///
    /// A new whole with the focused part replaced
    fn set(&self, source: S, value: B) -> T;

    /// Modifies the focused part by applying a function.
    ///
    /// Equivalent to `lens.set(source, function(lens.get(&source)))`.
    ///
    /// # Example
    ///
    /// ```
    /// use lenskit::optics::Lens;
    /// use lenskit::lens;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Point { x: i32, y: i32 }
    ///
    /// let x_lens = lens!(Point, x);
    /// let point = Point { x: 10, y: 20 };
    /// let doubled = x_lens.modify(point, |x| x * 2);
    /// assert_eq!(doubled.x, 20);
    /// ```
    fn modify<F>(&self, source: S, function: F) -> T
    where
        F: FnOnce(A) -> B,
    {
        let current = self.get(&source);
        self.set(source, function(current))
    }

    /// Returns a setter closure that writes `value` into any whole.
    ///
    /// # Example
    ///
    /// ```
    /// use lenskit::optics::{Lens, first};
    ///
    /// let count = first::<i32, i32, &str>();
    /// let reset = count.set_with(0);
    /// assert_eq!(reset((7, "a")), (0, "a"));
    /// assert_eq!(reset((9, "b")), (0, "b"));
    /// ```
    fn set_with(&self, value: B) -> impl Fn(S) -> T
    where
        B: Clone,
    {
        move |source| self.set(source, value.clone())
    }

    /// Returns a closure that applies `function` to the focus of any whole.
    ///
    /// # Example
    ///
    /// ```
    /// use lenskit::optics::{Lens, second};
    ///
    /// let text = second::<&str, String, String>();
    /// let shout = text.modify_with(|text| text.to_uppercase());
    /// let words = vec![("a", "hi".to_string()), ("b", "yo".to_string())];
    /// let loud: Vec<_> = words.into_iter().map(&shout).collect();
    /// assert_eq!(loud, vec![("a", "HI".to_string()), ("b", "YO".to_string())]);
    /// ```
    fn modify_with<F>(&self, function: F) -> impl Fn(S) -> T
    where
        F: Fn(A) -> B,
    {
        move |source| self.modify(source, &function)
    }

    /// Composes this lens with another lens focusing inside its part.
    ///
    /// The inner lens must read `A` and write `B`; a mismatch is a compile
    /// error:
    ///
    /// ```compile_fail
    /// use lenskit::optics::{Lens, first};
    ///
    /// let outer = first::<(i32, i32), (i32, i32), String>();
    /// let inner = first::<String, String, u8>();
    /// let _ = outer.compose(inner);
    /// ```
    ///
    /// # Example
    ///
    /// ```
    /// use lenskit::optics::Lens;
    /// use lenskit::lens;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Address { street: String, city: String }
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Person { name: String, address: Address }
    ///
    /// let person_street = lens!(Person, address).compose(lens!(Address, street));
    ///
    /// let person = Person {
    ///     name: "Alice".to_string(),
    ///     address: Address {
    ///         street: "Main St".to_string(),
    ///         city: "Tokyo".to_string(),
    ///     },
    /// };
    ///
    /// assert_eq!(person_street.get(&person), "Main St");
    /// ```
    fn compose<C, D, L>(self, inner: L) -> ComposedLens<Self, L, A, B>
    where
        Self: Sized,
        L: Lens<A, B, C, D>,
    {
        ComposedLens::new(self, inner)
    }

    /// Alias of [`Lens::compose`].
    fn and_then<C, D, L>(self, inner: L) -> ComposedLens<Self, L, A, B>
    where
        Self: Sized,
        L: Lens<A, B, C, D>,
    {
        self.compose(inner)
    }

    /// Zips this lens with another lens on the same whole.
    ///
    /// See [`Zip2`] for the disjointness requirement.
    fn zip<A2, L>(self, other: L) -> Zip2<Self, L, A, A2>
    where
        Self: Sized + Lens<S, S, A, A>,
        L: Lens<S, S, A2, A2>,
    {
        Zip2::new(self, other)
    }
}

/// A monomorphic lens: `S == T` and `A == B`.
///
/// Implemented for every `Lens<S, S, A, A>`, so it can be used as a shorter
/// bound.
pub trait SimpleLens<S, A>: Lens<S, S, A, A> {}

impl<S, A, L> SimpleLens<S, A> for L where L: Lens<S, S, A, A> + ?Sized {}

impl<S, T, A, B, L> Lens<S, T, A, B> for &L
where
    L: Lens<S, T, A, B> + ?Sized,
{
    fn get(&self, source: &S) -> A {
        (**self).get(source)
    }

    fn set(&self, source: S, value: B) -> T {
        (**self).set(source, value)
    }
}

/// A lens implemented using getter and setter functions.
///
/// # Type Parameters
///
/// - `S`, `T`, `A`, `B`: see [`Lens`]
/// - `G`: The getter function type
/// - `St`: The setter function type
///
/// # Example
///
/// ```
/// use lenskit::optics::{FunctionLens, Lens};
///
/// // Replace the first element of a pair with a value of another type.
/// let first_to_string = FunctionLens::new(
///     |pair: &(i32, bool)| pair.0,
///     |pair: (i32, bool), label: String| (label, pair.1),
/// );
///
/// assert_eq!(first_to_string.get(&(4, true)), 4);
/// assert_eq!(first_to_string.set((4, true), "four".to_string()), ("four".to_string(), true));
/// ```
pub struct FunctionLens<S, T, A, B, G, St> {
    getter: G,
    setter: St,
    _marker: PhantomData<(S, T, A, B)>,
}

impl<S, T, A, B, G, St> FunctionLens<S, T, A, B, G, St>
where
    G: Fn(&S) -> A,
    St: Fn(S, B) -> T,
{
    /// Creates a new `FunctionLens` from a getter and setter.
    ///
    /// # Arguments
    ///
    /// * `getter` - A function that extracts the focused part from the source
    /// * `setter` - A function that builds a new source with the part replaced
    #[must_use]
    pub const fn new(getter: G, setter: St) -> Self {
        Self {
            getter,
            setter,
            _marker: PhantomData,
        }
    }
}

impl<S, T, A, B, G, St> Lens<S, T, A, B> for FunctionLens<S, T, A, B, G, St>
where
    G: Fn(&S) -> A,
    St: Fn(S, B) -> T,
{
    fn get(&self, source: &S) -> A {
        (self.getter)(source)
    }

    fn set(&self, source: S, value: B) -> T {
        (self.setter)(source, value)
    }
}

impl<S, T, A, B, G: Clone, St: Clone> Clone for FunctionLens<S, T, A, B, G, St> {
    fn clone(&self) -> Self {
        Self {
            getter: self.getter.clone(),
            setter: self.setter.clone(),
            _marker: PhantomData,
        }
    }
}

impl<S, T, A, B, G, St> std::fmt::Debug for FunctionLens<S, T, A, B, G, St> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("FunctionLens")
            .finish_non_exhaustive()
    }
}

impl_compose_operator!([S, T, A, B, G, St] FunctionLens<S, T, A, B, G, St> => (A, B));

/// A lens composed of an outer and an inner lens.
///
/// # Type Parameters
///
/// - `L1`: The outer lens (whole to intermediate part)
/// - `L2`: The inner lens (intermediate part to final part)
/// - `A`, `B`: The intermediate part read and written by the outer lens
///
/// # Example
///
/// ```
/// use lenskit::optics::{Lens, first, second};
///
/// let nested = first::<(i32, char), (i32, char), bool>() >> second();
/// let whole = ((1, 'a'), true);
///
/// assert_eq!(nested.get(&whole), 'a');
/// assert_eq!(nested.set(whole, 'z'), ((1, 'z'), true));
/// ```
pub struct ComposedLens<L1, L2, A, B> {
    outer: L1,
    inner: L2,
    _marker: PhantomData<(A, B)>,
}

impl<L1, L2, A, B> ComposedLens<L1, L2, A, B> {
    /// Creates a new composed lens.
    ///
    /// # Arguments
    ///
    /// * `outer` - The lens focusing on the intermediate part
    /// * `inner` - The lens focusing inside the intermediate part
    #[must_use]
    pub const fn new(outer: L1, inner: L2) -> Self {
        Self {
            outer,
            inner,
            _marker: PhantomData,
        }
    }
}

impl<S, T, A, B, C, D, L1, L2> Lens<S, T, C, D> for ComposedLens<L1, L2, A, B>
where
    L1: Lens<S, T, A, B>,
    L2: Lens<A, B, C, D>,
{
    fn get(&self, source: &S) -> C {
        self.inner.get(&self.outer.get(source))
    }

    fn set(&self, source: S, value: D) -> T {
        let intermediate = self.outer.get(&source);
        let new_intermediate = self.inner.set(intermediate, value);
        self.outer.set(source, new_intermediate)
    }
}

impl<L1: Clone, L2: Clone, A, B> Clone for ComposedLens<L1, L2, A, B> {
    fn clone(&self) -> Self {
        Self {
            outer: self.outer.clone(),
            inner: self.inner.clone(),
            _marker: PhantomData,
        }
    }
}

impl<L1: std::fmt::Debug, L2: std::fmt::Debug, A, B> std::fmt::Debug
    for ComposedLens<L1, L2, A, B>
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ComposedLens")
            .field("outer", &self.outer)
            .field("inner", &self.inner)
            .finish()
    }
}

impl<L1, L2: Focus, A, B> Focus for ComposedLens<L1, L2, A, B> {
    type Part = L2::Part;
    type NewPart = L2::NewPart;
}

impl<L1, L2: Focus, A, B, Rhs> std::ops::Shr<Rhs> for ComposedLens<L1, L2, A, B> {
    type Output = ComposedLens<Self, Rhs, L2::Part, L2::NewPart>;

    fn shr(self, inner: Rhs) -> Self::Output {
        ComposedLens::new(self, inner)
    }
}

/// The part types a concrete lens type reads and writes.
///
/// Every lens type in this crate implements `Focus`; the `>>` operator uses
/// it to name the intermediate types of the [`ComposedLens`] it builds.
pub trait Focus {
    /// The part returned by `get`.
    type Part;
    /// The part accepted by `set`.
    type NewPart;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Debug)]
    struct Point {
        x: i32,
        y: i32,
    }

    fn x_lens() -> impl Lens<Point, Point, i32, i32> + Clone {
        FunctionLens::new(
            |point: &Point| point.x,
            |point: Point, x: i32| Point { x, ..point },
        )
    }

    #[test]
    fn test_function_lens_get() {
        let point = Point { x: 10, y: 20 };
        assert_eq!(x_lens().get(&point), 10);
    }

    #[test]
    fn test_function_lens_set() {
        let point = Point { x: 10, y: 20 };
        let updated = x_lens().set(point, 100);
        assert_eq!(updated, Point { x: 100, y: 20 });
    }

    #[test]
    fn test_lens_modify() {
        let point = Point { x: 10, y: 20 };
        let doubled = x_lens().modify(point, |x| x * 2);
        assert_eq!(doubled.x, 20);
    }

    #[test]
    fn test_polymorphic_set_changes_type() {
        let label = FunctionLens::new(
            |pair: &(u8, bool)| pair.0,
            |pair: (u8, bool), text: String| (text, pair.1),
        );
        let relabelled = label.modify((3, false), |number: u8| format!("#{number}"));
        assert_eq!(relabelled, ("#3".to_string(), false));
    }

    #[test]
    fn test_lens_compose() {
        let outer = FunctionLens::new(
            |pair: &(Point, char)| pair.0.clone(),
            |pair: (Point, char), point: Point| (point, pair.1),
        );
        let composed = outer.compose(x_lens());

        let whole = (Point { x: 1, y: 2 }, 'p');
        assert_eq!(composed.get(&whole), 1);
        assert_eq!(composed.set(whole, 9), (Point { x: 9, y: 2 }, 'p'));
    }

    #[test]
    fn test_borrowed_lens_is_a_lens() {
        let lens = x_lens();
        let borrowed = &lens;
        let point = Point { x: 3, y: 4 };
        assert_eq!(borrowed.get(&point), 3);
        assert_eq!(borrowed.set(point, 5).x, 5);
    }

    #[test]
    fn test_set_with_reuses_value() {
        let lens = x_lens();
        let reset = lens.set_with(0);
        assert_eq!(reset(Point { x: 7, y: 1 }), Point { x: 0, y: 1 });
        assert_eq!(reset(Point { x: 8, y: 2 }), Point { x: 0, y: 2 });
    }
}
