//! Standard optics that are commonly used.
//!
//! This module provides pre-defined lenses and isos for tuples, identity,
//! and defaulted optional values.

use std::marker::PhantomData;

use super::{FunctionIso, Iso, Lens};

/// Creates an identity Iso that doesn't transform the value.
///
/// # Example
///
/// ```
/// use lenskit::optics::{Iso, iso_identity};
///
/// let identity_iso = iso_identity::<i32>();
///
/// assert_eq!(identity_iso.get(42), 42);
/// assert_eq!(identity_iso.reverse_get(42), 42);
/// ```
#[must_use]
pub fn iso_identity<T>() -> impl Iso<T, T> + Clone {
    FunctionIso::new(|x: T| x, |x: T| x)
}

/// Creates an Iso that swaps the elements of a pair.
///
/// # Example
///
/// ```
/// use lenskit::optics::{Iso, iso_swap};
///
/// let swap_iso = iso_swap::<i32, String>();
///
/// let tuple = (42, "hello".to_string());
/// let swapped = swap_iso.get(tuple.clone());
/// assert_eq!(swapped, ("hello".to_string(), 42));
/// assert_eq!(swap_iso.reverse_get(swapped), tuple);
/// ```
#[must_use]
pub fn iso_swap<A, B>() -> impl Iso<(A, B), (B, A)> + Clone {
    FunctionIso::new(|(a, b): (A, B)| (b, a), |(b, a): (B, A)| (a, b))
}

/// A lens on the first component of a pair.
///
/// Setting may change the component's type: `(A, C)` becomes `(B, C)`.
pub struct FirstLens<A, B, C> {
    _marker: PhantomData<(A, B, C)>,
}

/// Creates a lens on the first component of a pair.
///
/// # Example
///
/// ```
/// use lenskit::optics::{Lens, first};
///
/// let pair = (1, "one");
/// assert_eq!(first::<i32, i32, &str>().get(&pair), 1);
///
/// // Setting may replace the component with a value of another type.
/// assert_eq!(first().set(pair, 1.5), (1.5, "one"));
/// ```
#[must_use]
pub const fn first<A, B, C>() -> FirstLens<A, B, C> {
    FirstLens {
        _marker: PhantomData,
    }
}

impl<A: Clone, B, C> Lens<(A, C), (B, C), A, B> for FirstLens<A, B, C> {
    fn get(&self, source: &(A, C)) -> A {
        source.0.clone()
    }

    fn set(&self, source: (A, C), value: B) -> (B, C) {
        (value, source.1)
    }
}

impl_compose_operator!([A, B, C] FirstLens<A, B, C> => (A, B));

/// A lens on the second component of a pair.
///
/// Setting may change the component's type: `(C, A)` becomes `(C, B)`.
pub struct SecondLens<C, A, B> {
    _marker: PhantomData<(C, A, B)>,
}

/// Creates a lens on the second component of a pair.
///
/// # Example
///
/// ```
/// use lenskit::optics::{Lens, second};
///
/// let pair = ("left", 2);
/// assert_eq!(second::<&str, i32, i32>().get(&pair), 2);
/// assert_eq!(second().set(pair, "two"), ("left", "two"));
/// ```
#[must_use]
pub const fn second<C, A, B>() -> SecondLens<C, A, B> {
    SecondLens {
        _marker: PhantomData,
    }
}

impl<C, A: Clone, B> Lens<(C, A), (C, B), A, B> for SecondLens<C, A, B> {
    fn get(&self, source: &(C, A)) -> A {
        source.1.clone()
    }

    fn set(&self, source: (C, A), value: B) -> (C, B) {
        (source.0, value)
    }
}

impl_compose_operator!([C, A, B] SecondLens<C, A, B> => (A, B));

/// The lens that focuses on the whole value.
///
/// `identity()` is the unit of composition: `identity() >> lens` and
/// `lens >> identity()` behave like `lens`.
pub struct IdentityLens<S> {
    _marker: PhantomData<S>,
}

/// Creates the identity lens.
#[must_use]
pub const fn identity<S>() -> IdentityLens<S> {
    IdentityLens {
        _marker: PhantomData,
    }
}

impl<S: Clone> Lens<S, S, S, S> for IdentityLens<S> {
    fn get(&self, source: &S) -> S {
        source.clone()
    }

    fn set(&self, _source: S, value: S) -> S {
        value
    }
}

impl_compose_operator!([S] IdentityLens<S> => (S, S));

/// A lens from `Option<A>` to `A` that treats a default value as absence.
///
/// `get` yields the default when the option is `None`; `set` keeps `None`
/// when the source is absent and the new value equals the default. Composed
/// after a [`KeyLens`](super::KeyLens) it gives a nested map a default level.
///
/// A present source stays present, even when it is set to the default, so
/// all three lens laws hold for every source.
///
/// # Example
///
/// ```
/// use lenskit::optics::{Lens, non};
///
/// let score = non(0);
/// assert_eq!(score.get(&None), 0);
/// assert_eq!(score.get(&Some(7)), 7);
/// assert_eq!(score.set(None, 3), Some(3));
/// assert_eq!(score.set(None, 0), None);
/// assert_eq!(score.set(Some(3), 0), Some(0));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NonLens<A> {
    default: A,
}

/// Creates a [`NonLens`] with the given default.
#[must_use]
pub const fn non<A>(default: A) -> NonLens<A> {
    NonLens { default }
}

impl<A: Clone + PartialEq> Lens<Option<A>, Option<A>, A, A> for NonLens<A> {
    fn get(&self, source: &Option<A>) -> A {
        source.as_ref().unwrap_or(&self.default).clone()
    }

    fn set(&self, source: Option<A>, value: A) -> Option<A> {
        if value == self.default && source.is_none() {
            None
        } else {
            Some(value)
        }
    }
}

impl_compose_operator!([A] NonLens<A> => (A, A));

macro_rules! impl_marker_traits {
    ($name:ident < $($param:ident),+ >) => {
        impl<$($param),+> Clone for $name<$($param),+> {
            fn clone(&self) -> Self {
                *self
            }
        }

        impl<$($param),+> Copy for $name<$($param),+> {}

        impl<$($param),+> Default for $name<$($param),+> {
            fn default() -> Self {
                Self {
                    _marker: PhantomData,
                }
            }
        }

        impl<$($param),+> std::fmt::Debug for $name<$($param),+> {
            fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                formatter.write_str(stringify!($name))
            }
        }
    };
}

impl_marker_traits!(FirstLens<A, B, C>);
impl_marker_traits!(SecondLens<C, A, B>);
impl_marker_traits!(IdentityLens<S>);
