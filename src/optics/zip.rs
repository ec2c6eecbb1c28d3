//! Zipping lenses that focus on disjoint parts of the same whole.
//!
//! A zipped lens views two or three parts of a whole as one tuple. `get`
//! reads every part; `set` writes the parts in order, first to last.
//!
//! # Disjointness
//!
//! The zipped lens only satisfies the lens laws when its lenses focus on
//! non-overlapping parts of the whole. This is not checked at runtime:
//! zipping two lenses on the same field compiles and runs, but the last
//! write wins and SetGet fails. Use [`laws::zip_disjoint`](super::laws::zip_disjoint)
//! to probe a pair of lenses in tests.
//!
//! # Examples
//!
//! ```
//! use lenskit::optics::{Lens, zip};
//! use lenskit::lens;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Point { x: i32, y: i32 }
//!
//! let xy = zip(lens!(Point, x), lens!(Point, y));
//!
//! let point = Point { x: 1, y: 2 };
//! assert_eq!(xy.get(&point), (1, 2));
//! assert_eq!(xy.set(point, (3, 4)), Point { x: 3, y: 4 });
//! ```

use std::marker::PhantomData;

use super::Lens;

/// Two lenses on disjoint parts of the same whole, focused as a pair.
///
/// # Type Parameters
///
/// - `L1`, `L2`: The zipped lenses
/// - `A1`, `A2`: Their part types
pub struct Zip2<L1, L2, A1, A2> {
    first: L1,
    second: L2,
    _marker: PhantomData<(A1, A2)>,
}

impl<L1, L2, A1, A2> Zip2<L1, L2, A1, A2> {
    /// Creates a new `Zip2`.
    #[must_use]
    pub const fn new(first: L1, second: L2) -> Self {
        Self {
            first,
            second,
            _marker: PhantomData,
        }
    }
}

/// Zips two lenses on the same whole into a lens on a pair.
///
/// The lenses must focus on disjoint parts; see the [module docs](self).
#[must_use]
pub const fn zip<L1, L2, A1, A2>(first: L1, second: L2) -> Zip2<L1, L2, A1, A2> {
    Zip2::new(first, second)
}

impl<S, A1, A2, L1, L2> Lens<S, S, (A1, A2), (A1, A2)> for Zip2<L1, L2, A1, A2>
where
    L1: Lens<S, S, A1, A1>,
    L2: Lens<S, S, A2, A2>,
{
    fn get(&self, source: &S) -> (A1, A2) {
        (self.first.get(source), self.second.get(source))
    }

    fn set(&self, source: S, (first, second): (A1, A2)) -> S {
        let source = self.first.set(source, first);
        self.second.set(source, second)
    }
}

impl<L1: Clone, L2: Clone, A1, A2> Clone for Zip2<L1, L2, A1, A2> {
    fn clone(&self) -> Self {
        Self {
            first: self.first.clone(),
            second: self.second.clone(),
            _marker: PhantomData,
        }
    }
}

impl<L1: std::fmt::Debug, L2: std::fmt::Debug, A1, A2> std::fmt::Debug for Zip2<L1, L2, A1, A2> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("Zip2")
            .field("first", &self.first)
            .field("second", &self.second)
            .finish()
    }
}

impl_compose_operator!([L1, L2, A1, A2] Zip2<L1, L2, A1, A2> => ((A1, A2), (A1, A2)));

/// Three lenses on disjoint parts of the same whole, focused as a triple.
pub struct Zip3<L1, L2, L3, A1, A2, A3> {
    first: L1,
    second: L2,
    third: L3,
    _marker: PhantomData<(A1, A2, A3)>,
}

impl<L1, L2, L3, A1, A2, A3> Zip3<L1, L2, L3, A1, A2, A3> {
    /// Creates a new `Zip3`.
    #[must_use]
    pub const fn new(first: L1, second: L2, third: L3) -> Self {
        Self {
            first,
            second,
            third,
            _marker: PhantomData,
        }
    }
}

/// Zips three lenses on the same whole into a lens on a triple.
///
/// Parts are written first, second, third. The lenses must focus on
/// disjoint parts; see the [module docs](self).
///
/// # Example
///
/// ```
/// use lenskit::optics::{Lens, zip3};
/// use lenskit::lens;
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Color { red: u8, green: u8, blue: u8 }
///
/// let rgb = zip3(lens!(Color, red), lens!(Color, green), lens!(Color, blue));
/// let black = Color { red: 0, green: 0, blue: 0 };
///
/// let teal = rgb.set(black, (0, 128, 128));
/// assert_eq!(rgb.get(&teal), (0, 128, 128));
/// ```
#[must_use]
pub const fn zip3<L1, L2, L3, A1, A2, A3>(
    first: L1,
    second: L2,
    third: L3,
) -> Zip3<L1, L2, L3, A1, A2, A3> {
    Zip3::new(first, second, third)
}

impl<S, A1, A2, A3, L1, L2, L3> Lens<S, S, (A1, A2, A3), (A1, A2, A3)>
    for Zip3<L1, L2, L3, A1, A2, A3>
where
    L1: Lens<S, S, A1, A1>,
    L2: Lens<S, S, A2, A2>,
    L3: Lens<S, S, A3, A3>,
{
    fn get(&self, source: &S) -> (A1, A2, A3) {
        (
            self.first.get(source),
            self.second.get(source),
            self.third.get(source),
        )
    }

    fn set(&self, source: S, (first, second, third): (A1, A2, A3)) -> S {
        let source = self.first.set(source, first);
        let source = self.second.set(source, second);
        self.third.set(source, third)
    }
}

impl<L1: Clone, L2: Clone, L3: Clone, A1, A2, A3> Clone for Zip3<L1, L2, L3, A1, A2, A3> {
    fn clone(&self) -> Self {
        Self {
            first: self.first.clone(),
            second: self.second.clone(),
            third: self.third.clone(),
            _marker: PhantomData,
        }
    }
}

impl<L1: std::fmt::Debug, L2: std::fmt::Debug, L3: std::fmt::Debug, A1, A2, A3> std::fmt::Debug
    for Zip3<L1, L2, L3, A1, A2, A3>
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("Zip3")
            .field("first", &self.first)
            .field("second", &self.second)
            .field("third", &self.third)
            .finish()
    }
}

impl_compose_operator!(
    [L1, L2, L3, A1, A2, A3] Zip3<L1, L2, L3, A1, A2, A3> => ((A1, A2, A3), (A1, A2, A3))
);
