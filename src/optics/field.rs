//! Lenses built from field projections.
//!
//! A [`KeyPathLens`] is made of two projections into the same field: a
//! shared one used by `get`, and a mutable one used by `set` to write the
//! new value into the whole it was handed. The [`lens!`](crate::lens) macro
//! writes both projections for a field path, so `lens!(Person, address.city)`
//! is all it takes to focus on a nested field.

use std::marker::PhantomData;

use super::Lens;

/// A lens that reads and writes a field through projections.
///
/// # Type Parameters
///
/// - `S`: The whole
/// - `A`: The field type
/// - `P`: The shared projection, `Fn(&S) -> &A`
/// - `Pm`: The mutable projection, `Fn(&mut S) -> &mut A`
///
/// # Example
///
/// ```
/// use lenskit::optics::{KeyPathLens, Lens};
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Counter { hits: u64 }
///
/// let hits = KeyPathLens::new(
///     |counter: &Counter| &counter.hits,
///     |counter: &mut Counter| &mut counter.hits,
/// );
///
/// let counter = hits.modify(Counter { hits: 1 }, |hits| hits + 1);
/// assert_eq!(counter, Counter { hits: 2 });
/// ```
pub struct KeyPathLens<S, A, P, Pm> {
    project: P,
    project_mut: Pm,
    _marker: PhantomData<(S, A)>,
}

impl<S, A, P, Pm> KeyPathLens<S, A, P, Pm>
where
    P: Fn(&S) -> &A,
    Pm: Fn(&mut S) -> &mut A,
{
    /// Creates a new `KeyPathLens` from a shared and a mutable projection.
    ///
    /// Both projections must reach the same field.
    #[must_use]
    pub const fn new(project: P, project_mut: Pm) -> Self {
        Self {
            project,
            project_mut,
            _marker: PhantomData,
        }
    }

    /// Borrows the focused field without cloning it.
    pub fn view<'a>(&self, source: &'a S) -> &'a A {
        (self.project)(source)
    }
}

impl<S, A, P, Pm> Lens<S, S, A, A> for KeyPathLens<S, A, P, Pm>
where
    A: Clone,
    P: Fn(&S) -> &A,
    Pm: Fn(&mut S) -> &mut A,
{
    fn get(&self, source: &S) -> A {
        (self.project)(source).clone()
    }

    fn set(&self, mut source: S, value: A) -> S {
        *(self.project_mut)(&mut source) = value;
        source
    }
}

impl<S, A, P: Clone, Pm: Clone> Clone for KeyPathLens<S, A, P, Pm> {
    fn clone(&self) -> Self {
        Self {
            project: self.project.clone(),
            project_mut: self.project_mut.clone(),
            _marker: PhantomData,
        }
    }
}

impl<S, A, P, Pm> std::fmt::Debug for KeyPathLens<S, A, P, Pm> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("KeyPathLens")
            .finish_non_exhaustive()
    }
}

impl_compose_operator!([S, A, P, Pm] KeyPathLens<S, A, P, Pm> => (A, A));

/// Creates a lens for a struct field or a dotted path of fields.
///
/// The macro expands to a [`KeyPathLens`](crate::optics::KeyPathLens) whose
/// projections follow the given path.
///
/// # Syntax
///
/// ```text
/// lens!(StructType, field)
/// lens!(StructType, field.nested.leaf)
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
/// let city = lens!(Person, address.city);
///
/// let person = Person {
///     name: "Alice".to_string(),
///     address: Address { street: "Main St".to_string(), city: "Tokyo".to_string() },
/// };
///
/// assert_eq!(city.get(&person), "Tokyo");
/// let moved = city.set(person, "Osaka".to_string());
/// assert_eq!(moved.address.city, "Osaka");
/// assert_eq!(moved.address.street, "Main St");
/// ```
///
/// Generic structs take their type arguments in the first position:
///
/// ```
/// use lenskit::optics::Lens;
/// use lenskit::lens;
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Tagged<T> { tag: &'static str, value: T }
///
/// let value = lens!(Tagged<i32>, value);
/// let tagged = Tagged { tag: "n", value: 1 };
/// assert_eq!(value.set(tagged, 2), Tagged { tag: "n", value: 2 });
/// ```
#[macro_export]
macro_rules! lens {
    ($struct_type:ty, $($field:tt).+) => {
        $crate::optics::KeyPathLens::new(
            |source: &$struct_type| &source.$($field).+,
            |source: &mut $struct_type| &mut source.$($field).+,
        )
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Debug)]
    struct Point {
        x: i32,
        y: i32,
    }

    #[derive(Clone, PartialEq, Debug)]
    struct Segment {
        start: Point,
        end: Point,
    }

    #[test]
    fn test_lens_macro_get_set() {
        let x_lens = crate::lens!(Point, x);
        let point = Point { x: 10, y: 20 };

        assert_eq!(x_lens.get(&point), 10);
        assert_eq!(x_lens.set(point, 1), Point { x: 1, y: 20 });
    }

    #[test]
    fn test_lens_macro_nested_path() {
        let end_y = crate::lens!(Segment, end.y);
        let segment = Segment {
            start: Point { x: 0, y: 0 },
            end: Point { x: 3, y: 4 },
        };

        assert_eq!(end_y.get(&segment), 4);
        let updated = end_y.modify(segment, |y| -y);
        assert_eq!(updated.end, Point { x: 3, y: -4 });
        assert_eq!(updated.start, Point { x: 0, y: 0 });
    }

    #[test]
    fn test_nested_path_matches_composition() {
        let segment = Segment {
            start: Point { x: 1, y: 2 },
            end: Point { x: 3, y: 4 },
        };
        let path = crate::lens!(Segment, start.x);
        let composed = crate::lens!(Segment, start) >> crate::lens!(Point, x);

        assert_eq!(path.get(&segment), composed.get(&segment));
        assert_eq!(path.set(segment.clone(), 9), composed.set(segment, 9));
    }

    #[test]
    fn test_view_borrows() {
        let start = crate::lens!(Segment, start);
        let segment = Segment {
            start: Point { x: 1, y: 2 },
            end: Point { x: 3, y: 4 },
        };
        assert!(std::ptr::eq(start.view(&segment), &segment.start));
    }
}
