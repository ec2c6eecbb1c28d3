//! Predicates for checking the lens laws.
//!
//! Each predicate applies a lens to a concrete whole (and part) and reports
//! whether the law holds for that input. They carry no state and are meant
//! to be driven by a property-based test harness such as `proptest`, which
//! supplies randomized wholes and parts.
//!
//! One generic predicate covers every part shape (scalars, options,
//! sequences, maps, tuples): all that is needed is `PartialEq` on the value
//! being compared.
//!
//! # Example
//!
//! ```
//! use std::collections::HashMap;
//! use lenskit::optics::at_key;
//! use lenskit::optics::laws;
//!
//! let lens = at_key("k");
//! let whole = HashMap::from([("k", 1), ("j", 2)]);
//!
//! assert!(laws::set_get(&lens, whole.clone(), Some(7)));
//! assert!(laws::get_set(&lens, whole.clone()));
//! assert!(laws::set_set(&lens, whole.clone(), None));
//! assert!(laws::verify(&lens, whole, Some(3)).is_ok());
//! ```

use super::{ComposedLens, Lens};

/// **SetGet**: getting after a set yields the value that was set.
///
/// `lens.get(&lens.set(source, value)) == value`
pub fn set_get<S, A, L>(lens: &L, source: S, value: A) -> bool
where
    L: Lens<S, S, A, A>,
    A: Clone + PartialEq,
{
    lens.get(&lens.set(source, value.clone())) == value
}

/// **GetSet**: setting back what was read leaves the whole unchanged.
///
/// `lens.set(source, lens.get(&source)) == source`
pub fn get_set<S, A, L>(lens: &L, source: S) -> bool
where
    L: Lens<S, S, A, A>,
    S: Clone + PartialEq,
{
    let value = lens.get(&source);
    lens.set(source.clone(), value) == source
}

/// **SetSet**: setting the same value twice is the same as setting it once.
///
/// `lens.set(lens.set(source, value), value) == lens.set(source, value)`
pub fn set_set<S, A, L>(lens: &L, source: S, value: A) -> bool
where
    L: Lens<S, S, A, A>,
    S: Clone + PartialEq,
    A: Clone,
{
    let once = lens.set(source, value.clone());
    let twice = lens.set(once.clone(), value);
    once == twice
}

/// Checks that composing `outer` with `inner` agrees with applying them by hand.
///
/// - `get` equals `inner.get(&outer.get(source))`
/// - `set` equals `outer.set(source, inner.set(outer.get(&source), value))`
pub fn composition_consistent<S, M, A, L1, L2>(
    outer: &L1,
    inner: &L2,
    source: S,
    value: A,
) -> bool
where
    L1: Lens<S, S, M, M>,
    L2: Lens<M, M, A, A>,
    S: Clone + PartialEq,
    A: Clone + PartialEq,
{
    let composed = ComposedLens::<_, _, M, M>::new(outer, inner);

    let expected_get = inner.get(&outer.get(&source));
    let expected_set = outer.set(source.clone(), inner.set(outer.get(&source), value.clone()));

    composed.get(&source) == expected_get && composed.set(source, value) == expected_set
}

/// Probes whether two lenses focus on disjoint parts of `source`.
///
/// Holds when writing `first_value` and `second_value` gives the same whole in
/// either order, and neither write changes what the other lens reads. A
/// `true` result is evidence for the sampled input only; a `false` result
/// proves that zipping the two lenses breaks the lens laws.
///
/// # Example
///
/// ```
/// use lenskit::optics::{first, second};
/// use lenskit::optics::laws::zip_disjoint;
///
/// let left = first::<i32, i32, i32>();
/// let right = second::<i32, i32, i32>();
///
/// assert!(zip_disjoint(&left, &right, (0, 0), 1, 2));
/// assert!(!zip_disjoint(&left, &left, (0, 0), 1, 2));
/// ```
pub fn zip_disjoint<S, A1, A2, L1, L2>(
    first: &L1,
    second: &L2,
    source: S,
    first_value: A1,
    second_value: A2,
) -> bool
where
    L1: Lens<S, S, A1, A1>,
    L2: Lens<S, S, A2, A2>,
    S: Clone + PartialEq,
    A1: Clone + PartialEq,
    A2: Clone + PartialEq,
{
    let first_then_second = second.set(
        first.set(source.clone(), first_value.clone()),
        second_value.clone(),
    );
    let second_then_first = first.set(
        second.set(source.clone(), second_value.clone()),
        first_value.clone(),
    );

    let first_untouched =
        first.get(&second.set(source.clone(), second_value)) == first.get(&source);
    let second_untouched =
        second.get(&first.set(source.clone(), first_value)) == second.get(&source);

    first_then_second == second_then_first && first_untouched && second_untouched
}

/// A lens law that failed for a concrete input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LawViolation {
    /// Getting after a set did not return the value that was set.
    SetGet,
    /// Setting back the value that was read changed the whole.
    GetSet,
    /// Setting the same value twice differed from setting it once.
    SetSet,
}

impl std::fmt::Display for LawViolation {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let message = match self {
            Self::SetGet => "SetGet law violated: get after set did not return the set value",
            Self::GetSet => "GetSet law violated: setting the current value changed the whole",
            Self::SetSet => {
                "SetSet law violated: setting a value twice differed from setting it once"
            }
        };
        formatter.write_str(message)
    }
}

impl std::error::Error for LawViolation {}

/// Checks all three laws for one input, reporting the first that fails.
///
/// Laws are checked in the order GetSet, SetGet, SetSet.
///
/// # Errors
///
/// Returns the [`LawViolation`] for the first law that does not hold.
///
/// # Example
///
/// ```
/// use lenskit::optics::{FunctionLens, laws::{LawViolation, verify}};
///
/// // A setter that ignores the new value.
/// let stuck = FunctionLens::new(|pair: &(i32, i32)| pair.0, |pair: (i32, i32), _: i32| pair);
///
/// assert_eq!(verify(&stuck, (1, 2), 5), Err(LawViolation::SetGet));
/// ```
pub fn verify<S, A, L>(lens: &L, source: S, value: A) -> Result<(), LawViolation>
where
    L: Lens<S, S, A, A>,
    S: Clone + PartialEq,
    A: Clone + PartialEq,
{
    if !get_set(lens, source.clone()) {
        return Err(LawViolation::GetSet);
    }
    if !set_get(lens, source.clone(), value.clone()) {
        return Err(LawViolation::SetGet);
    }
    if !set_set(lens, source, value) {
        return Err(LawViolation::SetSet);
    }
    Ok(())
}
