//! Tests for `#[derive(Lenses)]`.
//!
//! Each named field `foo` gets an associated `foo_lens()` returning a lens
//! from the struct to that field.

use lenskit::Lenses;
use lenskit::optics::{Lens, at_key, laws, zip};
use proptest::prelude::*;
use rstest::rstest;
use std::collections::BTreeMap;

// =============================================================================
// Test Structures
// =============================================================================

/// Simple struct with basic field types
#[derive(Clone, PartialEq, Debug, Lenses)]
struct Point {
    x: i32,
    y: i32,
}

/// Nested struct for composition testing
#[derive(Clone, PartialEq, Debug, Lenses)]
struct Address {
    street: String,
    city: String,
}

/// Struct with a nested struct and a map
#[derive(Clone, PartialEq, Debug, Lenses)]
struct Account {
    owner: String,
    address: Address,
    limits: BTreeMap<String, u64>,
}

/// Struct with generic type parameter
#[derive(Clone, PartialEq, Debug, Lenses)]
struct Container<T> {
    value: T,
    label: String,
}

fn account() -> Account {
    Account {
        owner: "Alice".to_string(),
        address: Address {
            street: "Main St".to_string(),
            city: "Tokyo".to_string(),
        },
        limits: BTreeMap::from([("daily".to_string(), 500)]),
    }
}

// =============================================================================
// Basic Tests
// =============================================================================

#[rstest]
#[case(Point { x: 10, y: 20 }, 10, 20)]
#[case(Point { x: -1, y: 0 }, -1, 0)]
fn test_derived_lens_get(#[case] point: Point, #[case] x: i32, #[case] y: i32) {
    assert_eq!(Point::x_lens().get(&point), x);
    assert_eq!(Point::y_lens().get(&point), y);
}

#[test]
fn test_derived_lens_set_leaves_other_fields() {
    let updated = Point::x_lens().set(Point { x: 10, y: 20 }, 100);
    assert_eq!(updated, Point { x: 100, y: 20 });
}

#[test]
fn test_derived_lens_modify() {
    let doubled = Point::y_lens().modify(Point { x: 1, y: 4 }, |y: i32| y * 2);
    assert_eq!(doubled, Point { x: 1, y: 8 });
}

#[test]
fn test_derived_lens_is_clone() {
    let owner = Account::owner_lens();
    let copy = owner.clone();

    assert_eq!(owner.get(&account()), copy.get(&account()));
}

// =============================================================================
// Composition Tests
// =============================================================================

#[test]
fn test_derived_lens_composition() {
    let city = Account::address_lens().compose(Address::city_lens());

    assert_eq!(city.get(&account()), "Tokyo");

    let moved = city.set(account(), "Osaka".to_string());
    assert_eq!(moved.address.city, "Osaka");
    assert_eq!(moved.address.street, "Main St");
    assert_eq!(moved.owner, "Alice");
}

#[test]
fn test_derived_lens_then_key() {
    let weekly = Account::limits_lens().compose(at_key("weekly".to_string()));

    assert_eq!(weekly.get(&account()), None);

    let raised = weekly.set(account(), Some(2_000));
    assert_eq!(raised.limits.len(), 2);
    assert_eq!(raised.limits["weekly"], 2_000);
}

#[test]
fn test_derived_lenses_zip() {
    let owner_and_city = zip(
        Account::owner_lens(),
        Account::address_lens().compose(Address::city_lens()),
    );

    let updated = owner_and_city.set(account(), ("Bob".to_string(), "Kyoto".to_string()));
    assert_eq!(
        owner_and_city.get(&updated),
        ("Bob".to_string(), "Kyoto".to_string())
    );
    assert_eq!(updated.address.street, "Main St");
}

// =============================================================================
// Generic Structs
// =============================================================================

#[test]
fn test_derived_lens_generic_struct() {
    let container = Container {
        value: 42,
        label: "answer".to_string(),
    };

    let value = Container::<i32>::value_lens();
    assert_eq!(value.get(&container), 42);

    let relabeled = Container::<i32>::label_lens().set(container, "question".to_string());
    assert_eq!(relabeled.label, "question");
    assert_eq!(relabeled.value, 42);
}

// =============================================================================
// Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_derived_point_lenses_satisfy_laws(x: i32, y: i32, value: i32) {
        let point = Point { x, y };
        prop_assert_eq!(laws::verify(&Point::x_lens(), point.clone(), value), Ok(()));
        prop_assert_eq!(laws::verify(&Point::y_lens(), point, value), Ok(()));
    }

    #[test]
    fn prop_derived_fields_are_disjoint(x: i32, y: i32, new_x: i32, new_y: i32) {
        let point = Point { x, y };
        prop_assert!(laws::zip_disjoint(
            &Point::x_lens(),
            &Point::y_lens(),
            point,
            new_x,
            new_y
        ));
    }
}
