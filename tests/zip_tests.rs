//! Tests for zipped lenses.
//!
//! - `get` reads every part into a tuple
//! - `set` writes the parts first to last
//! - disjoint lenses commute; overlapping ones do not

use lenskit::lens;
use lenskit::optics::{Lens, Zip2, at_key, first, laws, second, zip, zip3};
use rstest::rstest;
use std::collections::HashMap;

#[derive(Clone, PartialEq, Debug)]
struct Window {
    title: String,
    width: u32,
    height: u32,
    visible: bool,
}

fn window() -> Window {
    Window {
        title: "main".to_string(),
        width: 800,
        height: 600,
        visible: true,
    }
}

#[rstest]
#[case(1024, 768)]
#[case(0, 0)]
fn test_zip_set_writes_both_parts(#[case] width: u32, #[case] height: u32) {
    let size = zip(lens!(Window, width), lens!(Window, height));
    let resized = size.set(window(), (width, height));

    assert_eq!(size.get(&resized), (width, height));
    assert_eq!(resized.title, "main");
    assert!(resized.visible);
}

#[test]
fn test_zip_method_matches_function() {
    let via_method = lens!(Window, width).zip(lens!(Window, visible));
    let via_function = zip(lens!(Window, width), lens!(Window, visible));

    assert_eq!(via_method.get(&window()), via_function.get(&window()));
    assert_eq!(
        via_method.set(window(), (1, false)),
        via_function.set(window(), (1, false))
    );
}

#[test]
fn test_zip3_reads_and_writes_triple() {
    let geometry = zip3(
        lens!(Window, width),
        lens!(Window, height),
        lens!(Window, visible),
    );

    assert_eq!(geometry.get(&window()), (800, 600, true));

    let hidden = geometry.set(window(), (10, 20, false));
    assert_eq!(
        hidden,
        Window {
            title: "main".to_string(),
            width: 10,
            height: 20,
            visible: false,
        }
    );
}

#[test]
fn test_zip_of_map_entries() {
    let bounds = zip(at_key("min"), at_key("max"));
    let empty: HashMap<&str, i32> = HashMap::new();

    let filled = bounds.set(empty, (Some(0), Some(100)));
    assert_eq!(bounds.get(&filled), (Some(0), Some(100)));

    let cleared = bounds.set(filled, (None, None));
    assert!(cleared.is_empty());
}

#[test]
fn test_zip_composes_with_tuple_lens() {
    let width = zip(lens!(Window, width), lens!(Window, height)) >> first();
    let height = zip(lens!(Window, width), lens!(Window, height)) >> second();

    let widened = width.set(window(), 1920);
    assert_eq!(height.get(&widened), 600);
    assert_eq!(widened.width, 1920);
}

#[test]
fn test_overlapping_zip_last_write_wins() {
    let twice: Zip2<_, _, u32, u32> = zip(lens!(Window, width), lens!(Window, width));
    let written = twice.set(window(), (1, 2));

    assert_eq!(written.width, 2);
    assert_eq!(laws::verify(&twice, window(), (1, 2)), Err(laws::LawViolation::SetGet));
}

#[test]
fn test_disjointness_probe() {
    assert!(laws::zip_disjoint(
        &lens!(Window, title),
        &lens!(Window, visible),
        window(),
        "other".to_string(),
        false
    ));
    assert!(!laws::zip_disjoint(
        &lens!(Window, width),
        &lens!(Window, width),
        window(),
        1,
        2
    ));
}
