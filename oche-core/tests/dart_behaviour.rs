//! Behavioural tests for dart construction using rstest-bdd.

use std::cell::RefCell;

use oche_core::{Dart, DartParseError};
use rstest::fixture;
use rstest_bdd_macros::{scenario, then, when};

#[derive(Debug, Default)]
struct DartWorld {
    result: RefCell<Option<Result<Dart, DartParseError>>>,
}

#[fixture]
fn world() -> DartWorld {
    DartWorld::default()
}

#[when("I create the dart {notation}")]
fn create_dart(world: &DartWorld, notation: String) {
    world.result.replace(Some(notation.parse()));
}

#[then("the dart is created")]
fn dart_created(world: &DartWorld) {
    assert!(matches!(*world.result.borrow(), Some(Ok(_))));
}

#[then("a dart error is returned")]
fn dart_error(world: &DartWorld) {
    assert!(matches!(
        *world.result.borrow(),
        Some(Err(DartParseError::Invalid(_)))
    ));
}

#[then("the dart is worth {value}")]
fn dart_worth(world: &DartWorld, value: u16) {
    let worth = world
        .result
        .borrow()
        .as_ref()
        .and_then(|result| result.as_ref().ok())
        .map(|dart| dart.value());
    assert_eq!(worth, Some(value));
}

#[scenario(path = "tests/features/dart.feature", index = 0)]
fn treble_twenty(world: DartWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/dart.feature", index = 1)]
fn bullseye(world: DartWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/dart.feature", index = 2)]
fn treble_bull_rejected(world: DartWorld) {
    let _ = world;
}
