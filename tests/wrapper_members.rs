//! Generated member shape: stored field, constructor, marker impl.

use rawtype::{NewType, newtype};

#[newtype(u64)]
struct Plain;

#[newtype(String, caps(Eq, Debug, Display))]
pub struct Name;

const FIVE: Plain = Plain::new(5);

#[test]
fn constructor_stores_raw_directly() {
    let p = Plain::new(42);
    assert_eq!(p.raw, 42);
}

#[test]
fn constructor_is_const() {
    assert_eq!(FIVE.raw, 5);
}

#[test]
fn marker_impl_round_trips() {
    let p = Plain::from_raw(7);
    assert_eq!(*p.raw(), 7);
    assert_eq!(p.into_raw(), 7);
}

#[test]
fn raw_mut_reaches_the_stored_field() {
    let mut p = Plain::new(1);
    *p.raw_mut() = 9;
    assert_eq!(p.raw, 9);
}

#[test]
fn map_unwraps_transforms_rewraps() {
    let p = Plain::new(3).map(|r| r * 2);
    assert_eq!(p.raw, 6);
}

#[test]
fn non_copy_raw_types_wrap_too() {
    let n = Name::new("ada".to_string());
    assert_eq!(n.to_string(), "ada");
    assert_eq!(n, Name::new("ada".to_string()));
}
