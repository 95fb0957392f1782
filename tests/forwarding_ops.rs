//! Arithmetic, textual, and conversion forwarding.

use std::str::FromStr;

use num_traits::Zero;
use rawtype::newtype;

#[newtype(i64, caps(Eq, Ord, Display, Debug, Additive, Zero, Default, From, FromStr))]
pub struct Meters;

#[test]
fn display_and_debug_have_no_envelope() {
    let m = Meters::new(42);
    assert_eq!(m.to_string(), "42");
    assert_eq!(format!("{m:?}"), "42");
}

#[test]
fn addition_and_subtraction_rewrap() {
    assert_eq!(Meters::new(30) + Meters::new(12), Meters::new(42));
    assert_eq!(Meters::new(30) - Meters::new(12), Meters::new(18));
}

#[test]
fn in_place_variants_mutate_the_stored_field() {
    let mut m = Meters::new(10);
    m += Meters::new(5);
    assert_eq!(m.raw, 15);
    m -= Meters::new(20);
    assert_eq!(m.raw, -5);
}

#[test]
fn zero_wraps_the_raw_zero() {
    let zero = Meters::zero();
    assert!(zero.is_zero());
    assert_eq!(zero.raw, 0);
    assert_eq!(zero + Meters::new(3), Meters::new(3));
    assert!(!Meters::new(1).is_zero());
}

#[test]
fn default_wraps_the_raw_default() {
    assert_eq!(Meters::default(), Meters::new(0));
}

#[test]
fn from_bridges_both_directions() {
    let m = Meters::from(7i64);
    assert_eq!(m.raw, 7);
    assert_eq!(i64::from(m), 7);
}

#[test]
fn from_str_parses_through_the_raw_type() {
    assert_eq!(Meters::from_str("17"), Ok(Meters::new(17)));
    assert_eq!("-3".parse::<Meters>(), Ok(Meters::new(-3)));
    assert!("12.5".parse::<Meters>().is_err());
    assert!("not a number".parse::<Meters>().is_err());
}
