//! Stride and identity forwarding.

use rawtype::{Identified, Stride, newtype};

#[newtype(i64, caps(Eq, Debug, Stride))]
pub struct Offset;

#[derive(Clone)]
pub struct User {
    uid: u32,
    #[allow(dead_code)]
    name: String,
}

impl Identified for User {
    type Id = u32;

    fn id(&self) -> u32 {
        self.uid
    }
}

#[newtype(User, caps(Id))]
pub struct Account;

#[test]
fn distance_is_computed_on_raw_values() {
    let a = Offset::new(10);
    let b = Offset::new(25);
    assert_eq!(a.distance_to(&b), Offset::new(15));
    assert_eq!(b.distance_to(&a), Offset::new(-15));
}

#[test]
fn advance_rewraps_the_raw_result() {
    let a = Offset::new(10);
    assert_eq!(a.advanced_by(&Offset::new(-3)), Offset::new(7));
}

#[test]
fn advancing_by_a_distance_lands_on_the_target() {
    let a = Offset::new(-4);
    let b = Offset::new(99);
    assert_eq!(a.advanced_by(&a.distance_to(&b)), b);
}

#[test]
fn id_is_the_raw_values_id_unchanged() {
    let account = Account::new(User {
        uid: 7,
        name: "ada".to_string(),
    });
    assert_eq!(account.id(), 7);
}
