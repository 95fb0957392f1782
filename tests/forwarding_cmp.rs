//! Equality, ordering, and hashing forward exactly to the raw value.

use std::hash::{DefaultHasher, Hash, Hasher};

use rawtype::newtype;

#[newtype(i32, caps(Eq, Ord, Hash))]
pub struct Version;

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

const SAMPLES: [i32; 6] = [i32::MIN, -7, 0, 1, 7, i32::MAX];

#[test]
fn equality_matches_raw_equality() {
    for a in SAMPLES {
        for b in SAMPLES {
            assert_eq!(Version::new(a) == Version::new(b), a == b);
        }
    }
}

#[test]
fn ordering_matches_raw_ordering() {
    for a in SAMPLES {
        for b in SAMPLES {
            assert_eq!(Version::new(a) < Version::new(b), a < b);
            assert_eq!(Version::new(a).cmp(&Version::new(b)), a.cmp(&b));
        }
    }
}

#[test]
fn hash_is_exactly_the_raw_hash() {
    for a in SAMPLES {
        assert_eq!(hash_of(&Version::new(a)), hash_of(&a));
    }
}

#[test]
fn wrappers_sort_like_raw_values() {
    let mut wrapped: Vec<Version> = SAMPLES.iter().rev().map(|&v| Version::new(v)).collect();
    wrapped.sort();
    let raw: Vec<i32> = wrapped.into_iter().map(|w| w.raw).collect();
    let mut expected = SAMPLES.to_vec();
    expected.sort();
    assert_eq!(raw, expected);
}
