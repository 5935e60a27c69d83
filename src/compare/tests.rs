use super::core::*;
use proptest::prelude::*;
use std::cmp::Ordering;

#[test]
fn test_integer_order() {
    assert_eq!(3i32.compare(&1), Ordering::Greater);
    assert_eq!(i64::MIN.compare(&i64::MAX), Ordering::Less);
    assert_eq!(7u8.compare(&7), Ordering::Equal);
}

#[test]
fn test_string_order_is_bytewise() {
    assert_eq!("a".compare("b"), Ordering::Less);
    assert_eq!("".compare("a"), Ordering::Less);
    assert_eq!("B".compare("a"), Ordering::Less);
    assert_eq!(String::from("100").compare(&String::from("2")), Ordering::Less);
    assert_eq!(b"z".to_vec().compare(&b"a".to_vec()), Ordering::Greater);
}

#[test]
fn test_nan_is_less_than_everything() {
    assert_eq!(f64::NAN.compare(&f64::NEG_INFINITY), Ordering::Less);
    assert_eq!(f64::NAN.compare(&f64::MIN), Ordering::Less);
    assert_eq!(0.0f64.compare(&f64::NAN), Ordering::Greater);
    assert_eq!(f32::NAN.compare(&-1.0), Ordering::Less);
}

#[test]
fn test_nan_equals_nan() {
    assert_eq!(f64::NAN.compare(&f64::NAN), Ordering::Equal);
    assert_eq!((-f64::NAN).compare(&f64::NAN), Ordering::Equal);
}

#[test]
fn test_negative_zero_equals_zero() {
    assert_eq!((-0.0f64).compare(&0.0), Ordering::Equal);
    assert_eq!(0.0f32.compare(&-0.0), Ordering::Equal);
}

#[test]
fn test_ascending_on_references() {
    let a = "apple";
    let b = "banana";
    assert_eq!(ascending(&a, &b), Ordering::Less);
    assert_eq!(ascending(a, b), Ordering::Less);
}

#[test]
fn test_is_sorted_by() {
    let mut cmp = ascending::<i32>;
    assert!(is_sorted_by(&[] as &[i32], &mut cmp));
    assert!(is_sorted_by(&[1], &mut cmp));
    assert!(is_sorted_by(&[1, 1, 2, 3], &mut cmp));
    assert!(!is_sorted_by(&[1, 3, 2], &mut cmp));
    assert!(!is_sorted_by(&[5, 4, 3, 2, 1], &mut cmp));
}

#[test]
fn test_is_sorted_by_floats_with_nan() {
    let mut cmp = ascending::<f64>;
    assert!(is_sorted_by(&[f64::NAN, f64::NAN, -1.0, 0.0, -0.0, 2.0], &mut cmp));
    assert!(!is_sorted_by(&[0.0, f64::NAN], &mut cmp));
}

#[test]
fn test_is_sorted_by_custom_rule() {
    let mut descending = |a: &i32, b: &i32| b.cmp(a);
    assert!(is_sorted_by(&[3, 2, 2, 1], &mut descending));
    assert!(!is_sorted_by(&[1, 2], &mut descending));
}

proptest! {
    #[test]
    fn prop_float_order_is_antisymmetric(a in any::<f64>(), b in any::<f64>()) {
        prop_assert_eq!(a.compare(&b), b.compare(&a).reverse());
    }

    #[test]
    fn prop_float_order_is_transitive(a in any::<f64>(), b in any::<f64>(), c in any::<f64>()) {
        if a.compare(&b) != Ordering::Greater && b.compare(&c) != Ordering::Greater {
            prop_assert_ne!(a.compare(&c), Ordering::Greater);
        }
    }

    #[test]
    fn prop_std_sort_output_is_sorted(mut v in proptest::collection::vec(any::<f64>(), 0..32)) {
        v.sort_by(|a, b| a.compare(b));
        prop_assert!(is_sorted_by(&v, &mut ascending::<f64>));
    }
}
