#![cfg(feature = "ordering")]
//! Integration tests for the ordering operations.

use gather::ordering::{group_by, group_by_path, range, sort_by, sorted_index, sorted_index_by};
use gather::traversal::pluck;
use gather::value::{Function, Value};
use gather::{array, object};
use rstest::rstest;

// =============================================================================
// range
// =============================================================================

#[rstest]
#[case(None, None, None, vec![])]
#[case(Some(0.0), None, None, vec![])]
#[case(Some(4.0), None, None, vec![0.0, 1.0, 2.0, 3.0])]
#[case(Some(5.0), Some(8.0), None, vec![5.0, 6.0, 7.0])]
#[case(Some(8.0), Some(5.0), None, vec![])]
#[case(Some(3.0), Some(10.0), Some(3.0), vec![3.0, 6.0, 9.0])]
#[case(Some(3.0), Some(10.0), Some(15.0), vec![3.0])]
#[case(Some(12.0), Some(7.0), Some(-2.0), vec![12.0, 10.0, 8.0])]
fn range_progressions(
    #[case] start_or_stop: Option<f64>,
    #[case] stop: Option<f64>,
    #[case] step: Option<f64>,
    #[case] expected: Vec<f64>,
) {
    assert_eq!(range(start_or_stop, stop, step), expected);
}

#[rstest]
fn range_with_fractional_start() {
    let progression = range(Some(2.32), Some(5.78), None);
    assert_eq!(progression.len(), 4);
    assert!((progression[3] - 5.32).abs() < 1e-9);
}

#[rstest]
#[case(Some(1e19), None, None)]
#[case(Some(0.0), Some(1e12), Some(0.5))]
fn range_too_long_to_build_is_empty(
    #[case] start_or_stop: Option<f64>,
    #[case] stop: Option<f64>,
    #[case] step: Option<f64>,
) {
    assert!(range(start_or_stop, stop, step).is_empty());
}

// =============================================================================
// shuffle
// =============================================================================

#[cfg(feature = "random")]
mod shuffle {
    use gather::ordering::{range, shuffle, shuffle_with};
    use gather::value::Value;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rstest::rstest;

    #[rstest]
    fn shuffle_is_a_permutation() {
        let numbers = Value::from(range(Some(10.0), None, None));
        let mut shuffled = shuffle(&numbers);
        assert_eq!(shuffled.len(), 10);
        shuffled.sort_by(|left, right| left.to_number().total_cmp(&right.to_number()));
        assert_eq!(Value::from(shuffled), numbers);
    }

    #[rstest]
    fn seeded_shuffles_repeat() {
        let numbers = Value::from(range(Some(20.0), None, None));
        let first = shuffle_with(&numbers, &mut StdRng::seed_from_u64(2024));
        let second = shuffle_with(&numbers, &mut StdRng::seed_from_u64(2024));
        assert_eq!(first, second);
    }

    #[rstest]
    fn shuffle_of_mapping_values() {
        let mut shuffled = shuffle(&gather::object! { "a" => 1, "b" => 2 });
        shuffled.sort_by(|left, right| left.to_number().total_cmp(&right.to_number()));
        assert_eq!(shuffled, vec![Value::from(1), Value::from(2)]);
    }
}

// =============================================================================
// sort_by
// =============================================================================

#[rstest]
fn sort_by_age() {
    let people = array![
        object! { "name" => "curly", "age" => 50 },
        object! { "name" => "moe", "age" => 30 },
    ];
    let sorted = Value::from(sort_by(&people, |person, _, _| person.property("age").unwrap_or_default()));
    assert_eq!(Value::Array(pluck(&sorted, "name")).to_string(), "moe,curly");
}

#[rstest]
fn sort_by_is_stable() {
    let pairs = array![
        object! { "key" => 1, "tag" => "a" },
        object! { "key" => 0, "tag" => "b" },
        object! { "key" => 1, "tag" => "c" },
        object! { "key" => 0, "tag" => "d" },
    ];
    let sorted = Value::from(sort_by(&pairs, |pair, _, _| pair.property("key").unwrap_or_default()));
    assert_eq!(Value::Array(pluck(&sorted, "tag")).to_string(), "b,d,a,c");
}

#[rstest]
fn sort_by_with_context() {
    let context = object! { "sign" => -1 };
    let signed = Function::new(|receiver, arguments| {
        let sign = receiver.property("sign").unwrap_or_default();
        Value::from(arguments[0].to_number() * sign.to_number())
    });
    let sorted = sort_by(&array![1, 3, 2], signed.iteratee(&context));
    assert_eq!(Value::from(sorted), array![3, 2, 1]);
}

// =============================================================================
// group_by
// =============================================================================

#[rstest]
fn group_by_parity() {
    let parity = group_by(&array![1, 2, 3, 4, 5, 6], |number, _| number.to_number() % 2.0);
    assert!(parity.contains_key("0") && parity.contains_key("1"));
    assert_eq!(parity.get("0").map(ToString::to_string), Some("2,4,6".to_owned()));
}

#[rstest]
fn group_by_length() {
    let list = array!["one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten"];
    let grouped = group_by_path(&list, "length");
    assert_eq!(grouped.get("3"), Some(&array!["one", "two", "six", "ten"]));
    assert_eq!(grouped.get("4"), Some(&array!["four", "five", "nine"]));
    assert_eq!(grouped.get("5"), Some(&array!["three", "seven", "eight"]));
}

#[rstest]
fn group_by_nested_path() {
    let objects = array![
        object! { "o" => object! { "a" => 12 } },
        object! { "o" => object! { "a" => 5 } },
        object! { "o" => object! { "a" => 7 } },
    ];
    let grouped = group_by_path(&objects, "o.a");
    assert!(grouped.contains_key("5") && grouped.contains_key("7") && grouped.contains_key("12"));
}

#[rstest]
fn group_by_missing_segment_keeps_the_deepest_value() {
    let objects = array![object! { "o" => 1 }, object! { "o" => object! { "a" => 2 } }];
    let grouped = group_by_path(&objects, "o.a");
    assert_eq!(grouped.get("1"), Some(&array![object! { "o" => 1 }]));
    assert!(grouped.contains_key("2"));
}

// =============================================================================
// sorted_index
// =============================================================================

#[rstest]
fn sorted_index_of_thirty_five() {
    assert_eq!(sorted_index(&array![10, 20, 30, 40, 50], &Value::from(35)), 3);
}

#[rstest]
fn sorted_index_with_key() {
    let people = array![object! { "age" => 20 }, object! { "age" => 30 }, object! { "age" => 40 }];
    let index = sorted_index_by(&people, &object! { "age" => 30 }, |person| {
        person.property("age").unwrap_or_default()
    });
    assert_eq!(index, 1);
}

#[rstest]
fn sorted_index_of_absent_is_zero() {
    assert_eq!(sorted_index(&Value::Null, &Value::from(1)), 0);
}
