//! Unit tests for the Vector value object

use dsvec_domain::{Error, Vector};

#[test]
fn test_vector_creation_from_mixed_numeric_types() {
    let from_ints = Vector::new([1, 2, 3]);
    let from_floats = Vector::new([1.0_f32, 2.0, 3.0]);
    let from_doubles = Vector::new(vec![1.0, 2.0, 3.0]);

    assert_eq!(from_ints, from_floats);
    assert_eq!(from_floats, from_doubles);
    assert_eq!(from_ints.as_slice(), &[1.0, 2.0, 3.0]);
}

#[test]
fn test_vector_length() {
    assert_eq!(Vector::new([1.5, 2.5, 3.5, 4.5]).len(), 4);
    assert!(Vector::new(Vec::<f64>::new()).is_empty());
    assert!(Vector::default().is_empty());
}

#[test]
fn test_vector_get_in_and_out_of_range() {
    let vector = Vector::new([10, 20, 30]);
    assert_eq!(vector.get(0), Some(10.0));
    assert_eq!(vector.get(2), Some(30.0));
    assert_eq!(vector.get(3), None);
    assert_eq!(vector.get(usize::MAX), None);
}

#[test]
fn test_vector_keeps_duplicates_and_order() {
    let vector = Vector::new([3.0, 1.0, 3.0, -0.5]);
    let collected: Vec<f64> = vector.iter().copied().collect();
    assert_eq!(collected, vec![3.0, 1.0, 3.0, -0.5]);
}

#[test]
fn test_vector_stores_non_finite_values() {
    let vector = Vector::new([f64::NAN, f64::INFINITY]);
    assert!(vector.get(0).is_some_and(f64::is_nan));
    assert_eq!(vector.get(1), Some(f64::INFINITY));
}

#[test]
fn test_vector_slice_half_open() {
    let vector = Vector::new([0, 1, 2, 3, 4]);
    assert_eq!(vector.slice(Some(1), Some(3)), Vector::new([1, 2]));
    assert_eq!(vector.slice(Some(2), None), Vector::new([2, 3, 4]));
    assert_eq!(vector.slice(None, Some(2)), Vector::new([0, 1]));
    assert_eq!(vector.slice(None, None), vector);
}

#[test]
fn test_vector_slice_negative_indices() {
    let vector = Vector::new([0, 1, 2, 3, 4]);
    assert_eq!(vector.slice(Some(-2), None), Vector::new([3, 4]));
    assert_eq!(vector.slice(Some(1), Some(-1)), Vector::new([1, 2, 3]));
    assert_eq!(vector.slice(Some(-100), Some(2)), Vector::new([0, 1]));
}

#[test]
fn test_vector_slice_clamps_and_empties() {
    let vector = Vector::new([0, 1, 2]);
    assert_eq!(vector.slice(Some(1), Some(100)), Vector::new([1, 2]));
    assert!(vector.slice(Some(5), None).is_empty());
    assert!(vector.slice(Some(2), Some(1)).is_empty());
    assert!(vector.slice(Some(-1), Some(-2)).is_empty());
}

#[test]
fn test_vector_slice_does_not_mutate_receiver() {
    let vector = Vector::new([1, 2, 3]);
    let _ = vector.slice(Some(1), None);
    assert_eq!(vector, Vector::new([1, 2, 3]));
}

#[test]
fn test_vector_equality() {
    assert_eq!(Vector::new([1, 2, 3]), Vector::new([1, 2, 3]));
    assert_ne!(Vector::new([1, 2, 3]), Vector::new([1, 2, 3, 4]));
    assert_ne!(Vector::new([1, 2, 3]), Vector::new([3, 2, 1]));
}

#[test]
fn test_vector_equality_is_reflexive_with_nan() {
    let vector = Vector::new([1.0, f64::NAN]);
    assert_eq!(vector, vector.clone());
    assert_ne!(vector, Vector::new([1.0, 2.0]));
}

#[test]
fn test_vector_display() {
    assert_eq!(Vector::new([1, 2, 3]).to_string(), "Vector<1, 2, 3>");
    assert_eq!(Vector::new([1.5, -2.0]).to_string(), "Vector<1.5, -2>");
    assert_eq!(Vector::default().to_string(), "Vector<>");
    assert_eq!(
        Vector::new([f64::NAN, f64::INFINITY, f64::NEG_INFINITY, -0.0]).to_string(),
        "Vector<NaN, Infinity, -Infinity, 0>"
    );
}

#[test]
fn test_vector_parse_accepts_common_forms() {
    let expected = Vector::new([1.0, -2.5, 3.0]);
    assert_eq!("1, -2.5, 3".parse::<Vector>().unwrap(), expected);
    assert_eq!("[1 -2.5 3]".parse::<Vector>().unwrap(), expected);
    assert_eq!("Vector<1, -2.5, 3>".parse::<Vector>().unwrap(), expected);
    assert!("".parse::<Vector>().unwrap().is_empty());
}

#[test]
fn test_vector_parse_round_trips_display() {
    let vector = Vector::new([0.25, 7.0, -1.0]);
    assert_eq!(vector.to_string().parse::<Vector>().unwrap(), vector);
}

#[test]
fn test_vector_parse_rejects_non_numeric() {
    let error = "1, two, 3".parse::<Vector>().unwrap_err();
    match error {
        Error::InvalidArgument { message } => {
            assert!(message.contains("element 1"));
            assert!(message.contains("two"));
        }
        _ => panic!("Expected InvalidArgument error"),
    }
}

#[test]
fn test_vector_serde_is_a_plain_array() {
    let vector = Vector::new([1.5, 2.0]);
    let json = serde_json::to_value(&vector).unwrap();
    assert_eq!(json, serde_json::json!([1.5, 2.0]));

    let back: Vector = serde_json::from_value(json).unwrap();
    assert_eq!(back, vector);
}

#[test]
fn test_vector_conversions() {
    let values = vec![4.0, 5.0];
    let vector = Vector::from(values.clone());
    assert_eq!(Vec::<f64>::from(vector.clone()), values);
    assert_eq!(vector.clone().into_inner(), values);

    let collected: Vector = values.iter().copied().collect();
    assert_eq!(collected, vector);

    let sum: f64 = (&vector).into_iter().sum();
    assert!((sum - 9.0).abs() < f64::EPSILON);
}

#[test]
fn test_vector_display_uses_exponent_form_for_extreme_magnitudes() {
    assert_eq!(
        Vector::new([1e21, 1e-7, -1.5e-7, 123.0]).to_string(),
        "Vector<1e+21, 1e-7, -1.5e-7, 123>"
    );
    assert_eq!(Vector::new([f64::MAX]).to_string(), "Vector<1.7976931348623157e+308>");
    assert_eq!(Vector::new([1e20, 0.000001]).to_string(), "Vector<100000000000000000000, 0.000001>");
}

#[test]
fn test_vector_parse_round_trips_exponent_form() {
    let vector = Vector::new([2.5e30, -4e-9]);
    assert_eq!(vector.to_string().parse::<Vector>().unwrap(), vector);
}
