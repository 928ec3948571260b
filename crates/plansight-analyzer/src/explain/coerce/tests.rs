use super::*;
use serde_json::json;

#[test]
fn test_numbers_pass_through() {
    assert_eq!(coerce_number(&json!(12.3)), Some(12.3));
    assert_eq!(coerce_number(&json!(1000)), Some(1000.0));
    assert_eq!(coerce_number(&json!(0)), Some(0.0));
    assert_eq!(coerce_number(&json!(-4.5)), Some(-4.5));
}

#[test]
fn test_numeric_strings_are_parsed() {
    assert_eq!(coerce_number(&json!("10.50")), Some(10.5));
    assert_eq!(coerce_number(&json!(" 7 ")), Some(7.0));
    assert_eq!(coerce_number(&json!("1e3")), Some(1000.0));
    assert_eq!(coerce_str(Some("0.0032831")), Some(0.0032831));
}

#[test]
fn test_non_numeric_text_is_absent_not_zero() {
    assert_eq!(coerce_number(&json!("")), None);
    assert_eq!(coerce_number(&json!("   ")), None);
    assert_eq!(coerce_number(&json!("abc")), None);
    assert_eq!(coerce_number(&json!("12abc")), None);
    assert_eq!(coerce_str(Some("NaN")), None);
    assert_eq!(coerce_str(Some("inf")), None);
    assert_eq!(coerce_str(None), None);
}

#[test]
fn test_other_kinds_are_absent() {
    assert_eq!(coerce_number(&json!(null)), None);
    assert_eq!(coerce_number(&json!(true)), None);
    assert_eq!(coerce_number(&json!({ "query_cost": "1.0" })), None);
    assert_eq!(coerce_number(&json!([1, 2])), None);
    assert_eq!(coerce_field(None), None);
    assert_eq!(coerce_field(Some(&json!("2.5"))), Some(2.5));
}

#[test]
fn test_trim_text_strips_byte_order_marks() {
    assert_eq!(trim_text("\u{feff} [1] \n"), "[1]");
    assert_eq!(trim_text("\u{feff}"), "");
    assert_eq!(coerce_str(Some("\u{feff}42")), Some(42.0));
}
