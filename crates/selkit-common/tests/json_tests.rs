//! Integration tests for the JSON helpers.

use selkit_common::json::{JsonError, from_json, to_json, to_json_pretty};
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Sample {
    name: String,
    count: u32,
}

#[test]
fn test_to_json_compact() {
    let sample = Sample {
        name: "nav".to_string(),
        count: 2,
    };
    assert_eq!(to_json(&sample).unwrap(), r#"{"name":"nav","count":2}"#);
}

#[test]
fn test_to_json_pretty_is_indented() {
    let sample = Sample {
        name: "nav".to_string(),
        count: 2,
    };
    let json = to_json_pretty(&sample).unwrap();
    assert!(json.contains("\n  \"name\": \"nav\""));
}

#[test]
fn test_from_json() {
    let sample: Sample = from_json(r#"{"name":"main","count":7}"#).unwrap();
    assert_eq!(
        sample,
        Sample {
            name: "main".to_string(),
            count: 7,
        }
    );
}

#[test]
fn test_from_json_malformed() {
    let result: Result<Sample, _> = from_json("{\"name\":");
    assert!(matches!(result, Err(JsonError::Deserialize(_))));
}

#[test]
fn test_from_json_wrong_shape() {
    let result: Result<Sample, _> = from_json(r#"{"name":"main"}"#);
    let err = result.unwrap_err();
    assert!(err.to_string().starts_with("failed to deserialize from JSON"));
}
