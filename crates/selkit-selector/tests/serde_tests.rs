//! Integration tests for selector serialization.

use selkit_common::json::{JsonError, from_json, to_json};
use selkit_selector::{CombinedSelector, SelectorBuilder, combine, element};

#[test]
fn test_builder_serializes_as_fragments() {
    let selector = element("a").pseudo_class("hover").unwrap();
    assert_eq!(
        to_json(&selector).unwrap(),
        r#"[{"kind":"element","value":"a"},{"kind":"pseudo-class","value":"hover"}]"#
    );
}

#[test]
fn test_builder_survives_json() {
    let selector = element("div")
        .id("main")
        .unwrap()
        .attr("data-x")
        .unwrap()
        .pseudo_element("after")
        .unwrap();
    let restored: SelectorBuilder = from_json(&to_json(&selector).unwrap()).unwrap();
    assert_eq!(restored.stringify(), "div#main[data-x]::after");
    assert_eq!(restored, selector);
}

#[test]
fn test_out_of_order_json_is_rejected() {
    let json = r#"[{"kind":"class","value":"x"},{"kind":"id","value":"y"}]"#;
    let result: Result<SelectorBuilder, JsonError> = from_json(json);
    let err = result.unwrap_err();
    assert!(matches!(err, JsonError::Deserialize(_)));
    assert!(err.to_string().contains("selector parts should be arranged"));
}

#[test]
fn test_combined_selector_json() {
    let combined = combine(&element("ul"), ">", &element("li"));
    let json = to_json(&combined).unwrap();
    assert_eq!(json, r#"{"selector":"ul > li"}"#);
    let restored: CombinedSelector = from_json(&json).unwrap();
    assert_eq!(restored, combined);
}
