//! End-to-end tests for the `selkit` binary.

use assert_cmd::Command;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::{contains, diff};

fn selkit() -> Command {
    Command::cargo_bin("selkit").unwrap()
}

#[test]
fn test_prints_compound_selector() {
    let _ = selkit()
        .args(["element=div", "id=main", "class=container", "class=draggable"])
        .assert()
        .success()
        .stdout(diff("div#main.container.draggable\n"));
}

#[test]
fn test_prints_combined_selector() {
    let _ = selkit()
        .args(["element=table", "id=data", "~", "element=tr", "+", "class=row"])
        .assert()
        .success()
        .stdout(diff("table#data ~ tr + .row\n"));
}

#[test]
fn test_attribute_value_verbatim() {
    let _ = selkit()
        .args(["element=a", r#"attr=href$=".png""#, "pseudo-class=focus"])
        .assert()
        .success()
        .stdout(diff("a[href$=\".png\"]:focus\n"));
}

#[test]
fn test_json_output() {
    let _ = selkit()
        .args(["--json", "element=ul", ">", "element=li"])
        .assert()
        .success()
        .stdout(contains(r#""selector":"ul > li""#).and(contains(r#""combinators":[">"]"#)));
}

#[test]
fn test_duplicate_singleton_fails() {
    let _ = selkit()
        .args(["id=x", "id=y"])
        .assert()
        .failure()
        .code(1)
        .stderr(contains(
            "element, id and pseudo-element should not occur more than one time inside the selector",
        ));
}

#[test]
fn test_order_violation_fails() {
    let _ = selkit()
        .args(["class=x", "id=y"])
        .assert()
        .failure()
        .stderr(contains("selector parts should be arranged in the following order"));
}

#[test]
fn test_custom_combinator_warns() {
    let _ = selkit()
        .args(["element=col", "combinator=||", "element=td"])
        .assert()
        .success()
        .stdout(diff("col || td\n"))
        .stderr(contains("non-standard combinator `||`"));
}

#[test]
fn test_no_parts_is_usage_error() {
    let _ = selkit().assert().failure();
}

#[test]
fn test_flags_after_parts() {
    let _ = selkit()
        .args(["element=a", "--json"])
        .assert()
        .success()
        .stdout(contains(r#""selector":"a""#));
}
