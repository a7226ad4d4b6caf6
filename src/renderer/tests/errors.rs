use crate::bindings::Bindings;
use crate::errors::{BindingKind, ErrorKind, Result};
use crate::renderer::Renderer;

use super::row;

fn render_template(content: &str, bindings: &Bindings) -> Result<String> {
    Renderer::new(content, bindings).render()
}

#[test]
fn error_unbound_scalar() {
    let result = render_template("Hello <name>", &Bindings::new());
    let err = result.unwrap_err();
    assert_eq!(err.to_string(), "Tag `name` not found");
    match err.kind {
        ErrorKind::UnboundTag { ref name, kind: BindingKind::Scalar } => assert_eq!(name, "name"),
        _ => panic!("unexpected error: {:?}", err),
    }
}

#[test]
fn error_unset_list() {
    let result = render_template("<#items>...</items>", &Bindings::new());
    let err = result.unwrap_err();
    assert_eq!(err.to_string(), "List parameter `items` not set");
    match err.kind {
        ErrorKind::UnboundTag { ref name, kind: BindingKind::List } => assert_eq!(name, "items"),
        _ => panic!("unexpected error: {:?}", err),
    }
}

#[test]
fn error_scalar_tag_on_list_binding() {
    let mut bindings = Bindings::new();
    bindings.insert_list("items", vec![]).unwrap();
    let err = render_template("<items>", &bindings).unwrap_err();
    assert_eq!(err.to_string(), "Tag `items` not found");
}

#[test]
fn error_block_on_scalar_binding() {
    let mut bindings = Bindings::new();
    bindings.insert_scalar("items", "x").unwrap();
    let err = render_template("<#items></items>", &bindings).unwrap_err();
    assert_eq!(err.to_string(), "List parameter `items` not set");
}

#[test]
fn error_unbound_scalar_inside_block() {
    let mut bindings = Bindings::new();
    bindings.insert_list("items", vec![row(&[("x", "1")])]).unwrap();
    let err = render_template("<#items><x><z></items>", &bindings).unwrap_err();
    assert_eq!(err.to_string(), "Tag `z` not found");
}

#[test]
fn error_row_value_not_visible_after_block() {
    let mut bindings = Bindings::new();
    bindings.insert_list("items", vec![row(&[("x", "1")])]).unwrap();
    let err = render_template("<#items><x></items><x>", &bindings).unwrap_err();
    assert_eq!(err.to_string(), "Tag `x` not found");
}

#[test]
fn error_collision_with_outer_scalar() {
    let mut bindings = Bindings::new();
    bindings.insert_scalar("x", "A").unwrap();
    bindings.insert_list("items", vec![row(&[("x", "B")])]).unwrap();

    let err = render_template("<#items><x></items>", &bindings).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Parameter collision: `x` from a row of `items` is already bound"
    );
    match err.kind {
        ErrorKind::BindingCollision { ref name, ref list } => {
            assert_eq!(name, "x");
            assert_eq!(list, "items");
        }
        _ => panic!("unexpected error: {:?}", err),
    }
}

#[test]
fn error_collision_does_not_need_the_tag_to_be_used() {
    let mut bindings = Bindings::new();
    bindings.insert_scalar("x", "A").unwrap();
    bindings.insert_list("items", vec![row(&[("y", "1")]), row(&[("x", "B")])]).unwrap();

    assert!(render_template("<#items>static</items>", &bindings).is_err());
}

#[test]
fn error_collision_between_nested_rows() {
    let mut bindings = Bindings::new();
    bindings.insert_list("outer", vec![row(&[("v", "1")])]).unwrap();
    bindings.insert_list("inner", vec![row(&[("v", "2")])]).unwrap();

    let err = render_template("<#outer><#inner><v></inner></outer>", &bindings).unwrap_err();
    match err.kind {
        ErrorKind::BindingCollision { ref name, ref list } => {
            assert_eq!(name, "v");
            assert_eq!(list, "inner");
        }
        _ => panic!("unexpected error: {:?}", err),
    }
}

#[test]
fn error_collision_reports_smallest_name() {
    let mut bindings = Bindings::new();
    bindings.insert_scalar("a", "A").unwrap();
    bindings.insert_scalar("b", "B").unwrap();
    bindings.insert_list("items", vec![row(&[("b", "1"), ("a", "2")])]).unwrap();

    let err = render_template("<#items></items>", &bindings).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::BindingCollision { ref name, .. } if name == "a"));
}

#[test]
fn error_empty_list_name() {
    let err = render_template("<#>body</>", &Bindings::new()).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::MalformedTag(_)));
    assert_eq!(err.to_string(), "Malformed block tag: the list name is empty");
}

#[test]
fn first_failing_tag_wins() {
    let err = render_template("<missing><#>body</>", &Bindings::new()).unwrap_err();
    assert_eq!(err.to_string(), "Tag `missing` not found");

    let err = render_template("<#>body</><missing>", &Bindings::new()).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::MalformedTag(_)));
}
