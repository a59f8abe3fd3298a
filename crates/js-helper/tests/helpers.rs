//! Integration tests for the public helper surface.

use js_helper::*;
use serde_json::{json, Value};

fn js(v: Value) -> JsValue {
    JsValue::from(v)
}

// ----------------------------------------------------------------- Type predicates

#[test]
fn test_type_predicates_on_json_values() {
    assert!(is_number(&js(json!(1))));
    assert!(is_string(&js(json!("1"))));
    assert!(is_boolean(&js(json!(false))));
    assert!(is_array(&js(json!([]))));
    assert!(is_object(&js(json!({}))));
    assert!(!is_object(&js(json!(null))));
    assert!(is_null_or_undefined(&js(json!(null))));
    assert!(is_defined(&js(json!(null))));
}

#[test]
fn test_function_values() {
    let f = JsValue::from(JsFunction::named("noop", |_| JsValue::Undefined));
    assert!(is_function(&f));
    assert!(!is_object(&f));
    assert!(!is_empty_object(&f));
    assert_eq!(f.tag(), ValueTag::Function);
}

// ----------------------------------------------------------------- Equality

#[test]
fn test_equality_examples() {
    assert!(is_equal_object(
        &js(json!({"x": 1, "y": [1, 2]})),
        &js(json!({"x": 1, "y": [2, 1]}))
    ));
    assert!(!is_equal_object(&js(json!({"x": 1})), &js(json!({"x": 1, "y": 2}))));
    assert!(is_equal_object(
        &js(json!({"test": 123, "inner": {"test": 234}})),
        &js(json!({"inner": {"test": 234}, "test": 123}))
    ));
}

#[test]
fn test_equality_counts_repeated_array_elements() {
    let a = js(json!({"y": [1, 1]}));
    let b = js(json!({"y": [1, 2]}));
    assert!(!is_equal_object(&a, &b));
    assert!(!is_equal_object(&b, &a));
    assert!(is_equal_object(
        &js(json!({"tags": ["x", "y", "x"]})),
        &js(json!({"tags": ["x", "x", "y"]}))
    ));
}

#[test]
fn test_equality_with_comparator_on_nested_objects() {
    // Compare nested objects by their "id" field only.
    let by_id = |a: &JsValue, b: &JsValue| a.get_property("id").strict_equals(&b.get_property("id"));
    let a = js(json!({"owner": {"id": 7, "name": "ann"}, "tags": ["x"]}));
    let b = js(json!({"owner": {"id": 7, "name": "anne"}, "tags": ["x"]}));
    assert!(!is_equal_object(&a, &b));
    assert!(is_equal_object_with(&a, &b, by_id));
}

// ----------------------------------------------------------------- Key codes

#[test]
fn test_key_code_examples() {
    assert_eq!(convert_key_code_to_ascii_code(65, false), 97);
    assert_eq!(convert_key_code_to_ascii_code(65, true), 65);
    assert_eq!(convert_key_code_to_ascii_code(187, true), 43);
    assert_eq!(convert_key_code_to_ascii_code(187, false), 61);
}

#[test]
fn test_typing_a_sentence() {
    // (key code, shift) for "Hi, 5+3!"
    let keys = [
        (72, true),
        (73, false),
        (188, false),
        (32, false),
        (101, false),
        (107, false),
        (99, false),
        (49, true),
    ];
    let typed: String = keys
        .iter()
        .filter_map(|(code, shift)| convert_key_code_to_char(*code, *shift))
        .collect();
    // Shift+1 has no rule, so the digit comes through unshifted.
    assert_eq!(typed, "Hi, 5+31");
}

// ----------------------------------------------------------------- Field lookup

#[test]
fn test_field_lookup_examples() {
    let doc = js(json!({"a": {"b": 5}}));
    assert_eq!(
        get_field_value_in_complex_object(&doc, "b", None),
        Some(&JsValue::Number(5.0))
    );
    let doc = js(json!({"a": 1}));
    assert_eq!(get_field_value_in_complex_object(&doc, "missing", None), None);
}

#[test]
fn test_field_lookup_in_api_response() {
    let response = js(json!({
        "status": "ok",
        "data": {
            "orders": [
                {"id": "o-1", "customer": {"id": "c-9", "name": "Ann"}},
                {"id": "o-2", "customer": {"id": "c-3", "name": "Bob"}}
            ]
        }
    }));
    assert_eq!(
        get_field_value_in_complex_object(&response, "id", None),
        Some(&JsValue::from("o-1"))
    );
    assert_eq!(
        get_field_value_in_complex_object(&response, "id", Some("customer")),
        Some(&JsValue::from("c-9"))
    );
    assert_eq!(
        get_field_value_in_complex_object(&response, "id", Some("orders")),
        Some(&JsValue::from("o-1"))
    );
    assert_eq!(
        get_field_value_in_complex_object(&response, "status", Some("data")),
        None
    );
}

// ----------------------------------------------------------------- Shapes

#[test]
fn test_shape_examples() {
    assert!(is_phone_number(&JsValue::from("12345678901")));
    assert!(!is_phone_number(&JsValue::from("1234")));
    assert!(!is_number_string(&JsValue::from(".")));
    assert!(is_number_string(&JsValue::from("12.3")));
    assert!(is_positive_number(&js(json!(3))));
    assert!(is_negative_number(&js(json!(-3))));
}

// ----------------------------------------------------------------- Elements

#[test]
fn test_div_matches_only_div() {
    let div = ElementNode::element("div");
    let ele = Some(&div);
    assert!(is_div(ele));
    let others = [
        is_span(ele),
        is_input(ele),
        is_text_node(ele),
        is_image(ele),
        is_button(ele),
        is_script(ele),
        is_link(ele),
        is_html(ele),
        is_head(ele),
        is_title(ele),
        is_body(ele),
        is_header(ele),
        is_footer(ele),
        is_nav(ele),
        is_article(ele),
        is_code(ele),
        is_canvas(ele),
        is_svg(ele),
        is_form(ele),
    ];
    assert!(others.iter().all(|hit| !hit));
}

#[test]
fn test_button_variants() {
    let button = ElementNode::element("button");
    let input: ElementNode = serde_json::from_value(json!({
        "kind": "element",
        "tag_name": "INPUT",
        "attributes": {"type": "button"}
    }))
    .unwrap();
    assert!(is_button(Some(&button)));
    assert!(is_button(Some(&input)));
    assert!(!is_button::<ElementNode>(None));
}

#[test]
fn test_page_tree() {
    let title = Element::new("title").with_child(ElementNode::text("Home"));
    let page = Element::new("html")
        .with_child(Element::new("head").with_child(title))
        .with_child(
            Element::new("body")
                .with_class("theme-dark")
                .with_child(Element::new("header"))
                .with_child(Element::new("canvas")),
        );
    assert!(is_html(Some(&page)));
    assert!(has_child_element(Some(&page)));
    assert!(!has_class(Some(&page)));

    let body = &page.children[1];
    assert!(is_body(Some(body)));
    assert!(has_class(Some(body)));

    let title = match &page.children[0] {
        ElementNode::Element(head) => &head.children[0],
        ElementNode::Text { .. } => panic!("expected head element"),
    };
    assert!(is_title(Some(title)));
    match title {
        ElementNode::Element(title) => assert!(is_text_node(title.children.first())),
        ElementNode::Text { .. } => panic!("expected title element"),
    }
}
