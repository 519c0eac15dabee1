use dynamic_form::{View, WidgetError, widget::extract::{extract_template, remove_items}};

mod common;
use common::{Guest, body_with_items, guest_widget};

// =========================================================================
// Template extraction
// =========================================================================

#[test]
fn extracts_first_item_subtree_verbatim() {
    let body = r#"<div class="container-items"><div class="item"><input type="text" name="Guest[0][name]"></div><div class="item"><input type="text" name="Guest[1][name]"></div></div>"#;
    let template = extract_template(body, ".item").expect("template");
    assert_eq!(
        template,
        r#"<div class="item"><input type="text" name="Guest[0][name]"></div>"#,
        "Template is the first item's own serialized markup, siblings excluded"
    );
}

#[test]
fn extraction_is_independent_of_surrounding_markup() {
    let body = r#"<h3>Guests</h3><div class="container-items"><div class="item"><span>only</span></div></div><p>footer</p>"#;
    let template = extract_template(body, ".item").expect("template");
    assert_eq!(template, r#"<div class="item"><span>only</span></div>"#);
}

#[test]
fn missing_item_is_a_fatal_precondition_failure() {
    let body = r#"<div class="container-items"><p>no items here</p></div>"#;
    match extract_template(body, ".item") {
        Err(WidgetError::TemplateNotFound { selector }) => {
            assert_eq!(selector, ".item");
        }
        other => panic!("Expected TemplateNotFound, got {:?}", other),
    }
}

#[test]
fn extraction_tolerates_malformed_body() {
    let body = r#"<div class="container-items"><div class="item"><input name="a"></div>"#;
    let template = extract_template(body, ".item").expect("unclosed container still parses");
    assert_eq!(template, r#"<div class="item"><input name="a"></div>"#);
}

// =========================================================================
// Zero-min stripping
// =========================================================================

#[test]
fn remove_items_leaves_body_shell() {
    let stripped = remove_items(&body_with_items(2), ".item").expect("strip");
    assert_eq!(stripped, r#"<div class="container-items"></div>"#);
}

#[test]
fn zero_min_new_record_renders_empty_body_with_captured_template() {
    let model = Guest { new_record: true };
    let mut widget = guest_widget(&model);
    widget.min = 0;

    let mut view = View::new();
    let container = widget
        .render(&mut view, |buf| buf.push_str(&body_with_items(2)))
        .expect("render");

    assert!(
        !container.contains(r#"class="item""#),
        "Rendered body must contain zero item nodes"
    );
    assert!(
        view.head_html().contains(r#"class=\"item\""#),
        "Template was still captured into the encoded options"
    );
}

#[test]
fn zero_min_persisted_record_keeps_items() {
    let model = Guest { new_record: false };
    let mut widget = guest_widget(&model);
    widget.min = 0;

    let mut view = View::new();
    let container = widget
        .render(&mut view, |buf| buf.push_str(&body_with_items(2)))
        .expect("render");

    assert_eq!(
        container.matches(r#"class="item""#).count(),
        2,
        "Persisted records keep their rendered items"
    );
}

#[test]
fn nonzero_min_new_record_keeps_items() {
    let model = Guest { new_record: true };
    let widget = guest_widget(&model); // min defaults to 1

    let mut view = View::new();
    let container = widget
        .render(&mut view, |buf| buf.push_str(&body_with_items(1)))
        .expect("render");

    assert!(container.contains(r#"class="item""#));
}
