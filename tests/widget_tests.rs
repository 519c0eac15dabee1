use dynamic_form::{
    View,
    widget::hash::{WIDGET_NAME, encode_options, hash_var_name},
    widget::{FieldBinding, InsertPosition, PluginOptions},
};

mod common;
use common::{Guest, body_with_items, guest_widget};

// =========================================================================
// Container markup
// =========================================================================

#[test]
fn container_div_carries_class_and_hash_data_attribute() {
    let model = Guest { new_record: false };
    let widget = guest_widget(&model);

    let mut view = View::new();
    let container = widget
        .render(&mut view, |buf| buf.push_str(&body_with_items(1)))
        .expect("render");

    let hash_var = view
        .hash_var_for("dynamicform_wrapper")
        .expect("widget registered")
        .to_string();
    assert!(hash_var.starts_with("dynamicForm_"), "Prefixed variable name");
    assert!(container.starts_with(r#"<div class="dynamicform_wrapper" data-dynamicform=""#));
    assert!(container.contains(&format!(r#"data-dynamicform="{}""#, hash_var)));
    assert!(container.ends_with("</div>"));
}

// =========================================================================
// Script registration
// =========================================================================

#[test]
fn first_render_registers_all_injection_points() {
    let model = Guest { new_record: false };
    let widget = guest_widget(&model);

    let mut view = View::new();
    widget
        .render(&mut view, |buf| buf.push_str(&body_with_items(1)))
        .expect("render");

    let head = view.head_html();
    let ready = view.ready_html();
    let load = view.load_html();

    assert!(head.contains("var dynamicForm_"), "Head defines the hashed variable");
    assert!(
        head.contains(r#"<script src="yii2-dynamic-form.min.js"></script>"#),
        "Client library asset included"
    );
    assert!(
        ready.contains(r##"jQuery("#guest-form").on("click", ".add-item""##),
        "Insert handler scoped to the form"
    );
    assert!(
        ready.contains(r#"triggerHandler("beforeInsert""#),
        "Cancelable beforeInsert fires before addItem"
    );
    assert!(ready.contains(r#"yiiDynamicForm("addItem""#));
    assert!(ready.contains(r#"yiiDynamicForm("deleteItem""#));
    assert!(
        load.contains(r##"jQuery("#guest-form").yiiDynamicForm(dynamicForm_"##),
        "Post-load initializer wires the form"
    );

    let before_insert = ready.find("beforeInsert").expect("beforeInsert present");
    let add_item = ready.find("addItem").expect("addItem present");
    assert!(before_insert < add_item, "beforeInsert precedes addItem");
}

#[test]
fn debug_view_uses_unminified_assets() {
    let model = Guest { new_record: false };
    let widget = guest_widget(&model);

    let mut view = View::new();
    view.debug = true;
    widget
        .render(&mut view, |buf| buf.push_str(&body_with_items(1)))
        .expect("render");

    assert!(
        view.head_html()
            .contains(r#"<script src="yii2-dynamic-form.js"></script>"#)
    );
}

// =========================================================================
// Deduplication — first registration per container wins
// =========================================================================

#[test]
fn identical_config_second_instance_emits_no_scripts() {
    let model = Guest { new_record: false };
    let mut view = View::new();

    let first = guest_widget(&model)
        .render(&mut view, |buf| buf.push_str(&body_with_items(1)))
        .expect("first render");
    let head_after_first = view.head_html();

    let second = guest_widget(&model)
        .render(&mut view, |buf| buf.push_str(&body_with_items(1)))
        .expect("second render");

    assert_eq!(
        view.head_html(),
        head_after_first,
        "Second instance registers nothing new"
    );
    assert_eq!(
        view.head_html().matches("var dynamicForm_").count(),
        1,
        "Exactly one variable definition"
    );

    let hash_var = view.hash_var_for("dynamicform_wrapper").expect("registered");
    assert!(first.contains(hash_var), "First container references the variable");
    assert!(second.contains(hash_var), "Second container reuses the same variable");
}

#[test]
fn differing_config_same_container_reuses_first_variable() {
    let model = Guest { new_record: false };
    let mut view = View::new();

    guest_widget(&model)
        .render(&mut view, |buf| buf.push_str(&body_with_items(1)))
        .expect("first render");
    let first_var = view
        .hash_var_for("dynamicform_wrapper")
        .expect("registered")
        .to_string();

    let mut other = guest_widget(&model);
    other.limit = 5; // different options, same container key
    let second = other
        .render(&mut view, |buf| buf.push_str(&body_with_items(1)))
        .expect("second render");

    assert!(
        second.contains(&format!(r#"data-dynamicform="{}""#, first_var)),
        "Later instance reuses the first registration's variable even though \
         its own options hash differs"
    );
    assert_eq!(
        view.head_html().matches("var dynamicForm_").count(),
        1,
        "No second script block"
    );
}

#[test]
fn distinct_containers_register_independently() {
    let model = Guest { new_record: false };
    let mut view = View::new();

    guest_widget(&model)
        .render(&mut view, |buf| buf.push_str(&body_with_items(1)))
        .expect("first render");

    let mut other = guest_widget(&model);
    other.widget_container = "other_wrapper".to_string();
    other
        .render(&mut view, |buf| buf.push_str(&body_with_items(1)))
        .expect("second render");

    assert_eq!(
        view.head_html().matches("var dynamicForm_").count(),
        2,
        "Each container gets its own registration"
    );
    assert!(view.hash_var_for("other_wrapper").is_some());
}

#[test]
fn fresh_view_resets_registrations() {
    let model = Guest { new_record: false };

    let mut first_view = View::new();
    guest_widget(&model)
        .render(&mut first_view, |buf| buf.push_str(&body_with_items(1)))
        .expect("render");

    let mut second_view = View::new();
    guest_widget(&model)
        .render(&mut second_view, |buf| buf.push_str(&body_with_items(1)))
        .expect("render");

    assert_eq!(
        second_view.head_html().matches("var dynamicForm_").count(),
        1,
        "A new render pass starts with no prior registrations"
    );
}

// =========================================================================
// Hashing
// =========================================================================

fn sample_options() -> PluginOptions {
    PluginOptions {
        widget_container: "dynamicform_wrapper".to_string(),
        widget_body: ".container-items".to_string(),
        widget_item: ".item".to_string(),
        limit: 999,
        insert_button: Some(".add-item".to_string()),
        delete_button: Some(".remove-item".to_string()),
        insert_position: InsertPosition::Bottom,
        form_id: "guest-form".to_string(),
        min: 1,
        fields: vec![FieldBinding {
            id: "guest-{}-name".to_string(),
            name: "Guest[{}][name]".to_string(),
        }],
        template: r#"<div class="item"></div>"#.to_string(),
    }
}

#[test]
fn hashing_is_stable_within_a_process() {
    let options = sample_options();
    let first = hash_var_name(&encode_options(&options).expect("encode"));
    let second = hash_var_name(&encode_options(&options).expect("encode"));
    assert_eq!(first, second, "Same options must hash to the same variable");
}

#[test]
fn hash_variable_is_a_js_safe_identifier() {
    let var = hash_var_name(&encode_options(&sample_options()).expect("encode"));
    assert!(var.starts_with(&format!("{}_", WIDGET_NAME)));
    assert!(
        var.chars().all(|c| c.is_ascii_alphanumeric() || c == '_'),
        "Variable name must be identifier-safe: {}",
        var
    );
}

#[test]
fn differing_options_hash_differently() {
    let base = sample_options();
    let mut other = sample_options();
    other.limit = 5;
    assert_ne!(
        hash_var_name(&encode_options(&base).expect("encode")),
        hash_var_name(&encode_options(&other).expect("encode"))
    );
}

#[test]
fn encoded_options_use_client_wire_format() {
    let encoded = encode_options(&sample_options()).expect("encode");
    for key in [
        r#""widgetContainer":"#,
        r#""widgetBody":"#,
        r#""widgetItem":"#,
        r#""limit":999"#,
        r#""insertButton":".add-item""#,
        r#""deleteButton":".remove-item""#,
        r#""insertPosition":"bottom""#,
        r#""formId":"guest-form""#,
        r#""min":1"#,
        r#""fields":[{"id":"guest-{}-name","name":"Guest[{}][name]"}]"#,
        r#""template":"#,
    ] {
        assert!(encoded.contains(key), "Missing {} in {}", key, encoded);
    }
}
