use crate::{
    view::{AssetBundle, Position, View},
    widget::widget::DynamicFormWidget,
};

// ============================================================================
// Client script emission — head var, click handlers, initializer
// ============================================================================

/// Register everything a newly seen widget configuration needs on the view:
/// the head-position variable definition, the client library asset, the
/// insert/delete click handlers, and the post-load initializer.
pub fn register_scripts(
    view: &mut View,
    widget: &DynamicFormWidget<'_>,
    hash_var: &str,
    encoded_options: &str,
) {
    view.register_js(
        Position::Head,
        format!("var {} = {};\n", hash_var, encoded_options),
    );

    view.register_asset(AssetBundle::dynamic_form());

    if let Some(insert_button) = &widget.insert_button {
        view.register_js(
            Position::Ready,
            insert_handler_js(&widget.form_id, insert_button, &widget.widget_container, hash_var),
        );
    }
    if let Some(delete_button) = &widget.delete_button {
        view.register_js(
            Position::Ready,
            delete_handler_js(&widget.form_id, delete_button, &widget.widget_container, hash_var),
        );
    }

    view.register_js(
        Position::Load,
        format!("jQuery(\"#{}\").yiiDynamicForm({});\n", widget.form_id, hash_var),
    );
}

/// Delegated click handler for the clone button. Fires a cancelable
/// `beforeInsert` on the container before delegating to the client library.
fn insert_handler_js(form_id: &str, insert_button: &str, container: &str, hash_var: &str) -> String {
    let mut js = String::new();
    js.push_str(&format!(
        "jQuery(\"#{}\").on(\"click\", \"{}\", function(e) {{\n",
        form_id, insert_button
    ));
    js.push_str("    e.preventDefault();\n");
    js.push_str(&format!(
        "    jQuery(\".{}\").triggerHandler(\"beforeInsert\", [jQuery(this)]);\n",
        container
    ));
    js.push_str(&format!(
        "    jQuery(\".{}\").yiiDynamicForm(\"addItem\", {}, e, jQuery(this));\n",
        container, hash_var
    ));
    js.push_str("});\n");
    js
}

/// Delegated click handler for the remove button.
fn delete_handler_js(form_id: &str, delete_button: &str, container: &str, hash_var: &str) -> String {
    let mut js = String::new();
    js.push_str(&format!(
        "jQuery(\"#{}\").on(\"click\", \"{}\", function(e) {{\n",
        form_id, delete_button
    ));
    js.push_str("    e.preventDefault();\n");
    js.push_str(&format!(
        "    jQuery(\".{}\").yiiDynamicForm(\"deleteItem\", {}, e, jQuery(this));\n",
        container, hash_var
    ));
    js.push_str("});\n");
    js
}
