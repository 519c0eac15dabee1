use dynamic_form::{DynamicFormWidget, FormModel};

/// A minimal bindable model for tests.
pub struct Guest {
    pub new_record: bool,
}

impl FormModel for Guest {
    fn form_name(&self) -> String {
        "Guest".to_string()
    }

    fn is_new_record(&self) -> bool {
        self.new_record
    }
}

/// A fully configured widget over `model`, ready to render.
pub fn guest_widget(model: &Guest) -> DynamicFormWidget<'_> {
    let mut widget = DynamicFormWidget::new(model);
    widget.widget_container = "dynamicform_wrapper".to_string();
    widget.widget_body = ".container-items".to_string();
    widget.widget_item = ".item".to_string();
    widget.form_id = "guest-form".to_string();
    widget.form_fields = vec!["name".to_string(), "email".to_string()];
    widget.insert_button = Some(".add-item".to_string());
    widget.delete_button = Some(".remove-item".to_string());
    widget
}

/// Body markup with `count` items inside the usual container-items div.
pub fn body_with_items(count: usize) -> String {
    let mut body = String::from(r#"<div class="container-items">"#);
    for i in 0..count {
        body.push_str(&format!(
            r#"<div class="item"><input type="text" name="Guest[{i}][name]"></div>"#
        ));
    }
    body.push_str("</div>");
    body
}
