use crate::{
    html,
    model::{FormModel, input_id, input_name},
    trace::RenderEvent,
    view::View,
    widget::{
        config::{FieldBinding, InsertPosition, PluginOptions},
        error::WidgetError,
        extract::{extract_template, remove_items},
        hash::{encode_options, hash_var_name},
        scripts::register_scripts,
    },
};

// ============================================================================
// DynamicFormWidget — renders one cloneable field-group container
// ============================================================================

/// A server-side widget that renders a repeatable group of form fields and
/// registers the client-side machinery to clone and remove groups in the
/// browser.
///
/// The caller fills the public properties, then calls [`render`] with a
/// closure that writes the field-group markup for the existing items. The
/// widget captures that markup, extracts the first item as the clone
/// template, registers the client scripts on the [`View`] (once per
/// container), and returns the container markup to splice into the page.
///
/// [`render`]: DynamicFormWidget::render
pub struct DynamicFormWidget<'a> {
    /// Container key: class on the wrapping div and the per-page
    /// registration key. Identifier-safe (`[A-Za-z0-9_]+`).
    pub widget_container: String,

    /// Selector for the element holding the items.
    pub widget_body: String,

    /// Selector for one repeatable item.
    pub widget_item: String,

    /// Maximum number of items the client script allows.
    pub limit: u32,

    /// Selector for the clone button, if the form has one.
    pub insert_button: Option<String>,

    /// Selector for the remove button, if the form has one.
    pub delete_button: Option<String>,

    /// Where clones are inserted.
    pub insert_position: InsertPosition,

    /// The model the form fields bind against.
    pub model: &'a dyn FormModel,

    /// DOM id of the enclosing form; click handlers are scoped to it.
    pub form_id: String,

    /// Attribute names of the repeated fields, in declaration order.
    pub form_fields: Vec<String>,

    /// Minimum number of items; `0` with a new record renders an empty body.
    pub min: u32,
}

impl<'a> DynamicFormWidget<'a> {
    /// A widget with the customary defaults: `limit` 999, `min` 1, bottom
    /// insertion, no buttons.
    pub fn new(model: &'a dyn FormModel) -> Self {
        DynamicFormWidget {
            widget_container: String::new(),
            widget_body: String::new(),
            widget_item: String::new(),
            limit: 999,
            insert_button: None,
            delete_button: None,
            insert_position: InsertPosition::Bottom,
            model,
            form_id: String::new(),
            form_fields: Vec::new(),
            min: 1,
        }
    }

    /// Check every property, naming the offending one on failure.
    pub fn validate(&self) -> Result<(), WidgetError> {
        if self.widget_container.is_empty()
            || !self
                .widget_container
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            return Err(WidgetError::invalid(
                "widget_container",
                "allowed only alphanumeric characters plus underline: [A-Za-z0-9_]",
            ));
        }
        if self.widget_body.is_empty() {
            return Err(WidgetError::invalid("widget_body", "must be set"));
        }
        if self.widget_item.is_empty() {
            return Err(WidgetError::invalid("widget_item", "must be set"));
        }
        if self.form_id.is_empty() {
            return Err(WidgetError::invalid("form_id", "must be set"));
        }
        if self.form_fields.is_empty() {
            return Err(WidgetError::invalid("form_fields", "must be set"));
        }
        Ok(())
    }

    /// Render the widget.
    ///
    /// `body` writes the markup for the existing items into the supplied
    /// buffer; the widget reads that buffer exactly once. On any failure the
    /// captured content is discarded and nothing is registered on the view.
    pub fn render(
        &self,
        view: &mut View,
        body: impl FnOnce(&mut String),
    ) -> Result<String, WidgetError> {
        self.validate()?;
        let mut options = self.build_options();

        let mut content = String::new();
        body(&mut content);

        options.template = extract_template(&content, &self.widget_item)?;

        if self.min == 0 && self.model.is_new_record() {
            content = remove_items(&content, &self.widget_item)?;
        }

        let encoded = encode_options(&options)?;
        let own_hash_var = hash_var_name(&encoded);

        let newly_registered = view.register_widget(&self.widget_container, &own_hash_var);
        // First registration per container wins: a later widget under the
        // same container reuses the stored variable name even when its own
        // options hash differs.
        let hash_var = view
            .hash_var_for(&self.widget_container)
            .unwrap_or(&own_hash_var)
            .to_string();

        if newly_registered {
            register_scripts(view, self, &hash_var, &encoded);
        }

        if let Some(tracer) = view.trace_logger() {
            tracer.log(&RenderEvent {
                container: self.widget_container.clone(),
                hash_var: hash_var.clone(),
                registered: newly_registered,
                template_len: options.template.len(),
            });
        }

        Ok(html::tag(
            "div",
            &content,
            &[
                ("class", self.widget_container.as_str()),
                ("data-dynamicform", hash_var.as_str()),
            ],
        ))
    }

    /// Assemble the client config from the widget properties, resolving each
    /// declared field to its indexed id/name pair. `template` stays empty
    /// until the body buffer is captured.
    fn build_options(&self) -> PluginOptions {
        let fields = self
            .form_fields
            .iter()
            .map(|field| {
                let attribute = format!("[{{}}]{}", field);
                FieldBinding {
                    id: input_id(self.model, &attribute),
                    name: input_name(self.model, &attribute),
                }
            })
            .collect();

        PluginOptions {
            widget_container: self.widget_container.clone(),
            widget_body: self.widget_body.clone(),
            widget_item: self.widget_item.clone(),
            limit: self.limit,
            insert_button: self.insert_button.clone(),
            delete_button: self.delete_button.clone(),
            insert_position: self.insert_position,
            form_id: self.form_id.clone(),
            min: self.min,
            fields,
            template: String::new(),
        }
    }
}
