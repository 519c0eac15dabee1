//! Server-side widget that renders a repeatable ("dynamic") group of form
//! fields and emits the client-side configuration a companion script uses to
//! clone and remove field groups in the browser.
//!
//! The widget captures the markup a caller renders for the existing items,
//! extracts the first item's subtree as a literal HTML clone template,
//! deduplicates identical configurations across widget instances via a
//! content hash, and registers the insert/delete handlers and initializer on
//! a per-page [`View`].
//!
//! ```
//! use dynamic_form::{DynamicFormWidget, FormModel, View};
//!
//! struct Guest;
//! impl FormModel for Guest {
//!     fn form_name(&self) -> String { "Guest".to_string() }
//!     fn is_new_record(&self) -> bool { true }
//! }
//!
//! let guest = Guest;
//! let mut widget = DynamicFormWidget::new(&guest);
//! widget.widget_container = "dynamicform_wrapper".to_string();
//! widget.widget_body = ".container-items".to_string();
//! widget.widget_item = ".item".to_string();
//! widget.form_id = "guest-form".to_string();
//! widget.form_fields = vec!["name".to_string(), "email".to_string()];
//! widget.insert_button = Some(".add-item".to_string());
//! widget.delete_button = Some(".remove-item".to_string());
//!
//! let mut view = View::new();
//! let container = widget
//!     .render(&mut view, |buf| {
//!         buf.push_str(r#"<div class="container-items">"#);
//!         buf.push_str(r#"<div class="item"><input name="Guest[0][name]"></div>"#);
//!         buf.push_str("</div>");
//!     })
//!     .unwrap();
//! assert!(container.starts_with("<div class=\"dynamicform_wrapper\""));
//! ```

pub mod dom;
pub mod html;
pub mod model;
pub mod trace;
pub mod view;
pub mod widget;

pub use model::FormModel;
pub use view::{AssetBundle, Position, View};
pub use widget::{DynamicFormWidget, FieldBinding, InsertPosition, PluginOptions, WidgetError};
