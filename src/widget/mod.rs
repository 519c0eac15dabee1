pub mod config;
pub mod error;
pub mod extract;
pub mod hash;
pub mod scripts;
pub mod widget;

pub use config::{FieldBinding, InsertPosition, PluginOptions};
pub use error::WidgetError;
pub use widget::DynamicFormWidget;
