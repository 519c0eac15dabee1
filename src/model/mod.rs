pub mod binding;

pub use binding::{FormModel, input_id, input_name};
