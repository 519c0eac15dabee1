pub mod assets;
pub mod view;

pub use assets::AssetBundle;
pub use view::{Position, View};
