pub mod event;
pub mod logger;

pub use event::RenderEvent;
pub use logger::TraceLogger;
