//! Domain events and the notification seam they are delivered through.

pub mod event;
pub mod sink;

pub use event::Event;
pub use sink::{EventSink, NullSink, RecordingSink};
