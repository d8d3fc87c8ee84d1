//! API Module - Presentation Adapter Boundary
//!
//! What the rendering surface consumes: serializable view models built
//! from core outputs, and the sink trait whose calls mark the start/stop
//! points the session state machines dictate. The core never reaches
//! past this boundary into presentation concerns.

pub mod sink;
pub mod view;

pub use sink::PresentationSink;
pub use view::{Notice, NoticeKind, ResultView, StatusView};
