pub mod config;
pub mod element;
pub mod error;
pub mod event;
pub mod log;
pub mod measure;
pub mod overlay;
pub mod recording;
pub mod rect;
pub mod session;
pub mod spacing;
pub mod timer;

pub use element::{ElementId, Page};
pub use event::{InputEvent, Key};
pub use measure::{Mark, Measurement, Side, measure};
pub use overlay::{Host, Overlay, Placeholder, PlaceholderKind, ScrollGuard};
pub use rect::{Rect, Relation};
pub use session::{Phase, Session};
pub use spacing::Spacing;
