pub mod drag;
pub mod drop_zone;
pub mod throttle;

pub use drag::{DragState, DropOutcome};
pub use drop_zone::{DropZoneResolver, Point, Region};
pub use throttle::ResizeThrottle;
