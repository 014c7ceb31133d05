pub mod fixtures;
pub mod tracing;

pub use fixtures::{LogWorkspace, access_line, banner_and_photo_lines};
pub use tracing::{CapturedEvent, capture_events};
