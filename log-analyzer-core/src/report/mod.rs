//! Report Rendering
//!
//! Statistics are ranked by total time, capped to the report size, serialized
//! as a JSON array and dropped into an HTML template in place of a single
//! placeholder token.
//!

mod error;
mod naming;
mod render;
mod save;
mod template;
#[cfg(test)]
mod tests;

pub use error::ReportError;
pub use naming::report_path;
pub use render::{DEFAULT_PLACEHOLDER, rank, render_report};
pub use save::{report_exists, save_report};
pub use template::{ReportAssets, default_template, load_template};
