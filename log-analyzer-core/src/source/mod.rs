mod discover;
mod reader;

pub use discover::{DiscoverError, date_in_name, newest_log};
pub use reader::{LogLines, is_gzip, open_log};
