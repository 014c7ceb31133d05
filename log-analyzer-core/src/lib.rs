pub mod aggregate;
pub mod analyzer;
pub mod cli;
pub mod conf;
pub mod logging;
pub mod numeric;
pub mod parse;
pub mod report;
pub mod source;
pub mod stats;
