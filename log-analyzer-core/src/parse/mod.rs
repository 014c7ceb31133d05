//! Access Log Line Parsing
//!
//! A line is scanned left to right against a fixed, ordered field grammar.
//! Every field must match exactly at the cursor; the first field that does not
//! match rejects the whole line and names itself in the error.
//!
//! line
//! GRAMMAR (field by field)
//! ParsedRecord | LineError
//!

mod grammar;
mod line;
mod types;

pub use grammar::{FIELD_COUNT, FieldKind, FieldSpec, GRAMMAR, Wrapping};
pub use line::{parse_line, parse_line_bytes};
pub use types::{FieldValue, LineError, ParsedRecord};
