use crate::parse::grammar::{FieldKind, FieldSpec, GRAMMAR, matcher};
use crate::parse::types::{FieldValue, LineError, ParsedRecord};

/// Parses one access log line against [`GRAMMAR`].
///
/// Fields are matched in order, each one anchored at the cursor after any
/// leading whitespace has been skipped. After a match the cursor moves past
/// the matched span and exactly one separator character, so irregular spacing
/// is tolerated as long as every recognizer still matches in sequence.
/// Anything after the last field is ignored.
pub fn parse_line(line: &str) -> Result<ParsedRecord, LineError> {
    let mut record = ParsedRecord::with_capacity(GRAMMAR.len());
    let mut cursor = 0;

    for (index, spec) in GRAMMAR.iter().enumerate() {
        let rest = &line[cursor..];
        let skipped = rest.len() - rest.trim_start().len();
        let start = cursor + skipped;

        let Some(found) = matcher(index).find(&line[start..]) else {
            return Err(LineError::Format {
                field: spec.name,
                line: line.to_string(),
            });
        };

        let end = start + found.end();
        record.push(spec.name, coerce(spec, spec.wrapping.unwrap(found.as_str()))?);

        cursor = match line[end..].chars().next() {
            Some(separator) => end + separator.len_utf8(),
            None => end,
        };
    }

    Ok(record)
}

/// Entry point for callers holding raw bytes. Input that is not UTF-8 text is
/// a contract violation rather than a malformed line.
pub fn parse_line_bytes(line: &[u8]) -> Result<ParsedRecord, LineError> {
    let line = std::str::from_utf8(line).map_err(|_| LineError::NotText)?;
    parse_line(line)
}

fn coerce(spec: &FieldSpec, value: &str) -> Result<FieldValue, LineError> {
    let invalid = || LineError::Coerce {
        field: spec.name,
        value: value.to_string(),
    };

    match spec.kind {
        FieldKind::Text => Ok(FieldValue::Text(value.to_string())),
        FieldKind::Integer => value
            .parse::<i64>()
            .map(FieldValue::Integer)
            .map_err(|_| invalid()),
        FieldKind::Seconds => value
            .parse::<f64>()
            .map(FieldValue::Seconds)
            .map_err(|_| invalid()),
    }
}
