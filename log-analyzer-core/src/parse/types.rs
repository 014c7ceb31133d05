use thiserror::Error;

#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Strings pass through as written; `-` stays `-`.
    Text(String),
    Integer(i64),
    Seconds(f64),
}

impl FieldValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            FieldValue::Integer(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Seconds(v) => Some(*v),
            _ => None,
        }
    }
}

/// One successfully parsed access log line, fields in grammar order.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedRecord {
    fields: Vec<(&'static str, FieldValue)>,
}

impl ParsedRecord {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            fields: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, name: &'static str, value: FieldValue) {
        self.fields.push((name, value));
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|(field, _)| *field == name)
            .map(|(_, value)| value)
    }

    pub fn fields(&self) -> impl Iterator<Item = (&'static str, &FieldValue)> {
        self.fields.iter().map(|(name, value)| (*name, value))
    }

    /// Second whitespace-delimited token of the request line, e.g. `/api/v2/banner`.
    pub fn request_path(&self) -> Option<&str> {
        self.get("request")?.as_str()?.split_whitespace().nth(1)
    }

    pub fn request_time(&self) -> Option<f64> {
        self.get("request_time")?.as_f64()
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LineError {
    #[error("line is not valid UTF-8 text")]
    NotText,

    #[error("cannot parse {field} in line '{line}'")]
    Format { field: &'static str, line: String },

    #[error("cannot convert {field} value '{value}'")]
    Coerce { field: &'static str, value: String },
}

impl LineError {
    /// Name of the grammar field that rejected the line, if any.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            LineError::NotText => None,
            LineError::Format { field, .. } | LineError::Coerce { field, .. } => Some(field),
        }
    }
}
