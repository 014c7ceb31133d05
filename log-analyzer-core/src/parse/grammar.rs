use once_cell::sync::Lazy;
use regex::Regex;

/// How a matched field is coerced once its wrapping is removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Integer,
    /// Fractional seconds, e.g. `0.133`
    Seconds,
}

/// The textual convention surrounding a field's raw form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wrapping {
    Bare,
    Brackets,
    Quotes,
}

impl Wrapping {
    /// Removes a single pair of brackets or quotes, or surrounding whitespace
    /// for bare fields.
    pub fn unwrap(self, raw: &str) -> &str {
        let (open, close) = match self {
            Wrapping::Bare => return raw.trim(),
            Wrapping::Brackets => ('[', ']'),
            Wrapping::Quotes => ('"', '"'),
        };

        raw.strip_prefix(open)
            .and_then(|s| s.strip_suffix(close))
            .unwrap_or(raw)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    /// Recognizer matched strictly at the scan cursor.
    pub pattern: &'static str,
    pub kind: FieldKind,
    pub wrapping: Wrapping,
}

const fn field(
    name: &'static str,
    pattern: &'static str,
    kind: FieldKind,
    wrapping: Wrapping,
) -> FieldSpec {
    FieldSpec {
        name,
        pattern,
        kind,
        wrapping,
    }
}

pub const FIELD_COUNT: usize = 13;

const QUOTED: &str = r#"".*?""#;

/// Field order of the `ui_short` nginx access log format:
///
/// ```text
/// $remote_addr $remote_user $http_x_real_ip [$time_local] "$request"
/// $status $body_bytes_sent "$http_referer" "$http_user_agent"
/// "$http_x_forwarded_for" "$http_X_REQUEST_ID" "$http_X_RB_USER"
/// $request_time
/// ```
pub static GRAMMAR: [FieldSpec; FIELD_COUNT] = [
    field("remote_addr", r"[\d.]+", FieldKind::Text, Wrapping::Bare),
    field("remote_user", r"\S*", FieldKind::Text, Wrapping::Bare),
    field("http_x_real_ip", r"\S*", FieldKind::Text, Wrapping::Bare),
    field("time_local", r"\[.*?\]", FieldKind::Text, Wrapping::Brackets),
    field(
        "request",
        r#""(?:GET|POST|HEAD|PUT|DELETE|PATCH|OPTIONS) \S+ \S+""#,
        FieldKind::Text,
        Wrapping::Quotes,
    ),
    field("status", r"\d+", FieldKind::Integer, Wrapping::Bare),
    field("body_bytes_sent", r"\d+", FieldKind::Integer, Wrapping::Bare),
    field("http_referer", QUOTED, FieldKind::Text, Wrapping::Quotes),
    field("http_user_agent", QUOTED, FieldKind::Text, Wrapping::Quotes),
    field("http_x_forwarded_for", QUOTED, FieldKind::Text, Wrapping::Quotes),
    field("http_x_request_id", QUOTED, FieldKind::Text, Wrapping::Quotes),
    field("http_x_rb_user", QUOTED, FieldKind::Text, Wrapping::Quotes),
    field("request_time", r"\d+\.\d+", FieldKind::Seconds, Wrapping::Bare),
];

/// Anchored matchers, index-aligned with [`GRAMMAR`].
static MATCHERS: Lazy<Vec<Regex>> = Lazy::new(|| {
    GRAMMAR
        .iter()
        .map(|f| {
            Regex::new(&format!("^(?:{})", f.pattern))
                .unwrap_or_else(|e| panic!("invalid pattern for field {}: {e}", f.name))
        })
        .collect()
});

pub(crate) fn matcher(index: usize) -> &'static Regex {
    &MATCHERS[index]
}
