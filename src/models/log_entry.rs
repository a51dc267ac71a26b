use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One visitor sign-in: who entered the landing page and when (UTC).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub name: String,
    pub timestamp: DateTime<Utc>,
}

impl LogEntry {
    pub fn new(name: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            name: name.into(),
            timestamp,
        }
    }

    /// Raw field tuple, e.g. `('Alice', '2024-05-01 10:20:30.123456+00:00')`.
    pub fn as_tuple(&self) -> String {
        format!(
            "({}, {})",
            quote(&self.name),
            quote(&format_timestamp(&self.timestamp))
        )
    }
}

/// Text form kept in the `timestamp` column. The fraction is dropped when it is zero.
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    let micros = timestamp.timestamp_subsec_micros();
    if micros == 0 {
        timestamp.format("%Y-%m-%d %H:%M:%S+00:00").to_string()
    } else {
        format!("{}.{:06}+00:00", timestamp.format("%Y-%m-%d %H:%M:%S"), micros)
    }
}

pub fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    DateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S%.f%:z").map(|dt| dt.with_timezone(&Utc))
}

// Single quotes unless the text holds a single quote and no double quote.
fn quote(value: &str) -> String {
    let delimiter = if value.contains('\'') && !value.contains('"') {
        '"'
    } else {
        '\''
    };

    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push(delimiter);
    for ch in value.chars() {
        match ch {
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            c if c == delimiter => {
                quoted.push('\\');
                quoted.push(c);
            }
            c if !is_printable(c) => quoted.push_str(&escape_code(c)),
            c => quoted.push(c),
        }
    }
    quoted.push(delimiter);
    quoted
}

fn escape_code(c: char) -> String {
    match c as u32 {
        code @ 0..=0xff => format!("\\x{:02x}", code),
        code @ 0x100..=0xffff => format!("\\u{:04x}", code),
        code => format!("\\U{:08x}", code),
    }
}

// Control, format, separator and private-use characters are shown escaped;
// the plain space is the only separator left as is.
fn is_printable(c: char) -> bool {
    if c == ' ' {
        return true;
    }
    if c.is_control() || c.is_whitespace() {
        return false;
    }
    !matches!(
        c as u32,
        0xad
            | 0x600..=0x605
            | 0x61c
            | 0x6dd
            | 0x70f
            | 0x890..=0x891
            | 0x8e2
            | 0x180e
            | 0x200b..=0x200f
            | 0x202a..=0x202e
            | 0x2060..=0x206f
            | 0xe000..=0xf8ff
            | 0xfeff
            | 0xfff9..=0xfffb
            | 0x110bd
            | 0x110cd
            | 0x13430..=0x1343f
            | 0x1bca0..=0x1bca3
            | 0x1d173..=0x1d17a
            | 0xe0001
            | 0xe0020..=0xe007f
            | 0xf0000..=0x10ffff
    )
}
