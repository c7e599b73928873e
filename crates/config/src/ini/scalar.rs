//! Value inference for INI right-hand sides.
//!
//! The first rule that matches wins:
//! 1. quote-wrapped text, unescaped
//! 2. boolean words (`true yes on 1` / `false no off 0`, any case)
//! 3. base-10 integer, width-tagged
//! 4. float within `f64` range
//! 5. comma list with at least two non-empty trimmed parts
//! 6. plain text, unescaped

use crate::coerce::parse_float;
use crate::value::Value;

/// Infer the typed value of an already trimmed INI value.
pub fn infer(raw: &str) -> Value {
    if raw.is_empty() {
        return Value::String(String::new());
    }

    if let Some(inner) = unquote(raw) {
        return Value::String(unescape(inner));
    }

    if let Some(b) = parse_loose_bool(raw) {
        return Value::Bool(b);
    }

    if let Ok(n) = raw.parse::<i64>() {
        return Value::from_integer(n);
    }

    if let Some(x) = parse_float(raw) {
        return Value::Float(x);
    }

    if raw.contains(',') {
        let parts: Vec<String> = raw
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(unescape)
            .collect();
        if parts.len() > 1 {
            return Value::StringList(parts);
        }
    }

    Value::String(unescape(raw))
}

/// Interior of a value wrapped in matching single or double quotes.
fn unquote(raw: &str) -> Option<&str> {
    let bytes = raw.as_bytes();
    if bytes.len() < 2 {
        return None;
    }
    let (first, last) = (bytes[0], bytes[bytes.len() - 1]);
    if first == last && (first == b'"' || first == b'\'') {
        Some(&raw[1..raw.len() - 1])
    } else {
        None
    }
}

fn parse_loose_bool(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}

/// Replace `\n \t \r \\ \" \' \0` with the characters they stand for.
///
/// Unknown escapes and a trailing lone backslash are kept verbatim.
pub fn unescape(value: &str) -> String {
    if !value.contains('\\') {
        return value.to_string();
    }

    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        let replacement = match chars.peek() {
            Some('n') => Some('\n'),
            Some('t') => Some('\t'),
            Some('r') => Some('\r'),
            Some('\\') => Some('\\'),
            Some('"') => Some('"'),
            Some('\'') => Some('\''),
            Some('0') => Some('\0'),
            _ => None,
        };
        match replacement {
            Some(r) => {
                out.push(r);
                chars.next();
            }
            None => out.push('\\'),
        }
    }
    out
}
