//! Wire formatting for property values (RFC 5545 §3.3).

use crate::core::{ParamMap, Value};
use crate::error::{EmitError, EmitResult};

/// Continuation prefix for embedded line breaks inside TEXT values.
const TEXT_CONTINUATION: &str = "\r\n  ";

/// Formats a value to its on-the-wire text form.
///
/// Semicolons, commas, and backslashes pass through untouched; callers
/// pre-escape where the target property requires it.
///
/// ## Errors
///
/// Returns [`EmitError::UnsupportedValueType`] for [`Value::Unknown`]
/// payloads, which have no safe wire form.
pub fn format_value(value: &Value) -> EmitResult<String> {
    match value {
        Value::Text(s) => Ok(format_text(s)),
        Value::Boolean(b) => Ok(String::from(if *b { "TRUE" } else { "FALSE" })),
        Value::Date(d) => Ok(d.to_string()),
        Value::DateTime(dt) => Ok(dt.to_string()),
        Value::List(items) => {
            let parts: Vec<String> = items.iter().map(format_value).collect::<EmitResult<_>>()?;
            Ok(parts.join(","))
        }
        Value::Mapping(map) => format_value_mapping(map),
        Value::Unknown(_) => Err(EmitError::UnsupportedValueType("unclassified raw value")),
    }
}

/// TEXT values pass through unchanged unless they carry line breaks, in
/// which case each break becomes a CRLF followed by two spaces. A
/// trailing break that would leave an empty segment is dropped.
fn format_text(s: &str) -> String {
    if !s.contains('\n') {
        return s.to_string();
    }

    let mut segments: Vec<&str> = s
        .split('\n')
        .map(|segment| segment.strip_suffix('\r').unwrap_or(segment))
        .collect();
    if segments.last() == Some(&"") {
        segments.pop();
    }
    segments.join(TEXT_CONTINUATION)
}

/// Renders a value-position mapping: `NAME=value` pairs joined with
/// semicolons, sorted by name. A FREQ pair always leads, per the
/// recurrence-rule convention.
fn format_value_mapping(map: &ParamMap) -> EmitResult<String> {
    let mut pairs: Vec<(&str, &Value)> = map.iter().collect();
    pairs.sort_by(|a, b| a.0.cmp(b.0));
    if let Some(pos) = pairs.iter().position(|(name, _)| *name == "FREQ") {
        let freq = pairs.remove(pos);
        pairs.insert(0, freq);
    }

    let rendered: Vec<String> = pairs
        .into_iter()
        .map(|(name, value)| Ok(format!("{name}={}", format_value(value)?)))
        .collect::<EmitResult<_>>()?;
    Ok(rendered.join(";"))
}
