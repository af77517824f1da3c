//! Parameter list rendering (RFC 5545 §3.2).

use crate::core::{ParamArg, ParamMap, Value};
use crate::error::{EmitError, EmitResult};

use super::value::format_value;

/// Renders the parameter arguments of a content line as its
/// `;NAME=VALUE;...` suffix.
///
/// An empty argument list renders as the empty string, with no leading
/// semicolon. Tokens are rendered verbatim; each mapping is sorted by
/// name independently, and mappings are concatenated in call order.
///
/// ## Errors
///
/// Returns [`EmitError::InvalidParameterArgument`] for parameter values
/// that would corrupt the line (nested mappings, unclassified payloads).
pub fn format_params(args: &[ParamArg]) -> EmitResult<String> {
    if args.is_empty() {
        return Ok(String::new());
    }

    let parts: Vec<String> = args
        .iter()
        .map(|arg| match arg {
            ParamArg::Token(token) => Ok(token.clone()),
            ParamArg::Mapping(map) => format_param_mapping(map),
        })
        .collect::<EmitResult<_>>()?;
    Ok(format!(";{}", parts.join(";")))
}

/// Renders a parameter-position mapping in sorted order.
///
/// Unlike value-position mappings there is no FREQ exception here, and
/// the values themselves must stay scalar: a nested mapping would inject
/// semicolons into the parameter list.
fn format_param_mapping(map: &ParamMap) -> EmitResult<String> {
    let mut pairs: Vec<(&str, &Value)> = map.iter().collect();
    pairs.sort_by(|a, b| a.0.cmp(b.0));

    let rendered: Vec<String> = pairs
        .into_iter()
        .map(|(name, value)| match value {
            Value::Mapping(_) => Err(EmitError::InvalidParameterArgument(format!(
                "parameter {name} carries a nested mapping"
            ))),
            Value::Unknown(_) => Err(EmitError::InvalidParameterArgument(format!(
                "parameter {name} carries an unclassified value"
            ))),
            _ => Ok(format!("{name}={}", format_value(value)?)),
        })
        .collect::<EmitResult<_>>()?;
    Ok(rendered.join(";"))
}
