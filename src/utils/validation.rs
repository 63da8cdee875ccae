use crate::utils::error::{PairSumError, Result};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn parse_integer(field_name: &str, token: &str, position: Option<usize>) -> Result<i64> {
    if token.is_empty() {
        return Err(PairSumError::malformed(field_name, token, position, "empty value"));
    }

    token.parse::<i64>().map_err(|e| {
        let reason = match e.kind() {
            std::num::IntErrorKind::PosOverflow | std::num::IntErrorKind::NegOverflow => {
                "out of range for a 64-bit integer".to_string()
            }
            _ => "not an integer".to_string(),
        };
        PairSumError::malformed(field_name, token, position, reason)
    })
}

/// Parses the target value of a query.
pub fn parse_target(text: &str) -> Result<i64> {
    parse_integer("target", text.trim(), None)
}

/// Parses a comma-separated list of integers.
///
/// Blank input is the empty sequence. Tokens are trimmed; an empty token
/// (`1,,2` or a trailing comma) rejects the whole list, as does any
/// non-integer token. Positions in errors are 1-based.
pub fn parse_sequence(text: &str) -> Result<Vec<i64>> {
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }

    text.split(',')
        .enumerate()
        .map(|(index, token)| parse_integer("values", token.trim(), Some(index + 1)))
        .collect()
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(PairSumError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_unique_names<'a, I>(field_name: &str, names: I) -> Result<()>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    for name in names {
        if !seen.insert(name) {
            return Err(PairSumError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: name.to_string(),
                reason: "Duplicate name".to_string(),
            });
        }
    }
    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| PairSumError::MissingConfigError {
        field: field_name.to_string(),
    })
}
