use crate::utils::error::{GuardrailError, Result};
use serde_json::Value;

/// Convert an arbitrary input value to an integer, attempt-first.
///
/// The conversion itself decides whether the input qualifies; callers never
/// need to pre-inspect the value's shape. On failure this returns a
/// `ConversionFailure` naming the input and the reason, never a default
/// value the caller could mistake for real data.
pub fn coerce_int(value: &Value) -> Result<i64> {
    match value {
        Value::String(s) => parse_int_str(s),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                return Ok(i);
            }
            if let Some(u) = n.as_u64() {
                return Err(conversion_failure(
                    &u.to_string(),
                    "value exceeds the signed 64-bit integer range",
                ));
            }
            // Floats pass only when they are exactly integral. Truncating
            // "45.7" to 45 would be a silently guessed value.
            //
            // The range check compares against exact powers of two:
            // `i64::MAX as f64` rounds up to 2^63, which would let 2^63
            // through and saturate the cast to i64::MAX.
            match n.as_f64() {
                Some(f) if f.fract() == 0.0 && f >= -(2f64.powi(63)) && f < 2f64.powi(63) => {
                    Ok(f as i64)
                }
                _ => Err(conversion_failure(
                    &n.to_string(),
                    "number has a fractional part or is out of integer range",
                )),
            }
        }
        Value::Null => Err(conversion_failure("null", "value is null")),
        Value::Bool(b) => Err(conversion_failure(
            &b.to_string(),
            "value is a boolean, not a number",
        )),
        Value::Array(_) => Err(conversion_failure("[...]", "value is an array")),
        Value::Object(_) => Err(conversion_failure("{...}", "value is an object")),
    }
}

/// Validate-first variant of [`coerce_int`].
///
/// Inspects the value's shape before attempting conversion and rejects
/// early with a shape-specific message. Kept as an alternative strategy
/// only; the outcome set is identical to `coerce_int` for every input.
/// Prefer `coerce_int`: it does not duplicate the parser's own checks, and
/// the failure message comes from the code that actually failed.
pub fn coerce_int_checked(value: &Value) -> Result<i64> {
    let shape = match value {
        Value::String(_) | Value::Number(_) => return coerce_int(value),
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    };

    Err(conversion_failure(
        &value.to_string(),
        &format!("expected a string or number, got {}", shape),
    ))
}

fn parse_int_str(s: &str) -> Result<i64> {
    s.trim()
        .parse::<i64>()
        .map_err(|e| conversion_failure(s, &e.to_string()))
}

fn conversion_failure(value: &str, reason: &str) -> GuardrailError {
    tracing::debug!("Coercion failed for '{}': {}", value, reason);
    GuardrailError::ConversionFailure {
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
