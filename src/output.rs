//! Solution report written to stdout when printing is enabled.
use std::io::Write;

use crate::models::VarValue;

// `{}` never uses an exponent. From 1e16 up f64 no longer holds every
// integer digit, so `{}` would print trailing zeros the value does not carry.
const EXPONENT_ABOVE: f64 = 1e16;
// Same lower bound as printf `%g`
const EXPONENT_BELOW: f64 = 1e-4;

/// Shortest round-trippable rendering of `value`, no trailing zeros.
/// Very large or very small magnitudes switch to exponent notation.
pub fn format_general(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    // covers -0.0
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    if magnitude >= EXPONENT_ABOVE || magnitude < EXPONENT_BELOW {
        format!("{:e}", value)
    } else {
        format!("{}", value)
    }
}

/// Write one `<name> <value>` line per variable followed by `Obj: <value>`.
pub fn write_report<W: Write + ?Sized>(
    out: &mut W,
    variables: &[VarValue],
    objective: f64,
) -> std::io::Result<()> {
    for var in variables {
        writeln!(out, "{} {}", var.name, format_general(var.value))?;
    }
    writeln!(out, "Obj: {}", format_general(objective))?;
    out.flush()
}
