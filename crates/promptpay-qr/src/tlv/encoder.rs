//! TLV field formatting and target/amount normalization.

use crate::error::PayloadError;

/// Format one field as `tag + two-digit length + value`.
///
/// A two-digit length header cannot describe more than 99 bytes, so longer
/// values are rejected rather than emitted with a corrupt header.
pub fn format_field(id: &str, value: &str) -> Result<String, PayloadError> {
    if value.len() > 99 {
        return Err(PayloadError::ValueTooLong {
            tag: id.to_owned(),
            len: value.len(),
        });
    }
    Ok(format!("{id}{:02}{value}", value.len()))
}

/// Concatenate formatted fields in the given order.
///
/// Order is semantically meaningful on the wire; the caller decides it.
pub fn serialize(parts: &[String]) -> String {
    parts.concat()
}

/// Strip every non-digit character from a proxy target.
pub fn sanitize_target(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}

/// Normalize a proxy target to its 13-digit wire form.
///
/// Identifiers of 13 digits or more (national IDs, e-wallet IDs, bank
/// accounts) pass through after sanitization. Shorter values are local phone
/// numbers: one leading `0` becomes the country calling code `66`, then the
/// result is left-padded with zeros to 13 digits.
pub fn format_target(value: &str) -> String {
    let digits = sanitize_target(value);
    if digits.len() >= 13 {
        return digits;
    }
    let msisdn = match digits.strip_prefix('0') {
        Some(rest) => format!("66{rest}"),
        None => digits,
    };
    let padded = format!("0000000000000{msisdn}");
    padded[padded.len() - 13..].to_owned()
}

/// Render an amount as fixed two-decimal text.
pub fn format_amount(value: &str) -> Result<String, PayloadError> {
    let amount: f64 = value
        .trim()
        .parse()
        .map_err(|_| PayloadError::InvalidAmount)?;
    // `parse::<f64>` accepts `inf` and `NaN`; no payment carries either.
    if !amount.is_finite() {
        return Err(PayloadError::InvalidAmount);
    }
    Ok(format!("{amount:.2}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_field_zero_pads_the_length() {
        assert_eq!(format_field("00", "01").unwrap(), "000201");
        assert_eq!(format_field("54", "10.00").unwrap(), "540510.00");
        assert_eq!(format_field("62", "").unwrap(), "6200");
    }

    #[test]
    fn format_field_rejects_values_over_99_bytes() {
        let long = "9".repeat(100);
        assert_eq!(
            format_field("29", &long),
            Err(PayloadError::ValueTooLong {
                tag: "29".to_owned(),
                len: 100
            })
        );
        assert!(format_field("29", &"9".repeat(99)).is_ok());
    }

    #[test]
    fn sanitize_strips_non_digits() {
        assert_eq!(sanitize_target("090-976-4856"), "0909764856");
        assert_eq!(sanitize_target("abc"), "");
    }

    #[test]
    fn format_target_normalizes_local_phone_numbers() {
        assert_eq!(format_target("0909764856"), "0066909764856");
        assert_eq!(format_target("090-976-4856"), "0066909764856");
    }

    #[test]
    fn format_target_passes_long_ids_through() {
        assert_eq!(format_target("1100601467182"), "1100601467182");
        assert_eq!(format_target("004999014280076"), "004999014280076");
    }

    #[test]
    fn format_amount_renders_two_decimals() {
        assert_eq!(format_amount("10").unwrap(), "10.00");
        assert_eq!(format_amount("555.55").unwrap(), "555.55");
        assert_eq!(format_amount(" 1.5 ").unwrap(), "1.50");
    }

    #[test]
    fn format_amount_rejects_garbage() {
        assert_eq!(format_amount("10xx.00"), Err(PayloadError::InvalidAmount));
        assert_eq!(format_amount(""), Err(PayloadError::InvalidAmount));
        assert_eq!(format_amount("inf"), Err(PayloadError::InvalidAmount));
        assert_eq!(format_amount("NaN"), Err(PayloadError::InvalidAmount));
    }
}
