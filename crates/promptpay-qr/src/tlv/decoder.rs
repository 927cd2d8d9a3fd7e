//! Flat TLV scope tokenizer.

use super::{Scope, Segment};
use crate::error::PayloadError;

/// Tokenize one flat TLV scope.
///
/// Each field is a two-character tag, a two-digit decimal length, then
/// exactly `length` bytes of value. Consumption repeats until the input is
/// exhausted. Empty input, a truncated header or value, and a non-digit
/// length header are all [`PayloadError::InvalidFormat`].
pub fn tokenize(data: &str) -> Result<Scope, PayloadError> {
    if data.is_empty() {
        return Err(PayloadError::InvalidFormat);
    }

    let mut scope = Scope::default();
    let mut remain = data;
    while !remain.is_empty() {
        let (header, rest) = take(remain, 4)?;
        let (id, len_str) = take(header, 2)?;
        let length = parse_len(len_str)?;
        let (value, rest) = take(rest, length)?;

        scope.segments.push(Segment {
            raw: format!("{id}{len_str}{value}"),
            id: id.to_owned(),
            length,
            value: value.to_owned(),
        });
        scope.fields.insert(id.to_owned(), value.to_owned());
        remain = rest;
    }

    Ok(scope)
}

/// Tokenize the string value of a nested scope.
///
/// An absent scope (empty value) yields an empty result so that callers can
/// surface its sub-fields as `""`; a present but malformed scope is a hard
/// [`PayloadError::InvalidFormat`].
pub fn tokenize_scope(data: &str) -> Result<Scope, PayloadError> {
    if data.is_empty() {
        return Ok(Scope::default());
    }
    tokenize(data)
}

fn take(data: &str, n: usize) -> Result<(&str, &str), PayloadError> {
    if data.len() < n || !data.is_char_boundary(n) {
        return Err(PayloadError::InvalidFormat);
    }
    Ok(data.split_at(n))
}

fn parse_len(s: &str) -> Result<usize, PayloadError> {
    // Reject the sign prefixes that a bare integer parse would accept.
    if !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(PayloadError::InvalidFormat);
    }
    s.parse().map_err(|_| PayloadError::InvalidFormat)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenize_splits_fields_in_order() {
        let scope = tokenize("000201010212").unwrap();
        assert_eq!(scope.value("00"), "01");
        assert_eq!(scope.value("01"), "12");
        let ids: Vec<&str> = scope.segments().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["00", "01"]);
        assert_eq!(scope.segments()[0].raw, "000201");
    }

    #[test]
    fn tokenize_rejects_empty_input() {
        assert_eq!(tokenize(""), Err(PayloadError::InvalidFormat));
    }

    #[test]
    fn tokenize_rejects_truncated_header() {
        assert_eq!(tokenize("000"), Err(PayloadError::InvalidFormat));
    }

    #[test]
    fn tokenize_rejects_value_shorter_than_declared() {
        assert_eq!(tokenize("0005ABC"), Err(PayloadError::InvalidFormat));
    }

    #[test]
    fn tokenize_rejects_non_decimal_length() {
        assert_eq!(tokenize("00xxAB"), Err(PayloadError::InvalidFormat));
        // `parse::<usize>` alone would accept a sign here.
        assert_eq!(tokenize("00+1A"), Err(PayloadError::InvalidFormat));
        assert_eq!(tokenize("00-1A"), Err(PayloadError::InvalidFormat));
    }

    #[test]
    fn duplicate_tags_keep_both_segments_and_last_value() {
        let scope = tokenize("0001A0001B").unwrap();
        assert_eq!(scope.value("00"), "B");
        assert_eq!(scope.segments().len(), 2);
    }

    #[test]
    fn absent_nested_scope_is_empty_not_error() {
        let scope = tokenize_scope("").unwrap();
        assert_eq!(scope.value("00"), "");
        assert!(scope.segments().is_empty());
    }

    #[test]
    fn malformed_nested_scope_is_an_error() {
        assert_eq!(tokenize_scope("0099X"), Err(PayloadError::InvalidFormat));
    }
}
