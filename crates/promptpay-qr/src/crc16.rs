//! CRC-16/CCITT-FALSE checksum engine for payload trailers.
//!
//! ISO/IEC 13239 with polynomial `0x1021`, initial register `0xFFFF`, no
//! reflection, no final XOR.

const POLYNOMIAL: u16 = 0x1021;
const INITIAL: u16 = 0xFFFF;

/// Compute the CRC-16/CCITT-FALSE of `data`, rendered as four uppercase hex
/// digits with leading zeros.
pub fn checksum(data: &[u8]) -> String {
    let mut crc = INITIAL;
    for &byte in data {
        crc ^= u16::from(byte) << 8;
        for _ in 0..8 {
            if crc & 0x8000 != 0 {
                crc = (crc << 1) ^ POLYNOMIAL;
            } else {
                crc <<= 1;
            }
        }
    }
    format!("{crc:04X}")
}

/// Check the trailing 4-character CRC of a full payload string.
///
/// Purely positional: the last four characters are compared against the
/// checksum of everything before them, without validating that they were
/// tagged as a checksum field. Inputs too short to carry both a body and a
/// trailer fail the check.
pub fn verify_payload(data: &str) -> bool {
    if data.len() < 5 {
        return false;
    }
    let bytes = data.as_bytes();
    let (body, trailer) = bytes.split_at(bytes.len() - 4);
    checksum(body).as_bytes() == trailer
}

/// Format the checksum trailer field for an already-serialized payload body.
///
/// The CRC covers the body plus the trailer's own tag and literal `04`
/// length header, so the returned field appends directly after `body`.
pub fn trailer_field(body: &str, tag: &str) -> String {
    let crc = checksum(format!("{body}{tag}04").as_bytes());
    format!("{tag}04{crc}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checksum_known_vectors() {
        // The classic CRC-16/CCITT-FALSE check value.
        assert_eq!(checksum(b"123456789"), "29B1");
        assert_eq!(checksum(b""), "FFFF");
    }

    #[test]
    fn checksum_is_zero_padded_uppercase() {
        let crc = checksum(b"T");
        assert_eq!(crc.len(), 4);
        assert!(crc.bytes().all(|b| b.is_ascii_digit() || b.is_ascii_uppercase()));
    }

    #[test]
    fn verify_accepts_valid_trailer() {
        assert!(verify_payload(
            "00020101021229390016A000000677010111031500499901428007653037645802TH540510.0063046D71"
        ));
    }

    #[test]
    fn verify_rejects_empty_and_short_input() {
        assert!(!verify_payload(""));
        assert!(!verify_payload("6D71"));
    }

    #[test]
    fn verify_rejects_tampered_trailer() {
        assert!(!verify_payload("000201FFFF"));
    }

    #[test]
    fn trailer_field_matches_wire_form() {
        let body = "00020101021129370016A0000006770101110113006690976485653037645802TH";
        assert_eq!(trailer_field(body, "63"), "63044D1B");
    }
}
