//! Payload codec error type.

use thiserror::Error;

/// Error type for payload encoding/decoding operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PayloadError {
    /// Structural failure: empty input, truncated TLV header or value,
    /// malformed length header, or a mandatory field out of contract.
    #[error("invalid format")]
    InvalidFormat,
    /// The structural parse succeeded but the trailing 4-hex-digit CRC does
    /// not match the payload body.
    #[error("invalid checksum")]
    InvalidChecksum,
    /// Transaction amount failed numeric parsing.
    #[error("invalid amount")]
    InvalidAmount,
    /// A field value exceeds the 99 characters a two-digit TLV length header
    /// can describe.
    #[error("value of tag {tag} is {len} chars, over the 99-char TLV limit")]
    ValueTooLong {
        /// Tag of the offending field.
        tag: String,
        /// Byte length of the rejected value.
        len: usize,
    },
}
