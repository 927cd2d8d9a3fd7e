//! Payment-slip verification payloads.
//!
//! A slip verification payload lets a counterparty look up a bank transfer
//! by transaction reference. It nests a payload-within-payload: the inner
//! tag-00 scope carries the API identifier, sending bank, and transaction
//! reference, and the trailer uses the distinct checksum tag 91.

use serde::{Deserialize, Serialize};

use crate::crc16;
use crate::error::PayloadError;
use crate::tlv::{self, Segment};

// Outer scope tags.
const ID_PAYLOAD: &str = "00";
const ID_COUNTRY_CODE: &str = "51";
const ID_CRC: &str = "91";

// Inner payload sub-tags.
const SUB_API_ID: &str = "00";
const SUB_SENDING_BANK_ID: &str = "01";
const SUB_TRANSACTION_REF: &str = "02";

/// Fixed API identifier of the slip verification service.
const API_ID_SLIP_VERIFY: &str = "000001";

/// Shortest payload the scheme emits; anything below is rejected outright.
const MIN_PAYLOAD_LEN: usize = 40;

/// Input for building a slip verification payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlipVerifyCmd {
    /// Bank transaction reference, free text, emitted as-is.
    pub transaction_ref: String,
    /// Sending bank identifier; sanitized to digits before encoding.
    pub sending_bank_id: String,
    pub country_code: String,
}

/// Decoded slip verification payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlipVerifyQr {
    pub payload: SlipPayload,
    pub country_code: String,
    pub crc: String,
    pub segments: Vec<Segment>,
}

/// Sub-fields of the inner tag-00 payload scope.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlipPayload {
    pub api_id: String,
    pub transaction_ref: String,
    pub sending_bank_id: String,
    pub segments: Vec<Segment>,
}

/// Build a slip verification payload string, checksum trailer included.
pub fn encode(cmd: &SlipVerifyCmd) -> Result<String, PayloadError> {
    let sending_bank_id = tlv::sanitize_target(&cmd.sending_bank_id);
    let inner = vec![
        tlv::format_field(SUB_API_ID, API_ID_SLIP_VERIFY)?,
        tlv::format_field(SUB_SENDING_BANK_ID, &sending_bank_id)?,
        tlv::format_field(SUB_TRANSACTION_REF, &cmd.transaction_ref)?,
    ];

    let data = vec![
        tlv::format_field(ID_PAYLOAD, &tlv::serialize(&inner))?,
        tlv::format_field(ID_COUNTRY_CODE, &cmd.country_code)?,
    ];

    let body = tlv::serialize(&data);
    let trailer = crc16::trailer_field(&body, ID_CRC);
    Ok(body + &trailer)
}

/// Parse and validate a scanned slip verification payload.
///
/// The inner tag-00 scope is mandatory: a missing or malformed inner payload
/// and an API identifier other than the fixed constant are format errors.
pub fn decode(data: &str) -> Result<SlipVerifyQr, PayloadError> {
    if data.len() < MIN_PAYLOAD_LEN {
        return Err(PayloadError::InvalidFormat);
    }
    if !crc16::verify_payload(data) {
        return Err(PayloadError::InvalidChecksum);
    }

    let top = tlv::tokenize(data)?;
    let inner = tlv::tokenize(top.value(ID_PAYLOAD))?;

    let api_id = inner.field(SUB_API_ID);
    if api_id != API_ID_SLIP_VERIFY {
        return Err(PayloadError::InvalidFormat);
    }

    Ok(SlipVerifyQr {
        payload: SlipPayload {
            api_id,
            transaction_ref: inner.field(SUB_TRANSACTION_REF),
            sending_bank_id: inner.field(SUB_SENDING_BANK_ID),
            segments: inner.into_segments(),
        },
        country_code: top.field(ID_COUNTRY_CODE),
        crc: top.field(ID_CRC),
        segments: top.into_segments(),
    })
}
