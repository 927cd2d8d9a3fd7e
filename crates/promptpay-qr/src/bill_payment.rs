//! Merchant-presented bill payment payloads.
//!
//! Same top-level skeleton as a credit transfer, but the nested merchant
//! scope is tag 30 and carries a biller ID plus two free-text references.
//! A non-blank terminal ID adds a separate tag-62 additional-fields scope.

use serde::{Deserialize, Serialize};

use crate::constants::{
    COUNTRY_TH, CURRENCY_THB, ID_ADDITIONAL_FIELDS, ID_COUNTRY_CODE, ID_CRC,
    ID_MERCHANT_CATEGORY_CODE, ID_MERCHANT_CITY, ID_MERCHANT_INFO_BILL_PAYMENT, ID_MERCHANT_NAME,
    ID_PAYLOAD_FORMAT, ID_POI_METHOD, ID_POSTAL_CODE, ID_TRANSACTION_AMOUNT,
    ID_TRANSACTION_CURRENCY, PAYLOAD_FORMAT_EMV_QRCPS, POI_METHOD_DYNAMIC, POI_METHOD_STATIC,
};
use crate::error::PayloadError;
use crate::tlv::{self, Segment};
use crate::{crc16, currency};

/// Application identifier of the bill payment service.
const AID_BILL_PAYMENT: &str = "A000000677010112";

// Sub-tags of the tag-30 merchant information scope.
const SUB_AID: &str = "00";
const SUB_BILLER_ID: &str = "01";
const SUB_REF1: &str = "02";
const SUB_REF2: &str = "03";

/// Terminal ID sub-tag of the tag-62 additional-fields scope.
const SUB_TERMINAL_ID: &str = "07";

/// Input for building a bill payment payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillPaymentCmd {
    /// Biller identifier; sanitized to digits before encoding.
    pub biller_id: String,
    /// First reference, free text, emitted as-is.
    pub ref1: String,
    /// Second reference, free text, emitted as-is.
    pub ref2: String,
    /// Emitted in a tag-62 scope only when non-blank.
    #[serde(default)]
    pub terminal_id: String,
    #[serde(default)]
    pub amount: String,
    /// Defaults to `TH` when blank.
    #[serde(default)]
    pub country_code: String,
    /// ISO 4217 alphabetic code; blank or unknown falls back to THB.
    #[serde(default)]
    pub currency_code: String,
}

/// Decoded bill payment payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillPaymentQr {
    pub payload_format_indicator: String,
    pub point_of_initiation_method: String,
    pub bill_payment: BillPayment,
    pub merchant_category_code: String,
    /// ISO 4217 numeric code from tag 53.
    pub transaction_currency: String,
    /// Alphabetic code resolved from tag 53, `""` when unknown.
    pub transaction_currency_code: String,
    pub transaction_amount: String,
    pub country_code: String,
    pub merchant_name: String,
    pub merchant_city: String,
    pub postal_code: String,
    pub additional_fields: AdditionalFields,
    pub crc: String,
    pub segments: Vec<Segment>,
}

/// Sub-fields of the tag-30 merchant information scope.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillPayment {
    pub aid: String,
    pub biller_id: String,
    pub reference1: String,
    pub reference2: String,
    pub segments: Vec<Segment>,
}

/// Sub-fields of the tag-62 additional-fields scope.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdditionalFields {
    pub terminal_id: String,
    pub segments: Vec<Segment>,
}

/// Build a bill payment payload string, checksum trailer included.
pub fn encode(cmd: &BillPaymentCmd) -> Result<String, PayloadError> {
    let biller_id = tlv::sanitize_target(&cmd.biller_id);
    let amount = cmd.amount.trim();
    let poi = if amount.is_empty() {
        POI_METHOD_STATIC
    } else {
        POI_METHOD_DYNAMIC
    };

    let merchant = vec![
        tlv::format_field(SUB_AID, AID_BILL_PAYMENT)?,
        tlv::format_field(SUB_BILLER_ID, &biller_id)?,
        tlv::format_field(SUB_REF1, &cmd.ref1)?,
        tlv::format_field(SUB_REF2, &cmd.ref2)?,
    ];

    let mut currency_no = currency::numeric_code(&cmd.currency_code);
    if currency_no.is_empty() {
        currency_no = CURRENCY_THB;
    }
    let country = if cmd.country_code.is_empty() {
        COUNTRY_TH
    } else {
        cmd.country_code.as_str()
    };

    let mut data = vec![
        tlv::format_field(ID_PAYLOAD_FORMAT, PAYLOAD_FORMAT_EMV_QRCPS)?,
        tlv::format_field(ID_POI_METHOD, poi)?,
        tlv::format_field(ID_MERCHANT_INFO_BILL_PAYMENT, &tlv::serialize(&merchant))?,
        tlv::format_field(ID_TRANSACTION_CURRENCY, currency_no)?,
    ];
    if !amount.is_empty() {
        data.push(tlv::format_field(
            ID_TRANSACTION_AMOUNT,
            &tlv::format_amount(amount)?,
        )?);
    }
    data.push(tlv::format_field(ID_COUNTRY_CODE, country)?);
    if !cmd.terminal_id.trim().is_empty() {
        let additional = tlv::format_field(SUB_TERMINAL_ID, &cmd.terminal_id)?;
        data.push(tlv::format_field(ID_ADDITIONAL_FIELDS, &additional)?);
    }

    let body = tlv::serialize(&data);
    let trailer = crc16::trailer_field(&body, ID_CRC);
    Ok(body + &trailer)
}

/// Parse and validate a scanned bill payment payload.
pub fn decode(data: &str) -> Result<BillPaymentQr, PayloadError> {
    if data.is_empty() {
        return Err(PayloadError::InvalidFormat);
    }
    if !crc16::verify_payload(data) {
        return Err(PayloadError::InvalidChecksum);
    }

    let top = tlv::tokenize(data)?;

    let payload_format_indicator = top.field(ID_PAYLOAD_FORMAT);
    if payload_format_indicator != PAYLOAD_FORMAT_EMV_QRCPS {
        return Err(PayloadError::InvalidFormat);
    }
    let point_of_initiation_method = top.field(ID_POI_METHOD);
    if point_of_initiation_method != POI_METHOD_STATIC
        && point_of_initiation_method != POI_METHOD_DYNAMIC
    {
        return Err(PayloadError::InvalidFormat);
    }
    let country_code = top.field(ID_COUNTRY_CODE);
    if country_code.len() != 2 {
        return Err(PayloadError::InvalidFormat);
    }

    let merchant = tlv::tokenize_scope(top.value(ID_MERCHANT_INFO_BILL_PAYMENT))?;
    let additional = tlv::tokenize_scope(top.value(ID_ADDITIONAL_FIELDS))?;

    Ok(BillPaymentQr {
        payload_format_indicator,
        point_of_initiation_method,
        bill_payment: BillPayment {
            aid: merchant.field(SUB_AID),
            biller_id: merchant.field(SUB_BILLER_ID),
            reference1: merchant.field(SUB_REF1),
            reference2: merchant.field(SUB_REF2),
            segments: merchant.into_segments(),
        },
        merchant_category_code: top.field(ID_MERCHANT_CATEGORY_CODE),
        transaction_currency_code: currency::alpha_code(top.value(ID_TRANSACTION_CURRENCY))
            .to_owned(),
        transaction_currency: top.field(ID_TRANSACTION_CURRENCY),
        transaction_amount: top.field(ID_TRANSACTION_AMOUNT),
        country_code,
        merchant_name: top.field(ID_MERCHANT_NAME),
        merchant_city: top.field(ID_MERCHANT_CITY),
        postal_code: top.field(ID_POSTAL_CODE),
        additional_fields: AdditionalFields {
            terminal_id: additional.field(SUB_TERMINAL_ID),
            segments: additional.into_segments(),
        },
        crc: top.field(ID_CRC),
        segments: top.into_segments(),
    })
}
