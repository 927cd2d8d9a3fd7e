//! Merchant-presented credit transfer payloads.
//!
//! A transfer payload routes money to a payee proxy (phone number, national
//! ID, e-wallet ID, or bank account) carried inside the tag-29 merchant
//! information scope.

use serde::{Deserialize, Serialize};

use crate::constants::{
    COUNTRY_TH, CURRENCY_THB, ID_COUNTRY_CODE, ID_CRC, ID_MERCHANT_CATEGORY_CODE,
    ID_MERCHANT_CITY, ID_MERCHANT_INFO_CREDIT_TRANSFER, ID_MERCHANT_NAME, ID_PAYLOAD_FORMAT,
    ID_POI_METHOD, ID_POSTAL_CODE, ID_TRANSACTION_AMOUNT, ID_TRANSACTION_CURRENCY,
    PAYLOAD_FORMAT_EMV_QRCPS, POI_METHOD_DYNAMIC, POI_METHOD_STATIC,
};
use crate::error::PayloadError;
use crate::tlv::{self, Segment};
use crate::{crc16, currency};

/// Application identifier of the credit transfer service.
const AID_CREDIT_TRANSFER: &str = "A000000677010111";

// Sub-tags of the tag-29 merchant information scope.
const SUB_AID: &str = "00";
const SUB_MSISDN: &str = "01";
const SUB_NATIONAL_ID: &str = "02";
const SUB_EWALLET_ID: &str = "03";
const SUB_BANK_ACCOUNT: &str = "04";
const SUB_OTA: &str = "05";

/// Routing proxy kind for a credit transfer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProxyType {
    /// Phone number, the scheme default.
    #[default]
    #[serde(rename = "MSISDN")]
    Msisdn,
    #[serde(rename = "NATID")]
    NationalId,
    #[serde(rename = "EWALLETID")]
    EWalletId,
    #[serde(rename = "BANKACCOUNT")]
    BankAccount,
}

impl ProxyType {
    /// Parse the scheme's proxy type names case-insensitively. Anything
    /// unrecognized routes as a phone number, matching the wire default.
    pub fn parse(name: &str) -> Self {
        match name.to_ascii_uppercase().as_str() {
            "EWALLETID" => Self::EWalletId,
            "NATID" => Self::NationalId,
            "BANKACCOUNT" => Self::BankAccount,
            _ => Self::Msisdn,
        }
    }

    fn sub_tag(self) -> &'static str {
        match self {
            Self::Msisdn => SUB_MSISDN,
            Self::NationalId => SUB_NATIONAL_ID,
            Self::EWalletId => SUB_EWALLET_ID,
            Self::BankAccount => SUB_BANK_ACCOUNT,
        }
    }
}

/// Input for building a credit transfer payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferCmd {
    /// Payee proxy identifier; sanitized to digits before encoding.
    pub proxy_id: String,
    #[serde(default)]
    pub proxy_type: ProxyType,
    /// Transaction amount. Blank produces a reusable static payload,
    /// non-blank a one-time dynamic payload.
    #[serde(default)]
    pub amount: String,
    /// One-time-authorization token, emitted only when non-blank.
    #[serde(default)]
    pub ota: String,
    /// Defaults to `TH` when blank.
    #[serde(default)]
    pub country_code: String,
    /// ISO 4217 alphabetic code; blank or unknown falls back to THB.
    #[serde(default)]
    pub currency_code: String,
}

/// Decoded credit transfer payload.
///
/// Every field is populated even when the source payload omitted the tag
/// (the value is then `""`), and `segments` retains the raw top-level field
/// sequence for auditing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferQr {
    pub payload_format_indicator: String,
    pub point_of_initiation_method: String,
    pub credit_transfer: CreditTransfer,
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
    pub crc: String,
    pub segments: Vec<Segment>,
}

/// Sub-fields of the tag-29 merchant information scope.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditTransfer {
    pub aid: String,
    pub msisdn: String,
    pub national_id: String,
    #[serde(rename = "eWalletID")]
    pub e_wallet_id: String,
    pub bank_account: String,
    pub ota: String,
    pub segments: Vec<Segment>,
}

/// Build a credit transfer payload string, checksum trailer included.
pub fn encode(cmd: &TransferCmd) -> Result<String, PayloadError> {
    let proxy = tlv::format_target(&cmd.proxy_id);

    let mut merchant = vec![
        tlv::format_field(SUB_AID, AID_CREDIT_TRANSFER)?,
        tlv::format_field(cmd.proxy_type.sub_tag(), &proxy)?,
    ];
    if !cmd.ota.trim().is_empty() {
        merchant.push(tlv::format_field(SUB_OTA, &cmd.ota)?);
    }

    let amount = cmd.amount.trim();
    let poi = if amount.is_empty() {
        POI_METHOD_STATIC
    } else {
        POI_METHOD_DYNAMIC
    };

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
        tlv::format_field(ID_MERCHANT_INFO_CREDIT_TRANSFER, &tlv::serialize(&merchant))?,
        tlv::format_field(ID_TRANSACTION_CURRENCY, currency_no)?,
        tlv::format_field(ID_COUNTRY_CODE, country)?,
    ];
    if !amount.is_empty() {
        data.push(tlv::format_field(
            ID_TRANSACTION_AMOUNT,
            &tlv::format_amount(amount)?,
        )?);
    }

    let body = tlv::serialize(&data);
    let trailer = crc16::trailer_field(&body, ID_CRC);
    Ok(body + &trailer)
}

/// Parse and validate a scanned credit transfer payload.
pub fn decode(data: &str) -> Result<TransferQr, PayloadError> {
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

    let merchant = tlv::tokenize_scope(top.value(ID_MERCHANT_INFO_CREDIT_TRANSFER))?;

    Ok(TransferQr {
        payload_format_indicator,
        point_of_initiation_method,
        credit_transfer: CreditTransfer {
            aid: merchant.field(SUB_AID),
            msisdn: merchant.field(SUB_MSISDN),
            national_id: merchant.field(SUB_NATIONAL_ID),
            e_wallet_id: merchant.field(SUB_EWALLET_ID),
            bank_account: merchant.field(SUB_BANK_ACCOUNT),
            ota: merchant.field(SUB_OTA),
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
        crc: top.field(ID_CRC),
        segments: top.into_segments(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn proxy_type_parses_case_insensitively() {
        assert_eq!(ProxyType::parse("ewalletid"), ProxyType::EWalletId);
        assert_eq!(ProxyType::parse("NatID"), ProxyType::NationalId);
        assert_eq!(ProxyType::parse("BANKACCOUNT"), ProxyType::BankAccount);
        assert_eq!(ProxyType::parse("MSISDN"), ProxyType::Msisdn);
        assert_eq!(ProxyType::parse("anything-else"), ProxyType::Msisdn);
    }

    #[test]
    fn encode_includes_ota_when_present() {
        let with_ota = encode(&TransferCmd {
            proxy_id: "0909764856".into(),
            ota: "OTA123".into(),
            ..TransferCmd::default()
        })
        .unwrap();
        assert!(with_ota.contains("0506OTA123"));

        let decoded = decode(&with_ota).unwrap();
        assert_eq!(decoded.credit_transfer.ota, "OTA123");
    }

    #[test]
    fn encode_rejects_malformed_amount() {
        let err = encode(&TransferCmd {
            proxy_id: "0909764856".into(),
            amount: "10xx.00".into(),
            ..TransferCmd::default()
        })
        .unwrap_err();
        assert_eq!(err, PayloadError::InvalidAmount);
    }

    #[test]
    fn decode_rejects_unknown_payload_format() {
        // Structurally valid TLV with a correct trailer but PFI `02`.
        let body = "000202";
        let payload = format!("{body}{}", crc16::trailer_field(body, "63"));
        assert_eq!(decode(&payload), Err(PayloadError::InvalidFormat));
    }

    #[test]
    fn decode_rejects_bad_country_code() {
        // PFI and POI valid, country code three chars.
        let body = "0002010102115803THA";
        let payload = format!("{body}{}", crc16::trailer_field(body, "63"));
        assert_eq!(decode(&payload), Err(PayloadError::InvalidFormat));
    }

    #[test]
    fn decode_surfaces_malformed_merchant_scope() {
        // Tag 29 present but its value is not valid TLV.
        let body = "000201010211290499995802TH";
        let payload = format!("{body}{}", crc16::trailer_field(body, "63"));
        assert_eq!(decode(&payload), Err(PayloadError::InvalidFormat));
    }

    #[test]
    fn decode_rejects_tampered_payload() {
        let payload =
            "00020101021129370016A0000006770101110113006690976485653037645802TH63044D1B";
        let mut tampered = payload.to_owned();
        tampered.replace_range(10..11, "3");
        assert_eq!(decode(&tampered), Err(PayloadError::InvalidChecksum));
    }
}
