//! Shared EMV QRCPS tag identifiers and fixed values.
//!
//! Tags specific to one nested scope live with the schema that owns them;
//! this module holds the top-level merchant-presented tags and the values
//! every schema agrees on.

/// Payload format indicator for EMV QRCPS merchant-presented mode.
pub const PAYLOAD_FORMAT_EMV_QRCPS: &str = "01";
/// Point of initiation: reusable payload, no amount bound.
pub const POI_METHOD_STATIC: &str = "11";
/// Point of initiation: one-time payload carrying an amount.
pub const POI_METHOD_DYNAMIC: &str = "12";

pub const ID_PAYLOAD_FORMAT: &str = "00";
pub const ID_POI_METHOD: &str = "01";
pub const ID_MERCHANT_INFO_CREDIT_TRANSFER: &str = "29";
pub const ID_MERCHANT_INFO_BILL_PAYMENT: &str = "30";
pub const ID_MERCHANT_CATEGORY_CODE: &str = "52";
pub const ID_TRANSACTION_CURRENCY: &str = "53";
pub const ID_TRANSACTION_AMOUNT: &str = "54";
pub const ID_COUNTRY_CODE: &str = "58";
pub const ID_MERCHANT_NAME: &str = "59";
pub const ID_MERCHANT_CITY: &str = "60";
pub const ID_POSTAL_CODE: &str = "61";
pub const ID_ADDITIONAL_FIELDS: &str = "62";
pub const ID_CRC: &str = "63";

/// ISO 4217 numeric code for Thai baht, the scheme default.
pub const CURRENCY_THB: &str = "764";
/// Default country code.
pub const COUNTRY_TH: &str = "TH";
/// Lao country code, used by cross-border slip verification.
pub const COUNTRY_LA: &str = "LA";
