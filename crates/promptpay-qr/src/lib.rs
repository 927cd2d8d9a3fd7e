//! Thai PromptPay / EMV QRCPS payload codec.
//!
//! Encoders and decoders for the payload strings defined by the EMV QR Code
//! Specification for Payment Systems as profiled by the Thai national
//! scheme: merchant-presented credit transfer, bill payment, and
//! payment-slip verification.
//!
//! A payload is a flat ASCII tag-length-value string terminated by a
//! CRC-16/CCITT-FALSE trailer. Nested scopes (merchant information, the
//! verification inner payload) are fields whose value is itself a TLV
//! string, handled by recursive application of the same [`tlv`] codec.
//!
//! Everything here is synchronous and allocation-per-call; encode and decode
//! are freely callable from concurrent threads. QR image rendering lives in
//! the sibling `promptpay-qr-image` crate.
//!
//! # Example
//!
//! ```
//! use promptpay_qr::transfer::{self, TransferCmd};
//!
//! let payload = transfer::encode(&TransferCmd {
//!     proxy_id: "0909764856".into(),
//!     ..TransferCmd::default()
//! })?;
//! assert_eq!(
//!     payload,
//!     "00020101021129370016A0000006770101110113006690976485653037645802TH63044D1B"
//! );
//!
//! let decoded = transfer::decode(&payload)?;
//! assert_eq!(decoded.credit_transfer.msisdn, "0066909764856");
//! assert_eq!(decoded.transaction_currency_code, "THB");
//! # Ok::<(), promptpay_qr::PayloadError>(())
//! ```

pub mod bill_payment;
pub mod constants;
pub mod crc16;
pub mod currency;
mod error;
pub mod slip_verify;
pub mod tlv;
pub mod transfer;

pub use error::PayloadError;
pub use tlv::{Scope, Segment};
