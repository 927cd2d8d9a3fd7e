//! Generic tag-length-value codec shared by every payload schema.
//!
//! A payload is a flat sequence of `tag(2) + length(2) + value(length)`
//! fields; nested scopes are ordinary fields whose value is itself a flat
//! TLV string, tokenized by recursive application of the same decoder.

mod decoder;
mod encoder;
mod types;

pub use decoder::{tokenize, tokenize_scope};
pub use encoder::{format_amount, format_field, format_target, sanitize_target, serialize};
pub use types::{Scope, Segment};
