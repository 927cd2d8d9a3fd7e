//! TLV segment and scope types.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One tag-length-value triple from a flat TLV scope.
///
/// `raw` preserves the literal `tag + length + value` substring so a scope
/// can be re-serialized byte-for-byte and audited after decoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    #[serde(rename = "rawValue")]
    pub raw: String,
    pub id: String,
    pub length: usize,
    pub value: String,
}

/// One tokenized TLV scope: the ordered segment list plus a tag -> value
/// index derived from it.
///
/// The index is last-write-wins on duplicate tags; the segment list keeps
/// every occurrence in wire order, which is what re-serialization and
/// checksum computation depend on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scope {
    pub(crate) fields: BTreeMap<String, String>,
    pub(crate) segments: Vec<Segment>,
}

impl Scope {
    /// Value of the tag, `""` when absent.
    pub fn value(&self, id: &str) -> &str {
        self.fields.get(id).map(String::as_str).unwrap_or("")
    }

    /// Owned value of the tag, `""` when absent.
    pub fn field(&self, id: &str) -> String {
        self.value(id).to_owned()
    }

    /// Segments in wire order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Consume the scope, keeping only the ordered segments.
    pub fn into_segments(self) -> Vec<Segment> {
        self.segments
    }
}
