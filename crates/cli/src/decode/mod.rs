//! Parses the input document and drives it into a frozen [`Catalogue`].

mod document;
mod ingest;

pub use document::{BaseRequest, InputDocument, RoutingSettings, StatRequest};
pub use ingest::build_catalogue;

use std::io::Read;

use crate::error::DecodeError;

/// Reads and parses the entire input document from `reader`. A malformed
/// document is a fatal [`DecodeError`]; everything downstream of a
/// successful parse degrades record-by-record instead.
pub fn decode_document(mut reader: impl Read) -> Result<InputDocument, DecodeError> {
    let mut raw = String::new();
    reader.read_to_string(&mut raw)?;
    Ok(serde_json::from_str(&raw)?)
}
