use thiserror::Error;

/// Fatal failure to obtain a well-formed [`InputDocument`](crate::decode::InputDocument).
/// Everything else the decoder encounters is a per-record [`BuildError`](transit_catalogue::catalogue::BuildError),
/// logged and skipped rather than propagated here.
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse input document: {0}")]
    Json(#[from] serde_json::Error),
}
