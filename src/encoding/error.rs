use thiserror::Error;

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("encoding error: {0}")]
    Encode(#[source] serde_cbor::Error),
    #[error("decoding error: {0}")]
    Decode(#[source] serde_cbor::Error),
}
