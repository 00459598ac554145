mod error;

pub use error::CodecError;

use serde::{de::DeserializeOwned, Serialize};

use crate::{
    accumulator::Averager,
    monoid::{fingerprint::MultisetFingerprint, sum::Summable},
};

/// Partial results that can be shipped to whoever merges them, e.g. from worker processes to a
/// coordinator. Snapshots are CBOR encoded.
pub trait Snapshot: Serialize + DeserializeOwned {
    fn to_snapshot(&self) -> Result<Vec<u8>, CodecError> {
        let bytes = serde_cbor::to_vec(self).map_err(CodecError::Encode)?;
        tracing::debug!(len = bytes.len(), "encoded snapshot");
        Ok(bytes)
    }

    fn from_snapshot(bytes: &[u8]) -> Result<Self, CodecError> {
        tracing::debug!(len = bytes.len(), "decoding snapshot");
        serde_cbor::from_slice(bytes).map_err(CodecError::Decode)
    }
}

impl<V> Snapshot for Averager<V> where V: Summable + Serialize + DeserializeOwned {}

impl<T> Snapshot for MultisetFingerprint<T> {}
