use serde::{Deserialize, Serialize};

use crate::registry::CodecEntry;
use crate::{MultiEncoded, Multicodec};

/// The outcome of [`crate::decode`]: the matched codec and the payload that followed it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DecodedData {
    codec: Multicodec,
    #[serde(with = "hex::serde")]
    data: Vec<u8>,
}

impl DecodedData {
    pub fn codec(&self) -> Multicodec {
        self.codec
    }

    pub fn entry(&self) -> &'static CodecEntry {
        self.codec.entry()
    }

    pub fn byte_data(&self) -> &[u8] {
        &self.data
    }

    /// Upper-case hex of [`byte_data`](Self::byte_data).
    pub fn hex_data(&self) -> String {
        hex::encode_upper(&self.data)
    }

    pub fn into_parts(self) -> (Multicodec, Vec<u8>) {
        (self.codec, self.data)
    }
}

impl From<&MultiEncoded> for DecodedData {
    fn from(encoded: &MultiEncoded) -> Self {
        let (entry, data) = encoded.parts();
        Self {
            codec: entry.codec(),
            data: data.to_vec(),
        }
    }
}
