use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::registry::{registry, CodecEntry};
use crate::{Error, Multicodec};

impl Multicodec {
    pub fn from_code(code: &[u8]) -> Result<Self, Error> {
        registry().lookup_by_code(code).map(CodecEntry::codec)
    }

    pub fn from_name(name: &str) -> Result<Self, Error> {
        registry().lookup_by_name(name).map(CodecEntry::codec)
    }

    /// The registry entry for this codec.
    pub fn entry(&self) -> &'static CodecEntry {
        registry().get(*self)
    }

    /// The wire prefix: every byte of [`code`](Self::code) varint encoded.
    pub fn varint_encoding(&self) -> &'static [u8] {
        self.entry().varint_encoding()
    }

    /// Only single-byte codes can be recovered by [`crate::decode`].
    pub fn is_single_byte(&self) -> bool {
        self.code().len() == 1
    }
}

impl fmt::Display for Multicodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Multicodec {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

impl Serialize for Multicodec {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Multicodec {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Multicodec::from_name(&name).map_err(de::Error::custom)
    }
}
