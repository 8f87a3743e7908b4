#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("Unknown multicodec code: 0x{}", hex::encode_upper(.0))]
    UnknownCodec(Vec<u8>),

    #[error("Unknown multicodec name: {0}")]
    UnknownName(String),

    /// No registered single-byte code prefixes the input. Carries the input as hex.
    #[error("Could not decode: {0}")]
    AmbiguousOrUnknownCodec(String),

    #[error("Invalid hex code: {0}")]
    InvalidHexCode(#[from] hex::FromHexError),
}
