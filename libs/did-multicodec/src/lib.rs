//! Multicodec: self-describing data through a varint-encoded type prefix.
//!
//! [Specification](https://github.com/multiformats/multicodec)
//!
//! Multicodec is part of the [Multiformats](https://github.com/multiformats/multiformats)
//! collection of protocols. A payload is tagged by prepending the unsigned
//! varint encoding of a registered code, e.g. `did:key` identifiers prefix
//! public keys with `ed25519-pub` (`0xed`) or `secp256k1-pub` (`0xe7`).
//!
//! ```
//! use did_multicodec::{decode, encode, Multicodec};
//!
//! let encoded = encode(Multicodec::SHA2_256, &[0xa1, 0xe9]);
//! assert_eq!(encoded, [0x12, 0xa1, 0xe9]);
//!
//! let decoded = decode(&encoded).unwrap();
//! assert_eq!(decoded.codec(), Multicodec::SHA2_256);
//! assert_eq!(decoded.hex_data(), "A1E9");
//! ```
extern crate thiserror;

mod codec;
mod decoded;
mod error;
mod multicodec;
mod registry;
mod table;
pub mod varint;

pub use decoded::DecodedData;
pub use error::Error;
pub use multicodec::{decode, encode, encode_raw, MultiEncoded};
pub use registry::{registry, CodecEntry, Registry};
pub use table::Multicodec;
