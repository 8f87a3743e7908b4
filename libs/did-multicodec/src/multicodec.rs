use crate::registry::{registry, CodecEntry};
use crate::{varint, DecodedData, Error, Multicodec};

/// Encodes `data` for `codec`: the varint-encoded code followed verbatim by `data`.
pub fn encode(codec: Multicodec, data: &[u8]) -> Vec<u8> {
    let prefix = codec.varint_encoding();
    let mut out = Vec::with_capacity(prefix.len() + data.len());
    out.extend_from_slice(prefix);
    out.extend_from_slice(data);
    out
}

/// Like [`encode`], but varint-encodes an arbitrary raw `code` without
/// consulting the registry.
pub fn encode_raw(code: &[u8], data: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(code.len() * 2 + data.len());
    varint::encode_code_into(code, &mut out);
    out.extend_from_slice(data);
    out
}

/// Decodes a multicodec encoded byte string.
///
/// Only single-byte codes are resolved. Multi-byte codes are not prefix-free
/// against single-byte codes followed by data: `0x01 || 11A1E9D3D8EC` (CIDV1)
/// and `0x0111 || A1E9D3D8EC` (UDP) are the same bytes. The registry is
/// scanned in table order and the first single-byte prefix wins.
pub fn decode(blob: &[u8]) -> Result<DecodedData, Error> {
    MultiEncoded::new(blob).map(DecodedData::from)
}

fn resolve(bytes: &[u8]) -> Result<(&'static CodecEntry, &[u8]), Error> {
    for entry in registry().single_byte_entries() {
        if let Some(data) = bytes.strip_prefix(entry.varint_encoding()) {
            tracing::trace!(codec = entry.name(), len = data.len(), "decoded multicodec");
            return Ok((entry, data));
        }
    }

    let hex = hex::encode_upper(bytes);
    tracing::debug!(input = %hex, "no single-byte multicodec prefix");
    Err(Error::AmbiguousOrUnknownCodec(hex))
}

/// Multi-encoded byte slice.
///
/// Borrowed counterpart of [`DecodedData`]: the slice is checked once on
/// construction to start with a registered single-byte codec prefix.
#[repr(transparent)]
pub struct MultiEncoded([u8]);

impl MultiEncoded {
    /// Creates a new multi-encoded slice from the given `bytes`.
    #[inline(always)]
    pub fn new(bytes: &[u8]) -> Result<&Self, Error> {
        resolve(bytes)?;
        // SAFETY: `MultiEncoded` is a transparent wrapper around `[u8]`.
        Ok(unsafe { std::mem::transmute::<&[u8], &Self>(bytes) })
    }

    #[inline(always)]
    pub fn parts(&self) -> (&'static CodecEntry, &[u8]) {
        match resolve(&self.0) {
            Ok(parts) => parts,
            Err(_) => unreachable!("prefix checked in MultiEncoded::new"),
        }
    }

    #[inline(always)]
    pub fn codec(&self) -> Multicodec {
        self.parts().0.codec()
    }

    #[inline(always)]
    pub fn data(&self) -> &[u8] {
        self.parts().1
    }

    /// Returns the raw bytes, including the codec prefix.
    #[inline(always)]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl AsRef<[u8]> for MultiEncoded {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const SAMPLE_DATA_HEX: &str = "A1E9D3D8EC";

    fn sample() -> Vec<u8> {
        hex::decode(SAMPLE_DATA_HEX).unwrap()
    }

    #[test]
    fn test_encode_sha2_256() {
        let encoded = encode(Multicodec::SHA2_256, &sample());
        assert_eq!(hex::encode_upper(encoded), "12A1E9D3D8EC");
    }

    #[test]
    fn test_encode_high_byte_code() {
        let encoded = encode_raw(&[0xff], &sample());
        assert_eq!(hex::encode_upper(encoded), "FF01A1E9D3D8EC");

        let encoded = encode(Multicodec::ED25519_PUB, &sample());
        assert_eq!(hex::encode_upper(encoded), "ED01A1E9D3D8EC");
    }

    #[test]
    fn test_encode_multi_byte_code() {
        let encoded = encode(Multicodec::UDP, &sample());
        assert_eq!(hex::encode_upper(encoded), "0111A1E9D3D8EC");

        let encoded = encode(Multicodec::HOLOCHAIN_ADR_V0, &sample());
        assert_eq!(hex::encode_upper(encoded), "80017124A1E9D3D8EC");
    }

    #[test]
    fn test_encode_empty_payload() {
        assert_eq!(encode(Multicodec::IDENTITY, &[]), vec![0x00]);
        assert_eq!(encode(Multicodec::SCTP, &[]), vec![0x84, 0x01]);
    }

    #[test]
    fn test_encode_full_table() {
        let data = sample();
        for entry in registry() {
            let encoded = encode(entry.codec(), &data);
            assert_eq!(
                hex::encode_upper(&encoded),
                format!("{}{}", entry.varint_hex(), SAMPLE_DATA_HEX),
                "{}",
                entry.name()
            );
            assert_eq!(encode_raw(entry.code(), &data), encoded);
        }
    }

    #[test]
    fn test_decode_full_table_single_byte() {
        let data = sample();
        for entry in registry().single_byte_entries() {
            let decoded = decode(&encode(entry.codec(), &data)).unwrap();
            assert_eq!(decoded.codec(), entry.codec());
            assert_eq!(decoded.byte_data(), data.as_slice());
            assert_eq!(decoded.hex_data(), SAMPLE_DATA_HEX);
        }
    }

    #[test]
    fn test_decode_clash_of_codecs() {
        // UDP (0x0111) followed by data is indistinguishable from CIDV1 (0x01).
        let encoded = encode(Multicodec::UDP, &sample());
        let decoded = decode(&encoded).unwrap();
        assert_eq!(decoded.codec(), Multicodec::CIDV1);
        assert_eq!(decoded.hex_data(), "11A1E9D3D8EC");

        // P256_PUB (0x1200) reads back as SHA2_256 (0x12).
        let decoded = decode(&encode(Multicodec::P256_PUB, &sample())).unwrap();
        assert_eq!(decoded.codec(), Multicodec::SHA2_256);
        assert_eq!(decoded.hex_data(), "00A1E9D3D8EC");
    }

    #[test]
    fn test_decode_unknown() {
        let err = decode(&[0xff, 0x01, 0xa1]).unwrap_err();
        assert_eq!(err, Error::AmbiguousOrUnknownCodec("FF01A1".to_string()));
        assert_eq!(err.to_string(), "Could not decode: FF01A1");

        // 0x84 alone is a truncated SCTP prefix.
        assert!(matches!(
            decode(&[0x84]),
            Err(Error::AmbiguousOrUnknownCodec(_))
        ));
        assert!(matches!(
            decode(&[]),
            Err(Error::AmbiguousOrUnknownCodec(_))
        ));
    }

    #[test]
    fn test_decode_high_byte_single_code() {
        let decoded = decode(&hex::decode("E701A1E9D3D8EC").unwrap()).unwrap();
        assert_eq!(decoded.codec(), Multicodec::SECP256K1_PUB);
        assert_eq!(decoded.hex_data(), SAMPLE_DATA_HEX);
    }

    #[test]
    fn test_decode_empty_payload() {
        let decoded = decode(&[0x12]).unwrap();
        assert_eq!(decoded.codec(), Multicodec::SHA2_256);
        assert!(decoded.byte_data().is_empty());
        assert_eq!(decoded.hex_data(), "");
    }

    #[test]
    fn test_multi_encoded() {
        let encoded = encode(Multicodec::X25519_PUB, &sample());
        let multi = MultiEncoded::new(&encoded).unwrap();
        assert_eq!(multi.codec(), Multicodec::X25519_PUB);
        assert_eq!(multi.data(), sample().as_slice());
        assert_eq!(multi.as_bytes(), encoded.as_slice());
        assert_eq!(multi.parts().0.varint_hex(), "EC01");

        assert!(MultiEncoded::new(&[0xfe, 0x01]).is_err());
    }

    fn single_byte_codecs() -> Vec<Multicodec> {
        registry()
            .single_byte_entries()
            .map(CodecEntry::codec)
            .collect()
    }

    proptest! {
        #[test]
        fn prop_round_trip_single_byte(
            codec in proptest::sample::select(single_byte_codecs()),
            data in proptest::collection::vec(any::<u8>(), 0..64),
        ) {
            let decoded = decode(&encode(codec, &data)).unwrap();
            prop_assert_eq!(decoded.codec(), codec);
            prop_assert_eq!(decoded.byte_data(), data.as_slice());
        }

        #[test]
        fn prop_encode_prefix_preserving(
            codec in proptest::sample::select(Multicodec::ALL.to_vec()),
            data in proptest::collection::vec(any::<u8>(), 0..64),
        ) {
            let encoded = encode(codec, &data);
            let prefix = codec.varint_encoding();
            prop_assert_eq!(encoded.len(), prefix.len() + data.len());
            prop_assert_eq!(&encoded[..prefix.len()], prefix);
            prop_assert_eq!(&encoded[prefix.len()..], data.as_slice());
        }
    }
}
