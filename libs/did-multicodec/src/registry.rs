use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::{varint, Error, Multicodec};

/// Deprecated names that resolve to a registered codec.
///
/// `ipfs` shares code `0x01a5` with `p2p` upstream; only `P2P` is an entry so
/// that codes stay unique.
const ALIASES: &[(&str, Multicodec)] = &[("IPFS", Multicodec::P2P)];

lazy_static! {
    static ref REGISTRY: Registry = Registry::build();
}

/// The process-wide registry, built on first use.
pub fn registry() -> &'static Registry {
    &REGISTRY
}

/// A registered codec together with its precomputed varint prefix.
#[derive(Debug, PartialEq, Eq)]
pub struct CodecEntry {
    codec: Multicodec,
    varint: Vec<u8>,
    varint_hex: String,
}

impl CodecEntry {
    fn new(codec: Multicodec) -> Self {
        let varint = varint::encode_code(codec.code());
        let varint_hex = hex::encode_upper(&varint);
        Self {
            codec,
            varint,
            varint_hex,
        }
    }

    pub fn codec(&self) -> Multicodec {
        self.codec
    }

    pub fn name(&self) -> &'static str {
        self.codec.name()
    }

    pub fn code(&self) -> &'static [u8] {
        self.codec.code()
    }

    /// The varint encoding of [`code`](Self::code), i.e. the wire prefix.
    pub fn varint_encoding(&self) -> &[u8] {
        &self.varint
    }

    /// Upper-case hex of the wire prefix.
    pub fn varint_hex(&self) -> &str {
        &self.varint_hex
    }

    pub fn is_single_byte(&self) -> bool {
        self.code().len() == 1
    }
}

pub struct Registry {
    entries: Vec<CodecEntry>,
    by_code: HashMap<&'static [u8], Multicodec>,
    by_name: HashMap<&'static str, Multicodec>,
}

impl Registry {
    fn build() -> Self {
        let entries: Vec<CodecEntry> = Multicodec::ALL
            .iter()
            .map(|codec| CodecEntry::new(*codec))
            .collect();

        let mut by_code = HashMap::with_capacity(entries.len());
        let mut by_name = HashMap::with_capacity(entries.len() + ALIASES.len());
        for codec in Multicodec::ALL {
            let previous = by_code.insert(codec.code(), *codec);
            debug_assert!(previous.is_none(), "duplicate code for {}", codec.name());
            by_name.insert(codec.name(), *codec);
        }
        for (alias, codec) in ALIASES {
            by_name.insert(*alias, *codec);
        }

        tracing::debug!(entries = entries.len(), "multicodec registry built");

        Self {
            entries,
            by_code,
            by_name,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries, in table order.
    pub fn iter(&self) -> std::slice::Iter<'_, CodecEntry> {
        self.entries.iter()
    }

    /// Entries whose raw code is a single byte, in table order. These are the
    /// only candidates the decoder considers.
    pub fn single_byte_entries(&self) -> impl Iterator<Item = &CodecEntry> {
        self.entries.iter().filter(|entry| entry.is_single_byte())
    }

    pub fn get(&self, codec: Multicodec) -> &CodecEntry {
        // Entries are built from `Multicodec::ALL`, so the discriminant is the index.
        &self.entries[codec as usize]
    }

    /// Exact match on the raw code (not its varint encoding).
    pub fn lookup_by_code(&self, code: &[u8]) -> Result<&CodecEntry, Error> {
        match self.by_code.get(code) {
            Some(codec) => Ok(self.get(*codec)),
            None => {
                tracing::debug!(code = %hex::encode_upper(code), "unknown multicodec code");
                Err(Error::UnknownCodec(code.to_vec()))
            }
        }
    }

    /// Looks up a code written the way the table writes it, e.g. `0x01A5`.
    /// The `0x` prefix is optional and hex digits may be either case.
    pub fn lookup_by_hex_code(&self, code: &str) -> Result<&CodecEntry, Error> {
        let code = code.trim();
        let digits = code
            .strip_prefix("0x")
            .or_else(|| code.strip_prefix("0X"))
            .unwrap_or(code);
        let bytes = hex::decode(digits)?;
        self.lookup_by_code(&bytes)
    }

    /// Accepts table names (`SHA2_256`), upstream csv names (`sha2-256`) and aliases.
    pub fn lookup_by_name(&self, name: &str) -> Result<&CodecEntry, Error> {
        let normalized = name.trim().replace('-', "_").to_ascii_uppercase();
        match self.by_name.get(normalized.as_str()) {
            Some(codec) => Ok(self.get(*codec)),
            None => Err(Error::UnknownName(name.to_string())),
        }
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a CodecEntry;
    type IntoIter = std::slice::Iter<'a, CodecEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_in_table_order() {
        let registry = registry();
        assert_eq!(registry.len(), Multicodec::ALL.len());
        for (entry, codec) in registry.iter().zip(Multicodec::ALL) {
            assert_eq!(entry.codec(), *codec);
            assert_eq!(registry.get(*codec), entry);
        }
        assert_eq!(registry.iter().next().unwrap().codec(), Multicodec::IDENTITY);
        assert_eq!(registry.iter().last().unwrap().codec(), Multicodec::KUMANDRA_NS);
    }

    #[test]
    fn test_lookup_by_code_is_total() {
        let registry = registry();
        for entry in registry {
            let found = registry.lookup_by_code(entry.code()).unwrap();
            assert_eq!(found.codec(), entry.codec());
        }
    }

    #[test]
    fn test_lookup_unknown_code() {
        let registry = registry();
        assert_eq!(
            registry.lookup_by_code(&[0xfe]),
            Err(Error::UnknownCodec(vec![0xfe]))
        );
        assert!(matches!(
            registry.lookup_by_code(&[0xff]),
            Err(Error::UnknownCodec(_))
        ));
        assert!(matches!(
            registry.lookup_by_code(&[]),
            Err(Error::UnknownCodec(_))
        ));
        // A varint encoding is not a code.
        assert!(matches!(
            registry.lookup_by_code(&[0xed, 0x01]),
            Err(Error::UnknownCodec(_))
        ));
    }

    #[test]
    fn test_unknown_code_message() {
        let err = registry().lookup_by_code(&[0xfe]).unwrap_err();
        assert_eq!(err.to_string(), "Unknown multicodec code: 0xFE");
    }

    #[test]
    fn test_lookup_by_hex_code() {
        let registry = registry();
        assert_eq!(
            registry.lookup_by_hex_code("0x12").unwrap().codec(),
            Multicodec::SHA2_256
        );
        assert_eq!(
            registry.lookup_by_hex_code("0x01A5").unwrap().codec(),
            Multicodec::P2P
        );
        assert_eq!(
            registry.lookup_by_hex_code("b220").unwrap().codec(),
            Multicodec::BLAKE2B_256
        );
        assert_eq!(
            registry.lookup_by_hex_code("0xB49910").unwrap().codec(),
            Multicodec::KUMANDRA_NS
        );
        assert!(matches!(
            registry.lookup_by_hex_code("0xFE"),
            Err(Error::UnknownCodec(_))
        ));
    }

    #[test]
    fn test_lookup_by_hex_code_malformed() {
        assert!(matches!(
            registry().lookup_by_hex_code("OxFF"),
            Err(Error::InvalidHexCode(_))
        ));
        assert!(matches!(
            registry().lookup_by_hex_code("0x1"),
            Err(Error::InvalidHexCode(_))
        ));
    }

    #[test]
    fn test_lookup_by_name() {
        let registry = registry();
        assert_eq!(
            registry.lookup_by_name("SHA2_256").unwrap().codec(),
            Multicodec::SHA2_256
        );
        assert_eq!(
            registry.lookup_by_name("ed25519-pub").unwrap().codec(),
            Multicodec::ED25519_PUB
        );
        assert_eq!(
            registry.lookup_by_name("ipfs").unwrap().codec(),
            Multicodec::P2P
        );
        assert_eq!(
            registry.lookup_by_name("nope"),
            Err(Error::UnknownName("nope".to_string()))
        );
    }

    #[test]
    fn test_varint_cached_per_entry() {
        let registry = registry();
        let sha = registry.get(Multicodec::SHA2_256);
        assert_eq!(sha.varint_encoding(), &[0x12]);
        assert_eq!(sha.varint_hex(), "12");

        let ed = registry.get(Multicodec::ED25519_PUB);
        assert_eq!(ed.varint_encoding(), &[0xed, 0x01]);
        assert_eq!(ed.varint_hex(), "ED01");

        let p256 = registry.get(Multicodec::P256_PUB);
        assert_eq!(p256.code(), &[0x12, 0x00]);
        assert_eq!(p256.varint_hex(), "1200");

        for entry in registry {
            assert_eq!(entry.varint_encoding(), varint::encode_code(entry.code()));
            assert_eq!(entry.varint_hex(), hex::encode_upper(entry.varint_encoding()));
        }
    }

    #[test]
    fn test_single_byte_entries() {
        let registry = registry();
        let singles: Vec<_> = registry.single_byte_entries().collect();
        assert!(singles.iter().all(|e| e.code().len() == 1));
        assert_eq!(singles.first().unwrap().codec(), Multicodec::IDENTITY);
        assert_eq!(singles.last().unwrap().codec(), Multicodec::SWARM_FEED);
        assert!(!singles.iter().any(|e| e.codec() == Multicodec::UDP));
    }

    #[test]
    fn test_names_and_codes_unique() {
        let mut codes = std::collections::HashSet::new();
        let mut names = std::collections::HashSet::new();
        for entry in registry() {
            assert!(codes.insert(entry.code()), "duplicate code {}", entry.name());
            assert!(names.insert(entry.name()), "duplicate name {}", entry.name());
        }
    }
}
