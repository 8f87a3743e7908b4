//! The registered multicodec table.
//!
//! Names and codes follow <https://github.com/multiformats/multicodec/blob/master/table.csv>.
//! Table order is observable: the decoder resolves prefixes by scanning it top to bottom.

macro_rules! multicodec_table {
    ($($name:ident => [$($byte:literal),+],)+) => {
        /// A codec registered in the multicodec table.
        ///
        /// Variants carry the upstream names verbatim (`SHA2_256`, `CIDV1`, ...).
        #[allow(non_camel_case_types)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Multicodec {
            $($name,)+
        }

        impl Multicodec {
            /// Every registered codec, in table order.
            pub const ALL: &'static [Multicodec] = &[$(Multicodec::$name,)+];

            /// The symbolic name, as written in the table.
            pub const fn name(&self) -> &'static str {
                match self {
                    $(Multicodec::$name => stringify!($name),)+
                }
            }

            /// The raw code bytes, before varint encoding.
            pub const fn code(&self) -> &'static [u8] {
                match self {
                    $(Multicodec::$name => &[$($byte),+],)+
                }
            }
        }
    };
}

multicodec_table! {
    IDENTITY => [0x00],
    CIDV1 => [0x01],
    CIDV2 => [0x02],
    CIDV3 => [0x03],
    IP4 => [0x04],
    TCP => [0x06],
    SHA1 => [0x11],
    SHA2_256 => [0x12],
    SHA2_512 => [0x13],
    SHA3_512 => [0x14],
    SHA3_384 => [0x15],
    SHA3_256 => [0x16],
    SHA3_224 => [0x17],
    SHAKE_128 => [0x18],
    SHAKE_256 => [0x19],
    KECCAK_224 => [0x1A],
    KECCAK_256 => [0x1B],
    KECCAK_384 => [0x1C],
    KECCAK_512 => [0x1D],
    BLAKE3 => [0x1E],
    SHA2_384 => [0x20],
    DCCP => [0x21],
    MURMUR3_X64_64 => [0x22],
    MURMUR3_32 => [0x23],
    IP6 => [0x29],
    IP6ZONE => [0x2A],
    PATH => [0x2F],
    MULTICODEC => [0x30],
    MULTIHASH => [0x31],
    MULTIADDR => [0x32],
    MULTIBASE => [0x33],
    DNS => [0x35],
    DNS4 => [0x36],
    DNS6 => [0x37],
    DNSADDR => [0x38],
    PROTOBUF => [0x50],
    CBOR => [0x51],
    RAW => [0x55],
    DBL_SHA2_256 => [0x56],
    RLP => [0x60],
    BENCODE => [0x63],
    DAG_PB => [0x70],
    DAG_CBOR => [0x71],
    LIBP2P_KEY => [0x72],
    GIT_RAW => [0x78],
    TORRENT_INFO => [0x7B],
    TORRENT_FILE => [0x7C],
    LEOFCOIN_BLOCK => [0x81],
    LEOFCOIN_TX => [0x82],
    LEOFCOIN_PR => [0x83],
    SCTP => [0x84],
    DAG_JOSE => [0x85],
    DAG_COSE => [0x86],
    ETH_BLOCK => [0x90],
    ETH_BLOCK_LIST => [0x91],
    ETH_TX_TRIE => [0x92],
    ETH_TX => [0x93],
    ETH_TX_RECEIPT_TRIE => [0x94],
    ETH_TX_RECEIPT => [0x95],
    ETH_STATE_TRIE => [0x96],
    ETH_ACCOUNT_SNAPSHOT => [0x97],
    ETH_STORAGE_TRIE => [0x98],
    ETH_RECEIPT_LOG_TRIE => [0x99],
    ETH_RECIEPT_LOG => [0x9A],
    AES_128 => [0xA0],
    AES_192 => [0xA1],
    AES_256 => [0xA2],
    CHACHA_128 => [0xA3],
    CHACHA_256 => [0xA4],
    BITCOIN_BLOCK => [0xB0],
    BITCOIN_TX => [0xB1],
    BITCOIN_WITNESS_COMMITMENT => [0xB2],
    ZCASH_BLOCK => [0xC0],
    ZCASH_TX => [0xC1],
    CAIP_50 => [0xCA],
    STREAMID => [0xCE],
    STELLAR_BLOCK => [0xD0],
    STELLAR_TX => [0xD1],
    MD4 => [0xD4],
    MD5 => [0xD5],
    DECRED_BLOCK => [0xE0],
    DECRED_TX => [0xE1],
    IPLD_NS => [0xE2],
    IPFS_NS => [0xE3],
    SWARM_NS => [0xE4],
    IPNS_NS => [0xE5],
    ZERONET => [0xE6],
    SECP256K1_PUB => [0xE7],
    DNSLINK => [0xE8],
    BLS12_381_G1_PUB => [0xEA],
    BLS12_381_G2_PUB => [0xEB],
    X25519_PUB => [0xEC],
    ED25519_PUB => [0xED],
    BLS12_381_G1G2_PUB => [0xEE],
    DASH_BLOCK => [0xF0],
    DASH_TX => [0xF1],
    SWARM_MANIFEST => [0xFA],
    SWARM_FEED => [0xFB],
    UDP => [0x01, 0x11],
    P2P_WEBRTC_STAR => [0x01, 0x13],
    P2P_WEBRTC_DIRECT => [0x01, 0x14],
    P2P_STARDUST => [0x01, 0x15],
    WEBRTC => [0x01, 0x18],
    P2P_CIRCUIT => [0x01, 0x22],
    DAG_JSON => [0x01, 0x29],
    UDT => [0x01, 0x2D],
    UTP => [0x01, 0x2E],
    UNIX => [0x01, 0x90],
    THREAD => [0x01, 0x96],
    P2P => [0x01, 0xA5],
    HTTPS => [0x01, 0xBB],
    ONION => [0x01, 0xBC],
    ONION3 => [0x01, 0xBD],
    GARLIC64 => [0x01, 0xBE],
    GARLIC32 => [0x01, 0xBF],
    TLS => [0x01, 0xC0],
    NOISE => [0x01, 0xC6],
    QUIC => [0x01, 0xCC],
    WEBTRANSPORT => [0x01, 0xD1],
    CERTHASH => [0x01, 0xD2],
    WS => [0x01, 0xDD],
    WSS => [0x01, 0xDE],
    P2P_WEBSOCKET_STAR => [0x01, 0xDF],
    HTTP => [0x01, 0xE0],
    SWHID_1_SNP => [0x01, 0xF0],
    JSON => [0x02, 0x00],
    MESSAGEPACK => [0x02, 0x01],
    CAR => [0x02, 0x02],
    LIBP2P_PEER_RECORD => [0x03, 0x01],
    LIBP2P_RELAY_RSVP => [0x03, 0x02],
    CAR_INDEX_SORTED => [0x04, 0x00],
    CAR_MULTIHASH_INDEX_SORTED => [0x04, 0x01],
    TRANSPORT_BITSWAP => [0x09, 0x00],
    TRANSPORT_GRAPHSYNC_FILECOINV1 => [0x09, 0x10],
    SHA2_256_TRUNC254_PADDED => [0x10, 0x12],
    SHA2_224 => [0x10, 0x13],
    SHA2_512_224 => [0x10, 0x14],
    SHA2_512_256 => [0x10, 0x15],
    MURMUR3_X64_128 => [0x10, 0x22],
    RIPEMD_128 => [0x10, 0x52],
    RIPEMD_160 => [0x10, 0x53],
    RIPEMD_256 => [0x10, 0x54],
    RIPEMD_320 => [0x10, 0x55],
    X11 => [0x11, 0x00],
    P256_PUB => [0x12, 0x00],
    P384_PUB => [0x12, 0x01],
    P521_PUB => [0x12, 0x02],
    ED448_PUB => [0x12, 0x03],
    X448_PUB => [0x12, 0x04],
    RSA_PUB => [0x12, 0x05],
    SM2_PUB => [0x12, 0x06],
    ED25519_PRIV => [0x13, 0x00],
    SECP256K1_PRIV => [0x13, 0x01],
    X25519_PRIV => [0x13, 0x02],
    KANGAROOTWELVE => [0x1D, 0x01],
    SM3_256 => [0x53, 0x4D],
    BLAKE2B_8 => [0xB2, 0x01],
    BLAKE2B_16 => [0xB2, 0x02],
    BLAKE2B_24 => [0xB2, 0x03],
    BLAKE2B_32 => [0xB2, 0x04],
    BLAKE2B_40 => [0xB2, 0x05],
    BLAKE2B_48 => [0xB2, 0x06],
    BLAKE2B_56 => [0xB2, 0x07],
    BLAKE2B_64 => [0xB2, 0x08],
    BLAKE2B_72 => [0xB2, 0x09],
    BLAKE2B_80 => [0xB2, 0x0A],
    BLAKE2B_88 => [0xB2, 0x0B],
    BLAKE2B_96 => [0xB2, 0x0C],
    BLAKE2B_104 => [0xB2, 0x0D],
    BLAKE2B_112 => [0xB2, 0x0E],
    BLAKE2B_120 => [0xB2, 0x0F],
    BLAKE2B_128 => [0xB2, 0x10],
    BLAKE2B_136 => [0xB2, 0x11],
    BLAKE2B_144 => [0xB2, 0x12],
    BLAKE2B_152 => [0xB2, 0x13],
    BLAKE2B_160 => [0xB2, 0x14],
    BLAKE2B_168 => [0xB2, 0x15],
    BLAKE2B_176 => [0xB2, 0x16],
    BLAKE2B_184 => [0xB2, 0x17],
    BLAKE2B_192 => [0xB2, 0x18],
    BLAKE2B_200 => [0xB2, 0x19],
    BLAKE2B_208 => [0xB2, 0x1A],
    BLAKE2B_216 => [0xB2, 0x1B],
    BLAKE2B_224 => [0xB2, 0x1C],
    BLAKE2B_232 => [0xB2, 0x1D],
    BLAKE2B_240 => [0xB2, 0x1E],
    BLAKE2B_248 => [0xB2, 0x1F],
    BLAKE2B_256 => [0xB2, 0x20],
    BLAKE2B_264 => [0xB2, 0x21],
    BLAKE2B_272 => [0xB2, 0x22],
    BLAKE2B_280 => [0xB2, 0x23],
    BLAKE2B_288 => [0xB2, 0x24],
    BLAKE2B_296 => [0xB2, 0x25],
    BLAKE2B_304 => [0xB2, 0x26],
    BLAKE2B_312 => [0xB2, 0x27],
    BLAKE2B_320 => [0xB2, 0x28],
    BLAKE2B_328 => [0xB2, 0x29],
    BLAKE2B_336 => [0xB2, 0x2A],
    BLAKE2B_344 => [0xB2, 0x2B],
    BLAKE2B_352 => [0xB2, 0x2C],
    BLAKE2B_360 => [0xB2, 0x2D],
    BLAKE2B_368 => [0xB2, 0x2E],
    BLAKE2B_376 => [0xB2, 0x2F],
    BLAKE2B_384 => [0xB2, 0x30],
    BLAKE2B_392 => [0xB2, 0x31],
    BLAKE2B_400 => [0xB2, 0x32],
    BLAKE2B_408 => [0xB2, 0x33],
    BLAKE2B_416 => [0xB2, 0x34],
    BLAKE2B_424 => [0xB2, 0x35],
    BLAKE2B_432 => [0xB2, 0x36],
    BLAKE2B_440 => [0xB2, 0x37],
    BLAKE2B_448 => [0xB2, 0x38],
    BLAKE2B_456 => [0xB2, 0x39],
    BLAKE2B_464 => [0xB2, 0x3A],
    BLAKE2B_472 => [0xB2, 0x3B],
    BLAKE2B_480 => [0xB2, 0x3C],
    BLAKE2B_488 => [0xB2, 0x3D],
    BLAKE2B_496 => [0xB2, 0x3E],
    BLAKE2B_504 => [0xB2, 0x3F],
    BLAKE2B_512 => [0xB2, 0x40],
    BLAKE2S_8 => [0xB2, 0x41],
    BLAKE2S_16 => [0xB2, 0x42],
    BLAKE2S_24 => [0xB2, 0x43],
    BLAKE2S_32 => [0xB2, 0x44],
    BLAKE2S_40 => [0xB2, 0x45],
    BLAKE2S_48 => [0xB2, 0x46],
    BLAKE2S_56 => [0xB2, 0x47],
    BLAKE2S_64 => [0xB2, 0x48],
    BLAKE2S_72 => [0xB2, 0x49],
    BLAKE2S_80 => [0xB2, 0x4A],
    BLAKE2S_88 => [0xB2, 0x4B],
    BLAKE2S_96 => [0xB2, 0x4C],
    BLAKE2S_104 => [0xB2, 0x4D],
    BLAKE2S_112 => [0xB2, 0x4E],
    BLAKE2S_120 => [0xB2, 0x4F],
    BLAKE2S_128 => [0xB2, 0x50],
    BLAKE2S_136 => [0xB2, 0x51],
    BLAKE2S_144 => [0xB2, 0x52],
    BLAKE2S_152 => [0xB2, 0x53],
    BLAKE2S_160 => [0xB2, 0x54],
    BLAKE2S_168 => [0xB2, 0x55],
    BLAKE2S_176 => [0xB2, 0x56],
    BLAKE2S_184 => [0xB2, 0x57],
    BLAKE2S_192 => [0xB2, 0x58],
    BLAKE2S_200 => [0xB2, 0x59],
    BLAKE2S_208 => [0xB2, 0x5A],
    BLAKE2S_216 => [0xB2, 0x5B],
    BLAKE2S_224 => [0xB2, 0x5C],
    BLAKE2S_232 => [0xB2, 0x5D],
    BLAKE2S_240 => [0xB2, 0x5E],
    BLAKE2S_248 => [0xB2, 0x5F],
    BLAKE2S_256 => [0xB2, 0x60],
    SKEIN256_8 => [0xB3, 0x01],
    SKEIN256_16 => [0xB3, 0x02],
    SKEIN256_24 => [0xB3, 0x03],
    SKEIN256_32 => [0xB3, 0x04],
    SKEIN256_40 => [0xB3, 0x05],
    SKEIN256_48 => [0xB3, 0x06],
    SKEIN256_56 => [0xB3, 0x07],
    SKEIN256_64 => [0xB3, 0x08],
    SKEIN256_72 => [0xB3, 0x09],
    SKEIN256_80 => [0xB3, 0x0A],
    SKEIN256_88 => [0xB3, 0x0B],
    SKEIN256_96 => [0xB3, 0x0C],
    SKEIN256_104 => [0xB3, 0x0D],
    SKEIN256_112 => [0xB3, 0x0E],
    SKEIN256_120 => [0xB3, 0x0F],
    SKEIN256_128 => [0xB3, 0x10],
    SKEIN256_136 => [0xB3, 0x11],
    SKEIN256_144 => [0xB3, 0x12],
    SKEIN256_152 => [0xB3, 0x13],
    SKEIN256_160 => [0xB3, 0x14],
    SKEIN256_168 => [0xB3, 0x15],
    SKEIN256_176 => [0xB3, 0x16],
    SKEIN256_184 => [0xB3, 0x17],
    SKEIN256_192 => [0xB3, 0x18],
    SKEIN256_200 => [0xB3, 0x19],
    SKEIN256_208 => [0xB3, 0x1A],
    SKEIN256_216 => [0xB3, 0x1B],
    SKEIN256_224 => [0xB3, 0x1C],
    SKEIN256_232 => [0xB3, 0x1D],
    SKEIN256_240 => [0xB3, 0x1E],
    SKEIN256_248 => [0xB3, 0x1F],
    SKEIN256_256 => [0xB3, 0x20],
    SKEIN512_8 => [0xB3, 0x21],
    SKEIN512_16 => [0xB3, 0x22],
    SKEIN512_24 => [0xB3, 0x23],
    SKEIN512_32 => [0xB3, 0x24],
    SKEIN512_40 => [0xB3, 0x25],
    SKEIN512_48 => [0xB3, 0x26],
    SKEIN512_56 => [0xB3, 0x27],
    SKEIN512_64 => [0xB3, 0x28],
    SKEIN512_72 => [0xB3, 0x29],
    SKEIN512_80 => [0xB3, 0x2A],
    SKEIN512_88 => [0xB3, 0x2B],
    SKEIN512_96 => [0xB3, 0x2C],
    SKEIN512_104 => [0xB3, 0x2D],
    SKEIN512_112 => [0xB3, 0x2E],
    SKEIN512_120 => [0xB3, 0x2F],
    SKEIN512_128 => [0xB3, 0x30],
    SKEIN512_136 => [0xB3, 0x31],
    SKEIN512_144 => [0xB3, 0x32],
    SKEIN512_152 => [0xB3, 0x33],
    SKEIN512_160 => [0xB3, 0x34],
    SKEIN512_168 => [0xB3, 0x35],
    SKEIN512_176 => [0xB3, 0x36],
    SKEIN512_184 => [0xB3, 0x37],
    SKEIN512_192 => [0xB3, 0x38],
    SKEIN512_200 => [0xB3, 0x39],
    SKEIN512_208 => [0xB3, 0x3A],
    SKEIN512_216 => [0xB3, 0x3B],
    SKEIN512_224 => [0xB3, 0x3C],
    SKEIN512_232 => [0xB3, 0x3D],
    SKEIN512_240 => [0xB3, 0x3E],
    SKEIN512_248 => [0xB3, 0x3F],
    SKEIN512_256 => [0xB3, 0x40],
    SKEIN512_264 => [0xB3, 0x41],
    SKEIN512_272 => [0xB3, 0x42],
    SKEIN512_280 => [0xB3, 0x43],
    SKEIN512_288 => [0xB3, 0x44],
    SKEIN512_296 => [0xB3, 0x45],
    SKEIN512_304 => [0xB3, 0x46],
    SKEIN512_312 => [0xB3, 0x47],
    SKEIN512_320 => [0xB3, 0x48],
    SKEIN512_328 => [0xB3, 0x49],
    SKEIN512_336 => [0xB3, 0x4A],
    SKEIN512_344 => [0xB3, 0x4B],
    SKEIN512_352 => [0xB3, 0x4C],
    SKEIN512_360 => [0xB3, 0x4D],
    SKEIN512_368 => [0xB3, 0x4E],
    SKEIN512_376 => [0xB3, 0x4F],
    SKEIN512_384 => [0xB3, 0x50],
    SKEIN512_392 => [0xB3, 0x51],
    SKEIN512_400 => [0xB3, 0x52],
    SKEIN512_408 => [0xB3, 0x53],
    SKEIN512_416 => [0xB3, 0x54],
    SKEIN512_424 => [0xB3, 0x55],
    SKEIN512_432 => [0xB3, 0x56],
    SKEIN512_440 => [0xB3, 0x57],
    SKEIN512_448 => [0xB3, 0x58],
    SKEIN512_456 => [0xB3, 0x59],
    SKEIN512_464 => [0xB3, 0x5A],
    SKEIN512_472 => [0xB3, 0x5B],
    SKEIN512_480 => [0xB3, 0x5C],
    SKEIN512_488 => [0xB3, 0x5D],
    SKEIN512_496 => [0xB3, 0x5E],
    SKEIN512_504 => [0xB3, 0x5F],
    SKEIN512_512 => [0xB3, 0x60],
    SKEIN1024_8 => [0xB3, 0x61],
    SKEIN1024_16 => [0xB3, 0x62],
    SKEIN1024_24 => [0xB3, 0x63],
    SKEIN1024_32 => [0xB3, 0x64],
    SKEIN1024_40 => [0xB3, 0x65],
    SKEIN1024_48 => [0xB3, 0x66],
    SKEIN1024_56 => [0xB3, 0x67],
    SKEIN1024_64 => [0xB3, 0x68],
    SKEIN1024_72 => [0xB3, 0x69],
    SKEIN1024_80 => [0xB3, 0x6A],
    SKEIN1024_88 => [0xB3, 0x6B],
    SKEIN1024_96 => [0xB3, 0x6C],
    SKEIN1024_104 => [0xB3, 0x6D],
    SKEIN1024_112 => [0xB3, 0x6E],
    SKEIN1024_120 => [0xB3, 0x6F],
    SKEIN1024_128 => [0xB3, 0x70],
    SKEIN1024_136 => [0xB3, 0x71],
    SKEIN1024_144 => [0xB3, 0x72],
    SKEIN1024_152 => [0xB3, 0x73],
    SKEIN1024_160 => [0xB3, 0x74],
    SKEIN1024_168 => [0xB3, 0x75],
    SKEIN1024_176 => [0xB3, 0x76],
    SKEIN1024_184 => [0xB3, 0x77],
    SKEIN1024_192 => [0xB3, 0x78],
    SKEIN1024_200 => [0xB3, 0x79],
    SKEIN1024_208 => [0xB3, 0x7A],
    SKEIN1024_216 => [0xB3, 0x7B],
    SKEIN1024_224 => [0xB3, 0x7C],
    SKEIN1024_232 => [0xB3, 0x7D],
    SKEIN1024_240 => [0xB3, 0x7E],
    SKEIN1024_248 => [0xB3, 0x7F],
    SKEIN1024_256 => [0xB3, 0x80],
    SKEIN1024_264 => [0xB3, 0x81],
    SKEIN1024_272 => [0xB3, 0x82],
    SKEIN1024_280 => [0xB3, 0x83],
    SKEIN1024_288 => [0xB3, 0x84],
    SKEIN1024_296 => [0xB3, 0x85],
    SKEIN1024_304 => [0xB3, 0x86],
    SKEIN1024_312 => [0xB3, 0x87],
    SKEIN1024_320 => [0xB3, 0x88],
    SKEIN1024_328 => [0xB3, 0x89],
    SKEIN1024_336 => [0xB3, 0x8A],
    SKEIN1024_344 => [0xB3, 0x8B],
    SKEIN1024_352 => [0xB3, 0x8C],
    SKEIN1024_360 => [0xB3, 0x8D],
    SKEIN1024_368 => [0xB3, 0x8E],
    SKEIN1024_376 => [0xB3, 0x8F],
    SKEIN1024_384 => [0xB3, 0x90],
    SKEIN1024_392 => [0xB3, 0x91],
    SKEIN1024_400 => [0xB3, 0x92],
    SKEIN1024_408 => [0xB3, 0x93],
    SKEIN1024_416 => [0xB3, 0x94],
    SKEIN1024_424 => [0xB3, 0x95],
    SKEIN1024_432 => [0xB3, 0x96],
    SKEIN1024_440 => [0xB3, 0x97],
    SKEIN1024_448 => [0xB3, 0x98],
    SKEIN1024_456 => [0xB3, 0x99],
    SKEIN1024_464 => [0xB3, 0x9A],
    SKEIN1024_472 => [0xB3, 0x9B],
    SKEIN1024_480 => [0xB3, 0x9C],
    SKEIN1024_488 => [0xB3, 0x9D],
    SKEIN1024_496 => [0xB3, 0x9E],
    SKEIN1024_504 => [0xB3, 0x9F],
    SKEIN1024_512 => [0xB3, 0xA0],
    SKEIN1024_520 => [0xB3, 0xA1],
    SKEIN1024_528 => [0xB3, 0xA2],
    SKEIN1024_536 => [0xB3, 0xA3],
    SKEIN1024_544 => [0xB3, 0xA4],
    SKEIN1024_552 => [0xB3, 0xA5],
    SKEIN1024_560 => [0xB3, 0xA6],
    SKEIN1024_568 => [0xB3, 0xA7],
    SKEIN1024_576 => [0xB3, 0xA8],
    SKEIN1024_584 => [0xB3, 0xA9],
    SKEIN1024_592 => [0xB3, 0xAA],
    SKEIN1024_600 => [0xB3, 0xAB],
    SKEIN1024_608 => [0xB3, 0xAC],
    SKEIN1024_616 => [0xB3, 0xAD],
    SKEIN1024_624 => [0xB3, 0xAE],
    SKEIN1024_632 => [0xB3, 0xAF],
    SKEIN1024_640 => [0xB3, 0xB0],
    SKEIN1024_648 => [0xB3, 0xB1],
    SKEIN1024_656 => [0xB3, 0xB2],
    SKEIN1024_664 => [0xB3, 0xB3],
    SKEIN1024_672 => [0xB3, 0xB4],
    SKEIN1024_680 => [0xB3, 0xB5],
    SKEIN1024_688 => [0xB3, 0xB6],
    SKEIN1024_696 => [0xB3, 0xB7],
    SKEIN1024_704 => [0xB3, 0xB8],
    SKEIN1024_712 => [0xB3, 0xB9],
    SKEIN1024_720 => [0xB3, 0xBA],
    SKEIN1024_728 => [0xB3, 0xBB],
    SKEIN1024_736 => [0xB3, 0xBC],
    SKEIN1024_744 => [0xB3, 0xBD],
    SKEIN1024_752 => [0xB3, 0xBE],
    SKEIN1024_760 => [0xB3, 0xBF],
    SKEIN1024_768 => [0xB3, 0xC0],
    SKEIN1024_776 => [0xB3, 0xC1],
    SKEIN1024_784 => [0xB3, 0xC2],
    SKEIN1024_792 => [0xB3, 0xC3],
    SKEIN1024_800 => [0xB3, 0xC4],
    SKEIN1024_808 => [0xB3, 0xC5],
    SKEIN1024_816 => [0xB3, 0xC6],
    SKEIN1024_824 => [0xB3, 0xC7],
    SKEIN1024_832 => [0xB3, 0xC8],
    SKEIN1024_840 => [0xB3, 0xC9],
    SKEIN1024_848 => [0xB3, 0xCA],
    SKEIN1024_856 => [0xB3, 0xCB],
    SKEIN1024_864 => [0xB3, 0xCC],
    SKEIN1024_872 => [0xB3, 0xCD],
    SKEIN1024_880 => [0xB3, 0xCE],
    SKEIN1024_888 => [0xB3, 0xCF],
    SKEIN1024_896 => [0xB3, 0xD0],
    SKEIN1024_904 => [0xB3, 0xD1],
    SKEIN1024_912 => [0xB3, 0xD2],
    SKEIN1024_920 => [0xB3, 0xD3],
    SKEIN1024_928 => [0xB3, 0xD4],
    SKEIN1024_936 => [0xB3, 0xD5],
    SKEIN1024_944 => [0xB3, 0xD6],
    SKEIN1024_952 => [0xB3, 0xD7],
    SKEIN1024_960 => [0xB3, 0xD8],
    SKEIN1024_968 => [0xB3, 0xD9],
    SKEIN1024_976 => [0xB3, 0xDA],
    SKEIN1024_984 => [0xB3, 0xDB],
    SKEIN1024_992 => [0xB3, 0xDC],
    SKEIN1024_1000 => [0xB3, 0xDD],
    SKEIN1024_1008 => [0xB3, 0xDE],
    SKEIN1024_1016 => [0xB3, 0xDF],
    SKEIN1024_1024 => [0xB3, 0xE0],
    POSEIDON_BLS12_381_A2_FC1 => [0xB4, 0x01],
    POSEIDON_BLS12_381_A2_FC1_SC => [0xB4, 0x02],
    SSZ => [0xB5, 0x01],
    SSZ_SHA2_256_BMT => [0xB5, 0x02],
    ISCC => [0xCC, 0x01],
    ZEROXCERT_IMPRINT_256 => [0xCE, 0x11],
    FIL_COMMITMENT_UNSEALED => [0xF1, 0x01],
    FIL_COMMITMENT_SEALED => [0xF1, 0x02],
    PLAINTEXTV2 => [0x70, 0x6C, 0x61],
    HOLOCHAIN_ADR_V0 => [0x80, 0x71, 0x24],
    HOLOCHAIN_ADR_V1 => [0x81, 0x71, 0x24],
    HOLOCHAIN_KEY_V0 => [0x94, 0x71, 0x24],
    HOLOCHAIN_KEY_V1 => [0x95, 0x71, 0x24],
    HOLOCHAIN_SIG_V0 => [0xA2, 0x71, 0x24],
    HOLOCHAIN_SIG_V1 => [0xA3, 0x71, 0x24],
    SKYNET_NS => [0xB1, 0x99, 0x10],
    ARWEAVE_NS => [0xB2, 0x99, 0x10],
    SUBSPACE_NS => [0xB3, 0x99, 0x10],
    KUMANDRA_NS => [0xB4, 0x99, 0x10],
}
