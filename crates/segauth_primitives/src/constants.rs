#![forbid(unsafe_code)]

/// Digest output width shared by every supported algorithm.
pub const HASH_LEN: usize = 32;

// DER content octets (without tag/length) of the algorithm identifiers.

/// 2.16.840.1.101.3.4.2.1 (id-sha256)
pub const OID_SHA256: &[u8] = &[0x60, 0x86, 0x48, 0x01, 0x65, 0x03, 0x04, 0x02, 0x01];
/// 2.16.840.1.101.3.4.2.8 (id-sha3-256)
pub const OID_SHA3_256: &[u8] = &[0x60, 0x86, 0x48, 0x01, 0x65, 0x03, 0x04, 0x02, 0x08];

/// Private arc 2.25.147690568631694823849717912646995913154 (UUID-derived).
const ARC: [u8; 20] = [
    0x69, 0x81, 0xde, 0x9c, 0x95, 0xce, 0xd3, 0xd4, 0xf2, 0xb1, 0xf7, 0x8a, 0x90, 0xd4, 0xfc,
    0x8d, 0xa7, 0xde, 0xd3, 0x42,
];

const fn arc_oid(a: u8, b: u8) -> [u8; 22] {
    let mut out = [0u8; 22];
    let mut i = 0;
    while i < ARC.len() {
        out[i] = ARC[i];
        i += 1;
    }
    out[20] = a;
    out[21] = b;
    out
}

/// ARC.1.3: flat BLAKE3 digest.
pub const OID_BLAKE3: &[u8] = &arc_oid(1, 3);

/// ARC.2.x: Merkle path whose node digests use the inner algorithm x.
/// Verifiers branch on these before choosing flat compare or path reconstruction.
pub const OID_MERKLE_SHA256: &[u8] = &arc_oid(2, 1);
pub const OID_MERKLE_SHA3_256: &[u8] = &arc_oid(2, 8);
pub const OID_MERKLE_BLAKE3: &[u8] = &arc_oid(2, 3);
