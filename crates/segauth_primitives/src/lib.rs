#![forbid(unsafe_code)]
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::multiple_crate_versions
)]

//! Segment authentication primitives: explicit digest algorithms and their
//! identifiers, minimal big-endian integers, constant-time digest equality.
//
// Shared by the tree builder, the path verifier and the record encoders:
//
// - Digest algorithms are always passed explicitly; there is no registry
// - All supported algorithms produce 32-byte digests
// - Flat-digest and Merkle-path OIDs are distinct per inner algorithm

use core::fmt;
use core::str::FromStr;

use sha2::Sha256;
use sha3::{Digest, Sha3_256};
use subtle::ConstantTimeEq;
use thiserror::Error;

pub mod constants;

pub use constants::HASH_LEN;

/// 32-byte digest.
pub type Hash256 = [u8; HASH_LEN];

/// 32-byte public key (Ed25519).
pub type Pk32 = [u8; 32];

/// 64-byte signature (Ed25519 canonical encoding).
pub type Sig64 = [u8; 64];

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PrimitiveError {
    #[error("unknown digest algorithm: {0}")]
    UnknownAlgorithm(String),

    #[error("unknown algorithm identifier")]
    UnknownOid,
}

/// Digest algorithm, threaded explicitly through every tree and record operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub enum DigestAlgorithm {
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "sha256"))]
    Sha256,
    #[cfg_attr(feature = "serde", serde(rename = "sha3-256"))]
    Sha3_256,
    #[cfg_attr(feature = "serde", serde(rename = "blake3"))]
    Blake3,
}

/// How an algorithm identifier was tagged on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OidKind {
    /// Plain digest of the covered bytes.
    Flat(DigestAlgorithm),
    /// Merkle path that must be reconstructed with the inner algorithm.
    MerklePath(DigestAlgorithm),
}

impl DigestAlgorithm {
    pub const ALL: [Self; 3] = [Self::Sha256, Self::Sha3_256, Self::Blake3];

    /// Digest of a single byte string.
    #[must_use]
    pub fn digest(self, input: &[u8]) -> Hash256 {
        self.digest_parts(&[input])
    }

    /// Digest of the concatenation of `parts`, without materializing it.
    #[must_use]
    pub fn digest_parts(self, parts: &[&[u8]]) -> Hash256 {
        match self {
            Self::Sha256 => {
                let mut h = Sha256::new();
                for p in parts {
                    h.update(p);
                }
                h.finalize().into()
            }
            Self::Sha3_256 => {
                let mut h = Sha3_256::new();
                for p in parts {
                    h.update(p);
                }
                h.finalize().into()
            }
            Self::Blake3 => {
                let mut h = blake3::Hasher::new();
                for p in parts {
                    h.update(p);
                }
                *h.finalize().as_bytes()
            }
        }
    }

    #[must_use]
    pub const fn output_len(self) -> usize {
        HASH_LEN
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sha256 => "sha256",
            Self::Sha3_256 => "sha3-256",
            Self::Blake3 => "blake3",
        }
    }

    /// DER content octets of the flat-digest identifier.
    #[must_use]
    pub const fn oid(self) -> &'static [u8] {
        match self {
            Self::Sha256 => constants::OID_SHA256,
            Self::Sha3_256 => constants::OID_SHA3_256,
            Self::Blake3 => constants::OID_BLAKE3,
        }
    }

    /// DER content octets of the reserved Merkle-path identifier.
    #[must_use]
    pub const fn merkle_oid(self) -> &'static [u8] {
        match self {
            Self::Sha256 => constants::OID_MERKLE_SHA256,
            Self::Sha3_256 => constants::OID_MERKLE_SHA3_256,
            Self::Blake3 => constants::OID_MERKLE_BLAKE3,
        }
    }
}

impl fmt::Display for DigestAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DigestAlgorithm {
    type Err = PrimitiveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sha256" | "sha-256" => Ok(Self::Sha256),
            "sha3-256" | "sha3_256" => Ok(Self::Sha3_256),
            "blake3" => Ok(Self::Blake3),
            _ => Err(PrimitiveError::UnknownAlgorithm(s.to_owned())),
        }
    }
}

/// Classify DER content octets of an algorithm identifier.
pub fn classify_oid(oid: &[u8]) -> Result<OidKind, PrimitiveError> {
    for alg in DigestAlgorithm::ALL {
        if oid == alg.oid() {
            return Ok(OidKind::Flat(alg));
        }
        if oid == alg.merkle_oid() {
            return Ok(OidKind::MerklePath(alg));
        }
    }
    Err(PrimitiveError::UnknownOid)
}

/// Minimal big-endian encoding of `x` (zero encodes as no bytes).
#[must_use]
pub fn be_minimal(x: u64) -> Vec<u8> {
    let bytes = x.to_be_bytes();
    let skip = bytes.iter().take_while(|b| **b == 0).count();
    bytes[skip..].to_vec()
}

/// Inverse of [`be_minimal`]; `None` if more than 8 bytes are given.
#[must_use]
pub fn u64_from_be(b: &[u8]) -> Option<u64> {
    if b.len() > 8 {
        return None;
    }
    Some(b.iter().fold(0u64, |acc, x| (acc << 8) | u64::from(*x)))
}

/// Constant-time equality for two 32-byte hashes.
#[must_use]
pub fn ct_eq_hash(a: &Hash256, b: &Hash256) -> bool {
    a.ct_eq(b).into()
}


#[cfg(test)]
#[allow(clippy::missing_panics_doc, clippy::missing_assert_message)]
mod tests {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn sha256_known_answer() {
        assert_eq!(
            DigestAlgorithm::Sha256.digest(b"abc"),
            hex!("ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad")
        );
    }

    #[test]
    fn sha3_known_answer() {
        assert_eq!(
            DigestAlgorithm::Sha3_256.digest(b""),
            hex!("a7ffc6f8bf1ed76651c14756a061d662f580ff4de43b49fa82d80a4b80f8434a")
        );
    }

    #[test]
    fn digest_parts_matches_concatenation() {
        for alg in DigestAlgorithm::ALL {
            assert_eq!(alg.digest_parts(&[b"ab", b"", b"cd"]), alg.digest(b"abcd"));
        }
    }

    #[test]
    fn algorithm_names_parse() {
        for alg in DigestAlgorithm::ALL {
            assert_eq!(alg.name().parse::<DigestAlgorithm>(), Ok(alg));
        }
        assert!("md5".parse::<DigestAlgorithm>().is_err());
    }

    #[test]
    fn be_minimal_roundtrip_edges() {
        assert!(be_minimal(0).is_empty());
        assert_eq!(be_minimal(1), vec![1]);
        assert_eq!(be_minimal(0x0100), vec![1, 0]);
        for x in [0u64, 1, 255, 256, u64::from(u32::MAX), u64::MAX] {
            assert_eq!(u64_from_be(&be_minimal(x)), Some(x));
        }
        assert_eq!(u64_from_be(&[0u8; 9]), None);
    }

    #[test]
    fn ct_eq_detects_single_bit() {
        let a = [7u8; 32];
        let mut b = a;
        assert!(ct_eq_hash(&a, &b));
        b[31] ^= 1;
        assert!(!ct_eq_hash(&a, &b));
    }
}
