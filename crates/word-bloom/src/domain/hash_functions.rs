//! Keyed hash functions for the Bloom filter
//!
//! Each of the `k` hash functions is HMAC-SHA256 under the key `key-<i>`.
//! A position is the varint decoded from the front of the digest, reduced
//! modulo the filter size.

use hmac::{Hmac, Mac};
use sha2::Sha256;

use super::varint::decode_uvarint;

type HmacSha256 = Hmac<Sha256>;

/// Length of an HMAC-SHA256 digest in bytes
pub const DIGEST_LEN: usize = 32;

/// Key material for the hash function at `index`
pub fn hasher_key(index: usize) -> String {
    format!("key-{}", index)
}

/// A single keyed hash function
///
/// Holds the MAC state right after keying. Every digest starts from a
/// clone of that state, so calls never observe each other.
#[derive(Clone)]
pub struct KeyedHasher {
    index: usize,
    keyed: HmacSha256,
}

impl KeyedHasher {
    /// Create the hash function for ordinal `index`
    pub fn new(index: usize) -> Self {
        let keyed = HmacSha256::new_from_slice(hasher_key(index).as_bytes())
            .expect("HMAC accepts keys of any length");
        Self { index, keyed }
    }

    /// Ordinal index this hasher was keyed with
    pub fn index(&self) -> usize {
        self.index
    }

    /// HMAC-SHA256 digest of `bytes`
    pub fn digest(&self, bytes: &[u8]) -> [u8; DIGEST_LEN] {
        let mut mac = self.keyed.clone();
        mac.update(bytes);
        mac.finalize().into_bytes().into()
    }

    /// 64-bit hash of `bytes`
    ///
    /// A 32-byte digest always holds a complete varint, so decoding can
    /// only stop early on overflow. The bits gathered up to that point are
    /// used as the hash.
    pub fn hash(&self, bytes: &[u8]) -> u64 {
        let digest = self.digest(bytes);
        match decode_uvarint(&digest) {
            Ok((value, _)) => value,
            Err(e) => e.partial(),
        }
    }
}

impl std::fmt::Debug for KeyedHasher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyedHasher")
            .field("key", &hasher_key(self.index))
            .finish()
    }
}

/// The ordered set of `k` hash functions owned by a filter
#[derive(Clone, Debug)]
pub struct HasherSet {
    hashers: Vec<KeyedHasher>,
}

impl HasherSet {
    /// Build `k` hash functions keyed `key-0` through `key-<k-1>`
    pub fn new(k: usize) -> Self {
        Self {
            hashers: (0..k).map(KeyedHasher::new).collect(),
        }
    }

    /// Number of hash functions (k)
    pub fn len(&self) -> usize {
        self.hashers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hashers.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&KeyedHasher> {
        self.hashers.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &KeyedHasher> {
        self.hashers.iter()
    }

    /// Bit positions for `token` in a filter of `m` bits, one per hasher
    ///
    /// The token is converted to bytes once and fed to each hasher in order.
    pub fn positions<'a>(&'a self, token: &'a str, m: usize) -> impl Iterator<Item = usize> + 'a {
        let bytes = token.as_bytes();
        self.hashers
            .iter()
            .map(move |hasher| (hasher.hash(bytes) % m as u64) as usize)
    }
}
