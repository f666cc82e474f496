//! Hash algorithm selection.
//!
//! The scheme is generic over any HKDF-compatible hash; this crate represents that
//! genericity as a Rust type parameter rather than a runtime enum, since the
//! serialized form (see [`crate::wire`]) never records which hash produced it and
//! always restores [`Sha256`] on load.

use digest::{BlockSizeUser, Digest};

/// A hash algorithm usable as the PRF's underlying primitive.
///
/// Implement this for a marker type to plug in a different HKDF-compatible hash.
/// `Seq<A>` is generic over `A: HashAlg`; only `Seq<Sha256>` can be produced by
/// [`Seq::unmarshal`](crate::Seq::unmarshal), per the format's fixed hash binding.
pub trait HashAlg {
    /// The underlying hash implementation passed to `hkdf::Hkdf`.
    ///
    /// Bounded by [`BlockSizeUser`] (in addition to [`Digest`] and [`Clone`]) so
    /// that [`crate::kdf::prf`] can drive `Hkdf` through [`hmac::SimpleHmac`],
    /// which accepts any digest satisfying these three bounds directly, rather
    /// than the stricter `CoreProxy` chain the default `Hmac<D>` backend needs.
    type Digest: Digest + BlockSizeUser + Clone;

    /// Output length of the hash, in bytes.
    fn output_len() -> usize {
        <Self::Digest as Digest>::output_size()
    }
}

/// SHA-256, the default and only hash produced by deserialization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sha256;

impl HashAlg for Sha256 {
    type Digest = sha2::Sha256;
}
