//! One-shot HKDF evaluation: `(alg, size, label, seed) -> size bytes`.
//!
//! `salt` is always the empty string, passed explicitly rather than omitted.

use hkdf::Hkdf;
use hmac::SimpleHmac;

use crate::alg::HashAlg;

/// Domain-separation label for the root seed derivation.
pub(crate) const LABEL_SEED: &[u8] = b"seed";
/// Domain-separation label for deriving the externally-visible current key.
pub(crate) const LABEL_KEY: &[u8] = b"key";
/// Domain-separation label for a left-child derivation during subtree expansion.
pub(crate) const LABEL_LEFT: &[u8] = b"left";
/// Domain-separation label for a right-child derivation during subtree expansion.
pub(crate) const LABEL_RIGHT: &[u8] = b"right";

/// Derives `out.len()` bytes via `HKDF(hash = A, ikm = ikm, salt = "", info = label)`.
///
/// Uses [`SimpleHmac`] as the HMAC backend rather than `Hkdf`'s default
/// `Hmac<D>`: `SimpleHmac` only requires `D: Digest + BlockSizeUser + Clone`,
/// which is exactly [`HashAlg::Digest`]'s bound, whereas `Hmac<D>` needs the
/// stricter `CoreProxy` chain that a bare `A: HashAlg` can't carry generically.
///
/// Panics if `out.len()` exceeds `255 * HashLen`. All call sites here request at
/// most one hash-output's worth of bytes, except `key()`, whose `requested_size`
/// is a caller-supplied parameter.
pub(crate) fn prf<A: HashAlg>(label: &[u8], ikm: &[u8], out: &mut [u8]) {
    let hkdf = Hkdf::<A::Digest, SimpleHmac<A::Digest>>::new(Some(&[]), ikm);
    hkdf.expand(label, out)
        .expect("requested output length exceeds 255 * HashLen");
}

/// Convenience wrapper returning a freshly allocated buffer of the algorithm's
/// native output length.
pub(crate) fn prf_native<A: HashAlg>(label: &[u8], ikm: &[u8]) -> Vec<u8> {
    let mut out = vec![0_u8; A::output_len()];
    prf::<A>(label, ikm, &mut out);
    out
}
