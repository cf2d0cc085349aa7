//! Blake2b hashing for verification evidence.

use blake2::digest::consts::U32;
use blake2::{Blake2b, Digest};
use vws_types::EvidenceHash;

type Blake2b256 = Blake2b<U32>;

/// Domain tag mixed into every evidence digest.
const EVIDENCE_DOMAIN: &[u8] = b"vws-evidence-v1";

/// Compute a 256-bit Blake2b hash of arbitrary data.
pub fn blake2b_256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Blake2b256::new();
    hasher.update(data);
    let result = hasher.finalize();
    let mut output = [0u8; 32];
    output.copy_from_slice(&result);
    output
}

/// Hash multiple byte slices in sequence (avoids concatenation allocation).
pub fn blake2b_256_multi(parts: &[&[u8]]) -> [u8; 32] {
    let mut hasher = Blake2b256::new();
    for part in parts {
        hasher.update(part);
    }
    let result = hasher.finalize();
    let mut output = [0u8; 32];
    output.copy_from_slice(&result);
    output
}

/// Digest captured image bytes into an `EvidenceHash`.
pub fn hash_evidence(image: &[u8]) -> EvidenceHash {
    EvidenceHash::new(blake2b_256_multi(&[EVIDENCE_DOMAIN, image]))
}
