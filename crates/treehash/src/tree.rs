use sha2::{Digest as _, Sha256};

use crate::{Digest, TreeHashError, chunk_digests};

/// Reduces a digest sequence to its tree-hash root.
///
/// Pairs are combined left to right as `SHA256(a || b)` over the raw
/// 64 bytes; an odd digest at the end of a level is carried into the
/// next level unchanged. A single-element sequence is its own root.
/// An empty sequence is a precondition violation and fails with
/// [`TreeHashError::EmptyInput`].
pub fn tree_hash(digests: &[Digest]) -> Result<Digest, TreeHashError> {
    if digests.is_empty() {
        return Err(TreeHashError::EmptyInput);
    }

    let mut level = digests.to_vec();
    while level.len() > 1 {
        let mut next = Vec::with_capacity(level.len().div_ceil(2));
        for pair in level.chunks(2) {
            if let [a, b] = pair {
                next.push(combine(a, b));
            } else {
                // Odd tail: carried up, not re-hashed.
                next.push(pair[0]);
            }
        }
        level = next;
    }
    Ok(level[0])
}

/// Chunks `data` at the 1 MiB granularity and reduces in one call.
pub fn tree_hash_of(data: &[u8]) -> Result<Digest, TreeHashError> {
    tree_hash(&chunk_digests(data))
}

fn combine(a: &Digest, b: &Digest) -> Digest {
    let mut hasher = Sha256::new();
    hasher.update(a.as_bytes());
    hasher.update(b.as_bytes());
    Digest::new(hasher.finalize().into())
}
