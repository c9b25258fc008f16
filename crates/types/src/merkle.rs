use crate::primitives::Digest;
use blake3::Hasher as Blake3;

/// Binary Merkle root over an ordered list of digests.
///
/// An empty list commits to the zero digest and a single leaf is its own
/// root. Odd levels pair the last node with itself.
pub fn merkle_root(leaves: &[Digest]) -> Digest {
    if leaves.is_empty() {
        return [0u8; 32];
    }

    let mut current_level: Vec<Digest> = leaves.to_vec();
    while current_level.len() > 1 {
        let mut next_level = Vec::with_capacity(current_level.len().div_ceil(2));
        for chunk in current_level.chunks(2) {
            let left = chunk[0];
            let right = if chunk.len() == 2 { chunk[1] } else { chunk[0] };
            let mut hasher = Blake3::new();
            hasher.update(&left);
            hasher.update(&right);
            next_level.push(*hasher.finalize().as_bytes());
        }
        current_level = next_level;
    }

    current_level[0]
}
