//! ID generation for new issues.

use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};

const HASH_LENGTH: usize = 8;

/// Generate a unique issue ID with the given prefix.
///
/// Uses SHA256 hashing with base36 encoding. The `exists` closure checks
/// for collisions; on a collision the seed is re-hashed with a fresh nonce,
/// so ids stay unique even for identical titles created at the same instant.
pub fn generate_id<F>(prefix: &str, title: &str, created_at: DateTime<Utc>, exists: F) -> String
where
    F: Fn(&str) -> bool,
{
    let mut nonce = 0u32;
    loop {
        let seed = format!(
            "{}|{}|{}",
            title,
            created_at.timestamp_nanos_opt().unwrap_or(0),
            nonce
        );
        let id = format!("{prefix}-{}", compute_id_hash(&seed, HASH_LENGTH));
        if !exists(&id) {
            return id;
        }
        nonce += 1;
    }
}

fn compute_id_hash(input: &str, length: usize) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    let result = hasher.finalize();

    let mut num = 0u64;
    for &byte in result.iter().take(8) {
        num = (num << 8) | u64::from(byte);
    }

    let mut encoded = base36_encode(num);
    if encoded.len() < length {
        encoded = format!("{encoded:0>length$}");
    }
    encoded.chars().take(length).collect()
}

fn base36_encode(mut num: u64) -> String {
    const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if num == 0 {
        return "0".to_string();
    }
    let mut chars = Vec::new();
    while num > 0 {
        chars.push(ALPHABET[(num % 36) as usize] as char);
        num /= 36;
    }
    chars.into_iter().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_id_format() {
        let id = generate_id("it", "Test", Utc::now(), |_| false);
        assert!(id.starts_with("it-"));
        assert_eq!(id.len(), "it-".len() + HASH_LENGTH);
    }

    #[test]
    fn test_generate_id_deterministic_seed() {
        let now = Utc::now();
        let a = generate_id("it", "Same title", now, |_| false);
        let b = generate_id("it", "Same title", now, |_| false);
        assert_eq!(a, b);
    }

    #[test]
    fn test_generate_id_collision_handling() {
        let mut taken = std::collections::HashSet::new();
        let now = Utc::now();
        let first = generate_id("it", "Test", now, |id| taken.contains(id));
        taken.insert(first.clone());
        let second = generate_id("it", "Test", now, |id| taken.contains(id));
        assert_ne!(first, second);
    }
}
