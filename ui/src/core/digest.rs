//! Password digest. Plain SHA-256 over the UTF-8 bytes, rendered as lower-case hex,
//! to stay compatible with the `password_hash` column already in the backend.

use sha2::{Digest, Sha256};

pub const DIGEST_HEX_LEN: usize = 64;

pub fn hash_password(password: &str) -> String {
    format!("{:x}", Sha256::digest(password.as_bytes()))
}

pub fn verify_password(password: &str, stored_hash: &str) -> bool {
    hash_password(password) == stored_hash.to_ascii_lowercase()
}
