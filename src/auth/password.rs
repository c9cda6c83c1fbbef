/**
 * Password Hashing
 *
 * One-way salted hashing for user passwords using bcrypt.
 *
 * # Security
 *
 * - Hashing uses bcrypt's DEFAULT_COST work factor
 * - Verification is constant-time (via bcrypt)
 * - A malformed stored hash verifies as `false`; it never propagates an
 *   error into the login path, so the caller cannot distinguish it from
 *   a wrong password
 */

use bcrypt::{hash, verify, BcryptError, DEFAULT_COST};

/// Hash a plaintext password
pub fn hash_password(plaintext: &str) -> Result<String, BcryptError> {
    hash(plaintext, DEFAULT_COST)
}

/// Verify a plaintext password against a stored hash
///
/// Returns `false` for a mismatch and for any bcrypt failure (malformed
/// hash, unsupported version). Failures are logged, not surfaced.
pub fn verify_password(plaintext: &str, stored_hash: &str) -> bool {
    match verify(plaintext, stored_hash) {
        Ok(valid) => valid,
        Err(e) => {
            tracing::error!("Password verification error: {:?}", e);
            false
        }
    }
}
