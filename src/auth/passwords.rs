/**
 * Password Hashing
 *
 * bcrypt hashing and verification for the credential store. Plaintext
 * passwords exist only in the request that carries them; the user table
 * stores bcrypt hashes and nothing else.
 */

use bcrypt::BcryptError;

/// Bcrypt cost factor for newly created hashes
///
/// Stored hashes encode their own cost, so verification keeps working for
/// hashes created under a different setting.
pub const BCRYPT_COST: u32 = 10;

/// Minimum accepted password length, in characters
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Hash a plaintext password with bcrypt
///
/// # Arguments
///
/// * `password` - Plaintext password to hash
///
/// # Returns
///
/// * `Ok(String)` - bcrypt hash, salt included
/// * `Err(BcryptError)` - Hashing failure
pub fn hash_password(password: &str) -> Result<String, BcryptError> {
    bcrypt::hash(password, BCRYPT_COST)
}

/// Verify a plaintext password against a stored bcrypt hash
///
/// Returns `false` both for a wrong password and for a stored value that
/// does not parse as a bcrypt hash. Credential checks never surface
/// hash-format faults to the caller.
pub fn verify_password(password: &str, password_hash: &str) -> bool {
    bcrypt::verify(password, password_hash).unwrap_or(false)
}
