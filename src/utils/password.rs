use crate::message::AppError;

/// bcrypt only reads this many bytes of input; anything after them is ignored.
pub const MAX_PASSWORD_BYTES: usize = 72;

/// Hashes a plaintext password with bcrypt at the given cost. Passwords longer
/// than [`MAX_PASSWORD_BYTES`] are rejected rather than truncated.
pub fn hash_password(plain: &str, cost: u32) -> Result<String, AppError> {
    if plain.len() > MAX_PASSWORD_BYTES {
        return Err(AppError::BadRequest(format!(
            "password must be at most {MAX_PASSWORD_BYTES} bytes"
        )));
    }
    Ok(bcrypt::hash(plain, cost)?)
}

/// Checks `plain` against a stored bcrypt hash; a mismatch is `InvalidCredentials`.
pub fn verify_password(hash: &str, plain: &str) -> Result<(), AppError> {
    if plain.len() > MAX_PASSWORD_BYTES {
        return Err(AppError::InvalidCredentials);
    }
    if bcrypt::verify(plain, hash)? {
        Ok(())
    } else {
        Err(AppError::InvalidCredentials)
    }
}
