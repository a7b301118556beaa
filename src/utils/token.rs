use base64::{engine::general_purpose::URL_SAFE, Engine as _};
use rand::{rngs::OsRng, TryRngCore};

use crate::message::AppError;

/// Number of random bytes behind every issued token.
pub const TOKEN_BYTES: usize = 32;

/// Generates an opaque session token: 32 bytes from the OS RNG, URL-safe base64 encoded.
pub fn create_token() -> Result<String, AppError> {
    let mut bytes = [0u8; TOKEN_BYTES];
    OsRng
        .try_fill_bytes(&mut bytes)
        .map_err(|e| AppError::TokenGeneration(e.to_string()))?;

    Ok(URL_SAFE.encode(bytes))
}
