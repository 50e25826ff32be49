//! Credential token generation.

use rand::Rng;

/// Number of random bytes in a token.
const TOKEN_BYTES: usize = 32;

/// Generate a fresh token: 32 bytes from the OS-seeded CSPRNG, hex-encoded.
pub fn generate_token() -> String {
    let mut bytes = [0u8; TOKEN_BYTES];
    rand::thread_rng().fill(&mut bytes[..]);
    hex::encode(&bytes)
}

/// Minimal hex encoding.
mod hex {
    pub fn encode(bytes: &[u8]) -> String {
        bytes.iter().map(|b| format!("{b:02x}")).collect()
    }
}
