//! Argon2id password hashing in PHC string form.
use argon2::Argon2;
use argon2::PasswordHash;
use argon2::PasswordHasher;
use argon2::PasswordVerifier;
use argon2::password_hash::Error;
use argon2::password_hash::SaltString;

/// 16 random bytes, base64 encoded.
fn salt() -> Result<SaltString, Error> {
    use rand::Rng;
    let mut bytes = [0u8; 16];
    rand::rng().fill(&mut bytes);
    SaltString::encode_b64(&bytes)
}

pub fn hash(password: &str) -> Result<String, Error> {
    let salt = salt()?;
    let phc = Argon2::default().hash_password(password.as_bytes(), &salt)?;
    Ok(phc.to_string())
}

/// False on mismatch and on a hash that does not parse.
pub fn verify(password: &str, hashword: &str) -> bool {
    match PasswordHash::new(hashword) {
        Ok(parsed) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok(),
        Err(_) => false,
    }
}
