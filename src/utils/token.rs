use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, prelude::BASE64_STANDARD, Engine as _};
use rand_core::{OsRng, RngCore};
use uuid::Uuid;

pub fn new_id() -> Uuid {
    Uuid::new_v4()
}

/// Random opaque API secret. Only its argon2 hash ever hits the database.
pub fn new_token() -> String {
    let mut buf = [0u8; 32];
    let mut rng = OsRng;
    rng.fill_bytes(&mut buf);
    format!("tok_{}", URL_SAFE_NO_PAD.encode(buf))
}

pub fn encrypt(secret: &str) -> Result<String, argon2::password_hash::Error> {
    let mut rng = OsRng;
    let salt = SaltString::generate(&mut rng);
    let hash = Argon2::default().hash_password(secret.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

pub fn verify(secret: &str, hash: &str) -> Result<bool, argon2::password_hash::Error> {
    let parsed = PasswordHash::new(hash)?;
    Ok(Argon2::default()
        .verify_password(secret.as_bytes(), &parsed)
        .is_ok())
}

/// Bearer token handed to the caller: base64("<user_id>.<secret>").
pub fn construct_token(user_id: &str, secret: &str) -> String {
    BASE64_STANDARD.encode(format!("{user_id}.{secret}"))
}

/// Inverse of construct_token. None on anything that does not parse.
pub fn extract_token_parts(token: &str) -> Option<(Uuid, String)> {
    let decoded = BASE64_STANDARD.decode(token).ok()?;
    let decoded = String::from_utf8(decoded).ok()?;
    let (user_id, secret) = decoded.split_once('.')?;
    let user_id = Uuid::parse_str(user_id).ok()?;
    if secret.is_empty() {
        return None;
    }
    Some((user_id, secret.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_roundtrip() {
        let id = new_id();
        let secret = new_token();
        let bearer = construct_token(&id.to_string(), &secret);
        let (got_id, got_secret) = extract_token_parts(&bearer).unwrap();
        assert_eq!(got_id, id);
        assert_eq!(got_secret, secret);
    }

    #[test]
    fn extract_rejects_garbage() {
        assert!(extract_token_parts("not base64 at all!!").is_none());
        // valid base64, no separator
        assert!(extract_token_parts(&BASE64_STANDARD.encode("nodot")).is_none());
        // separator but not a uuid
        assert!(extract_token_parts(&BASE64_STANDARD.encode("abc.def")).is_none());
        // uuid but empty secret
        let id = new_id();
        assert!(extract_token_parts(&BASE64_STANDARD.encode(format!("{id}."))).is_none());
    }

    #[test]
    fn hash_verifies_only_matching_secret() {
        let secret = new_token();
        let hash = encrypt(&secret).unwrap();
        assert!(verify(&secret, &hash).unwrap());
        assert!(!verify("tok_wrong", &hash).unwrap());
    }
}
