use base64::{engine::general_purpose::URL_SAFE_NO_PAD, prelude::BASE64_STANDARD, Engine as _};
use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use rand_core::{OsRng, RngCore};
use uuid::Uuid;

pub fn new_id() -> Uuid {
    Uuid::new_v4()
}

/// Random secret half of a session token.
pub fn new_secret() -> String {
    let mut buf = [0u8; 32];
    let mut rng = OsRng;
    rng.fill_bytes(&mut buf);
    format!("tok_{}", URL_SAFE_NO_PAD.encode(buf))
}

/// Bearer token handed to the client: `base64("{session_id}.{secret}")`.
pub fn construct_token(session_id: &Uuid, secret: &str) -> String {
    BASE64_STANDARD.encode(format!("{session_id}.{secret}"))
}

/// Inverse of [`construct_token`]. `None` for anything malformed.
pub fn extract_token_parts(token: &str) -> Option<(Uuid, String)> {
    let decoded = BASE64_STANDARD.decode(token.trim()).ok()?;
    let decoded = String::from_utf8(decoded).ok()?;
    let (id, secret) = decoded.split_once('.')?;
    if secret.is_empty() {
        return None;
    }
    let id = Uuid::parse_str(id).ok()?;
    Some((id, secret.to_string()))
}

/// Argon2 hash used for both passwords and session secrets.
pub fn encrypt(plain: &str) -> Result<String, argon2::password_hash::Error> {
    let mut rng = OsRng;
    let salt = SaltString::generate(&mut rng);
    let hash = Argon2::default().hash_password(plain.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

pub fn verify(plain: &str, hash: &str) -> Result<bool, argon2::password_hash::Error> {
    let parsed = PasswordHash::new(hash)?;
    Ok(Argon2::default().verify_password(plain.as_bytes(), &parsed).is_ok())
}

/// Same parameters as [`encrypt`]; matches no password.
const DUMMY_HASH: &str =
    "$argon2id$v=19$m=19456,t=2,p=1$ERNdK7PgV25Sv4TuuhIOWw$r5+JRB5fdZON0mrAXf3y+xBuwPC6+KV9PVVZUSMsqNE";

/// Runs a full argon2 verify that always fails, so a login for an unknown
/// email costs as much as one with a wrong password.
pub fn verify_dummy(plain: &str) -> bool {
    matches!(verify(plain, DUMMY_HASH), Ok(true))
}
