//! Registration and login.
//!
//! The site never handles sessions itself: a successful login returns the
//! normalized username, and the session layer in front of the site carries
//! it back in on later requests.

use sha2::{Digest, Sha256};
use tracing::info;

use crate::documents::User;
use crate::error::{Error, Result};
use crate::model::{ModelStore, ModelsExt};
use crate::query::{normalize_username, Filter};

const BAD_CREDENTIALS: &str = "Incorrect Username and/or Password";

/// Password hashing primitive.
pub trait PasswordHasher: Send + Sync {
    /// Hash `password` with a caller-supplied unique salt.
    fn hash(&self, password: &str, salt: &str) -> String;

    /// Check `password` against a value previously returned by `hash`.
    fn verify(&self, password: &str, stored: &str) -> bool;
}

/// Salted SHA-256, stored as `sha256$<salt>$<hex digest>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256Hasher;

impl Sha256Hasher {
    fn digest(password: &str, salt: &str) -> [u8; 32] {
        let mut hasher = Sha256::new();
        hasher.update(salt.as_bytes());
        hasher.update(b"$");
        hasher.update(password.as_bytes());
        hasher.finalize().into()
    }
}

impl PasswordHasher for Sha256Hasher {
    fn hash(&self, password: &str, salt: &str) -> String {
        format!("sha256${}${}", salt, hex::encode(Self::digest(password, salt)))
    }

    fn verify(&self, password: &str, stored: &str) -> bool {
        let mut parts = stored.splitn(3, '$');
        let (Some("sha256"), Some(salt), Some(digest)) = (parts.next(), parts.next(), parts.next())
        else {
            return false;
        };
        match hex::decode(digest) {
            Ok(expected) => constant_time_eq(&Self::digest(password, salt), &expected),
            Err(_) => false,
        }
    }
}

/// Compare without short-circuiting on the first differing byte.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    a.len() == b.len() && a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

/// Create an account. Returns the normalized username.
pub fn register<S, H>(store: &S, hasher: &H, username: &str, password: &str) -> Result<String>
where
    S: ModelStore,
    H: PasswordHasher + ?Sized,
{
    let username = normalize_username(username);
    if username.is_empty() {
        return Err(Error::validation("Please choose a username"));
    }
    // Favourite ids are `{user}:{work_id}`.
    if username.contains(':') {
        return Err(Error::validation("Usernames cannot contain ':'"));
    }
    if password.is_empty() {
        return Err(Error::validation("Please choose a password"));
    }

    let salt = store.issue_id();
    let user = User {
        username: username.clone(),
        password_hash: hasher.hash(password, salt.as_str()),
    };

    let created = store
        .models::<User>()
        .insert_if_absent(&Filter::eq("username", username.as_str()), &user)?;
    if !created {
        return Err(Error::validation("Username already exists"));
    }

    info!(user = %username, "user registered");
    Ok(username)
}

/// Check credentials. Returns the normalized username.
pub fn login<S, H>(store: &S, hasher: &H, username: &str, password: &str) -> Result<String>
where
    S: ModelStore,
    H: PasswordHasher + ?Sized,
{
    let username = normalize_username(username);
    let user = store
        .models::<User>()
        .get(&username)?
        .ok_or_else(|| Error::unauthorized(BAD_CREDENTIALS))?;

    if !hasher.verify(password, &user.password_hash) {
        return Err(Error::unauthorized(BAD_CREDENTIALS));
    }
    Ok(user.username)
}
