//! # Registro
//!
//! `registro` is a minimal user-registration and login service backed by a
//! single `users` table.
//!
//! ## Credentials
//!
//! Registration derives a credential from the password: 60 bytes of OS
//! randomness are SHA-256 hex-digested into a 64-character salt, the password
//! is stretched with PBKDF2-HMAC-SHA512 (100 000 iterations) over that salt,
//! and the salt plus the hex-encoded derived key are stored as one opaque
//! string. Login recomputes the derivation and compares in constant time.
//!
//! ## HTTP surface
//!
//! - `GET /`: greeting page
//! - `GET|POST /register`: form page / JSON registration
//! - `GET|POST /login`: form page / JSON login
//! - `GET /health`: database health and build info
//!
//! Login failures collapse to a single `401` with no distinction between
//! unknown user and wrong password, to avoid account enumeration.

pub mod cli;
pub mod registro;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};
