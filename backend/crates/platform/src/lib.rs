//! Platform Crate - Technical Infrastructure
//!
//! Shared technical foundations with no domain knowledge:
//! - Cryptographic utilities (HMAC-SHA256, base64url, constant-time compare)
//! - Salted password derivation (Argon2id with a caller-supplied salt)
//! - Cookie header building and parsing

pub mod cookie;
pub mod crypto;
pub mod password;
