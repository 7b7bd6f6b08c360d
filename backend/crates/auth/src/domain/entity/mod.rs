//! Entities

pub mod credential;
pub mod identity;
pub mod session_token;
pub mod user;
