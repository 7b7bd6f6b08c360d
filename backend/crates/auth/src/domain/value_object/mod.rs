//! Value Object Module

pub mod email;
pub mod freshness;

pub use kernel::id::UserId;
