//! Application Layer
//!
//! Use cases and application services.

pub mod authenticate;
pub mod config;
pub mod sign_in;
pub mod token_issuer;

// Re-exports
pub use authenticate::AuthenticateUseCase;
pub use config::AuthConfig;
pub use sign_in::{SignInInput, SignInOutput, SignInUseCase};
pub use token_issuer::TokenIssuer;
