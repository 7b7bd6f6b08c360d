//! Infrastructure Layer
//!
//! Database implementations of the project repository.

pub mod memory;
pub mod postgres;

pub use memory::MemoryProjectRepository;
pub use postgres::PgProjectRepository;
