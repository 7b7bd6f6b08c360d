//! Domain Layer
//!
//! Project entity, value objects, and repository trait.

pub mod entities;
pub mod repository;
pub mod value_objects;

// Re-exports
pub use entities::Project;
pub use repository::ProjectRepository;
pub use value_objects::{ProjectDescription, ProjectName};
