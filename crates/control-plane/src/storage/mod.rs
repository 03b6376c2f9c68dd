// Storage layer for the evaluations control-plane
// Decision: Support both PostgreSQL (production) and in-memory (dev mode)
//
// StorageBackend implements the core FormStore trait over either backend.

pub mod backend;
pub mod memory;
pub mod models;
pub mod repositories;

pub use backend::StorageBackend;
pub use memory::InMemoryDatabase;
pub use models::*;
pub use repositories::*;
