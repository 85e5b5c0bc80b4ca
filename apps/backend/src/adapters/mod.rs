//! Adapters for external dependencies.

pub mod catalog_static;
pub mod rooms_mem;

pub use catalog_static::StaticCatalog;
pub use rooms_mem::InMemoryRoomStore;
