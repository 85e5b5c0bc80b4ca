//! Storage and catalog boundaries consumed by the services.
//!
//! Both are traits so the game flow never names a concrete backend; the
//! in-memory implementations live in `crate::adapters`.

pub mod catalog;
pub mod rooms;

pub use catalog::RoleCatalog;
pub use rooms::RoomStore;
