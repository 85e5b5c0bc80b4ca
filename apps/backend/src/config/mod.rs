pub mod demo;
pub mod game;

pub use demo::DemoRoom;
pub use game::{GameConfig, ServerConfig};
