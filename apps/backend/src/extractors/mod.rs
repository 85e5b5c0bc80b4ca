pub mod action_json;
pub mod room_id;

pub use action_json::ActionJson;
pub use room_id::RoomIdParam;
