pub mod events;
pub mod game_flow;
pub mod room_locks;

pub use events::{CollectingEventSink, EventSink, TracingEventSink};
pub use game_flow::{GameFlowMutationResult, GameFlowService};
pub use room_locks::RoomLocks;
