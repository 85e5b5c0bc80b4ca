pub mod request_trace;

pub use request_trace::{RequestTrace, TRACE_HEADER};
