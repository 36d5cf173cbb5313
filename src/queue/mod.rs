//! QueueClip - Queue module
//!
//! The ordered item queue and its splitting policy

pub mod delimiter;
pub mod engine;

pub use delimiter::Delimiter;
pub use engine::{QueueEngine, QueueStatus};
