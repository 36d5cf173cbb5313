//! QueueClip - Command module

pub mod handlers;

pub use handlers::*;
