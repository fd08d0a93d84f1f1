//! The queue engine and its shared handle

pub mod queue;
pub mod shared;

pub use queue::*;
pub use shared::*;
