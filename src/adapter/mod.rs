//! Adapters - ready-made implementations of the ports

pub mod halt;
pub mod listener;

pub use halt::*;
pub use listener::*;
