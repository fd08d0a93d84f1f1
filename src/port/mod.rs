//! Ports - the traits host code implements to plug into the queue

pub mod command;
pub mod listener;

pub use command::*;
pub use listener::*;
