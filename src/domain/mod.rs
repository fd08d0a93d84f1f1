//! Domain types shared by every layer: errors, lifecycle events, run results

pub mod constant;
pub mod error;
pub mod event;
pub mod outcome;

pub use error::*;
pub use event::*;
pub use outcome::*;
