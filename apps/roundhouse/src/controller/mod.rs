//! Controller layer: typed host commands and their orchestration onto the session.

pub mod events;
pub mod orchestration;
