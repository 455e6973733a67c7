//! Session-level state: score, replay.

pub mod replay;
pub mod state;
