//! Playback engine: a rodio-backed thread driven by commands.
//!
//! The engine holds at most one binding (a decoded source feeding a
//! sink), tagged with the generation it was bound under. Every event it
//! emits echoes that generation so the controller can discard callbacks
//! from a superseded binding.

mod handle;
mod sink;
mod thread;
mod types;

pub use handle::Engine;
pub use types::{EngineCmd, EngineEvent};

#[cfg(test)]
mod tests;
