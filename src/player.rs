//! Player module: the track-transition state machine and its derived
//! view model.
//!
//! The `Player` owns all mutable screen state (pause flag, playback
//! cursor, selected track, toggles) and drives the engine through its
//! command channel. It is the only place track changes are sequenced.

mod model;
mod view;

pub use model::*;
pub use view::ViewModel;

#[cfg(test)]
mod tests;
