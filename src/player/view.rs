//! Derived view model: a pure projection of the player state into the
//! props the presentation widgets render from.

use crate::library::Track;

use super::model::{Mode, Player, UNKNOWN_LENGTH};

pub struct ViewModel<'a> {
    pub track: &'a Track,
    pub mode: Mode,
    pub paused: bool,
    /// Whether an engine binding exists (false mid-transition).
    pub engine_mounted: bool,
    pub forward_disabled: bool,
    pub repeat_on: bool,
    pub shuffle_on: bool,
    pub current_position: u64,
    pub total_length: u64,
    pub duration_known: bool,
    pub last_error: Option<&'a str>,
}

impl<'a> ViewModel<'a> {
    pub fn derive(player: &'a Player) -> Self {
        Self {
            track: player.current_track(),
            mode: player.mode(),
            paused: player.paused,
            engine_mounted: !player.transitioning(),
            forward_disabled: player.selected == player.tracks.len() - 1,
            repeat_on: player.repeat_on,
            shuffle_on: player.shuffle_on,
            current_position: player.current_position,
            total_length: player.total_length,
            duration_known: player.total_length != UNKNOWN_LENGTH,
            last_error: player.last_error.as_deref(),
        }
    }

    /// Seek-bar fill in `0.0..=1.0`. Empty while the duration is unknown.
    pub fn seek_ratio(&self) -> f64 {
        if !self.duration_known || self.total_length == 0 {
            return 0.0;
        }
        (self.current_position as f64 / self.total_length as f64).clamp(0.0, 1.0)
    }
}
