//! The player model: playback position, track selection and the
//! transition guard used while swapping engine bindings.
//!
//! A track change happens in two phases on the same thread. Phase one
//! (in `go_back`/`go_forward`) seeks the old binding to zero, unbinds it
//! and raises `transitioning`; no engine binding exists from here on.
//! Phase two (`resolve_pending`, called by the event loop on its next
//! turn) resets position and duration, bumps the binding generation and
//! binds the new track's source unpaused. The deferral guarantees the
//! old binding is fully gone before the new one mounts; two live
//! bindings at once is the bug this sequencing avoids.

use std::sync::mpsc::Sender;

use crate::engine::EngineCmd;
use crate::library::Track;

/// Duration sentinel used until the engine reports the real length.
pub const UNKNOWN_LENGTH: u64 = 1;

/// Pressing "back" within this many seconds of a track's start means
/// "previous track" rather than "restart current track".
pub const PREV_TRACK_WINDOW_SECS: u64 = 10;

/// Coarse playback mode, derived from the player flags.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    Playing,
    #[default]
    Paused,
    /// Between unbinding the old track and binding the next one; no
    /// engine binding exists and playback is implicitly paused.
    Transitioning,
}

pub struct Player {
    pub tracks: Vec<Track>,
    pub paused: bool,
    /// Current track length in whole seconds; `UNKNOWN_LENGTH` until the
    /// engine reports it.
    pub total_length: u64,
    /// Playback cursor in whole seconds.
    pub current_position: u64,
    /// Index of the current track; always within `0..tracks.len()`.
    pub selected: usize,
    pub repeat_on: bool,
    pub shuffle_on: bool,
    /// Message from the engine's last error, for the status line.
    pub last_error: Option<String>,

    transitioning: bool,
    /// Target index of a deferred track change.
    pending: Option<usize>,
    /// Tag of the current engine binding. Events carrying any other
    /// generation come from a superseded binding and are discarded.
    generation: u64,

    engine: Sender<EngineCmd>,
}

impl Player {
    /// Create a player over a non-empty track list and bind the engine
    /// to track 0, paused.
    pub fn new(tracks: Vec<Track>, engine: Sender<EngineCmd>) -> Self {
        debug_assert!(!tracks.is_empty());

        let player = Self {
            tracks,
            paused: true,
            total_length: UNKNOWN_LENGTH,
            current_position: 0,
            selected: 0,
            repeat_on: false,
            shuffle_on: false,
            last_error: None,
            transitioning: false,
            pending: None,
            generation: 0,
            engine,
        };

        let _ = player.engine.send(EngineCmd::Bind {
            generation: player.generation,
            source: player.tracks[player.selected].source.clone(),
        });

        player
    }

    pub fn mode(&self) -> Mode {
        if self.transitioning {
            Mode::Transitioning
        } else if self.paused {
            Mode::Paused
        } else {
            Mode::Playing
        }
    }

    pub fn transitioning(&self) -> bool {
        self.transitioning
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn current_track(&self) -> &Track {
        &self.tracks[self.selected]
    }

    /// Engine reported the bound source's duration.
    pub fn report_duration(&mut self, generation: u64, seconds: f64) {
        if self.transitioning || generation != self.generation {
            return;
        }
        self.total_length = seconds.floor() as u64;
    }

    /// Engine reported playback progress.
    pub fn report_progress(&mut self, generation: u64, seconds: f64) {
        if self.transitioning || generation != self.generation {
            return;
        }
        self.current_position = seconds.floor() as u64;
    }

    /// Engine reported the end of the bound source. Acknowledged only;
    /// end-of-track behavior is not part of this screen.
    pub fn report_end(&mut self, _gen: u64) {}

    /// Engine reported a bind/decode failure. No recovery; the message
    /// is kept for the status line.
    pub fn report_error(&mut self, generation: u64, message: String) {
        if generation != self.generation {
            return;
        }
        self.last_error = Some(message);
    }

    /// Move the playback cursor and resume. Ignored mid-transition,
    /// when no engine binding exists to seek.
    pub fn seek_to(&mut self, time: f64) {
        if self.transitioning {
            return;
        }
        let secs = time.round().max(0.0) as u64;
        let _ = self.engine.send(EngineCmd::Seek { secs });
        self.current_position = secs;
        self.paused = false;
        let _ = self.engine.send(EngineCmd::Play);
    }

    pub fn request_play(&mut self) {
        self.paused = false;
        let _ = self.engine.send(EngineCmd::Play);
    }

    pub fn request_pause(&mut self) {
        self.paused = true;
        let _ = self.engine.send(EngineCmd::Pause);
    }

    pub fn toggle_repeat(&mut self) {
        self.repeat_on = !self.repeat_on;
    }

    pub fn toggle_shuffle(&mut self) {
        self.shuffle_on = !self.shuffle_on;
    }

    /// Back control: previous track when pressed near the start of a
    /// track that has one, otherwise restart the current track.
    pub fn go_back(&mut self) {
        if self.transitioning {
            return;
        }

        if self.current_position < PREV_TRACK_WINDOW_SECS && self.selected > 0 {
            self.begin_track_change(self.selected - 1);
        } else {
            // Restart: rewind in place, keep index and pause state.
            let _ = self.engine.send(EngineCmd::Seek { secs: 0 });
            self.current_position = 0;
        }
    }

    /// Forward control: next track, or a no-op at the end of the list.
    pub fn go_forward(&mut self) {
        if self.transitioning {
            return;
        }

        if self.selected < self.tracks.len() - 1 {
            self.begin_track_change(self.selected + 1);
        }
    }

    /// Phase one of a track change: rewind the doomed binding (fire and
    /// forget), drop it, and raise the transition guard.
    fn begin_track_change(&mut self, target: usize) {
        let _ = self.engine.send(EngineCmd::Seek { secs: 0 });
        let _ = self.engine.send(EngineCmd::Unbind);
        self.transitioning = true;
        self.pending = Some(target);
    }

    /// Phase two of a track change, run by the event loop one turn after
    /// phase one: reset position and duration, select the target track
    /// and bind it under a fresh generation, unpaused.
    pub fn resolve_pending(&mut self) {
        let Some(target) = self.pending.take() else {
            return;
        };

        self.current_position = 0;
        self.total_length = UNKNOWN_LENGTH;
        self.paused = false;
        self.transitioning = false;
        self.selected = target;
        self.generation += 1;

        let _ = self.engine.send(EngineCmd::Bind {
            generation: self.generation,
            source: self.tracks[self.selected].source.clone(),
        });
        let _ = self.engine.send(EngineCmd::Play);
    }
}
