//! Track model and track-list loading.
//!
//! Tracks come from one of two places: a directory scan (local audio
//! files, no album art) or a TOML playlist file carrying explicit
//! title/artist/art/source entries.

mod display;
mod model;
mod playlist;
mod scan;

pub use model::*;
pub use playlist::load_playlist;
pub use scan::scan;
