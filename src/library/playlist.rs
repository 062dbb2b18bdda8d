//! TOML playlist loader.
//!
//! A playlist is the explicit form of the track list: each entry names a
//! title, an optional artist, an optional album-art locator and the audio
//! source. Relative paths resolve against the playlist file's directory.

use std::path::{Path, PathBuf};

use lofty::prelude::*;
use serde::Deserialize;

use super::model::{Track, make_display};

#[derive(Debug, Deserialize)]
struct PlaylistFile {
    #[serde(default, rename = "track")]
    tracks: Vec<PlaylistEntry>,
}

#[derive(Debug, Deserialize)]
struct PlaylistEntry {
    title: String,
    #[serde(default)]
    artist: Option<String>,
    #[serde(default)]
    album: Option<String>,
    #[serde(default)]
    art: Option<String>,
    source: PathBuf,
}

fn resolve(base: &Path, path: PathBuf) -> PathBuf {
    if path.is_absolute() {
        path
    } else {
        base.join(path)
    }
}

fn resolve_art(base: &Path, art: String) -> String {
    // URLs pass through untouched; bare paths resolve like sources do.
    if art.contains("://") || Path::new(&art).is_absolute() {
        art
    } else {
        base.join(&art).display().to_string()
    }
}

/// Load the ordered track list from a `.toml` playlist file.
///
/// An empty playlist is an error: the player screen requires a non-empty
/// track list with index 0 selected initially.
pub fn load_playlist(path: &Path) -> Result<Vec<Track>, Box<dyn std::error::Error>> {
    let text = std::fs::read_to_string(path)?;
    let parsed: PlaylistFile = toml::from_str(&text)?;

    if parsed.tracks.is_empty() {
        return Err(format!("playlist {} has no tracks", path.display()).into());
    }

    let base = path.parent().unwrap_or_else(|| Path::new("."));

    let tracks = parsed
        .tracks
        .into_iter()
        .map(|e| {
            let source = resolve(base, e.source);
            let duration = lofty::read_from_path(&source)
                .ok()
                .map(|tagged| tagged.properties().duration());
            let display = make_display(&e.title, e.artist.as_deref());
            Track {
                source,
                title: e.title,
                artist: e.artist,
                album: e.album,
                art: e.art.map(|a| resolve_art(base, a)),
                duration,
                display,
            }
        })
        .collect();

    Ok(tracks)
}
