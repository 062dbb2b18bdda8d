use std::path::PathBuf;
use std::time::Duration;

/// One playable item: immutable metadata plus media locators.
#[derive(Clone, Debug)]
pub struct Track {
    /// Audio source locator.
    pub source: PathBuf,
    pub title: String,
    pub artist: Option<String>,
    pub album: Option<String>,
    /// Album-art locator (path or URL). Scanned directories have none.
    pub art: Option<String>,
    /// Duration from tag metadata, when available. Display only; the
    /// authoritative duration arrives from the engine after binding.
    pub duration: Option<Duration>,
    pub display: String,
}

pub(super) fn make_display(title: &str, artist: Option<&str>) -> String {
    match artist {
        Some(a) if !a.trim().is_empty() => format!("{} - {}", a.trim(), title),
        _ => title.to_string(),
    }
}
