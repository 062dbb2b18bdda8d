//! Display-string assembly for scanned tracks, driven by the
//! `library.display_fields` / `library.display_separator` settings.

use std::path::Path;

use crate::config::TrackDisplayField;

fn field_text(
    path: &Path,
    title: &str,
    artist: Option<&str>,
    album: Option<&str>,
    field: TrackDisplayField,
) -> Option<String> {
    let non_empty = |s: &str| {
        let s = s.trim();
        (!s.is_empty()).then(|| s.to_string())
    };

    match field {
        TrackDisplayField::Title => non_empty(title),
        TrackDisplayField::Artist => artist.and_then(non_empty),
        TrackDisplayField::Album => album.and_then(non_empty),
        TrackDisplayField::Filename => path
            .file_stem()
            .and_then(|s| s.to_str())
            .and_then(non_empty),
        TrackDisplayField::Path => Some(path.display().to_string()),
    }
}

/// Join the configured fields into a track's display string. Fields with
/// no value for this track are skipped; if nothing remains, the title is
/// used as-is.
pub(super) fn build_display(
    path: &Path,
    title: &str,
    artist: Option<&str>,
    album: Option<&str>,
    fields: &[TrackDisplayField],
    separator: &str,
) -> String {
    let parts: Vec<String> = fields
        .iter()
        .filter_map(|f| field_text(path, title, artist, album, *f))
        .collect();

    if parts.is_empty() {
        title.to_string()
    } else {
        parts.join(separator)
    }
}
