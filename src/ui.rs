//! UI rendering for the player screen.
//!
//! Everything here is props-in/UI-out: the widgets render from the
//! derived `ViewModel` and never touch player state.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Gauge, Padding, Paragraph, Wrap},
};

use crate::config::{ControlsSettings, UiSettings};
use crate::player::{Mode, ViewModel};

/// Render the controls help text, incorporating scrub seconds.
fn controls_text(scrub_seconds: u64) -> String {
    [
        "[h] back".to_string(),
        "[l] forward".to_string(),
        "[space/p] play/pause".to_string(),
        format!("[H/L] scrub -/+{}s", scrub_seconds),
        "[s] shuffle".to_string(),
        "[r] repeat".to_string(),
        "[q] quit".to_string(),
    ]
    .join(" | ")
}

/// Format whole seconds as `MM:SS`.
fn format_mmss(secs: u64) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

fn status_text(vm: &ViewModel) -> &'static str {
    match vm.mode {
        Mode::Playing => " playing ",
        Mode::Paused => " paused ",
        Mode::Transitioning => " switching ",
    }
}

/// Seek-bar label: elapsed / total, with `--:--` while the duration is
/// still unknown.
fn seek_label(vm: &ViewModel) -> String {
    if vm.duration_known {
        format!(
            "{} / {}",
            format_mmss(vm.current_position),
            format_mmss(vm.total_length)
        )
    } else {
        format!("{} / --:--", format_mmss(vm.current_position))
    }
}

/// Transport strip: prev / play-pause / next plus the toggle indicators.
fn transport_text(vm: &ViewModel) -> String {
    let play_pause = if vm.paused { "|>  play" } else { "||  pause" };
    let forward = if vm.forward_disabled {
        "[ next >| ] (end)"
    } else {
        "[ next >| ]"
    };
    let shuffle = if vm.shuffle_on { "shuffle ON" } else { "shuffle off" };
    let repeat = if vm.repeat_on { "repeat ON" } else { "repeat off" };

    format!("[ |< prev ]   [ {play_pause} ]   {forward}      {shuffle} | {repeat}")
}

/// The album-art panel body: the art locator when the track carries
/// one, otherwise a plain placeholder.
fn album_art_lines(vm: &ViewModel) -> Vec<Line<'static>> {
    match vm.track.art.as_deref() {
        Some(art) => vec![
            Line::from("┌────────────┐"),
            Line::from("│    ♪ ♫     │"),
            Line::from("└────────────┘"),
            Line::from(art.to_string()),
        ],
        None => vec![
            Line::from("┌────────────┐"),
            Line::from("│    ♪ ♫     │"),
            Line::from("└────────────┘"),
            Line::from("no album art"),
        ],
    }
}

/// Render the entire player screen from the derived view model.
pub fn draw(
    frame: &mut Frame,
    vm: &ViewModel,
    ui_settings: &UiSettings,
    controls_settings: &ControlsSettings,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(6),
            Constraint::Length(4),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(frame.area());

    // Header
    let header = Paragraph::new(ui_settings.header_text.as_str())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" vivace ")
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(header, chunks[0]);

    // Album art
    let art = Paragraph::new(album_art_lines(vm))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(" album art "));
    frame.render_widget(art, chunks[1]);

    // Track details
    let details = {
        let mut artist_line = vm.track.artist.clone().unwrap_or_default();
        // Tag duration is a display hint; the seek bar tracks the
        // engine-reported length.
        if let Some(d) = vm.track.duration {
            artist_line = format!("{artist_line}  ({})", format_mmss(d.as_secs()));
        }
        let mut lines = vec![
            Line::from(vm.track.title.clone())
                .style(Style::default().add_modifier(Modifier::BOLD)),
            Line::from(artist_line),
        ];
        if !vm.engine_mounted {
            lines.push(Line::from("switching track..."));
        }
        if let Some(err) = vm.last_error {
            lines.push(Line::from(format!("engine: {err}")));
        }
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title(" track "))
    };
    frame.render_widget(details, chunks[2]);

    // Seek bar
    let seek = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(status_text(vm)))
        .ratio(vm.seek_ratio())
        .label(seek_label(vm));
    frame.render_widget(seek, chunks[3]);

    // Transport controls
    let transport = Paragraph::new(transport_text(vm))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" controls ")
                .padding(Padding {
                    left: 1,
                    right: 0,
                    top: 0,
                    bottom: 0,
                }),
        );
    frame.render_widget(transport, chunks[4]);

    // Footer
    let footer = Paragraph::new(controls_text(controls_settings.scrub_seconds))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" keys ")
                .padding(Padding {
                    left: 1,
                    right: 0,
                    top: 0,
                    bottom: 0,
                }),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(footer, chunks[5]);
}
