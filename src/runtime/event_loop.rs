use std::sync::mpsc::Receiver;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::config;
use crate::engine::EngineEvent;
use crate::mpris::{ControlCmd, MprisHandle};
use crate::player::{Mode, Player, ViewModel};
use crate::runtime::mpris_sync::update_mpris;
use crate::ui;

/// Main terminal event loop: drains engine events, draws the screen,
/// resolves any deferred track change and handles input. Returns
/// `Ok(())` when shutdown is requested.
///
/// Ordering matters for track changes: `resolve_pending` runs after the
/// draw, so the frame between the two phases renders with no engine
/// binding, and the rebind happens one full turn after the unbind.
pub fn run(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    player: &mut Player,
    mpris: &MprisHandle,
    control_rx: &Receiver<ControlCmd>,
    engine_rx: &Receiver<EngineEvent>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut last_mpris_index = player.selected;
    let mut last_mpris_mode: Mode = player.mode();

    loop {
        // Engine events first; stale generations are discarded inside
        // the player.
        while let Ok(ev) = engine_rx.try_recv() {
            match ev {
                EngineEvent::Loaded { generation, duration } => {
                    player.report_duration(generation, duration.as_secs_f64());
                }
                EngineEvent::Progress { generation, elapsed } => {
                    player.report_progress(generation, elapsed.as_secs_f64());
                }
                EngineEvent::Ended { generation } => {
                    player.report_end(generation);
                }
                EngineEvent::Error { generation, message } => {
                    player.report_error(generation, message);
                }
            }
        }

        if player.selected != last_mpris_index || player.mode() != last_mpris_mode {
            update_mpris(mpris, player);
            last_mpris_index = player.selected;
            last_mpris_mode = player.mode();
        }

        {
            let vm = ViewModel::derive(player);
            terminal.draw(|f| ui::draw(f, &vm, &settings.ui, &settings.controls))?;
        }

        // Deferred phase of a track change: the unbound frame above has
        // committed, so the new binding can mount now.
        player.resolve_pending();

        while let Ok(cmd) = control_rx.try_recv() {
            if handle_control_cmd(cmd, player, mpris) {
                return Ok(());
            }
        }

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if handle_key_event(key, settings, player, mpris) {
                    return Ok(());
                }
            }
        }
    }
}

fn play_pause(player: &mut Player) {
    if player.paused {
        player.request_play();
    } else {
        player.request_pause();
    }
}

/// Handle an MPRIS control command. Returns `true` on quit.
fn handle_control_cmd(cmd: ControlCmd, player: &mut Player, mpris: &MprisHandle) -> bool {
    match cmd {
        ControlCmd::Quit => return true,
        ControlCmd::Play => player.request_play(),
        ControlCmd::Pause => player.request_pause(),
        ControlCmd::PlayPause => play_pause(player),
        ControlCmd::Next => player.go_forward(),
        ControlCmd::Prev => player.go_back(),
    }
    update_mpris(mpris, player);
    false
}

/// Handle a key press. Returns `true` on quit.
fn handle_key_event(
    key: KeyEvent,
    settings: &config::Settings,
    player: &mut Player,
    mpris: &MprisHandle,
) -> bool {
    match key.code {
        KeyCode::Char('q') => return true,
        KeyCode::Char(' ') | KeyCode::Char('p') => {
            play_pause(player);
        }
        KeyCode::Char('h') => {
            player.go_back();
        }
        KeyCode::Char('l') => {
            player.go_forward();
        }
        KeyCode::Char('H') => {
            let secs = settings.controls.scrub_seconds;
            let target = player.current_position.saturating_sub(secs);
            player.seek_to(target as f64);
        }
        KeyCode::Char('L') => {
            let secs = settings.controls.scrub_seconds;
            player.seek_to((player.current_position + secs) as f64);
        }
        KeyCode::Char('s') => {
            player.toggle_shuffle();
        }
        KeyCode::Char('r') => {
            player.toggle_repeat();
        }
        _ => return false,
    }

    update_mpris(mpris, player);
    false
}
