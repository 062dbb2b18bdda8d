use std::env;
use std::path::Path;
use std::sync::mpsc;

use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::engine::{Engine, EngineEvent};
use crate::library;
use crate::mpris::ControlCmd;
use crate::player::Player;

mod event_loop;
mod mpris_sync;
mod settings;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let settings = settings::load_settings();

    let arg = env::args().nth(1).unwrap_or_else(|| {
        std::env::current_dir()
            .ok()
            .and_then(|p| p.to_str().map(|s| s.to_string()))
            .unwrap_or_else(|| "Music".to_string())
    });

    // A .toml argument is a playlist; anything else is a directory scan.
    let path = Path::new(&arg);
    let tracks = if path.extension().is_some_and(|e| e == "toml") {
        library::load_playlist(path)?
    } else {
        library::scan(path, &settings.library)
    };
    if tracks.is_empty() {
        return Err(format!("no playable tracks found in {arg}").into());
    }

    let (engine_tx, engine_rx) = mpsc::channel::<EngineEvent>();
    let engine = Engine::spawn(engine_tx);

    let mut player = Player::new(tracks, engine.sender());
    player.repeat_on = settings.playback.repeat;
    player.shuffle_on = settings.playback.shuffle;

    let (control_tx, control_rx) = mpsc::channel::<ControlCmd>();
    let mpris = crate::mpris::spawn_mpris(control_tx);

    mpris_sync::update_mpris(&mpris, &player);

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let run_result = event_loop::run(
        &mut terminal,
        &settings,
        &mut player,
        &mpris,
        &control_rx,
        &engine_rx,
    );

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    engine.quit();

    run_result
}
