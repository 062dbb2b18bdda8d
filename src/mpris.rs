//! MPRIS (org.mpris.MediaPlayer2) D-Bus surface.
//!
//! Exposes the transport controls to desktop media keys and exports the
//! current track metadata. Control requests are forwarded to the event
//! loop over a channel; nothing here touches the player directly.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, mpsc::Sender};

use async_io::{Timer, block_on};
use zbus::{Connection, interface};
use zvariant::{OwnedValue, Value};

use crate::library::Track;
use crate::player::Mode;

#[derive(Clone, Debug)]
pub enum ControlCmd {
    Quit,
    Play,
    Pause,
    PlayPause,
    Next,
    Prev,
}

#[derive(Debug, Default)]
struct SharedState {
    mode: Mode,
    title: Option<String>,
    artist: Vec<String>,
    album: Option<String>,
    art_url: Option<String>,
    shuffle: bool,
    repeat: bool,
}

pub struct MprisHandle {
    state: Arc<Mutex<SharedState>>,
}

impl MprisHandle {
    pub fn set_mode(&self, mode: Mode) {
        if let Ok(mut s) = self.state.lock() {
            s.mode = mode;
        }
    }

    pub fn set_track_metadata(&self, track: Option<&Track>) {
        if let Ok(mut s) = self.state.lock() {
            match track {
                Some(t) => {
                    s.title = Some(t.title.clone());
                    s.artist = t.artist.iter().cloned().collect();
                    s.album = t.album.clone();
                    s.art_url = t.art.clone();
                }
                None => {
                    s.title = None;
                    s.artist.clear();
                    s.album = None;
                    s.art_url = None;
                }
            }
        }
    }

    pub fn set_toggles(&self, shuffle: bool, repeat: bool) {
        if let Ok(mut s) = self.state.lock() {
            s.shuffle = shuffle;
            s.repeat = repeat;
        }
    }
}

struct RootIface {
    tx: Sender<ControlCmd>,
}

#[interface(name = "org.mpris.MediaPlayer2")]
impl RootIface {
    fn raise(&self) {
        // No-op for TUI.
    }

    fn quit(&self) {
        let _ = self.tx.send(ControlCmd::Quit);
    }

    #[zbus(property)]
    fn can_quit(&self) -> bool {
        true
    }

    #[zbus(property)]
    fn can_raise(&self) -> bool {
        false
    }

    #[zbus(property)]
    fn has_track_list(&self) -> bool {
        false
    }

    #[zbus(property)]
    fn identity(&self) -> &str {
        "vivace"
    }

    #[zbus(property)]
    fn supported_uri_schemes(&self) -> Vec<String> {
        vec![]
    }

    #[zbus(property)]
    fn supported_mime_types(&self) -> Vec<String> {
        vec![]
    }
}

struct PlayerIface {
    tx: Sender<ControlCmd>,
    state: Arc<Mutex<SharedState>>,
}

#[interface(name = "org.mpris.MediaPlayer2.Player")]
impl PlayerIface {
    fn next(&self) {
        let _ = self.tx.send(ControlCmd::Next);
    }

    fn previous(&self) {
        let _ = self.tx.send(ControlCmd::Prev);
    }

    fn play(&self) {
        let _ = self.tx.send(ControlCmd::Play);
    }

    fn pause(&self) {
        let _ = self.tx.send(ControlCmd::Pause);
    }

    fn play_pause(&self) {
        let _ = self.tx.send(ControlCmd::PlayPause);
    }

    fn stop(&self) {
        let _ = self.tx.send(ControlCmd::Pause);
    }

    #[zbus(property)]
    fn playback_status(&self) -> &str {
        let Ok(s) = self.state.lock() else {
            return "Paused";
        };
        match s.mode {
            Mode::Playing => "Playing",
            // No engine binding exists mid-transition; report Paused.
            Mode::Paused | Mode::Transitioning => "Paused",
        }
    }

    #[zbus(property)]
    fn shuffle(&self) -> bool {
        self.state.lock().map(|s| s.shuffle).unwrap_or(false)
    }

    #[zbus(property)]
    fn loop_status(&self) -> &str {
        let repeat = self.state.lock().map(|s| s.repeat).unwrap_or(false);
        if repeat { "Track" } else { "None" }
    }

    #[zbus(property)]
    fn can_control(&self) -> bool {
        true
    }

    #[zbus(property)]
    fn can_play(&self) -> bool {
        true
    }

    #[zbus(property)]
    fn can_pause(&self) -> bool {
        true
    }

    #[zbus(property)]
    fn can_go_next(&self) -> bool {
        true
    }

    #[zbus(property)]
    fn can_go_previous(&self) -> bool {
        true
    }

    #[zbus(property)]
    fn metadata(&self) -> HashMap<String, OwnedValue> {
        // Minimal metadata so `playerctl metadata` shows something.
        let mut map = HashMap::new();

        let Ok(s) = self.state.lock() else {
            return map;
        };

        let title = s.title.clone().unwrap_or_default();
        if let Ok(v) = OwnedValue::try_from(Value::from(title)) {
            map.insert("xesam:title".to_string(), v);
        }
        if !s.artist.is_empty() {
            if let Ok(v) = OwnedValue::try_from(Value::from(s.artist.clone())) {
                map.insert("xesam:artist".to_string(), v);
            }
        }
        if let Some(album) = s.album.clone() {
            if let Ok(v) = OwnedValue::try_from(Value::from(album)) {
                map.insert("xesam:album".to_string(), v);
            }
        }
        if let Some(art) = s.art_url.clone() {
            if let Ok(v) = OwnedValue::try_from(Value::from(art)) {
                map.insert("mpris:artUrl".to_string(), v);
            }
        }

        map
    }
}

pub fn spawn_mpris(tx: Sender<ControlCmd>) -> MprisHandle {
    let state = Arc::new(Mutex::new(SharedState::default()));

    let state_for_thread = state.clone();
    std::thread::spawn(move || {
        block_on(async move {
            let path = "/org/mpris/MediaPlayer2";

            let connection = match Connection::session().await {
                Ok(c) => c,
                Err(e) => {
                    eprintln!("MPRIS: failed to connect to session bus: {e}");
                    return;
                }
            };

            if let Err(e) = connection
                .request_name("org.mpris.MediaPlayer2.vivace")
                .await
            {
                eprintln!("MPRIS: failed to acquire name: {e}");
                return;
            }

            let object_server = connection.object_server();

            if let Err(e) = object_server.at(path, RootIface { tx: tx.clone() }).await {
                eprintln!("MPRIS: failed to register root iface: {e}");
                return;
            }

            if let Err(e) = object_server
                .at(
                    path,
                    PlayerIface {
                        tx,
                        state: state_for_thread,
                    },
                )
                .await
            {
                eprintln!("MPRIS: failed to register player iface: {e}");
                return;
            }

            // Keep the service alive.
            loop {
                Timer::after(std::time::Duration::from_secs(3600)).await;
            }
        });
    });

    MprisHandle { state }
}

#[cfg(test)]
mod tests;
