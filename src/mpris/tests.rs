use super::*;
use std::path::PathBuf;
use std::sync::mpsc;

fn make_track() -> Track {
    Track {
        source: PathBuf::from("/tmp/music/test.mp3"),
        title: "Test Title".to_string(),
        artist: Some("Test Artist".to_string()),
        album: Some("Test Album".to_string()),
        art: Some("https://example.com/cover.jpg".to_string()),
        duration: None,
        display: "Test Artist - Test Title".to_string(),
    }
}

#[test]
fn set_track_metadata_sets_and_clears_shared_state() {
    let state = Arc::new(Mutex::new(SharedState::default()));
    let handle = MprisHandle {
        state: state.clone(),
    };

    let track = make_track();
    handle.set_track_metadata(Some(&track));

    {
        let s = state.lock().unwrap();
        assert_eq!(s.title.as_deref(), Some("Test Title"));
        assert_eq!(s.artist, vec!["Test Artist".to_string()]);
        assert_eq!(s.album.as_deref(), Some("Test Album"));
        assert_eq!(s.art_url.as_deref(), Some("https://example.com/cover.jpg"));
    }

    handle.set_track_metadata(None);
    {
        let s = state.lock().unwrap();
        assert_eq!(s.title, None);
        assert!(s.artist.is_empty());
        assert_eq!(s.album, None);
        assert_eq!(s.art_url, None);
    }
}

#[test]
fn playback_status_maps_modes_to_mpris_strings() {
    let state = Arc::new(Mutex::new(SharedState::default()));
    let (tx, _rx) = mpsc::channel::<ControlCmd>();
    let iface = PlayerIface {
        tx,
        state: state.clone(),
    };

    let handle = MprisHandle {
        state: state.clone(),
    };

    assert_eq!(iface.playback_status(), "Paused");

    handle.set_mode(Mode::Playing);
    assert_eq!(iface.playback_status(), "Playing");

    handle.set_mode(Mode::Transitioning);
    assert_eq!(iface.playback_status(), "Paused");
}

#[test]
fn toggles_map_to_shuffle_and_loop_status() {
    let state = Arc::new(Mutex::new(SharedState::default()));
    let (tx, _rx) = mpsc::channel::<ControlCmd>();
    let iface = PlayerIface {
        tx,
        state: state.clone(),
    };
    let handle = MprisHandle {
        state: state.clone(),
    };

    assert!(!iface.shuffle());
    assert_eq!(iface.loop_status(), "None");

    handle.set_toggles(true, true);
    assert!(iface.shuffle());
    assert_eq!(iface.loop_status(), "Track");
}

#[test]
fn transport_methods_forward_control_commands() {
    let state = Arc::new(Mutex::new(SharedState::default()));
    let (tx, rx) = mpsc::channel::<ControlCmd>();
    let iface = PlayerIface { tx, state };

    iface.next();
    iface.previous();
    iface.play_pause();

    assert!(matches!(rx.try_recv(), Ok(ControlCmd::Next)));
    assert!(matches!(rx.try_recv(), Ok(ControlCmd::Prev)));
    assert!(matches!(rx.try_recv(), Ok(ControlCmd::PlayPause)));
}
