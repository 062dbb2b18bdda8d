use super::*;
use crate::engine::EngineCmd;
use crate::library::Track;
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver};

fn t(title: &str) -> Track {
    Track {
        source: PathBuf::from(format!("/tmp/{title}.mp3")),
        title: title.into(),
        artist: None,
        album: None,
        art: None,
        duration: None,
        display: title.into(),
    }
}

/// A player over `n` tracks plus the receiving end of its engine
/// channel, so tests can assert on the command stream.
fn player(n: usize) -> (Player, Receiver<EngineCmd>) {
    let (tx, rx) = mpsc::channel::<EngineCmd>();
    let tracks = (0..n).map(|i| t(&format!("track-{i}"))).collect();
    (Player::new(tracks, tx), rx)
}

fn drain(rx: &Receiver<EngineCmd>) -> Vec<EngineCmd> {
    let mut cmds = Vec::new();
    while let Ok(cmd) = rx.try_recv() {
        cmds.push(cmd);
    }
    cmds
}

#[test]
fn new_player_starts_paused_on_track_zero_and_binds_it() {
    let (p, rx) = player(3);

    assert!(p.paused);
    assert_eq!(p.total_length, UNKNOWN_LENGTH);
    assert_eq!(p.current_position, 0);
    assert_eq!(p.selected, 0);
    assert!(!p.repeat_on);
    assert!(!p.shuffle_on);
    assert!(!p.transitioning());
    assert_eq!(p.mode(), Mode::Paused);

    let cmds = drain(&rx);
    assert!(matches!(cmds.as_slice(), [EngineCmd::Bind { generation: 0, source }]
        if source == &p.tracks[0].source));
}

#[test]
fn go_back_near_start_moves_to_previous_track_after_deferred_step() {
    let (mut p, _rx) = player(3);
    p.selected = 1;
    p.current_position = 5;
    p.report_duration(p.generation(), 180.0);

    p.go_back();
    assert!(p.transitioning());
    assert_eq!(p.mode(), Mode::Transitioning);
    // Nothing moved yet; the index changes in the deferred step.
    assert_eq!(p.selected, 1);

    p.resolve_pending();
    assert_eq!(p.selected, 0);
    assert_eq!(p.current_position, 0);
    assert_eq!(p.total_length, UNKNOWN_LENGTH);
    assert!(!p.paused);
    assert!(!p.transitioning());
}

#[test]
fn go_back_later_in_the_track_restarts_it() {
    let (mut p, rx) = player(3);
    p.selected = 1;
    p.current_position = 42;
    p.paused = false;
    drain(&rx);

    p.go_back();

    assert_eq!(p.selected, 1);
    assert_eq!(p.current_position, 0);
    assert!(!p.paused);
    assert!(!p.transitioning());

    // Restart is a plain rewind; no unbind, no rebind.
    let cmds = drain(&rx);
    assert!(matches!(cmds.as_slice(), [EngineCmd::Seek { secs: 0 }]));
}

#[test]
fn go_back_on_first_track_restarts_even_near_the_start() {
    let (mut p, _rx) = player(3);
    p.current_position = 5;

    p.go_back();

    assert_eq!(p.selected, 0);
    assert_eq!(p.current_position, 0);
    assert!(!p.transitioning());
}

#[test]
fn restart_keeps_the_pause_state() {
    let (mut p, _rx) = player(2);
    p.current_position = 30;
    assert!(p.paused);

    p.go_back();
    assert!(p.paused);
}

#[test]
fn go_forward_on_last_track_is_a_noop() {
    let (mut p, rx) = player(3);
    p.selected = 2;
    p.current_position = 17;
    p.total_length = 100;
    drain(&rx);

    p.go_forward();

    assert_eq!(p.selected, 2);
    assert_eq!(p.current_position, 17);
    assert_eq!(p.total_length, 100);
    assert!(p.paused);
    assert!(!p.transitioning());
    assert!(drain(&rx).is_empty());
}

#[test]
fn go_forward_moves_to_next_track_after_deferred_step() {
    let (mut p, _rx) = player(3);
    p.current_position = 90;
    p.report_duration(p.generation(), 120.0);

    p.go_forward();
    assert!(p.transitioning());

    p.resolve_pending();
    assert_eq!(p.selected, 1);
    assert_eq!(p.current_position, 0);
    assert_eq!(p.total_length, UNKNOWN_LENGTH);
    assert!(!p.paused);
    assert!(!p.transitioning());
}

#[test]
fn track_change_issues_seek_unbind_then_bind_play_under_new_generation() {
    let (mut p, rx) = player(3);
    drain(&rx);

    p.go_forward();
    let cmds = drain(&rx);
    assert!(matches!(
        cmds.as_slice(),
        [EngineCmd::Seek { secs: 0 }, EngineCmd::Unbind]
    ));

    p.resolve_pending();
    let cmds = drain(&rx);
    assert!(matches!(cmds.as_slice(), [EngineCmd::Bind { generation: 1, source }, EngineCmd::Play]
        if source == &p.tracks[1].source));
    assert_eq!(p.generation(), 1);
}

#[test]
fn transition_requests_are_ignored_while_one_is_pending() {
    let (mut p, _rx) = player(5);
    p.selected = 2;

    p.go_forward();
    // A second request before the deferred step resolves must not stack.
    p.go_forward();
    p.go_back();

    p.resolve_pending();
    assert_eq!(p.selected, 3);

    // The guard is down again afterwards.
    p.go_forward();
    p.resolve_pending();
    assert_eq!(p.selected, 4);
}

#[test]
fn seek_rounds_to_nearest_second_and_resumes() {
    let (mut p, rx) = player(1);
    drain(&rx);

    p.seek_to(12.4);
    assert_eq!(p.current_position, 12);
    assert!(!p.paused);

    let cmds = drain(&rx);
    assert!(matches!(
        cmds.as_slice(),
        [EngineCmd::Seek { secs: 12 }, EngineCmd::Play]
    ));

    p.seek_to(12.5);
    assert_eq!(p.current_position, 13);

    p.seek_to(-3.0);
    assert_eq!(p.current_position, 0);
}

#[test]
fn seek_is_ignored_while_transitioning() {
    let (mut p, rx) = player(2);
    p.go_forward();
    drain(&rx);

    p.seek_to(30.0);
    assert_eq!(p.current_position, 0);
    assert!(drain(&rx).is_empty());
}

#[test]
fn duration_reports_are_ignored_mid_transition_then_honored() {
    let (mut p, _rx) = player(2);
    let old_gen = p.generation();

    p.go_forward();
    p.report_duration(old_gen, 300.0);
    assert_eq!(p.total_length, UNKNOWN_LENGTH);

    p.resolve_pending();
    p.report_duration(p.generation(), 300.9);
    assert_eq!(p.total_length, 300);
}

#[test]
fn stale_generation_reports_are_discarded() {
    let (mut p, _rx) = player(2);
    p.go_forward();
    p.resolve_pending();
    assert_eq!(p.generation(), 1);

    // Callbacks from the superseded binding must not corrupt the new track.
    p.report_duration(0, 500.0);
    p.report_progress(0, 250.0);
    p.report_error(0, "old binding exploded".into());
    assert_eq!(p.total_length, UNKNOWN_LENGTH);
    assert_eq!(p.current_position, 0);
    assert!(p.last_error.is_none());

    p.report_progress(1, 7.8);
    assert_eq!(p.current_position, 7);
}

#[test]
fn progress_reports_floor_to_whole_seconds() {
    let (mut p, _rx) = player(1);
    p.report_progress(p.generation(), 59.99);
    assert_eq!(p.current_position, 59);
}

#[test]
fn play_pause_requests_flip_state_and_reach_the_engine() {
    let (mut p, rx) = player(1);
    drain(&rx);

    p.request_play();
    assert!(!p.paused);
    assert_eq!(p.mode(), Mode::Playing);

    p.request_pause();
    assert!(p.paused);
    assert_eq!(p.mode(), Mode::Paused);

    let cmds = drain(&rx);
    assert!(matches!(cmds.as_slice(), [EngineCmd::Play, EngineCmd::Pause]));
}

#[test]
fn repeat_and_shuffle_toggles_touch_nothing_else() {
    let (mut p, rx) = player(2);
    drain(&rx);

    p.toggle_repeat();
    p.toggle_shuffle();
    assert!(p.repeat_on);
    assert!(p.shuffle_on);
    assert_eq!(p.selected, 0);
    assert_eq!(p.current_position, 0);
    assert!(p.paused);
    assert!(drain(&rx).is_empty());

    p.toggle_repeat();
    p.toggle_shuffle();
    assert!(!p.repeat_on);
    assert!(!p.shuffle_on);
}

#[test]
fn end_report_changes_nothing() {
    let (mut p, rx) = player(1);
    drain(&rx);

    p.report_end(p.generation());
    assert!(p.paused);
    assert_eq!(p.selected, 0);
    assert!(drain(&rx).is_empty());
}

#[test]
fn current_generation_error_is_surfaced_for_the_status_line() {
    let (mut p, _rx) = player(1);
    p.report_error(p.generation(), "failed to decode /tmp/track-0.mp3".into());
    assert_eq!(
        p.last_error.as_deref(),
        Some("failed to decode /tmp/track-0.mp3")
    );
    // Errors never alter the playback state machine.
    assert!(p.paused);
    assert!(!p.transitioning());
}

#[test]
fn scenario_back_from_second_track_early_lands_on_first() {
    let (mut p, _rx) = player(3);
    p.selected = 1;
    p.current_position = 5;

    p.go_back();
    p.resolve_pending();

    assert_eq!(p.selected, 0);
    assert_eq!(p.current_position, 0);
    assert_eq!(p.total_length, UNKNOWN_LENGTH);
    assert!(!p.paused);
}

#[test]
fn scenario_back_from_second_track_late_restarts_it() {
    let (mut p, _rx) = player(3);
    p.selected = 1;
    p.current_position = 42;

    p.go_back();
    p.resolve_pending();

    assert_eq!(p.selected, 1);
    assert_eq!(p.current_position, 0);
}

#[test]
fn scenario_forward_from_last_of_three_changes_nothing() {
    let (mut p, rx) = player(3);
    p.selected = 2;
    p.current_position = 3;
    drain(&rx);

    p.go_forward();
    p.resolve_pending();

    assert_eq!(p.selected, 2);
    assert_eq!(p.current_position, 3);
    assert!(drain(&rx).is_empty());
}
