use std::path::PathBuf;
use std::sync::mpsc::{Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use lofty::prelude::*;
use rodio::{OutputStreamBuilder, Sink};

use super::sink::create_sink_at;
use super::types::{EngineCmd, EngineEvent};

/// One bound source: the sink playing it and the generation it was
/// bound under. Events for this binding carry `generation`.
struct Binding {
    generation: u64,
    source: PathBuf,
    sink: Sink,
    /// Set once the sink drained and `Ended` was emitted.
    ended: bool,
}

/// Current playback position: time accumulated across pauses/seeks plus
/// the stretch since the last resume.
pub(super) fn elapsed_now(accumulated: Duration, started_at: Option<Instant>) -> Duration {
    accumulated + started_at.map_or(Duration::ZERO, |st| st.elapsed())
}

pub(super) fn spawn_engine_thread(
    rx: Receiver<EngineCmd>,
    events: Sender<EngineEvent>,
) -> JoinHandle<()> {
    thread::spawn(move || {
        let mut stream =
            OutputStreamBuilder::open_default_stream().expect("ERR: No audio output device");
        // rodio logs to stderr when OutputStream is dropped. That's useful in debugging,
        // but noisy for a TUI app.
        stream.log_on_drop(false);

        let mut binding: Option<Binding> = None;
        let mut paused = true;

        // Position bookkeeping: start time of the current play stretch
        // and time accumulated before it.
        let mut started_at: Option<Instant> = None;
        let mut accumulated = Duration::ZERO;

        loop {
            match rx.recv_timeout(Duration::from_millis(200)) {
                Ok(cmd) => match cmd {
                    EngineCmd::Bind { generation, source } => {
                        if let Some(b) = binding.take() {
                            b.sink.stop();
                        }
                        paused = true;
                        started_at = None;
                        accumulated = Duration::ZERO;

                        match create_sink_at(&stream, &source, Duration::ZERO) {
                            Ok(sink) => {
                                // Duration comes from the container metadata,
                                // reported the moment the source is bound.
                                if let Ok(tagged) = lofty::read_from_path(&source) {
                                    let _ = events.send(EngineEvent::Loaded {
                                        generation,
                                        duration: tagged.properties().duration(),
                                    });
                                }
                                binding = Some(Binding {
                                    generation,
                                    source,
                                    sink,
                                    ended: false,
                                });
                            }
                            Err(message) => {
                                let _ = events.send(EngineEvent::Error { generation, message });
                            }
                        }
                    }

                    EngineCmd::Play => {
                        if let Some(ref b) = binding {
                            b.sink.play();
                            if paused {
                                started_at = Some(Instant::now());
                                paused = false;
                            }
                        }
                    }

                    EngineCmd::Pause => {
                        if let Some(ref b) = binding {
                            b.sink.pause();
                            if !paused {
                                if let Some(st) = started_at {
                                    accumulated += Instant::now() - st;
                                }
                                started_at = None;
                                paused = true;
                            }
                        }
                    }

                    EngineCmd::Seek { secs } => {
                        // Rebuild the sink and skip into the file, preserving
                        // the pause state (the controller follows up with Play
                        // when a seek should also resume).
                        let Some(b) = binding.take() else {
                            continue;
                        };
                        b.sink.stop();

                        let target = Duration::from_secs(secs);
                        match create_sink_at(&stream, &b.source, target) {
                            Ok(new_sink) => {
                                if paused {
                                    started_at = None;
                                } else {
                                    new_sink.play();
                                    started_at = Some(Instant::now());
                                }
                                accumulated = target;
                                let _ = events.send(EngineEvent::Progress {
                                    generation: b.generation,
                                    elapsed: target,
                                });
                                binding = Some(Binding {
                                    generation: b.generation,
                                    source: b.source,
                                    sink: new_sink,
                                    ended: false,
                                });
                            }
                            Err(message) => {
                                let _ = events.send(EngineEvent::Error { generation: b.generation, message });
                                paused = true;
                                started_at = None;
                                accumulated = Duration::ZERO;
                            }
                        }
                    }

                    EngineCmd::Unbind => {
                        if let Some(b) = binding.take() {
                            b.sink.stop();
                        }
                        paused = true;
                        started_at = None;
                        accumulated = Duration::ZERO;
                    }

                    EngineCmd::Quit => {
                        if let Some(b) = binding.take() {
                            b.sink.stop();
                        }
                        break;
                    }
                },
                Err(RecvTimeoutError::Timeout) => {
                    // Periodic tick: report progress, or the drained sink.
                    if let Some(ref mut b) = binding {
                        if !paused {
                            if b.sink.empty() {
                                if !b.ended {
                                    b.ended = true;
                                    let _ = events.send(EngineEvent::Ended { generation: b.generation });
                                }
                            } else {
                                let _ = events.send(EngineEvent::Progress {
                                    generation: b.generation,
                                    elapsed: elapsed_now(accumulated, started_at),
                                });
                            }
                        }
                    }
                    continue;
                }
                Err(RecvTimeoutError::Disconnected) => break,
            }
        }
    })
}
