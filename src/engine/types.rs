//! Engine command and event types.

use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug)]
pub enum EngineCmd {
    /// Bind a fresh source under the given generation. Replaces any
    /// existing binding; the new binding starts paused at position 0.
    Bind { generation: u64, source: PathBuf },
    /// Resume the current binding.
    Play,
    /// Pause the current binding.
    Pause,
    /// Move the playback cursor of the current binding.
    Seek { secs: u64 },
    /// Drop the current binding, leaving the engine unmounted.
    Unbind,
    /// Quit the engine thread.
    Quit,
}

#[derive(Debug, Clone)]
pub enum EngineEvent {
    /// Sent once after a successful bind, when the duration is known.
    Loaded { generation: u64, duration: Duration },
    /// Periodic playback progress while the binding is playing.
    Progress { generation: u64, elapsed: Duration },
    /// The bound source drained. Sent at most once per binding.
    Ended { generation: u64 },
    /// Bind or seek failed; the binding was dropped.
    Error { generation: u64, message: String },
}
