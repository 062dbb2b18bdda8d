use std::sync::Mutex;
use std::sync::mpsc::{self, Sender};
use std::thread::JoinHandle;

use super::thread::spawn_engine_thread;
use super::types::{EngineCmd, EngineEvent};

/// Handle to the engine thread: owns the command channel and the join
/// handle for a clean shutdown.
pub struct Engine {
    tx: Sender<EngineCmd>,
    join: Mutex<Option<JoinHandle<()>>>,
}

impl Engine {
    /// Spawn the engine thread. Events are delivered on `events`.
    pub fn spawn(events: Sender<EngineEvent>) -> Self {
        let (tx, rx) = mpsc::channel::<EngineCmd>();
        let join = spawn_engine_thread(rx, events);

        Self {
            tx,
            join: Mutex::new(Some(join)),
        }
    }

    /// A cloned command sender, handed to the player so it can drive
    /// the engine directly.
    pub fn sender(&self) -> Sender<EngineCmd> {
        self.tx.clone()
    }

    pub fn send(&self, cmd: EngineCmd) -> Result<(), mpsc::SendError<EngineCmd>> {
        self.tx.send(cmd)
    }

    /// Stop playback and join the engine thread.
    pub fn quit(&self) {
        let _ = self.send(EngineCmd::Quit);

        if let Ok(mut j) = self.join.lock() {
            if let Some(h) = j.take() {
                let _ = h.join();
            }
        }
    }
}
