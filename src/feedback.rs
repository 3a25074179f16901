//! Audio feedback port.
//!
//! The simulation announces `Cue`s through a `FeedbackSink` and never waits
//! for, or reacts to, the outcome.  A failed cue is logged and dropped.

use std::fmt;
use std::io::{self, Write};
use std::sync::mpsc;
use std::thread;

use tracing::{debug, warn};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cue {
    Shoot,
    Hit,
}

#[derive(Debug)]
pub enum FeedbackError {
    /// The playback worker has gone away.
    Disconnected,
    Io(io::Error),
}

impl fmt::Display for FeedbackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Disconnected => write!(f, "feedback worker disconnected"),
            Self::Io(e) => write!(f, "feedback i/o error: {e}"),
        }
    }
}

impl std::error::Error for FeedbackError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Disconnected => None,
            Self::Io(e) => Some(e),
        }
    }
}

impl From<io::Error> for FeedbackError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

/// Anything that can play a cue.  Implementations must not block.
pub trait FeedbackSink {
    fn play(&mut self, cue: Cue) -> Result<(), FeedbackError>;
}

impl<S: FeedbackSink + ?Sized> FeedbackSink for Box<S> {
    fn play(&mut self, cue: Cue) -> Result<(), FeedbackError> {
        (**self).play(cue)
    }
}

/// Fire a cue and swallow any failure.
pub fn trigger(sink: &mut dyn FeedbackSink, cue: Cue) {
    if let Err(error) = sink.play(cue) {
        warn!(?cue, %error, "feedback cue dropped");
    }
}

// ── Sinks ─────────────────────────────────────────────────────────────────────

/// Plays nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct Silent;

impl FeedbackSink for Silent {
    fn play(&mut self, _cue: Cue) -> Result<(), FeedbackError> {
        Ok(())
    }
}

/// Remembers every cue it receives.  Handy for tests and replays.
#[derive(Clone, Debug, Default)]
pub struct Recorder {
    pub cues: Vec<Cue>,
}

impl FeedbackSink for Recorder {
    fn play(&mut self, cue: Cue) -> Result<(), FeedbackError> {
        self.cues.push(cue);
        Ok(())
    }
}

/// Hands cues to a background thread that rings the terminal bell, so the
/// frame loop never waits on the terminal.
pub struct QueuedBell {
    tx: mpsc::Sender<Cue>,
}

impl QueuedBell {
    /// Spawn the bell worker writing to stderr.
    pub fn spawn() -> Self {
        Self::spawn_with(io::stderr())
    }

    /// Spawn the bell worker writing to an arbitrary sink.
    pub fn spawn_with<W: Write + Send + 'static>(mut out: W) -> Self {
        let (tx, rx) = mpsc::channel::<Cue>();
        thread::spawn(move || {
            // Exits once every sender has been dropped.
            for cue in rx {
                let rung = out.write_all(b"\x07").and_then(|_| out.flush());
                match rung {
                    Ok(()) => debug!(?cue, "bell"),
                    Err(error) => warn!(?cue, %error, "bell failed"),
                }
            }
        });
        Self { tx }
    }
}

impl FeedbackSink for QueuedBell {
    fn play(&mut self, cue: Cue) -> Result<(), FeedbackError> {
        self.tx.send(cue).map_err(|_| FeedbackError::Disconnected)
    }
}
