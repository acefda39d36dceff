//! Audio engine seam
//!
//! The store records playback intent; an engine turns it into sound.

use crate::error::Result;
use crate::types::Track;

/// Platform-specific audio engine
///
/// The store calls these methods after it has updated its own state. An
/// error never rolls that state back: the store logs it and publishes
/// [`PlaybackEvent::EngineFailed`](crate::PlaybackEvent::EngineFailed), and
/// the rendering layer decides what to show.
///
/// There is no feedback channel from the engine into the store. Progress,
/// buffering and end-of-track are the engine's business.
pub trait AudioEngine: Send {
    /// Begin loading and playing `track.url`
    fn load(&mut self, track: &Track) -> Result<()>;

    /// Pause physical playback
    ///
    /// Called even when nothing is loaded.
    fn pause(&mut self) -> Result<()>;

    /// Resume physical playback
    ///
    /// Called even when nothing is loaded; the engine decides whether there
    /// is anything to resume.
    fn resume(&mut self) -> Result<()>;
}

/// Engine that accepts every instruction and does nothing
#[derive(Debug, Default, Clone, Copy)]
pub struct NullEngine;

impl AudioEngine for NullEngine {
    fn load(&mut self, _track: &Track) -> Result<()> {
        Ok(())
    }

    fn pause(&mut self) -> Result<()> {
        Ok(())
    }

    fn resume(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Engine that records every instruction, for tests
#[cfg(test)]
pub(crate) mod recording {
    use super::AudioEngine;
    use crate::error::{PlaybackError, Result};
    use crate::types::Track;
    use std::sync::{Arc, Mutex};

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum Call {
        Load(String),
        Pause,
        Resume,
    }

    #[derive(Debug, Clone, Default)]
    pub struct RecordingEngine {
        pub calls: Arc<Mutex<Vec<Call>>>,
        pub fail: bool,
    }

    impl RecordingEngine {
        fn record(&self, call: Call) -> Result<()> {
            self.calls.lock().unwrap().push(call);
            if self.fail {
                Err(PlaybackError::Engine("device unavailable".to_string()))
            } else {
                Ok(())
            }
        }
    }

    impl AudioEngine for RecordingEngine {
        fn load(&mut self, track: &Track) -> Result<()> {
            self.record(Call::Load(track.id.clone()))
        }

        fn pause(&mut self) -> Result<()> {
            self.record(Call::Pause)
        }

        fn resume(&mut self) -> Result<()> {
            self.record(Call::Resume)
        }
    }
}
