//! Audio engine stand-in
//!
//! Logs each instruction the store issues. Swap for a real engine to make
//! sound.

use cadence_playback::{AudioEngine, Result, Track};

#[derive(Debug, Default)]
pub struct LoggingEngine {
    loaded: Option<String>,
}

impl LoggingEngine {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AudioEngine for LoggingEngine {
    fn load(&mut self, track: &Track) -> Result<()> {
        tracing::info!(track_id = %track.id, url = %track.url, "Engine: load and play");
        self.loaded = Some(track.id.clone());
        Ok(())
    }

    fn pause(&mut self) -> Result<()> {
        tracing::info!(loaded = ?self.loaded, "Engine: pause");
        Ok(())
    }

    fn resume(&mut self) -> Result<()> {
        if self.loaded.is_none() {
            tracing::debug!("Engine: resume with nothing loaded, staying silent");
            return Ok(());
        }
        tracing::info!(loaded = ?self.loaded, "Engine: resume");
        Ok(())
    }
}
