//! Full-screen player controls
//!
//! Local widget state. None of it reaches the playback store: shuffle and
//! repeat are display toggles only, and seek/volume positions stay here.

use cadence_playback::format_time;

#[derive(Debug, Clone, PartialEq)]
pub struct PlayerControls {
    pub shuffle: bool,
    pub repeat: bool,
    pub favorite: bool,
    progress: f64,
    volume: f64,
}

impl PlayerControls {
    pub fn new() -> Self {
        Self {
            shuffle: false,
            repeat: false,
            favorite: false,
            progress: 0.0,
            volume: 0.8,
        }
    }

    pub fn toggle_shuffle(&mut self) -> bool {
        self.shuffle = !self.shuffle;
        self.shuffle
    }

    pub fn toggle_repeat(&mut self) -> bool {
        self.repeat = !self.repeat;
        self.repeat
    }

    pub fn toggle_favorite(&mut self) -> bool {
        self.favorite = !self.favorite;
        self.favorite
    }

    /// Seek position as a fraction of the track
    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Set seek position, clamped to `0.0..=1.0`; NaN is ignored
    pub fn set_progress(&mut self, value: f64) {
        if let Some(value) = clamp_fraction(value) {
            self.progress = value;
        }
    }

    pub fn volume(&self) -> f64 {
        self.volume
    }

    /// Set volume, clamped to `0.0..=1.0`; NaN is ignored
    pub fn set_volume(&mut self, value: f64) {
        if let Some(value) = clamp_fraction(value) {
            self.volume = value;
        }
    }

    /// Seek target for a track of `duration` seconds, as `m:ss`
    pub fn seek_label(&self, duration: u32) -> String {
        format_time(f64::from(duration) * self.progress)
    }

    pub fn volume_percent(&self) -> u8 {
        (self.volume * 100.0).round() as u8
    }
}

impl Default for PlayerControls {
    fn default() -> Self {
        Self::new()
    }
}

fn clamp_fraction(value: f64) -> Option<f64> {
    if value.is_nan() {
        None
    } else {
        Some(value.clamp(0.0, 1.0))
    }
}
