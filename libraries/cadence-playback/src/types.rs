//! Core types for playback state

use serde::{Deserialize, Serialize};

/// A playable item
///
/// `id` is the equality key for every queue operation. All other fields are
/// display data or opaque references resolved by external collaborators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    /// Unique track identifier
    pub id: String,

    /// Track title
    pub title: String,

    /// Artist name
    pub artist: String,

    /// Album name
    #[serde(default)]
    pub album: String,

    /// Artwork reference, resolved by the rendering layer
    #[serde(default)]
    pub cover_url: String,

    /// Length in whole seconds
    #[serde(default)]
    pub duration: u32,

    /// Media resource reference, opaque to the store
    #[serde(default)]
    pub url: String,
}

impl Track {
    /// Create a track with only identity and display names set
    pub fn new(id: impl Into<String>, title: impl Into<String>, artist: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            artist: artist.into(),
            album: String::new(),
            cover_url: String::new(),
            duration: 0,
            url: String::new(),
        }
    }

    pub fn with_album(mut self, album: impl Into<String>) -> Self {
        self.album = album.into();
        self
    }

    pub fn with_cover_url(mut self, cover_url: impl Into<String>) -> Self {
        self.cover_url = cover_url.into();
        self
    }

    pub fn with_duration(mut self, seconds: u32) -> Self {
        self.duration = seconds;
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Duration rendered as `m:ss`
    pub fn formatted_duration(&self) -> String {
        format_time(f64::from(self.duration))
    }
}

/// Render seconds as `m:ss`
///
/// Fractional seconds are truncated. Negative or non-finite input renders
/// as `0:00`.
pub fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() || seconds <= 0.0 {
        return "0:00".to_string();
    }

    let total = seconds.floor() as u64;
    format!("{}:{:02}", total / 60, total % 60)
}

/// Owned copy of the store's state
///
/// Handed to renderers that must not hold a borrow of the store (or its lock)
/// while drawing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaybackSnapshot {
    pub current_track: Option<Track>,
    pub is_playing: bool,
    pub queue: Vec<Track>,
}

/// Configuration for the playback store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaybackConfig {
    /// Maximum number of undrained events kept (default: 256)
    ///
    /// Oldest events are discarded first.
    pub event_capacity: usize,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            event_capacity: 256,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = PlaybackConfig::default();
        assert_eq!(config.event_capacity, 256);
    }

    #[test]
    fn track_builder() {
        let track = Track::new("1", "Midnight Reverie", "Luna Eclipse")
            .with_album("Ethereal Nights")
            .with_duration(247)
            .with_url("https://cdn.example/1.mp3");

        assert_eq!(track.id, "1");
        assert_eq!(track.album, "Ethereal Nights");
        assert_eq!(track.duration, 247);
        assert!(track.cover_url.is_empty());
    }

    #[test]
    fn format_time_pads_seconds() {
        assert_eq!(format_time(0.0), "0:00");
        assert_eq!(format_time(9.0), "0:09");
        assert_eq!(format_time(247.0), "4:07");
        assert_eq!(format_time(3600.0), "60:00");
    }

    #[test]
    fn format_time_truncates_fraction() {
        assert_eq!(format_time(86.45), "1:26");
        assert_eq!(format_time(59.999), "0:59");
    }

    #[test]
    fn format_time_rejects_garbage() {
        assert_eq!(format_time(-5.0), "0:00");
        assert_eq!(format_time(f64::NAN), "0:00");
        assert_eq!(format_time(f64::INFINITY), "0:00");
    }

    #[test]
    fn track_serializes_camel_case() {
        let track = Track::new("1", "T", "A").with_cover_url("cover.jpg");
        let json = serde_json::to_value(&track).unwrap();
        assert_eq!(json["coverUrl"], "cover.jpg");
    }

    #[test]
    fn track_deserializes_with_missing_optional_fields() {
        let track: Track =
            serde_json::from_str(r#"{"id":"7","title":"Future Frequencies","artist":"Tomorrow's Sound"}"#)
                .unwrap();
        assert_eq!(track.id, "7");
        assert_eq!(track.duration, 0);
        assert!(track.url.is_empty());
    }
}
