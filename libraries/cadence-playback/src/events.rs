//! Playback Events
//!
//! Publish-on-change notifications for renderers. Consumers may also just
//! re-read the store after each call; events exist so a UI can react to
//! exactly what changed.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Events emitted by the playback store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum PlaybackEvent {
    /// The play/pause flag flipped
    StateChanged {
        /// New value of the flag
        is_playing: bool,
    },

    /// A track was handed to the engine
    ///
    /// Emitted for every `play_track`, including replaying the current track.
    TrackChanged {
        /// ID of the new current track
        track_id: String,
        /// ID of the track it replaced (if any)
        previous_track_id: Option<String>,
    },

    /// Queue content changed
    QueueChanged {
        /// New queue length
        length: usize,
    },

    /// The audio engine rejected an instruction
    EngineFailed {
        /// Error message
        message: String,
    },
}

/// Bounded buffer of undrained events
///
/// Oldest events are dropped once `capacity` is reached.
#[derive(Debug, Clone)]
pub(crate) struct EventBuffer {
    events: VecDeque<PlaybackEvent>,
    capacity: usize,
}

impl EventBuffer {
    pub(crate) fn new(capacity: usize) -> Self {
        Self {
            events: VecDeque::with_capacity(capacity.min(64)),
            capacity,
        }
    }

    pub(crate) fn push(&mut self, event: PlaybackEvent) {
        if self.capacity == 0 {
            return;
        }
        if self.events.len() >= self.capacity {
            self.events.pop_front();
        }
        self.events.push_back(event);
    }

    pub(crate) fn drain(&mut self) -> Vec<PlaybackEvent> {
        self.events.drain(..).collect()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn queue_changed(length: usize) -> PlaybackEvent {
        PlaybackEvent::QueueChanged { length }
    }

    #[test]
    fn drain_empties_buffer() {
        let mut buffer = EventBuffer::new(4);
        buffer.push(queue_changed(1));
        buffer.push(queue_changed(2));

        assert_eq!(buffer.drain(), vec![queue_changed(1), queue_changed(2)]);
        assert!(buffer.is_empty());
    }

    #[test]
    fn oldest_dropped_at_capacity() {
        let mut buffer = EventBuffer::new(2);
        buffer.push(queue_changed(1));
        buffer.push(queue_changed(2));
        buffer.push(queue_changed(3));

        assert_eq!(buffer.drain(), vec![queue_changed(2), queue_changed(3)]);
    }

    #[test]
    fn zero_capacity_keeps_nothing() {
        let mut buffer = EventBuffer::new(0);
        buffer.push(queue_changed(1));
        assert!(buffer.is_empty());
    }

    #[test]
    fn events_serialize_tagged() {
        let event = PlaybackEvent::StateChanged { is_playing: true };
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(json, r#"{"type":"stateChanged","is_playing":true}"#);
    }
}
