//! Playback store - single source of truth for what is loaded and what comes next
//!
//! Two independent axes: a current track (present or absent) and a play/pause
//! flag. The queue is independent of both. Invalid transitions, such as
//! advancing past the last queue entry, leave the state unchanged.

use crate::{
    engine::{AudioEngine, NullEngine},
    error::Result,
    events::{EventBuffer, PlaybackEvent},
    types::{PlaybackConfig, PlaybackSnapshot, Track},
};

/// Playback state container
///
/// Holds:
/// - Current track (optional)
/// - Play/pause flag
/// - Ordered queue (duplicates allowed, navigation uses the first id match)
///
/// Mutated only through its own methods. Every method completes before
/// returning; none of them fails.
pub struct PlaybackStore {
    // State
    current_track: Option<Track>,
    is_playing: bool,
    queue: Vec<Track>,

    // Collaborators
    engine: Box<dyn AudioEngine>,

    // Event queue for UI synchronization
    pending_events: EventBuffer,
}

impl PlaybackStore {
    /// Create a store backed by [`NullEngine`]
    pub fn new(config: PlaybackConfig) -> Self {
        Self::with_engine(config, Box::new(NullEngine))
    }

    /// Create a store that instructs `engine`
    pub fn with_engine(config: PlaybackConfig, engine: Box<dyn AudioEngine>) -> Self {
        Self {
            current_track: None,
            is_playing: false,
            queue: Vec::new(),
            engine,
            pending_events: EventBuffer::new(config.event_capacity),
        }
    }

    // ===== Playback Control =====

    /// Load `track` and start playing it
    ///
    /// Accepts any track, queued or not.
    pub fn play_track(&mut self, track: Track) {
        tracing::debug!(track_id = %track.id, url = %track.url, "Playing track");

        let previous_track_id = self.current_track.as_ref().map(|t| t.id.clone());
        let track_id = track.id.clone();

        let result = self.engine.load(&track);
        self.current_track = Some(track);
        self.set_playing(true);
        self.emit(PlaybackEvent::TrackChanged {
            track_id,
            previous_track_id,
        });
        self.report_engine(result);
    }

    /// Pause playback
    ///
    /// Safe with nothing loaded or already paused.
    pub fn pause_track(&mut self) {
        tracing::debug!("Pausing playback");
        let result = self.engine.pause();
        self.set_playing(false);
        self.report_engine(result);
    }

    /// Resume playback
    ///
    /// Allowed with no current track; the engine decides whether anything
    /// actually plays.
    pub fn resume_track(&mut self) {
        tracing::debug!("Resuming playback");
        let result = self.engine.resume();
        self.set_playing(true);
        self.report_engine(result);
    }

    /// Pause if playing, resume otherwise
    pub fn toggle_play_pause(&mut self) {
        if self.is_playing {
            self.pause_track();
        } else {
            self.resume_track();
        }
    }

    /// Play the queue entry after the current track
    ///
    /// Returns `false` (state unchanged) when the queue is empty, nothing is
    /// loaded, the current track is not queued, or it is the last entry.
    /// Advancing always resumes playback.
    pub fn next_track(&mut self) -> bool {
        let Some(next) = self.next_in_queue().cloned() else {
            tracing::trace!("No next track, ignoring");
            return false;
        };

        self.play_track(next);
        true
    }

    /// Play the queue entry before the current track
    ///
    /// Returns `false` (state unchanged) when the queue is empty, nothing is
    /// loaded, the current track is not queued, or it is the first entry.
    pub fn previous_track(&mut self) -> bool {
        let Some(previous) = self.previous_in_queue().cloned() else {
            tracing::trace!("No previous track, ignoring");
            return false;
        };

        self.play_track(previous);
        true
    }

    // ===== Queue Management =====

    /// Append track to the end of the queue
    pub fn add_to_queue(&mut self, track: Track) {
        tracing::debug!(track_id = %track.id, "Adding track to queue");
        self.queue.push(track);
        self.emit_queue_changed();
    }

    /// Remove every queue entry with this id
    ///
    /// The current track and play flag are untouched, even if the current
    /// track's entry goes.
    pub fn remove_from_queue(&mut self, track_id: &str) {
        let before = self.queue.len();
        self.queue.retain(|track| track.id != track_id);

        let removed = before - self.queue.len();
        if removed > 0 {
            tracing::debug!(track_id, removed, "Removed tracks from queue");
            self.emit_queue_changed();
        } else {
            tracing::trace!(track_id, "Track not queued, nothing removed");
        }
    }

    /// Empty the queue
    pub fn clear_queue(&mut self) {
        if self.queue.is_empty() {
            return;
        }
        tracing::debug!(length = self.queue.len(), "Clearing queue");
        self.queue.clear();
        self.emit_queue_changed();
    }

    /// Replace the queue wholesale
    pub fn set_queue(&mut self, tracks: Vec<Track>) {
        tracing::debug!(length = tracks.len(), "Replacing queue");
        let changed = self.queue != tracks;
        self.queue = tracks;
        if changed {
            self.emit_queue_changed();
        }
    }

    // ===== State Queries =====

    /// Currently loaded track
    pub fn current_track(&self) -> Option<&Track> {
        self.current_track.as_ref()
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    /// Queue in play order
    pub fn queue(&self) -> &[Track] {
        &self.queue
    }

    /// Owned copy of the full state
    pub fn snapshot(&self) -> PlaybackSnapshot {
        PlaybackSnapshot {
            current_track: self.current_track.clone(),
            is_playing: self.is_playing,
            queue: self.queue.clone(),
        }
    }

    /// Index of the first queue entry matching the current track's id
    pub fn current_queue_position(&self) -> Option<usize> {
        let current = self.current_track.as_ref()?;
        self.queue.iter().position(|track| track.id == current.id)
    }

    /// Whether [`next_track`](Self::next_track) would take effect
    pub fn has_next(&self) -> bool {
        self.next_in_queue().is_some()
    }

    /// Whether [`previous_track`](Self::previous_track) would take effect
    pub fn has_previous(&self) -> bool {
        self.previous_in_queue().is_some()
    }

    // ===== Events =====

    /// Take all buffered events, oldest first
    pub fn drain_events(&mut self) -> Vec<PlaybackEvent> {
        self.pending_events.drain()
    }

    pub fn has_pending_events(&self) -> bool {
        !self.pending_events.is_empty()
    }

    // ===== Internals =====

    fn next_in_queue(&self) -> Option<&Track> {
        let position = self.current_queue_position()?;
        self.queue.get(position + 1)
    }

    fn previous_in_queue(&self) -> Option<&Track> {
        let position = self.current_queue_position()?;
        position.checked_sub(1).and_then(|i| self.queue.get(i))
    }

    fn set_playing(&mut self, is_playing: bool) {
        if self.is_playing != is_playing {
            self.is_playing = is_playing;
            self.emit(PlaybackEvent::StateChanged { is_playing });
        }
    }

    fn report_engine(&mut self, result: Result<()>) {
        if let Err(e) = result {
            tracing::warn!("Audio engine error: {}", e);
            self.emit(PlaybackEvent::EngineFailed {
                message: e.to_string(),
            });
        }
    }

    fn emit_queue_changed(&mut self) {
        let length = self.queue.len();
        self.emit(PlaybackEvent::QueueChanged { length });
    }

    fn emit(&mut self, event: PlaybackEvent) {
        self.pending_events.push(event);
    }
}

impl Default for PlaybackStore {
    fn default() -> Self {
        Self::new(PlaybackConfig::default())
    }
}

impl std::fmt::Debug for PlaybackStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlaybackStore")
            .field("current_track", &self.current_track)
            .field("is_playing", &self.is_playing)
            .field("queue", &self.queue)
            .finish_non_exhaustive()
    }
}
