//! Shared store handle for multi-threaded hosts
//!
//! `next_track`/`previous_track` scan the queue and then assign; that is only
//! safe if nothing else mutates in between. Every method here holds the one
//! lock around the store for the full operation.

use crate::{
    events::PlaybackEvent,
    store::PlaybackStore,
    types::{PlaybackSnapshot, Track},
};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Cloneable handle to a single [`PlaybackStore`]
#[derive(Clone)]
pub struct SharedPlaybackStore {
    inner: Arc<Mutex<PlaybackStore>>,
}

impl SharedPlaybackStore {
    pub fn new(store: PlaybackStore) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    /// Run `f` with read access under the lock
    pub fn read<R>(&self, f: impl FnOnce(&PlaybackStore) -> R) -> R {
        let guard = self.lock();
        f(&*guard)
    }

    /// Run `f` with write access under the lock
    ///
    /// Several operations inside one closure apply as a single step for
    /// every other holder of the handle.
    pub fn update<R>(&self, f: impl FnOnce(&mut PlaybackStore) -> R) -> R {
        let mut guard = self.lock();
        f(&mut *guard)
    }

    pub fn play_track(&self, track: Track) {
        self.update(|store| store.play_track(track));
    }

    pub fn pause_track(&self) {
        self.update(PlaybackStore::pause_track);
    }

    pub fn resume_track(&self) {
        self.update(PlaybackStore::resume_track);
    }

    pub fn toggle_play_pause(&self) {
        self.update(PlaybackStore::toggle_play_pause);
    }

    pub fn next_track(&self) -> bool {
        self.update(PlaybackStore::next_track)
    }

    pub fn previous_track(&self) -> bool {
        self.update(PlaybackStore::previous_track)
    }

    pub fn add_to_queue(&self, track: Track) {
        self.update(|store| store.add_to_queue(track));
    }

    pub fn remove_from_queue(&self, track_id: &str) {
        self.update(|store| store.remove_from_queue(track_id));
    }

    pub fn clear_queue(&self) {
        self.update(PlaybackStore::clear_queue);
    }

    pub fn set_queue(&self, tracks: Vec<Track>) {
        self.update(|store| store.set_queue(tracks));
    }

    pub fn snapshot(&self) -> PlaybackSnapshot {
        self.read(PlaybackStore::snapshot)
    }

    pub fn drain_events(&self) -> Vec<PlaybackEvent> {
        self.update(PlaybackStore::drain_events)
    }

    // Store operations never leave partial state behind, so a panic in some
    // other holder's closure does not invalidate the store.
    fn lock(&self) -> MutexGuard<'_, PlaybackStore> {
        self.inner.lock().unwrap_or_else(|poisoned: PoisonError<_>| {
            tracing::warn!("Playback store lock poisoned, recovering");
            poisoned.into_inner()
        })
    }
}

impl From<PlaybackStore> for SharedPlaybackStore {
    fn from(store: PlaybackStore) -> Self {
        Self::new(store)
    }
}

impl Default for SharedPlaybackStore {
    fn default() -> Self {
        Self::new(PlaybackStore::default())
    }
}
