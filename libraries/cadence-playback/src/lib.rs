//! Cadence - Playback State
//!
//! Platform-agnostic playback state for Cadence.
//!
//! This crate provides:
//! - The playback store (current track, play/pause flag, ordered queue)
//! - Queue navigation (next/previous by track id, no wraparound)
//! - An audio engine seam the store instructs but does not implement
//! - Publish-on-change events for renderers
//! - A shared handle for multi-threaded hosts
//!
//! # Architecture
//!
//! `cadence-playback` holds no audio code at all:
//! - No decoding, no output device, no network
//! - No persistence; a store lives for one session
//!
//! Physical playback is provided by an [`AudioEngine`] implementation.
//!
//! # Example: Queue Navigation
//!
//! ```rust
//! use cadence_playback::{PlaybackStore, Track};
//!
//! let mut store = PlaybackStore::default();
//!
//! let a = Track::new("a", "Midnight Reverie", "Luna Eclipse");
//! let b = Track::new("b", "Digital Horizons", "Cyber Collective");
//!
//! store.set_queue(vec![a.clone(), b.clone()]);
//! store.play_track(a);
//!
//! assert!(store.next_track());
//! assert_eq!(store.current_track().map(|t| t.id.as_str()), Some("b"));
//!
//! // Already at the end: nothing happens
//! assert!(!store.next_track());
//! ```
//!
//! # Example: Engine Integration
//!
//! ```rust
//! use cadence_playback::{AudioEngine, PlaybackConfig, PlaybackStore, Result, Track};
//!
//! struct MyEngine;
//!
//! impl AudioEngine for MyEngine {
//!     fn load(&mut self, track: &Track) -> Result<()> {
//!         // Start fetching and playing `track.url`
//!         Ok(())
//!     }
//!
//!     fn pause(&mut self) -> Result<()> {
//!         Ok(())
//!     }
//!
//!     fn resume(&mut self) -> Result<()> {
//!         Ok(())
//!     }
//! }
//!
//! let mut store = PlaybackStore::with_engine(PlaybackConfig::default(), Box::new(MyEngine));
//! store.play_track(Track::new("1", "Neon Pulse", "Synthwave Society"));
//! assert!(store.is_playing());
//! ```

mod engine;
mod error;
pub mod events;
mod shared;
mod store;
pub mod types;

// Public exports
pub use engine::{AudioEngine, NullEngine};
pub use error::{PlaybackError, Result};
pub use events::PlaybackEvent;
pub use shared::SharedPlaybackStore;
pub use store::PlaybackStore;
pub use types::{format_time, PlaybackConfig, PlaybackSnapshot, Track};
