//! Error types for playback management

use thiserror::Error;

/// Playback errors
///
/// The store's own operations never fail. These errors come from the
/// audio engine seam and from consumers resolving tracks before handing
/// them to the store.
#[derive(Debug, Error)]
pub enum PlaybackError {
    /// Audio engine rejected an instruction
    #[error("Audio engine error: {0}")]
    Engine(String),

    /// No track with this id is known to the caller's data source
    #[error("Track not found: {0}")]
    TrackNotFound(String),
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;
