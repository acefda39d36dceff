//! Text rendering of playback state

use crate::controls::PlayerControls;
use cadence_playback::{PlaybackEvent, PlaybackStore, Track};
use std::fmt::Write;

/// One-line mini player
pub fn mini_player(store: &PlaybackStore, controls: &PlayerControls) -> String {
    let Some(track) = store.current_track() else {
        return "Nothing playing".to_string();
    };

    let icon = if store.is_playing() { '▶' } else { '⏸' };
    let mut line = format!(
        "{} {} — {}  {} / {}",
        icon,
        track.title,
        track.artist,
        controls.seek_label(track.duration),
        track.formatted_duration()
    );

    let mut flags = Vec::new();
    if controls.shuffle {
        flags.push("shuffle");
    }
    if controls.repeat {
        flags.push("repeat");
    }
    if controls.favorite {
        flags.push("♥");
    }
    if !flags.is_empty() {
        let _ = write!(line, "  [{}]", flags.join(" "));
    }
    let _ = write!(line, "  vol {}%", controls.volume_percent());

    line
}

/// Queue listing with the current track's first match marked
pub fn queue(store: &PlaybackStore) -> String {
    if store.queue().is_empty() {
        return "Queue is empty".to_string();
    }

    let current = store.current_queue_position();
    let mut out = String::new();
    for (i, track) in store.queue().iter().enumerate() {
        let marker = if Some(i) == current { '>' } else { ' ' };
        let _ = writeln!(out, "{} {:>2}. {}", marker, i + 1, track_line(track));
    }
    out.truncate(out.trim_end().len());
    out
}

/// Plain list of tracks, as in the catalog or search results
pub fn track_list<'a>(tracks: impl IntoIterator<Item = &'a Track>) -> String {
    let lines: Vec<String> = tracks
        .into_iter()
        .map(|track| format!("[{}] {}", track.id, track_line(track)))
        .collect();

    if lines.is_empty() {
        "No tracks".to_string()
    } else {
        lines.join("\n")
    }
}

pub fn event_line(event: &PlaybackEvent) -> String {
    match event {
        PlaybackEvent::StateChanged { is_playing: true } => "playing".to_string(),
        PlaybackEvent::StateChanged { is_playing: false } => "paused".to_string(),
        PlaybackEvent::TrackChanged {
            track_id,
            previous_track_id: Some(previous),
        } => format!("track {} -> {}", previous, track_id),
        PlaybackEvent::TrackChanged {
            track_id,
            previous_track_id: None,
        } => format!("track -> {}", track_id),
        PlaybackEvent::QueueChanged { length } => format!("queue now {} tracks", length),
        PlaybackEvent::EngineFailed { message } => format!("engine error: {}", message),
    }
}

fn track_line(track: &Track) -> String {
    format!(
        "{} — {} ({})",
        track.title,
        track.artist,
        track.formatted_duration()
    )
}
