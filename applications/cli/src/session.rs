//! Interactive session
//!
//! Owns the store for the lifetime of the process and wires it to the
//! catalog, the local player controls and the text renderer.

use crate::{
    catalog::Catalog,
    command::{Command, HELP},
    config::CliConfig,
    controls::PlayerControls,
    engine::LoggingEngine,
    error::{CliError, Result},
    render,
};
use cadence_playback::{PlaybackError, PlaybackStore};
use std::io::{BufRead, Write};

/// Result of one command
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Continue(String),
    Quit,
}

pub struct Session {
    store: PlaybackStore,
    catalog: Catalog,
    controls: PlayerControls,
    show_events: bool,
}

impl Session {
    /// Session with a store driving the logging engine
    pub fn new(catalog: Catalog, config: &CliConfig) -> Self {
        let store =
            PlaybackStore::with_engine(config.playback_config(), Box::new(LoggingEngine::new()));
        Self::with_store(catalog, store, config.show_events)
    }

    pub fn with_store(catalog: Catalog, store: PlaybackStore, show_events: bool) -> Self {
        Self {
            store,
            catalog,
            controls: PlayerControls::new(),
            show_events,
        }
    }

    pub fn store(&self) -> &PlaybackStore {
        &self.store
    }

    pub fn controls(&self) -> &PlayerControls {
        &self.controls
    }

    /// Apply one command and render the result
    pub fn execute(&mut self, command: Command) -> Result<Outcome> {
        tracing::debug!(?command, "Executing command");

        let drains_events = matches!(command, Command::Events);
        let mut output = match command {
            Command::Quit => return Ok(Outcome::Quit),
            Command::Help => HELP.to_string(),

            Command::Play(id) => {
                let track = self.resolve(&id)?;
                self.store.play_track(track);
                self.controls.set_progress(0.0);
                self.status()
            }
            Command::Pause => {
                self.store.pause_track();
                self.status()
            }
            Command::Resume => {
                self.store.resume_track();
                self.status()
            }
            Command::Toggle => {
                self.store.toggle_play_pause();
                self.status()
            }
            Command::Next => {
                if self.store.next_track() {
                    self.controls.set_progress(0.0);
                    self.status()
                } else {
                    "No next track in the queue".to_string()
                }
            }
            Command::Previous => {
                if self.store.previous_track() {
                    self.controls.set_progress(0.0);
                    self.status()
                } else {
                    "No previous track in the queue".to_string()
                }
            }

            Command::Add(id) => {
                let track = self.resolve(&id)?;
                let title = track.title.clone();
                self.store.add_to_queue(track);
                format!("Added '{}' ({} in queue)", title, self.store.queue().len())
            }
            Command::Remove(id) => {
                let before = self.store.queue().len();
                self.store.remove_from_queue(&id);
                let removed = before - self.store.queue().len();
                let noun = if removed == 1 { "entry" } else { "entries" };
                format!("Removed {} {} for '{}'", removed, noun, id)
            }
            Command::Clear => {
                self.store.clear_queue();
                "Queue cleared".to_string()
            }
            Command::Album(name) => {
                let tracks = self.catalog.album_tracks(&name);
                let Some(first) = tracks.first().cloned() else {
                    return Err(CliError::Catalog(format!("no album named '{}'", name)));
                };
                self.store.set_queue(tracks);
                self.store.play_track(first);
                self.controls.set_progress(0.0);
                format!("{}\n{}", self.status(), render::queue(&self.store))
            }

            Command::Queue => render::queue(&self.store),
            Command::Status => self.status(),
            Command::Snapshot => serde_json::to_string_pretty(&self.store.snapshot())?,
            Command::Search(query) => render::track_list(self.catalog.search(&query)),
            Command::Catalog => render::track_list(self.catalog.tracks()),

            Command::Seek(value) => {
                self.controls.set_progress(value);
                let duration = self.store.current_track().map_or(0, |t| t.duration);
                format!("Seeking to: {}", self.controls.seek_label(duration))
            }
            Command::Volume(value) => {
                self.controls.set_volume(value);
                format!("Volume changed to: {}%", self.controls.volume_percent())
            }
            Command::Shuffle => on_off("Shuffle", self.controls.toggle_shuffle()),
            Command::Repeat => on_off("Repeat", self.controls.toggle_repeat()),
            Command::Favorite => on_off("Favorite", self.controls.toggle_favorite()),

            Command::Events => {
                let events = self.store.drain_events();
                if events.is_empty() {
                    "No pending events".to_string()
                } else {
                    events
                        .iter()
                        .map(serde_json::to_string)
                        .collect::<std::result::Result<Vec<_>, _>>()?
                        .join("\n")
                }
            }
        };

        if self.show_events && !drains_events {
            for event in self.store.drain_events() {
                output.push_str("\n  * ");
                output.push_str(&render::event_line(&event));
            }
        }

        Ok(Outcome::Continue(output))
    }

    /// Execute commands line by line until EOF or `quit`
    ///
    /// Blank lines and `#` comments are skipped. A failing command is
    /// reported and the loop carries on.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        input: R,
        mut output: W,
        prompt: Option<&str>,
    ) -> Result<()> {
        let show_prompt = |output: &mut W| -> Result<()> {
            if let Some(prompt) = prompt {
                write!(output, "{}", prompt)?;
                output.flush()?;
            }
            Ok(())
        };

        show_prompt(&mut output)?;
        for line in input.lines() {
            let line = line?;
            let trimmed = line.trim();

            if !trimmed.is_empty() && !trimmed.starts_with('#') {
                match trimmed.parse::<Command>().and_then(|command| self.execute(command)) {
                    Ok(Outcome::Continue(text)) => writeln!(output, "{}", text)?,
                    Ok(Outcome::Quit) => {
                        tracing::info!("Session ended");
                        return Ok(());
                    }
                    Err(e) => {
                        tracing::warn!("Command '{}' failed: {}", trimmed, e);
                        writeln!(output, "error: {}", e)?;
                    }
                }
            }

            show_prompt(&mut output)?;
        }

        Ok(())
    }

    fn resolve(&self, id: &str) -> Result<cadence_playback::Track> {
        self.catalog
            .get(id)
            .cloned()
            .ok_or_else(|| PlaybackError::TrackNotFound(id.to_string()).into())
    }

    fn status(&self) -> String {
        render::mini_player(&self.store, &self.controls)
    }
}

fn on_off(label: &str, enabled: bool) -> String {
    format!("{} {}", label, if enabled { "on" } else { "off" })
}
