//! Track catalog
//!
//! The data source that supplies `Track` values. The store never sees the
//! catalog; the session resolves ids here and hands tracks over.

use crate::error::{CliError, Result};
use cadence_playback::Track;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    tracks: Vec<Track>,
}

/// Ordered, id-unique list of tracks
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    tracks: Vec<Track>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids
    pub fn new(tracks: Vec<Track>) -> Result<Self> {
        let mut seen = HashSet::new();
        for track in &tracks {
            if !seen.insert(track.id.as_str()) {
                return Err(CliError::Catalog(format!("duplicate track id '{}'", track.id)));
            }
        }
        Ok(Self { tracks })
    }

    /// Parse `[[tracks]]` tables
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: CatalogFile =
            toml::from_str(content).map_err(|e| CliError::Catalog(e.to_string()))?;
        Self::new(file.tracks)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let catalog = Self::from_toml_str(&content)?;
        tracing::info!("Loaded {} tracks from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    /// Mock catalog shipped with the binary
    pub fn builtin() -> Self {
        const COVERS: [&str; 5] = [
            "https://images.pexels.com/photos/2747449/pexels-photo-2747449.jpeg",
            "https://images.pexels.com/photos/3971985/pexels-photo-3971985.jpeg",
            "https://images.pexels.com/photos/1626481/pexels-photo-1626481.jpeg",
            "https://images.pexels.com/photos/1105666/pexels-photo-1105666.jpeg",
            "https://images.pexels.com/photos/1763075/pexels-photo-1763075.jpeg",
        ];

        let entries: [(&str, &str, &str, &str, u32); 12] = [
            ("1", "Midnight Reverie", "Luna Eclipse", "Ethereal Nights", 247),
            ("2", "Digital Horizons", "Cyber Collective", "Ethereal Nights", 213),
            ("3", "Neon Pulse", "Synthwave Society", "Ethereal Nights", 198),
            ("4", "Cosmic Drift", "Stellar Sounds", "Ethereal Nights", 264),
            ("5", "Abstract Emotions", "Curated Collection", "Minimalist Moods", 231),
            ("6", "Minimalist Moods", "Essential Listening", "Minimalist Moods", 185),
            ("7", "Future Frequencies", "Tomorrow's Sound", "Minimalist Moods", 276),
            ("9", "Quantum Entanglement", "Physics & Poetry", "Trending Now", 222),
            ("10", "Binary Dreams", "Digital Natives", "Trending Now", 204),
            ("11", "Holographic Love", "Virtual Reality", "Trending Now", 239),
            ("12", "Neural Networks", "AI Symphony", "Trending Now", 256),
            ("13", "Blinding Lights", "The Weeknd", "After Hours", 200),
        ];

        let tracks = entries
            .iter()
            .enumerate()
            .map(|(i, (id, title, artist, album, duration))| {
                Track::new(*id, *title, *artist)
                    .with_album(*album)
                    .with_cover_url(COVERS[i % COVERS.len()])
                    .with_duration(*duration)
                    .with_url(format!("https://stream.cadence.example/tracks/{}.mp3", id))
            })
            .collect();

        Self { tracks }
    }

    pub fn get(&self, id: &str) -> Option<&Track> {
        self.tracks.iter().find(|track| track.id == id)
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Distinct album names in first-seen order
    pub fn albums(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.tracks
            .iter()
            .map(|track| track.album.as_str())
            .filter(|album| !album.is_empty() && seen.insert(*album))
            .collect()
    }

    /// Tracks of `album` in catalog order (album name matched case-insensitively)
    pub fn album_tracks(&self, album: &str) -> Vec<Track> {
        let album = album.to_lowercase();
        self.tracks
            .iter()
            .filter(|track| track.album.to_lowercase() == album)
            .cloned()
            .collect()
    }

    /// Case-insensitive substring match on title, artist and album
    pub fn search(&self, query: &str) -> Vec<&Track> {
        let query = query.to_lowercase();
        self.tracks
            .iter()
            .filter(|track| {
                track.title.to_lowercase().contains(&query)
                    || track.artist.to_lowercase().contains(&query)
                    || track.album.to_lowercase().contains(&query)
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
[[tracks]]
id = "a"
title = "Watermelon Sugar"
artist = "Harry Styles"
album = "Fine Line"
duration = 174
url = "https://cdn.example/a.mp3"

[[tracks]]
id = "b"
title = "Don't Start Now"
artist = "Dua Lipa"
album = "Future Nostalgia"
coverUrl = "https://cdn.example/b.jpg"
duration = 183
"#;

    #[test]
    fn builtin_ids_are_unique() {
        let builtin = Catalog::builtin();
        assert!(Catalog::new(builtin.tracks().to_vec()).is_ok());
        assert!(!builtin.is_empty());
    }

    #[test]
    fn parse_toml_catalog() {
        let catalog = Catalog::from_toml_str(SAMPLE).unwrap();
        assert_eq!(catalog.len(), 2);

        let b = catalog.get("b").unwrap();
        assert_eq!(b.cover_url, "https://cdn.example/b.jpg");
        assert!(b.url.is_empty());
    }

    #[test]
    fn duplicate_ids_rejected() {
        let content = format!("{}\n[[tracks]]\nid = \"a\"\ntitle = \"x\"\nartist = \"y\"\n", SAMPLE);
        assert!(matches!(
            Catalog::from_toml_str(&content),
            Err(CliError::Catalog(_))
        ));
    }

    #[test]
    fn malformed_toml_rejected() {
        assert!(Catalog::from_toml_str("[[tracks]]\nid = ").is_err());
    }

    #[test]
    fn albums_in_first_seen_order() {
        let catalog = Catalog::builtin();
        let albums = catalog.albums();
        assert_eq!(albums[0], "Ethereal Nights");
        assert_eq!(albums[1], "Minimalist Moods");
        assert_eq!(albums.len(), 4);
    }

    #[test]
    fn album_tracks_case_insensitive() {
        let catalog = Catalog::builtin();
        let tracks = catalog.album_tracks("trending now");
        let ids: Vec<&str> = tracks.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["9", "10", "11", "12"]);
    }

    #[test]
    fn search_matches_artist() {
        let catalog = Catalog::builtin();
        let results = catalog.search("weeknd");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "Blinding Lights");
    }
}
