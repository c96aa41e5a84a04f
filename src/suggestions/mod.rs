pub mod mock;
pub mod parser;

use serde::{Deserialize, Serialize};

use crate::options::Count;

pub use mock::SongPool;

pub const UNKNOWN_ARTIST: &str = "Unknown Artist";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SongSuggestion {
    pub title: String,
    pub artist: String,
}

impl SongSuggestion {
    pub fn new(title: impl Into<String>, artist: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
        }
    }

    /// Splits `"Title - Artist"`. Without a separator the whole text is the title.
    pub fn from_dashed(raw: &str) -> Self {
        let mut parts = raw.split(" - ");
        match (parts.next(), parts.next()) {
            (Some(title), Some(artist)) => Self::new(title.trim(), artist.trim()),
            _ => Self::new(raw.trim(), UNKNOWN_ARTIST),
        }
    }
}

/// Captions and songs returned to the caller, in suggestion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationResult {
    pub captions: Vec<String>,
    pub songs: Vec<SongSuggestion>,
}

impl GenerationResult {
    /// Pads short lists by cycling through `filler` and truncates long ones,
    /// so both lists end up with exactly `count` entries.
    pub fn fill_to(mut self, count: Count, filler: &GenerationResult) -> Self {
        let target = count.get();
        pad_cycling(&mut self.captions, &filler.captions, target);
        pad_cycling(&mut self.songs, &filler.songs, target);
        self.captions.truncate(target);
        self.songs.truncate(target);
        self
    }

    pub fn is_complete(&self, count: Count) -> bool {
        self.captions.len() == count.get() && self.songs.len() == count.get()
    }
}

fn pad_cycling<T: Clone>(items: &mut Vec<T>, filler: &[T], target: usize) {
    if filler.is_empty() {
        return;
    }
    while items.len() < target {
        let next = filler[items.len() % filler.len()].clone();
        items.push(next);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dashed_song_splits_title_and_artist() {
        assert_eq!(
            SongSuggestion::from_dashed("Levitating - Dua Lipa"),
            SongSuggestion::new("Levitating", "Dua Lipa")
        );
        assert_eq!(
            SongSuggestion::from_dashed("Stay"),
            SongSuggestion::new("Stay", UNKNOWN_ARTIST)
        );
    }

    #[test]
    fn fill_pads_from_filler_at_matching_positions() {
        let filler = GenerationResult {
            captions: vec!["a".into(), "b".into(), "c".into()],
            songs: vec![
                SongSuggestion::new("x", "1"),
                SongSuggestion::new("y", "2"),
                SongSuggestion::new("z", "3"),
            ],
        };
        let partial = GenerationResult {
            captions: vec!["mine".into()],
            songs: Vec::new(),
        };
        let filled = partial.fill_to(Count::clamped(3), &filler);
        assert_eq!(filled.captions, vec!["mine", "b", "c"]);
        assert_eq!(filled.songs, filler.songs);
    }

    #[test]
    fn fill_truncates_overlong_lists() {
        let long = GenerationResult {
            captions: vec!["1".into(), "2".into(), "3".into()],
            songs: vec![SongSuggestion::new("t", "a"); 3],
        };
        let trimmed = long.fill_to(Count::clamped(2), &GenerationResult::default());
        assert!(trimmed.is_complete(Count::clamped(2)));
        assert_eq!(trimmed.captions, vec!["1", "2"]);
    }
}
