//! Repairs free-form model output into captions and songs.
//!
//! Two stages, both pure: [`parse_json_block`] looks for the requested JSON
//! object, and [`parse_lines`] scrapes section-headed lists when the model
//! answered in prose. Neither stage pads its output.

use serde_json::Value;

use crate::options::Count;

use super::{GenerationResult, SongSuggestion, UNKNOWN_ARTIST};

const BULLET_MARKERS: [&str; 4] = ["â€¢", "•", "*", "-"];
const MIN_CAPTION_CHARS: usize = 5;
const MIN_SONG_CHARS: usize = 3;

/// Runs the JSON stage, falling back to the line stage.
pub fn parse_response(text: &str, count: Count) -> GenerationResult {
    parse_json_block(text, count).unwrap_or_else(|| parse_lines(text, count))
}

/// Parses the span between the first `{` and the last `}`.
///
/// Returns `None` unless that span is a JSON object with both a `captions`
/// and a `songs` array.
pub fn parse_json_block(text: &str, count: Count) -> Option<GenerationResult> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }
    let value: Value = serde_json::from_str(&text[start..=end]).ok()?;
    let captions = value.get("captions")?.as_array()?;
    let songs = value.get("songs")?.as_array()?;

    let captions = captions
        .iter()
        .take(count.get())
        .filter_map(Value::as_str)
        .map(|caption| caption.trim().to_string())
        .collect();
    let songs = songs
        .iter()
        .take(count.get())
        .filter_map(song_from_value)
        .collect();
    Some(GenerationResult { captions, songs })
}

fn song_from_value(value: &Value) -> Option<SongSuggestion> {
    match value {
        Value::Object(fields) => {
            let title = fields.get("title")?.as_str()?;
            let artist = fields.get("artist")?.as_str()?;
            Some(SongSuggestion::new(title.trim(), artist.trim()))
        }
        Value::String(raw) => Some(SongSuggestion::from_dashed(raw)),
        _ => None,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Captions,
    Songs,
}

/// Collects captions and songs from section-headed plain text.
///
/// A line mentioning "caption" opens the captions section while none have
/// been collected yet, and likewise "song" for songs. Heading lines are
/// never kept as data.
pub fn parse_lines(text: &str, count: Count) -> GenerationResult {
    let limit = count.get();
    let mut result = GenerationResult::default();
    let mut section = None;

    for raw_line in text.lines() {
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }
        let lowered = line.to_lowercase();
        if lowered.contains("caption") && result.captions.is_empty() {
            section = Some(Section::Captions);
            continue;
        }
        if lowered.contains("song") && result.songs.is_empty() {
            section = Some(Section::Songs);
            continue;
        }

        let cleaned = strip_bullets(line);
        match section {
            Some(Section::Captions) if result.captions.len() < limit => {
                if cleaned.chars().count() > MIN_CAPTION_CHARS {
                    result.captions.push(cleaned.to_string());
                }
            }
            Some(Section::Songs) if result.songs.len() < limit => {
                if let Some(song) = song_from_line(cleaned) {
                    result.songs.push(song);
                }
            }
            _ => {}
        }
    }
    result
}

fn song_from_line(line: &str) -> Option<SongSuggestion> {
    for separator in [" by ", " - "] {
        if line.contains(separator) {
            let mut parts = line.split(separator);
            let title = parts.next().unwrap_or_default();
            let artist = parts.next().unwrap_or_default();
            return Some(SongSuggestion::new(trim_emphasis(title), trim_emphasis(artist)));
        }
    }
    if line.chars().count() > MIN_SONG_CHARS {
        return Some(SongSuggestion::new(line, UNKNOWN_ARTIST));
    }
    None
}

fn strip_bullets(line: &str) -> &str {
    let mut rest = line.trim();
    loop {
        let before = rest.len();
        for marker in BULLET_MARKERS {
            rest = rest.trim_start_matches(marker);
        }
        rest = rest.trim_start();
        if rest.len() == before {
            break;
        }
    }
    rest.trim_end_matches('*').trim_end()
}

fn trim_emphasis(text: &str) -> &str {
    text.trim().trim_matches('*').trim()
}
