//! Offline suggestions drawn from fixed tables.

use crate::options::{Count, Region};

use super::{GenerationResult, SongSuggestion};

const BASE_CAPTIONS: [&str; 7] = [
    "Stolen moments under golden skies",
    "When the world felt like a soft melody",
    "Sunlit streets and quiet thoughts",
    "Lost in the little things",
    "Weekend chapters written in sunlight",
    "Chasing light and finding magic",
    "Simple moments, infinite beauty",
];

const BOLLYWOOD_SONGS: [(&str, &str); 7] = [
    ("Tum Hi Ho", "Arijit Singh"),
    ("Raabta", "Arijit Singh"),
    ("Channa Mereya", "Arijit Singh"),
    ("Tera Ban Jaunga", "Tulsi Kumar & Akhil Sachdeva"),
    ("Kesariya", "Arijit Singh"),
    ("Phir Bhi Tumko Chaahunga", "Arijit Singh"),
    ("Dil Diyan Gallan", "Atif Aslam"),
];

const HOLLYWOOD_SONGS: [(&str, &str); 7] = [
    ("Golden Hour", "Joji"),
    ("Sunflower", "Post Malone"),
    ("Levitating", "Dua Lipa"),
    ("Blinding Lights", "The Weeknd"),
    ("Watermelon Sugar", "Harry Styles"),
    ("Good 4 U", "Olivia Rodrigo"),
    ("Stay", "The Kid LAROI & Justin Bieber"),
];

const TOLLYWOOD_SONGS: [(&str, &str); 7] = [
    ("Ala Vaikunthapurramuloo", "Armaan Malik"),
    ("Inkem Inkem", "Sid Sriram"),
    ("Samajavaragamana", "Sid Sriram"),
    ("Vachinde", "Madhu Priya"),
    ("Rangamma Mangamma", "MM Manasi"),
    ("Buttabomma", "Armaan Malik"),
    ("Ramuloo Ramulaa", "Anurag Kulkarni"),
];

const KPOP_SONGS: [(&str, &str); 7] = [
    ("Dynamite", "BTS"),
    ("Butter", "BTS"),
    ("How You Like That", "BLACKPINK"),
    ("Gangnam Style", "PSY"),
    ("Next Level", "aespa"),
    ("Savage", "aespa"),
    ("LALISA", "LISA"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SongPool {
    Bollywood,
    Hollywood,
    Tollywood,
    Kpop,
}

impl SongPool {
    /// Picks a pool from keywords in free text. Earlier keywords win.
    pub fn detect(text: &str) -> Self {
        let lowered = text.to_lowercase();
        if lowered.contains("bollywood") {
            SongPool::Bollywood
        } else if lowered.contains("tollywood") {
            SongPool::Tollywood
        } else if lowered.contains("kpop") || lowered.contains("k-pop") {
            SongPool::Kpop
        } else {
            SongPool::Hollywood
        }
    }

    pub fn songs(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            SongPool::Bollywood => &BOLLYWOOD_SONGS,
            SongPool::Hollywood => &HOLLYWOOD_SONGS,
            SongPool::Tollywood => &TOLLYWOOD_SONGS,
            SongPool::Kpop => &KPOP_SONGS,
        }
    }

    pub fn contains(&self, song: &SongSuggestion) -> bool {
        self.songs()
            .iter()
            .any(|(title, artist)| song.title == *title && song.artist == *artist)
    }
}

impl From<Region> for SongPool {
    fn from(region: Region) -> Self {
        match region {
            Region::Bollywood => SongPool::Bollywood,
            Region::Tollywood => SongPool::Tollywood,
            Region::Kpop => SongPool::Kpop,
            Region::Hollywood | Region::Any => SongPool::Hollywood,
        }
    }
}

pub fn base_captions() -> &'static [&'static str] {
    &BASE_CAPTIONS
}

/// Sum of the prompt's code points, reduced modulo the caption pool size.
pub fn seed_for(prompt: &str) -> usize {
    let sum: u64 = prompt.chars().map(|ch| u64::from(u32::from(ch))).sum();
    (sum % BASE_CAPTIONS.len() as u64) as usize
}

/// Mock suggestions with the song pool chosen by scanning `prompt`.
pub fn generate(prompt: &str, count: Count) -> GenerationResult {
    generate_for_pool(SongPool::detect(prompt), prompt, count)
}

pub fn generate_for_pool(pool: SongPool, prompt: &str, count: Count) -> GenerationResult {
    let seed = seed_for(prompt);
    let songs = pool.songs();
    // Captions and songs wrap on their own pool lengths.
    let captions = (0..count.get())
        .map(|i| BASE_CAPTIONS[(seed + i) % BASE_CAPTIONS.len()].to_string())
        .collect();
    let songs = (0..count.get())
        .map(|i| {
            let (title, artist) = songs[(seed + i) % songs.len()];
            SongSuggestion::new(title, artist)
        })
        .collect();
    GenerationResult { captions, songs }
}
