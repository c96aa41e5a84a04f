use crate::options::{Count, Region, StyleOptions};

const REGION_RULES: [(Region, &str); 5] = [
    (
        Region::Bollywood,
        "Only Hindi/Bollywood songs (artists like Arijit Singh, Shreya Ghoshal, A.R. Rahman, etc.)",
    ),
    (Region::Hollywood, "Only English/Western pop songs"),
    (Region::Tollywood, "Only Telugu cinema songs"),
    (Region::Kpop, "Only Korean pop songs"),
    (Region::Any, "Mix of popular songs from different regions"),
];

/// Instruction text sent upstream, plus the region it was built for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    text: String,
    region: Region,
}

impl Prompt {
    pub fn build(options: &StyleOptions, count: Count) -> Self {
        Self {
            text: render(options, count),
            region: options.region,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn region(&self) -> Region {
        self.region
    }
}

fn render(options: &StyleOptions, count: Count) -> String {
    let StyleOptions {
        length,
        tone,
        region,
        mood,
    } = options;

    let mut text = format!(
        "You are a social-media assistant. Analyze the attached photo and generate {count} \
Instagram caption suggestions and {count} song suggestions.\n\n\
CRITICAL REQUIREMENTS:\n\
- Caption length: {length} ({words} each)\n\
- Tone: {tone}\n\
- Song region: {region} (THIS IS MANDATORY - only suggest songs from this region)\n\
- Song mood: {mood}\n\n\
For song region '{region}':\n",
        words = length.word_range(),
    );
    for (rule_region, rule) in REGION_RULES {
        text.push_str(&format!("- {rule_region}: {rule}\n"));
    }

    let caption_slots = (1..=count.get())
        .map(|i| format!("\"caption {i}\""))
        .collect::<Vec<_>>()
        .join(", ");
    let song_slots = vec!["{\"title\": \"Song Title\", \"artist\": \"Artist Name\"}"; count.get()]
        .join(",\n    ");
    text.push_str(&format!(
        "\nRespond ONLY with JSON in this EXACT format:\n\
{{\n  \"captions\": [{caption_slots}],\n  \"songs\": [\n    {song_slots}\n  ]\n}}\n\n\
Guidelines:\n\
- Analyze the image mood, colors, and setting\n\
- STRICTLY follow the region requirement for songs\n\
- Make captions engaging and Instagram-ready, one line each\n\
- Ensure songs are real and match the specified region and mood\n"
    ));
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{CaptionLength, Mood, Tone};

    fn options() -> StyleOptions {
        StyleOptions {
            length: CaptionLength::Short,
            tone: Tone::Funny,
            region: Region::Tollywood,
            mood: Mood::Nostalgic,
        }
    }

    #[test]
    fn embeds_requested_style() {
        let prompt = Prompt::build(&options(), Count::clamped(4));
        let text = prompt.text();
        assert!(text.contains("generate 4 Instagram caption suggestions and 4 song suggestions"));
        assert!(text.contains("Caption length: short (5-10 words each)"));
        assert!(text.contains("Tone: funny"));
        assert!(text.contains("Song region: tollywood (THIS IS MANDATORY"));
        assert!(text.contains("Song mood: nostalgic"));
        assert_eq!(prompt.region(), Region::Tollywood);
    }

    #[test]
    fn lists_every_region_rule() {
        let text = Prompt::build(&StyleOptions::default(), Count::DEFAULT)
            .text()
            .to_string();
        for (region, rule) in REGION_RULES {
            assert!(text.contains(&format!("- {region}: {rule}")));
        }
    }

    #[test]
    fn describes_json_shape_sized_to_count() {
        let text = Prompt::build(&options(), Count::clamped(2)).text().to_string();
        assert!(text.contains("\"captions\": [\"caption 1\", \"caption 2\"]"));
        assert_eq!(text.matches("\"title\": \"Song Title\"").count(), 2);
    }

    #[test]
    fn is_deterministic() {
        assert_eq!(
            Prompt::build(&options(), Count::DEFAULT),
            Prompt::build(&options(), Count::DEFAULT)
        );
    }
}
