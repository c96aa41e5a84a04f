//! Style options submitted alongside the photo.
//!
//! Every option accepts its wire value case-insensitively. Missing or
//! unknown values fall back to the form defaults instead of rejecting the
//! request.

use std::fmt;
use std::num::IntErrorKind;

macro_rules! style_option {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => $value:literal),+ $(,)? } default $default:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum $name {
            $($variant,)+
        }

        impl Default for $name {
            fn default() -> Self {
                $name::$default
            }
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn parse(raw: &str) -> Option<Self> {
                let normalized = raw.trim().to_ascii_lowercase();
                match normalized.as_str() {
                    $($value => Some($name::$variant),)+
                    _ => None,
                }
            }

            pub fn parse_or_default(raw: Option<&str>) -> Self {
                raw.and_then(Self::parse).unwrap_or_default()
            }

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $value,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

style_option! {
    CaptionLength {
        Short => "short",
        Medium => "medium",
        Long => "long",
    } default Medium
}

style_option! {
    Tone {
        Cute => "cute",
        Moody => "moody",
        Funny => "funny",
        Romantic => "romantic",
        Aesthetic => "aesthetic",
    } default Aesthetic
}

style_option! {
    /// Requested origin of the suggested songs.
    Region {
        Any => "any",
        Bollywood => "bollywood",
        Hollywood => "hollywood",
        Tollywood => "tollywood",
        Kpop => "kpop",
    } default Any
}

style_option! {
    Mood {
        Chill => "chill",
        Upbeat => "upbeat",
        Romantic => "romantic",
        Nostalgic => "nostalgic",
        Party => "party",
    } default Chill
}

impl CaptionLength {
    pub fn word_range(&self) -> &'static str {
        match self {
            CaptionLength::Short => "5-10 words",
            CaptionLength::Medium => "11-20 words",
            CaptionLength::Long => "21-35 words",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StyleOptions {
    pub length: CaptionLength,
    pub tone: Tone,
    pub region: Region,
    pub mood: Mood,
}

/// Number of captions and songs to return, always within `MIN..=MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Count(usize);

impl Count {
    pub const MIN: usize = 1;
    pub const MAX: usize = 6;
    pub const DEFAULT: Count = Count(3);

    pub fn clamped(value: i64) -> Self {
        Count(value.clamp(Self::MIN as i64, Self::MAX as i64) as usize)
    }

    /// Parses the `num` form field. Missing or non-integer input yields the
    /// default; integers too large for `i64` still clamp.
    pub fn parse(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::DEFAULT;
        };
        match raw.trim().parse::<i64>() {
            Ok(value) => Self::clamped(value),
            Err(err) => match err.kind() {
                IntErrorKind::PosOverflow => Count(Self::MAX),
                IntErrorKind::NegOverflow => Count(Self::MIN),
                _ => Self::DEFAULT,
            },
        }
    }

    pub fn get(self) -> usize {
        self.0
    }
}

impl Default for Count {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Count {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
