//! Closed option sets selected at run configuration time.

use serde::{Deserialize, Serialize};
use shortfilm_error::ConfigError;

/// Visual style of the film.
///
/// # Examples
///
/// ```
/// use shortfilm_core::FilmStyle;
///
/// let style: FilmStyle = "noir".parse().unwrap();
/// assert_eq!(style, FilmStyle::Noir);
/// assert_eq!(format!("{}", FilmStyle::Scifi), "scifi");
/// assert!("sepia".parse::<FilmStyle>().is_err());
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum FilmStyle {
    /// Film-like look with professional cinematography
    #[default]
    #[display("cinematic")]
    Cinematic,
    /// Black and white, high contrast
    #[display("noir")]
    Noir,
    /// Japanese animation style
    #[display("anime")]
    Anime,
    /// Realistic, natural lighting
    #[display("documentary")]
    Documentary,
    /// Futuristic, neon-lit
    #[display("scifi")]
    Scifi,
    /// Magical and ethereal
    #[display("fantasy")]
    Fantasy,
    /// Dark and unsettling
    #[display("horror")]
    Horror,
    /// Bright and lighthearted
    #[display("comedy")]
    Comedy,
}

impl FilmStyle {
    /// Convert to the identifier used in configuration and checkpoints.
    pub fn as_str(&self) -> &'static str {
        match self {
            FilmStyle::Cinematic => "cinematic",
            FilmStyle::Noir => "noir",
            FilmStyle::Anime => "anime",
            FilmStyle::Documentary => "documentary",
            FilmStyle::Scifi => "scifi",
            FilmStyle::Fantasy => "fantasy",
            FilmStyle::Horror => "horror",
            FilmStyle::Comedy => "comedy",
        }
    }

    /// Human-facing description for option listings.
    pub fn description(&self) -> &'static str {
        match self {
            FilmStyle::Cinematic => "Dramatic, film-like quality with professional cinematography",
            FilmStyle::Noir => "Black and white, high contrast, dramatic shadows",
            FilmStyle::Anime => "Japanese animation style with vibrant colors",
            FilmStyle::Documentary => "Realistic, natural lighting, authentic feel",
            FilmStyle::Scifi => "Futuristic, high-tech, neon-lit environments",
            FilmStyle::Fantasy => "Magical, ethereal, fantastical elements",
            FilmStyle::Horror => "Dark, ominous, unsettling atmosphere",
            FilmStyle::Comedy => "Bright, colorful, lighthearted tone",
        }
    }

    /// Visual keywords appended to image prompts.
    pub fn visual_keywords(&self) -> &'static str {
        match self {
            FilmStyle::Cinematic => "cinematic, dramatic lighting, film grain, anamorphic lens",
            FilmStyle::Noir => "film noir, high contrast black and white, dramatic shadows",
            FilmStyle::Anime => "anime style, vibrant colors, detailed illustration",
            FilmStyle::Documentary => "documentary style, realistic, natural lighting",
            FilmStyle::Scifi => "sci-fi, futuristic, neon lights, high tech",
            FilmStyle::Fantasy => "fantasy, magical, ethereal, dramatic",
            FilmStyle::Horror => "horror, dark, ominous, unsettling atmosphere",
            FilmStyle::Comedy => "bright, colorful, whimsical, fun",
        }
    }
}

impl std::str::FromStr for FilmStyle {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cinematic" => Ok(FilmStyle::Cinematic),
            "noir" => Ok(FilmStyle::Noir),
            "anime" => Ok(FilmStyle::Anime),
            "documentary" => Ok(FilmStyle::Documentary),
            "scifi" => Ok(FilmStyle::Scifi),
            "fantasy" => Ok(FilmStyle::Fantasy),
            "horror" => Ok(FilmStyle::Horror),
            "comedy" => Ok(FilmStyle::Comedy),
            _ => Err(ConfigError::new(format!("Unknown film style: {}", s))),
        }
    }
}

/// Mood of the soundtrack.
///
/// Stored with the run; the pipeline does not source music from it.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum MusicVibe {
    /// Grand orchestral
    #[default]
    #[display("epic")]
    Epic,
    /// Tense and dramatic
    #[display("suspenseful")]
    Suspenseful,
    /// Peaceful ambient
    #[display("calm")]
    Calm,
    /// Energetic and positive
    #[display("upbeat")]
    Upbeat,
    /// Ominous and intense
    #[display("dark")]
    Dark,
    /// Playful and quirky
    #[display("whimsical")]
    Whimsical,
    /// Video only
    #[display("none")]
    None,
}

impl MusicVibe {
    /// Convert to the identifier used in configuration and checkpoints.
    pub fn as_str(&self) -> &'static str {
        match self {
            MusicVibe::Epic => "epic",
            MusicVibe::Suspenseful => "suspenseful",
            MusicVibe::Calm => "calm",
            MusicVibe::Upbeat => "upbeat",
            MusicVibe::Dark => "dark",
            MusicVibe::Whimsical => "whimsical",
            MusicVibe::None => "none",
        }
    }

    /// Human-facing description for option listings.
    pub fn description(&self) -> &'static str {
        match self {
            MusicVibe::Epic => "Grand, sweeping orchestral music",
            MusicVibe::Suspenseful => "Tense, dramatic, keeps you on edge",
            MusicVibe::Calm => "Peaceful, relaxing, ambient",
            MusicVibe::Upbeat => "Energetic, positive, fun",
            MusicVibe::Dark => "Ominous, foreboding, intense",
            MusicVibe::Whimsical => "Playful, quirky, lighthearted",
            MusicVibe::None => "No music (video only)",
        }
    }
}

impl std::str::FromStr for MusicVibe {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "epic" => Ok(MusicVibe::Epic),
            "suspenseful" => Ok(MusicVibe::Suspenseful),
            "calm" => Ok(MusicVibe::Calm),
            "upbeat" => Ok(MusicVibe::Upbeat),
            "dark" => Ok(MusicVibe::Dark),
            "whimsical" => Ok(MusicVibe::Whimsical),
            "none" => Ok(MusicVibe::None),
            _ => Err(ConfigError::new(format!("Unknown music vibe: {}", s))),
        }
    }
}

/// Generation backend for a run.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum VideoProvider {
    /// OpenAI images and Sora video
    #[default]
    #[display("openai")]
    OpenAi,
    /// Google Imagen and Veo video
    #[display("gemini")]
    Gemini,
}

impl VideoProvider {
    /// Convert to the identifier used in configuration and checkpoints.
    pub fn as_str(&self) -> &'static str {
        match self {
            VideoProvider::OpenAi => "openai",
            VideoProvider::Gemini => "gemini",
        }
    }

    /// Environment variable holding this provider's credential.
    pub fn env_var(&self) -> &'static str {
        match self {
            VideoProvider::OpenAi => "OPENAI_API_KEY",
            VideoProvider::Gemini => "GEMINI_API_KEY",
        }
    }
}

impl std::str::FromStr for VideoProvider {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "openai" => Ok(VideoProvider::OpenAi),
            "gemini" => Ok(VideoProvider::Gemini),
            _ => Err(ConfigError::new(format!("Unknown video provider: {}", s))),
        }
    }
}
