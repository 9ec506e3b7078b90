use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Stylistic preset selecting the voice of the generated content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    #[default]
    Direct,
    Story,
    Contrarian,
    Mentor,
}

impl Tone {
    pub const ALL: [Tone; 4] = [Tone::Direct, Tone::Story, Tone::Contrarian, Tone::Mentor];

    /// Wire value, as sent to the generation service.
    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Direct => "direct",
            Tone::Story => "story",
            Tone::Contrarian => "contrarian",
            Tone::Mentor => "mentor",
        }
    }

    /// Human label shown in the tone select.
    pub fn label(&self) -> &'static str {
        match self {
            Tone::Direct => "Direct & sharp",
            Tone::Story => "Story-driven",
            Tone::Contrarian => "Contrarian",
            Tone::Mentor => "Calm mentor",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tone {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tone::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("Unknown tone '{s}'"))
    }
}

/// Raw field values exactly as the form (or a JSON client) submitted them.
///
/// Tone stays a string here so an unknown value surfaces as a validation
/// message instead of an extractor rejection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IntakeInput {
    pub raw_input: String,
    pub product: String,
    pub audience: String,
    pub tone: String,
}

impl Default for IntakeInput {
    fn default() -> Self {
        Self {
            raw_input: String::new(),
            product: String::new(),
            audience: String::new(),
            tone: Tone::default().as_str().to_string(),
        }
    }
}

/// Validated payload sent to the generation service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntakeRequest {
    pub raw_input: String,
    pub product: String,
    pub audience: String,
    pub tone: Tone,
}

/// The three ordered lists returned by the generation service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedContent {
    pub hooks: Vec<String>,
    pub post_outlines: Vec<String>,
    pub full_posts: Vec<String>,
}
