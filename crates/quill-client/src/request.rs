use serde::{Deserialize, Serialize};

/// Voice of the generated piece. Wire values are the lowercase form the
/// endpoint expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Formal,
    Casual,
    Humorous,
}

impl Default for Tone {
    fn default() -> Self {
        Tone::Formal
    }
}

/// Target length of the generated piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Length {
    Short,
    Medium,
    Long,
}

impl Default for Length {
    fn default() -> Self {
        Length::Medium
    }
}

/// Parameters submitted to the generation endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub topic: String,
    pub audience: String,
    pub tone: Tone,
    pub length: Length,
}

impl GenerationRequest {
    pub fn new(topic: impl Into<String>, audience: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            audience: audience.into(),
            tone: Tone::default(),
            length: Length::default(),
        }
    }

    pub fn with_tone(mut self, tone: Tone) -> Self {
        self.tone = tone;
        self
    }

    pub fn with_length(mut self, length: Length) -> Self {
        self.length = length;
        self
    }
}
