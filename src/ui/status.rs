/// Status line with self-reverting messages
///
/// Transient messages carry a generation number. The revert timer posts the
/// generation it was started for; if a newer message has been shown since,
/// the stale revert is ignored, so reverts replace each other instead of
/// stacking.

use iced::Color;

pub const IDLE_PROMPT: &str = "Press Ctrl+V to paste images from clipboard";
pub const REMOVE_HINT: &str = "Click to remove this image";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Idle,
    Hint,
    Success,
    Warning,
    Error,
}

impl Tone {
    pub fn color(self) -> Color {
        match self {
            Tone::Idle | Tone::Hint => Color::from_rgb8(0xaa, 0xaa, 0xaa),
            Tone::Success => Color::from_rgb8(0x5c, 0xb8, 0x5c),
            Tone::Warning => Color::from_rgb8(0xe8, 0xa8, 0x38),
            Tone::Error => Color::from_rgb8(0xd9, 0x53, 0x4f),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    text: String,
    tone: Tone,
    generation: u64,
}

impl Default for StatusLine {
    fn default() -> Self {
        Self {
            text: IDLE_PROMPT.to_string(),
            tone: Tone::Idle,
            generation: 0,
        }
    }
}

impl StatusLine {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn tone(&self) -> Tone {
        self.tone
    }

    /// Show a message that should revert after a delay.
    /// Returns the generation the revert timer must report back.
    pub fn show(&mut self, text: impl Into<String>, tone: Tone) -> u64 {
        self.generation += 1;
        self.text = text.into();
        self.tone = tone;
        self.generation
    }

    /// Show a message that stays until something else replaces it
    pub fn hint(&mut self, text: impl Into<String>) {
        self.generation += 1;
        self.text = text.into();
        self.tone = Tone::Hint;
    }

    /// Back to the idle prompt immediately
    pub fn reset(&mut self) {
        self.generation += 1;
        self.text = IDLE_PROMPT.to_string();
        self.tone = Tone::Idle;
    }

    /// Called when a revert timer fires. Returns true if it applied.
    pub fn expire(&mut self, generation: u64) -> bool {
        if generation != self.generation {
            return false;
        }
        self.reset();
        true
    }
}
