use serde::{Deserialize, Serialize};

use super::level::Level;

/// Coarse mood bucket that selects the canned response.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum Tier {
    Low,
    Mid,
    High,
}

impl Tier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Low => "Low",
            Tier::Mid => "Mid",
            Tier::High => "High",
        }
    }
}

/// Levels 1-4 are low, 5-6 mid, 7-10 high.
pub fn classify(level: Level) -> Tier {
    match level.get() {
        1..=4 => Tier::Low,
        5..=6 => Tier::Mid,
        _ => Tier::High,
    }
}

/// What the response view shows once a mood is confirmed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResponsePayload {
    pub title: String,
    pub title_color: String,
    pub media_ref: String,
    pub media_alt: String,
    /// Whether the media plays in a looping container.
    #[serde(default)]
    pub media_loops: bool,
    pub message: String,
}

/// One payload per tier.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TierResponses {
    pub low: ResponsePayload,
    pub mid: ResponsePayload,
    pub high: ResponsePayload,
}

impl TierResponses {
    pub fn respond(&self, tier: Tier) -> &ResponsePayload {
        match tier {
            Tier::Low => &self.low,
            Tier::Mid => &self.mid,
            Tier::High => &self.high,
        }
    }
}

impl Default for TierResponses {
    fn default() -> Self {
        Self {
            low: ResponsePayload {
                title: "I'm here, gorgeous!".into(),
                title_color: "#ffa6ca".into(),
                media_ref: "images/empathy.gif".into(),
                media_alt: "Empathy GIF".into(),
                media_loops: true,
                message: "I wish I could give you a big hug right now. Take it easy today. \
                          I know you've tried your best. Tomorrow would definitely be a \
                          better day! 💕"
                    .into(),
            },
            mid: ResponsePayload {
                title: "It's okay!".into(),
                title_color: "#ff8cb6".into(),
                media_ref: "images/its-okay.gif".into(),
                media_alt: "It's Okay GIF".into(),
                media_loops: false,
                message: "You're stronger than you know. Today is just one day, and \
                          tomorrow is a fresh start. Keep shining, gorgeous! 🌈"
                    .into(),
            },
            high: ResponsePayload {
                title: "That's great to hear!".into(),
                title_color: "#ff69b4".into(),
                media_ref: "images/nice-job.gif".into(),
                media_alt: "Nice Job GIF".into(),
                media_loops: false,
                message: "Seeing you happy really makes my day! You definitely deserve all \
                          this joy and so much more. Keep that beautiful smile shining! 💖"
                    .into(),
            },
        }
    }
}
