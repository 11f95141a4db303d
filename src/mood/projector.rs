use serde::Serialize;

use crate::content::MoodContent;

use super::{level::SEGMENT_COUNT, state::LevelState};

pub const TRANSPARENT: &str = "transparent";
const TRAILING_OPACITY: f32 = 0.85;

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SegmentVisual {
    pub fill_color: String,
    pub opacity: f32,
    pub active: bool,
}

impl SegmentVisual {
    fn clear() -> Self {
        Self {
            fill_color: TRANSPARENT.into(),
            opacity: 1.0,
            active: false,
        }
    }
}

/// Everything the input view renders for one level state.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DisplayProjection {
    pub emoji: String,
    pub description: String,
    pub segments: [SegmentVisual; SEGMENT_COUNT],
    pub confirm_enabled: bool,
}

/// Project a level state onto the display.
///
/// Until the user interacts, the placeholder emoji and description are shown
/// and every segment is clear, whatever the stored level is. Afterwards the
/// segments below the level are filled from the color ramp at reduced
/// opacity and the segment at the level is filled and marked active.
pub fn project(state: &LevelState, content: &MoodContent) -> DisplayProjection {
    if !state.interacted {
        return DisplayProjection {
            emoji: content.placeholder.emoji.clone(),
            description: content.placeholder.description.clone(),
            segments: std::array::from_fn(|_| SegmentVisual::clear()),
            confirm_enabled: false,
        };
    }

    let adjusted = state.level.index().get();
    let segments = std::array::from_fn(|i| {
        if i < adjusted {
            SegmentVisual {
                fill_color: content.colors[i].clone(),
                opacity: TRAILING_OPACITY,
                active: false,
            }
        } else if i == adjusted {
            SegmentVisual {
                fill_color: content.colors[i].clone(),
                opacity: 1.0,
                active: true,
            }
        } else {
            SegmentVisual::clear()
        }
    });

    DisplayProjection {
        emoji: content.emoji(state.level).to_string(),
        description: content.description(state.level).to_string(),
        segments,
        confirm_enabled: state.can_confirm(),
    }
}
