use anyhow::{anyhow, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{
    level::{Level, SegmentIndex},
    resolver::{self, TrackGeometry},
    tier::{self, Tier},
};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum SessionPhase {
    /// Level 1, nothing touched yet; confirm is disabled.
    Default,
    /// The user has moved or clicked the slider at least once.
    Engaged,
    /// A mood was confirmed; the slider no longer accepts input.
    Responded,
}

/// The slider's current level and whether the user has touched it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", from = "StoredLevelState")]
pub struct LevelState {
    pub level: Level,
    pub interacted: bool,
    /// Set until the first engagement runs its one-time setup.
    #[serde(skip)]
    pub first_interaction_pending: bool,
}

impl Default for LevelState {
    fn default() -> Self {
        Self {
            level: Level::MIN,
            interacted: false,
            first_interaction_pending: true,
        }
    }
}

/// Serialized form; the first-interaction marker is rebuilt from
/// `interacted` so a restored untouched state still reports its first
/// engagement.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredLevelState {
    level: Level,
    interacted: bool,
}

impl From<StoredLevelState> for LevelState {
    fn from(stored: StoredLevelState) -> Self {
        Self {
            level: stored.level,
            interacted: stored.interacted,
            first_interaction_pending: !stored.interacted,
        }
    }
}

impl LevelState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Continuous drag input; raw slider values are clamped into range.
    pub fn drag_to(&mut self, value: i64) -> bool {
        self.set_level(Level::clamped(value))
    }

    pub fn click_segment(&mut self, index: SegmentIndex) -> bool {
        self.set_level(index.level())
    }

    pub fn click_track(&mut self, click_x: f64, geometry: TrackGeometry) -> bool {
        self.set_level(resolver::resolve(click_x, geometry).level())
    }

    /// Returns `true` when this call consumed the first-interaction marker.
    fn set_level(&mut self, level: Level) -> bool {
        self.level = level;
        self.engage()
    }

    fn engage(&mut self) -> bool {
        self.interacted = true;
        std::mem::take(&mut self.first_interaction_pending)
    }

    pub fn can_confirm(&self) -> bool {
        self.interacted
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmedResponse {
    pub level: Level,
    pub tier: Tier,
    pub confirmed_at: DateTime<Utc>,
}

/// One check-in, from first render until the response is shown.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodSession {
    pub id: String,
    pub started_at: DateTime<Utc>,
    #[serde(flatten)]
    pub state: LevelState,
    pub response: Option<ConfirmedResponse>,
}

impl MoodSession {
    pub fn new(id: String, started_at: DateTime<Utc>) -> Self {
        Self {
            id,
            started_at,
            state: LevelState::new(),
            response: None,
        }
    }

    pub fn phase(&self) -> SessionPhase {
        match (&self.response, self.state.interacted) {
            (Some(_), _) => SessionPhase::Responded,
            (None, true) => SessionPhase::Engaged,
            (None, false) => SessionPhase::Default,
        }
    }

    /// Borrow the level state for an input event. Fails once the session
    /// has been confirmed.
    pub fn input(&mut self) -> Result<&mut LevelState> {
        if self.response.is_some() {
            return Err(anyhow!("mood already confirmed for session {}", self.id));
        }
        Ok(&mut self.state)
    }

    pub fn confirm(&mut self, now: DateTime<Utc>) -> Result<&ConfirmedResponse> {
        if self.response.is_some() {
            return Err(anyhow!("mood already confirmed for session {}", self.id));
        }
        if !self.state.can_confirm() {
            return Err(anyhow!("confirm is disabled until the slider has been used"));
        }

        let level = self.state.level;
        Ok(&*self.response.insert(ConfirmedResponse {
            level,
            tier: tier::classify(level),
            confirmed_at: now,
        }))
    }
}
