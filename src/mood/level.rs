use std::fmt;

use anyhow::{anyhow, Error};
use serde::{Deserialize, Serialize};

/// Number of segments on the slider track, one per level.
pub const SEGMENT_COUNT: usize = 10;

/// A 1-based mood rating, always within `Level::MIN..=Level::MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Level(u8);

impl Level {
    pub const MIN: Level = Level(1);
    pub const MAX: Level = Level(SEGMENT_COUNT as u8);

    pub fn new(value: u8) -> Option<Self> {
        (Self::MIN.0..=Self::MAX.0)
            .contains(&value)
            .then_some(Level(value))
    }

    /// Clamp arbitrary input (e.g. a raw slider value) into range.
    pub fn clamped(value: i64) -> Self {
        Level(value.clamp(Self::MIN.0 as i64, Self::MAX.0 as i64) as u8)
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn index(self) -> SegmentIndex {
        SegmentIndex(self.0 - 1)
    }

    pub fn all() -> impl Iterator<Item = Level> {
        (Self::MIN.0..=Self::MAX.0).map(Level)
    }
}

impl Default for Level {
    fn default() -> Self {
        Self::MIN
    }
}

impl TryFrom<u8> for Level {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Level::new(value).ok_or_else(|| anyhow!("level {value} is outside 1..=10"))
    }
}

impl From<Level> for u8 {
    fn from(level: Level) -> Self {
        level.0
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Zero-based segment position on the track; `Level = SegmentIndex + 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct SegmentIndex(u8);

impl SegmentIndex {
    pub const FIRST: SegmentIndex = SegmentIndex(0);
    pub const LAST: SegmentIndex = SegmentIndex(SEGMENT_COUNT as u8 - 1);

    pub fn clamped(value: i64) -> Self {
        SegmentIndex(value.clamp(Self::FIRST.0 as i64, Self::LAST.0 as i64) as u8)
    }

    pub fn get(self) -> usize {
        self.0 as usize
    }

    pub fn level(self) -> Level {
        Level(self.0 + 1)
    }
}
