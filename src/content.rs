use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::PathBuf,
    sync::{Arc, RwLock},
};

use crate::mood::{level::SEGMENT_COUNT, tier::TierResponses, Level};

const ENABLE_LOGS: bool = true;

/// What the display shows before the slider has been touched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Placeholder {
    pub emoji: String,
    pub description: String,
}

impl Default for Placeholder {
    fn default() -> Self {
        Self {
            emoji: "🤔".into(),
            description: "How are you feeling today?".into(),
        }
    }
}

/// Static lookup tables the engine reads by segment index. Each table holds
/// exactly one entry per segment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MoodContent {
    pub emojis: [String; SEGMENT_COUNT],
    pub descriptions: [String; SEGMENT_COUNT],
    /// Fill colors, white-pink at level 1 to pink at level 10.
    pub colors: [String; SEGMENT_COUNT],
    #[serde(default)]
    pub placeholder: Placeholder,
    #[serde(default)]
    pub responses: TierResponses,
}

impl MoodContent {
    pub fn emoji(&self, level: Level) -> &str {
        &self.emojis[level.index().get()]
    }

    pub fn description(&self, level: Level) -> &str {
        &self.descriptions[level.index().get()]
    }
}

impl Default for MoodContent {
    fn default() -> Self {
        Self {
            emojis: ["😭", "😢", "😔", "😕", "😐", "🙂", "😊", "😄", "😁", "🤩"].map(String::from),
            descriptions: [
                "Totally down today...",
                "It was a rough day",
                "Not feeling my too good",
                "A bit under the weather",
                "Not too bad",
                "Feeling okay",
                "Everything was alright",
                "Awesome!",
                "It was a really lovely day!",
                "On top of the world!!!",
            ]
            .map(String::from),
            colors: [
                "#fff9fc", "#ffecf2", "#ffdfe9", "#ffd1e0", "#ffc4d8", "#ffb6cf", "#ffa8c7",
                "#ff9abe", "#ff8cb6", "#ff7eae",
            ]
            .map(String::from),
            placeholder: Placeholder::default(),
            responses: TierResponses::default(),
        }
    }
}

/// Holds the content tables, optionally backed by a JSON file.
pub struct ContentStore {
    path: Option<PathBuf>,
    data: RwLock<Arc<MoodContent>>,
}

impl ContentStore {
    /// Built-in tables, no backing file.
    pub fn builtin() -> Self {
        Self {
            path: None,
            data: RwLock::new(Arc::new(MoodContent::default())),
        }
    }

    /// Load tables from `path`. A missing file yields the built-in tables; a
    /// file that does not parse is logged and replaced by them as well.
    pub fn new(path: PathBuf) -> Result<Self> {
        let data = if path.exists() {
            let contents = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read mood content from {}", path.display()))?;
            serde_json::from_str(&contents).unwrap_or_else(|err| {
                crate::log_warn!(
                    "Ignoring malformed mood content in {}: {}",
                    path.display(),
                    err
                );
                MoodContent::default()
            })
        } else {
            MoodContent::default()
        };

        Ok(Self {
            path: Some(path),
            data: RwLock::new(Arc::new(data)),
        })
    }

    pub fn content(&self) -> Arc<MoodContent> {
        let guard = self.data.read().unwrap_or_else(|poisoned| poisoned.into_inner());
        Arc::clone(&guard)
    }

    /// Re-read the backing file. Unlike `new`, a malformed file is an error
    /// and the current tables stay in place.
    pub fn reload(&self) -> Result<Arc<MoodContent>> {
        let Some(path) = &self.path else {
            return Ok(self.content());
        };

        let data = if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read mood content from {}", path.display()))?;
            serde_json::from_str(&contents)
                .with_context(|| format!("Failed to parse mood content in {}", path.display()))?
        } else {
            MoodContent::default()
        };

        let data = Arc::new(data);
        let mut guard = self.data.write().unwrap_or_else(|poisoned| poisoned.into_inner());
        *guard = Arc::clone(&data);
        crate::log_info!("Reloaded mood content from {}", path.display());
        Ok(data)
    }
}
