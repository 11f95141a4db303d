use anyhow::Result;
use serde::Serialize;

use super::{level::Level, projector::DisplayProjection, tier::ResponsePayload, tier::Tier};

pub const DISPLAY_CHANGED_EVENT: &str = "mood-display-changed";
pub const RESPONSE_READY_EVENT: &str = "mood-response-ready";

#[derive(Debug, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct DisplayChanged {
    pub session_id: String,
    pub level: Level,
    pub interacted: bool,
    pub projection: DisplayProjection,
}

#[derive(Debug, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ResponseReady {
    pub session_id: String,
    pub level: Level,
    pub tier: Tier,
    pub payload: ResponsePayload,
}

/// Where projections and responses are presented. On desktop this is the
/// webview; on receiving a `ResponseReady` it swaps the input view for the
/// response view.
pub trait MoodSurface: Send + Sync {
    fn show_display(&self, event: &DisplayChanged) -> Result<()>;
    fn show_response(&self, event: &ResponseReady) -> Result<()>;
}

#[cfg(feature = "desktop")]
mod desktop {
    use anyhow::{anyhow, Result};
    use tauri::{AppHandle, Emitter};

    use super::{DisplayChanged, MoodSurface, ResponseReady, DISPLAY_CHANGED_EVENT, RESPONSE_READY_EVENT};

    impl MoodSurface for AppHandle {
        fn show_display(&self, event: &DisplayChanged) -> Result<()> {
            self.emit(DISPLAY_CHANGED_EVENT, event)
                .map_err(|err| anyhow!("failed to emit {DISPLAY_CHANGED_EVENT}: {err}"))
        }

        fn show_response(&self, event: &ResponseReady) -> Result<()> {
            self.emit(RESPONSE_READY_EVENT, event)
                .map_err(|err| anyhow!("failed to emit {RESPONSE_READY_EVENT}: {err}"))
        }
    }
}
