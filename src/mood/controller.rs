use std::sync::Arc;

use anyhow::Result;
use chrono::Utc;
use serde::Serialize;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::content::ContentStore;

use super::{
    level::SegmentIndex,
    projector::{self, DisplayProjection},
    resolver::TrackGeometry,
    state::{LevelState, MoodSession},
    surface::{DisplayChanged, MoodSurface, ResponseReady},
    tier::{ResponsePayload, Tier},
};

const ENABLE_LOGS: bool = true;

#[derive(Debug, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct MoodSnapshot {
    pub session: MoodSession,
    pub projection: DisplayProjection,
    pub tier: Option<Tier>,
    pub payload: Option<ResponsePayload>,
}

/// Owns the single mood session. Every input event takes the session lock
/// once and presents its projection before releasing it, so the surface
/// receives transitions in the order they were applied.
#[derive(Clone)]
pub struct MoodController {
    session: Arc<Mutex<MoodSession>>,
    content: Arc<ContentStore>,
    surface: Arc<dyn MoodSurface>,
}

impl MoodController {
    pub fn new(content: Arc<ContentStore>, surface: Arc<dyn MoodSurface>) -> Self {
        Self {
            session: Arc::new(Mutex::new(new_session())),
            content,
            surface,
        }
    }

    pub async fn get_snapshot(&self) -> MoodSnapshot {
        let session = self.session.lock().await;
        self.snapshot_of(&session)
    }

    /// Continuous drag on the slider; `value` is the raw slider position.
    pub async fn drag(&self, value: i64) -> Result<MoodSnapshot> {
        self.apply_input(|state| state.drag_to(value)).await
    }

    /// Click on one segment; out-of-range indexes snap to the nearest end.
    pub async fn click_segment(&self, index: i64) -> Result<MoodSnapshot> {
        let index = SegmentIndex::clamped(index);
        self.apply_input(|state| state.click_segment(index)).await
    }

    /// Click anywhere on the track, resolved against the geometry captured
    /// with the click.
    pub async fn click_track(&self, click_x: f64, geometry: TrackGeometry) -> Result<MoodSnapshot> {
        self.apply_input(|state| state.click_track(click_x, geometry)).await
    }

    pub async fn confirm(&self) -> Result<ResponseReady> {
        let event = {
            let mut session = self.session.lock().await;
            let confirmed = match session.confirm(Utc::now()).cloned() {
                Ok(confirmed) => confirmed,
                Err(err) => {
                    crate::log_warn!("Rejected confirm for session {}: {}", session.id, err);
                    return Err(err);
                }
            };

            crate::log_info!(
                "Session {} confirmed at level {} ({})",
                session.id,
                confirmed.level,
                confirmed.tier.as_str()
            );

            let event = ResponseReady {
                session_id: session.id.clone(),
                level: confirmed.level,
                tier: confirmed.tier,
                payload: self.content.content().responses.respond(confirmed.tier).clone(),
            };

            if let Err(err) = self.surface.show_response(&event) {
                crate::log_error!("Failed to present mood response: {}", err);
            }
            event
        };

        Ok(event)
    }

    /// Discard the current session and start over at the default state.
    pub async fn restart(&self) -> MoodSnapshot {
        let mut session = self.session.lock().await;
        *session = new_session();
        let snapshot = self.snapshot_of(&session);
        self.present(&display_event(&snapshot));
        snapshot
    }

    async fn apply_input<F>(&self, input: F) -> Result<MoodSnapshot>
    where
        F: FnOnce(&mut LevelState) -> bool,
    {
        let mut session = self.session.lock().await;
        let first_interaction = input(session.input()?);
        if first_interaction {
            crate::log_info!(
                "Session {} engaged at level {}",
                session.id,
                session.state.level
            );
        }

        // Presented under the lock so surfaces see transitions in order.
        let snapshot = self.snapshot_of(&session);
        self.present(&display_event(&snapshot));
        Ok(snapshot)
    }

    fn snapshot_of(&self, session: &MoodSession) -> MoodSnapshot {
        let content = self.content.content();
        let tier = session.response.as_ref().map(|response| response.tier);
        MoodSnapshot {
            session: session.clone(),
            projection: projector::project(&session.state, &content),
            tier,
            payload: tier.map(|tier| content.responses.respond(tier).clone()),
        }
    }

    fn present(&self, event: &DisplayChanged) {
        if let Err(err) = self.surface.show_display(event) {
            crate::log_error!("Failed to present mood display: {}", err);
        }
    }
}

fn new_session() -> MoodSession {
    let session = MoodSession::new(Uuid::new_v4().to_string(), Utc::now());
    crate::log_info!("Started mood session {}", session.id);
    session
}

fn display_event(snapshot: &MoodSnapshot) -> DisplayChanged {
    DisplayChanged {
        session_id: snapshot.session.id.clone(),
        level: snapshot.session.state.level,
        interacted: snapshot.session.state.interacted,
        projection: snapshot.projection.clone(),
    }
}
