//! End-to-end tests for the mood session controller.
//!
//! Drives `MoodController` the way the command layer does and checks what a
//! presentation surface would receive.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::{anyhow, Result};

use moodcheck_lib::content::{ContentStore, MoodContent};
use moodcheck_lib::mood::{
    DisplayChanged, MoodController, MoodSurface, ResponseReady, SessionPhase, Tier, TrackGeometry,
};
use moodcheck_lib::AppState;

/// Records everything the controller presents.
#[derive(Default)]
struct RecordingSurface {
    displays: Mutex<Vec<DisplayChanged>>,
    responses: Mutex<Vec<ResponseReady>>,
}

impl MoodSurface for RecordingSurface {
    fn show_display(&self, event: &DisplayChanged) -> Result<()> {
        self.displays.lock().unwrap().push(event.clone());
        Ok(())
    }

    fn show_response(&self, event: &ResponseReady) -> Result<()> {
        self.responses.lock().unwrap().push(event.clone());
        Ok(())
    }
}

/// A surface whose window has gone away.
struct ClosedSurface;

impl MoodSurface for ClosedSurface {
    fn show_display(&self, _event: &DisplayChanged) -> Result<()> {
        Err(anyhow!("window closed"))
    }

    fn show_response(&self, _event: &ResponseReady) -> Result<()> {
        Err(anyhow!("window closed"))
    }
}

/// A surface that takes a while to render one particular level.
struct SlowSurface {
    slow_level: u8,
    delay: Duration,
    levels: Mutex<Vec<u8>>,
}

impl MoodSurface for SlowSurface {
    fn show_display(&self, event: &DisplayChanged) -> Result<()> {
        if event.level.get() == self.slow_level {
            std::thread::sleep(self.delay);
        }
        self.levels.lock().unwrap().push(event.level.get());
        Ok(())
    }

    fn show_response(&self, _event: &ResponseReady) -> Result<()> {
        Ok(())
    }
}

fn setup() -> (MoodController, Arc<RecordingSurface>) {
    moodcheck_lib::utils::logging::init();
    let surface = Arc::new(RecordingSurface::default());
    let controller = MoodController::new(Arc::new(ContentStore::builtin()), surface.clone());
    (controller, surface)
}

fn track() -> TrackGeometry {
    TrackGeometry::new(100.0, 1000.0)
}

#[tokio::test]
async fn fresh_session_shows_placeholder_and_blocks_confirm() -> Result<()> {
    let (controller, surface) = setup();

    let snapshot = controller.get_snapshot().await;
    assert_eq!(snapshot.session.phase(), SessionPhase::Default);
    assert_eq!(snapshot.session.state.level.get(), 1);
    assert_eq!(snapshot.projection.emoji, "🤔");
    assert_eq!(snapshot.projection.description, "How are you feeling today?");
    assert!(!snapshot.projection.confirm_enabled);
    assert!(snapshot.tier.is_none());

    assert!(controller.confirm().await.is_err());
    assert!(surface.responses.lock().unwrap().is_empty());
    Ok(())
}

#[tokio::test]
async fn track_click_to_level_three_gets_low_response() -> Result<()> {
    let (controller, surface) = setup();

    // 250px into a 1000px track that starts at x=100.
    let snapshot = controller.click_track(350.0, track()).await?;
    assert_eq!(snapshot.session.state.level.get(), 3);
    assert_eq!(snapshot.session.phase(), SessionPhase::Engaged);
    assert!(snapshot.projection.confirm_enabled);
    assert_eq!(snapshot.projection.emoji, "😔");

    let response = controller.confirm().await?;
    assert_eq!(response.tier, Tier::Low);
    assert_eq!(response.payload.title, "I'm here, gorgeous!");
    assert_eq!(response.payload.title_color, "#ffa6ca");
    assert_eq!(response.payload.media_ref, "images/empathy.gif");

    let responses = surface.responses.lock().unwrap();
    assert_eq!(responses.len(), 1);
    assert_eq!(responses[0].payload, response.payload);
    Ok(())
}

#[tokio::test]
async fn low_payload_is_the_same_for_levels_one_through_four() -> Result<()> {
    let mut payloads = Vec::new();
    for level in 1..=4 {
        let (controller, _surface) = setup();
        controller.drag(level).await?;
        payloads.push(controller.confirm().await?.payload);
    }
    assert!(payloads.windows(2).all(|pair| pair[0] == pair[1]));
    Ok(())
}

#[tokio::test]
async fn mid_and_high_tiers_follow_the_level() -> Result<()> {
    let (controller, _surface) = setup();
    controller.click_segment(5).await?;
    let response = controller.confirm().await?;
    assert_eq!(response.level.get(), 6);
    assert_eq!(response.tier, Tier::Mid);
    assert_eq!(response.payload.title, "It's okay!");

    let (controller, _surface) = setup();
    controller.click_track(1095.0, track()).await?;
    let response = controller.confirm().await?;
    assert_eq!(response.level.get(), 10);
    assert_eq!(response.tier, Tier::High);
    assert_eq!(response.payload.title, "That's great to hear!");
    Ok(())
}

#[tokio::test]
async fn choosing_level_one_explicitly_enables_confirm() -> Result<()> {
    let (controller, _surface) = setup();

    let snapshot = controller.click_segment(0).await?;
    assert_eq!(snapshot.session.state.level.get(), 1);
    assert!(snapshot.projection.confirm_enabled);
    assert_eq!(snapshot.projection.emoji, "😭");
    assert!(snapshot.projection.segments[0].active);

    assert_eq!(controller.confirm().await?.tier, Tier::Low);
    Ok(())
}

#[tokio::test]
async fn every_input_is_presented_once() -> Result<()> {
    let (controller, surface) = setup();

    controller.drag(4).await?;
    controller.drag(7).await?;
    controller.click_segment(-3).await?;
    controller.click_track(-500.0, track()).await?;

    let displays = surface.displays.lock().unwrap();
    let levels: Vec<u8> = displays.iter().map(|event| event.level.get()).collect();
    assert_eq!(levels, vec![4, 7, 1, 1]);
    assert!(displays.iter().all(|event| event.interacted));
    Ok(())
}

#[tokio::test]
async fn session_is_terminal_after_confirm() -> Result<()> {
    let (controller, surface) = setup();

    controller.drag(9).await?;
    controller.confirm().await?;

    assert!(controller.drag(2).await.is_err());
    assert!(controller.click_segment(2).await.is_err());
    assert!(controller.click_track(300.0, track()).await.is_err());
    assert!(controller.confirm().await.is_err());

    let snapshot = controller.get_snapshot().await;
    assert_eq!(snapshot.session.phase(), SessionPhase::Responded);
    assert_eq!(snapshot.session.state.level.get(), 9);
    assert_eq!(snapshot.tier, Some(Tier::High));
    assert!(snapshot.payload.is_some());
    assert_eq!(surface.responses.lock().unwrap().len(), 1);
    Ok(())
}

#[tokio::test]
async fn restart_begins_a_new_default_session() -> Result<()> {
    let (controller, surface) = setup();

    let first_id = controller.get_snapshot().await.session.id;
    controller.drag(6).await?;
    controller.confirm().await?;

    let snapshot = controller.restart().await;
    assert_ne!(snapshot.session.id, first_id);
    assert_eq!(snapshot.session.phase(), SessionPhase::Default);
    assert!(!snapshot.projection.confirm_enabled);
    assert!(controller.confirm().await.is_err());

    let last = surface.displays.lock().unwrap().last().cloned().unwrap();
    assert_eq!(last.session_id, snapshot.session.id);
    assert!(!last.interacted);
    Ok(())
}

#[tokio::test]
async fn presentation_failures_do_not_undo_transitions() -> Result<()> {
    let controller = MoodController::new(Arc::new(ContentStore::builtin()), Arc::new(ClosedSurface));

    let snapshot = controller.drag(5).await?;
    assert_eq!(snapshot.session.state.level.get(), 5);

    let response = controller.confirm().await?;
    assert_eq!(response.tier, Tier::Mid);
    Ok(())
}

#[tokio::test]
async fn concurrent_inputs_each_apply_atomically() -> Result<()> {
    let (controller, surface) = setup();

    let handles: Vec<_> = (1..=10)
        .map(|level| {
            let controller = controller.clone();
            tokio::spawn(async move { controller.drag(level).await })
        })
        .collect();
    for handle in handles {
        handle.await??;
    }

    let displays = surface.displays.lock().unwrap();
    assert_eq!(displays.len(), 10);
    for event in displays.iter() {
        let active = event
            .projection
            .segments
            .iter()
            .position(|segment| segment.active)
            .unwrap();
        assert_eq!(active + 1, event.level.get() as usize);
    }
    Ok(())
}

#[tokio::test]
async fn reloaded_content_reaches_the_controller() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("content.json");
    let state = AppState::new(ContentStore::new(path.clone())?, Arc::new(RecordingSurface::default()));

    let mut custom = MoodContent::default();
    custom.responses.high.message = "Keep going!".into();
    custom.emojis[7] = "🥳".into();
    std::fs::write(&path, serde_json::to_string(&custom)?)?;
    state.content.reload()?;

    let snapshot = state.mood.drag(8).await?;
    assert_eq!(snapshot.projection.emoji, "🥳");
    let response = state.mood.confirm().await?;
    assert_eq!(response.payload.message, "Keep going!");
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn slow_presentation_does_not_reorder_displays() -> Result<()> {
    let surface = Arc::new(SlowSurface {
        slow_level: 3,
        delay: Duration::from_millis(300),
        levels: Mutex::new(Vec::new()),
    });
    let controller = MoodController::new(Arc::new(ContentStore::builtin()), surface.clone());

    let first = {
        let controller = controller.clone();
        tokio::spawn(async move { controller.drag(3).await })
    };
    tokio::time::sleep(Duration::from_millis(50)).await;
    let second = {
        let controller = controller.clone();
        tokio::spawn(async move { controller.drag(7).await })
    };
    first.await??;
    second.await??;

    let snapshot = controller.get_snapshot().await;
    assert_eq!(snapshot.session.state.level.get(), 7);
    assert_eq!(*surface.levels.lock().unwrap(), vec![3, 7]);

    let response = controller.confirm().await?;
    assert_eq!(response.level.get(), 7);
    assert_eq!(response.tier, Tier::High);
    Ok(())
}
