use tauri::State;

use crate::{
    mood::{MoodController, MoodSnapshot, ResponseReady, TrackGeometry},
    AppState,
};

fn controller_from_state(state: &State<'_, AppState>) -> MoodController {
    state.mood.clone()
}

#[tauri::command]
pub async fn get_mood_state(state: State<'_, AppState>) -> Result<MoodSnapshot, String> {
    let controller = controller_from_state(&state);
    Ok(controller.get_snapshot().await)
}

#[tauri::command]
pub async fn drag_mood_slider(state: State<'_, AppState>, value: i64) -> Result<MoodSnapshot, String> {
    let controller = controller_from_state(&state);
    controller.drag(value).await.map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn click_mood_segment(
    state: State<'_, AppState>,
    index: i64,
) -> Result<MoodSnapshot, String> {
    let controller = controller_from_state(&state);
    controller
        .click_segment(index)
        .await
        .map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn click_mood_track(
    state: State<'_, AppState>,
    click_x: f64,
    geometry: TrackGeometry,
) -> Result<MoodSnapshot, String> {
    let controller = controller_from_state(&state);
    controller
        .click_track(click_x, geometry)
        .await
        .map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn confirm_mood(state: State<'_, AppState>) -> Result<ResponseReady, String> {
    let controller = controller_from_state(&state);
    controller.confirm().await.map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn restart_mood_session(state: State<'_, AppState>) -> Result<MoodSnapshot, String> {
    let controller = controller_from_state(&state);
    Ok(controller.restart().await)
}

#[tauri::command]
pub async fn reload_mood_content(state: State<'_, AppState>) -> Result<MoodSnapshot, String> {
    state.content.reload().map_err(|e| e.to_string())?;
    let controller = controller_from_state(&state);
    Ok(controller.get_snapshot().await)
}
