pub mod content;
pub mod mood;
pub mod utils;

use std::sync::Arc;

use content::ContentStore;
use mood::MoodController;

/// Shared state handed to the command layer.
pub struct AppState {
    pub content: Arc<ContentStore>,
    pub mood: MoodController,
}

impl AppState {
    pub fn new(content: ContentStore, surface: Arc<dyn mood::MoodSurface>) -> Self {
        let content = Arc::new(content);
        Self {
            mood: MoodController::new(content.clone(), surface),
            content,
        }
    }
}

#[cfg(feature = "desktop")]
#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    use mood::commands::{
        click_mood_segment, click_mood_track, confirm_mood, drag_mood_slider, get_mood_state,
        reload_mood_content, restart_mood_session,
    };
    use tauri::Manager;

    // Reads RUST_LOG
    utils::logging::init();

    log::info!("Mood check starting up...");

    tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .setup(|app| {
            let result = (|| -> anyhow::Result<()> {
                let config_dir = app
                    .path()
                    .app_config_dir()
                    .map_err(|err| anyhow::anyhow!(err))?;
                std::fs::create_dir_all(&config_dir)?;

                let content = ContentStore::new(config_dir.join("content.json"))?;
                let surface: Arc<dyn mood::MoodSurface> = Arc::new(app.handle().clone());
                app.manage(AppState::new(content, surface));

                Ok(())
            })();

            result.map_err(|err| err.into())
        })
        .invoke_handler(tauri::generate_handler![
            get_mood_state,
            drag_mood_slider,
            click_mood_segment,
            click_mood_track,
            confirm_mood,
            restart_mood_session,
            reload_mood_content,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
