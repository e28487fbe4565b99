mod errors;
mod export;
mod models;
mod session;
mod settings;
mod tagging;
mod utils;

use session::{
    commands::{end_session, list_sessions, rename_session, start_session},
    SessionRegistry,
};
use settings::{LoggerSettings, SettingsStore};
use std::path::PathBuf;
use tagging::commands::{add_entry, export_csv, get_stats, get_table, render_form, save_csv};
use tauri::{Manager, State};

pub(crate) struct AppState {
    pub(crate) sessions: SessionRegistry,
    pub(crate) settings: SettingsStore,
    pub(crate) export_dir: PathBuf,
}

#[tauri::command]
fn get_settings(state: State<AppState>) -> Result<LoggerSettings, String> {
    Ok(state.settings.logger())
}

#[tauri::command]
fn update_settings(settings: LoggerSettings, state: State<AppState>) -> Result<(), String> {
    state
        .settings
        .update_logger(settings)
        .map_err(|e| e.to_string())
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    // Initialize logging (reads RUST_LOG env var)
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Play Tagger starting up...");

    tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .setup(|app| {
            let result = (|| -> anyhow::Result<()> {
                let app_data_dir = app
                    .path()
                    .app_data_dir()
                    .map_err(|err| anyhow::anyhow!(err))?;
                std::fs::create_dir_all(&app_data_dir)?;

                let settings_path = app_data_dir.join("settings.json");
                let settings_store = SettingsStore::new(settings_path)?;

                // Exports land in Downloads when the platform has one.
                let export_dir = app
                    .path()
                    .download_dir()
                    .unwrap_or_else(|_| app_data_dir.join("exports"));

                app.manage(AppState {
                    sessions: SessionRegistry::new(),
                    settings: settings_store,
                    export_dir,
                });

                Ok(())
            })();

            result.map_err(|err| err.into())
        })
        .invoke_handler(tauri::generate_handler![
            start_session,
            end_session,
            list_sessions,
            rename_session,
            render_form,
            add_entry,
            get_table,
            get_stats,
            export_csv,
            save_csv,
            get_settings,
            update_settings,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
