use std::path::PathBuf;

use chrono::Local;
use serde::Serialize;
use tauri::{AppHandle, Emitter, Runtime, State};

use crate::{
    export::{save_to_dir, CsvExport},
    log_error, log_info,
    models::{Entry, FormState},
    tagging::{stats::PlayStats, table::TableView, FormView},
    AppState,
};

const ENABLE_LOGS: bool = true;

#[derive(Serialize, Clone)]
#[serde(rename_all = "camelCase")]
struct PlayLogChangedEvent {
    session_id: String,
    entry: Entry,
    table: TableView,
}

#[tauri::command]
pub async fn render_form(
    state: State<'_, AppState>,
    session_id: String,
) -> Result<FormView, String> {
    let now = Local::now().time();
    state
        .sessions
        .with_session(&session_id, |log| log.render_form(now))
        .await
        .map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn add_entry<R: Runtime>(
    state: State<'_, AppState>,
    app_handle: AppHandle<R>,
    session_id: String,
    form: FormState,
) -> Result<Entry, String> {
    let settings = state.settings.logger();
    let now = Local::now().time();

    let (entry, table) = state
        .sessions
        .with_session(&session_id, |log| {
            log.add_entry(form, now, &settings)
                .map(|entry| (entry, log.render_table()))
        })
        .await
        .and_then(|result| result)
        .map_err(|e| e.to_string())?;

    let payload = PlayLogChangedEvent {
        session_id,
        entry: entry.clone(),
        table,
    };
    if let Err(err) = app_handle.emit("play-log-changed", payload) {
        log_error!("Failed to emit play-log-changed: {err}");
    }

    Ok(entry)
}

#[tauri::command]
pub async fn get_table(
    state: State<'_, AppState>,
    session_id: String,
) -> Result<TableView, String> {
    state
        .sessions
        .with_session(&session_id, |log| log.render_table())
        .await
        .map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn get_stats(
    state: State<'_, AppState>,
    session_id: String,
) -> Result<PlayStats, String> {
    state
        .sessions
        .with_session(&session_id, |log| log.summarize())
        .await
        .map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn export_csv(
    state: State<'_, AppState>,
    session_id: String,
) -> Result<CsvExport, String> {
    let file_name = state.settings.logger().export_file_name;
    state
        .sessions
        .with_session(&session_id, |log| log.download(&file_name))
        .await
        .and_then(|result| result)
        .map_err(|e| e.to_string())
}

/// Write the CSV into the export directory and return its path.
#[tauri::command]
pub async fn save_csv(state: State<'_, AppState>, session_id: String) -> Result<PathBuf, String> {
    let file_name = state.settings.logger().export_file_name;
    let export = state
        .sessions
        .with_session(&session_id, |log| log.download(&file_name))
        .await
        .and_then(|result| result)
        .map_err(|e| e.to_string())?;

    let path = save_to_dir(&state.export_dir, &export.file_name, &export.bytes).map_err(|e| {
        log_error!("CSV export failed: {e}");
        e.to_string()
    })?;
    log_info!("Saved {} bytes to {}", export.bytes.len(), path.display());
    Ok(path)
}
