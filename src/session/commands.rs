use tauri::State;

use crate::{models::SessionInfo, AppState};

#[tauri::command]
pub async fn start_session(
    state: State<'_, AppState>,
    title: Option<String>,
) -> Result<SessionInfo, String> {
    Ok(state.sessions.start_session(title).await)
}

#[tauri::command]
pub async fn end_session(
    state: State<'_, AppState>,
    session_id: String,
) -> Result<SessionInfo, String> {
    state
        .sessions
        .end_session(&session_id)
        .await
        .map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn list_sessions(state: State<'_, AppState>) -> Result<Vec<SessionInfo>, String> {
    Ok(state.sessions.list_sessions().await)
}

#[tauri::command]
pub async fn rename_session(
    state: State<'_, AppState>,
    session_id: String,
    title: Option<String>,
) -> Result<SessionInfo, String> {
    state
        .sessions
        .rename_session(&session_id, title)
        .await
        .map_err(|e| e.to_string())
}
