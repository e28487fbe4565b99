use std::{collections::HashMap, sync::Arc};

use chrono::{DateTime, Utc};
use tokio::sync::{Mutex, RwLock};
use uuid::Uuid;

use crate::{
    errors::{PlayLogError, PlayLogResult},
    log_info,
    models::SessionInfo,
    tagging::PlayLogger,
};

const ENABLE_LOGS: bool = true;

struct Session {
    title: Option<String>,
    started_at: DateTime<Utc>,
    logger: Arc<Mutex<PlayLogger>>,
}

/// Play logs keyed by session id. Each log has its own lock so appends within a
/// session are serialized and sessions never observe each other.
#[derive(Clone, Default)]
pub struct SessionRegistry {
    sessions: Arc<RwLock<HashMap<String, Session>>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn start_session(&self, title: Option<String>) -> SessionInfo {
        let id = Uuid::new_v4().to_string();
        let title = normalize_title(title);
        let started_at = Utc::now();

        self.sessions.write().await.insert(
            id.clone(),
            Session {
                title: title.clone(),
                started_at,
                logger: Arc::new(Mutex::new(PlayLogger::new())),
            },
        );

        log_info!("Started session {id} ({})", title.as_deref().unwrap_or("untitled"));

        SessionInfo {
            id,
            title,
            started_at,
            entry_count: 0,
        }
    }

    /// Change a session's title; a blank title clears it. The log is untouched.
    pub async fn rename_session(
        &self,
        id: &str,
        title: Option<String>,
    ) -> PlayLogResult<SessionInfo> {
        let title = normalize_title(title);
        let (started_at, logger) = {
            let mut sessions = self.sessions.write().await;
            let session = sessions
                .get_mut(id)
                .ok_or_else(|| PlayLogError::SessionNotFound(id.to_string()))?;
            session.title = title.clone();
            (session.started_at, session.logger.clone())
        };

        log_info!("Renamed session {id} to {}", title.as_deref().unwrap_or("untitled"));

        let entry_count = logger.lock().await.len();
        Ok(SessionInfo {
            id: id.to_string(),
            title,
            started_at,
            entry_count,
        })
    }

    /// Drop a session and its log.
    pub async fn end_session(&self, id: &str) -> PlayLogResult<SessionInfo> {
        let session = self
            .sessions
            .write()
            .await
            .remove(id)
            .ok_or_else(|| PlayLogError::SessionNotFound(id.to_string()))?;

        let entry_count = session.logger.lock().await.len();
        log_info!("Ended session {id} with {entry_count} plays");

        Ok(SessionInfo {
            id: id.to_string(),
            title: session.title,
            started_at: session.started_at,
            entry_count,
        })
    }

    /// Run `f` against the session's logger while holding its lock.
    pub async fn with_session<R>(
        &self,
        id: &str,
        f: impl FnOnce(&mut PlayLogger) -> R,
    ) -> PlayLogResult<R> {
        let logger = {
            let sessions = self.sessions.read().await;
            sessions
                .get(id)
                .map(|s| s.logger.clone())
                .ok_or_else(|| PlayLogError::SessionNotFound(id.to_string()))?
        };

        let mut guard = logger.lock().await;
        Ok(f(&mut guard))
    }

    pub async fn list_sessions(&self) -> Vec<SessionInfo> {
        let sessions = self.sessions.read().await;
        let mut infos = Vec::with_capacity(sessions.len());
        for (id, session) in sessions.iter() {
            infos.push(SessionInfo {
                id: id.clone(),
                title: session.title.clone(),
                started_at: session.started_at,
                entry_count: session.logger.lock().await.len(),
            });
        }
        infos.sort_by(|a, b| a.started_at.cmp(&b.started_at));
        infos
    }
}

fn normalize_title(title: Option<String>) -> Option<String> {
    title
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
}
