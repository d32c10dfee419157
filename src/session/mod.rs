mod log;

pub use log::InteractionLog;

use parking_lot::RwLock;
use std::sync::Arc;
use uuid::Uuid;

use crate::config::EngineSettings;

/// A single user's browsing session
///
/// Owns the interaction log, the only mutable state the engine reads.
#[derive(Debug)]
pub struct Session {
    pub id: Uuid,
    log: InteractionLog,
}

/// A clone copies the history under a fresh session id
impl Clone for Session {
    fn clone(&self) -> Self {
        Self {
            id: Uuid::new_v4(),
            log: self.log.clone(),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Creates an empty session with the default history capacity
    pub fn new() -> Self {
        Self::with_settings(&EngineSettings::default())
    }

    pub fn with_settings(settings: &EngineSettings) -> Self {
        Self {
            id: Uuid::new_v4(),
            log: InteractionLog::with_capacity(settings.history_capacity),
        }
    }

    pub fn log(&self) -> &InteractionLog {
        &self.log
    }

    pub(crate) fn log_mut(&mut self) -> &mut InteractionLog {
        &mut self.log
    }
}

/// Session shared between threads
///
/// Recording takes the write lock and queries take the read lock, so
/// scoring never observes a half-applied append.
#[derive(Debug, Clone, Default)]
pub struct SharedSession {
    pub inner: Arc<RwLock<Session>>,
}

impl SharedSession {
    pub fn new(session: Session) -> Self {
        Self {
            inner: Arc::new(RwLock::new(session)),
        }
    }
}
