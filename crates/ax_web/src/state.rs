use ax_core::Session;
use tokio::sync::RwLock;

/// Shared application state.
///
/// All session mutation goes through this single lock; the engine assumes
/// one logical actor at a time.
pub struct AppState {
    pub session: RwLock<Session>,
}

impl AppState {
    pub fn new(session: Session) -> Self {
        Self {
            session: RwLock::new(session),
        }
    }
}
