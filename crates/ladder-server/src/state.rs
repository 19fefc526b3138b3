use crate::auth::Sessions;
use ladder_core::config::Config;
use ladder_core::store::SheetStore;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Shared application state passed to all route handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub store: Arc<dyn SheetStore>,
    pub sessions: Sessions,
    /// Serializes whole-sheet read-modify-write appends within this process.
    /// Cross-process interleaving is a store-level property we accept.
    pub append_lock: Arc<Mutex<()>>,
}

impl AppState {
    pub fn new(config: Config, store: Box<dyn SheetStore>) -> Self {
        Self {
            config: Arc::new(config),
            store: Arc::from(store),
            sessions: Sessions::new(),
            append_lock: Arc::new(Mutex::new(())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ladder_core::store::MemorySheetStore;

    #[test]
    fn new_state_holds_config() {
        let state = AppState::new(Config::default(), Box::new(MemorySheetStore::new()));
        assert_eq!(state.config.worksheet, "data");
    }
}
