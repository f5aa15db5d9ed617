//! Shared application state: the selected response strategy and the
//! in-memory preference store.

use std::sync::Arc;
use std::time::Duration;

use assistant_config::{ResponderMode, ServerConfig};
use assistant_core::Responder;
use assistant_router::{KeywordRouter, ModelResponder};
use dashmap::DashMap;
use tracing::info;

use crate::dto::Preferences;

pub struct AppState {
    pub responder: Arc<dyn Responder>,
    preferences: DashMap<String, Preferences>,
}

impl AppState {
    /// Builds state from config, constructing the selected strategy once at
    /// startup. Strategies receive their configuration explicitly; nothing
    /// is read from ambient globals afterwards.
    pub fn new(config: &ServerConfig) -> Self {
        let responder: Arc<dyn Responder> = match config.mode {
            ResponderMode::Keyword => Arc::new(KeywordRouter::new()),
            ResponderMode::Model => Arc::new(ModelResponder::new(
                &config.model,
                config.api_base.as_deref(),
                Duration::from_secs(config.llm_timeout_secs),
            )),
        };
        info!("Responder strategy: {}", responder.name());

        Self::with_responder(responder)
    }

    /// Builds state around an explicit strategy.
    pub fn with_responder(responder: Arc<dyn Responder>) -> Self {
        Self {
            responder,
            preferences: DashMap::new(),
        }
    }

    /// Stored preferences for a user, or the defaults.
    pub fn preferences_for(&self, user_id: &str) -> Preferences {
        self.preferences
            .get(user_id)
            .map(|p| p.clone())
            .unwrap_or_default()
    }

    /// Replaces a user's stored preferences.
    pub fn save_preferences(&self, user_id: &str, prefs: Preferences) {
        self.preferences.insert(user_id.to_string(), prefs);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assistant_router::KeywordRouter;

    #[test]
    fn unknown_user_gets_default_preferences() {
        let state = AppState::with_responder(Arc::new(KeywordRouter::new()));
        let prefs = state.preferences_for("nobody");
        assert_eq!(prefs.theme, "light");
        assert!(prefs.auto_scroll);
    }

    #[test]
    fn saved_preferences_roundtrip() {
        let state = AppState::with_responder(Arc::new(KeywordRouter::new()));
        let prefs = Preferences {
            theme: "dark".to_string(),
            ..Preferences::default()
        };
        state.save_preferences("alice", prefs);

        assert_eq!(state.preferences_for("alice").theme, "dark");
        assert_eq!(state.preferences_for("bob").theme, "light");
    }
}
