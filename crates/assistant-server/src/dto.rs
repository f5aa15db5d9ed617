//! Request and response DTOs for the HTTP surface.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Body of POST /chat and /api/chat.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub user_id: Option<String>,
}

/// Body of GET /.
#[derive(Debug, Serialize)]
pub struct RootStatus {
    pub status: &'static str,
    pub version: &'static str,
}

/// Body of the health endpoints.
#[derive(Debug, Serialize)]
pub struct Health {
    pub status: &'static str,
    pub version: &'static str,
}

/// Body of GET /api/status.
#[derive(Debug, Serialize)]
pub struct StatusReport {
    pub status: &'static str,
    pub timestamp: DateTime<Utc>,
    pub features: &'static [&'static str],
}

/// Per-user frontend settings. Missing fields fall back to the defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub voice_speed: f32,
    pub voice_pitch: f32,
    pub auto_scroll: bool,
    pub theme: String,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            voice_speed: 1.0,
            voice_pitch: 1.0,
            auto_scroll: true,
            theme: "light".to_string(),
        }
    }
}

/// Query of GET /api/preferences.
#[derive(Debug, Deserialize)]
pub struct PreferencesQuery {
    #[serde(default)]
    pub user_id: Option<String>,
}

/// Body of POST /api/preferences.
#[derive(Debug, Deserialize)]
pub struct SavePreferencesRequest {
    #[serde(default)]
    pub user_id: Option<String>,
    pub preferences: Preferences,
}

/// Outcome of a preference save.
#[derive(Debug, Serialize)]
pub struct SaveOutcome {
    pub success: bool,
    pub message: &'static str,
}
