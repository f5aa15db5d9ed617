//! Root and status endpoints.

use axum::Json;
use chrono::Utc;

use crate::dto::{RootStatus, StatusReport};

/// Capabilities advertised to the frontend.
const FEATURES: &[&str] = &[
    "voice_recognition",
    "text_to_speech",
    "weather_info",
    "time_info",
    "web_search",
    "email_sending",
    "reminders",
    "notes",
];

pub async fn root() -> Json<RootStatus> {
    Json(RootStatus {
        status: "AI Assistant Online",
        version: env!("CARGO_PKG_VERSION"),
    })
}

pub async fn status() -> Json<StatusReport> {
    Json(StatusReport {
        status: "online",
        timestamp: Utc::now(),
        features: FEATURES,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn status_lists_the_advertised_features() {
        let Json(report) = status().await;
        assert_eq!(report.status, "online");
        assert!(report.features.contains(&"time_info"));
        assert_eq!(report.features.len(), 8);
    }
}
