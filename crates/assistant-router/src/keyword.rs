//! Keyword-matching response strategy.

use assistant_core::{AssistantError, IncomingMessage, Responder};
use async_trait::async_trait;
use rand::seq::SliceRandom;
use tracing::debug;

use crate::rules::{RouteRule, DEFAULT_RULES};

/// Generic acknowledgements used when no rule matches. Each template embeds
/// the original message verbatim; selection among them is uniformly random.
const FALLBACK_TEMPLATES: &[&str] = &[
    "I understand you said: '{message}'. How can I help you with that?",
    "That's interesting! Let me think about '{message}'... What would you like me to do?",
    "I heard you mention '{message}'. Is there something specific you'd like me to help you with?",
    "Thanks for sharing that with me. How can I assist you regarding '{message}'?",
    "I'm here to help! What would you like me to do about '{message}'?",
];

fn render_fallback(template: &str, message: &str) -> String {
    template.replace("{message}", message)
}

/// Maps a message to a reply by scanning an ordered rule table.
///
/// Pure apart from the clock read for the time rule and the random choice
/// among fallback templates; safe to share across concurrent requests.
pub struct KeywordRouter {
    rules: &'static [RouteRule],
}

impl KeywordRouter {
    /// Creates a router over the built-in rule table.
    pub fn new() -> Self {
        Self::with_rules(DEFAULT_RULES)
    }

    /// Creates a router over a custom rule table.
    pub fn with_rules(rules: &'static [RouteRule]) -> Self {
        Self { rules }
    }

    /// Resolves a message to a reply. First matching rule wins; unmatched
    /// messages get a randomized acknowledgement echoing the original text.
    pub fn route(&self, message: &str) -> String {
        let lowered = message.to_lowercase();

        for (idx, rule) in self.rules.iter().enumerate() {
            if rule.matches(&lowered) {
                debug!("Rule {} matched ({:?})", idx, rule.keywords);
                return rule.reply.render();
            }
        }

        debug!("No rule matched, using fallback");
        let template = FALLBACK_TEMPLATES
            .choose(&mut rand::thread_rng())
            .expect("fallback pool must not be empty");
        render_fallback(template, message)
    }
}

impl Default for KeywordRouter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Responder for KeywordRouter {
    fn name(&self) -> &'static str {
        "keyword"
    }

    async fn respond(&self, message: &IncomingMessage) -> Result<String, AssistantError> {
        Ok(self.route(message.text()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    #[test]
    fn every_input_gets_a_non_empty_reply() {
        let router = KeywordRouter::new();
        for input in ["hello", "what's the weather", "tell me a joke", "x"] {
            assert!(!router.route(input).is_empty(), "empty reply for {input:?}");
        }
    }

    #[test]
    fn greeting_is_the_fixed_string() {
        let router = KeywordRouter::new();
        assert_eq!(router.route("hello"), "Hello! How can I assist you today?");
        assert_eq!(router.route("HEY you"), "Hello! How can I assist you today?");
    }

    #[test]
    fn time_reply_carries_a_parseable_clock_value() {
        let router = KeywordRouter::new();
        let reply = router.route("What time is it?");

        let value = reply
            .strip_prefix("The current time is ")
            .and_then(|rest| rest.strip_suffix('.'))
            .unwrap_or_else(|| panic!("unexpected time reply: {reply}"));
        assert!(NaiveTime::parse_from_str(value, "%I:%M %p").is_ok());
    }

    #[test]
    fn matching_is_case_insensitive() {
        let router = KeywordRouter::new();
        assert_eq!(
            router.route("WEATHER please"),
            router.route("weather please")
        );
    }

    #[test]
    fn earlier_rules_shadow_later_ones() {
        let router = KeywordRouter::new();
        let reply = router.route("what's the weather at this time");
        assert!(reply.contains("weather information"), "got: {reply}");
    }

    #[test]
    fn unmatched_messages_get_a_fallback_echoing_the_original() {
        let router = KeywordRouter::new();
        let message = "Quantum Zebras";
        let reply = router.route(message);

        let pool: Vec<String> = FALLBACK_TEMPLATES
            .iter()
            .map(|t| render_fallback(t, message))
            .collect();
        assert!(pool.contains(&reply), "reply not in fallback pool: {reply}");
        assert!(reply.contains(message));
    }

    #[tokio::test]
    async fn responder_impl_delegates_to_route() {
        let router = KeywordRouter::new();
        let message = assistant_core::IncomingMessage::new("hello", None).unwrap();
        let reply = router.respond(&message).await.unwrap();
        assert_eq!(reply, "Hello! How can I assist you today?");
    }
}
