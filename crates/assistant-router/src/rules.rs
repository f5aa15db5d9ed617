//! The ordered dispatch table: trigger keywords paired with replies.
//!
//! Rules are data, evaluated top-to-bottom with first match winning, so the
//! table can be inspected and tested in isolation.

use chrono::Local;

/// What a matched rule answers with.
#[derive(Debug, Clone, Copy)]
pub enum RuleReply {
    /// A fixed acknowledgement string.
    Static(&'static str),
    /// The current wall-clock time, formatted for speech.
    CurrentTime,
}

impl RuleReply {
    /// Renders the reply text.
    pub fn render(&self) -> String {
        match self {
            RuleReply::Static(text) => (*text).to_string(),
            RuleReply::CurrentTime => {
                format!("The current time is {}.", Local::now().format("%I:%M %p"))
            }
        }
    }
}

/// One entry of the dispatch table.
#[derive(Debug, Clone, Copy)]
pub struct RouteRule {
    pub keywords: &'static [&'static str],
    pub reply: RuleReply,
}

impl RouteRule {
    /// Tests whether any trigger keyword occurs in the lower-cased message.
    pub fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|kw| lowered.contains(kw))
    }
}

/// The built-in rule table. Order is part of the contract: earlier rules
/// shadow later ones when a message triggers several.
pub const DEFAULT_RULES: &[RouteRule] = &[
    RouteRule {
        keywords: &["weather", "temperature"],
        reply: RuleReply::Static(
            "I can help you with weather information. What city would you like to know about?",
        ),
    },
    RouteRule {
        keywords: &["time", "clock"],
        reply: RuleReply::CurrentTime,
    },
    RouteRule {
        keywords: &["search", "find", "look up"],
        reply: RuleReply::Static(
            "I can help you search for information. What would you like me to look up?",
        ),
    },
    RouteRule {
        keywords: &["email", "mail"],
        reply: RuleReply::Static("I can help you send emails. What would you like to send?"),
    },
    RouteRule {
        keywords: &["reminder", "remind"],
        reply: RuleReply::Static(
            "I can help you set reminders. What would you like me to remind you about?",
        ),
    },
    RouteRule {
        keywords: &["note", "write down"],
        reply: RuleReply::Static(
            "I can help you take notes. What would you like me to write down?",
        ),
    },
    RouteRule {
        keywords: &["hello", "hi", "hey"],
        reply: RuleReply::Static("Hello! How can I assist you today?"),
    },
    RouteRule {
        keywords: &["help", "what can you do"],
        reply: RuleReply::Static(
            "I can help you with various tasks:\n\
             - Get weather information\n\
             - Tell you the current time\n\
             - Search the web for information\n\
             - Send emails\n\
             - Set reminders and take notes\n\
             \n\
             Just ask me what you need help with!",
        ),
    },
];
