//! Response strategies behind the [`Responder`](assistant_core::Responder) trait.
//!
//! Two interchangeable implementations: an ordered keyword rule table with a
//! randomized fallback, and a model-backed responder that delegates to an
//! external LLM.

mod keyword;
mod model;
mod prompts;
mod rules;

pub use keyword::KeywordRouter;
pub use model::ModelResponder;
pub use prompts::ROUTE_TASK_PROMPT;
pub use rules::{RouteRule, RuleReply, DEFAULT_RULES};
