//! Synthetic assistant replies
//!
//! The conversation store only talks to the [`ResponseGenerator`] trait, so
//! the canned production generator can be swapped for a deterministic stub.

use async_trait::async_trait;
use common::config::GeneratorConfig;
use rand::Rng;
use rand::seq::SliceRandom;
use std::time::Duration;

use crate::models::chat::Message;

/// Produces the content of an assistant message
#[async_trait]
pub trait ResponseGenerator: Send + Sync {
    /// Reply to `trigger`, given the messages already in the chat
    async fn generate(&self, trigger: &str, history: &[Message]) -> String;
}

const OPENERS: &[&str] = &[
    "That's a great question! Let me think about that for a moment...",
    "I understand what you're asking. Here's my perspective on that:",
    "That's an interesting topic. Let me break it down for you:",
    "I can help you with that. Here's what I would suggest:",
    "That's a complex question, but I'll do my best to explain:",
    "Great point! Let me elaborate on that:",
    "I see what you're getting at. Here's my analysis:",
    "That's exactly the kind of question I enjoy answering!",
    "Let me provide you with a comprehensive answer:",
    "I appreciate you asking about this. Here's what I think:",
];

const CODE_REPLY: &str = "I'd be happy to help you with coding! Here's what I suggest:\n\n\
```python\n# Example code\ndef example_function():\n    return 'Hello, World!'\n```\n\n\
This is a basic example. Could you provide more details about what specific programming \
challenge you're working on?";

/// Characters of the trigger quoted back in an opening reply
const QUOTE_CHARS: usize = 30;

/// Canned replies with keyword routing and a simulated typing delay
#[derive(Debug, Clone)]
pub struct CannedResponseGenerator {
    min_delay: Duration,
    max_delay: Duration,
}

impl CannedResponseGenerator {
    /// Create a generator that waits between `min_delay` and `max_delay`
    pub fn new(min_delay: Duration, max_delay: Duration) -> Self {
        Self {
            min_delay,
            max_delay: max_delay.max(min_delay),
        }
    }

    pub fn from_config(config: &GeneratorConfig) -> Self {
        Self::new(
            Duration::from_millis(config.min_delay_ms),
            Duration::from_millis(config.max_delay_ms),
        )
    }

    fn typing_delay(&self) -> Duration {
        if self.max_delay.is_zero() {
            return Duration::ZERO;
        }
        rand::thread_rng().gen_range(self.min_delay..=self.max_delay)
    }

    fn compose(&self, trigger: &str, history: &[Message]) -> String {
        let mut rng = rand::thread_rng();
        let opener = OPENERS.choose(&mut rng).copied().unwrap_or(OPENERS[0]);

        if history.is_empty() {
            let quoted: String = trigger.chars().take(QUOTE_CHARS).collect();
            return format!(
                "{opener}\n\nRegarding your question about '{quoted}...', I think this is a \
                 fascinating topic that deserves a thoughtful response. Let me elaborate on the \
                 key points and provide you with a comprehensive answer that addresses your \
                 specific needs."
            );
        }

        let lowered = trigger.to_lowercase();
        if lowered.contains("code") || lowered.contains("programming") {
            CODE_REPLY.to_string()
        } else if lowered.contains("explain") || lowered.contains("what is") {
            format!(
                "Great question! Let me explain that concept for you.\n\n{opener}\n\nThe topic \
                 you're asking about has several important aspects to consider. Would you like me \
                 to dive deeper into any particular area?"
            )
        } else {
            format!(
                "{opener}\n\nI notice you mentioned something interesting. Based on your message, \
                 I think the best approach would be to break this down into manageable steps. \
                 What specific aspect would you like to focus on first?"
            )
        }
    }
}

#[async_trait]
impl ResponseGenerator for CannedResponseGenerator {
    async fn generate(&self, trigger: &str, history: &[Message]) -> String {
        let delay = self.typing_delay();
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        self.compose(trigger, history)
    }
}

/// Generator that answers instantly with a fixed text
#[cfg(test)]
#[derive(Debug, Clone)]
pub struct FixedResponseGenerator(pub String);

#[cfg(test)]
impl FixedResponseGenerator {
    pub fn new(reply: &str) -> Self {
        Self(reply.to_string())
    }
}

#[cfg(test)]
#[async_trait]
impl ResponseGenerator for FixedResponseGenerator {
    async fn generate(&self, _trigger: &str, _history: &[Message]) -> String {
        self.0.clone()
    }
}
