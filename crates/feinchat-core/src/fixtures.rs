//! Seed data injected into a session at construction
//!
//! Fixtures are immutable configuration, not globals: tests substitute their
//! own instead of sharing mutable state with the production catalog.

use std::collections::HashSet;

use chrono::{Duration, Utc};

use crate::error::{Error, Result};
use crate::types::ConversationSummary;

const GREETING: &str = "Hello! I'm Fein-AI, your investment assistant. How can I help you today?";

/// Immutable seed data for a chat session: the opening assistant greeting
/// and the fixed list of prior conversation summaries.
#[derive(Debug, Clone)]
pub struct ChatFixtures {
    pub greeting: String,
    pub history: Vec<ConversationSummary>,
}

impl ChatFixtures {
    /// The production seed set.
    pub fn builtin() -> Self {
        let now = Utc::now();
        Self {
            greeting: GREETING.to_string(),
            history: vec![
                ConversationSummary::new(
                    1,
                    "Portfolio Review Q4",
                    "Your portfolio shows...",
                    now - Duration::days(1),
                ),
                ConversationSummary::new(
                    2,
                    "Tesla Stock Analysis",
                    "Based on recent trends...",
                    now - Duration::days(2),
                ),
                ConversationSummary::new(
                    3,
                    "XAUUSD Investment",
                    "Gold has shown...",
                    now - Duration::days(3),
                ),
            ],
        }
    }

    /// Check seed invariants before a session is built around them.
    pub fn validate(&self) -> Result<()> {
        if self.greeting.trim().is_empty() {
            return Err(Error::InvalidGreeting("greeting must be non-empty".into()));
        }

        let mut seen = HashSet::new();
        for summary in &self.history {
            if !seen.insert(summary.id) {
                return Err(Error::InvalidHistory(format!(
                    "duplicate summary id: {}",
                    summary.id
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_fixtures_are_valid() {
        let fixtures = ChatFixtures::builtin();
        assert!(fixtures.validate().is_ok());
        assert_eq!(fixtures.history.len(), 3);
    }

    #[test]
    fn test_duplicate_history_id_rejected() {
        let mut fixtures = ChatFixtures::builtin();
        fixtures.history[2].id = fixtures.history[0].id;
        assert!(matches!(
            fixtures.validate(),
            Err(Error::InvalidHistory(_))
        ));
    }

    #[test]
    fn test_blank_greeting_rejected() {
        let mut fixtures = ChatFixtures::builtin();
        fixtures.greeting = "   ".to_string();
        assert!(matches!(
            fixtures.validate(),
            Err(Error::InvalidGreeting(_))
        ));
    }
}
