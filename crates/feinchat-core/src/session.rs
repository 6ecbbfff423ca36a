//! Chat session state
//!
//! `SessionState` owns the transcript, the composer draft, and the topic
//! selection for one window instance. It produces `PendingReply` values for
//! the UI to settle after `REPLY_DELAY`; the UI owns the actual timers so it
//! can cancel them at teardown.

use std::time::Duration;

use tracing::debug;

use crate::error::Result;
use crate::fixtures::ChatFixtures;
use crate::types::{ChatMessage, ConversationSummary, MessageId, Sender, Topic};

/// Delay before a simulated assistant reply lands. Not configurable.
pub const REPLY_DELAY: Duration = Duration::from_millis(1000);

/// The canned assistant reply appended when a pending reply settles.
const ASSISTANT_REPLY: &str = "I understand your question. Let me analyze that for you...";

/// A one-shot deferred reply produced by a successful submit.
///
/// Each submit yields exactly one of these; overlapping pending replies from
/// rapid submits are legal and settle independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingReply {
    /// Id of the user message that triggered this reply.
    pub in_reply_to: MessageId,
}

/// Per-window chat state: transcript, draft, selection, and the id counter.
pub struct SessionState {
    fixtures: ChatFixtures,
    messages: Vec<ChatMessage>,
    draft: String,
    selected_topic: Option<Topic>,
    // Monotonic, incremented at append time. Never derived from list length,
    // so overlapping pending replies cannot collide on ids.
    next_message_id: MessageId,
}

impl SessionState {
    /// Build a session around validated seed data. The transcript starts
    /// with the greeting as assistant message id 1.
    pub fn new(fixtures: ChatFixtures) -> Result<Self> {
        fixtures.validate()?;

        let greeting = fixtures.greeting.clone();
        let mut session = Self {
            fixtures,
            messages: Vec::new(),
            draft: String::new(),
            selected_topic: None,
            next_message_id: 1,
        };
        session.push_message(Sender::Assistant, greeting);
        Ok(session)
    }

    /// Transcript in insertion order (oldest first).
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Prior conversation summaries, in the fixed seed order.
    pub fn history(&self) -> &[ConversationSummary] {
        &self.fixtures.history
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn selected_topic(&self) -> Option<Topic> {
        self.selected_topic
    }

    /// Replace the draft verbatim. No validation, no length limit.
    pub fn update_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Select a topic by catalog id, overwriting the draft with its
    /// description. Unknown ids are a no-op.
    pub fn select_topic(&mut self, id: u64) {
        let Some(topic) = Topic::from_id(id) else {
            debug!(id, "ignoring unknown topic id");
            return;
        };

        self.selected_topic = Some(topic);
        self.draft = topic.description().to_string();
        debug!(id, title = topic.title(), "topic selected");
    }

    /// Send the draft. If the trimmed draft is empty this is a no-op (the
    /// draft is left untouched). Otherwise the trimmed text is appended as a
    /// user message, the draft is cleared, and the one-shot deferred reply
    /// for the UI to schedule is returned.
    pub fn submit_draft(&mut self) -> Option<PendingReply> {
        let text = self.draft.trim();
        if text.is_empty() {
            debug!("ignoring empty draft submit");
            return None;
        }

        let text = text.to_string();
        self.draft.clear();
        let id = self.push_message(Sender::User, text);
        Some(PendingReply { in_reply_to: id })
    }

    /// Settle a pending reply: append exactly one assistant message with the
    /// canned placeholder text.
    pub fn complete_reply(&mut self, pending: PendingReply) -> MessageId {
        debug!(in_reply_to = pending.in_reply_to, "settling simulated reply");
        self.push_message(Sender::Assistant, ASSISTANT_REPLY)
    }

    fn push_message(&mut self, sender: Sender, text: impl Into<String>) -> MessageId {
        let id = self.next_message_id;
        self.next_message_id += 1;
        self.messages.push(ChatMessage::new(id, sender, text));
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn session() -> SessionState {
        SessionState::new(ChatFixtures::builtin()).expect("builtin fixtures are valid")
    }

    fn assert_ids_strictly_increasing(session: &SessionState) {
        let ids: Vec<MessageId> = session.messages().iter().map(|m| m.id).collect();
        for pair in ids.windows(2) {
            assert!(pair[0] < pair[1], "ids not strictly increasing: {:?}", ids);
        }
    }

    #[test]
    fn test_new_session_seeds_greeting() {
        let session = session();
        assert_eq!(session.messages().len(), 1);
        let greeting = &session.messages()[0];
        assert_eq!(greeting.id, 1);
        assert_eq!(greeting.sender, Sender::Assistant);
        assert!(greeting.text.contains("Fein-AI"));
        assert_eq!(session.draft(), "");
        assert_eq!(session.selected_topic(), None);
    }

    #[test]
    fn test_invalid_fixtures_rejected() {
        let mut fixtures = ChatFixtures::builtin();
        fixtures.greeting.clear();
        assert!(SessionState::new(fixtures).is_err());
    }

    #[test]
    fn test_submit_appends_user_message_and_clears_draft() {
        let mut session = session();
        session.update_draft("What about gold?");

        let pending = session.submit_draft().expect("non-empty draft submits");

        assert_eq!(session.messages().len(), 2);
        let sent = &session.messages()[1];
        assert_eq!(sent.id, 2);
        assert_eq!(sent.sender, Sender::User);
        assert_eq!(sent.text, "What about gold?");
        assert_eq!(session.draft(), "");
        assert_eq!(pending.in_reply_to, 2);
    }

    #[test]
    fn test_submit_trims_whitespace() {
        let mut session = session();
        session.update_draft("  hello there \n");
        session.submit_draft().expect("non-empty draft submits");
        assert_eq!(session.messages()[1].text, "hello there");
    }

    #[test]
    fn test_empty_submit_is_a_no_op() {
        let mut session = session();

        assert_eq!(session.submit_draft(), None);
        assert_eq!(session.messages().len(), 1);

        // Whitespace-only drafts are not cleared either.
        session.update_draft("   \t ");
        assert_eq!(session.submit_draft(), None);
        assert_eq!(session.messages().len(), 1);
        assert_eq!(session.draft(), "   \t ");
    }

    #[test]
    fn test_reply_settles_with_placeholder_text() {
        let mut session = session();
        session.update_draft("What about gold?");
        let pending = session.submit_draft().expect("non-empty draft submits");

        let reply_id = session.complete_reply(pending);

        assert_eq!(session.messages().len(), 3);
        let reply = &session.messages()[2];
        assert_eq!(reply.id, reply_id);
        assert_eq!(reply.sender, Sender::Assistant);
        assert_eq!(reply.text, ASSISTANT_REPLY);

        let ids: Vec<MessageId> = session.messages().iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_overlapping_pending_replies_get_unique_ids() {
        let mut session = session();

        // Two rapid submits before either reply settles.
        session.update_draft("first");
        let first = session.submit_draft().expect("non-empty draft submits");
        session.update_draft("second");
        let second = session.submit_draft().expect("non-empty draft submits");

        session.complete_reply(first);
        session.complete_reply(second);

        // 1 greeting + 2 submits + 2 replies
        assert_eq!(session.messages().len(), 5);
        assert_ids_strictly_increasing(&session);
    }

    #[test]
    fn test_transcript_settles_to_expected_length() {
        let mut session = session();
        let mut pending = Vec::new();
        for i in 0..4 {
            session.update_draft(format!("question {}", i));
            pending.push(session.submit_draft().expect("non-empty draft submits"));
        }
        for reply in pending {
            session.complete_reply(reply);
        }

        // 1 seed + 2 per non-empty submit
        assert_eq!(session.messages().len(), 1 + 2 * 4);
        assert_ids_strictly_increasing(&session);
    }

    #[test]
    fn test_select_topic_overwrites_draft() {
        let mut session = session();
        session.update_draft("half-typed question");

        for topic in Topic::ALL {
            session.select_topic(topic.id());
            assert_eq!(session.selected_topic(), Some(topic));
            assert_eq!(session.draft(), topic.description());
        }
    }

    #[test]
    fn test_select_unknown_topic_is_a_no_op() {
        let mut session = session();
        session.update_draft("keep me");
        session.select_topic(3);

        session.select_topic(99);

        assert_eq!(session.selected_topic(), Some(Topic::InvestmentStrategy));
        assert_eq!(session.draft(), "Develop investment strategies");
        assert_eq!(session.messages().len(), 1);
    }

    #[test]
    fn test_topic_selection_sends_description_verbatim() {
        let mut session = session();
        session.select_topic(3);
        assert_eq!(session.draft(), "Develop investment strategies");

        session.submit_draft().expect("non-empty draft submits");
        assert_eq!(session.messages()[1].text, "Develop investment strategies");
    }
}
