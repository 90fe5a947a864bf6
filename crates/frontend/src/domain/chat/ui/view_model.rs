//! Chat state: the append-only message list, the input box and the
//! per-message typewriter reveal bookkeeping.

use contracts::query::SourceRef;
use leptos::prelude::*;
use std::collections::HashMap;

/// Shown when the backend answers without an `answer` field.
pub const NO_ANSWER_FALLBACK: &str = "Sorry, I couldn't find an answer to your question.";
/// Shown when the query call itself fails.
pub const QUERY_ERROR_MESSAGE: &str =
    "Sorry, I encountered an error while processing your question. Please try again.";

/// Delay between answer arrival and the first revealed character.
pub const REVEAL_START_DELAY_MS: u32 = 100;
/// Reveal cadence, one character per tick.
pub const REVEAL_INTERVAL_MS: u32 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub id: String,
    pub role: ChatRole,
    pub content: String,
    pub timestamp: chrono::DateTime<chrono::Local>,
    pub sources: Vec<SourceRef>,
}

/// Reveal state of one assistant message.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TypingState {
    pub text: String,
    pub is_typing: bool,
}

/// A query is sendable only when the input has visible content and no
/// other query is in flight.
pub fn can_send(input: &str, is_querying: bool) -> bool {
    !input.trim().is_empty() && !is_querying
}

/// UTF-8 safe prefix of the first `chars` characters.
pub fn revealed_prefix(full: &str, chars: usize) -> &str {
    match full.char_indices().nth(chars) {
        Some((byte_index, _)) => &full[..byte_index],
        None => full,
    }
}

#[derive(Clone, Copy)]
pub struct ChatVm {
    pub messages: RwSignal<Vec<ChatMessage>>,
    pub input: RwSignal<String>,
    pub is_querying: RwSignal<bool>,
    pub typing: RwSignal<HashMap<String, TypingState>>,
    /// Per-message source-list expansion, a display concern only.
    pub expanded_sources: RwSignal<HashMap<String, bool>>,
    /// Reveal epoch per message id. A running reveal loop stops as soon as
    /// its epoch is no longer current, which is how restarts and teardown
    /// cancel timers.
    epochs: RwSignal<HashMap<String, u64>>,
}

impl ChatVm {
    pub fn new() -> Self {
        Self {
            messages: RwSignal::new(Vec::new()),
            input: RwSignal::new(String::new()),
            is_querying: RwSignal::new(false),
            typing: RwSignal::new(HashMap::new()),
            expanded_sources: RwSignal::new(HashMap::new()),
            epochs: RwSignal::new(HashMap::new()),
        }
    }

    fn push(&self, role: ChatRole, content: &str, sources: Vec<SourceRef>) -> String {
        let id = uuid::Uuid::new_v4().to_string();
        let message = ChatMessage {
            id: id.clone(),
            role,
            content: content.to_string(),
            timestamp: chrono::Local::now(),
            sources,
        };
        self.messages.update(|m| m.push(message));
        id
    }

    pub fn push_user(&self, content: &str) -> String {
        self.push(ChatRole::User, content, Vec::new())
    }

    pub fn push_assistant(&self, content: &str, sources: Vec<SourceRef>) -> String {
        self.push(ChatRole::Assistant, content, sources)
    }

    /// Bump and return the reveal epoch for a message, invalidating any
    /// loop started under an earlier epoch.
    pub fn bump_epoch(&self, message_id: &str) -> u64 {
        let mut current = 0;
        self.epochs.update(|e| {
            let entry = e.entry(message_id.to_string()).or_insert(0);
            *entry += 1;
            current = *entry;
        });
        current
    }

    pub fn epoch(&self, message_id: &str) -> u64 {
        self.epochs
            .with_untracked(|e| e.get(message_id).copied().unwrap_or(0))
    }

    pub fn toggle_sources(&self, message_id: &str) {
        self.expanded_sources.update(|e| {
            let entry = e.entry(message_id.to_string()).or_insert(false);
            *entry = !*entry;
        });
    }

    pub fn sources_expanded(&self, message_id: &str) -> bool {
        self.expanded_sources
            .with(|e| e.get(message_id).copied().unwrap_or(false))
    }

    pub fn set_typing(&self, message_id: &str, state: TypingState) {
        self.typing.update(|t| {
            t.insert(message_id.to_string(), state);
        });
    }

    /// Invalidate every running reveal loop. Used on teardown and before
    /// clearing the conversation.
    pub fn cancel_reveals(&self) {
        let ids: Vec<String> = self.epochs.with_untracked(|e| e.keys().cloned().collect());
        for id in ids {
            self.bump_epoch(&id);
        }
    }

    pub fn clear(&self) {
        self.cancel_reveals();
        self.messages.set(Vec::new());
        self.typing.set(HashMap::new());
        self.expanded_sources.set(HashMap::new());
    }
}

impl Default for ChatVm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_or_busy_input_is_not_sendable() {
        assert!(!can_send("", false));
        assert!(!can_send("   \t", false));
        assert!(!can_send("hello", true));
        assert!(can_send("hello", false));
    }

    #[test]
    fn revealed_prefix_is_char_based() {
        assert_eq!(revealed_prefix("héllo", 0), "");
        assert_eq!(revealed_prefix("héllo", 2), "hé");
        assert_eq!(revealed_prefix("héllo", 5), "héllo");
        assert_eq!(revealed_prefix("héllo", 99), "héllo");
    }

    #[test]
    fn messages_append_in_order_with_unique_ids() {
        let vm = ChatVm::new();
        let user_id = vm.push_user("what is a chunk?");
        let assistant_id = vm.push_assistant("A segment of a document.", Vec::new());

        let messages = vm.messages.get_untracked();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, ChatRole::User);
        assert_eq!(messages[1].role, ChatRole::Assistant);
        assert_eq!(messages[0].id, user_id);
        assert_eq!(messages[1].id, assistant_id);
        assert_ne!(user_id, assistant_id);
    }

    #[test]
    fn epoch_bump_invalidates_earlier_loops() {
        let vm = ChatVm::new();
        let first = vm.bump_epoch("m1");
        assert_eq!(vm.epoch("m1"), first);

        let second = vm.bump_epoch("m1");
        assert!(second > first);
        assert_eq!(vm.epoch("m1"), second);
        assert_eq!(vm.epoch("unknown"), 0);
    }

    #[test]
    fn source_toggle_flips_per_message() {
        let vm = ChatVm::new();
        assert!(!vm.sources_expanded("m1"));

        vm.toggle_sources("m1");
        assert!(vm.sources_expanded("m1"));
        assert!(!vm.sources_expanded("m2"));

        vm.toggle_sources("m1");
        assert!(!vm.sources_expanded("m1"));
    }

    #[test]
    fn clear_empties_conversation_and_cancels_reveals() {
        let vm = ChatVm::new();
        let id = vm.push_assistant("answer", Vec::new());
        let epoch = vm.bump_epoch(&id);
        vm.set_typing(
            &id,
            TypingState {
                text: "ans".to_string(),
                is_typing: true,
            },
        );

        vm.clear();
        assert!(vm.messages.get_untracked().is_empty());
        assert!(vm.typing.get_untracked().is_empty());
        assert!(vm.epoch(&id) > epoch);
    }
}
