//! Conversation transcript.

use crate::assistant::reply::greeting;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub sender: Sender,
    pub text: String,
}

/// Messages exchanged with the assistant, oldest first.
///
/// The transcript is for display only. Replies never depend on earlier
/// turns.
#[derive(Debug, Clone, Default)]
pub struct Conversation {
    messages: Vec<Message>,
}

impl Conversation {
    /// A conversation that opens with the assistant greeting `user`.
    pub fn greeting(user: &str) -> Self {
        Conversation {
            messages: vec![Message {
                sender: Sender::Assistant,
                text: greeting(user),
            }],
        }
    }

    /// Record what the user typed. Blank input is ignored and returns `None`.
    pub fn push_user(&mut self, text: &str) -> Option<&Message> {
        if text.trim().is_empty() {
            return None;
        }
        self.push(Sender::User, text.to_string())
    }

    pub fn push_reply(&mut self, text: String) -> Option<&Message> {
        self.push(Sender::Assistant, text)
    }

    fn push(&mut self, sender: Sender, text: String) -> Option<&Message> {
        self.messages.push(Message { sender, text });
        self.messages.last()
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }
}
