//! In-memory chat transcript over the backend chat endpoint

use crate::gateway::BackendGateway;

/// Opening assistant message seeding every transcript
pub const GREETING: &str =
    "Hello! I'm your AI Recruiter Assistant. How can I help you find the perfect candidate today?";

/// Fixed reply shown when a chat call fails
pub const FALLBACK_REPLY: &str =
    "Sorry, I encountered an error processing your request. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Ai,
}

#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

/// Append-only conversation transcript. Lives for the duration of one chat
/// command; nothing is persisted.
pub struct ChatSession {
    transcript: Vec<ChatMessage>,
}

impl ChatSession {
    pub fn new() -> Self {
        Self {
            transcript: vec![ChatMessage {
                role: Role::Ai,
                content: GREETING.to_string(),
            }],
        }
    }

    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }

    /// Sends one question and returns the assistant's reply.
    ///
    /// The user message is appended before the call is attempted, and a
    /// failed call appends the fixed fallback reply, so the transcript never
    /// loses the question and always ends in an assistant message.
    pub async fn send(
        &mut self,
        gateway: &BackendGateway,
        session_id: &str,
        question: &str,
    ) -> String {
        self.push(Role::User, question.to_string());

        let reply = match gateway.chat(question, session_id).await {
            Ok(answer) => answer.response,
            Err(err) => {
                tracing::warn!("chat request failed: {err}");
                FALLBACK_REPLY.to_string()
            }
        };

        self.push(Role::Ai, reply.clone());
        reply
    }

    fn push(&mut self, role: Role, content: String) {
        self.transcript.push(ChatMessage { role, content });
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}
