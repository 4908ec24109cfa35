//! Chat assistant — pluggable, trait-based career helper.
//!
//! Default: `RuleBasedAssistant` (canned replies, deterministic, no network).
//! Optional: `LlmAssistant` (Claude-backed, enabled when an API key is configured).
//!
//! `AppState` holds an `Arc<dyn Assistant>`, picked once at startup.
//! The conversation transcript is owned by the caller and passed into
//! every call; the service keeps no session state.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::assistant::prompts::CAREER_ASSISTANT_SYSTEM;
use crate::errors::AppError;
use crate::llm_client::{LlmClient, Message, Role};

pub mod handlers;
pub mod prompts;

/// One turn of the caller-owned transcript.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub content: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

/// The assistant trait. Implement this to swap backends without touching
/// the endpoint or handler code.
#[async_trait]
pub trait Assistant: Send + Sync {
    async fn chat(&self, history: &[ChatTurn], prompt: &str) -> Result<String, AppError>;
}

// ────────────────────────────────────────────────────────────────────────────
// RuleBasedAssistant — default backend
// ────────────────────────────────────────────────────────────────────────────

const RESUME_TIP: &str =
    "Your resume should highlight your technical skills, certifications, and relevant projects.";
const SKILL_TIP: &str =
    "Focus on Python, SQL, and visualization tools like Power BI or Tableau for analytics roles.";
const INTERVIEW_TIP: &str =
    "Prepare for HR and technical rounds. Be ready to explain your projects clearly.";
const FALLBACK: &str =
    "I'm your career buddy! Ask about resume tips, interview advice, or skill growth.";

/// Fixed-rule assistant: case-insensitive substring checks on the prompt.
/// History is accepted for interface parity but does not influence replies.
pub struct RuleBasedAssistant;

#[async_trait]
impl Assistant for RuleBasedAssistant {
    async fn chat(&self, _history: &[ChatTurn], prompt: &str) -> Result<String, AppError> {
        Ok(canned_reply(prompt).to_string())
    }
}

fn canned_reply(prompt: &str) -> &'static str {
    let lowered = prompt.to_lowercase();
    if lowered.contains("resume") {
        RESUME_TIP
    } else if lowered.contains("skill") {
        SKILL_TIP
    } else if lowered.contains("interview") {
        INTERVIEW_TIP
    } else {
        FALLBACK
    }
}

// ────────────────────────────────────────────────────────────────────────────
// LlmAssistant — Claude-backed backend
// ────────────────────────────────────────────────────────────────────────────

/// Forwards the transcript and prompt to the LLM under a fixed
/// career-assistant system role. Upstream failures surface as
/// `AppError::Llm`; the caller's session survives them.
pub struct LlmAssistant {
    llm: LlmClient,
}

impl LlmAssistant {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl Assistant for LlmAssistant {
    async fn chat(&self, history: &[ChatTurn], prompt: &str) -> Result<String, AppError> {
        let mut messages: Vec<Message> = history.iter().map(to_message).collect();
        messages.push(Message {
            role: Role::User,
            content: prompt.to_string(),
        });

        self.llm
            .chat_text(CAREER_ASSISTANT_SYSTEM, &messages)
            .await
            .map_err(|e| AppError::Llm(format!("assistant call failed: {e}")))
    }
}

fn to_message(turn: &ChatTurn) -> Message {
    Message {
        role: match turn.role {
            ChatRole::User => Role::User,
            ChatRole::Assistant => Role::Assistant,
        },
        content: turn.content.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resume_prompt_gets_resume_tip() {
        assert_eq!(canned_reply("How do I improve my resume?"), RESUME_TIP);
    }

    #[test]
    fn test_rule_match_is_case_insensitive() {
        assert_eq!(canned_reply("RESUME HELP PLEASE"), RESUME_TIP);
    }

    #[test]
    fn test_skill_prompt_gets_skill_tip() {
        assert_eq!(canned_reply("Which skills matter for analytics?"), SKILL_TIP);
    }

    #[test]
    fn test_interview_prompt_gets_interview_tip() {
        assert_eq!(canned_reply("any interview advice?"), INTERVIEW_TIP);
    }

    #[test]
    fn test_resume_rule_wins_over_later_rules() {
        // Matches both "resume" and "interview"; first rule applies.
        assert_eq!(
            canned_reply("resume tips for my interview"),
            RESUME_TIP
        );
    }

    #[test]
    fn test_unmatched_prompt_gets_fallback() {
        assert_eq!(canned_reply("what's the weather like?"), FALLBACK);
    }

    #[tokio::test]
    async fn test_rule_based_assistant_ignores_history() {
        let history = vec![ChatTurn {
            role: ChatRole::User,
            content: "tell me about interviews".to_string(),
        }];
        let reply = RuleBasedAssistant
            .chat(&history, "hello there")
            .await
            .unwrap();
        assert_eq!(reply, FALLBACK);
    }

    #[test]
    fn test_chat_turn_deserializes_lowercase_roles() {
        let turn: ChatTurn =
            serde_json::from_str(r#"{"role": "assistant", "content": "hi"}"#).unwrap();
        assert_eq!(turn.role, ChatRole::Assistant);
    }

    #[test]
    fn test_transcript_maps_onto_api_roles_in_order() {
        let history = vec![
            ChatTurn {
                role: ChatRole::User,
                content: "first".to_string(),
            },
            ChatTurn {
                role: ChatRole::Assistant,
                content: "second".to_string(),
            },
        ];
        let messages: Vec<Message> = history.iter().map(to_message).collect();
        assert_eq!(messages[0].role, Role::User);
        assert_eq!(messages[1].role, Role::Assistant);
        assert_eq!(messages[1].content, "second");
    }
}
