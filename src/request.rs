//! Wire types for the chat-completion protocol

use serde::{Deserialize, Serialize};

// ===== Message Types =====

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage
{   pub role: String
  , pub content: String
}

impl ChatMessage
{   /// Map a history item to a wire message
    /// "user" keeps the user role, anything else becomes
    /// the assistant role
    pub fn from_history_item(
      item: &crate::HistoryItem
    ) -> Self
    {   let role = if item.kind == "user"
        {   "user"
        } else
        {   "assistant"
        };
        ChatMessage
        {   role: role.to_string()
          , content: item.content.clone()
        }
    }

    pub fn system(content: &str) -> Self
    {   ChatMessage
        {   role: "system".to_string()
          , content: content.to_string()
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest
{   pub model: String
  , pub messages: Vec<ChatMessage>
  , pub stream: bool
  , pub temperature: f32
  , pub max_tokens: usize
}

impl ChatRequest
{   /// Build the request payload from a history and settings
    ///
    /// History ordering is preserved. A configured system
    /// prompt is prepended as a system message and is not
    /// part of the mapped history.
    pub fn from_history(
      history: &[crate::HistoryItem]
    , settings: &crate::ChatSettings
    ) -> Self
    {   let mut messages
          = Vec::with_capacity(history.len() + 1);

        if let Some(prompt) = &settings.system_prompt
        {   messages.push(ChatMessage::system(prompt));
        }

        messages.extend(
          history.iter().map(ChatMessage::from_history_item)
        );

        ChatRequest
        {   model: settings.model_name
              .clone()
              .unwrap_or_else(|| {
                crate::config::DEFAULT_MODEL.to_string()
              })
          , messages
          , stream: false
          , temperature: settings.temperature
              .unwrap_or(crate::config::DEFAULT_TEMPERATURE)
          , max_tokens: settings.max_tokens
              .unwrap_or(crate::config::DEFAULT_MAX_TOKENS)
        }
    }
}

// ===== Response Types =====

// Every field decodes tolerantly: a well-formed JSON body
// missing part of the choices[0].message.content path is a
// shape problem, not a decode failure

#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse
{   #[serde(default)]
    pub choices: Vec<Choice>
}

impl ChatResponse
{   /// Extract the reply text, if the expected
    /// choices[0].message.content path is present
    pub fn into_reply(self) -> Option<String>
    {   self.choices
          .into_iter()
          .next()
          .and_then(|choice| choice.message)
          .and_then(|message| message.content)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Choice
{   #[serde(default)]
    pub message: Option<ReplyMessage>
  , #[serde(default)]
    pub finish_reason: Option<String>
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReplyMessage
{   #[serde(default)]
    pub role: Option<String>
  , #[serde(default)]
    pub content: Option<String>
}

/// Error body shape providers return on non-success status
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorResponse
{   #[serde(default)]
    pub error: Option<ErrorDetail>
}

#[derive(Debug, Clone, Deserialize)]
pub struct ErrorDetail
{   #[serde(default)]
    pub message: Option<String>
}
