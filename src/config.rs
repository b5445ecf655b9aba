//! Settings bag for the chat client

use serde::{Deserialize, Serialize};

/// Default chat-completion endpoint (Volcengine Ark,
/// Beijing region)
pub const DEFAULT_API_URL: &str
  = "https://ark.cn-beijing.volces.com/api/v3/chat/completions";

/// Default model identifier
pub const DEFAULT_MODEL: &str = "deepseek-chat";

/// Default sampling temperature
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Default response token cap
pub const DEFAULT_MAX_TOKENS: usize = 2000;

/// Chat client settings
///
/// Every field except the API key falls back to a default
/// when unset. The API key has no default: requests without
/// one fail before any network call is made.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatSettings
{   /// Target endpoint URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>
  , /// Model identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_name: Option<String>
  , /// Bearer token for the Authorization header
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>
  , /// Sampling temperature
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>
  , /// Response token cap
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<usize>
  , /// System message prepended to every request
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_prompt: Option<String>
}

impl ChatSettings
{   /// Settings with only an API key, everything else default
    pub fn with_api_key(key: &str) -> Self
    {   ChatSettings
        {   api_key: Some(key.to_string())
          , ..ChatSettings::default()
        }
    }
}
