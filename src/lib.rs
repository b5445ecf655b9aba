pub mod error;
pub mod config;
pub mod proxy;
pub mod request;
pub mod client;
use serde::{Deserialize, Serialize};

// Re-export the types a caller needs for a round trip
pub use client::ChatClient;
pub use config::ChatSettings;
pub use error::Error;
pub use proxy::proxy_url;

/// A single item of conversation history as kept by the
/// hosting application.
///
/// `kind` is a free-form discriminator: the value "user"
/// maps to the user role, anything else maps to the
/// assistant role when the request payload is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryItem
{   #[serde(rename = "type")]
    pub kind: String
  , pub content: String
}

impl HistoryItem
{   /// Create a user-authored history item
    pub fn user(content: &str) -> Self
    {   HistoryItem
        {   kind: "user".to_string()
          , content: content.to_string()
        }
    }

    /// Create an assistant-authored history item
    pub fn assistant(content: &str) -> Self
    {   HistoryItem
        {   kind: "assistant".to_string()
          , content: content.to_string()
        }
    }
}
