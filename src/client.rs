use log::{debug, trace, error, info};
use crate::error::Error;
use crate::request::{ChatRequest, ChatResponse, ErrorResponse};

/// HTTP client for chat-completion endpoints
///
/// One instance wraps one `reqwest::Client` and the ambient
/// development flag. Calls are independent: no state is
/// shared between requests and nothing is retried.
pub struct ChatClient
{   http_client: reqwest::Client
  , is_development: bool
  , proxy_origin: Option<String>
}

impl ChatClient
{   /// Create a client for the given build mode
    pub fn new(is_development: bool) -> Self
    {   debug!(
          "Creating ChatClient (development: {})",
          is_development
        );
        ChatClient
        {   http_client: reqwest::Client::new()
          , is_development
          , proxy_origin: None
        }
    }

    /// Set the origin that root-relative proxy paths are
    /// joined to before sending
    ///
    /// In a browser a path like `/api/chat/...` resolves
    /// against the page origin; outside one the dev-server
    /// origin has to be supplied explicitly.
    pub fn with_proxy_origin(mut self, origin: &str) -> Self
    {   self.proxy_origin
          = Some(origin.trim_end_matches('/').to_string());
        self
    }

    /// Send the conversation history and return the
    /// assistant's reply text
    ///
    /// Fails without touching the network when the API key
    /// is absent. One POST, no retries; any transport,
    /// status or shape failure surfaces as an `Error`.
    pub async fn get_reply(
      &self
    , history: &[crate::HistoryItem]
    , settings: &crate::ChatSettings
    ) -> Result<String, Error>
    {   let api_key = settings.api_key
          .as_deref()
          .filter(|key| !key.is_empty())
          .ok_or_else(|| {
            error!("No API key configured");
            Error::MissingApiKey
          })?;

        let original_url = settings.api_url
          .as_deref()
          .unwrap_or(crate::config::DEFAULT_API_URL);
        let api_url = crate::proxy::proxy_url(
          original_url,
          self.is_development
        )?;
        let api_url = match &self.proxy_origin
        {   Some(origin) if api_url.starts_with('/') => {
              format!("{}{}", origin, api_url)
            }
          , _ => api_url
        };

        let request
          = ChatRequest::from_history(history, settings);
        trace!("Chat request: {:?}", request);
        debug!(
          "Sending {} messages to {}",
          request.messages.len(), api_url
        );

        let response = self.http_client
          .post(&api_url)
          .header("Authorization", format!("Bearer {}", api_key))
          .header("Content-Type", "application/json")
          .json(&request)
          .send()
          .await
          .map_err(|e| {
            error!("HTTP error: {}", e);
            Error::HttpError(e.to_string())
          })?;

        let status = response.status();
        trace!("Chat response status: {}", status);

        if !status.is_success()
        {   let message = response
              .json::<ErrorResponse>()
              .await
              .ok()
              .and_then(|body| body.error)
              .and_then(|detail| detail.message);
            error!(
              "API error {}: {:?}",
              status, message
            );
            return Err(Error::ApiError
            {   status: status.as_u16()
              , message
            });
        }

        let chat_response: ChatResponse
          = response.json().await.map_err(|e| {
            error!("Parse error: {}", e);
            Error::ParseError(e.to_string())
          })?;

        chat_response.into_reply()
          .ok_or_else(|| {
            error!("Response missing choices[0].message.content");
            Error::MalformedResponse
          })
    }

    /// Probe the endpoint with a fixed greeting
    ///
    /// Collapses every failure into `false`; the reply text
    /// itself is ignored.
    pub async fn test_connection(
      &self
    , settings: &crate::ChatSettings
    ) -> bool
    {   let probe = vec![crate::HistoryItem::user("Hello")];
        match self.get_reply(&probe, settings).await
        {   Ok(_) => {
              info!("Connection test succeeded");
              true
            }
          , Err(e) => {
              error!("Connection test failed: {}", e);
              false
            }
        }
    }
}
