//! Development-time proxy URL rewriting
//!
//! Development builds cannot call the provider hosts
//! directly because of cross-origin restrictions; requests
//! are routed through a same-origin path that an external
//! reverse proxy strips and forwards. Production builds call
//! the endpoint as configured.

use log::{debug, trace};
use url::Url;

/// Path prefix the development reverse proxy listens on
pub const PROXY_PREFIX: &str = "/api/chat";

/// The recognized chat-completion providers, each with its
/// own path convention for the completions resource
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider
{   /// Volcengine Ark inference gateway (Beijing region)
    VolcengineArk
  , /// DeepSeek chat API
    DeepSeek
  , /// OpenAI API
    OpenAi
}

impl Provider
{   /// Match a URL host against the known provider list
    pub fn from_host(host: &str) -> Option<Self>
    {   if host.contains("ark.cn-beijing.volces.com")
        {   Some(Provider::VolcengineArk)
        } else if host.contains("api.deepseek.com")
        {   Some(Provider::DeepSeek)
        } else if host.contains("api.openai.com")
        {   Some(Provider::OpenAi)
        } else
        {   None
        }
    }

    /// Complete a possibly partial endpoint path to this
    /// provider's chat-completion resource
    ///
    /// Ark keeps whatever prefix the caller configured and
    /// appends the missing suffix segments; DeepSeek and
    /// OpenAI replace the path outright.
    pub fn complete_path(&self, path: &str) -> String
    {   match self
        {   Provider::VolcengineArk => {
              if path.contains("/api/v3/chat/completions")
              {   path.to_string()
              } else if path == "/"
                || path == "/api"
                || path == "/api/"
              {   "/api/v3/chat/completions".to_string()
              } else if !path.contains("/v3/chat/completions")
              {   format!(
                    "{}/v3/chat/completions",
                    path.trim_end_matches('/')
                  )
              } else
              {   path.to_string()
              }
            }
          , Provider::DeepSeek => {
              if path.contains("/chat/completions")
              {   path.to_string()
              } else
              {   "/chat/completions".to_string()
              }
            }
          , Provider::OpenAi => {
              if path.contains("/v1/chat/completions")
              {   path.to_string()
              } else
              {   "/v1/chat/completions".to_string()
              }
            }
        }
    }
}

/// Resolve the URL a request should actually be sent to
///
/// Production mode returns the input unchanged, without
/// parsing it. Development mode rewrites URLs of recognized
/// providers to the proxy prefix plus the completed path;
/// unrecognized hosts pass through unchanged. The only
/// failure mode is a development-mode URL that does not
/// parse at all.
pub fn proxy_url(
  original: &str
, is_development: bool
) -> Result<String, crate::error::Error>
{   if !is_development
    {   return Ok(original.to_string());
    }

    let parsed = Url::parse(original)
      .map_err(|e| {
        crate::error::Error::InvalidUrl(e.to_string())
      })?;

    let provider = match parsed
      .host_str()
      .and_then(Provider::from_host)
    {   Some(provider) => provider
      , None => {
          debug!("No proxy rule for URL: {}", original);
          return Ok(original.to_string());
        }
    };

    let path = provider.complete_path(parsed.path());
    let proxied = format!("{}{}", PROXY_PREFIX, path);
    trace!(
      "Rewrote {} to {} for {:?}",
      original, proxied, provider
    );
    Ok(proxied)
}
