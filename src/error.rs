use std::fmt;

/// Custom error type for chat client operations
/// Implements Clone for storing alongside UI state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error
{   /// API key is absent or empty in the settings
    MissingApiKey
  , /// Endpoint URL could not be parsed
    InvalidUrl(String)
  , /// Transport-level HTTP failure
    HttpError(String)
  , /// API returned a non-success status, with the
    /// provider's error message when one was readable
    ApiError
    {   status: u16
      , message: Option<String>
    }
  , /// Failed to parse API response body
    ParseError(String)
  , /// Response body missing choices[0].message.content
    MalformedResponse
}

impl fmt::Display for Error
{   fn fmt(&self, f: &mut fmt::Formatter<'_>)
      -> fmt::Result
    {   match self
        {   Error::MissingApiKey => {
              write!(f,
                "API key must be supplied via settings"
              )
            }
          , Error::InvalidUrl(msg) => {
              write!(f, "Invalid endpoint URL: {}", msg)
            }
          , Error::HttpError(msg) => {
              write!(f, "HTTP error: {}", msg)
            }
          , Error::ApiError { status, message } => {
              match message
              {   Some(msg) => write!(f, "{}", msg)
                , None => write!(f,
                    "API request failed with status: {}",
                    status
                  )
              }
            }
          , Error::ParseError(msg) => {
              write!(f, "Parse error: {}", msg)
            }
          , Error::MalformedResponse => {
              write!(f, "API response has unexpected format")
            }
        }
    }
}

impl std::error::Error for Error {}
