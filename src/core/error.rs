use std::error::Error as StdError;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LlmError {
    /// No usable credential or an invalid option at construction time.
    #[error("Provider configuration error: {0}")]
    ProviderConfiguration(String),

    #[error("API error: {message}")]
    Api {
        message: String,
        status_code: Option<u16>,
        #[source]
        source: Option<Box<dyn StdError + Send + Sync>>,
    },

    #[error("Network error: {message}")]
    Network {
        message: String,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },

    #[error("Parse error: {message}")]
    Parse {
        message: String,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },

    #[error("Gemini failed after {max_attempts} retries")]
    RetryExhausted { max_attempts: u32 },
}

/// HTTP statuses that are worth another attempt.
const TRANSIENT_STATUS_CODES: [u16; 3] = [429, 500, 503];

/// `EBADF`, seen when a socket is reused across concurrent calls.
const BAD_FILE_DESCRIPTOR: i32 = 9;

/// Substrings recognized in rendered error text when no structured code is available.
const TRANSIENT_MARKERS: [&str; 5] = ["429", "503", "500", "Errno 9", "Bad file descriptor"];

impl LlmError {
    /// Whether the error is expected to clear up on its own.
    ///
    /// A provider status code, when present, decides on its own. Parse failures
    /// are deterministic and never retried. Only transport errors and status-less
    /// API errors fall back to the OS error code in the source chain and then to
    /// the legacy markers in the rendered text.
    pub fn is_transient(&self) -> bool {
        match self {
            LlmError::ProviderConfiguration(_)
            | LlmError::Parse { .. }
            | LlmError::RetryExhausted { .. } => false,
            LlmError::Api {
                status_code: Some(code),
                ..
            } => TRANSIENT_STATUS_CODES.contains(code),
            LlmError::Api {
                status_code: None, ..
            }
            | LlmError::Network { .. } => {
                self.has_bad_file_descriptor() || self.matches_transient_marker()
            }
        }
    }

    /// HTTP status code reported by the provider, if any.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            LlmError::Api { status_code, .. } => *status_code,
            _ => None,
        }
    }

    fn has_bad_file_descriptor(&self) -> bool {
        let mut current: Option<&(dyn StdError + 'static)> = StdError::source(self);
        while let Some(err) = current {
            if let Some(io) = err.downcast_ref::<std::io::Error>()
                && io.raw_os_error() == Some(BAD_FILE_DESCRIPTOR)
            {
                return true;
            }
            current = err.source();
        }
        false
    }

    fn matches_transient_marker(&self) -> bool {
        let mut rendered = self.to_string();
        let mut current: Option<&(dyn StdError + 'static)> = StdError::source(self);
        while let Some(err) = current {
            rendered.push_str(": ");
            rendered.push_str(&err.to_string());
            current = err.source();
        }
        TRANSIENT_MARKERS
            .iter()
            .any(|marker| rendered.contains(marker))
    }
}
