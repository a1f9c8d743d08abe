/// Failure reported by a [`TranslateProvider`](super::TranslateProvider),
/// before classification into the caller-facing [`Error`].
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// The service rejected the call for issuing too many requests.
    #[error("too many requests")]
    TooManyRequests,
    /// Any other service-level failure, identified by the provider's own
    /// name/message pair.
    #[error("{name}: {message}")]
    Api { name: String, message: String },
    #[error("reqwest error: {0}")]
    Transport(#[from] reqwest::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The provider is rate limiting us. Recoverable by trying again later;
    /// no automatic retry is performed.
    #[error("Too many requests: please try again later")]
    RateLimited,
    /// Provider failure surfaced with its original name and message.
    #[error("{name}: {message}")]
    Provider { name: String, message: String },
    /// Transport-level failure, passed through unwrapped.
    #[error("reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),
}

impl Error {
    /// Short identifier suitable for display, e.g. `"Too many requests"`.
    pub fn name(&self) -> &str {
        match self {
            Error::RateLimited => "Too many requests",
            Error::Provider { name, .. } => name,
            Error::Reqwest(_) => "RequestError",
        }
    }

    /// Human-readable detail accompanying [`Error::name`].
    pub fn message(&self) -> String {
        match self {
            Error::RateLimited => "please try again later".to_owned(),
            Error::Provider { message, .. } => message.clone(),
            Error::Reqwest(e) => e.to_string(),
        }
    }
}

impl From<ProviderError> for Error {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::TooManyRequests => Error::RateLimited,
            ProviderError::Api { name, message } => Error::Provider { name, message },
            ProviderError::Transport(e) => Error::Reqwest(e),
        }
    }
}
