//! Text translation against the unofficial Google web endpoint.

mod error;
pub use error::{Error, ProviderError};

mod provider;
pub use provider::{GoogleTranslate, TranslateProvider};

mod trans;
mod types;
pub use types::*;

/// Translation client. Generic over the remote provider so tests (or an
/// alternative backend) can inject their own [`TranslateProvider`].
pub struct Translator<P = GoogleTranslate> {
    provider: P,
}

impl Translator<GoogleTranslate> {
    /// Client over the public Google endpoint with default settings.
    pub fn new() -> Self {
        Self {
            provider: GoogleTranslate::builder().build(),
        }
    }
}

impl Default for Translator<GoogleTranslate> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: TranslateProvider> Translator<P> {
    pub fn with_provider(provider: P) -> Self {
        Self { provider }
    }
}
