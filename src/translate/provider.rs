use bon::bon;
use serde_json::Value;
use tracing::debug;

use super::error::ProviderError;
use super::types::RawTranslation;
use crate::languages::LanguageCode;

const BASE_URL: &str = "https://translate.googleapis.com";

/// Remote translation backend.
///
/// The shipped implementation is [`GoogleTranslate`]; tests inject mocks
/// through [`Translator::with_provider`](super::Translator::with_provider).
pub trait TranslateProvider {
    /// One remote call requesting the raw/extended payload.
    fn translate(
        &self,
        text: &str,
        from: LanguageCode,
        to: LanguageCode,
    ) -> impl Future<Output = Result<RawTranslation, ProviderError>> + Send;
}

/// Client for the unofficial `translate_a/single` web endpoint. No API key
/// is needed; the endpoint rate limits aggressively instead.
pub struct GoogleTranslate {
    http_client: reqwest::Client,
    host: String,
}

#[bon]
impl GoogleTranslate {
    #[builder(on(String, into))]
    pub fn new(
        /// Origin to send requests to, e.g. a local proxy. Defaults to the
        /// public Google endpoint.
        #[builder(default = BASE_URL.to_owned())]
        host: String,
    ) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            host,
        }
    }
}

impl TranslateProvider for GoogleTranslate {
    async fn translate(
        &self,
        text: &str,
        from: LanguageCode,
        to: LanguageCode,
    ) -> Result<RawTranslation, ProviderError> {
        debug!(
            from = from.as_str(),
            to = to.as_str(),
            text_len = text.len(),
            "sending translate request"
        );

        let resp = self
            .http_client
            .get(format!("{}/translate_a/single", self.host))
            .query(&[
                ("client", "gtx"),
                ("sl", from.as_str()),
                ("tl", to.as_str()),
                // dt=t: translated sentences; dt=rm: transliteration entry
                ("dt", "t"),
                ("dt", "rm"),
                ("q", text),
            ])
            .send()
            .await?;

        let status = resp.status();
        debug!(%status, "translate response");

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(ProviderError::TooManyRequests);
        }
        if !status.is_success() {
            return Err(ProviderError::Api {
                name: status.to_string(),
                message: resp.text().await?,
            });
        }

        let body = resp.text().await?;
        let raw: Value = serde_json::from_str(&body).map_err(|e| ProviderError::Api {
            name: "ParseError".to_owned(),
            message: e.to_string(),
        })?;
        Ok(parse_gtx(raw))
    }
}

/// Shapes the endpoint's nested-array payload into a [`RawTranslation`].
///
/// `raw[0]` is a list of sentence entries whose first element is the
/// translated fragment; `raw[2]` is the detected source language code. Any
/// missing level degrades to empty/`None` rather than failing.
fn parse_gtx(raw: Value) -> RawTranslation {
    let text = raw
        .get(0)
        .and_then(Value::as_array)
        .map(|sentences| {
            sentences
                .iter()
                .filter_map(|s| s.get(0).and_then(Value::as_str))
                .collect::<String>()
        })
        .unwrap_or_default();
    let detected_iso = raw.get(2).and_then(Value::as_str).map(str::to_owned);

    RawTranslation {
        text,
        raw,
        detected_iso,
    }
}
