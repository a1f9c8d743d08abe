use crate::languages::LanguageCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Language pair for a translation request. `lang_from` may be
/// [`LanguageCode::Auto`] to detect the source language from the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageCodeSet {
    pub lang_from: LanguageCode,
    pub lang_to: LanguageCode,
}

/// Normalized result of a single translation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TranslateResult {
    pub original_text: String,
    pub translated_text: String,
    /// Transliteration of the translated text, when the service supplies one.
    pub pronunciation_text: Option<String>,
    /// Source language as resolved by the service. `None` when the response
    /// carried no recognizable code.
    pub lang_from: Option<LanguageCode>,
    pub lang_to: LanguageCode,
}

/// Non-normalized provider response: the plain translated text, the raw
/// nested-array payload, and the detected source language ISO code.
#[derive(Debug, Clone)]
pub struct RawTranslation {
    pub text: String,
    pub raw: Value,
    pub detected_iso: Option<String>,
}
