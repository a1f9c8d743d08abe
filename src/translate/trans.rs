use std::str::FromStr;

use futures::future::try_join_all;
use futures::try_join;

use super::Translator;
use super::error::Error;
use super::provider::TranslateProvider;
use super::types::{LanguageCodeSet, TranslateResult};
use crate::languages::LanguageCode;

impl<P: TranslateProvider> Translator<P> {
    /// Translates `text` once, from `set.lang_from` (possibly
    /// [`LanguageCode::Auto`]) to `set.lang_to`.
    ///
    /// Empty input returns immediately with empty translated text and the
    /// given language codes, without calling the service.
    pub async fn simple_translate(
        &self,
        text: &str,
        set: LanguageCodeSet,
    ) -> Result<TranslateResult, Error> {
        if text.is_empty() {
            return Ok(TranslateResult {
                original_text: text.to_owned(),
                translated_text: String::new(),
                pronunciation_text: None,
                lang_from: Some(set.lang_from),
                lang_to: set.lang_to,
            });
        }

        let translated = self
            .provider
            .translate(text, set.lang_from, set.lang_to)
            .await?;

        Ok(TranslateResult {
            original_text: text.to_owned(),
            pronunciation_text: pronunciation_from_raw(&translated.raw),
            lang_from: translated
                .detected_iso
                .as_deref()
                .and_then(|iso| LanguageCode::from_str(iso).ok()),
            translated_text: translated.text,
            lang_to: set.lang_to,
        })
    }

    /// Translates in both directions, returning `[forward, backward]`.
    ///
    /// With an explicit source language the two calls run concurrently. With
    /// [`LanguageCode::Auto`] the backward call depends on the detected
    /// source language, so it runs after the forward call and translates the
    /// forward result's text back; if no source language was resolved, no
    /// backward call is made and the result is empty.
    pub async fn double_way_translate(
        &self,
        text: &str,
        set: LanguageCodeSet,
    ) -> Result<Vec<TranslateResult>, Error> {
        if text.is_empty() {
            return Ok(Vec::new());
        }

        if set.lang_from == LanguageCode::Auto {
            let forward = self.simple_translate(text, set).await?;
            let Some(detected) = forward.lang_from else {
                return Ok(Vec::new());
            };

            let backward = self
                .simple_translate(
                    &forward.translated_text,
                    LanguageCodeSet {
                        lang_from: set.lang_to,
                        lang_to: detected,
                    },
                )
                .await?;
            Ok(vec![forward, backward])
        } else {
            let (forward, backward) = try_join!(
                self.simple_translate(text, set),
                self.simple_translate(
                    text,
                    LanguageCodeSet {
                        lang_from: set.lang_to,
                        lang_to: set.lang_from,
                    },
                ),
            )?;
            Ok(vec![forward, backward])
        }
    }

    /// Translates `text` from `source` to every language in `targets`
    /// concurrently, returning results in input order. The first failing
    /// call fails the whole operation.
    pub async fn multi_way_translate(
        &self,
        text: &str,
        source: LanguageCode,
        targets: &[LanguageCode],
    ) -> Result<Vec<TranslateResult>, Error> {
        if text.is_empty() {
            return Ok(Vec::new());
        }

        try_join_all(targets.iter().map(|&target| {
            self.simple_translate(
                text,
                LanguageCodeSet {
                    lang_from: source,
                    lang_to: target,
                },
            )
        }))
        .await
    }
}

/// Best-effort transliteration lookup at the payload's known position
/// (`raw[0][1][2]`). Total over malformed shapes.
fn pronunciation_from_raw(raw: &serde_json::Value) -> Option<String> {
    Some(raw.get(0)?.get(1)?.get(2)?.as_str()?.to_owned())
}
