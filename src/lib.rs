#![doc = include_str!("../README.md")]

mod languages;
pub use languages::{LanguageCode, UnknownLanguage};

pub mod translate;
pub use translate::{
    Error, GoogleTranslate, LanguageCodeSet, ProviderError, RawTranslation, TranslateProvider,
    TranslateResult, Translator,
};
