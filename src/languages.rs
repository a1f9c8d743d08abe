//! Language codes accepted by the translation endpoint.

use serde::{Deserialize, Serialize};

/// Returned by [`LanguageCode::from_str`] for codes outside the supported set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown language code: {0}")]
pub struct UnknownLanguage(pub String);

macro_rules! language_codes {
    ($($variant:ident: $code:literal => $name:literal,)+) => {
        /// A language supported by the translation endpoint.
        ///
        /// [`LanguageCode::Auto`] is not a real language: as a source code it
        /// asks the service to detect the language from the input text.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum LanguageCode {
            $(#[serde(rename = $code)] $variant,)+
        }

        impl LanguageCode {
            /// Every supported code, including the `auto` sentinel.
            pub const ALL: &'static [LanguageCode] = &[$(LanguageCode::$variant,)+];

            /// The ISO code the endpoint expects, e.g. `"zh-cn"`.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(LanguageCode::$variant => $code,)+
                }
            }

            /// English name of the language, e.g. `"Chinese (Simplified)"`.
            pub fn name(&self) -> &'static str {
                match self {
                    $(LanguageCode::$variant => $name,)+
                }
            }
        }

        impl std::str::FromStr for LanguageCode {
            type Err = UnknownLanguage;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($code => Ok(LanguageCode::$variant),)+
                    _ => Err(UnknownLanguage(s.to_owned())),
                }
            }
        }
    };
}

language_codes! {
    Auto: "auto" => "Auto detect",
    Af: "af" => "Afrikaans",
    Sq: "sq" => "Albanian",
    Am: "am" => "Amharic",
    Ar: "ar" => "Arabic",
    Hy: "hy" => "Armenian",
    Az: "az" => "Azerbaijani",
    Eu: "eu" => "Basque",
    Be: "be" => "Belarusian",
    Bn: "bn" => "Bengali",
    Bs: "bs" => "Bosnian",
    Bg: "bg" => "Bulgarian",
    Ca: "ca" => "Catalan",
    Ceb: "ceb" => "Cebuano",
    Ny: "ny" => "Chichewa",
    ZhCn: "zh-cn" => "Chinese (Simplified)",
    ZhTw: "zh-tw" => "Chinese (Traditional)",
    Co: "co" => "Corsican",
    Hr: "hr" => "Croatian",
    Cs: "cs" => "Czech",
    Da: "da" => "Danish",
    Nl: "nl" => "Dutch",
    En: "en" => "English",
    Eo: "eo" => "Esperanto",
    Et: "et" => "Estonian",
    Tl: "tl" => "Filipino",
    Fi: "fi" => "Finnish",
    Fr: "fr" => "French",
    Fy: "fy" => "Frisian",
    Gl: "gl" => "Galician",
    Ka: "ka" => "Georgian",
    De: "de" => "German",
    El: "el" => "Greek",
    Gu: "gu" => "Gujarati",
    Ht: "ht" => "Haitian Creole",
    Ha: "ha" => "Hausa",
    Haw: "haw" => "Hawaiian",
    He: "he" => "Hebrew",
    Hi: "hi" => "Hindi",
    Hmn: "hmn" => "Hmong",
    Hu: "hu" => "Hungarian",
    Is: "is" => "Icelandic",
    Ig: "ig" => "Igbo",
    Id: "id" => "Indonesian",
    Ga: "ga" => "Irish",
    It: "it" => "Italian",
    Ja: "ja" => "Japanese",
    Jw: "jw" => "Javanese",
    Kn: "kn" => "Kannada",
    Kk: "kk" => "Kazakh",
    Km: "km" => "Khmer",
    Ko: "ko" => "Korean",
    Ku: "ku" => "Kurdish (Kurmanji)",
    Ky: "ky" => "Kyrgyz",
    Lo: "lo" => "Lao",
    La: "la" => "Latin",
    Lv: "lv" => "Latvian",
    Lt: "lt" => "Lithuanian",
    Lb: "lb" => "Luxembourgish",
    Mk: "mk" => "Macedonian",
    Mg: "mg" => "Malagasy",
    Ms: "ms" => "Malay",
    Ml: "ml" => "Malayalam",
    Mt: "mt" => "Maltese",
    Mi: "mi" => "Maori",
    Mr: "mr" => "Marathi",
    Mn: "mn" => "Mongolian",
    My: "my" => "Myanmar (Burmese)",
    Ne: "ne" => "Nepali",
    No: "no" => "Norwegian",
    Ps: "ps" => "Pashto",
    Fa: "fa" => "Persian",
    Pl: "pl" => "Polish",
    Pt: "pt" => "Portuguese",
    Pa: "pa" => "Punjabi",
    Ro: "ro" => "Romanian",
    Ru: "ru" => "Russian",
    Sm: "sm" => "Samoan",
    Gd: "gd" => "Scots Gaelic",
    Sr: "sr" => "Serbian",
    St: "st" => "Sesotho",
    Sn: "sn" => "Shona",
    Sd: "sd" => "Sindhi",
    Si: "si" => "Sinhala",
    Sk: "sk" => "Slovak",
    Sl: "sl" => "Slovenian",
    So: "so" => "Somali",
    Es: "es" => "Spanish",
    Su: "su" => "Sundanese",
    Sw: "sw" => "Swahili",
    Sv: "sv" => "Swedish",
    Tg: "tg" => "Tajik",
    Ta: "ta" => "Tamil",
    Te: "te" => "Telugu",
    Th: "th" => "Thai",
    Tr: "tr" => "Turkish",
    Uk: "uk" => "Ukrainian",
    Ur: "ur" => "Urdu",
    Uz: "uz" => "Uzbek",
    Vi: "vi" => "Vietnamese",
    Cy: "cy" => "Welsh",
    Xh: "xh" => "Xhosa",
    Yi: "yi" => "Yiddish",
    Yo: "yo" => "Yoruba",
    Zu: "zu" => "Zulu",
}

impl std::fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
