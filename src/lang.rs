//! Language codes and display labels.

use crate::error::{Error, Result};
use crate::translate::LanguagePair;

/// Endonyms for common languages, sorted by code.
const LABELS: &[(&str, &str)] = &[
    ("ar", "العربية"),
    ("de", "Deutsch"),
    ("en", "English"),
    ("es", "Español"),
    ("fr", "Français"),
    ("hr", "Hrvatski"),
    ("it", "Italiano"),
    ("ja", "日本語"),
    ("ko", "한국어"),
    ("nl", "Nederlands"),
    ("pl", "Polski"),
    ("pt", "Português"),
    ("ro", "Română"),
    ("ru", "Русский"),
    ("uk", "Українська"),
    ("zh-CN", "中文"),
];

/// Language codes accepted by the Google translation endpoint.
const GOOGLE_LANGUAGES: &[(&str, &str)] = &[
    ("af", "afrikaans"),
    ("sq", "albanian"),
    ("am", "amharic"),
    ("ar", "arabic"),
    ("hy", "armenian"),
    ("as", "assamese"),
    ("ay", "aymara"),
    ("az", "azerbaijani"),
    ("bm", "bambara"),
    ("eu", "basque"),
    ("be", "belarusian"),
    ("bn", "bengali"),
    ("bho", "bhojpuri"),
    ("bs", "bosnian"),
    ("bg", "bulgarian"),
    ("ca", "catalan"),
    ("ceb", "cebuano"),
    ("ny", "chichewa"),
    ("zh-CN", "chinese (simplified)"),
    ("zh-TW", "chinese (traditional)"),
    ("co", "corsican"),
    ("hr", "croatian"),
    ("cs", "czech"),
    ("da", "danish"),
    ("dv", "dhivehi"),
    ("doi", "dogri"),
    ("nl", "dutch"),
    ("en", "english"),
    ("eo", "esperanto"),
    ("et", "estonian"),
    ("ee", "ewe"),
    ("tl", "filipino"),
    ("fi", "finnish"),
    ("fr", "french"),
    ("fy", "frisian"),
    ("gl", "galician"),
    ("ka", "georgian"),
    ("de", "german"),
    ("el", "greek"),
    ("gn", "guarani"),
    ("gu", "gujarati"),
    ("ht", "haitian creole"),
    ("ha", "hausa"),
    ("haw", "hawaiian"),
    ("iw", "hebrew"),
    ("hi", "hindi"),
    ("hmn", "hmong"),
    ("hu", "hungarian"),
    ("is", "icelandic"),
    ("ig", "igbo"),
    ("ilo", "ilocano"),
    ("id", "indonesian"),
    ("ga", "irish"),
    ("it", "italian"),
    ("ja", "japanese"),
    ("jw", "javanese"),
    ("kn", "kannada"),
    ("kk", "kazakh"),
    ("km", "khmer"),
    ("rw", "kinyarwanda"),
    ("gom", "konkani"),
    ("ko", "korean"),
    ("kri", "krio"),
    ("ku", "kurdish (kurmanji)"),
    ("ckb", "kurdish (sorani)"),
    ("ky", "kyrgyz"),
    ("lo", "lao"),
    ("la", "latin"),
    ("lv", "latvian"),
    ("ln", "lingala"),
    ("lt", "lithuanian"),
    ("lg", "luganda"),
    ("lb", "luxembourgish"),
    ("mk", "macedonian"),
    ("mai", "maithili"),
    ("mg", "malagasy"),
    ("ms", "malay"),
    ("ml", "malayalam"),
    ("mt", "maltese"),
    ("mi", "maori"),
    ("mr", "marathi"),
    ("mni-Mtei", "meiteilon (manipuri)"),
    ("lus", "mizo"),
    ("mn", "mongolian"),
    ("my", "myanmar"),
    ("ne", "nepali"),
    ("no", "norwegian"),
    ("or", "odia (oriya)"),
    ("om", "oromo"),
    ("ps", "pashto"),
    ("fa", "persian"),
    ("pl", "polish"),
    ("pt", "portuguese"),
    ("pa", "punjabi"),
    ("qu", "quechua"),
    ("ro", "romanian"),
    ("ru", "russian"),
    ("sm", "samoan"),
    ("sa", "sanskrit"),
    ("gd", "scots gaelic"),
    ("nso", "sepedi"),
    ("sr", "serbian"),
    ("st", "sesotho"),
    ("sn", "shona"),
    ("sd", "sindhi"),
    ("si", "sinhala"),
    ("sk", "slovak"),
    ("sl", "slovenian"),
    ("so", "somali"),
    ("es", "spanish"),
    ("su", "sundanese"),
    ("sw", "swahili"),
    ("sv", "swedish"),
    ("tg", "tajik"),
    ("ta", "tamil"),
    ("tt", "tatar"),
    ("te", "telugu"),
    ("th", "thai"),
    ("ti", "tigrinya"),
    ("ts", "tsonga"),
    ("tr", "turkish"),
    ("tk", "turkmen"),
    ("ak", "twi"),
    ("uk", "ukrainian"),
    ("ur", "urdu"),
    ("ug", "uyghur"),
    ("uz", "uzbek"),
    ("vi", "vietnamese"),
    ("cy", "welsh"),
    ("xh", "xhosa"),
    ("yi", "yiddish"),
    ("yo", "yoruba"),
    ("zu", "zulu"),
];

/// Display label for a language code: its endonym, or the upper-cased code.
pub fn label(code: &str) -> String {
    LABELS
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, name)| name.to_string())
        .unwrap_or_else(|| code.to_uppercase())
}

/// Known endonyms as `(code, label)` pairs, sorted by code.
pub fn labels() -> impl Iterator<Item = (&'static str, &'static str)> {
    LABELS.iter().copied()
}

/// Codes accepted by the Google translation endpoint, as `(code, name)`.
pub fn supported_languages() -> impl Iterator<Item = (&'static str, &'static str)> {
    GOOGLE_LANGUAGES.iter().copied()
}

/// Check if a code is accepted by the Google translation endpoint.
pub fn is_supported(code: &str) -> bool {
    GOOGLE_LANGUAGES.iter().any(|(c, _)| *c == code)
}

/// Check both codes of a pair against the Google catalogue.
pub fn validate_pair(pair: &LanguagePair) -> Result<()> {
    let bad: Vec<String> = [&pair.source, &pair.target]
        .into_iter()
        .filter(|code| !is_supported(code))
        .cloned()
        .collect();

    if bad.is_empty() {
        Ok(())
    } else {
        Err(Error::UnsupportedLanguage(bad))
    }
}
