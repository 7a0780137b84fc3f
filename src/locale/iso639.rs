// SPDX-License-Identifier: PMPL-1.0-or-later

//! ISO 639-1 language code validation and metadata.
//!
//! Any assigned code passes validation; display names exist only for the
//! languages of the builtin locale database.

/// Every assigned ISO 639-1 code, sorted for binary search.
const ISO_639_1: &[&str] = &[
    "aa", "ab", "af", "ak", "am", "an", "ar", "as", "av", "ay", "az", "ba", "be", "bg", "bh", "bi",
    "bm", "bn", "bo", "br", "bs", "ca", "ce", "ch", "co", "cr", "cs", "cu", "cv", "cy", "da", "de",
    "dv", "dz", "ee", "el", "en", "eo", "es", "et", "eu", "fa", "ff", "fi", "fj", "fo", "fr", "fy",
    "ga", "gd", "gl", "gn", "gu", "gv", "ha", "he", "hi", "ho", "hr", "ht", "hu", "hy", "hz", "ia",
    "id", "ie", "ig", "ii", "ik", "io", "is", "it", "iu", "ja", "jv", "ka", "kg", "ki", "kj", "kk",
    "kl", "km", "kn", "ko", "kr", "ks", "ku", "kv", "kw", "ky", "la", "lb", "lg", "li", "ln", "lo",
    "lt", "lu", "lv", "mg", "mh", "mi", "mk", "ml", "mn", "mr", "ms", "mt", "my", "na", "nb", "nd",
    "ne", "ng", "nl", "nn", "no", "nr", "nv", "ny", "oc", "oj", "om", "or", "os", "pa", "pi", "pl",
    "ps", "pt", "qu", "rm", "rn", "ro", "ru", "rw", "sa", "sc", "sd", "se", "sg", "si", "sk", "sl",
    "sm", "sn", "so", "sq", "sr", "ss", "st", "su", "sv", "sw", "ta", "te", "tg", "th", "ti", "tk",
    "tl", "tn", "to", "tr", "ts", "tt", "tw", "ty", "ug", "uk", "ur", "uz", "ve", "vi", "vo", "wa",
    "wo", "xh", "yi", "yo", "za", "zh", "zu",
];

/// Languages the builtin database carries: code, English name, native name.
const LANGUAGES: &[(&str, &str, &str)] = &[
    ("en", "English", "English"),
    ("es", "Spanish", "español"),
    ("fr", "French", "français"),
    ("de", "German", "Deutsch"),
    ("ja", "Japanese", "日本語"),
    ("pt", "Portuguese", "português"),
    ("zh", "Chinese", "中文"),
    ("ko", "Korean", "한국어"),
    ("it", "Italian", "italiano"),
    ("ru", "Russian", "русский"),
    ("nl", "Dutch", "Nederlands"),
    ("sv", "Swedish", "svenska"),
    ("pl", "Polish", "polski"),
    ("tr", "Turkish", "Türkçe"),
    ("uk", "Ukrainian", "українська"),
    ("cs", "Czech", "čeština"),
    ("el", "Greek", "Ελληνικά"),
    ("da", "Danish", "dansk"),
    ("fi", "Finnish", "suomi"),
    ("nb", "Norwegian Bokmål", "norsk bokmål"),
    ("hu", "Hungarian", "magyar"),
];

/// Whether `code` is an assigned ISO 639-1 code. Lowercase only.
///
/// ```
/// use rest_localization::locale::is_valid_iso639_1;
///
/// assert!(is_valid_iso639_1("ga"));
/// assert!(!is_valid_iso639_1("GA"));
/// assert!(!is_valid_iso639_1("gle"));
/// ```
pub fn is_valid_iso639_1(code: &str) -> bool {
    ISO_639_1.binary_search(&code).is_ok()
}

fn language(code: &str) -> Option<&'static (&'static str, &'static str, &'static str)> {
    LANGUAGES.iter().find(|(known, _, _)| *known == code)
}

/// English name of a builtin language.
pub fn language_name(code: &str) -> Option<&'static str> {
    language(code).map(|(_, english, _)| *english)
}

/// Name of a builtin language in its own script.
pub fn native_name(code: &str) -> Option<&'static str> {
    language(code).map(|(_, _, native)| *native)
}
