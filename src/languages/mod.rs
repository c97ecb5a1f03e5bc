//! Static language table for transcript retrieval.
//!
//! Ordered mapping from display name to the code the transcript provider
//! expects. Loaded once, never mutated at runtime.

/// Display name to language code, in selector order.
pub const LANGUAGES: &[(&str, &str)] = &[
    ("Abkhazian", "ab"),
    ("Afar", "aa"),
    ("Afrikaans", "af"),
    ("Akan", "ak"),
    ("Albanian", "sq"),
    ("Amharic", "am"),
    ("Arabic", "ar"),
    ("Armenian", "hy"),
    ("Assamese", "as"),
    ("Aymara", "ay"),
    ("Azerbaijani", "az"),
    ("Bangla", "bn"),
    ("Bashkir", "ba"),
    ("Basque", "eu"),
    ("Belarusian", "be"),
    ("Bhojpuri", "bho"),
    ("Bosnian", "bs"),
    ("Breton", "br"),
    ("Bulgarian", "bg"),
    ("Burmese", "my"),
    ("Catalan", "ca"),
    ("Cebuano", "ceb"),
    ("Chinese (Simplified)", "zh-Hans"),
    ("Chinese (Traditional)", "zh-Hant"),
    ("Corsican", "co"),
    ("Croatian", "hr"),
    ("Czech", "cs"),
    ("Danish", "da"),
    ("Divehi", "dv"),
    ("Dutch", "nl"),
    ("Dzongkha", "dz"),
    ("English", "en"),
    ("Esperanto", "eo"),
    ("Estonian", "et"),
    ("Ewe", "ee"),
    ("Faroese", "fo"),
    ("Fijian", "fj"),
    ("Filipino", "fil"),
    ("Finnish", "fi"),
    ("French", "fr"),
    ("Ga", "gaa"),
    ("Galician", "gl"),
    ("Ganda", "lg"),
    ("Georgian", "ka"),
    ("German", "de"),
    ("Greek", "el"),
    ("Guarani", "gn"),
    ("Gujarati", "gu"),
    ("Haitian Creole", "ht"),
    ("Hausa", "ha"),
    ("Hawaiian", "haw"),
    ("Hebrew", "iw"),
    ("Hindi", "hi"),
    ("Hmong", "hmn"),
    ("Hungarian", "hu"),
    ("Icelandic", "is"),
    ("Igbo", "ig"),
    ("Indonesian", "id"),
    ("Irish", "ga"),
    ("Italian", "it"),
    ("Japanese", "ja"),
    ("Javanese", "jv"),
    ("Kalaallisut", "kl"),
    ("Kannada", "kn"),
    ("Kazakh", "kk"),
    ("Khasi", "kha"),
    ("Khmer", "km"),
    ("Kinyarwanda", "rw"),
    ("Korean", "ko"),
    ("Krio", "kri"),
    ("Kurdish", "ku"),
    ("Kyrgyz", "ky"),
    ("Lao", "lo"),
    ("Latin", "la"),
    ("Latvian", "lv"),
    ("Lingala", "ln"),
    ("Lithuanian", "lt"),
    ("Luo", "luo"),
    ("Luxembourgish", "lb"),
    ("Macedonian", "mk"),
    ("Malagasy", "mg"),
    ("Malay", "ms"),
    ("Malayalam", "ml"),
    ("Maltese", "mt"),
    ("Manx", "gv"),
    ("Māori", "mi"),
    ("Marathi", "mr"),
    ("Mongolian", "mn"),
    ("Morisyen", "mfe"),
    ("Nepali", "ne"),
    ("Newari", "new"),
    ("Northern Sotho", "nso"),
    ("Norwegian", "no"),
    ("Nyanja", "ny"),
    ("Occitan", "oc"),
    ("Odia", "or"),
    ("Oromo", "om"),
    ("Ossetic", "os"),
    ("Pampanga", "pam"),
    ("Pashto", "ps"),
    ("Persian", "fa"),
    ("Polish", "pl"),
    ("Portuguese", "pt"),
    ("Portuguese (Portugal)", "pt-PT"),
    ("Punjabi", "pa"),
    ("Quechua", "qu"),
    ("Romanian", "ro"),
    ("Rundi", "rn"),
    ("Russian", "ru"),
    ("Samoan", "sm"),
    ("Sango", "sg"),
    ("Sanskrit", "sa"),
    ("Scottish Gaelic", "gd"),
    ("Serbian", "sr"),
    ("Seselwa Creole French", "crs"),
    ("Shona", "sn"),
    ("Sindhi", "sd"),
    ("Sinhala", "si"),
    ("Slovak", "sk"),
    ("Slovenian", "sl"),
    ("Somali", "so"),
    ("Southern Sotho", "st"),
    ("Spanish", "es"),
    ("Sundanese", "su"),
    ("Swahili", "sw"),
    ("Swati", "ss"),
    ("Swedish", "sv"),
    ("Tajik", "tg"),
    ("Tamil", "ta"),
    ("Tatar", "tt"),
    ("Telugu", "te"),
    ("Thai", "th"),
    ("Tibetan", "bo"),
    ("Tigrinya", "ti"),
    ("Tongan", "to"),
    ("Tsonga", "ts"),
    ("Tswana", "tn"),
    ("Tumbuka", "tum"),
    ("Turkish", "tr"),
    ("Turkmen", "tk"),
    ("Ukrainian", "uk"),
    ("Urdu", "ur"),
    ("Uyghur", "ug"),
    ("Uzbek", "uz"),
    ("Venda", "ve"),
    ("Vietnamese", "vi"),
    ("Waray", "war"),
    ("Welsh", "cy"),
    ("Western Frisian", "fy"),
    ("Wolof", "wo"),
    ("Xhosa", "xh"),
    ("Yiddish", "yi"),
    ("Yoruba", "yo"),
    ("Zulu", "zu"),
];

/// Full table in selector order.
pub fn all() -> &'static [(&'static str, &'static str)] {
    LANGUAGES
}

/// Look up the provider code for a display name.
pub fn code_for(display_name: &str) -> Option<&'static str> {
    LANGUAGES
        .iter()
        .find(|(name, _)| *name == display_name)
        .map(|(_, code)| *code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_maps_to_en() {
        assert_eq!(code_for("English"), Some("en"));
    }

    #[test]
    fn unknown_name_has_no_code() {
        assert_eq!(code_for("Klingon"), None);
    }

    #[test]
    fn table_is_complete_and_unique() {
        assert_eq!(LANGUAGES.len(), 154);

        let mut names: Vec<&str> = LANGUAGES.iter().map(|(name, _)| *name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), LANGUAGES.len(), "duplicate display name");
    }

    #[test]
    fn codes_are_two_to_seven_letters() {
        for (name, code) in LANGUAGES {
            assert!(
                (2..=7).contains(&code.len()),
                "suspicious code {:?} for {:?}",
                code,
                name
            );
        }
    }
}
