use serde::Serialize;

/// A selectable language. English is the upstream default and has an empty code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LanguageOption {
    pub code: &'static str,
    pub name: &'static str,
}

pub const LANGUAGES: [LanguageOption; 7] = [
    LanguageOption { code: "", name: "English" },
    LanguageOption { code: "es", name: "Spanish" },
    LanguageOption { code: "it", name: "Italian" },
    LanguageOption { code: "fr", name: "French" },
    LanguageOption { code: "de", name: "German" },
    LanguageOption { code: "zh", name: "Chinese" },
    LanguageOption { code: "pt-br", name: "Portuguese" },
];

/// Word counts offered to the user.
pub const WORD_COUNT_CHOICES: [u32; 4] = [3, 4, 5, 6];

pub const DEFAULT_WORD_COUNT: u32 = 3;

pub fn default_language() -> &'static LanguageOption {
    &LANGUAGES[0]
}

pub fn find_language(code: &str) -> Option<&'static LanguageOption> {
    LANGUAGES.iter().find(|lang| lang.code == code)
}

/// Display name for a language code, falling back to the code itself.
pub fn language_name(code: &str) -> &str {
    find_language(code).map(|lang| lang.name).unwrap_or(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_is_default_with_empty_code() {
        assert_eq!(default_language().code, "");
        assert_eq!(default_language().name, "English");
    }

    #[test]
    fn test_catalog_codes() {
        let codes: Vec<&str> = LANGUAGES.iter().map(|l| l.code).collect();
        assert_eq!(codes, vec!["", "es", "it", "fr", "de", "zh", "pt-br"]);
    }

    #[test]
    fn test_language_name() {
        assert_eq!(language_name("pt-br"), "Portuguese");
        assert_eq!(language_name(""), "English");
        assert_eq!(language_name("xx"), "xx");
    }
}
