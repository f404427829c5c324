//! Internationalization module
//!
//! Provides dashboard labels in English (en) and Brazilian Portuguese (pt).
//! Supports automatic language detection based on system locale.

mod en;
mod pt;

use std::collections::HashMap;

/// Internationalization manager
pub struct I18n {
    current_lang: String,
    translations: HashMap<String, String>,
}

impl I18n {
    /// Create a new I18n instance with the specified language
    pub fn new(lang: &str) -> Self {
        let mut i18n = Self {
            current_lang: String::new(),
            translations: HashMap::new(),
        };
        i18n.set_language(lang);
        i18n
    }

    /// Set the current language
    pub fn set_language(&mut self, lang: &str) {
        let lang = if lang == "auto" {
            Self::detect_system_language()
        } else {
            lang.to_string()
        };

        let (code, translations) = match lang.as_str() {
            "pt" | "pt-BR" => ("pt", pt::get_translations()),
            _ => ("en", en::get_translations()),
        };
        self.current_lang = code.to_string();
        self.translations = translations;

        log::info!("Language set to: {}", self.current_lang);
    }

    /// Get a translated string by key; unknown keys echo the key
    pub fn get(&self, key: &str) -> String {
        self.translations
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }

    /// Get a translated string and substitute `{name}` placeholders
    pub fn get_with(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut text = self.get(key);
        for (name, value) in args {
            text = text.replace(&format!("{{{}}}", name), value);
        }
        text
    }

    /// Localized month name, 1-based
    pub fn month_name(&self, month: u32) -> String {
        self.get(&format!("month.{}", month))
    }

    /// Get all translations
    pub fn get_all(&self) -> HashMap<String, String> {
        self.translations.clone()
    }

    /// Get the current language code
    pub fn current_language(&self) -> &str {
        &self.current_lang
    }

    /// Detect system language from the usual locale variables
    fn detect_system_language() -> String {
        let lang_env = std::env::var("LANG")
            .or_else(|_| std::env::var("LC_ALL"))
            .or_else(|_| std::env::var("LC_MESSAGES"))
            .unwrap_or_else(|_| "en".to_string());

        // "pt_BR.UTF-8" -> "pt"
        let lang_code = lang_env
            .split('_')
            .next()
            .unwrap_or("en")
            .split('.')
            .next()
            .unwrap_or("en");

        match lang_code {
            "pt" => "pt".to_string(),
            _ => "en".to_string(),
        }
    }
}

impl Default for I18n {
    fn default() -> Self {
        Self::new("auto")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_portuguese_labels() {
        let i18n = I18n::new("pt");
        assert_eq!(i18n.current_language(), "pt");
        assert_eq!(i18n.month_name(1), "Janeiro");
        assert_eq!(i18n.get("equipment.none"), "Nenhum");
        assert_eq!(i18n.get_with("dashboard.total_in", &[("month", "Janeiro")]), "Total em Janeiro");
    }

    #[test]
    fn test_unknown_language_falls_back_to_english() {
        let i18n = I18n::new("de");
        assert_eq!(i18n.current_language(), "en");
        assert_eq!(i18n.month_name(12), "December");
    }

    #[test]
    fn test_missing_key_echoes_key() {
        let i18n = I18n::new("en");
        assert_eq!(i18n.get("no.such.key"), "no.such.key");
        assert_eq!(i18n.month_name(13), "month.13");
    }

    #[test]
    fn test_languages_share_keys() {
        let en = I18n::new("en").get_all();
        let pt = I18n::new("pt").get_all();
        let mut en_keys: Vec<_> = en.keys().collect();
        let mut pt_keys: Vec<_> = pt.keys().collect();
        en_keys.sort();
        pt_keys.sort();
        assert_eq!(en_keys, pt_keys);
    }
}
