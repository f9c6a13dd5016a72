//! Label translation.

/// Static translation table: key -> [(locale, text)]
pub type TranslationTable = [(&'static str, &'static [(&'static str, &'static str)])];

/// Fallback locale used when a key has no entry for the requested one
pub const FALLBACK_LOCALE: &str = "en";

/// Resolves label keys for a single locale against a card's table
#[derive(Debug, Clone)]
pub struct Localizer {
    locale: String,
    table: &'static TranslationTable,
}

impl Localizer {
    pub fn new(locale: &str, table: &'static TranslationTable) -> Self {
        Self {
            locale: locale.trim().to_lowercase(),
            table,
        }
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Text for `key` in the requested locale, else English, else the key
    pub fn translate<'a>(&self, key: &'a str) -> &'a str {
        let Some((_, entries)) = self.table.iter().find(|(k, _)| *k == key) else {
            return key;
        };

        let lookup = |locale: &str| {
            entries
                .iter()
                .find(|(l, _)| l.eq_ignore_ascii_case(locale))
                .map(|(_, text)| *text)
        };

        lookup(&self.locale)
            .or_else(|| lookup(FALLBACK_LOCALE))
            .unwrap_or(key)
    }
}
