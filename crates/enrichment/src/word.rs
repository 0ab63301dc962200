use std::collections::{BTreeMap, HashMap};
use std::fmt;

use crate::part_of_speech::PartOfSpeech;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Language {
    French,
    English,
    Russian,
}

impl Language {
    /// Lower-case english name, the form dictionary urls are built from.
    pub fn name(&self) -> &'static str {
        match self {
            Language::French => "french",
            Language::English => "english",
            Language::Russian => "russian",
        }
    }

    /// ISO 639-1 code.
    pub fn code(&self) -> &'static str {
        match self {
            Language::French => "fr",
            Language::English => "en",
            Language::Russian => "ru",
        }
    }

    /// ISO 639-2 code, used by the context translation api.
    pub fn code3(&self) -> &'static str {
        match self {
            Language::French => "fra",
            Language::English => "eng",
            Language::Russian => "rus",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub type Translations = HashMap<Language, Vec<String>>;

#[derive(Debug, Clone)]
pub struct Word {
    pub language: Language,
    pub term: String,
    pub term_alt: Option<String>,
    /// The part of speech exactly as the word list spelled it.
    pub raw_part_of_speech: String,
    pub part_of_speech: PartOfSpeech,
    pub transcription: String,
    pub translations: Translations,
}

impl Word {
    pub fn new(language: Language, term: impl Into<String>, part_of_speech: impl Into<String>) -> Self {
        Self {
            language,
            term: term.into(),
            term_alt: None,
            raw_part_of_speech: part_of_speech.into(),
            part_of_speech: PartOfSpeech::Unknown,
            transcription: String::new(),
            translations: Translations::new(),
        }
    }

    /// Several comma separated transcriptions mean the source could not decide,
    /// such words are flagged for a manual review.
    pub fn needs_review(&self) -> bool {
        self.transcription.contains(',') && self.term_alt.is_none()
    }

    pub fn translations_to(&self, language: Language) -> &[String] {
        self.translations
            .get(&language)
            .map(|translations| &translations[..])
            .unwrap_or(&[])
    }
}

pub type TenseTable = BTreeMap<String, Vec<String>>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrenchVerbConjugation {
    pub infinitif: String,
    pub indicatif: TenseTable,
    pub imperatif: TenseTable,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comma_in_transcription_needs_review() {
        let mut word = Word::new(Language::French, "fils", "n");
        word.transcription = "fis, fil".to_owned();
        assert!(word.needs_review());

        word.term_alt = Some("fille".to_owned());
        assert!(!word.needs_review());
    }

    #[test]
    fn missing_translations_are_empty() {
        let word = Word::new(Language::English, "cat", "n");
        assert!(word.translations_to(Language::Russian).is_empty());
    }
}
