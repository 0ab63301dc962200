use std::collections::HashMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartOfSpeech {
    Noun,
    Pronoun,
    Verb,
    Adjective,
    Adverb,
    Preposition,
    Conjunction,
    Interjection,
    Article,
    Unknown,
}

impl PartOfSpeech {
    /// Short tag the sources understand, `"Unknown"` for unrecognized input.
    pub fn tag(&self) -> &'static str {
        match self {
            PartOfSpeech::Noun => "n",
            PartOfSpeech::Pronoun => "pron",
            PartOfSpeech::Verb => "v",
            PartOfSpeech::Adjective => "adj",
            PartOfSpeech::Adverb => "adv",
            PartOfSpeech::Preposition => "prep",
            PartOfSpeech::Conjunction => "conj",
            PartOfSpeech::Interjection => "interj",
            PartOfSpeech::Article => "art",
            PartOfSpeech::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

const SPELLINGS: &[(&str, PartOfSpeech)] = &[
    ("noun", PartOfSpeech::Noun),
    ("n", PartOfSpeech::Noun),
    ("nom", PartOfSpeech::Noun),
    ("nm", PartOfSpeech::Noun),
    ("nf", PartOfSpeech::Noun),
    ("существительное", PartOfSpeech::Noun),
    ("сущ", PartOfSpeech::Noun),
    ("verb", PartOfSpeech::Verb),
    ("v", PartOfSpeech::Verb),
    ("verbe", PartOfSpeech::Verb),
    ("глагол", PartOfSpeech::Verb),
    ("гл", PartOfSpeech::Verb),
    ("adjective", PartOfSpeech::Adjective),
    ("adj", PartOfSpeech::Adjective),
    ("adjectif", PartOfSpeech::Adjective),
    ("прилагательное", PartOfSpeech::Adjective),
    ("прил", PartOfSpeech::Adjective),
    ("adverb", PartOfSpeech::Adverb),
    ("adv", PartOfSpeech::Adverb),
    ("adverbe", PartOfSpeech::Adverb),
    ("наречие", PartOfSpeech::Adverb),
    ("нар", PartOfSpeech::Adverb),
    ("conjunction", PartOfSpeech::Conjunction),
    ("conj", PartOfSpeech::Conjunction),
    ("conjonction", PartOfSpeech::Conjunction),
    ("союз", PartOfSpeech::Conjunction),
    ("pronoun", PartOfSpeech::Pronoun),
    ("pron", PartOfSpeech::Pronoun),
    ("pronom", PartOfSpeech::Pronoun),
    ("местоимение", PartOfSpeech::Pronoun),
    ("мест", PartOfSpeech::Pronoun),
    ("preposition", PartOfSpeech::Preposition),
    ("prep", PartOfSpeech::Preposition),
    ("préposition", PartOfSpeech::Preposition),
    ("предлог", PartOfSpeech::Preposition),
    ("interjection", PartOfSpeech::Interjection),
    ("interj", PartOfSpeech::Interjection),
    ("междометие", PartOfSpeech::Interjection),
    ("article", PartOfSpeech::Article),
    ("art", PartOfSpeech::Article),
    ("артикль", PartOfSpeech::Article),
];

/// Maps the many spellings of a part of speech onto [`PartOfSpeech`].
///
/// Built once and shared read-only (usually behind an `Arc`) by the aligner
/// and every source that has to compare parts of speech.
#[derive(Debug, Clone)]
pub struct PartOfSpeechNormalizer {
    mappings: HashMap<&'static str, PartOfSpeech>,
}

impl PartOfSpeechNormalizer {
    pub fn new() -> Self {
        Self {
            mappings: SPELLINGS.iter().copied().collect(),
        }
    }

    pub fn normalize(&self, raw: &str) -> PartOfSpeech {
        let raw = raw.trim().to_lowercase();
        self.mappings
            .get(raw.as_str())
            .copied()
            .unwrap_or(PartOfSpeech::Unknown)
    }
}

impl Default for PartOfSpeechNormalizer {
    fn default() -> Self {
        Self::new()
    }
}
