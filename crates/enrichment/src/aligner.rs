use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use crate::part_of_speech::PartOfSpeechNormalizer;
use crate::word::{Language, Translations, Word};

/// Links identically spelled terms across the word lists of different languages.
///
/// The links are only a seed for cognates and proper nouns. Real sources append
/// their own candidates later and never remove these.
pub struct WordAligner {
    normalizer: Arc<PartOfSpeechNormalizer>,
}

impl WordAligner {
    pub fn new(normalizer: Arc<PartOfSpeechNormalizer>) -> Self {
        Self { normalizer }
    }

    /// Normalizes every part of speech and seeds `translations` with same spelled
    /// terms from the other lists. Words come back language by language, in list order.
    pub fn align(&self, mut words_by_language: BTreeMap<Language, Vec<Word>>) -> Vec<Word> {
        // term -> language -> position in that language's list, the last duplicate wins
        let mut index: HashMap<String, HashMap<Language, usize>> = HashMap::new();
        for (&language, words) in words_by_language.iter_mut() {
            for (position, word) in words.iter_mut().enumerate() {
                word.part_of_speech = self.normalizer.normalize(&word.raw_part_of_speech);
                index
                    .entry(word.term.clone())
                    .or_default()
                    .insert(language, position);
            }
        }

        let mut aligned = Vec::with_capacity(words_by_language.values().map(Vec::len).sum());
        for (&language, words) in words_by_language.iter() {
            for word in words {
                let mut translations = Translations::new();
                if let Some(matches) = index.get(&word.term) {
                    for (&other, &position) in matches {
                        if other == language {
                            continue;
                        }
                        let linked = &words_by_language[&other][position];
                        translations
                            .entry(other)
                            .or_default()
                            .push(linked.term.clone());
                    }
                }
                let mut word = word.clone();
                word.translations = translations;
                aligned.push(word);
            }
        }
        aligned
    }
}
