use std::collections::BTreeMap;
use std::io::Write;

use enrichment::{FrenchVerbConjugation, Language, Word};
use serde::Serialize;

use crate::pipeline::{target_language, EnrichedWord};

const FRENCH_DECK: &str = "Francais_mots";
const FRENCH_REVIEW_DECK: &str = "Francais_mots_corriger";
const CONJUGATION_DECK: &str = "Francais_conjugation";
const FRENCH_MODEL: &str = "Basic (and reversed card french)";
const CONJUGATION_MODEL: &str = "Basic (de conjugaison A1)";
const BASIC_MODEL: &str = "Basic (and reversed card)";
const FIELD_SEPARATOR: &str = "<br>";
const PRESENT: &str = "Présent";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub deck_name: String,
    pub model_name: String,
    pub fields: BTreeMap<String, String>,
}

impl Note {
    fn new<const N: usize>(deck_name: &str, model_name: &str, fields: [(&str, String); N]) -> Self {
        Self {
            deck_name: deck_name.to_owned(),
            model_name: model_name.to_owned(),
            fields: fields
                .into_iter()
                .map(|(name, value)| (name.to_owned(), value))
                .collect(),
        }
    }
}

fn front(word: &Word, term: &str) -> String {
    let headword = match &word.term_alt {
        Some(term_alt) => format!("{term} {term_alt}"),
        None => term.to_owned(),
    };
    [headword.as_str(), word.transcription.as_str(), word.part_of_speech.tag()].join(FIELD_SEPARATOR)
}

fn back(word: &Word) -> String {
    word.translations_to(target_language(word.language))
        .join(FIELD_SEPARATOR)
}

pub fn word_note(word: &Word) -> Note {
    let deck = match word.language {
        Language::French => FRENCH_DECK.to_owned(),
        other => format!("Vocabulary_{other}"),
    };
    let model = match word.language {
        Language::French => FRENCH_MODEL,
        _ => BASIC_MODEL,
    };
    Note::new(
        &deck,
        model,
        [("Front", front(word, &word.term)), ("Back", back(word))],
    )
}

/// Extra card for a french word whose transcription is ambiguous.
pub fn review_note(word: &Word) -> Option<Note> {
    if word.language != Language::French || !word.needs_review() {
        return None;
    }
    Some(Note::new(
        FRENCH_REVIEW_DECK,
        FRENCH_MODEL,
        [
            ("Front", front(word, &format!("{} ERROR", word.term))),
            ("Back", back(word)),
        ],
    ))
}

pub fn conjugation_note(conjugation: &FrenchVerbConjugation) -> Note {
    let present = |tenses: &enrichment::TenseTable| {
        tenses
            .get(PRESENT)
            .map(|forms| forms.join(FIELD_SEPARATOR))
            .unwrap_or_default()
    };
    Note::new(
        CONJUGATION_DECK,
        CONJUGATION_MODEL,
        [
            ("Infinitif", conjugation.infinitif.clone()),
            ("Présent", present(&conjugation.indicatif)),
            ("Impératif", present(&conjugation.imperatif)),
        ],
    )
}

/// Conjugation card first, then the review card, then the word card.
pub fn notes_for(enriched: &EnrichedWord) -> Vec<Note> {
    enriched
        .conjugation
        .as_ref()
        .map(conjugation_note)
        .into_iter()
        .chain(review_note(&enriched.word))
        .chain(Some(word_note(&enriched.word)))
        .collect()
}

/// One json object per line.
pub fn write_notes(mut writer: impl Write, notes: &[Note]) -> anyhow::Result<()> {
    for note in notes {
        serde_json::to_writer(&mut writer, note)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    Ok(())
}
