mod aligner;
mod conjugation;
mod html;
mod part_of_speech;
mod router;
mod source;
pub mod sources;
mod word;

pub use aligner::WordAligner;
pub use conjugation::{extract_conjugation, ConjugationPage, FormEntry, Section, TenseBlock};
pub use part_of_speech::{PartOfSpeech, PartOfSpeechNormalizer};
pub use router::{Capability, EnrichmentRouter, SourceId};
pub use source::SourceAdapter;
pub use word::{FrenchVerbConjugation, Language, TenseTable, Translations, Word};

#[derive(Debug, thiserror::Error)]
pub enum EnrichmentError {
    #[error("{0} cannot be empty")]
    EmptyInput(&'static str),
    #[error("no source {source_id} is configured for {capability}")]
    UnknownSource {
        source_id: SourceId,
        capability: Capability,
    },
    #[error("language {0} is not supported")]
    UnsupportedLanguage(Language),
    #[error("nothing found for {0}")]
    NotFound(String),
    #[error("request failed: {0}")]
    Fetch(reqwest::Error),
    #[error("unexpected response body: {0}")]
    Deserialize(reqwest::Error),
    #[error("source answered with status {0}")]
    Status(reqwest::StatusCode),
    #[error("invalid selector {0:?}")]
    Selector(String),
}

pub(crate) fn ensure_not_empty(field: &'static str, value: &str) -> Result<(), EnrichmentError> {
    if value.is_empty() {
        return Err(EnrichmentError::EmptyInput(field));
    }
    Ok(())
}
