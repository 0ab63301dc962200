use async_trait::async_trait;

use crate::word::{FrenchVerbConjugation, Language, Word};
use crate::{ensure_not_empty, EnrichmentError};

/// An external provider of lexical data.
///
/// Every capability has a neutral default so a source only overrides what it
/// can actually answer and the router may call anything on any source.
/// Argument validation still happens in the defaults: an empty term is rejected
/// by every source before any request is made.
#[async_trait]
pub trait SourceAdapter: Send + Sync {
    /// Candidate translations of `term` used as `part_of_speech` (a normalized tag).
    /// Defaults to no candidates.
    async fn fetch_translations(
        &self,
        term: &str,
        part_of_speech: &str,
        _src: Language,
        _dst: Language,
    ) -> Result<Vec<String>, EnrichmentError> {
        ensure_not_empty("term", term)?;
        ensure_not_empty("part of speech", part_of_speech)?;
        Ok(Vec::new())
    }

    /// Phonetic transcription of `term`, empty when the source has none.
    async fn fetch_transcription(
        &self,
        term: &str,
        _src: Language,
        _dst: Language,
    ) -> Result<String, EnrichmentError> {
        ensure_not_empty("term", term)?;
        Ok(String::new())
    }

    /// Corrects `term`, fills `term_alt` and `transcription` in place. No-op by default.
    async fn fetch_additional_data(&self, _word: &mut Word) -> Result<(), EnrichmentError> {
        Ok(())
    }

    /// A source without conjugation tables supports no language at all.
    ///
    /// Unlike the other capabilities this default fails instead of answering
    /// empty. A paradigm with no infinitive and no indicative tense is what
    /// [`EnrichmentError::NotFound`] stands for, so there is no neutral value.
    async fn fetch_conjugation(
        &self,
        term: &str,
        language: Language,
    ) -> Result<FrenchVerbConjugation, EnrichmentError> {
        ensure_not_empty("term", term)?;
        Err(EnrichmentError::UnsupportedLanguage(language))
    }
}
