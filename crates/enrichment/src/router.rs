use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::source::SourceAdapter;
use crate::word::{FrenchVerbConjugation, Language, Word};
use crate::EnrichmentError;

/// Names a configured source. Which adapter answers to which name is decided
/// when the router is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceId {
    ContextTranslation,
    Dictionary,
    BilingualDictionary,
}

impl fmt::Display for SourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SourceId::ContextTranslation => "context translation",
            SourceId::Dictionary => "dictionary",
            SourceId::BilingualDictionary => "bilingual dictionary",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    Translate,
    Transcribe,
    Augment,
    Conjugate,
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Capability::Translate => "translations",
            Capability::Transcribe => "transcriptions",
            Capability::Augment => "additional data",
            Capability::Conjugate => "conjugations",
        })
    }
}

/// Dispatches enrichment requests to the source configured under a [`SourceId`]
/// and merges the answers into the word.
///
/// The source map is fixed at construction and only read afterwards, so one router
/// can serve many words concurrently. It never retries: a failed request is
/// returned as is and the word keeps whatever it already had.
#[derive(Clone, Default)]
pub struct EnrichmentRouter {
    sources: HashMap<SourceId, Arc<dyn SourceAdapter>>,
}

impl EnrichmentRouter {
    pub fn new(sources: HashMap<SourceId, Arc<dyn SourceAdapter>>) -> Self {
        Self { sources }
    }

    pub fn with_source(mut self, id: SourceId, source: Arc<dyn SourceAdapter>) -> Self {
        self.sources.insert(id, source);
        self
    }

    fn source(&self, id: SourceId, capability: Capability) -> Result<&dyn SourceAdapter, EnrichmentError> {
        self.sources
            .get(&id)
            .map(|source| source.as_ref())
            .ok_or(EnrichmentError::UnknownSource {
                source_id: id,
                capability,
            })
    }

    /// Appends the translations found by `id` to `word.translations[dst]`.
    ///
    /// Existing candidates are kept, the new ones go after them. A successful
    /// request leaves an entry for `dst` even when nothing was found.
    pub async fn translate(
        &self,
        id: SourceId,
        word: &mut Word,
        src: Language,
        dst: Language,
    ) -> Result<(), EnrichmentError> {
        let source = self.source(id, Capability::Translate)?;
        let translations = source
            .fetch_translations(&word.term, word.part_of_speech.tag(), src, dst)
            .await?;
        debug!(term = %word.term, source = %id, found = translations.len(), "translations");
        word.translations.entry(dst).or_default().extend(translations);
        Ok(())
    }

    /// Replaces `word.transcription` with the one found by `id`.
    pub async fn transcribe(
        &self,
        id: SourceId,
        word: &mut Word,
        src: Language,
        dst: Language,
    ) -> Result<(), EnrichmentError> {
        let source = self.source(id, Capability::Transcribe)?;
        let transcription = source.fetch_transcription(&word.term, src, dst).await?;
        debug!(term = %word.term, source = %id, %transcription, "transcription");
        word.transcription = transcription;
        Ok(())
    }

    pub async fn augment(&self, id: SourceId, word: &mut Word) -> Result<(), EnrichmentError> {
        self.source(id, Capability::Augment)?
            .fetch_additional_data(word)
            .await
    }

    pub async fn conjugate(
        &self,
        id: SourceId,
        term: &str,
        language: Language,
    ) -> Result<FrenchVerbConjugation, EnrichmentError> {
        self.source(id, Capability::Conjugate)?
            .fetch_conjugation(term, language)
            .await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use super::*;
    use crate::part_of_speech::PartOfSpeech;

    #[derive(Default)]
    struct Canned {
        translations: Vec<&'static str>,
        transcription: &'static str,
        calls: AtomicUsize,
    }

    impl Canned {
        fn translating(translations: Vec<&'static str>) -> Arc<Self> {
            Arc::new(Self {
                translations,
                ..Default::default()
            })
        }
    }

    #[async_trait]
    impl SourceAdapter for Canned {
        async fn fetch_translations(
            &self,
            _term: &str,
            _part_of_speech: &str,
            _src: Language,
            _dst: Language,
        ) -> Result<Vec<String>, EnrichmentError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.translations.iter().map(|t| t.to_string()).collect())
        }

        async fn fetch_transcription(
            &self,
            _term: &str,
            _src: Language,
            _dst: Language,
        ) -> Result<String, EnrichmentError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.transcription.to_owned())
        }

        async fn fetch_additional_data(&self, word: &mut Word) -> Result<(), EnrichmentError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            word.term_alt = Some("belle".to_owned());
            Ok(())
        }
    }

    fn verb() -> Word {
        let mut word = Word::new(Language::French, "aller", "v");
        word.part_of_speech = PartOfSpeech::Verb;
        word
    }

    #[tokio::test]
    async fn unknown_source_never_reaches_an_adapter() {
        let canned = Canned::translating(vec!["идти"]);
        let router = EnrichmentRouter::default().with_source(SourceId::Dictionary, canned.clone());
        let mut word = verb();

        let result = router
            .translate(SourceId::ContextTranslation, &mut word, Language::French, Language::Russian)
            .await;
        assert!(matches!(
            result,
            Err(EnrichmentError::UnknownSource {
                source_id: SourceId::ContextTranslation,
                capability: Capability::Translate,
            })
        ));
        assert!(matches!(
            router.conjugate(SourceId::BilingualDictionary, "aller", Language::French).await,
            Err(EnrichmentError::UnknownSource { .. })
        ));
        assert_eq!(canned.calls.load(Ordering::SeqCst), 0);
        assert!(word.translations.is_empty());
    }

    #[tokio::test]
    async fn translations_accumulate_across_sources() {
        let router = EnrichmentRouter::default()
            .with_source(SourceId::ContextTranslation, Canned::translating(vec!["идти", "ехать"]))
            .with_source(SourceId::Dictionary, Canned::translating(vec!["идти"]));
        let mut word = verb();
        word.translations
            .insert(Language::Russian, vec!["аллер".to_owned()]);

        router
            .translate(SourceId::ContextTranslation, &mut word, Language::French, Language::Russian)
            .await
            .unwrap();
        router
            .translate(SourceId::Dictionary, &mut word, Language::French, Language::Russian)
            .await
            .unwrap();

        assert_eq!(
            word.translations[&Language::Russian],
            ["аллер", "идти", "ехать", "идти"]
        );
    }

    #[tokio::test]
    async fn empty_answer_is_recorded() {
        let router = EnrichmentRouter::default()
            .with_source(SourceId::Dictionary, Canned::translating(Vec::new()));
        let mut word = verb();
        router
            .translate(SourceId::Dictionary, &mut word, Language::French, Language::English)
            .await
            .unwrap();
        assert_eq!(word.translations.get(&Language::English), Some(&Vec::new()));
    }

    #[tokio::test]
    async fn last_transcription_wins() {
        let first = Arc::new(Canned {
            transcription: "[ale]",
            ..Default::default()
        });
        let second = Arc::new(Canned {
            transcription: "[a.le]",
            ..Default::default()
        });
        let router = EnrichmentRouter::default()
            .with_source(SourceId::Dictionary, first)
            .with_source(SourceId::BilingualDictionary, second);
        let mut word = verb();

        router
            .transcribe(SourceId::Dictionary, &mut word, Language::French, Language::English)
            .await
            .unwrap();
        router
            .transcribe(SourceId::BilingualDictionary, &mut word, Language::French, Language::English)
            .await
            .unwrap();
        assert_eq!(word.transcription, "[a.le]");
    }

    #[tokio::test]
    async fn augment_is_delegated() {
        let canned = Canned::translating(Vec::new());
        let router = EnrichmentRouter::default().with_source(SourceId::BilingualDictionary, canned.clone());
        let mut word = Word::new(Language::French, "beau", "adj");
        router
            .augment(SourceId::BilingualDictionary, &mut word)
            .await
            .unwrap();
        assert_eq!(word.term_alt.as_deref(), Some("belle"));
        assert_eq!(canned.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn adapter_errors_pass_through() {
        let router = EnrichmentRouter::default()
            .with_source(SourceId::Dictionary, Canned::translating(Vec::new()));
        assert!(matches!(
            router.conjugate(SourceId::Dictionary, "aller", Language::French).await,
            Err(EnrichmentError::UnsupportedLanguage(Language::French))
        ));
    }
}
