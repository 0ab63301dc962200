use enrichment::{
    EnrichmentRouter, FrenchVerbConjugation, Language, PartOfSpeech, SourceId, Word,
};
use futures::{stream, StreamExt};
use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct EnrichedWord {
    pub word: Word,
    pub conjugation: Option<FrenchVerbConjugation>,
}

/// Language the cards translate into.
pub fn target_language(language: Language) -> Language {
    match language {
        Language::Russian => Language::French,
        _ => Language::Russian,
    }
}

/// Enriches the words `concurrency` at a time, results keep the input order.
pub async fn enrich_all(
    router: &EnrichmentRouter,
    words: Vec<Word>,
    concurrency: usize,
) -> Vec<EnrichedWord> {
    stream::iter(words)
        .map(|word| enrich_word(router, word))
        .buffered(concurrency.max(1))
        .collect()
        .await
}

/// Never fails: whatever a source could not deliver is logged and left out.
pub async fn enrich_word(router: &EnrichmentRouter, mut word: Word) -> EnrichedWord {
    let conjugation = match word.language {
        Language::French => enrich_french(router, &mut word).await,
        _ => {
            enrich_foreign(router, &mut word).await;
            None
        }
    };
    info!(
        language = %word.language,
        term = %word.term,
        term_alt = word.term_alt.as_deref().unwrap_or_default(),
        part_of_speech = %word.part_of_speech,
        transcription = %word.transcription,
        translations = ?word.translations,
        "enriched"
    );
    EnrichedWord { word, conjugation }
}

async fn enrich_french(router: &EnrichmentRouter, word: &mut Word) -> Option<FrenchVerbConjugation> {
    if let Err(error) = router.augment(SourceId::BilingualDictionary, word).await {
        warn!(term = %word.term, %error, "could not fetch additional data");
        return None;
    }
    let language = word.language;
    if let Err(error) = router
        .translate(SourceId::ContextTranslation, word, language, target_language(language))
        .await
    {
        warn!(term = %word.term, %error, "could not fetch translations");
        return None;
    }
    if word.part_of_speech != PartOfSpeech::Verb {
        return None;
    }
    match router
        .conjugate(SourceId::ContextTranslation, &word.term, language)
        .await
    {
        Ok(conjugation) => Some(conjugation),
        Err(error) => {
            warn!(term = %word.term, %error, "could not fetch conjugation");
            None
        }
    }
}

async fn enrich_foreign(router: &EnrichmentRouter, word: &mut Word) {
    let language = word.language;
    let target = target_language(language);
    if let Err(error) = router
        .transcribe(SourceId::Dictionary, word, language, target)
        .await
    {
        warn!(term = %word.term, %error, "could not fetch transcription");
    }
    if let Err(error) = router
        .translate(SourceId::ContextTranslation, word, language, target)
        .await
    {
        warn!(term = %word.term, %error, "could not fetch translations");
    }
}
