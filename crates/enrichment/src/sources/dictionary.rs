use std::sync::Arc;

use async_trait::async_trait;
use scraper::Html;
use tracing::debug;

use crate::html::{first_text, selector};
use crate::part_of_speech::PartOfSpeechNormalizer;
use crate::source::SourceAdapter;
use crate::sources::fetch_page;
use crate::word::Language;
use crate::{ensure_not_empty, EnrichmentError};

const DICTIONARY_URL: &str = "https://dictionary.cambridge.org/dictionary";

const ENTRY: &str = "div.pr.dictionary";
const PART_OF_SPEECH: &str = "span.pos.dpos";
const TRANSLATION: &str = "span.trans.dtrans";
const PRONUNCIATION: &str = "span.pron.dpron";

/// Bilingual dictionary pages, one entry block per part of speech.
pub struct DictionaryScraper {
    client: reqwest::Client,
    normalizer: Arc<PartOfSpeechNormalizer>,
}

impl DictionaryScraper {
    pub fn new(client: reqwest::Client, normalizer: Arc<PartOfSpeechNormalizer>) -> Self {
        Self { client, normalizer }
    }

    async fn fetch_entry_page(
        &self,
        term: &str,
        src: Language,
        dst: Language,
    ) -> Result<String, EnrichmentError> {
        let url = format!("{DICTIONARY_URL}/{}-{}/{term}", src.name(), dst.name());
        fetch_page(self.client.get(url)).await
    }

    /// The first translation of the first entry whose part of speech normalizes to
    /// `part_of_speech`. Later entries are never looked at, even if the first
    /// matching one has no translation.
    pub fn translations_from_page(
        &self,
        html: &str,
        part_of_speech: &str,
    ) -> Result<Vec<String>, EnrichmentError> {
        let entry_selector = selector(ENTRY)?;
        let part_of_speech_selector = selector(PART_OF_SPEECH)?;
        let translation_selector = selector(TRANSLATION)?;

        let document = Html::parse_document(html);
        let entry = document.select(&entry_selector).find(|entry| {
            let found = first_text(*entry, &part_of_speech_selector);
            self.normalizer.normalize(&found).tag() == part_of_speech
        });
        let Some(entry) = entry else {
            return Ok(Vec::new());
        };
        let translation = first_text(entry, &translation_selector);
        debug!(part_of_speech, %translation, "matched dictionary entry");
        Ok((!translation.is_empty())
            .then_some(translation)
            .into_iter()
            .collect())
    }

    /// Pronunciation of the first entry, empty when it has none.
    pub fn transcription_from_page(html: &str) -> Result<String, EnrichmentError> {
        let entry_selector = selector(ENTRY)?;
        let pronunciation_selector = selector(PRONUNCIATION)?;
        let document = Html::parse_document(html);
        Ok(document
            .select(&entry_selector)
            .next()
            .map(|entry| first_text(entry, &pronunciation_selector))
            .unwrap_or_default())
    }
}

#[async_trait]
impl SourceAdapter for DictionaryScraper {
    async fn fetch_translations(
        &self,
        term: &str,
        part_of_speech: &str,
        src: Language,
        dst: Language,
    ) -> Result<Vec<String>, EnrichmentError> {
        ensure_not_empty("term", term)?;
        ensure_not_empty("part of speech", part_of_speech)?;
        let html = self.fetch_entry_page(term, src, dst).await?;
        self.translations_from_page(&html, part_of_speech)
    }

    async fn fetch_transcription(
        &self,
        term: &str,
        src: Language,
        dst: Language,
    ) -> Result<String, EnrichmentError> {
        ensure_not_empty("term", term)?;
        let html = self.fetch_entry_page(term, src, dst).await?;
        Self::transcription_from_page(&html)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
<html><body>
<div class="pr dictionary">
  <span class="pos dpos">noun</span>
  <span class="pron dpron">/ʃa/</span>
  <span class="trans dtrans">cat</span>
  <span class="trans dtrans">tomcat</span>
</div>
<div class="pr dictionary">
  <span class="pos dpos">verb</span>
  <span class="pron dpron">/ʃate/</span>
</div>
<div class="pr dictionary">
  <span class="pos dpos">Verb</span>
  <span class="trans dtrans">to chat</span>
</div>
</body></html>
"#;

    fn scraper() -> DictionaryScraper {
        DictionaryScraper::new(reqwest::Client::new(), Arc::new(PartOfSpeechNormalizer::new()))
    }

    #[test]
    fn first_translation_of_matching_entry() {
        assert_eq!(scraper().translations_from_page(PAGE, "n").unwrap(), ["cat"]);
    }

    #[test]
    fn first_matching_entry_wins_even_when_empty() {
        assert!(scraper().translations_from_page(PAGE, "v").unwrap().is_empty());
    }

    #[test]
    fn no_matching_entry() {
        assert!(scraper().translations_from_page(PAGE, "adj").unwrap().is_empty());
        assert!(scraper().translations_from_page("", "n").unwrap().is_empty());
    }

    #[test]
    fn transcription_of_first_entry() {
        assert_eq!(DictionaryScraper::transcription_from_page(PAGE).unwrap(), "/ʃa/");
        assert_eq!(
            DictionaryScraper::transcription_from_page("<p>nothing</p>").unwrap(),
            ""
        );
    }

    #[tokio::test]
    async fn validates_before_any_request() {
        let source = scraper();
        assert!(matches!(
            source
                .fetch_transcription("", Language::English, Language::Russian)
                .await,
            Err(EnrichmentError::EmptyInput("term"))
        ));
        assert!(matches!(
            source
                .fetch_translations("chat", "", Language::French, Language::English)
                .await,
            Err(EnrichmentError::EmptyInput("part of speech"))
        ));
    }
}
