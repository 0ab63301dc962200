use async_trait::async_trait;
use scraper::Html;
use tracing::debug;

use crate::html::{first_text, selector};
use crate::source::SourceAdapter;
use crate::sources::fetch_page;
use crate::word::{Language, Word};
use crate::{ensure_not_empty, EnrichmentError};

const BILINGUAL_URL: &str = "https://www.larousse.fr/dictionnaires/francais-anglais";

const ENTRY: &str = "div.ZoneEntree";
const HEADWORD: &str = ".Adresse";
const PHONETIC: &str = ".Phonetique";

/// Headword block of a bilingual dictionary entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Headword {
    pub term: String,
    /// Gendered variant, "belle" in "beau, belle".
    pub term_alt: Option<String>,
    pub transcription: String,
}

impl Headword {
    /// Reads the first entry of a page, `None` when the page has no entry.
    pub fn from_page(html: &str) -> Result<Option<Self>, EnrichmentError> {
        let entry_selector = selector(ENTRY)?;
        let headword_selector = selector(HEADWORD)?;
        let phonetic_selector = selector(PHONETIC)?;

        let document = Html::parse_document(html);
        let Some(entry) = document.select(&entry_selector).next() else {
            return Ok(None);
        };
        let headword = first_text(entry, &headword_selector);
        let mut forms = headword
            .split(',')
            .map(str::trim)
            .filter(|form| !form.is_empty());
        let Some(term) = forms.next() else {
            return Ok(None);
        };
        let transcription = first_text(entry, &phonetic_selector)
            .trim_matches(|c| c == '[' || c == ']')
            .trim()
            .to_owned();
        Ok(Some(Self {
            term: term.to_owned(),
            term_alt: forms.next().map(str::to_owned),
            transcription,
        }))
    }

    pub fn apply_to(self, word: &mut Word) {
        if word.term != self.term {
            debug!(from = %word.term, to = %self.term, "corrected term");
            word.term = self.term;
        }
        if self.term_alt.is_some() {
            word.term_alt = self.term_alt;
        }
        if !self.transcription.is_empty() {
            word.transcription = self.transcription;
        }
    }
}

/// French-english dictionary used for headword corrections, gendered
/// variants and transcriptions of french words.
pub struct BilingualScraper {
    client: reqwest::Client,
}

impl BilingualScraper {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SourceAdapter for BilingualScraper {
    async fn fetch_additional_data(&self, word: &mut Word) -> Result<(), EnrichmentError> {
        ensure_not_empty("term", &word.term)?;
        if word.language != Language::French {
            return Err(EnrichmentError::UnsupportedLanguage(word.language));
        }
        let html = fetch_page(self.client.get(format!("{BILINGUAL_URL}/{}", word.term))).await?;
        let headword = Headword::from_page(&html)?
            .ok_or_else(|| EnrichmentError::NotFound(format!("dictionary entry {:?}", word.term)))?;
        headword.apply_to(word);
        Ok(())
    }
}
