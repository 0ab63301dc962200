use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::conjugation::extract_conjugation;
use crate::source::SourceAdapter;
use crate::sources::fetch_page;
use crate::word::{FrenchVerbConjugation, Language};
use crate::{ensure_not_empty, EnrichmentError};

const TRANSLATION_API_URL: &str = "https://api.reverso.net/translate/v1/translation";
const CONJUGATOR_URL: &str = "https://conjugator.reverso.net";

/// At most this many context results are kept per request.
pub const MAX_CONTEXT_TRANSLATIONS: usize = 1;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TranslateRequest<'a> {
    format: &'static str,
    from: &'static str,
    to: &'static str,
    input: &'a str,
    options: TranslateOptions,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TranslateOptions {
    sentence_splitter: bool,
    origin: &'static str,
    context_results: bool,
    language_detection: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct TranslateResponse {
    #[serde(default)]
    context_results: Option<ContextResults>,
}

#[derive(Debug, Default, Deserialize)]
struct ContextResults {
    #[serde(default)]
    results: Vec<ContextResult>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ContextResult {
    #[serde(default)]
    translation: String,
    #[serde(default)]
    part_of_speech: Option<String>,
}

/// Keeps the first results whose part of speech mentions `part_of_speech`.
pub(crate) fn select_translations(response: TranslateResponse, part_of_speech: &str) -> Vec<String> {
    response
        .context_results
        .map(|context| context.results)
        .unwrap_or_default()
        .into_iter()
        .filter(|result| {
            result
                .part_of_speech
                .as_deref()
                .is_some_and(|found| found.contains(part_of_speech))
        })
        .map(|result| result.translation)
        .take(MAX_CONTEXT_TRANSLATIONS)
        .collect()
}

/// Context translation service: translations through its json api and
/// conjugation tables scraped from its conjugator.
pub struct ContextTranslationClient {
    client: reqwest::Client,
}

impl ContextTranslationClient {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    async fn translate(
        &self,
        text: &str,
        src: Language,
        dst: Language,
    ) -> Result<TranslateResponse, EnrichmentError> {
        let body = TranslateRequest {
            format: "text",
            from: src.code3(),
            to: dst.code3(),
            input: text,
            options: TranslateOptions {
                sentence_splitter: true,
                origin: "translation.web",
                context_results: true,
                language_detection: true,
            },
        };
        let res = self
            .client
            .post(TRANSLATION_API_URL)
            .json(&body)
            .send()
            .await
            .map_err(EnrichmentError::Fetch)?;
        if !res.status().is_success() {
            return Err(EnrichmentError::Status(res.status()));
        }
        res.json::<TranslateResponse>()
            .await
            .map_err(EnrichmentError::Deserialize)
    }
}

#[async_trait]
impl SourceAdapter for ContextTranslationClient {
    async fn fetch_translations(
        &self,
        term: &str,
        part_of_speech: &str,
        src: Language,
        dst: Language,
    ) -> Result<Vec<String>, EnrichmentError> {
        ensure_not_empty("term", term)?;
        ensure_not_empty("part of speech", part_of_speech)?;
        let response = self.translate(term, src, dst).await?;
        Ok(select_translations(response, part_of_speech))
    }

    async fn fetch_conjugation(
        &self,
        term: &str,
        language: Language,
    ) -> Result<FrenchVerbConjugation, EnrichmentError> {
        ensure_not_empty("term", term)?;
        if language != Language::French {
            return Err(EnrichmentError::UnsupportedLanguage(language));
        }
        let url = format!(
            "{CONJUGATOR_URL}/conjugation-french-verb-{}.html",
            term.to_lowercase()
        );
        let req = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT_LANGUAGE, "en-US,en;q=0.9,fr;q=0.8");
        let html = fetch_page(req).await?;
        extract_conjugation(&html, term)
    }
}
