use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::part_of_speech::PartOfSpeechNormalizer;
use crate::router::SourceId;
use crate::source::SourceAdapter;
use crate::EnrichmentError;

mod bilingual;
mod context_translation;
mod dictionary;

pub use bilingual::{BilingualScraper, Headword};
pub use context_translation::{ContextTranslationClient, MAX_CONTEXT_TRANSLATIONS};
pub use dictionary::DictionaryScraper;

/// Every source under its usual id, all sharing `client`.
pub fn default_sources(
    client: &reqwest::Client,
    normalizer: Arc<PartOfSpeechNormalizer>,
) -> HashMap<SourceId, Arc<dyn SourceAdapter>> {
    let mut sources: HashMap<SourceId, Arc<dyn SourceAdapter>> = HashMap::new();
    sources.insert(
        SourceId::ContextTranslation,
        Arc::new(ContextTranslationClient::new(client.clone())),
    );
    sources.insert(
        SourceId::Dictionary,
        Arc::new(DictionaryScraper::new(client.clone(), normalizer)),
    );
    sources.insert(
        SourceId::BilingualDictionary,
        Arc::new(BilingualScraper::new(client.clone())),
    );
    sources
}

pub(crate) async fn fetch_page(
    req: reqwest::RequestBuilder,
) -> Result<String, EnrichmentError> {
    let res: reqwest::Response = req.send().await.map_err(EnrichmentError::Fetch)?;
    debug!(url = %res.url(), status = %res.status(), "fetched page");
    if !res.status().is_success() {
        return Err(EnrichmentError::Status(res.status()));
    }
    res.text().await.map_err(EnrichmentError::Fetch)
}
