use std::collections::BTreeMap;
use std::fs::File;
use std::io::{self, BufWriter};
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use enrichment::sources::default_sources;
use enrichment::{EnrichmentRouter, Language, PartOfSpeechNormalizer, WordAligner};
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::Settings;
use notes::{notes_for, write_notes};
use pipeline::enrich_all;
use word_lists::read_words;

mod config;
mod notes;
mod pipeline;
mod word_lists;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::parse();
    init_tracing(&settings.log_level);

    let delimiter = settings.delimiter_byte()?;
    let mut words_by_language = BTreeMap::new();
    for (language, path) in [
        (Language::French, &settings.french),
        (Language::English, &settings.english),
        (Language::Russian, &settings.russian),
    ] {
        let words = read_words(path, language, delimiter)?;
        info!(%language, count = words.len(), "read word list");
        words_by_language.insert(language, words);
    }

    let normalizer = Arc::new(PartOfSpeechNormalizer::new());
    let words = WordAligner::new(normalizer.clone()).align(words_by_language);

    let client = settings
        .http_client()
        .context("could not build the http client")?;
    let router = EnrichmentRouter::new(default_sources(&client, normalizer));
    let enriched = enrich_all(&router, words, usize::from(settings.concurrency)).await;

    let notes = enriched.iter().flat_map(notes_for).collect::<Vec<_>>();
    match &settings.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("could not create {}", path.display()))?;
            write_notes(BufWriter::new(file), &notes)?;
        }
        None => write_notes(io::stdout().lock(), &notes)?,
    }
    info!(words = enriched.len(), notes = notes.len(), "done");
    Ok(())
}

fn init_tracing(fallback_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
