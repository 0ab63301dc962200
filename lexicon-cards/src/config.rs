use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0 Safari/537.36";

/// Enriches french, english and russian word lists and writes flashcard notes as json lines.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Settings {
    /// French word list, one `term;part of speech` record per line
    #[arg(long, env = "LEXICON_FRENCH")]
    pub french: PathBuf,
    /// English word list
    #[arg(long, env = "LEXICON_ENGLISH")]
    pub english: PathBuf,
    /// Russian word list
    #[arg(long, env = "LEXICON_RUSSIAN")]
    pub russian: PathBuf,
    /// Where to write the notes, stdout when omitted
    #[arg(long, short)]
    pub output: Option<PathBuf>,
    /// Words enriched at the same time
    #[arg(long, default_value_t = 4, value_parser = clap::value_parser!(u16).range(1..))]
    pub concurrency: u16,
    /// Per request timeout
    #[arg(long, default_value_t = 15)]
    pub timeout_secs: u64,
    #[arg(long, env = "LEXICON_USER_AGENT", default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,
    /// Field delimiter of the word lists
    #[arg(long, default_value_t = ';')]
    pub delimiter: char,
    /// Used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Settings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn http_client(&self) -> reqwest::Result<reqwest::Client> {
        reqwest::Client::builder()
            .timeout(self.timeout())
            .user_agent(&self.user_agent)
            .build()
    }

    pub fn delimiter_byte(&self) -> anyhow::Result<u8> {
        if !self.delimiter.is_ascii() {
            anyhow::bail!("delimiter {:?} is not an ascii character", self.delimiter);
        }
        Ok(self.delimiter as u8)
    }
}
