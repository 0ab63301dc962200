use std::io::Read;
use std::path::Path;

use anyhow::Context;
use enrichment::{Language, Word};

/// Reads `term;part of speech` records. There is no header row, extra fields are ignored.
pub fn read_words(path: &Path, language: Language, delimiter: u8) -> anyhow::Result<Vec<Word>> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("could not open the {language} word list {}", path.display()))?;
    parse_words(file, language, delimiter)
        .with_context(|| format!("could not read the {language} word list {}", path.display()))
}

pub fn parse_words(reader: impl Read, language: Language, delimiter: u8) -> anyhow::Result<Vec<Word>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .delimiter(delimiter)
        .flexible(true)
        .from_reader(reader);
    let mut words = Vec::new();
    for record in reader.records() {
        let record = record?;
        let line = record.position().map(|position| position.line()).unwrap_or_default();
        match (record.get(0), record.get(1)) {
            (Some(term), Some(part_of_speech)) => {
                words.push(Word::new(language, term.trim(), part_of_speech.trim()));
            }
            _ => anyhow::bail!("invalid record on line {line}, expected a term and a part of speech"),
        }
    }
    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_trimmed_records() {
        let words = parse_words(" chat ; noun\naller;v;extra\n".as_bytes(), Language::French, b';').unwrap();
        assert_eq!(words.len(), 2);
        assert_eq!(words[0].term, "chat");
        assert_eq!(words[0].raw_part_of_speech, "noun");
        assert_eq!(words[1].term, "aller");
        assert!(words.iter().all(|word| word.language == Language::French));
        assert!(words.iter().all(|word| word.translations.is_empty()));
    }

    #[test]
    fn short_record_fails_the_list() {
        let error = parse_words("cat;n\ndog\n".as_bytes(), Language::English, b';').unwrap_err();
        assert!(error.to_string().contains("line 2"), "{error}");
    }

    #[test]
    fn other_delimiters() {
        let words = parse_words("кот,сущ\n".as_bytes(), Language::Russian, b',').unwrap();
        assert_eq!(words[0].term, "кот");
    }

    #[test]
    fn reads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("english.csv");
        std::fs::write(&path, "cat;noun\n").unwrap();
        let words = read_words(&path, Language::English, b';').unwrap();
        assert_eq!(words[0].term, "cat");

        let missing = read_words(&dir.path().join("missing.csv"), Language::English, b';');
        assert!(missing.is_err());
    }
}
