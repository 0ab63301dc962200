//! Recovers a verb paradigm from a conjugator page.
//!
//! The page is a flat run of sections (`.word-wrap-row`), each titled by one or
//! more `h4` headings and holding tense blocks (`.blue-box-wrap`) whose list items
//! carry the inflected forms. A list item may be split into an auxiliary fragment
//! (`i.auxgraytxt`) and a main fragment (`i.verbtxt`).
//!
//! Extraction runs in two passes: [`ConjugationPage::parse`] partitions the
//! document into [`Section`]s without interpreting them, then
//! [`ConjugationPage::extract`] walks the sections once and classifies each by
//! its title.

use scraper::Html;
use tracing::debug;

use crate::html::{joined_text, selector};
use crate::word::{FrenchVerbConjugation, TenseTable};
use crate::EnrichmentError;

const SECTION: &str = ".word-wrap-row";
const SECTION_TITLE: &str = ".word-wrap-title h4";
const TENSE_BLOCK: &str = ".wrap-three-col .blue-box-wrap";
const TENSE_LABEL: &str = "p";
const FORM_ENTRY: &str = "ul.wrap-verbs-listing li";
const AUXILIARY: &str = "i.auxgraytxt";
const MAIN_FRAGMENT: &str = "i.verbtxt";

const INFINITIVE_TITLE: &str = "Infinitif";
const INDICATIVE_TITLE: &str = "Indicatif";
/// The imperative row shares its heading block with the infinitive one, so its
/// `h4` texts run together.
const IMPERATIVE_TITLE: &str = "ImpératifInfinitif";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormEntry {
    pub auxiliary: String,
    pub main: String,
}

impl FormEntry {
    pub fn new(auxiliary: impl Into<String>, main: impl Into<String>) -> Self {
        Self {
            auxiliary: auxiliary.into(),
            main: main.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TenseBlock {
    pub label: String,
    pub entries: Vec<FormEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Section {
    /// Text of every heading of the section, concatenated and trimmed.
    pub title: String,
    pub tense_blocks: Vec<TenseBlock>,
    /// Main fragment of every list item in the section, tense block or not.
    pub verb_forms: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SectionKind {
    Infinitive,
    Indicative,
    Imperative,
    Ignored,
}

impl SectionKind {
    fn classify(title: &str) -> Self {
        match title {
            INFINITIVE_TITLE => SectionKind::Infinitive,
            INDICATIVE_TITLE => SectionKind::Indicative,
            IMPERATIVE_TITLE => SectionKind::Imperative,
            _ => SectionKind::Ignored,
        }
    }
}

/// Indicative items normally carry the whole form in the main fragment. When it is
/// empty the auxiliary is joined to it with a space.
fn indicative_form(entry: &FormEntry) -> Option<String> {
    let main = entry.main.trim();
    if !main.is_empty() {
        return Some(main.to_owned());
    }
    let auxiliary = entry.auxiliary.trim();
    if auxiliary.is_empty() {
        return None;
    }
    Some(format!("{auxiliary} {main}"))
}

/// Imperative items glue the auxiliary straight onto the main fragment, no separator.
/// An item with neither fragment stays as an empty form so later persons keep their slot.
fn imperative_form(entry: &FormEntry) -> String {
    let auxiliary = entry.auxiliary.trim();
    let main = entry.main.trim();
    if auxiliary.is_empty() {
        main.to_owned()
    } else {
        format!("{auxiliary}{main}")
    }
}

/// A conjugator page split into its sections.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConjugationPage {
    sections: Vec<Section>,
}

impl ConjugationPage {
    pub fn from_sections(sections: Vec<Section>) -> Self {
        Self { sections }
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn parse(html: &str) -> Result<Self, EnrichmentError> {
        let section_selector = selector(SECTION)?;
        let title_selector = selector(SECTION_TITLE)?;
        let block_selector = selector(TENSE_BLOCK)?;
        let label_selector = selector(TENSE_LABEL)?;
        let entry_selector = selector(FORM_ENTRY)?;
        let auxiliary_selector = selector(AUXILIARY)?;
        let main_selector = selector(MAIN_FRAGMENT)?;

        let document = Html::parse_document(html);
        let sections = document
            .select(&section_selector)
            .map(|row| {
                let tense_blocks = row
                    .select(&block_selector)
                    .map(|block| TenseBlock {
                        label: joined_text(block, &label_selector),
                        entries: block
                            .select(&entry_selector)
                            .map(|item| FormEntry {
                                auxiliary: joined_text(item, &auxiliary_selector),
                                main: joined_text(item, &main_selector),
                            })
                            .collect(),
                    })
                    .collect();
                let verb_forms = row
                    .select(&entry_selector)
                    .map(|item| joined_text(item, &main_selector))
                    .collect();
                Section {
                    title: joined_text(row, &title_selector),
                    tense_blocks,
                    verb_forms,
                }
            })
            .collect();
        Ok(Self { sections })
    }

    /// Builds the paradigm of `term`.
    ///
    /// The infinitive found on the page replaces `term`. Fails with
    /// [`EnrichmentError::NotFound`] only when the page has neither an infinitive
    /// nor a single indicative tense.
    pub fn extract(&self, term: &str) -> Result<FrenchVerbConjugation, EnrichmentError> {
        let mut infinitive: Option<String> = None;
        let mut indicatif = TenseTable::new();
        let mut imperatif = TenseTable::new();

        for section in &self.sections {
            match SectionKind::classify(&section.title) {
                SectionKind::Infinitive => {
                    if infinitive.is_none() {
                        infinitive = section
                            .verb_forms
                            .iter()
                            .map(|form| form.trim())
                            .find(|form| !form.is_empty())
                            .map(str::to_owned);
                    }
                }
                SectionKind::Indicative => {
                    for block in &section.tense_blocks {
                        let tense = block.label.trim();
                        if tense.is_empty() {
                            continue;
                        }
                        let forms = block
                            .entries
                            .iter()
                            .filter_map(indicative_form)
                            .collect::<Vec<_>>();
                        if !forms.is_empty() {
                            indicatif.insert(tense.to_owned(), forms);
                        }
                    }
                }
                SectionKind::Imperative => {
                    for block in &section.tense_blocks {
                        let tense = block.label.trim();
                        if tense.is_empty() {
                            continue;
                        }
                        let forms = block
                            .entries
                            .iter()
                            .map(imperative_form)
                            .collect::<Vec<_>>();
                        if forms.iter().any(|form| !form.is_empty()) {
                            imperatif.entry(tense.to_owned()).or_insert(forms);
                        }
                    }
                }
                SectionKind::Ignored => {}
            }
        }

        if infinitive.is_none() && indicatif.is_empty() {
            return Err(EnrichmentError::NotFound(format!(
                "conjugation of {term:?}"
            )));
        }
        debug!(
            term,
            infinitive = infinitive.as_deref(),
            indicative_tenses = indicatif.len(),
            imperative_tenses = imperatif.len(),
            "extracted conjugation"
        );
        Ok(FrenchVerbConjugation {
            infinitif: infinitive.unwrap_or_else(|| term.to_owned()),
            indicatif,
            imperatif,
        })
    }
}

pub fn extract_conjugation(html: &str, term: &str) -> Result<FrenchVerbConjugation, EnrichmentError> {
    ConjugationPage::parse(html)?.extract(term)
}
