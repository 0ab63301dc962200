use scraper::{ElementRef, Selector};

use crate::EnrichmentError;

pub(crate) fn selector(css: &str) -> Result<Selector, EnrichmentError> {
    Selector::parse(css).map_err(|_| EnrichmentError::Selector(css.to_owned()))
}

/// All text below `element`, concatenated and trimmed.
pub(crate) fn text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_owned()
}

/// Trimmed text of the first match of `selector` below `element`, empty when there is none.
pub(crate) fn first_text(element: ElementRef<'_>, selector: &Selector) -> String {
    element.select(selector).next().map(text).unwrap_or_default()
}

/// Trimmed text of every match of `selector` below `element`, concatenated.
pub(crate) fn joined_text(element: ElementRef<'_>, selector: &Selector) -> String {
    element
        .select(selector)
        .flat_map(|found| found.text())
        .collect::<String>()
        .trim()
        .to_owned()
}
