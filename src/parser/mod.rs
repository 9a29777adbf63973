pub mod definitions;
pub mod document;
pub mod paradigm;

use std::sync::LazyLock;

use scraper::Selector;
use tracing::{debug, warn};

use crate::entry::{Entry, WordClass};
use crate::error::{ExtractWarning, LookupError};
use document::{selector, text_of, Document};

static WORD_CLASS_SEL: LazyLock<Selector> = LazyLock::new(|| selector("span.tree-pos-info"));

/// Page → classification → definitions + paradigm.
///
/// Fails without a partial entry when the page is empty, lacks a word class,
/// or has a class with no inflection strategy. A missing or malformed
/// inflection table is recorded as a warning; the affected forms are empty.
pub fn extract_entry(lemma: &str, html: &str) -> Result<Entry, LookupError> {
    let doc = Document::parse(html).ok_or_else(|| LookupError::EntryNotFound {
        lemma: lemma.to_string(),
    })?;

    let word_class = doc
        .find_first(&WORD_CLASS_SEL)
        .map(text_of)
        .ok_or_else(|| LookupError::Classification {
            lemma: lemma.to_string(),
        })?;
    let class = WordClass::from_label(&word_class).ok_or_else(|| {
        LookupError::UnsupportedWordClass {
            word_class: word_class.clone(),
        }
    })?;
    debug!("'{}' classified as {} ({})", lemma, class, word_class);

    let definitions = definitions::extract(&doc);

    let mut warnings = Vec::new();
    let inflection = match paradigm::extract(&doc, class, &mut warnings) {
        Some(paradigm) => paradigm,
        None => {
            let warning = ExtractWarning::MissingTable { word_class: class };
            warn!("{}: {}", lemma, warning);
            warnings.push(warning);
            class.empty_paradigm()
        }
    };

    Ok(Entry {
        lemma: lemma.to_string(),
        word_class,
        definitions,
        inflection,
        warnings,
    })
}

// ── Tests ──
