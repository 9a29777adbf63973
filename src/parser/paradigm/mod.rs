pub mod adjective;
pub mod noun;
pub mod table;
pub mod verb;

use std::sync::LazyLock;

use scraper::{ElementRef, Selector};
use tracing::debug;

use super::document::{attr_is_blank, selector, text_of, Document};
use crate::entry::{Forms, Paradigm, WordClass};
use crate::error::ExtractWarning;

static LEXEME_TABLE_SEL: LazyLock<Selector> = LazyLock::new(|| selector("table.lexeme"));
static CASE_LABEL_SEL: LazyLock<Selector> =
    LazyLock::new(|| selector(r#"td.inflection[rowspan="2"]"#));
static COMMA_LIST_SEL: LazyLock<Selector> = LazyLock::new(|| selector("ul.commaList"));
static LI_SEL: LazyLock<Selector> = LazyLock::new(|| selector("li"));

/// Only the first tables on a page belong to the headword.
const MAX_CANDIDATE_TABLES: usize = 2;

/// Extract the paradigm for `class`, or `None` when the page has no matching
/// inflection table. Recoverable table problems are pushed onto `warnings`.
pub fn extract(
    doc: &Document,
    class: WordClass,
    warnings: &mut Vec<ExtractWarning>,
) -> Option<Paradigm> {
    let table = find_table(doc, class.table_marker())?;
    debug!("Found {} inflection table", class);

    Some(match class {
        WordClass::Noun => noun::extract(table),
        WordClass::Adjective => adjective::extract(table, warnings),
        WordClass::Verb => verb::extract(table),
    })
}

/// First of the candidate tables whose text mentions `marker`.
pub fn find_table<'a>(doc: &'a Document, marker: &str) -> Option<ElementRef<'a>> {
    doc.find_all(&LEXEME_TABLE_SEL)
        .take(MAX_CANDIDATE_TABLES)
        .find(|table| table.text().collect::<String>().to_lowercase().contains(marker))
}

/// Case label of a row, present only on the row where a two-row case cell starts.
fn case_label(row: ElementRef<'_>) -> Option<String> {
    row.select(&CASE_LABEL_SEL).next().map(text_of)
}

/// Every comma list in the row, in column order.
fn comma_lists(row: ElementRef<'_>) -> Vec<Forms> {
    row.select(&COMMA_LIST_SEL).map(literal_forms).collect()
}

/// Plain list items only; annotated items (`class` or `title` set) are
/// non-standard or elided forms.
fn literal_forms(list: ElementRef<'_>) -> Forms {
    list.select(&LI_SEL)
        .filter(|li| attr_is_blank(*li, "class") && attr_is_blank(*li, "title"))
        .map(text_of)
        .collect()
}

fn is_comma_list(element: ElementRef<'_>) -> bool {
    element.value().name() == "ul" && element.value().classes().any(|c| c == "commaList")
}
