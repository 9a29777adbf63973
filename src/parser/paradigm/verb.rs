use std::collections::BTreeMap;
use std::sync::LazyLock;

use scraper::{ElementRef, Selector};
use tracing::{debug, warn};

use super::table::rows;
use super::{is_comma_list, literal_forms, COMMA_LIST_SEL};
use crate::entry::{Paradigm, Person, VerbParadigm};
use crate::parser::document::{normalize, selector, text_of};

static PERSON_SEL: LazyLock<Selector> = LazyLock::new(|| selector("td.inflection.person"));
static FORM_CELL_SEL: LazyLock<Selector> = LazyLock::new(|| selector("td.form"));

// Row 0 holds headers, row 1 the non-finite forms, rows 2-4 mood and
// auxiliary information; one row per person follows.
const NON_FINITE_ROW: usize = 1;
const FIRST_PERSON_ROW: usize = 5;

/// Conjugation: infinitive, long infinitive, participle and gerund, then the
/// tense forms of each person in column order. A person label applies to its
/// own row only; when two rows name the same person the later one wins.
pub fn extract(table: ElementRef<'_>) -> Paradigm {
    let non_finite = rows(table)
        .nth(NON_FINITE_ROW)
        .map(form_cells)
        .unwrap_or_default();
    if non_finite.len() < 4 {
        warn!("Verb table has {} non-finite forms, expected 4", non_finite.len());
    }
    let slot = |i: usize| non_finite.get(i).cloned().unwrap_or_default();

    let mut persons = BTreeMap::new();
    for (i, row) in rows(table).enumerate().skip(FIRST_PERSON_ROW) {
        let Some(person) = person_of_row(row) else {
            debug!("Skipping verb row {} without a person", i);
            continue;
        };
        if persons.insert(person, form_cells(row)).is_some() {
            warn!("Verb table repeats {} at row {}, keeping the later row", person, i);
        }
    }

    Paradigm::Verb(VerbParadigm {
        infinitiv: slot(0),
        infinitiv_lung: slot(1),
        participiu: slot(2),
        gerunziu: slot(3),
        persons,
    })
}

/// Map a person label ("I (eu)", "a III-a (el, ea)", ...) to its key by the
/// pronoun it mentions; a label naming none of them is third plural.
pub fn person_from_label(label: &str) -> Person {
    if label.contains("eu") {
        Person::FirstSingular
    } else if label.contains("tu") {
        Person::SecondSingular
    } else if label.contains("ea") {
        Person::ThirdSingular
    } else if label.contains("noi") {
        Person::FirstPlural
    } else if label.contains("voi") {
        Person::SecondPlural
    } else {
        Person::ThirdPlural
    }
}

fn person_of_row(row: ElementRef<'_>) -> Option<Person> {
    row.select(&PERSON_SEL)
        .next()
        .map(|cell| person_from_label(&text_of(cell)))
}

fn form_cells(row: ElementRef<'_>) -> Vec<String> {
    row.select(&FORM_CELL_SEL).map(display_form).collect()
}

/// Leading article text (e.g. "a", "să") followed by the first literal form.
fn display_form(cell: ElementRef<'_>) -> String {
    let article = leading_text(cell);
    let form = cell
        .select(&COMMA_LIST_SEL)
        .next()
        .and_then(|list| literal_forms(list).into_iter().next())
        .unwrap_or_default();

    match (article.is_empty(), form.is_empty()) {
        (true, _) => form,
        (false, true) => article,
        (false, false) => format!("{} {}", article, form),
    }
}

/// Text of the cell that precedes its comma list, including text inside any
/// element that wraps the list.
fn leading_text(cell: ElementRef<'_>) -> String {
    let mut text = String::new();
    text_until_list(cell, &mut text);
    normalize(&text)
}

/// Append text in document order up to the first comma list. Returns true
/// once the list is reached.
fn text_until_list(element: ElementRef<'_>, text: &mut String) -> bool {
    for child in element.children() {
        if let Some(child) = ElementRef::wrap(child) {
            if is_comma_list(child) || text_until_list(child, text) {
                return true;
            }
        } else if let Some(t) = child.value().as_text() {
            text.push_str(t);
        }
    }
    false
}
