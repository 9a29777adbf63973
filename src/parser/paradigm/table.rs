use std::sync::LazyLock;

use scraper::{ElementRef, Selector};
use tracing::debug;

use crate::parser::document::selector;

static ROW_SEL: LazyLock<Selector> = LazyLock::new(|| selector("tr"));

/// How to read one inflection table: rows to skip, how a row announces a new
/// label, and which values a row contributes.
pub struct Layout<L, T> {
    pub header_rows: usize,
    pub label: fn(ElementRef<'_>) -> Option<L>,
    pub cells: fn(ElementRef<'_>) -> Vec<T>,
}

/// Values accumulated under one label, across every row that label spans.
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledRows<L, T> {
    pub label: L,
    pub cells: Vec<T>,
}

/// All rows of a table in document order.
pub fn rows<'a>(table: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> + 'a {
    table.select(&ROW_SEL)
}

/// Walk the table's rows after the headers. A label persists until the next
/// one appears, so a label cell spanning two rows collects both. Labels keep
/// first-seen order; a repeated label extends its earlier entry.
pub fn walk<L, T>(table: ElementRef<'_>, layout: &Layout<L, T>) -> Vec<LabeledRows<L, T>>
where
    L: PartialEq + Clone,
{
    let mut groups: Vec<LabeledRows<L, T>> = Vec::new();
    let mut current: Option<L> = None;

    for (i, row) in rows(table).enumerate().skip(layout.header_rows) {
        if let Some(label) = (layout.label)(row) {
            current = Some(label);
        }
        let Some(label) = current.as_ref() else {
            debug!("Skipping unlabeled row {}", i);
            continue;
        };

        let cells = (layout.cells)(row);
        match groups.iter_mut().find(|g| &g.label == label) {
            Some(group) => group.cells.extend(cells),
            None => groups.push(LabeledRows {
                label: label.clone(),
                cells,
            }),
        }
    }

    groups
}

/// Pair the first half of `items` with the second half, index by index.
/// With an odd count the last item has no partner and is dropped.
pub fn split_list<T: Clone>(items: &[T]) -> Vec<(T, T)> {
    let half = items.len() / 2;
    items[..half]
        .iter()
        .cloned()
        .zip(items[half..].iter().cloned())
        .collect()
}
