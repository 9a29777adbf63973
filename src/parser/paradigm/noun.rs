use scraper::ElementRef;

use super::table::{split_list, walk, Layout};
use super::{case_label, comma_lists};
use crate::entry::{ArticleForms, FormPair, Forms, NounCase, Paradigm};

const LAYOUT: Layout<String, Forms> = Layout {
    header_rows: 1,
    label: case_label,
    cells: comma_lists,
};

/// Declension by case: first pair is the bare form, second the articulated one.
pub fn extract(table: ElementRef<'_>) -> Paradigm {
    let cases = walk(table, &LAYOUT)
        .into_iter()
        .map(|group| {
            let mut pairs = split_list(&group.cells).into_iter().map(FormPair::from);
            let nearticulat = pairs.next().unwrap_or_default();
            let articulat = pairs.next().unwrap_or_default();
            NounCase {
                case: group.label,
                forms: ArticleForms {
                    nearticulat,
                    articulat,
                },
            }
        })
        .collect();

    Paradigm::Noun(cases)
}
