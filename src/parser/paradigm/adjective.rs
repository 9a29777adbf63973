use scraper::ElementRef;
use tracing::warn;

use super::table::{split_list, walk, Layout};
use super::{case_label, comma_lists};
use crate::entry::{AdjectiveCase, ArticleForms, FormPair, Forms, Paradigm};
use crate::error::ExtractWarning;

// Adjective tables carry an extra gender header row.
const LAYOUT: Layout<String, Forms> = Layout {
    header_rows: 2,
    label: case_label,
    cells: comma_lists,
};

/// Declension by case and gender. A full case yields four pairs: masculine
/// bare/articulated, then feminine bare/articulated. A case with merged
/// gender cells (usually the vocative) yields one bare pair per gender.
/// Cases fitting neither layout get empty forms and a warning.
pub fn extract(table: ElementRef<'_>, warnings: &mut Vec<ExtractWarning>) -> Paradigm {
    let cases = walk(table, &LAYOUT)
        .into_iter()
        .map(|group| {
            let pairs: Vec<FormPair> = split_list(&group.cells)
                .into_iter()
                .map(FormPair::from)
                .collect();
            gendered(group.label.clone(), pairs).unwrap_or_else(|warning| {
                warn!("{}", warning);
                warnings.push(warning);
                AdjectiveCase {
                    case: group.label,
                    masculine: ArticleForms::default(),
                    feminine: ArticleForms::default(),
                }
            })
        })
        .collect();

    Paradigm::Adjective(cases)
}

fn gendered(case: String, pairs: Vec<FormPair>) -> Result<AdjectiveCase, ExtractWarning> {
    let count = pairs.len();
    let mut pairs = pairs.into_iter();
    let mut next = || pairs.next().unwrap_or_default();

    let (masculine, feminine) = match count {
        4 => (
            ArticleForms {
                nearticulat: next(),
                articulat: next(),
            },
            ArticleForms {
                nearticulat: next(),
                articulat: next(),
            },
        ),
        2 => (
            ArticleForms {
                nearticulat: next(),
                ..Default::default()
            },
            ArticleForms {
                nearticulat: next(),
                ..Default::default()
            },
        ),
        0 => Default::default(),
        n => return Err(ExtractWarning::MalformedTable { case, pairs: n }),
    };

    Ok(AdjectiveCase {
        case,
        masculine,
        feminine,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::document::{selector, Document};

    fn forms(list: &[&str]) -> Forms {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn four_pairs_split_by_gender() {
        let pairs: Vec<FormPair> = split_list(&[
            forms(&["frumos"]),
            forms(&["frumosul"]),
            forms(&["frumoasă"]),
            forms(&["frumoasa"]),
            forms(&["frumoși"]),
            forms(&["frumoșii"]),
            forms(&["frumoase"]),
            forms(&["frumoasele"]),
        ])
        .into_iter()
        .map(FormPair::from)
        .collect();
        assert_eq!(pairs.len(), 4);

        let case = gendered("nominativ-acuzativ".into(), pairs.clone()).unwrap();
        assert_eq!(case.masculine.nearticulat, pairs[0]);
        assert_eq!(case.masculine.articulat, pairs[1]);
        assert_eq!(case.feminine.nearticulat, pairs[2]);
        assert_eq!(case.feminine.articulat, pairs[3]);
        assert_eq!(case.masculine.nearticulat, FormPair::new(["frumos"], ["frumoși"]));
        assert_eq!(case.feminine.articulat, FormPair::new(["frumoasa"], ["frumoasele"]));
    }

    #[test]
    fn merged_gender_cells_give_bare_forms() {
        let pairs = vec![
            FormPair::new(["frumosule"], ["frumoșilor"]),
            FormPair::new(["frumoaso"], ["frumoaselor"]),
        ];
        let case = gendered("vocativ".into(), pairs).unwrap();
        assert_eq!(case.masculine.nearticulat, FormPair::new(["frumosule"], ["frumoșilor"]));
        assert_eq!(case.masculine.articulat, FormPair::Empty);
        assert_eq!(case.feminine.nearticulat, FormPair::new(["frumoaso"], ["frumoaselor"]));
        assert_eq!(case.feminine.articulat, FormPair::Empty);
    }

    #[test]
    fn odd_pair_count_is_a_warning() {
        let pairs = vec![
            FormPair::new(["a"], ["b"]),
            FormPair::new(["c"], ["d"]),
            FormPair::new(["e"], ["f"]),
        ];
        let warning = gendered("vocativ".into(), pairs).unwrap_err();
        assert_eq!(
            warning,
            ExtractWarning::MalformedTable {
                case: "vocativ".into(),
                pairs: 3
            }
        );
    }

    #[test]
    fn no_pairs_gives_empty_forms() {
        let case = gendered("vocativ".into(), Vec::new()).unwrap();
        assert_eq!(case.masculine, ArticleForms::default());
        assert_eq!(case.feminine, ArticleForms::default());
    }

    #[test]
    fn header_rows_are_skipped() {
        let html = r#"<table class="lexeme">
            <tr><td colspan="2" rowspan="2">adjectiv</td><td colspan="2">masculin</td><td colspan="2">feminin</td></tr>
            <tr><td>nearticulat</td><td>articulat</td><td>nearticulat</td><td>articulat</td></tr>
            <tr><td rowspan="2" class="inflection">nominativ-acuzativ</td><td>singular</td>
                <td><ul class="commaList"><li>nou</li></ul></td><td><ul class="commaList"><li>noul</li></ul></td>
                <td><ul class="commaList"><li>nouă</li></ul></td><td><ul class="commaList"><li>noua</li></ul></td></tr>
            <tr><td>plural</td>
                <td><ul class="commaList"><li>noi</li></ul></td><td><ul class="commaList"><li>noii</li></ul></td>
                <td><ul class="commaList"><li>noi</li></ul></td><td><ul class="commaList"><li>noile</li></ul></td></tr>
        </table>"#;
        let doc = Document::parse(html).unwrap();
        let mut warnings = Vec::new();
        let paradigm = extract(doc.find_first(&selector("table")).unwrap(), &mut warnings);
        assert!(warnings.is_empty());
        let case = paradigm.adjective_case("nominativ-acuzativ").unwrap();
        assert_eq!(case.masculine.articulat, FormPair::new(["noul"], ["noii"]));
        assert_eq!(case.feminine.nearticulat, FormPair::new(["nouă"], ["noi"]));
    }
}
