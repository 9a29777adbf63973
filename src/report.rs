use std::fmt::{self, Write};

use crate::entry::{ArticleForms, Entry, FormPair, Paradigm, Person, VerbParadigm};

const CASES: [&str; 3] = ["nominativ-acuzativ", "genitiv-dativ", "vocativ"];
const CASE_HEADERS: [&str; 3] = ["Nominativ-Acuzativ", "Genitiv-Dativ", "Vocativ"];
const TENSE_HEADERS: [&str; 6] = [
    "Persoana",
    "Prezent",
    "Conjunctiv Prezent",
    "Imperfect",
    "Perfect Simplu",
    "Mai Mult Ca Perfect",
];

/// Text report of an entry: the first `max_definitions` definitions with their
/// examples, then the paradigm as a table.
pub struct Report<'a> {
    entry: &'a Entry,
    max_definitions: usize,
}

impl<'a> Report<'a> {
    pub fn new(entry: &'a Entry, max_definitions: usize) -> Self {
        Self {
            entry,
            max_definitions,
        }
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let entry = self.entry;
        writeln!(f, "{}: {}", entry.lemma, entry.word_class)?;

        for definition in entry.definitions.iter().take(self.max_definitions) {
            writeln!(f, "Definition: {}", definition.text)?;
            writeln!(f, "Examples:")?;
            if definition.examples.is_empty() {
                writeln!(f, "None available")?;
            }
            for example in &definition.examples {
                writeln!(f, "-{}", example)?;
            }
            writeln!(f)?;
        }

        if entry.inflection.is_empty() {
            return writeln!(f, "Inflection: none available");
        }
        match &entry.inflection {
            Paradigm::Noun(_) => write_noun(f, &entry.inflection),
            Paradigm::Adjective(_) => write_adjective(f, &entry.inflection),
            Paradigm::Verb(verb) => write_verb(f, verb),
        }
    }
}

fn row(f: &mut impl Write, cells: &[impl AsRef<str>], width: usize, sep: &str) -> fmt::Result {
    let padded: Vec<String> = cells
        .iter()
        .map(|c| format!("{:^w$}", c.as_ref(), w = width))
        .collect();
    writeln!(f, "{}", padded.join(sep))
}

fn width_of<'s>(cells: impl IntoIterator<Item = &'s String>, min: usize) -> usize {
    cells.into_iter().map(|c| c.chars().count()).fold(min, usize::max)
}

fn by_case(pick: impl Fn(&str) -> FormPair) -> [String; 3] {
    CASES.map(|case| pick(case).to_string())
}

fn write_noun(f: &mut impl Write, paradigm: &Paradigm) -> fmt::Result {
    let forms = |case: &str| paradigm.noun_case(case).cloned().unwrap_or_default();
    let blocks = [
        ("Nearticulat", by_case(|c| forms(c).nearticulat)),
        ("Articulat", by_case(|c| forms(c).articulat)),
    ];
    let width = width_of(blocks.iter().flat_map(|(_, cells)| cells), CASES[0].len());

    writeln!(f, "Inflection:")?;
    row(f, &CASE_HEADERS, width, " ║ ")?;
    writeln!(f, "{}", "=".repeat(width * 3 + 6))?;
    for (title, cells) in &blocks {
        row(f, &[title; 3], width, " ║ ")?;
        row(f, cells, width, " ║ ")?;
        row(f, &[""; 3], width, " ║ ")?;
    }
    Ok(())
}

fn write_adjective(f: &mut impl Write, paradigm: &Paradigm) -> fmt::Result {
    let gender = |case: &str, feminine: bool| -> ArticleForms {
        paradigm
            .adjective_case(case)
            .map(|c| if feminine { c.feminine.clone() } else { c.masculine.clone() })
            .unwrap_or_default()
    };
    let blocks = [("Masculine", false), ("Feminine", true)].map(|(title, feminine)| {
        (
            title,
            by_case(|c| gender(c, feminine).nearticulat),
            by_case(|c| gender(c, feminine).articulat),
        )
    });
    let width = width_of(
        blocks.iter().flat_map(|(_, bare, articulated)| bare.iter().chain(articulated)),
        CASES[0].len(),
    );

    writeln!(f, "Inflection:")?;
    row(f, &CASE_HEADERS, width, " ║ ")?;
    for (title, bare, articulated) in &blocks {
        writeln!(f, "{}", "=".repeat(width * 3 + 6))?;
        row(f, &[title; 3], width, " ║ ")?;
        for (label, cells) in [("Nearticulat:", bare), ("Articulat:", articulated)] {
            row(f, &[""; 3], width, " ║ ")?;
            row(f, &[label; 3], width, " ║ ")?;
            row(f, cells, width, " ║ ")?;
        }
    }
    Ok(())
}

fn write_verb(f: &mut impl Write, verb: &VerbParadigm) -> fmt::Result {
    let width = width_of(verb.persons.values().flatten(), "mai mult ca perfect".len());
    let rule = width * TENSE_HEADERS.len() + 3 * (TENSE_HEADERS.len() - 1);

    writeln!(f, "Inflection:")?;
    writeln!(f, "  Infinitiv: {}", verb.infinitiv)?;
    writeln!(f, "  Infinitiv lung: {}", verb.infinitiv_lung)?;
    writeln!(f, "  Participiu: {}", verb.participiu)?;
    writeln!(f, "  Gerunziu: {}", verb.gerunziu)?;
    writeln!(f)?;

    writeln!(f, "Conjugation:")?;
    row(f, &TENSE_HEADERS, width, " ║ ")?;
    writeln!(f, "{}", "=".repeat(rule))?;

    for person in Person::ALL {
        let forms = verb.persons.get(&person).map(Vec::as_slice).unwrap_or_default();
        let cells: Vec<&str> = std::iter::once(person.label())
            .chain((0..TENSE_HEADERS.len() - 1).map(|i| forms.get(i).map_or("-", String::as_str)))
            .collect();
        row(f, &cells, width, " | ")?;
        writeln!(f, "{}", "-".repeat(rule))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::{AdjectiveCase, DefinitionBlock, NounCase};

    fn entry(definitions: usize, inflection: Paradigm) -> Entry {
        Entry {
            lemma: "cățel".into(),
            word_class: "substantiv masculin".into(),
            definitions: (0..definitions)
                .map(|i| DefinitionBlock {
                    text: format!("Sens {}", i + 1),
                    examples: if i == 0 { vec!["Un cățel.".into()] } else { Vec::new() },
                })
                .collect(),
            inflection,
            warnings: Vec::new(),
        }
    }

    #[test]
    fn definitions_are_capped() {
        let out = Report::new(&entry(6, Paradigm::Noun(Vec::new())), 4).to_string();
        assert!(out.starts_with("cățel: substantiv masculin\n"));
        assert_eq!(out.matches("Definition:").count(), 4);
        assert!(out.contains("-Un cățel."));
        assert!(out.contains("None available"));
        assert!(out.contains("Inflection: none available"));
    }

    #[test]
    fn noun_table_lists_forms() {
        let paradigm = Paradigm::Noun(vec![NounCase {
            case: "nominativ-acuzativ".into(),
            forms: ArticleForms {
                nearticulat: FormPair::new(["cățel"], ["căței"]),
                articulat: FormPair::new(["cățelul"], ["cățeii"]),
            },
        }]);
        let out = Report::new(&entry(1, paradigm), 4).to_string();
        assert!(out.contains("Nominativ-Acuzativ"));
        assert!(out.contains("cățel / căței"));
        assert!(out.contains("cățelul / cățeii"));
    }

    #[test]
    fn adjective_table_has_both_genders() {
        let paradigm = Paradigm::Adjective(vec![AdjectiveCase {
            case: "nominativ-acuzativ".into(),
            masculine: ArticleForms {
                nearticulat: FormPair::new(["nou"], ["noi"]),
                articulat: FormPair::new(["noul"], ["noii"]),
            },
            feminine: ArticleForms {
                nearticulat: FormPair::new(["nouă"], ["noi"]),
                articulat: FormPair::new(["noua"], ["noile"]),
            },
        }]);
        let out = Report::new(&entry(0, paradigm), 4).to_string();
        assert!(out.contains("Masculine"));
        assert!(out.contains("Feminine"));
        assert!(out.contains("noua / noile"));
    }

    #[test]
    fn verb_table_has_every_person() {
        let mut verb = VerbParadigm {
            infinitiv: "a fi".into(),
            ..Default::default()
        };
        verb.persons.insert(
            Person::FirstSingular,
            ["sunt", "să fiu", "eram", "fui", "fusesem"].map(String::from).to_vec(),
        );
        let out = Report::new(&entry(0, Paradigm::Verb(verb)), 4).to_string();
        assert!(out.contains("Infinitiv: a fi"));
        assert!(out.contains("Mai Mult Ca Perfect"));
        for person in Person::ALL {
            assert!(out.contains(person.label()));
        }
        assert!(out.contains("fusesem"));
    }
}
