use std::collections::BTreeMap;
use std::fmt;

use serde::{Serialize, Serializer};

use crate::error::ExtractWarning;

/// A looked-up dictionary entry, assembled once per lookup.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Entry {
    pub lemma: String,
    pub word_class: String,
    pub definitions: Vec<DefinitionBlock>,
    pub inflection: Paradigm,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<ExtractWarning>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DefinitionBlock {
    pub text: String,
    pub examples: Vec<String>,
}

/// Literal word forms listed in one table cell (variants for the same slot).
pub type Forms = Vec<String>;

/// Primary/secondary forms of one slot, e.g. (singular, plural).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormPair {
    #[default]
    Empty,
    Pair(Forms, Forms),
}

impl FormPair {
    #[cfg(test)]
    pub fn new<A, B>(primary: A, secondary: B) -> Self
    where
        A: IntoIterator,
        A::Item: Into<String>,
        B: IntoIterator,
        B::Item: Into<String>,
    {
        FormPair::Pair(
            primary.into_iter().map(Into::into).collect(),
            secondary.into_iter().map(Into::into).collect(),
        )
    }
}

impl From<(Forms, Forms)> for FormPair {
    fn from((primary, secondary): (Forms, Forms)) -> Self {
        FormPair::Pair(primary, secondary)
    }
}

// Serialized as a 2-element array, or [] when absent.
impl Serialize for FormPair {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            FormPair::Empty => serializer.collect_seq(std::iter::empty::<&Forms>()),
            FormPair::Pair(primary, secondary) => serializer.collect_seq([primary, secondary]),
        }
    }
}

impl fmt::Display for FormPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormPair::Empty => write!(f, "-"),
            FormPair::Pair(primary, secondary) => {
                write!(f, "{} / {}", primary.join(", "), secondary.join(", "))
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ArticleForms {
    pub nearticulat: FormPair,
    pub articulat: FormPair,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NounCase {
    pub case: String,
    #[serde(flatten)]
    pub forms: ArticleForms,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdjectiveCase {
    pub case: String,
    pub masculine: ArticleForms,
    pub feminine: ArticleForms,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Person {
    #[serde(rename = "first singular")]
    FirstSingular,
    #[serde(rename = "second singular")]
    SecondSingular,
    #[serde(rename = "third singular")]
    ThirdSingular,
    #[serde(rename = "first plural")]
    FirstPlural,
    #[serde(rename = "second plural")]
    SecondPlural,
    #[serde(rename = "third plural")]
    ThirdPlural,
}

impl Person {
    pub const ALL: [Person; 6] = [
        Person::FirstSingular,
        Person::SecondSingular,
        Person::ThirdSingular,
        Person::FirstPlural,
        Person::SecondPlural,
        Person::ThirdPlural,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Person::FirstSingular => "first singular",
            Person::SecondSingular => "second singular",
            Person::ThirdSingular => "third singular",
            Person::FirstPlural => "first plural",
            Person::SecondPlural => "second plural",
            Person::ThirdPlural => "third plural",
        }
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Conjugation: non-finite forms plus five tense forms per person
/// (present, present subjunctive, imperfect, simple perfect, pluperfect).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VerbParadigm {
    pub infinitiv: String,
    pub infinitiv_lung: String,
    pub participiu: String,
    pub gerunziu: String,
    pub persons: BTreeMap<Person, Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Paradigm {
    Noun(Vec<NounCase>),
    Adjective(Vec<AdjectiveCase>),
    Verb(VerbParadigm),
}

impl Paradigm {
    pub fn is_empty(&self) -> bool {
        match self {
            Paradigm::Noun(cases) => cases.is_empty(),
            Paradigm::Adjective(cases) => cases.is_empty(),
            Paradigm::Verb(verb) => verb.persons.is_empty() && verb.infinitiv.is_empty(),
        }
    }

    pub fn noun_case(&self, case: &str) -> Option<&ArticleForms> {
        match self {
            Paradigm::Noun(cases) => cases.iter().find(|c| c.case == case).map(|c| &c.forms),
            _ => None,
        }
    }

    pub fn adjective_case(&self, case: &str) -> Option<&AdjectiveCase> {
        match self {
            Paradigm::Adjective(cases) => cases.iter().find(|c| c.case == case),
            _ => None,
        }
    }

    #[cfg(test)]
    pub fn as_verb(&self) -> Option<&VerbParadigm> {
        match self {
            Paradigm::Verb(verb) => Some(verb),
            _ => None,
        }
    }
}

/// Word classes with an inflection strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WordClass {
    Noun,
    Adjective,
    Verb,
}

impl WordClass {
    /// Dispatch on the classification label: any "substantiv ..." is a noun,
    /// adjectives and verbs must match exactly.
    pub fn from_label(label: &str) -> Option<WordClass> {
        if label.contains("substantiv") {
            Some(WordClass::Noun)
        } else if label == "adjectiv" {
            Some(WordClass::Adjective)
        } else if label == "verb" {
            Some(WordClass::Verb)
        } else {
            None
        }
    }

    /// Text that identifies this class's inflection table.
    pub fn table_marker(self) -> &'static str {
        match self {
            WordClass::Noun => "substantiv",
            WordClass::Adjective => "adjectiv",
            WordClass::Verb => "verb",
        }
    }

    pub fn empty_paradigm(self) -> Paradigm {
        match self {
            WordClass::Noun => Paradigm::Noun(Vec::new()),
            WordClass::Adjective => Paradigm::Adjective(Vec::new()),
            WordClass::Verb => Paradigm::Verb(VerbParadigm::default()),
        }
    }
}

impl fmt::Display for WordClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WordClass::Noun => write!(f, "noun"),
            WordClass::Adjective => write!(f, "adjective"),
            WordClass::Verb => write!(f, "verb"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_class_dispatch() {
        assert_eq!(WordClass::from_label("substantiv masculin"), Some(WordClass::Noun));
        assert_eq!(WordClass::from_label("substantiv feminin"), Some(WordClass::Noun));
        assert_eq!(WordClass::from_label("adjectiv"), Some(WordClass::Adjective));
        assert_eq!(WordClass::from_label("verb"), Some(WordClass::Verb));
        assert_eq!(WordClass::from_label("verb tranzitiv"), None);
        assert_eq!(WordClass::from_label("interjecție"), None);
    }

    #[test]
    fn form_pair_json() {
        let pair = FormPair::new(["cățel"], ["căței"]);
        assert_eq!(serde_json::to_string(&pair).unwrap(), r#"[["cățel"],["căței"]]"#);
        assert_eq!(serde_json::to_string(&FormPair::Empty).unwrap(), "[]");
    }

    #[test]
    fn person_keys_serialize_as_labels() {
        let mut verb = VerbParadigm::default();
        verb.persons.insert(Person::FirstSingular, vec!["sunt".into()]);
        let json = serde_json::to_value(&verb).unwrap();
        assert_eq!(json["persons"]["first singular"][0], "sunt");
    }

    #[test]
    fn form_pair_display() {
        let pair = FormPair::new(["cățelule", "cățele"], ["cățeilor"]);
        assert_eq!(pair.to_string(), "cățelule, cățele / cățeilor");
        assert_eq!(FormPair::Empty.to_string(), "-");
    }
}
