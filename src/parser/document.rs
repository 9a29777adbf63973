use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Html, Selector};

static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Compile a selector known at build time.
pub fn selector(css: &str) -> Selector {
    Selector::parse(css).unwrap_or_else(|e| panic!("invalid selector {css:?}: {e:?}"))
}

/// Parsed dictionary page.
pub struct Document {
    html: Html,
}

impl Document {
    /// Parse a page. Returns `None` when there is nothing to parse.
    pub fn parse(source: &str) -> Option<Self> {
        if source.trim().is_empty() {
            return None;
        }
        Some(Self {
            html: Html::parse_document(source),
        })
    }

    pub fn find_first(&self, selector: &Selector) -> Option<ElementRef<'_>> {
        self.html.select(selector).next()
    }

    pub fn find_all<'a>(&'a self, selector: &'a Selector) -> impl Iterator<Item = ElementRef<'a>> + 'a {
        self.html.select(selector)
    }
}

/// Visible text of a node with whitespace runs collapsed.
pub fn text_of(element: ElementRef<'_>) -> String {
    normalize(&element.text().collect::<String>())
}

pub fn normalize(text: &str) -> String {
    WHITESPACE_RE.replace_all(text.trim(), " ").into_owned()
}

/// True when the attribute is missing or blank (`class=""` counts as absent).
pub fn attr_is_blank(element: ElementRef<'_>, name: &str) -> bool {
    element.value().attr(name).map_or(true, |v| v.trim().is_empty())
}
