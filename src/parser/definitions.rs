use std::sync::LazyLock;

use scraper::{ElementRef, Selector};
use tracing::{debug, warn};

use super::document::{selector, text_of, Document};
use crate::entry::DefinitionBlock;

static TREE_SEL: LazyLock<Selector> = LazyLock::new(|| selector("div.tree-body ul.meaningTree"));
static CONTAINER_SEL: LazyLock<Selector> = LazyLock::new(|| selector("li.type-meaning.depth-0"));
static FRAGMENT_SEL: LazyLock<Selector> = LazyLock::new(|| selector("span.def.html"));
static ICON_SEL: LazyLock<Selector> = LazyLock::new(|| selector("span.material-icons.meaning-icon"));

const COLLOQUIAL_ICON: &str = "chat_bubble";

/// Group the definition tree into (definition, examples) blocks in document order.
///
/// Examples attach to the nearest preceding definition, across container
/// boundaries. Examples seen before any definition has started are dropped.
pub fn extract(doc: &Document) -> Vec<DefinitionBlock> {
    let Some(tree) = doc.find_first(&TREE_SEL) else {
        warn!("No definition tree on page");
        return Vec::new();
    };

    let mut definitions = Vec::new();
    let mut current: Option<DefinitionBlock> = None;

    for container in tree.select(&CONTAINER_SEL) {
        for fragment in container.select(&FRAGMENT_SEL) {
            let text = text_of(fragment);

            if is_definition_fragment(fragment) {
                if let Some(done) = current.take().filter(|d| !d.text.is_empty()) {
                    definitions.push(done);
                }
                current = Some(DefinitionBlock {
                    text,
                    examples: Vec::new(),
                });
            } else if let Some(block) = current.as_mut() {
                block.examples.push(text);
            } else {
                debug!("Dropping example before first definition: {}", text);
            }
        }
    }

    if let Some(done) = current.filter(|d| !d.text.is_empty()) {
        definitions.push(done);
    }

    debug!("Extracted {} definitions", definitions.len());
    definitions
}

/// Definitions are plain text (nested `span`s allowed) or carry the colloquial
/// marker; examples embed emphasis or reference markup.
pub fn is_definition_fragment(fragment: ElementRef<'_>) -> bool {
    if is_colloquial(fragment) {
        return true;
    }
    !fragment
        .descendants()
        .skip(1)
        .filter_map(ElementRef::wrap)
        .any(|e| e.value().name() != "span")
}

fn is_colloquial(fragment: ElementRef<'_>) -> bool {
    fragment
        .parent()
        .and_then(ElementRef::wrap)
        .and_then(|parent| parent.select(&ICON_SEL).next())
        .is_some_and(|icon| text_of(icon) == COLLOQUIAL_ICON)
}

// ── Tests ──
