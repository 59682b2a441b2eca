use scraper::{ElementRef, Html, Selector};

/// Containers that usually hold the article body, in priority order
const MAIN_SELECTORS: &[&str] = &[
    "article",
    "main",
    "[role='main']",
    "[itemprop='articleBody']",
    ".post-content",
    ".entry-content",
    ".content",
    "#content",
];

/// Text-bearing elements collected from the chosen container
const CONTENT_SELECTOR: &str = "p, h1, h2, h3, h4, h5, h6, li, blockquote, pre";

/// Blocks shorter than this are treated as navigation or captions
const MIN_BLOCK_CHARS: usize = 20;

/// Elements whose text never belongs to the article
const SKIPPED_ELEMENTS: &[&str] = &[
    "head", "title", "script", "style", "noscript", "template", "nav", "header", "footer", "aside",
];

/// Extract readable article text from an HTML document
///
/// Returns an empty string when nothing readable is found.
pub fn extract_article_text(html: &str) -> String {
    let document = Html::parse_document(html);

    let Ok(content) = Selector::parse(CONTENT_SELECTOR) else {
        return String::new();
    };

    for selector_str in MAIN_SELECTORS {
        if let Ok(selector) = Selector::parse(selector_str) {
            if let Some(element) = document.select(&selector).next() {
                let text = collect_blocks(element, &content);
                if !text.trim().is_empty() {
                    return text;
                }
            }
        }
    }

    // Fall back to the whole document
    collect_blocks(document.root_element(), &content)
}

/// Join text blocks below `root`, skipping nested duplicates and short fragments
///
/// Containers without any text blocks fall back to their loose text.
fn collect_blocks(root: ElementRef<'_>, content: &Selector) -> String {
    let mut blocks: Vec<String> = Vec::new();

    for element in root.select(content) {
        // A <p> inside an <li> would otherwise be emitted twice
        if has_content_ancestor(element, root, content) {
            continue;
        }

        let text = element.text().collect::<Vec<_>>().join(" ");
        let cleaned = text.split_whitespace().collect::<Vec<_>>().join(" ");

        if cleaned.chars().count() > MIN_BLOCK_CHARS {
            blocks.push(cleaned);
        }
    }

    if blocks.is_empty() {
        return loose_text(root);
    }

    blocks.join("\n\n")
}

/// Whitespace-collapsed text below `root`, outside skipped elements
fn loose_text(root: ElementRef<'_>) -> String {
    let root_id = (*root).id();
    let words: Vec<&str> = root
        .descendants()
        .filter(|node| {
            !node
                .ancestors()
                .take_while(|ancestor| ancestor.id() != root_id)
                .filter_map(ElementRef::wrap)
                .any(|element| SKIPPED_ELEMENTS.contains(&element.value().name()))
        })
        .filter_map(|node| node.value().as_text())
        .flat_map(|text| text.split_whitespace())
        .collect();

    let text = words.join(" ");
    if text.chars().count() > MIN_BLOCK_CHARS {
        text
    } else {
        String::new()
    }
}

fn has_content_ancestor(element: ElementRef<'_>, root: ElementRef<'_>, content: &Selector) -> bool {
    let root_id = (*root).id();
    element
        .ancestors()
        .take_while(|node| node.id() != root_id)
        .filter_map(ElementRef::wrap)
        .any(|ancestor| content.matches(&ancestor))
}
