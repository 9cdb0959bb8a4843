//! Readability extraction: HTML to simplified markdown.
//!
//! Best-effort conversion of a fetched HTML page into readable prose.
//! A small list of candidate selectors locates the main content block
//! (article/main/body), whose subtree is then rendered as markdown with
//! ATX-style headings. Not meant to survive adversarial markup.

use scraper::{ElementRef, Html, Node, Selector};

/// Tags whose entire subtree is ignored.
const SKIP_TAGS: &[&str] = &[
    "script", "style", "noscript", "svg", "nav", "form", "iframe", "head",
];

/// Candidate selectors for the main content block, in preference order.
/// `body` is the fallback; if even that yields no text, extraction fails.
const CONTENT_SELECTORS: &[&str] = &[
    "article",
    "main",
    "[role=\"main\"]",
    "#content",
    "#main",
    "body",
];

/// Extract the main content of an HTML page as simplified markdown.
///
/// Returns `None` when no candidate block yields any readable text,
/// letting the caller fall back to the raw body with a note.
pub fn extract_article(html: &str) -> Option<String> {
    let document = Html::parse_document(html);

    for candidate in CONTENT_SELECTORS {
        let Ok(selector) = Selector::parse(candidate) else {
            continue;
        };
        if let Some(root) = document.select(&selector).next() {
            let markdown = render_markdown(root);
            if !markdown.is_empty() {
                return Some(markdown);
            }
        }
    }

    None
}

/// Render an element subtree as markdown.
fn render_markdown(root: ElementRef) -> String {
    let mut out = String::new();
    render_children(root, &mut out);
    normalize_blank_lines(&out)
}

/// Walk child nodes, emitting text and delegating elements.
fn render_children(element: ElementRef, out: &mut String) {
    for child in element.children() {
        match child.value() {
            Node::Text(text) => {
                let t = collapse_whitespace(text);
                if !t.is_empty() {
                    push_inline(out, &t);
                }
            }
            Node::Element(_) => {
                if let Some(child_el) = ElementRef::wrap(child) {
                    render_element(child_el, out);
                }
            }
            _ => {}
        }
    }
}

fn render_element(element: ElementRef, out: &mut String) {
    let name = element.value().name();
    if SKIP_TAGS.contains(&name) {
        return;
    }

    match name {
        "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => {
            let level = name[1..].parse::<usize>().unwrap_or(1);
            let text = inline_text(element);
            if !text.is_empty() {
                end_block(out);
                out.push_str(&"#".repeat(level));
                out.push(' ');
                out.push_str(&text);
                end_block(out);
            }
        }
        "p" => {
            end_block(out);
            render_children(element, out);
            end_block(out);
        }
        "ul" => {
            end_block(out);
            render_list(element, out, false);
            end_block(out);
        }
        "ol" => {
            end_block(out);
            render_list(element, out, true);
            end_block(out);
        }
        "a" => {
            let text = inline_text(element);
            match element.value().attr("href") {
                Some(href) if !text.is_empty() => {
                    push_inline(out, &format!("[{}]({})", text, href));
                }
                _ => push_inline(out, &text),
            }
        }
        "strong" | "b" => {
            let text = inline_text(element);
            if !text.is_empty() {
                push_inline(out, &format!("**{}**", text));
            }
        }
        "em" | "i" => {
            let text = inline_text(element);
            if !text.is_empty() {
                push_inline(out, &format!("*{}*", text));
            }
        }
        "code" => {
            let text = inline_text(element);
            if !text.is_empty() {
                push_inline(out, &format!("`{}`", text));
            }
        }
        "pre" => {
            end_block(out);
            let raw: String = element.text().collect();
            out.push_str("```\n");
            out.push_str(raw.trim_end());
            out.push_str("\n```");
            end_block(out);
        }
        "blockquote" => {
            end_block(out);
            let text = inline_text(element);
            if !text.is_empty() {
                out.push_str("> ");
                out.push_str(&text);
            }
            end_block(out);
        }
        "br" => out.push('\n'),
        "hr" => {
            end_block(out);
            out.push_str("---");
            end_block(out);
        }
        // Transparent containers (div, section, span, table cells, ...)
        _ => render_children(element, out),
    }
}

/// Render `li` children of a list element, one line per item.
fn render_list(element: ElementRef, out: &mut String, ordered: bool) {
    let mut index = 1;
    for child in element.children() {
        let Some(item) = ElementRef::wrap(child) else {
            continue;
        };
        if item.value().name() != "li" {
            continue;
        }
        let text = inline_text(item);
        if text.is_empty() {
            continue;
        }
        if ordered {
            out.push_str(&format!("{}. {}\n", index, text));
            index += 1;
        } else {
            out.push_str(&format!("- {}\n", text));
        }
    }
}

/// Collect the text of an element's subtree, skipping ignored tags.
fn inline_text(element: ElementRef) -> String {
    let mut parts = Vec::new();
    collect_text(element, &mut parts);
    parts.join(" ")
}

fn collect_text(element: ElementRef, parts: &mut Vec<String>) {
    if SKIP_TAGS.contains(&element.value().name()) {
        return;
    }
    for child in element.children() {
        match child.value() {
            Node::Text(text) => {
                let t = text.trim();
                if !t.is_empty() {
                    parts.push(collapse_whitespace(t));
                }
            }
            Node::Element(_) => {
                if let Some(child_el) = ElementRef::wrap(child) {
                    collect_text(child_el, parts);
                }
            }
            _ => {}
        }
    }
}

/// Append inline content, inserting a separating space when needed.
fn push_inline(out: &mut String, text: &str) {
    if !out.is_empty() && !out.ends_with(char::is_whitespace) {
        out.push(' ');
    }
    out.push_str(text);
}

/// Close the current block with exactly one blank line.
fn end_block(out: &mut String) {
    while out.ends_with(' ') || out.ends_with('\t') {
        out.pop();
    }
    if out.is_empty() {
        return;
    }
    while out.ends_with('\n') {
        out.pop();
    }
    out.push_str("\n\n");
}

/// Collapse runs of whitespace into single spaces.
fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Limit consecutive newlines to two and trim the edges.
fn normalize_blank_lines(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut newline_count = 0;

    for ch in text.chars() {
        if ch == '\n' {
            newline_count += 1;
            if newline_count <= 2 {
                result.push('\n');
            }
        } else {
            newline_count = 0;
            result.push(ch);
        }
    }

    result.trim().to_string()
}
