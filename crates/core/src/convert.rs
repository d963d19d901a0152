//! Structural HTML to Markdown conversion.
//!
//! This module converts the article content container into Markdown with a
//! single read-only walk over the parsed tree, dispatching on node kind:
//! code blocks become fenced blocks, headings become hash lines, list items
//! become bullet or numbered lines, links become inline links, and every
//! other element contributes its text with a line break at each block
//! boundary. The source tree is never mutated.

use regex::Regex;
use scraper::{ElementRef, Node};

/// Renders the content container to Markdown.
///
/// Walks the children of `root` once, then trims the result and collapses
/// every run of blank lines down to a single blank line.
pub fn render_content(root: ElementRef<'_>) -> String {
    let mut out = String::new();
    render_children(root, &mut out);
    collapse_blank_lines(&out)
}

fn render_children(el: ElementRef<'_>, out: &mut String) {
    for child in el.children() {
        match child.value() {
            Node::Text(text) => {
                let trimmed = text.trim();
                if !trimmed.is_empty() {
                    out.push_str(trimmed);
                    out.push('\n');
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

fn render_element(el: ElementRef<'_>, out: &mut String) {
    match el.value().name() {
        // Dropped outright, no textual residue.
        "script" | "style" | "svg" => {}
        "pre" => render_code_block(el, out),
        name @ ("h1" | "h2" | "h3" | "h4" | "h5" | "h6") => {
            let level = (name.as_bytes()[1] - b'0') as usize;
            out.push_str(&format!("\n{} {}\n", "#".repeat(level), collect_text(el)));
            out.push('\n');
        }
        name @ ("ul" | "ol") => render_list(el, name == "ol", out),
        "a" => render_link(el, out),
        _ => render_children(el, out),
    }
}

/// Emits a fenced code block with an optional language tag.
///
/// The language hint is the first class token of the first `code` element
/// inside the block that carries a class, with the `language-` prefix
/// stripped. Code text is taken verbatim (trimmed at the ends only).
fn render_code_block(el: ElementRef<'_>, out: &mut String) {
    let code = el.text().collect::<String>();
    let language = code_language(el).unwrap_or_default();

    out.push_str(&format!("\n```{}\n{}\n```\n", language, code.trim()));
    out.push('\n');
}

fn code_language(pre: ElementRef<'_>) -> Option<String> {
    for node in pre.descendants() {
        if let Some(el) = ElementRef::wrap(node)
            && el.value().name() == "code"
            && let Some(class) = el.value().attr("class")
            && let Some(token) = class.split_whitespace().next()
        {
            return Some(token.replace("language-", ""));
        }
    }
    None
}

/// Emits one line per direct `li` child: `* item` for unordered lists,
/// `n. item` with 1-based per-list numbering for ordered lists.
fn render_list(el: ElementRef<'_>, ordered: bool, out: &mut String) {
    let mut index = 0usize;
    for child in el.children() {
        if let Some(item) = ElementRef::wrap(child)
            && item.value().name() == "li"
        {
            index += 1;
            let text = collect_text(item);
            if ordered {
                out.push_str(&format!("{}. {}\n", index, text));
            } else {
                out.push_str(&format!("* {}\n", text));
            }
        }
    }
    out.push('\n');
}

/// Emits `[text](href)` when the anchor has both a destination and visible
/// text; otherwise falls through to plain-text extraction of its children.
fn render_link(el: ElementRef<'_>, out: &mut String) {
    let href = el.value().attr("href").unwrap_or("");
    let text = collect_text(el);

    if !href.is_empty() && !text.is_empty() {
        out.push_str(&format!("[{}]({})", text, href));
        out.push('\n');
    } else {
        render_children(el, out);
    }
}

/// Whole-descendant text of an element, trimmed. Markup nested inside a
/// converted construct (a link in a heading, a heading in a list item)
/// flattens to plain text.
fn collect_text(el: ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}

/// Collapses any run of blank lines down to exactly one blank line and
/// trims the ends.
fn collapse_blank_lines(text: &str) -> String {
    let re = Regex::new(r"\n\s*\n").unwrap();
    re.replace_all(text.trim(), "\n\n").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::Document;

    fn render(body: &str) -> String {
        let html = format!(r#"<html><body><div id="article_content">{}</div></body></html>"#, body);
        let doc = Document::parse(&html).unwrap();
        let el = doc.select_first("div#article_content").unwrap();
        render_content(el.element_ref())
    }

    #[test]
    fn test_plain_paragraphs() {
        let md = render("<p>First paragraph</p><p>Second paragraph</p>");
        assert!(md.contains("First paragraph"));
        assert!(md.contains("Second paragraph"));
    }

    #[test]
    fn test_script_style_svg_removed() {
        let md = render(
            "<p>Visible</p><script>var x = 1;</script><style>p { color: red }</style><svg><text>chart</text></svg>",
        );
        assert!(md.contains("Visible"));
        assert!(!md.contains("var x"));
        assert!(!md.contains("color"));
        assert!(!md.contains("chart"));
    }

    #[test]
    fn test_code_block_with_language() {
        let md = render(r#"<pre><code class="language-python">print(1)</code></pre>"#);
        assert!(md.contains("```python\nprint(1)\n```"));
    }

    #[test]
    fn test_code_block_without_language() {
        let md = render("<pre><code>let x = 1;</code></pre>");
        assert!(md.contains("```\nlet x = 1;\n```"));
    }

    #[test]
    fn test_code_block_framed_by_blank_lines() {
        let md = render(r#"<p>before</p><pre><code class="language-python">print(1)</code></pre><p>after</p>"#);
        assert!(md.contains("before\n\n```python\nprint(1)\n```\n\nafter"));
    }

    #[test]
    fn test_headings() {
        let md = render("<h2>Section</h2><p>Body</p>");
        assert!(md.contains("## Section"));
        assert!(md.contains("## Section\n\nBody"));
    }

    #[test]
    fn test_heading_levels() {
        let md = render("<h1>One</h1><h3>Three</h3><h6>Six</h6>");
        assert!(md.contains("# One"));
        assert!(md.contains("### Three"));
        assert!(md.contains("###### Six"));
    }

    #[test]
    fn test_unordered_list() {
        let md = render("<ul><li>a</li><li>b</li><li>c</li></ul>");
        assert!(md.contains("* a\n* b\n* c"));
    }

    #[test]
    fn test_ordered_list() {
        let md = render("<ol><li>a</li><li>b</li><li>c</li></ol>");
        assert!(md.contains("1. a\n2. b\n3. c"));
    }

    #[test]
    fn test_ordered_list_numbering_restarts_per_list() {
        let md = render("<ol><li>a</li><li>b</li></ol><ol><li>c</li></ol>");
        assert!(md.contains("1. a\n2. b"));
        assert!(md.contains("1. c"));
        assert!(!md.contains("3. c"));
    }

    #[test]
    fn test_link_with_href_and_text() {
        let md = render(r#"<p><a href="https://example.com">Example</a></p>"#);
        assert!(md.contains("[Example](https://example.com)"));
    }

    #[test]
    fn test_link_without_href_falls_through_to_text() {
        // Anchors missing a destination or text get no special handling.
        let md = render("<p><a>bare anchor text</a></p>");
        assert!(md.contains("bare anchor text"));
        assert!(!md.contains("]("));
    }

    #[test]
    fn test_link_without_text_dropped() {
        let md = render(r#"<p>before</p><a href="https://example.com"></a><p>after</p>"#);
        assert!(!md.contains("example.com"));
        assert!(md.contains("before"));
        assert!(md.contains("after"));
    }

    #[test]
    fn test_link_inside_list_item_flattens() {
        let md = render(r#"<ul><li>see <a href="https://example.com">docs</a></li></ul>"#);
        assert!(md.contains("* see docs"));
        assert!(!md.contains("[docs]"));
    }

    #[test]
    fn test_blank_line_collapsing() {
        let collapsed = collapse_blank_lines("a\n\n\n\nb\n \n\t\nc");
        assert_eq!(collapsed, "a\n\nb\n\nc");
    }

    #[test]
    fn test_output_has_no_triple_newlines() {
        let md = render("<div><p>one</p></div><div></div><div><p>two</p></div>");
        assert!(!md.contains("\n\n\n"));
    }

    #[test]
    fn test_nested_containers_recursed() {
        let md = render("<div><div><p>deeply nested</p></div></div>");
        assert!(md.contains("deeply nested"));
    }
}
