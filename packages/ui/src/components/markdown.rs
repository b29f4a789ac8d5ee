//! Markdown rendering for article bodies, content blocks and the editor
//! preview.
//!
//! Raw HTML in the source is escaped and shown as text; article content comes
//! from many authors and is injected with `dangerous_inner_html`.

use dioxus::prelude::*;
use pulldown_cmark::{Event, Options, Parser};

fn parser_options() -> Options {
    let mut opts = Options::empty();
    opts.insert(Options::ENABLE_STRIKETHROUGH);
    opts.insert(Options::ENABLE_TABLES);
    opts.insert(Options::ENABLE_TASKLISTS);
    opts
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Markdown → HTML with embedded HTML neutralized.
pub fn render_markdown(source: &str) -> String {
    let parser = Parser::new_ext(source, parser_options()).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });
    let mut html_out = String::with_capacity(source.len() * 3 / 2);
    pulldown_cmark::html::push_html(&mut html_out, parser);
    html_out
}

/// HTML of one content block. Unknown kinds render as markdown.
pub fn render_block(kind: &str, content: &str) -> String {
    match kind {
        "heading" => format!("<h2>{}</h2>", html_escape(content.trim())),
        "quote" => format!("<blockquote>{}</blockquote>", render_markdown(content)),
        "image" => format!(
            "<figure><img src=\"{}\" alt=\"\" loading=\"lazy\"></figure>",
            html_escape(content.trim())
        ),
        "code" => format!("<pre><code>{}</code></pre>", html_escape(content)),
        _ => render_markdown(content),
    }
}

/// Block kinds offered by the article editor, with their labels.
pub const BLOCK_KINDS: [(&str, &str); 5] = [
    ("text", "Текст"),
    ("heading", "Заголовок"),
    ("quote", "Цитата"),
    ("image", "Изображение"),
    ("code", "Код"),
];

pub fn block_kind_label(kind: &str) -> &str {
    BLOCK_KINDS
        .iter()
        .find(|(k, _)| *k == kind)
        .map(|(_, label)| *label)
        .unwrap_or(kind)
}

#[component]
pub fn Markdown(source: String, #[props(default)] class: String) -> Element {
    let html = render_markdown(&source);
    rsx! {
        div { class: "prose max-w-none {class}", dangerous_inner_html: "{html}" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markdown_renders_basic_syntax() {
        let html = render_markdown("# Смета\n\n**итого** ~~старое~~");
        assert!(html.contains("<h1>Смета</h1>"));
        assert!(html.contains("<strong>итого</strong>"));
        assert!(html.contains("<del>старое</del>"));
    }

    #[test]
    fn test_raw_html_is_escaped() {
        let html = render_markdown("текст <script>alert(1)</script>");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_image_block_escapes_source() {
        let html = render_block("image", "https://cdn.example.com/a.png\" onload=\"x");
        assert!(html.contains("a.png&quot; onload=&quot;x"));
    }

    #[test]
    fn test_unknown_block_kind_falls_back_to_markdown() {
        assert_eq!(render_block("video", "*a*"), "<p><em>a</em></p>\n");
        assert_eq!(block_kind_label("video"), "video");
        assert_eq!(block_kind_label("quote"), "Цитата");
    }
}
