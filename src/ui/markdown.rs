//! Markdown rendering for chatbot replies
//!
//! The canned replies use a light dialect: bold runs, bullet characters, and
//! newlines that must come out as line breaks inside the bubble. Parsed with
//! pulldown-cmark and rendered to a small set of styled elements; anything
//! outside that set degrades to plain text.

use leptos::prelude::*;
use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};

/// Render a bot reply as HTML for its transcript bubble
#[component]
pub fn ChatMarkdown(
    /// The reply text
    content: String,
) -> impl IntoView {
    let html = render_reply_html(&content);

    view! { <div class="chat-markdown text-sm leading-relaxed" inner_html=html /> }
}

/// Parse a reply into bubble-ready HTML
pub fn render_reply_html(content: &str) -> String {
    let parser = Parser::new_ext(content, Options::empty());
    let mut html = String::new();

    for event in parser {
        match event {
            Event::Start(tag) => match tag {
                Tag::Paragraph => html.push_str("<p class=\"mb-2 last:mb-0\">"),
                // Headings have no place inside a bubble; keep the weight only
                Tag::Heading { .. } => {
                    html.push_str("<p class=\"mb-2 last:mb-0 font-semibold\">")
                }
                Tag::List(Some(_)) => {
                    html.push_str("<ol class=\"list-decimal list-inside mb-2 space-y-1\">")
                }
                Tag::List(None) => {
                    html.push_str("<ul class=\"list-disc list-inside mb-2 space-y-1\">")
                }
                Tag::Item => html.push_str("<li>"),
                Tag::Emphasis => html.push_str("<em class=\"italic\">"),
                Tag::Strong => html.push_str("<strong class=\"font-semibold\">"),
                Tag::CodeBlock(_) => {
                    html.push_str(
                        "<pre class=\"bg-black/10 dark:bg-white/10 rounded p-2 my-2 overflow-x-auto\"><code class=\"text-xs font-mono\">",
                    );
                }
                Tag::Link { dest_url, .. } => {
                    html.push_str(&format!(
                        "<a href=\"{}\" class=\"underline\" target=\"_blank\" rel=\"noopener noreferrer\">",
                        escape_html(&dest_url)
                    ));
                }
                _ => {}
            },
            Event::End(tag) => match tag {
                TagEnd::Paragraph | TagEnd::Heading(_) => html.push_str("</p>"),
                TagEnd::List(true) => html.push_str("</ol>"),
                TagEnd::List(false) => html.push_str("</ul>"),
                TagEnd::Item => html.push_str("</li>"),
                TagEnd::Emphasis => html.push_str("</em>"),
                TagEnd::Strong => html.push_str("</strong>"),
                TagEnd::CodeBlock => html.push_str("</code></pre>"),
                TagEnd::Link => html.push_str("</a>"),
                _ => {}
            },
            Event::Text(text) => html.push_str(&escape_html(&text)),
            Event::Code(code) => {
                html.push_str(&format!(
                    "<code class=\"bg-black/10 dark:bg-white/10 px-1 rounded text-xs font-mono\">{}</code>",
                    escape_html(&code)
                ));
            }
            // Replies encode line breaks as plain newlines
            Event::SoftBreak | Event::HardBreak => html.push_str("<br />"),
            // Raw HTML in a reply is shown, not interpreted
            Event::Html(raw) | Event::InlineHtml(raw) => html.push_str(&escape_html(&raw)),
            _ => {}
        }
    }

    html
}

/// Escape HTML special characters
fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::chatbot::PRICING_REPLY;

    #[test]
    fn test_plain_reply_is_a_paragraph() {
        let html = render_reply_html("Szia!");
        assert!(html.contains("<p"));
        assert!(html.contains("Szia!"));
        assert!(html.contains("</p>"));
    }

    #[test]
    fn test_bold_runs() {
        let html = render_reply_html("ez **fontos** rész");
        assert!(html.contains("<strong"));
        assert!(html.contains("fontos"));
        assert!(html.contains("</strong>"));
    }

    #[test]
    fn test_newlines_become_breaks() {
        let html = render_reply_html("első sor\nmásodik sor");
        assert!(html.contains("<br />"));
        assert!(html.contains("első sor"));
        assert!(html.contains("második sor"));
    }

    #[test]
    fn test_pricing_reply_layout() {
        let html = render_reply_html(PRICING_REPLY);
        // Bold headline, bullet lines separated by breaks, escaped ampersands
        assert!(html.contains("<strong"));
        assert!(html.contains("<br />"));
        assert!(html.contains("•"));
        assert!(html.contains("25.000 Ft/hó"));
        assert!(html.contains("&amp;"));
    }

    #[test]
    fn test_lists() {
        let html = render_reply_html("- egy\n- kettő");
        assert!(html.contains("<ul"));
        assert!(html.contains("<li>egy</li>"));
        assert!(html.contains("</ul>"));
    }

    #[test]
    fn test_links_open_in_new_tab() {
        let html = render_reply_html("[DebreTech](https://debretech.hu)");
        assert!(html.contains("href=\"https://debretech.hu\""));
        assert!(html.contains("target=\"_blank\""));
        assert!(html.contains("DebreTech"));
    }

    #[test]
    fn test_heading_degrades_to_bold_paragraph() {
        let html = render_reply_html("# Cím");
        assert!(!html.contains("<h1"));
        assert!(html.contains("font-semibold"));
        assert!(html.contains("Cím"));
    }

    #[test]
    fn test_raw_html_is_escaped() {
        let html = render_reply_html("hello <script>alert('x')</script>");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_escape_html() {
        let escaped = escape_html("<b>\"laza\" & 'szoros'</b>");
        assert!(!escaped.contains('<'));
        assert!(!escaped.contains('>'));
        assert!(escaped.contains("&amp;"));
        assert!(escaped.contains("&quot;"));
    }
}
