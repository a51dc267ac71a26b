//! Markdown → HTML for assistant answers.
//!
//! Fenced code blocks come out as
//! `<div class="codehilite"><pre><code class="language-{lang}">…</code></pre></div>`,
//! which the page stylesheet and highlighter pick up.

use pulldown_cmark::{html, CodeBlockKind, Event, Options, Parser, Tag, TagEnd};

// Fenced code is core syntax; no other extension is switched on.
fn options() -> Options {
    Options::empty()
}

/// Render Markdown to an HTML fragment. Never fails; malformed input is
/// rendered as best the parser can.
pub fn render(markdown: &str) -> String {
    let mut events = Vec::new();
    let mut code: Option<(String, String)> = None;

    for event in Parser::new_ext(markdown, options()) {
        if let Some((_, body)) = code.as_mut() {
            match event {
                Event::Text(text) => body.push_str(&text),
                Event::End(TagEnd::CodeBlock) => {
                    if let Some((language, body)) = code.take() {
                        events.push(Event::Html(code_block(&language, &body).into()));
                    }
                }
                _ => {}
            }
            continue;
        }

        match event {
            Event::Start(Tag::CodeBlock(kind)) => {
                code = Some((language_of(&kind), String::new()));
            }
            other => events.push(other),
        }
    }

    let mut output = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut output, events.into_iter());
    output
}

fn language_of(kind: &CodeBlockKind) -> String {
    match kind {
        CodeBlockKind::Fenced(info) => info
            .split(|c: char| c.is_whitespace() || c == ',')
            .next()
            .unwrap_or_default()
            .to_string(),
        CodeBlockKind::Indented => String::new(),
    }
}

fn code_block(language: &str, body: &str) -> String {
    let class = if language.is_empty() {
        String::new()
    } else {
        format!(" class=\"language-{}\"", escape(language))
    };
    format!(
        "<div class=\"codehilite\"><pre><code{}>{}</code></pre></div>\n",
        class,
        escape(body)
    )
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            c => escaped.push(c),
        }
    }
    escaped
}
