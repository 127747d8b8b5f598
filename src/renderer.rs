//! Markdown to HTML conversion by ordered regex substitution.
//!
//! Rules run in table order, each over the whole output of the previous one.
//! The result is not meant to be fed back in: running it twice double-wraps.

use log::trace;
use once_cell::sync::Lazy;
use regex::{Captures, Regex, RegexBuilder};

enum Rewrite {
    Template(&'static str),
    With(fn(&Captures) -> String),
}

struct Rule {
    name: &'static str,
    pattern: Regex,
    rewrite: Rewrite,
}

impl Rule {
    fn new(name: &'static str, pattern: &str, rewrite: Rewrite) -> Self {
        let pattern = RegexBuilder::new(pattern)
            .multi_line(true)
            .build()
            .unwrap();
        Self {
            name,
            pattern,
            rewrite,
        }
    }

    fn apply(&self, text: &str) -> String {
        match self.rewrite {
            Rewrite::Template(template) => self.pattern.replace_all(text, template).into_owned(),
            Rewrite::With(f) => self.pattern.replace_all(text, f).into_owned(),
        }
    }
}

fn fenced_code(caps: &Captures) -> String {
    let code = escape_html(caps[2].trim());
    match caps.get(1) {
        Some(lang) => format!(
            "<pre><code class=\"language-{}\">{}</code></pre>",
            lang.as_str(),
            code
        ),
        None => format!("<pre><code>{}</code></pre>", code),
    }
}

fn inline_code(caps: &Captures) -> String {
    format!("<code>{}</code>", escape_html(&caps[1]))
}

static RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    vec![
        Rule::new(
            "fenced code",
            r"(?s)```(\w+)?\n(.*?)```",
            Rewrite::With(fenced_code),
        ),
        Rule::new("inline code", r"`([^`]+)`", Rewrite::With(inline_code)),
        // most specific heading first
        Rule::new("h4", r"^#### (.+)$", Rewrite::Template("<h4>${1}</h4>")),
        Rule::new("h3", r"^### (.+)$", Rewrite::Template("<h3>${1}</h3>")),
        Rule::new("h2", r"^## (.+)$", Rewrite::Template("<h2>${1}</h2>")),
        Rule::new("h1", r"^# (.+)$", Rewrite::Template("<h1>${1}</h1>")),
        Rule::new(
            "bold italic",
            r"\*\*\*(.+?)\*\*\*",
            Rewrite::Template("<strong><em>${1}</em></strong>"),
        ),
        Rule::new(
            "bold",
            r"\*\*(.+?)\*\*",
            Rewrite::Template("<strong>${1}</strong>"),
        ),
        Rule::new("italic", r"\*(.+?)\*", Rewrite::Template("<em>${1}</em>")),
        Rule::new("list item", r"^[-*] (.+)$", Rewrite::Template("<li>${1}</li>")),
        Rule::new("rule", r"^---$", Rewrite::Template("<hr>")),
        Rule::new(
            "link",
            r"\[([^\]]+)\]\(([^)]+)\)",
            Rewrite::Template("<a href=\"${2}\">${1}</a>"),
        ),
        // the newline after the last item stays outside, so blank-line
        // boundaries survive for paragraph wrapping
        Rule::new(
            "list",
            r"<li>.*</li>(?:\n<li>.*</li>)*",
            Rewrite::Template("<ul>${0}</ul>"),
        ),
    ]
});

static BLANK_LINES: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{2,}").unwrap());
static BLOCK_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^<(?:h[1-6]|ul|ol|li|pre|hr|blockquote)\b").unwrap());

/// Renders a markdown body to HTML.
pub(crate) fn render(body: &str) -> String {
    let mut html = body.to_string();
    for rule in RULES.iter() {
        html = rule.apply(&html);
        trace!("after {}: {:?}", rule.name, html);
    }
    wrap_paragraphs(&html)
}

/// Wraps every blank-line separated block that does not already start with
/// a block-level tag in `<p>`.
fn wrap_paragraphs(html: &str) -> String {
    BLANK_LINES
        .split(html)
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .map(|block| {
            if BLOCK_TAG.is_match(block) {
                block.to_string()
            } else {
                format!("<p>{}</p>", block.replace('\n', " "))
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Escapes `&`, `<` and `>`. Not idempotent.
pub(crate) fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
