//! Front matter extraction.
//!
//! Only a small subset of YAML is understood: scalar strings, `true`/`false`,
//! `YYYY-MM-DD` dates, flow arrays (`[a, "b"]`) and block arrays of indented
//! `- item` lines. Anything else is skipped line by line.

use anyhow::bail;
use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};
use serde_json::Value;

use crate::metadata::{MetaValue, Metadata};

static FRONT_MATTER: Lazy<Regex> = Lazy::new(|| {
    RegexBuilder::new(r"\A---\n(?:(.*?)\n)?---(?:\n|\z)(.*)\z")
        .dot_matches_new_line(true)
        .build()
        .unwrap()
});
static KEY_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([\w-]+):(.*)$").unwrap());
static BLOCK_ITEM: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s+-\s+(.+)$").unwrap());
static DATE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap());

enum ScanState {
    ScanKey,
    BlockArray { key: String, items: Vec<String> },
}

impl ScanState {
    fn feed(self, line: &str, metadata: &mut Metadata) -> anyhow::Result<Self> {
        if let ScanState::BlockArray { key, mut items } = self {
            if let Some(caps) = BLOCK_ITEM.captures(line) {
                items.push(unquote(caps[1].trim()).to_string());
                return Ok(ScanState::BlockArray { key, items });
            }
            metadata.insert(key, MetaValue::List(items));
        }

        let Some(caps) = KEY_LINE.captures(line) else {
            return Ok(ScanState::ScanKey);
        };
        let key = &caps[1];
        let value = caps[2].trim();
        if value.is_empty() {
            return Ok(ScanState::BlockArray {
                key: key.to_string(),
                items: vec![],
            });
        }
        metadata.insert(key, parse_value(key, value)?);
        Ok(ScanState::ScanKey)
    }

    fn finish(self, metadata: &mut Metadata) {
        if let ScanState::BlockArray { key, items } = self {
            metadata.insert(key, MetaValue::List(items));
        }
    }
}

/// Splits `document` into its front matter and the remaining body.
///
/// Without a leading `---` block the metadata is empty and the body is the
/// whole document.
pub(crate) fn extract(document: &str) -> anyhow::Result<(Metadata, &str)> {
    let Some(caps) = FRONT_MATTER.captures(document) else {
        return Ok((Metadata::new(), document));
    };
    let block = caps.get(1).map_or("", |m| m.as_str());
    let body = caps.get(2).map_or("", |m| m.as_str());

    let mut metadata = Metadata::new();
    let mut state = ScanState::ScanKey;
    for line in block.lines() {
        state = state.feed(line, &mut metadata)?;
    }
    state.finish(&mut metadata);

    Ok((metadata, body))
}

fn parse_value(key: &str, value: &str) -> anyhow::Result<MetaValue> {
    if value.starts_with('[') {
        return Ok(MetaValue::List(parse_flow_array(key, value)?));
    }
    Ok(match value {
        "true" => MetaValue::Bool(true),
        "false" => MetaValue::Bool(false),
        _ if DATE.is_match(value) => MetaValue::Date(value.to_string()),
        _ => MetaValue::Text(unquote(value).to_string()),
    })
}

fn parse_flow_array(key: &str, value: &str) -> anyhow::Result<Vec<String>> {
    if let Ok(items) = serde_json::from_str::<Vec<Value>>(&value.replace('\'', "\"")) {
        return Ok(items
            .into_iter()
            .map(|item| match item {
                Value::String(s) => s,
                other => other.to_string(),
            })
            .collect());
    }

    // bare words: [x, y]
    let Some(inner) = value.strip_prefix('[').and_then(|v| v.strip_suffix(']')) else {
        bail!("Invalid flow array for `{}`: {}", key, value);
    };
    Ok(inner
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| unquote(s).to_string())
        .collect())
}

/// Strips one layer of matching single or double quotes.
fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}
