//! Frontmatter splitter for skill files.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

/// Leading `---` line, lazy block, closing `---` line, then the body.
static FRONTMATTER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)\A---\n(.*?)\n---\n(.*)\z").expect("frontmatter pattern is valid")
});

/// Key/value pairs from a frontmatter block.
pub type Frontmatter = BTreeMap<String, String>;

/// Split a skill file into its frontmatter map and body.
///
/// Text that does not start with a delimited block comes back unchanged with
/// an empty map.
pub fn split_frontmatter(content: &str) -> (Frontmatter, String) {
    let Some(caps) = FRONTMATTER_RE.captures(content) else {
        return (Frontmatter::new(), content.to_string());
    };

    let block = caps.get(1).map_or("", |m| m.as_str());
    let body = caps.get(2).map_or("", |m| m.as_str());

    let mut frontmatter = Frontmatter::new();
    for line in block.split('\n') {
        // A colon at index 0 has no key in front of it
        let Some(colon) = line.find(':').filter(|&idx| idx > 0) else {
            continue;
        };
        let key = line[..colon].trim();
        let value = unquote(line[colon + 1..].trim());
        frontmatter.insert(key.to_string(), value.to_string());
    }

    (frontmatter, body.to_string())
}

/// Strip one matching pair of surrounding single or double quotes.
fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = value
            .strip_prefix(quote)
            .and_then(|v| v.strip_suffix(quote))
        {
            return inner;
        }
    }
    value
}
