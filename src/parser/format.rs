use std::sync::LazyLock;

use regex::Regex;

use super::patterns::{ANCHOR_FULL_RE, ANCHOR_OPEN_RE, PARAGRAPH_RE};

static P_TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)</?p(?:\s[^>]*)?>").unwrap());
static INLINE_TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)<(/?)(em|strong|b|code)>").unwrap());
static LEFTOVER_ANCHOR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)</?a\b[^>]*>").unwrap());

/// Inline tag name → terminal markup token. Every closing tag becomes the reset token.
fn tag_token(name: &str, closing: bool) -> &'static str {
    if closing {
        return "</>";
    }
    match name.to_ascii_lowercase().as_str() {
        "em" => "<red>",
        "code" => "<green>",
        _ => "<bold>",
    }
}

/// Format the first `<p>…</p>` block found in `block`; empty when there is none.
pub fn format_paragraph(block: &str) -> String {
    match PARAGRAPH_RE.find(block) {
        Some(m) => to_markup(m.as_str()),
        None => String::new(),
    }
}

/// Translate sanitized paragraph HTML into terminal markup.
///
/// Order matters: entities are decoded first, then inline tags are swapped for
/// tokens and the paragraph wrapper dropped, and only then are anchors rewritten.
/// Full anchors must go before bare opening tags since every full anchor also
/// matches the opening-tag rule. Anchors left without an href are unwrapped last,
/// so only known tokens ever reach the renderer.
pub fn to_markup(html: &str) -> String {
    let content = html_escape::decode_html_entities(html);

    let content = INLINE_TAG_RE.replace_all(&content, |caps: &regex::Captures| {
        tag_token(&caps[2], !caps[1].is_empty())
    });
    let content = P_TAG_RE.replace_all(&content, "");

    let content = ANCHOR_FULL_RE.replace_all(&content, "${2} (<blue>${1}</>)");
    let content = ANCHOR_OPEN_RE.replace_all(&content, "<blue>${1}</>");
    let content = LEFTOVER_ANCHOR_RE.replace_all(&content, "");

    content.into_owned()
}
