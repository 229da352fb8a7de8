//! Tag-matching rules. These treat HTML as a flat tag stream, not a DOM:
//! matches are shortest-span and blind to nesting, so the first closing tag
//! always ends a block. Deeply nested or malformed markup is out of scope.

use std::sync::LazyLock;

use regex::Regex;

/// `<title>…</title>`, capturing the inner text.
pub static TITLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<title(?:\s[^>]*)?>(.*?)</title\s*>").unwrap());

/// A whole `<p>…</p>` block, tags included. Attributes on the open tag are allowed.
pub static PARAGRAPH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<p(?:\s[^>]*)?>.*?</p\s*>").unwrap());

/// An anchor opening tag, capturing only the quoted href.
pub static ANCHOR_OPEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?is)<a\s[^>]*?href="([^"]*)"[^>]*>"#).unwrap());

/// An anchor through its `</a>`, capturing href and (non-greedy) display text.
pub static ANCHOR_FULL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?is)<a\s[^>]*?href="([^"]*)"[^>]*>(.*?)</a\s*>"#).unwrap());

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_is_shortest_match() {
        let html = "<TITLE>First</TITLE><title>Second</title>";
        assert_eq!(&TITLE_RE.captures(html).unwrap()[1], "First");
    }

    #[test]
    fn title_spans_lines() {
        let caps = TITLE_RE.captures("<head><title>\n  Two\n  lines\n</title>").unwrap();
        assert_eq!(caps[1].trim(), "Two\n  lines");
    }

    #[test]
    fn paragraph_first_close_wins() {
        let html = "<p>one <p>inner</p> tail</p>";
        let m: Vec<_> = PARAGRAPH_RE.find_iter(html).map(|m| m.as_str()).collect();
        assert_eq!(m, vec!["<p>one <p>inner</p>"]);
    }

    #[test]
    fn paragraph_with_attributes_and_case() {
        let html = "<P class=\"lead\">Hi\nthere</P><pre>code</pre><param>";
        let m: Vec<_> = PARAGRAPH_RE.find_iter(html).map(|m| m.as_str()).collect();
        assert_eq!(m, vec!["<P class=\"lead\">Hi\nthere</P>"]);
    }

    #[test]
    fn empty_paragraph_does_not_swallow_next() {
        let html = "<p></p>\n\n<p>Bye</p>";
        let m: Vec<_> = PARAGRAPH_RE.find_iter(html).map(|m| m.as_str()).collect();
        assert_eq!(m, vec!["<p></p>", "<p>Bye</p>"]);
    }

    #[test]
    fn anchor_open_ignores_other_attributes() {
        let caps = ANCHOR_OPEN_RE
            .captures(r#"<a class="x" href="https://a.test/" target="_blank">"#)
            .unwrap();
        assert_eq!(&caps[1], "https://a.test/");
    }

    #[test]
    fn anchor_full_does_not_swallow_neighbours() {
        let html = r#"<a href="https://a.test">A</a> and <a href="https://b.test">B</a>"#;
        let got: Vec<(String, String)> = ANCHOR_FULL_RE
            .captures_iter(html)
            .map(|c| (c[1].to_string(), c[2].to_string()))
            .collect();
        assert_eq!(
            got,
            vec![
                ("https://a.test".to_string(), "A".to_string()),
                ("https://b.test".to_string(), "B".to_string()),
            ]
        );
    }

    #[test]
    fn every_full_anchor_is_also_an_open_anchor() {
        let html = r#"<a href="https://x.test">Label</a>"#;
        assert!(ANCHOR_FULL_RE.is_match(html));
        assert!(ANCHOR_OPEN_RE.is_match(html));
    }
}
