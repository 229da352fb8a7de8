use super::patterns::{PARAGRAPH_RE, TITLE_RE};

/// Paragraph blocks of a page plus its title, if it had one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Article {
    pub title: Option<String>,
    /// Every `<p>…</p>` block in document order, joined by a blank line.
    pub body: String,
}

impl Article {
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// Pull the title and every paragraph block out of raw page text.
pub fn extract(page: &str) -> Article {
    let title = TITLE_RE
        .captures(page)
        .map(|caps| html_escape::decode_html_entities(caps[1].trim()).into_owned());

    let body = PARAGRAPH_RE
        .find_iter(page)
        .map(|m| m.as_str())
        .collect::<Vec<_>>()
        .join("\n\n");

    Article {
        title,
        body: body.trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn example_page() {
        let page = "<html><title>T</title><body><p>Hello <b>world</b></p><p>Bye</p></body></html>";
        let a = extract(page);
        assert_eq!(a.title.as_deref(), Some("T"));
        assert_eq!(a.body, "<p>Hello <b>world</b></p>\n\n<p>Bye</p>");
    }

    #[test]
    fn keeps_every_block_in_order() {
        let page: String = (1..=7)
            .map(|i| format!("<div>nav {i}</div>\n<p>para {i}</p>\n"))
            .collect();
        let a = extract(&page);
        let expected: Vec<String> = (1..=7).map(|i| format!("<p>para {i}</p>")).collect();
        assert_eq!(a.body, expected.join("\n\n"));
    }

    #[test]
    fn no_paragraphs_is_empty() {
        let a = extract("<html><title>Only a title</title><div>text</div></html>");
        assert!(a.is_empty());
        assert_eq!(a.title.as_deref(), Some("Only a title"));
    }

    #[test]
    fn missing_title_is_fine() {
        let a = extract("<p>x</p>");
        assert_eq!(a.title, None);
        assert_eq!(a.body, "<p>x</p>");
    }

    #[test]
    fn title_entities_decoded() {
        let a = extract("<title> Q &amp; A </title>");
        assert_eq!(a.title.as_deref(), Some("Q & A"));
    }

    #[test]
    fn fixture_page() {
        let page = std::fs::read_to_string("tests/fixtures/article.html").unwrap();
        let a = extract(&page);
        assert_eq!(a.title.as_deref(), Some("Tarsiers & their eyes"));
        assert_eq!(a.body.matches("\n\n").count() + 1, 4);
        assert!(a.body.starts_with("<p class=\"lead\">"));
        assert!(a.body.ends_with("</p>"));
    }
}
