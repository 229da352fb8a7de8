use tracing::{debug, info};
use url::Url;

use crate::error::{Result, TarsierError};
use crate::fetch::{normalize_url, Fetch};
use crate::parser::links::Chooser;
use crate::parser::{article, format, links, patterns, sanitize};

/// A page ready to print: title and paragraphs in terminal markup.
#[derive(Debug)]
pub struct Reading {
    pub url: Url,
    pub title: Option<String>,
    pub paragraphs: Vec<String>,
}

impl Reading {
    /// The whole reading as one markup string, title in cyan on the first line.
    pub fn to_markup(&self) -> String {
        let mut lines = Vec::with_capacity(self.paragraphs.len() + 1);
        if let Some(title) = &self.title {
            lines.push(format!("<cyan>{}</>", title));
        }
        lines.extend(self.paragraphs.iter().cloned());
        lines.join("\n")
    }
}

/// Fetch → [random link → fetch] → extract → sanitize → format.
pub struct Pipeline<F, C> {
    fetcher: F,
    chooser: C,
}

impl<F: Fetch, C: Chooser> Pipeline<F, C> {
    pub fn new(fetcher: F, chooser: C) -> Self {
        Pipeline { fetcher, chooser }
    }

    /// Read the page at `raw_url`. With `random_link`, read a random page it links to instead.
    /// `on_follow` is told which link was picked before it is fetched.
    pub fn read(
        &mut self,
        raw_url: &str,
        random_link: bool,
        mut on_follow: impl FnMut(&Url),
    ) -> Result<Reading> {
        let mut url = normalize_url(raw_url)?;
        let mut page = self.fetcher.fetch(&url)?;

        if random_link {
            let cleaned = sanitize::clean_links(&page, Some(&url));
            let href = links::sample(&cleaned, &mut self.chooser)?;
            info!("Picked random link {}", href);
            url = normalize_url(&href)?;
            on_follow(&url);
            page = self.fetcher.fetch(&url)?;
        }

        let (title, paragraphs) = read_article(&page)?;
        Ok(Reading {
            url,
            title,
            paragraphs,
        })
    }
}

/// Extract, sanitize and format the article of an already fetched page.
pub fn read_article(page: &str) -> Result<(Option<String>, Vec<String>)> {
    let found = article::extract(page);
    if found.is_empty() {
        return Err(TarsierError::NoArticleFound);
    }

    let cleaned = sanitize::clean_article(&found.body);
    let paragraphs: Vec<String> = patterns::PARAGRAPH_RE
        .find_iter(&cleaned)
        .map(|m| format::format_paragraph(m.as_str()))
        .collect();
    debug!(
        raw_bytes = found.body.len(),
        clean_bytes = cleaned.len(),
        paragraphs = paragraphs.len(),
        "Formatted article"
    );
    Ok((found.title, paragraphs))
}
