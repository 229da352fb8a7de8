use std::collections::{HashMap, HashSet};

use ammonia::{Builder, UrlRelative};
use url::Url;

const ARTICLE_TAGS: [&str; 6] = ["p", "b", "strong", "code", "em", "a"];

/// Restrict article text to paragraphs, inline emphasis and `href`-only anchors.
/// Anything else is dropped; the text inside dropped tags stays in place
/// (script and style bodies excepted).
pub fn clean_article(html: &str) -> String {
    let mut builder = Builder::default();
    builder
        .tags(ARTICLE_TAGS.into_iter().collect())
        .tag_attributes(href_only())
        .generic_attributes(HashSet::new())
        .link_rel(None);
    builder.clean(html).to_string()
}

/// Stricter policy for link sampling: only `<a href>` with an http(s) target survives.
/// Relative targets are resolved against `base` when given, otherwise dropped.
pub fn clean_links(html: &str, base: Option<&Url>) -> String {
    let relative = match base {
        Some(base) => UrlRelative::RewriteWithBase(base.clone()),
        None => UrlRelative::Deny,
    };

    let mut builder = Builder::default();
    builder
        .tags(HashSet::from(["a"]))
        .tag_attributes(href_only())
        .generic_attributes(HashSet::new())
        .url_schemes(HashSet::from(["http", "https"]))
        .url_relative(relative)
        .link_rel(None);
    builder.clean(html).to_string()
}

fn href_only() -> HashMap<&'static str, HashSet<&'static str>> {
    HashMap::from([("a", HashSet::from(["href"]))])
}
