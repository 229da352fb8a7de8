use rand::Rng;
use tracing::debug;

use super::patterns::ANCHOR_FULL_RE;
use crate::error::{Result, TarsierError};

/// One `<a href="…">…</a>` in a document. Identical hrefs are still distinct occurrences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnchorOccurrence {
    pub href: String,
    pub text: String,
}

/// Source of the index used to pick one of `len` links (`len > 0`).
pub trait Chooser {
    fn choose(&mut self, len: usize) -> usize;
}

/// Uniform choice from the thread-local RNG.
#[derive(Debug, Default)]
pub struct RandomChooser;

impl Chooser for RandomChooser {
    fn choose(&mut self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Every full anchor in `html`, in document order.
pub fn anchors(html: &str) -> Vec<AnchorOccurrence> {
    ANCHOR_FULL_RE
        .captures_iter(html)
        .map(|caps| AnchorOccurrence {
            href: html_escape::decode_html_entities(&caps[1]).into_owned(),
            text: caps[2].to_string(),
        })
        .collect()
}

/// Pick one anchor from link-sanitized `html` and return its target.
pub fn sample(html: &str, chooser: &mut impl Chooser) -> Result<String> {
    let found = anchors(html);
    if found.is_empty() {
        return Err(TarsierError::NoLinksFound);
    }
    let idx = chooser.choose(found.len()).min(found.len() - 1);
    let picked = &found[idx];
    debug!(of = found.len(), text = %picked.text, "Picked link #{}", idx);
    Ok(picked.href.clone())
}
