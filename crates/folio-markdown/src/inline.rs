//! Inline span rewriting for a single line of text.
//!
//! Each rule is a global, non-greedy substitution applied to the result of
//! the previous rule. The order is part of the contract: images must be
//! rewritten before links (image syntax is link syntax prefixed with `!`),
//! and bold before italic (a double delimiter contains a single one).

use std::sync::LazyLock;

use regex::Regex;

static IMAGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"!\[(.*?)\]\((.*?)\)").unwrap());

static LINK_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[(.*?)\]\((.*?)\)").unwrap());

static BOLD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:\*\*|__)(.*?)(?:\*\*|__)").unwrap());

static ITALIC_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?:\*|_)(.*?)(?:\*|_)").unwrap());

static CODE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`(.*?)`").unwrap());

/// Rewrite inline markdown spans within one line to HTML.
///
/// Handles images, links, bold (`**`/`__`), italic (`*`/`_`), and inline
/// code, in that order. Characters outside a recognized span pass through
/// untouched; no escaping is performed on captured text or URLs.
///
/// Must not be called on lines inside a fenced code block; the block
/// segmenter keeps those verbatim.
#[must_use]
pub fn transform_inline(text: &str) -> String {
    let text = IMAGE_RE.replace_all(text, r#"<img src="$2" alt="$1">"#);
    let text = LINK_RE.replace_all(&text, r#"<a href="$2">$1</a>"#);
    let text = BOLD_RE.replace_all(&text, "<strong>$1</strong>");
    let text = ITALIC_RE.replace_all(&text, "<em>$1</em>");
    let text = CODE_RE.replace_all(&text, "<code>$1</code>");
    text.into_owned()
}
