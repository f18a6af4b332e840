//! Block-level segmentation of a markdown document.
//!
//! Walks the document line by line, classifying each line (or run of lines)
//! into one block-level HTML fragment. The only persistent state is the
//! fenced-code mode flag and the cursor; list runs use one line of lookahead
//! and nothing backtracks.

use crate::inline::transform_inline;

/// Fence marker opening or closing a raw code region.
const FENCE: &str = "```";

/// Segmenter state: outside or inside a fenced code block.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Mode {
    Normal,
    InCodeFence,
}

/// Line starts an unordered list item (`- ` or `* `).
fn is_list_item(line: &str) -> bool {
    line.starts_with("- ") || line.starts_with("* ")
}

/// Render a markdown document to an HTML fragment.
///
/// Single forward pass. Classification precedence per line: fence marker,
/// fenced content, headings (longest prefix first), list items, blockquote,
/// blank line, paragraph. Fragments are emitted in document order and joined
/// with a newline.
///
/// Never fails; malformed input degrades into paragraph or code text. A
/// fence left open at end of input drops its buffered lines.
#[must_use]
pub fn render(document: &str) -> String {
    let lines: Vec<&str> = document.split('\n').collect();
    let mut fragments: Vec<String> = Vec::new();
    let mut code_buf: Vec<&str> = Vec::new();
    let mut mode = Mode::Normal;

    let mut cursor = 0;
    while cursor < lines.len() {
        let line = lines[cursor];

        // Fence lines toggle the mode and are never emitted as content.
        if line.trim().starts_with(FENCE) {
            match mode {
                Mode::Normal => {
                    mode = Mode::InCodeFence;
                    code_buf.clear();
                }
                Mode::InCodeFence => {
                    mode = Mode::Normal;
                    fragments.push(format!("<pre><code>{}</code></pre>", code_buf.join("\n")));
                }
            }
            cursor += 1;
            continue;
        }

        if mode == Mode::InCodeFence {
            code_buf.push(line);
            cursor += 1;
            continue;
        }

        // Longest heading prefix first, so "### " is never misread as "# ".
        if let Some(rest) = line.strip_prefix("### ") {
            fragments.push(format!("<h3>{}</h3>", transform_inline(rest)));
        } else if let Some(rest) = line.strip_prefix("## ") {
            fragments.push(format!("<h2>{}</h2>", transform_inline(rest)));
        } else if let Some(rest) = line.strip_prefix("# ") {
            fragments.push(format!("<h1>{}</h1>", transform_inline(rest)));
        } else if is_list_item(line) {
            // List run: consume every consecutive item line, emit one <ul>.
            let mut items = String::new();
            while cursor < lines.len() && is_list_item(lines[cursor]) {
                items.push_str("<li>");
                items.push_str(&transform_inline(&lines[cursor][2..]));
                items.push_str("</li>");
                cursor += 1;
            }
            fragments.push(format!("<ul>{items}</ul>"));
            // Cursor already sits on the first non-item line.
            continue;
        } else if let Some(rest) = line.strip_prefix("> ") {
            fragments.push(format!("<blockquote>{}</blockquote>", transform_inline(rest)));
        } else if line.trim().is_empty() {
            fragments.push("<br/>".to_owned());
        } else {
            fragments.push(format!("<p>{}</p>", transform_inline(line)));
        }

        cursor += 1;
    }

    fragments.join("\n")
}
