//! Line-oriented markdown renderer for folio post bodies.
//!
//! Converts a constrained markdown dialect into an HTML fragment in a single
//! forward pass. The dialect covers headings (levels 1-3), unordered lists,
//! blockquotes, fenced code blocks, and the usual inline spans (images,
//! links, bold, italic, inline code).
//!
//! The conversion is total: any input string maps to some output string.
//! Malformed markdown degrades into paragraph or code text rather than
//! producing an error.
//!
//! # Trust model
//!
//! Post bodies are author-controlled. No HTML escaping or sanitization is
//! applied to the source text, so raw HTML passes through verbatim. Do not
//! feed externally-submitted content through [`render`] without adding a
//! sanitization pass at the embedding boundary.
//!
//! # Example
//!
//! ```
//! use folio_markdown::render;
//!
//! let html = render("# Hello\n\nSome **bold** text");
//! assert!(html.contains("<h1>Hello</h1>"));
//! assert!(html.contains("<strong>bold</strong>"));
//! ```

mod block;
mod inline;

pub use block::render;
pub use inline::transform_inline;
