//! HTML page construction for posts and the project index.

use std::fmt::Write;

use chrono::{DateTime, Utc};

use folio_content::{Post, Project};
use folio_markdown::render;

/// Site-wide values that appear in page chrome.
#[derive(Clone, Debug)]
pub struct SiteMeta {
    /// Site title, appended to every page title.
    pub title: String,
    /// Site author, used as the default byline.
    pub author: String,
    /// Base URL for absolute links (no trailing slash).
    pub base_url: String,
}

/// Escape text for HTML element and attribute positions.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Format a timestamp for display (e.g., "March 02, 2024").
#[must_use]
pub fn format_date(date: &DateTime<Utc>) -> String {
    date.format("%B %d, %Y").to_string()
}

fn page_shell(title: &str, description: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{}</title>\n\
         <meta name=\"description\" content=\"{}\">\n\
         </head>\n\
         <body>\n{body}\n</body>\n\
         </html>\n",
        escape_html(title),
        escape_html(description),
    )
}

fn tag_list(tags: &[String]) -> String {
    let mut html = String::new();
    for tag in tags {
        write!(html, "<span class=\"tag\">{}</span>", escape_html(tag)).unwrap();
    }
    html
}

/// A fully assembled blog post page.
pub struct PostPage;

impl PostPage {
    /// Build the HTML page for one post.
    ///
    /// The post body is rendered with `folio-markdown` and embedded
    /// unescaped (trusted-author content); all header metadata is escaped.
    #[must_use]
    pub fn build(post: &Post, meta: &SiteMeta) -> String {
        let mut article = String::new();
        article.push_str("<article>\n<header>\n");
        if !post.tags.is_empty() {
            writeln!(article, "<div class=\"tags\">{}</div>", tag_list(&post.tags)).unwrap();
        }
        writeln!(article, "<h1>{}</h1>", escape_html(&post.title)).unwrap();
        writeln!(
            article,
            "<p class=\"byline\">By {}</p>",
            escape_html(&post.author)
        )
        .unwrap();
        if let Some(published_at) = &post.published_at {
            writeln!(
                article,
                "<time datetime=\"{}\">{}</time>",
                published_at.to_rfc3339(),
                format_date(published_at)
            )
            .unwrap();
        }
        writeln!(
            article,
            "<p class=\"reading-time\">{} min read</p>",
            post.reading_time
        )
        .unwrap();
        article.push_str("</header>\n<div class=\"post-body\">\n");
        // Trusted-author markdown; embedded without sanitization.
        article.push_str(&render(&post.content));
        article.push_str("\n</div>\n</article>");

        let title = format!("{} - {}", post.title, meta.title);
        page_shell(&title, &post.excerpt, &article)
    }
}

/// The project index page.
pub struct ProjectIndex;

impl ProjectIndex {
    /// Build the HTML page listing all projects.
    #[must_use]
    pub fn build(projects: &[Project], meta: &SiteMeta) -> String {
        let mut body = String::new();
        body.push_str("<main>\n<h1>Projects</h1>\n<ul class=\"projects\">\n");
        for project in projects {
            body.push_str("<li class=\"project\">\n");
            writeln!(body, "<h2>{}</h2>", escape_html(&project.title)).unwrap();
            writeln!(body, "<p>{}</p>", escape_html(&project.description)).unwrap();
            if !project.tags.is_empty() {
                writeln!(body, "<div class=\"tags\">{}</div>", tag_list(&project.tags)).unwrap();
            }
            if let Some(github_url) = &project.github_url {
                writeln!(
                    body,
                    "<a href=\"{}\">Source</a>",
                    escape_html(github_url)
                )
                .unwrap();
            }
            if let Some(demo_url) = &project.demo_url {
                writeln!(body, "<a href=\"{}\">Demo</a>", escape_html(demo_url)).unwrap();
            }
            body.push_str("</li>\n");
        }
        body.push_str("</ul>\n</main>");

        let title = format!("Projects - {}", meta.title);
        let description = format!("Projects by {}", meta.author);
        page_shell(&title, &description, &body)
    }
}
