//! Projection of articles into list-item markup.
//!
//! Server text is always inserted as text: markup-significant characters
//! are escaped, the structure (`h3`, then content, then publish line) is
//! fixed.

pub mod date;

pub use date::{DateFormatter, DateLocale, INVALID_DATE};

use models::Article;

use serde::Serialize;

use std::fmt::Write;

pub const PUBLISHED_ON_PREFIX: &str = "Published on: ";

/// One rendered child of the news list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListItem {
    pub title: String,
    pub content: String,
    pub published_on: String,
}

impl ListItem {
    pub fn from_article(article: &Article, formatter: &DateFormatter) -> Self {
        Self {
            title: article.title.clone(),
            content: article.content.clone(),
            published_on: formatter.format(article.published()),
        }
    }

    /// `<li>` markup with every text node escaped.
    pub fn to_html(&self) -> String {
        format!(
            "<li><h3>{}</h3><p>{}</p><p>{}{}</p></li>",
            escape_html(&self.title),
            escape_html(&self.content),
            PUBLISHED_ON_PREFIX,
            escape_html(&self.published_on),
        )
    }

    /// Plain-text rendering for terminals.
    pub fn to_text(&self) -> String {
        format!(
            "{}\n{}\n{}{}",
            self.title, self.content, PUBLISHED_ON_PREFIX, self.published_on
        )
    }
}

/// Escape `&`, `<`, `>`, `"` and `'` for safe insertion into element or attribute text.
pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Render a whole list as a `<ul id=...>` block.
pub fn render_list_html(id: &str, items: &[ListItem]) -> String {
    let mut html = format!("<ul id=\"{}\">", escape_html(id));
    for item in items {
        // Writing to a String cannot fail.
        let _ = write!(html, "{}", item.to_html());
    }
    html.push_str("</ul>");
    html
}
