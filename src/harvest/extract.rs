//! Story and comment extraction from forum HTML
//!
//! This module parses listing pages into story records and item detail
//! pages into comment records. Rows missing a required element are skipped
//! silently; empty or unrecognizable markup yields an empty sequence, never
//! an error.

use scraper::{ElementRef, Html, Selector};

/// A story extracted from a listing page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Story {
    /// Row identifier, unique within a single listing page
    pub id: String,

    /// Title text, whitespace-trimmed
    pub title: String,

    /// Link href, whitespace-trimmed
    pub link: String,

    /// Comments attached by the enricher; empty until then
    pub comments: Vec<Comment>,
}

/// A comment extracted from an item detail page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    /// Username of the commenter
    pub user: String,

    /// Flattened comment body text
    pub text: String,
}

/// Extracts stories from listing-page markup
///
/// Selects every `.athing` row and reads the row's `id` attribute and its
/// `.titleline > a` title anchor. Rows missing either are skipped without
/// error or log. Output follows document order.
///
/// # Arguments
///
/// * `html` - The listing-page markup
///
/// # Returns
///
/// The stories found, in document order, with empty comment lists
///
/// # Example
///
/// ```
/// use storyrake::harvest::extract_stories;
///
/// let html = r#"<table><tr class="athing" id="1"><td>
///     <span class="titleline"><a href="http://x">Hello</a></span>
/// </td></tr></table>"#;
/// let stories = extract_stories(html);
/// assert_eq!(stories.len(), 1);
/// assert_eq!(stories[0].title, "Hello");
/// ```
pub fn extract_stories(html: &str) -> Vec<Story> {
    let document = Html::parse_document(html);
    let mut stories = Vec::new();

    if let (Ok(row_selector), Ok(title_selector)) =
        (Selector::parse(".athing"), Selector::parse(".titleline > a"))
    {
        for row in document.select(&row_selector) {
            let id = match row.value().attr("id") {
                Some(id) => id,
                None => continue,
            };
            let anchor = match row.select(&title_selector).next() {
                Some(anchor) => anchor,
                None => continue,
            };
            let link = match anchor.value().attr("href") {
                Some(href) => href,
                None => continue,
            };

            stories.push(Story {
                id: id.trim().to_string(),
                title: anchor.text().collect::<String>().trim().to_string(),
                link: link.trim().to_string(),
                comments: Vec::new(),
            });
        }
    }

    stories
}

/// Extracts comments from item-detail markup
///
/// Selects every `tr.comtr` row and reads the `.hnuser` username element
/// and the `.commtext` body element. Rows missing either are skipped. The
/// body text is flattened so nested formatting and quote markup collapse.
/// Output follows document order; reply threading is not reconstructed.
///
/// # Arguments
///
/// * `html` - The item-detail markup
///
/// # Returns
///
/// The comments found, in document order
pub fn extract_comments(html: &str) -> Vec<Comment> {
    let document = Html::parse_document(html);
    let mut comments = Vec::new();

    if let (Ok(row_selector), Ok(user_selector), Ok(body_selector)) = (
        Selector::parse("tr.comtr"),
        Selector::parse(".hnuser"),
        Selector::parse(".commtext"),
    ) {
        for row in document.select(&row_selector) {
            let user = match row.select(&user_selector).next() {
                Some(user) => user,
                None => continue,
            };
            let body = match row.select(&body_selector).next() {
                Some(body) => body,
                None => continue,
            };

            comments.push(Comment {
                user: user.text().collect::<String>().trim().to_string(),
                text: flatten_text(&body),
            });
        }
    }

    comments
}

/// Collapses an element's text fragments into one single-space-separated
/// string: each fragment is trimmed and empty fragments are dropped
fn flatten_text(element: &ElementRef) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
