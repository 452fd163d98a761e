//! Post text formatting

use crate::domain::Post;

/// Vertical separator between the title line and the hashtag line
pub const SEPARATOR: &str = "\n.\n.\n.\n";

/// Extra spacing appended to titles; the marks keep the target platform from
/// collapsing the spaces.
pub const SPACER: &str = " \u{200E} \u{200E} ";

/// Title line shown for a draft that has no title yet
pub const PLACEHOLDER_TITLE_LINE: &str = "「 Your title here 」";

/// Build the title line: `「 title 」` plus ` film` when a film is set
pub fn title_line(title: &str, film: &str) -> String {
    if film.is_empty() {
        format!("「 {} 」", title)
    } else {
        format!("「 {} 」 {}", title, film)
    }
}

/// Build the hashtag line: each tag prefixed with `#`, space separated
pub fn hashtag_line(hashtags: &[String]) -> String {
    hashtags
        .iter()
        .map(|tag| format!("#{}", tag))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format a post into the text block that gets copied
pub fn format_post(post: &Post) -> String {
    format!(
        "{}{}{}",
        title_line(&post.title, &post.film),
        SEPARATOR,
        hashtag_line(&post.hashtags)
    )
}

/// Format an unsaved draft, substituting a placeholder for an empty title
pub fn format_preview(post: &Post) -> String {
    if post.title.is_empty() {
        format!(
            "{}{}{}",
            PLACEHOLDER_TITLE_LINE,
            SEPARATOR,
            hashtag_line(&post.hashtags)
        )
    } else {
        format_post(post)
    }
}
