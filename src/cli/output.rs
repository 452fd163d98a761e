//! Output formatting utilities

use crate::domain::format::hashtag_line;
use crate::domain::Post;
use chrono::Local;

/// Format posts for `list`: one header line per post, hashtags below.
/// At most `hashtag_preview` hashtags are shown, the rest counted as `+N`.
pub fn format_post_list(posts: &[Post], hashtag_preview: usize) -> String {
    if posts.is_empty() {
        return "No posts yet".to_string();
    }

    let mut output = String::new();
    for post in posts {
        let created = post.created_at.with_timezone(&Local);
        output.push_str(&format!(
            "{}  {}  {}",
            post.id.short(),
            created.format("%Y-%m-%d %H:%M"),
            post.title
        ));
        if !post.label.is_empty() {
            output.push_str(&format!("  [{}]", post.label));
        }
        output.push('\n');

        if let Some(line) = hashtag_summary(&post.hashtags, hashtag_preview) {
            output.push_str(&format!("          {}\n", line));
        }
    }
    output
}

/// Shortened hashtag line, or None when the post has no hashtags
fn hashtag_summary(hashtags: &[String], limit: usize) -> Option<String> {
    if hashtags.is_empty() {
        return None;
    }

    let shown = &hashtags[..hashtags.len().min(limit)];
    let hidden = hashtags.len() - shown.len();

    let mut line = hashtag_line(shown);
    if hidden > 0 {
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(&format!("+{}", hidden));
    }
    Some(line)
}

/// Format a single post with its metadata and the copyable text
pub fn format_post_detail(post: &Post) -> String {
    let mut output = format!(
        "id:      {}\ncreated: {}\n",
        post.id,
        post.created_at
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M:%S")
    );
    if !post.label.is_empty() {
        output.push_str(&format!("label:   {}\n", post.label));
    }
    output.push('\n');
    output.push_str(&post.formatted());
    output.push('\n');
    output
}

/// Format a vocabulary, one entry per line
pub fn format_vocabulary(entries: &[String], prefix: &str, empty_message: &str) -> String {
    if entries.is_empty() {
        return empty_message.to_string();
    }

    let mut output = String::new();
    for entry in entries {
        output.push_str(&format!("{}{}\n", prefix, entry));
    }
    output
}
