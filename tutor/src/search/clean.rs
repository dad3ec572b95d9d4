//! Markdown cleanup for search results.

use once_cell::sync::Lazy;
use regex::Regex;

static ESCAPES_AND_NEWLINES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\\+|\n+").expect("escape pattern is valid"));

static LINKS_AND_URLS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\[[^\]]+\]\([^\)]+\)|https?://[^\s]+").expect("link pattern is valid")
});

/// Reduces scraped markdown to plain prose for grounding.
///
/// Runs of backslashes and newlines are removed and the result trimmed, then markdown
/// links `[text](url)` and bare `http(s)://` URLs go. Link text goes with the link.
pub fn clean_markdown(markdown: &str) -> String {
    let without_breaks = ESCAPES_AND_NEWLINES.replace_all(markdown, "");
    LINKS_AND_URLS.replace_all(without_breaks.trim(), "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_newlines_and_backslashes() {
        assert_eq!(clean_markdown("a\\\\b\n\nc\n"), "abc");
    }

    #[test]
    fn strips_markdown_links_and_bare_urls() {
        let md = "See [the docs](https://example.com/docs) or https://example.org/x now.";
        assert_eq!(clean_markdown(md), "See  or  now.");
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(
            clean_markdown("  \n  Force is mass times acceleration.  \n"),
            "Force is mass times acceleration."
        );
    }

    #[test]
    fn plain_text_is_unchanged() {
        let text = "Force equals mass times acceleration.";
        assert_eq!(clean_markdown(text), text);
    }
}
