//! HTML fragments for the reader.
//!
//! Every string that comes from the article document goes through
//! [`html_escape`] before it is placed in markup. Static label tables are
//! trusted.

mod article;
mod controls;

pub use article::{bar_height, render_article, render_list};
pub use controls::{
    direction_toggle_label, render_axiom_checkboxes, render_pagination, render_sort_field_options,
    render_source_options, render_topic_options, sort_button_label, FilterOptions, TopicOption,
};

/// Shown in place of the list when the document could not be loaded.
pub const LOAD_FAILURE_HTML: &str = r#"<li class="muted">Failed to load articles.</li>"#;

/// Shown in place of the list when the current page is empty.
pub const NO_MATCHES_HTML: &str = r#"<li class="muted">No articles match your filters.</li>"#;

/// Escape `&`, `<`, `>` and `"` for use in text and attribute values.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// One-line summary above the list, e.g. `12 articles (filtered from 120) · Page 1 of 1`.
pub fn status_line(matched: usize, total: usize, current_page: usize, total_pages: usize) -> String {
    let plural = if matched == 1 { "" } else { "s" };
    let filtered = if matched != total {
        format!(" (filtered from {})", total)
    } else {
        String::new()
    };
    format!(
        "{} article{}{} · Page {} of {}",
        matched, plural, filtered, current_page, total_pages
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn escapes_markup() {
        assert_eq!(
            html_escape(r#"<a href="x">Tom & Jerry</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&lt;/a&gt;"
        );
        assert_eq!(html_escape("&amp;"), "&amp;amp;");
    }

    #[rstest]
    #[case(120, 120, 1, 3, "120 articles · Page 1 of 3")]
    #[case(1, 120, 1, 1, "1 article (filtered from 120) · Page 1 of 1")]
    #[case(0, 5, 1, 1, "0 articles (filtered from 5) · Page 1 of 1")]
    #[case(0, 0, 1, 1, "0 articles · Page 1 of 1")]
    fn status(
        #[case] matched: usize,
        #[case] total: usize,
        #[case] page: usize,
        #[case] pages: usize,
        #[case] expected: &str,
    ) {
        assert_eq!(status_line(matched, total, page, pages), expected);
    }
}
