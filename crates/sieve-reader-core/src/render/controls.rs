//! Filter, sort and pagination controls.

use std::collections::BTreeSet;
use std::fmt::Write;

use super::html_escape;
use crate::article::Article;
use crate::axiom::Axiom;
use crate::pager::PageWindow;
use crate::sort::{SortDirection, SortField, SortSpec};
use crate::topic::topic_label;

/// Choices offered by the source and topic selects, derived from the data.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOptions {
    /// Distinct non-empty source names, sorted.
    pub sources: Vec<String>,
    /// Distinct topic keys, sorted by key.
    pub topics: Vec<TopicOption>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicOption {
    pub key: String,
    pub label: String,
}

impl FilterOptions {
    pub fn from_articles(articles: &[Article]) -> Self {
        let sources: BTreeSet<&str> = articles.iter().filter_map(Article::source_name).collect();
        let topics: BTreeSet<&str> = articles
            .iter()
            .flat_map(|a| a.topics.iter().map(String::as_str))
            .filter(|t| !t.is_empty())
            .collect();

        Self {
            sources: sources.into_iter().map(str::to_string).collect(),
            topics: topics
                .into_iter()
                .map(|key| TopicOption {
                    key: key.to_string(),
                    label: topic_label(key),
                })
                .collect(),
        }
    }

    /// A single topic is not worth a control.
    pub fn topic_control_visible(&self) -> bool {
        self.topics.len() > 1
    }

    pub fn offers_source(&self, source: &str) -> bool {
        self.sources.iter().any(|s| s == source)
    }

    /// False for every key while the topic control is hidden.
    pub fn offers_topic(&self, key: &str) -> bool {
        self.topic_control_visible() && self.topics.iter().any(|t| t.key == key)
    }
}

/// `<option>` elements for the source select, appended after its "all" entry.
pub fn render_source_options(options: &FilterOptions, selected: Option<&str>) -> String {
    options
        .sources
        .iter()
        .map(|s| option(s, s, selected == Some(s.as_str())))
        .collect()
}

/// `<option>` elements for the topic select. Empty when the control is hidden.
pub fn render_topic_options(options: &FilterOptions, selected: Option<&str>) -> String {
    if !options.topic_control_visible() {
        return String::new();
    }
    options
        .topics
        .iter()
        .map(|t| option(&t.key, &t.label, selected == Some(t.key.as_str())))
        .collect()
}

/// `<option>` elements for the sort-field select.
pub fn render_sort_field_options(with_axioms: bool, sort: &SortSpec) -> String {
    SortField::all(with_axioms)
        .into_iter()
        .map(|field| option(field.key(), field.label(), field == sort.field))
        .collect()
}

/// Text of a `data-sort` button. Only the active field shows an arrow.
pub fn sort_button_label(field: SortField, sort: &SortSpec) -> String {
    if field == sort.field {
        format!("{} {}", field.label(), sort.direction.arrow())
    } else {
        field.label().to_string()
    }
}

pub fn direction_toggle_label(direction: SortDirection) -> String {
    match direction {
        SortDirection::Ascending => format!("Ascending {}", direction.arrow()),
        SortDirection::Descending => format!("Descending {}", direction.arrow()),
    }
}

/// One checkbox per axiom, in display order.
pub fn render_axiom_checkboxes(selected: &BTreeSet<Axiom>) -> String {
    let mut html = String::new();
    for axiom in Axiom::ALL {
        let _ = write!(
            html,
            r#"<label class="axiom-option"><input type="checkbox" value="{}"{}> {}</label>"#,
            axiom.key(),
            if selected.contains(&axiom) { " checked" } else { "" },
            axiom.label()
        );
    }
    html
}

/// Pagination buttons. Empty when everything fits on one page.
pub fn render_pagination(current_page: usize, total_pages: usize) -> String {
    if total_pages <= 1 {
        return String::new();
    }

    let window = PageWindow::new(current_page, total_pages);
    let current_page = current_page.clamp(1, total_pages);
    let mut html = String::new();

    let _ = write!(
        html,
        r#"<button{} data-page="{}">← Prev</button>"#,
        disabled(current_page <= 1),
        current_page.saturating_sub(1)
    );

    if window.first {
        html.push_str(&page_button(1, current_page));
        if window.leading_gap {
            html.push_str(ELLIPSIS);
        }
    }

    for page in window.pages() {
        html.push_str(&page_button(page, current_page));
    }

    if window.last {
        if window.trailing_gap {
            html.push_str(ELLIPSIS);
        }
        html.push_str(&page_button(total_pages, current_page));
    }

    let _ = write!(
        html,
        r#"<button{} data-page="{}">Next →</button>"#,
        disabled(current_page >= total_pages),
        current_page + 1
    );

    html
}

const ELLIPSIS: &str = "<button disabled>…</button>";

fn page_button(page: usize, current_page: usize) -> String {
    let active = if page == current_page {
        r#" class="active""#
    } else {
        ""
    };
    format!(r#"<button data-page="{}"{}>{}</button>"#, page, active, page)
}

fn disabled(flag: bool) -> &'static str {
    if flag {
        " disabled"
    } else {
        ""
    }
}

fn option(value: &str, label: &str, selected: bool) -> String {
    format!(
        r#"<option value="{}"{}>{}</option>"#,
        html_escape(value),
        if selected { " selected" } else { "" },
        html_escape(label)
    )
}
