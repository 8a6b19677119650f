//! Article list items.

use std::fmt::Write;

use super::{html_escape, NO_MATCHES_HTML};
use crate::article::Article;
use crate::axiom::{Axiom, MAX_AXIOM_SCORE};
use crate::config::DetailToggle;
use crate::topic::topic_label;

/// Tallest bar, in pixels, for a full score.
const BAR_MAX_PX: f64 = 16.0;
/// Bars never shrink below this, so a zero score is still visible.
const BAR_MIN_PX: f64 = 2.0;

/// Bar height in pixels for an axiom score.
pub fn bar_height(score: u8) -> f64 {
    (f64::from(score) / f64::from(MAX_AXIOM_SCORE) * BAR_MAX_PX).max(BAR_MIN_PX)
}

/// Render a page of articles, or the empty-result placeholder.
pub fn render_list(articles: &[&Article], toggle: DetailToggle) -> String {
    if articles.is_empty() {
        return NO_MATCHES_HTML.to_string();
    }
    articles
        .iter()
        .map(|article| render_article(article, toggle))
        .collect()
}

/// Render one `li.article-item`. The element that opens the detail panel
/// carries `data-toggle="detail"`.
pub fn render_article(article: &Article, toggle: DetailToggle) -> String {
    let url = html_escape(&article.url);
    let title = html_escape(&article.title);
    let score = article.score();

    let mut html = String::from(r#"<li class="article-item">"#);

    match toggle {
        DetailToggle::Title => {
            let _ = write!(
                html,
                r#"<div class="article-title"><a href="{}" data-toggle="detail">{}</a></div>"#,
                url, title
            );
            html.push_str(r#"<div class="article-meta">"#);
            let _ = write!(html, r#"<span class="article-score">Score: {}</span>"#, score);
        }
        DetailToggle::Score => {
            let _ = write!(
                html,
                r#"<div class="article-title"><a href="{}" rel="noopener" target="_blank">{}</a></div>"#,
                url, title
            );
            html.push_str(r#"<div class="article-meta">"#);
            match score_tooltip(article) {
                Some(tooltip) => {
                    let _ = write!(
                        html,
                        r#"<span class="article-score" data-toggle="detail" title="{}">Score: {}</span>"#,
                        html_escape(&tooltip),
                        score
                    );
                }
                None => {
                    let _ = write!(
                        html,
                        r#"<span class="article-score" data-toggle="detail">Score: {}</span>"#,
                        score
                    );
                }
            }
        }
    }

    if article.axiom_scores.is_some() {
        html.push_str(&render_bars(article));
    }

    let _ = write!(
        html,
        r#"<a class="article-source" href="{}" rel="noopener" target="_blank">{}</a><span>{}</span></div>"#,
        url,
        html_escape(article.source.as_deref().unwrap_or("")),
        html_escape(article.published_key()),
    );

    if !article.topics.is_empty() {
        html.push_str(r#"<div class="article-tags">"#);
        for topic in &article.topics {
            let _ = write!(
                html,
                r#"<span class="thread-tag">{}</span>"#,
                html_escape(&topic_label(topic))
            );
        }
        html.push_str("</div>");
    }

    if let Some(summary) = article.summary.as_deref().filter(|s| !s.is_empty()) {
        let _ = write!(html, r#"<p class="article-summary">{}</p>"#, html_escape(summary));
    }

    html.push_str(&render_detail(article));
    html.push_str("</li>");
    html
}

fn render_bars(article: &Article) -> String {
    let mut html = String::from(r#"<span class="axiom-bars">"#);
    for axiom in Axiom::ALL {
        let v = article.axiom_score(axiom);
        let _ = write!(
            html,
            r#"<span class="axiom-bar" style="height:{}px" title="{}: {}/{}"></span>"#,
            bar_height(v),
            axiom.label(),
            v,
            MAX_AXIOM_SCORE
        );
    }
    html.push_str("</span>");
    html
}

/// Collapsed panel with one row per axiom. Empty when the article is unscored.
fn render_detail(article: &Article) -> String {
    let mut html = String::from(r#"<div class="article-detail">"#);
    if article.axiom_scores.is_some() {
        for axiom in Axiom::ALL {
            let _ = write!(
                html,
                r#"<div class="axiom-row"><span class="axiom-label">{}</span><span class="axiom-value">{}/{}</span></div>"#,
                axiom.label(),
                article.axiom_score(axiom),
                MAX_AXIOM_SCORE
            );
        }
    }
    html.push_str("</div>");
    html
}

fn score_tooltip(article: &Article) -> Option<String> {
    article.axiom_scores.as_ref()?;
    let lines: Vec<String> = Axiom::ALL
        .iter()
        .map(|&axiom| format!("{}: {}/{}", axiom.label(), article.axiom_score(axiom), MAX_AXIOM_SCORE))
        .collect();
    Some(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::article::AxiomScores;

    fn scored() -> Article {
        let mut a = Article::new("Chips & <Dips>", "https://example.com/a?x=1&y=2");
        a.source = Some("Wired".into());
        a.published = Some("2026-01-05".into());
        a.overall_score = Some(7.5);
        a.topics = vec!["ai_regulation".into(), "quantum_stuff".into()];
        a.summary = Some("Short \"quoted\" summary".into());
        a.axiom_scores = Some(
            AxiomScores::new()
                .with(Axiom::AttentionEconomy, 3)
                .with(Axiom::FearTrust, 1),
        );
        a
    }

    #[test]
    fn bar_heights() {
        assert_eq!(bar_height(0), 2.0);
        assert_eq!(bar_height(3), 16.0);
        assert!((bar_height(1) - 16.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn escapes_data_fields() {
        let html = render_article(&scored(), DetailToggle::Title);
        assert!(html.contains("Chips &amp; &lt;Dips&gt;"));
        assert!(html.contains(r#"href="https://example.com/a?x=1&amp;y=2""#));
        assert!(html.contains("Short &quot;quoted&quot; summary"));
        assert!(!html.contains("<Dips>"));
    }

    #[test]
    fn title_variant_toggles_on_title() {
        let html = render_article(&scored(), DetailToggle::Title);
        assert!(html.starts_with(r#"<li class="article-item"><div class="article-title"><a href="https://example.com/a?x=1&amp;y=2" data-toggle="detail">"#));
        assert!(html.contains(r#"<span class="article-score">Score: 7.5</span>"#));
        assert!(html.contains(r#"<a class="article-source" href="https://example.com/a?x=1&amp;y=2" rel="noopener" target="_blank">Wired</a><span>2026-01-05</span>"#));
    }

    #[test]
    fn score_variant_links_title_and_toggles_on_score() {
        let html = render_article(&scored(), DetailToggle::Score);
        assert!(html.contains(r#"rel="noopener" target="_blank">Chips &amp; &lt;Dips&gt;</a></div>"#));
        assert!(html.contains(
            "<span class=\"article-score\" data-toggle=\"detail\" title=\"Attention Economy: 3/3\nData Sovereignty: 0/3"
        ));
    }

    #[test]
    fn topic_chips_use_labels_with_fallback() {
        let html = render_article(&scored(), DetailToggle::Title);
        assert!(html.contains(r#"<div class="article-tags"><span class="thread-tag">AI Regulation</span><span class="thread-tag">Quantum Stuff</span></div>"#));
    }

    #[test]
    fn bars_render_every_axiom() {
        let html = render_bars(&scored());
        assert_eq!(html.matches("axiom-bar\"").count(), 7);
        assert!(html.contains(r#"style="height:16px" title="Attention Economy: 3/3""#));
        assert!(html.contains(r#"style="height:2px" title="Systemic Design: 0/3""#));
    }

    #[test]
    fn detail_panel_lists_every_axiom() {
        let html = render_detail(&scored());
        assert_eq!(html.matches("axiom-row").count(), 7);
        insta::assert_snapshot!(
            html.split("</div>").nth(4).unwrap_or_default(),
            @r#"<div class="axiom-row"><span class="axiom-label">Fear vs. Trust</span><span class="axiom-value">1/3</span>"#
        );
    }

    #[test]
    fn unscored_article_has_no_bars_and_empty_detail() {
        let a = Article::new("Plain", "https://example.com/p");
        let html = render_article(&a, DetailToggle::Score);
        assert!(!html.contains("axiom-bars"));
        assert!(html.contains(r#"<div class="article-detail"></div>"#));
        assert!(html.contains(r#"<span class="article-score" data-toggle="detail">Score: 0</span>"#));
        assert!(!html.contains("article-tags"));
        assert!(!html.contains("article-summary"));
    }

    #[test]
    fn empty_page_renders_placeholder() {
        assert_eq!(render_list(&[], DetailToggle::Title), NO_MATCHES_HTML);
    }
}
