//! Test fixture loading utilities

use std::path::PathBuf;

use sieve_reader_core::{parse_document, Article, ArticleDocument, Axiom, AxiomScores};

/// Get the path to a fixture file
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("test_fixtures")
        .join(name)
}

/// Load a fixture file as a string
pub fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(fixture_path(name))
        .unwrap_or_else(|_| panic!("Failed to load fixture: {}", name))
}

/// The six-article sample document
#[allow(dead_code)]
pub fn sample_document() -> ArticleDocument {
    parse_document(&load_fixture("articles.json")).expect("sample document parses")
}

/// A generated collection of `n` articles with distinct dates and scores.
///
/// Article `i` is published on day `i` (so higher `i` is newer), scores `i`,
/// comes from "Source A" or "Source B" alternately, and is tagged `privacy`
/// when `i` is a multiple of 3 and `hardware` when it is a multiple of 5.
#[allow(dead_code)]
pub fn generated_document(n: usize) -> ArticleDocument {
    let articles = (0..n)
        .map(|i| {
            let mut a = Article::new(format!("Story {:03}", i), format!("https://example.com/{}", i));
            a.source = Some(if i % 2 == 0 { "Source A" } else { "Source B" }.to_string());
            a.published = Some(format!("2025-{:02}-{:02}", i / 28 + 1, i % 28 + 1));
            a.overall_score = Some(i as f64);
            if i % 3 == 0 {
                a.topics.push("privacy".to_string());
            }
            if i % 5 == 0 {
                a.topics.push("hardware".to_string());
            }
            a.axiom_scores = Some(
                AxiomScores::new()
                    .with(Axiom::DataSovereignty, (i % 4) as u8)
                    .with(Axiom::FearTrust, ((i + 1) % 4) as u8),
            );
            a
        })
        .collect();
    ArticleDocument {
        articles,
        ..Default::default()
    }
}
