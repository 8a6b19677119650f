//! Article filtering.
//!
//! All rules are conjunctive. An empty rule is disabled, so the default
//! filter matches every article.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::article::Article;
use crate::axiom::Axiom;

/// The active filter predicates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSpec {
    /// Exact source name.
    pub source: Option<String>,
    /// Exact topic key.
    pub topic: Option<String>,
    /// Case-insensitive title substring.
    pub search: String,
    /// Axioms the article must score above zero on (all of them).
    pub axioms: BTreeSet<Axiom>,
}

impl FilterSpec {
    /// Whether this filter matches everything.
    pub fn is_empty(&self) -> bool {
        self.source().is_none()
            && self.topic().is_none()
            && self.search.is_empty()
            && self.axioms.is_empty()
    }

    /// Active source rule, if any.
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref().filter(|s| !s.is_empty())
    }

    /// Active topic rule, if any.
    pub fn topic(&self) -> Option<&str> {
        self.topic.as_deref().filter(|s| !s.is_empty())
    }

    /// Test a single article against every active rule.
    pub fn matches(&self, article: &Article) -> bool {
        self.matcher().matches(article)
    }

    fn matcher(&self) -> Matcher<'_> {
        Matcher {
            source: self.source(),
            topic: self.topic(),
            needle: (!self.search.is_empty()).then(|| self.search.to_lowercase()),
            axioms: &self.axioms,
        }
    }
}

/// A filter prepared for repeated matching (search needle lowered once).
struct Matcher<'a> {
    source: Option<&'a str>,
    topic: Option<&'a str>,
    needle: Option<String>,
    axioms: &'a BTreeSet<Axiom>,
}

impl Matcher<'_> {
    fn matches(&self, article: &Article) -> bool {
        if let Some(source) = self.source {
            if article.source.as_deref() != Some(source) {
                return false;
            }
        }
        if let Some(topic) = self.topic {
            if !article.has_topic(topic) {
                return false;
            }
        }
        if let Some(needle) = &self.needle {
            if !article.title.to_lowercase().contains(needle.as_str()) {
                return false;
            }
        }
        self.axioms.iter().all(|&axiom| article.scores_on(axiom))
    }
}

/// Select the matching articles, preserving input order.
pub fn filter<'a>(articles: &'a [Article], spec: &FilterSpec) -> Vec<&'a Article> {
    let matcher = spec.matcher();
    articles.iter().filter(|a| matcher.matches(a)).collect()
}
