//! Article model and the document it is loaded from.
//!
//! The document is produced upstream and may carry nulls where the scoring
//! pipeline had no value. Every accessor here applies the documented default
//! so the pipeline never has to.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

use crate::axiom::{Axiom, MAX_AXIOM_SCORE};

/// The fetched JSON document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArticleDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generated_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_articles: Option<u64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub articles: Vec<Article>,
}

/// Upstream row id; numeric from the database export, text otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ArticleId {
    Number(i64),
    Text(String),
}

impl std::fmt::Display for ArticleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArticleId::Number(n) => write!(f, "{}", n),
            ArticleId::Text(s) => f.write_str(s),
        }
    }
}

/// One scored article.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Article {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ArticleId>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(default)]
    pub source: Option<String>,
    /// Sortable date text (ISO 8601 from upstream).
    #[serde(default)]
    pub published: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub topics: Vec<String>,
    #[serde(default)]
    pub overall_score: Option<f64>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub axiom_scores: Option<AxiomScores>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub digest_date: Option<String>,
}

impl Article {
    /// Create an article with just a title and url.
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            ..Self::default()
        }
    }

    /// Overall score, 0 when absent.
    pub fn score(&self) -> f64 {
        self.overall_score.unwrap_or(0.0)
    }

    /// Publish date text, empty when absent.
    pub fn published_key(&self) -> &str {
        self.published.as_deref().unwrap_or("")
    }

    /// Score on one axiom, 0 when absent.
    pub fn axiom_score(&self, axiom: Axiom) -> u8 {
        self.axiom_scores
            .as_ref()
            .and_then(|s| s.get(axiom))
            .unwrap_or(0)
    }

    /// Whether the article scores strictly above zero on an axiom.
    pub fn scores_on(&self, axiom: Axiom) -> bool {
        self.axiom_score(axiom) > 0
    }

    /// Whether the article carries a topic tag.
    pub fn has_topic(&self, topic: &str) -> bool {
        self.topics.iter().any(|t| t == topic)
    }

    /// Non-empty source name, if any.
    pub fn source_name(&self) -> Option<&str> {
        self.source.as_deref().filter(|s| !s.is_empty())
    }
}

/// Per-axiom scores. Absent keys mean "not scored".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AxiomScores(BTreeMap<Axiom, u8>);

impl AxiomScores {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a score, clamped to the 0–3 scale.
    pub fn with(mut self, axiom: Axiom, score: u8) -> Self {
        self.0.insert(axiom, score.min(MAX_AXIOM_SCORE));
        self
    }

    /// Score for an axiom if present.
    pub fn get(&self, axiom: Axiom) -> Option<u8> {
        self.0.get(&axiom).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(Axiom, u8)> for AxiomScores {
    fn from_iter<I: IntoIterator<Item = (Axiom, u8)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(), |scores, (axiom, v)| scores.with(axiom, v))
    }
}

impl<'de> Deserialize<'de> for AxiomScores {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Unknown keys are dropped, nulls and non-numeric values count as absent.
        let raw = BTreeMap::<String, serde_json::Value>::deserialize(deserializer)?;
        let scores = raw
            .into_iter()
            .filter_map(|(key, value)| {
                let axiom = Axiom::from_key(&key)?;
                let v = match value {
                    serde_json::Value::Number(n) => n.as_f64()?,
                    serde_json::Value::String(s) => s.trim().parse::<f64>().ok()?,
                    _ => return None,
                };
                Some((axiom, clamp_score(v)))
            })
            .collect();
        Ok(scores)
    }
}

fn clamp_score(v: f64) -> u8 {
    if v.is_nan() {
        return 0;
    }
    v.round().clamp(0.0, f64::from(MAX_AXIOM_SCORE)) as u8
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
