//! Sort fields, directions and the sort engine.

use std::cmp::Ordering;

use crate::article::Article;
use crate::axiom::Axiom;

/// What the filtered list is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortField {
    /// Publish date, compared as text.
    #[default]
    Date,
    /// Overall score.
    Score,
    /// Score on a single axiom.
    Axiom(Axiom),
}

impl SortField {
    /// Key used in the query string and on sort controls.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::Score => "score",
            Self::Axiom(axiom) => axiom.key(),
        }
    }

    /// Parse from a key. Unknown keys yield `None`.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "date" => Some(Self::Date),
            "score" => Some(Self::Score),
            other => Axiom::from_key(other).map(Self::Axiom),
        }
    }

    /// Display name for UI.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Date => "Date",
            Self::Score => "Score",
            Self::Axiom(axiom) => axiom.label(),
        }
    }

    /// Every sortable field. Axiom fields are included only when enabled.
    pub fn all(with_axioms: bool) -> Vec<SortField> {
        let mut fields = vec![Self::Date, Self::Score];
        if with_axioms {
            fields.extend(Axiom::ALL.into_iter().map(Self::Axiom));
        }
        fields
    }
}

impl std::fmt::Display for SortField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortDirection {
    Ascending,
    #[default]
    Descending,
}

impl SortDirection {
    /// The opposite direction.
    pub fn flip(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Arrow shown next to the active sort control.
    pub fn arrow(&self) -> &'static str {
        match self {
            Self::Ascending => "↑",
            Self::Descending => "↓",
        }
    }

    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}

/// Field plus direction. Defaults to newest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SortSpec {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// Compare two articles under this spec.
    pub fn compare(&self, a: &Article, b: &Article) -> Ordering {
        let ordering = match self.field {
            SortField::Date => a.published_key().cmp(b.published_key()),
            SortField::Score => a.score().total_cmp(&b.score()),
            SortField::Axiom(axiom) => a.axiom_score(axiom).cmp(&b.axiom_score(axiom)),
        };
        self.direction.apply(ordering)
    }
}

/// Order articles in place. Ties keep no guaranteed order.
pub fn sort(articles: &mut [&Article], spec: &SortSpec) {
    articles.sort_by(|a, b| spec.compare(a, b));
}
