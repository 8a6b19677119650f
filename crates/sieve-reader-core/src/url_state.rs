//! Query-string codec for [`ViewState`].
//!
//! Only non-default values are written, so the default view has an empty
//! query string. Parameters:
//!
//! ```text
//! source=<name>  topic=<key>  q=<search>  sort=<field>  dir=asc  page=<n>  axioms=<k1,k2>
//! ```
//!
//! Decoding never fails: unknown or malformed values fall back to defaults.

use std::collections::BTreeSet;

use url::form_urlencoded;

use crate::axiom::Axiom;
use crate::sort::{SortDirection, SortField};
use crate::state::ViewState;

pub const PARAM_SOURCE: &str = "source";
pub const PARAM_TOPIC: &str = "topic";
pub const PARAM_SEARCH: &str = "q";
pub const PARAM_SORT: &str = "sort";
pub const PARAM_DIRECTION: &str = "dir";
pub const PARAM_PAGE: &str = "page";
pub const PARAM_AXIOMS: &str = "axioms";

const ASCENDING_MARKER: &str = "asc";

/// Serialize a view state. Returns an empty string for the default view.
pub fn encode(state: &ViewState) -> String {
    let mut params = form_urlencoded::Serializer::new(String::new());

    if let Some(source) = state.filter.source() {
        params.append_pair(PARAM_SOURCE, source);
    }
    if let Some(topic) = state.filter.topic() {
        params.append_pair(PARAM_TOPIC, topic);
    }
    if !state.filter.search.is_empty() {
        params.append_pair(PARAM_SEARCH, &state.filter.search);
    }
    if state.sort.field != SortField::Date {
        params.append_pair(PARAM_SORT, state.sort.field.key());
    }
    if state.sort.direction != SortDirection::Descending {
        params.append_pair(PARAM_DIRECTION, ASCENDING_MARKER);
    }
    if state.page > 1 {
        params.append_pair(PARAM_PAGE, &state.page.to_string());
    }
    if !state.filter.axioms.is_empty() {
        params.append_pair(PARAM_AXIOMS, &join_axioms(&state.filter.axioms));
    }

    params.finish()
}

/// Parse a query string (with or without the leading `?`).
pub fn decode(query: &str) -> ViewState {
    let query = query.strip_prefix('?').unwrap_or(query);
    let mut state = ViewState::default();
    let mut seen = BTreeSet::new();

    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        // First occurrence wins.
        if !seen.insert(key.clone()) {
            continue;
        }
        match &*key {
            PARAM_SOURCE if !value.is_empty() => state.filter.source = Some(value.into_owned()),
            PARAM_TOPIC if !value.is_empty() => state.filter.topic = Some(value.into_owned()),
            PARAM_SEARCH => state.filter.search = value.into_owned(),
            PARAM_SORT if !value.is_empty() => match SortField::from_key(&value) {
                Some(field) => state.sort.field = field,
                None => tracing::debug!(value = %value, "unknown sort field, using date"),
            },
            PARAM_DIRECTION => {
                if value == ASCENDING_MARKER {
                    state.sort.direction = SortDirection::Ascending;
                }
            }
            PARAM_PAGE => state.page = parse_page(&value),
            PARAM_AXIOMS => state.filter.axioms = split_axioms(&value),
            _ => {}
        }
    }

    state
}

/// Where to point the location after a state change: the bare path for the
/// default view, `?<query>` otherwise.
pub fn location_target(pathname: &str, query: &str) -> String {
    if query.is_empty() {
        pathname.to_string()
    } else {
        format!("?{}", query)
    }
}

fn parse_page(value: &str) -> usize {
    match value.trim().parse::<usize>() {
        Ok(page) if page >= 1 => page,
        _ => {
            tracing::debug!(value, "malformed page number, using 1");
            1
        }
    }
}

fn join_axioms(axioms: &BTreeSet<Axiom>) -> String {
    axioms.iter().map(Axiom::key).collect::<Vec<_>>().join(",")
}

fn split_axioms(value: &str) -> BTreeSet<Axiom> {
    value
        .split(',')
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .filter_map(|k| {
            let axiom = Axiom::from_key(k);
            if axiom.is_none() {
                tracing::debug!(key = k, "ignoring unknown axiom");
            }
            axiom
        })
        .collect()
}
