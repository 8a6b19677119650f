//! Property-based laws for the pipeline and the URL codec.

use std::cmp::Ordering;

use proptest::prelude::*;
use sieve_reader_core::pager::total_pages;
use sieve_reader_core::url_state::{decode, encode};
use sieve_reader_core::{
    filter, paginate, sort, Article, Axiom, AxiomScores, FilterSpec, SortDirection, SortField,
    SortSpec, ViewState, PAGE_SIZE,
};

fn arb_axiom() -> impl Strategy<Value = Axiom> {
    prop::sample::select(Axiom::ALL.to_vec())
}

fn arb_article() -> impl Strategy<Value = Article> {
    (
        "[a-zA-Z ]{0,12}",
        prop::option::of(prop::sample::select(vec!["Wired", "Ars", "Verge"])),
        prop::sample::subsequence(vec!["privacy", "hardware", "crypto"], 0..=3),
        prop::option::of(0.0f64..10.0),
        prop::option::of("2026-0[1-9]-[0-2][0-9]"),
        prop::option::of(prop::collection::vec((arb_axiom(), 0u8..=3), 0..7)),
    )
        .prop_map(|(title, source, topics, score, published, axioms)| {
            let mut a = Article::new(title, "https://example.com");
            a.source = source.map(str::to_string);
            a.topics = topics.into_iter().map(str::to_string).collect();
            a.overall_score = score;
            a.published = published;
            a.axiom_scores = axioms.map(|pairs| pairs.into_iter().collect::<AxiomScores>());
            a
        })
}

fn arb_articles() -> impl Strategy<Value = Vec<Article>> {
    prop::collection::vec(arb_article(), 0..160)
}

fn arb_filter() -> impl Strategy<Value = FilterSpec> {
    (
        prop::option::of(prop::sample::select(vec!["Wired", "Ars", "Verge"])),
        prop::option::of(prop::sample::select(vec!["privacy", "hardware", "crypto"])),
        "[a-z]{0,2}",
        prop::collection::btree_set(arb_axiom(), 0..3),
    )
        .prop_map(|(source, topic, search, axioms)| FilterSpec {
            source: source.map(str::to_string),
            topic: topic.map(str::to_string),
            search,
            axioms,
        })
}

fn arb_sort() -> impl Strategy<Value = SortSpec> {
    (prop::sample::select(SortField::all(true)), any::<bool>()).prop_map(|(field, asc)| {
        let direction = if asc {
            SortDirection::Ascending
        } else {
            SortDirection::Descending
        };
        SortSpec::new(field, direction)
    })
}

fn arb_state() -> impl Strategy<Value = ViewState> {
    (
        prop::option::of("\\PC{1,16}"),
        prop::option::of("\\PC{1,16}"),
        "\\PC{0,16}",
        prop::collection::btree_set(arb_axiom(), 0..7),
        arb_sort(),
        1usize..10_000,
    )
        .prop_map(|(source, topic, search, axioms, sort, page)| ViewState {
            filter: FilterSpec {
                source,
                topic,
                search,
                axioms,
            },
            sort,
            page,
        })
}

proptest! {
    #[test]
    fn test_filter_is_order_preserving_subset(articles in arb_articles(), spec in arb_filter()) {
        let out = filter(&articles, &spec);
        let expected: Vec<&Article> = articles.iter().filter(|a| spec.matches(a)).collect();
        prop_assert_eq!(out, expected);
    }

    #[test]
    fn test_axiom_filter_excludes_zero_scores(articles in arb_articles(), spec in arb_filter()) {
        for article in filter(&articles, &spec) {
            for &axiom in &spec.axioms {
                prop_assert!(article.axiom_score(axiom) > 0, "{} scored 0 on {}", article.title, axiom);
            }
        }
    }

    #[test]
    fn test_empty_filter_keeps_everything(articles in arb_articles()) {
        prop_assert_eq!(filter(&articles, &FilterSpec::default()).len(), articles.len());
    }

    #[test]
    fn test_sort_orders_adjacent_pairs(articles in arb_articles(), spec in arb_sort()) {
        let mut items: Vec<&Article> = articles.iter().collect();
        sort(&mut items, &spec);
        prop_assert_eq!(items.len(), articles.len());
        for pair in items.windows(2) {
            prop_assert_ne!(spec.compare(pair[0], pair[1]), Ordering::Greater);
        }
    }

    #[test]
    fn test_flipping_direction_reverses_keys(articles in arb_articles(), spec in arb_sort()) {
        let flipped = SortSpec::new(spec.field, spec.direction.flip());
        let mut forward: Vec<&Article> = articles.iter().collect();
        let mut backward = forward.clone();
        sort(&mut forward, &spec);
        sort(&mut backward, &flipped);

        let n = forward.len();
        for i in 0..n {
            prop_assert_eq!(spec.compare(forward[i], backward[n - 1 - i]), Ordering::Equal);
        }
    }

    #[test]
    fn test_pages_partition_sequence(len in 0usize..400) {
        let seq: Vec<usize> = (0..len).collect();
        let pages = total_pages(len, PAGE_SIZE);
        prop_assert_eq!(pages, len.div_ceil(PAGE_SIZE).max(1));

        let mut joined = Vec::new();
        for n in 1..=pages {
            let page = paginate(&seq, PAGE_SIZE, n);
            prop_assert!(page.items.len() <= PAGE_SIZE);
            prop_assert_eq!(page.current_page, n);
            joined.extend_from_slice(page.items);
        }
        prop_assert_eq!(joined, seq);
    }

    #[test]
    fn test_out_of_range_page_clamps(len in 0usize..400, requested in 0usize..100) {
        let seq: Vec<usize> = (0..len).collect();
        let page = paginate(&seq, PAGE_SIZE, requested);
        prop_assert!(page.current_page >= 1);
        prop_assert!(page.current_page <= page.total_pages);
    }

    #[test]
    fn test_url_state_roundtrip(state in arb_state()) {
        prop_assert_eq!(decode(&encode(&state)), state);
    }

    #[test]
    fn test_decode_is_total(query in "\\PC{0,64}") {
        let state = decode(&query);
        prop_assert!(state.page >= 1);
    }
}
