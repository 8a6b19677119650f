//! The reader controller.
//!
//! Owns the loaded collection and the current [`ViewState`]. Every UI event
//! goes through [`Reader::dispatch`], which mutates the state and returns a
//! freshly computed [`Frame`]. Frames are always recomputed from the full
//! collection.

use crate::article::{Article, ArticleDocument};
use crate::axiom::Axiom;
use crate::config::ReaderConfig;
use crate::filter::filter;
use crate::pager::{paginate, PAGE_SIZE};
use crate::render::{self, FilterOptions};
use crate::sort::{sort, SortDirection, SortField};
use crate::state::ViewState;
use crate::url_state;

/// A user interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReaderEvent {
    /// Source select changed; empty means "all".
    SourceSelected(String),
    /// Topic select changed; empty means "all".
    TopicSelected(String),
    /// Debounced search input.
    SearchChanged(String),
    /// A `data-sort` button was clicked.
    SortClicked(SortField),
    /// The sort-field select changed.
    SortFieldSelected(SortField),
    DirectionToggled,
    AxiomToggled { axiom: Axiom, checked: bool },
    /// A pagination button was clicked.
    PageRequested(usize),
}

impl ReaderEvent {
    fn resets_page(&self) -> bool {
        !matches!(self, Self::PageRequested(_))
    }
}

/// Everything the page needs to redraw after a state change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub status: String,
    pub list_html: String,
    pub pagination_html: String,
    /// Encoded state for the location bar.
    pub query: String,
    pub current_page: usize,
    pub total_pages: usize,
    /// Articles matching the filter.
    pub matched: usize,
    pub scroll_to_top: bool,
}

pub struct Reader {
    articles: Vec<Article>,
    options: FilterOptions,
    config: ReaderConfig,
    state: ViewState,
}

impl Reader {
    pub fn new(document: ArticleDocument, config: ReaderConfig) -> Self {
        let articles = document.articles;
        let options = FilterOptions::from_articles(&articles);
        tracing::info!(
            articles = articles.len(),
            sources = options.sources.len(),
            topics = options.topics.len(),
            "article collection loaded"
        );
        Self {
            articles,
            options,
            config,
            state: ViewState::default(),
        }
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn options(&self) -> &FilterOptions {
        &self.options
    }

    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Restore state from a location query string and draw it. A source or
    /// topic the selects do not offer is dropped, so every active rule can
    /// be cleared from the page.
    pub fn hydrate(&mut self, query: &str) -> Frame {
        let mut state = url_state::decode(query);
        self.drop_unoffered_choices(&mut state);
        self.state = state;
        self.frame()
    }

    fn drop_unoffered_choices(&self, state: &mut ViewState) {
        if let Some(source) = state.filter.source.take() {
            if self.options.offers_source(&source) {
                state.filter.source = Some(source);
            } else {
                tracing::debug!(source = %source, "dropping source not offered by the data");
            }
        }
        if let Some(topic) = state.filter.topic.take() {
            if self.options.offers_topic(&topic) {
                state.filter.topic = Some(topic);
            } else {
                tracing::debug!(topic = %topic, "dropping topic not offered by the data");
            }
        }
    }

    /// Apply an event. Returns `None` when the event changes nothing.
    pub fn dispatch(&mut self, event: ReaderEvent) -> Option<Frame> {
        tracing::debug!(?event, "reader event");
        let resets_page = event.resets_page();

        match event {
            ReaderEvent::SourceSelected(source) => {
                self.state.filter.source = non_empty(source);
            }
            ReaderEvent::TopicSelected(topic) => {
                self.state.filter.topic = non_empty(topic);
            }
            ReaderEvent::SearchChanged(search) => {
                self.state.filter.search = search;
            }
            ReaderEvent::SortClicked(field) => {
                if field == self.state.sort.field {
                    self.state.sort.direction = self.state.sort.direction.flip();
                } else {
                    self.state.sort.field = field;
                    self.state.sort.direction = SortDirection::Descending;
                }
            }
            ReaderEvent::SortFieldSelected(field) => {
                self.state.sort.field = field;
            }
            ReaderEvent::DirectionToggled => {
                self.state.sort.direction = self.state.sort.direction.flip();
            }
            ReaderEvent::AxiomToggled { axiom, checked } => {
                if checked {
                    self.state.filter.axioms.insert(axiom);
                } else {
                    self.state.filter.axioms.remove(&axiom);
                }
            }
            ReaderEvent::PageRequested(page) => {
                if page < 1 || page == self.state.page {
                    return None;
                }
                self.state.page = page;
                let mut frame = self.frame();
                frame.scroll_to_top = true;
                return Some(frame);
            }
        }

        if resets_page {
            self.state.page = 1;
        }
        Some(self.frame())
    }

    /// Recompute the view from the full collection. Clamps the page number
    /// into range and writes it back into the state.
    pub fn frame(&mut self) -> Frame {
        let mut matched = filter(&self.articles, &self.state.filter);
        sort(&mut matched, &self.state.sort);

        let page = paginate(&matched, PAGE_SIZE, self.state.page);
        self.state.page = page.current_page;

        tracing::debug!(
            matched = page.total_items,
            total = self.articles.len(),
            page = page.current_page,
            pages = page.total_pages,
            "view recomputed"
        );

        Frame {
            status: render::status_line(
                page.total_items,
                self.articles.len(),
                page.current_page,
                page.total_pages,
            ),
            list_html: render::render_list(page.items, self.config.detail_toggle),
            pagination_html: render::render_pagination(page.current_page, page.total_pages),
            query: url_state::encode(&self.state),
            current_page: page.current_page,
            total_pages: page.total_pages,
            matched: page.total_items,
            scroll_to_top: false,
        }
    }

    pub fn query_string(&self) -> String {
        url_state::encode(&self.state)
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}
