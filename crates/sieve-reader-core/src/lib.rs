//! sieve-reader-core: the article reader pipeline
//!
//! Filters, sorts and paginates a scored article collection, renders the
//! visible page as HTML fragments and mirrors the view state into a URL
//! query string. Everything except [`source`] is pure and synchronous.
//!
//! ```text
//! source ──load once──▶ Reader ──filter──▶ sort ──▶ paginate ──▶ render
//!                         ▲                                       │
//!                         └──── url_state::decode / encode ◀──────┘
//! ```

pub mod article;
pub mod axiom;
pub mod config;
pub mod debounce;
pub mod error;
pub mod filter;
pub mod pager;
pub mod reader;
pub mod render;
pub mod sort;
pub mod source;
pub mod state;
pub mod topic;
pub mod url_state;

pub use article::{Article, ArticleDocument, ArticleId, AxiomScores};
pub use axiom::{Axiom, MAX_AXIOM_SCORE};
pub use config::{DetailToggle, ElementIds, ReaderConfig};
pub use debounce::Debounce;
pub use error::{ConfigError, LoadError, Result};
pub use filter::{filter, FilterSpec};
pub use pager::{paginate, Page, PageWindow, PAGE_SIZE};
pub use reader::{Frame, Reader, ReaderEvent};
pub use sort::{sort, SortDirection, SortField, SortSpec};
pub use source::{parse_document, ArticleSource, FileSource};
pub use state::ViewState;
pub use topic::{humanize, topic_label};
