//! # Dashboard Module
//!
//! Non-chat parts of the tracker: the pipeline charts and the idea
//! repository search.

pub mod charts;
pub mod search;

pub use charts::{static_charts, ChartKind, ChartRenderer, ChartSpec, Dashboard};
pub use search::{CardMetrics, IdeaRecord, IdeaSearch, SearchFilters};
