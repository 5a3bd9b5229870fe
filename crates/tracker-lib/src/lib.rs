//! `tracker-lib` - In-process issue tracking core.
//!
//! Provides the data model, the in-memory issue store, the static
//! deportment catalog, and the search pipeline (filter, sort, paginate,
//! aggregate). No transport or persistence concerns live here; the
//! `trackd` binary wires this crate to HTTP.
//!
//! # Quick Start
//!
//! ```
//! use tracker_lib::{DeportmentCatalog, IssueQuery, IssueStore, NewIssue};
//!
//! let mut store = IssueStore::new(DeportmentCatalog::builtin());
//!
//! store.create(&NewIssue {
//!     title: "Onboard new hire".into(),
//!     category_id: "111".into(),
//!     assignee_name: Some("alice".into()),
//! }).unwrap();
//!
//! let result = tracker_lib::query::search(&store.list_active(), &IssueQuery::default()).unwrap();
//! assert_eq!(result.meta.total, 1);
//! ```

pub mod catalog;
pub mod error;
pub mod model;
pub mod query;
pub mod store;
pub mod util;

pub use catalog::DeportmentCatalog;
pub use error::{Result, TrackerError};
pub use model::{Deportment, Issue, SortField, SortOrder};
pub use query::{IssueQuery, IssueUpdate, SearchMeta, SearchResult, SearchStats};
pub use store::{IssueStore, NewIssue};
