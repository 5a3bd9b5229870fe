//! Query descriptor and the search pipeline.
//!
//! The pipeline is strictly ordered: filter, sort, paginate, then an
//! optional aggregation over the filtered (pre-pagination) set. Each call
//! is a pure function of the snapshot and the descriptor; no state is
//! carried between searches.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::{Result, TrackerError};
use crate::model::{Issue, SortField, SortOrder};

/// Fields to update on an issue. Only supplied fields are overwritten.
#[derive(Debug, Clone, Default)]
pub struct IssueUpdate {
    pub title: Option<String>,
    pub category_id: Option<String>,
    pub assignee_name: Option<String>,
}

impl IssueUpdate {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none() && self.category_id.is_none() && self.assignee_name.is_none()
    }
}

/// Validated search descriptor.
#[derive(Debug, Clone)]
pub struct IssueQuery {
    /// Exact category filter.
    pub category_id: Option<String>,
    /// Exact assignee filter (no case-folding).
    pub assignee_name: Option<String>,
    /// Case-sensitive title substring filter.
    pub title_contains: Option<String>,
    /// Sort key; absent keeps insertion order.
    pub sort_by: Option<SortField>,
    pub order: SortOrder,
    /// 1-based page number.
    pub page: u32,
    pub per_page: u32,
    pub include_stats: bool,
}

impl Default for IssueQuery {
    fn default() -> Self {
        Self {
            category_id: None,
            assignee_name: None,
            title_contains: None,
            sort_by: None,
            order: SortOrder::Asc,
            page: 1,
            per_page: 10,
            include_stats: false,
        }
    }
}

/// Pagination metadata. `total` counts the filtered set before pagination.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SearchMeta {
    pub page: u32,
    pub per_page: u32,
    pub total: usize,
}

/// Aggregate statistics over the filtered set.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SearchStats {
    pub total_count: usize,
    /// Match count per category id. Categories with no matches are absent.
    pub counts_per_category: BTreeMap<String, usize>,
}

/// One page of search results plus metadata and optional statistics.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResult {
    pub items: Vec<Issue>,
    pub meta: SearchMeta,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<SearchStats>,
}

/// Run a search over a snapshot of active issues.
///
/// The snapshot is expected in insertion order; that order is the
/// tie-break for equal sort keys and the result order when no sort key
/// is given. A page past the end of the filtered set yields an empty
/// item list, not an error.
///
/// # Errors
///
/// Returns `InvalidPage` or `InvalidPerPage` for zero paging values.
pub fn search(snapshot: &[&Issue], query: &IssueQuery) -> Result<SearchResult> {
    if query.page == 0 {
        return Err(TrackerError::InvalidPage { page: query.page });
    }
    if query.per_page == 0 {
        return Err(TrackerError::InvalidPerPage {
            per_page: query.per_page,
        });
    }

    let mut matches: Vec<&Issue> = snapshot
        .iter()
        .copied()
        .filter(|issue| matches_query(issue, query))
        .collect();

    if let Some(field) = query.sort_by {
        sort_matches(&mut matches, field, query.order);
    }

    let total = matches.len();
    let start = (query.page as usize - 1).saturating_mul(query.per_page as usize);
    let end = start.saturating_add(query.per_page as usize).min(total);
    let items: Vec<Issue> = if start >= total {
        Vec::new()
    } else {
        matches[start..end].iter().map(|issue| (*issue).clone()).collect()
    };

    let stats = query.include_stats.then(|| aggregate(&matches));

    Ok(SearchResult {
        items,
        meta: SearchMeta {
            page: query.page,
            per_page: query.per_page,
            total,
        },
        stats,
    })
}

/// All supplied predicates must match; absent predicates impose nothing.
fn matches_query(issue: &Issue, query: &IssueQuery) -> bool {
    if let Some(ref category_id) = query.category_id {
        if issue.category_id != *category_id {
            return false;
        }
    }

    if let Some(ref assignee) = query.assignee_name {
        if issue.assignee_name.as_deref() != Some(assignee.as_str()) {
            return false;
        }
    }

    if let Some(ref needle) = query.title_contains {
        if !issue.title.contains(needle.as_str()) {
            return false;
        }
    }

    true
}

/// Stable sort; the comparator is reversed for descending order so that
/// equal keys keep their filter order in both directions.
fn sort_matches(matches: &mut [&Issue], field: SortField, order: SortOrder) {
    matches.sort_by(|a, b| {
        let ordering = match field {
            SortField::Title => a.title.cmp(&b.title),
            // None orders before any assigned name ascending.
            SortField::AssigneeName => a.assignee_name.cmp(&b.assignee_name),
        };
        match order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });
}

fn aggregate(matches: &[&Issue]) -> SearchStats {
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for issue in matches {
        *counts.entry(issue.category_id.clone()).or_insert(0) += 1;
    }
    SearchStats {
        total_count: matches.len(),
        counts_per_category: counts,
    }
}
