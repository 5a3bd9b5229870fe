//! In-memory issue store backed by `HashMap` with an insertion-order index.
//!
//! Sole owner of issue lifecycle state. All mutation goes through the
//! explicit entry points below, which hand out owned copies; callers never
//! hold a live reference into the store across a mutation.

use std::collections::HashMap;

use chrono::Utc;
use tracing::debug;

use crate::catalog::DeportmentCatalog;
use crate::error::{Result, TrackerError};
use crate::model::Issue;
use crate::query::IssueUpdate;

/// Fields supplied when creating an issue.
#[derive(Debug, Clone)]
pub struct NewIssue {
    pub title: String,
    pub category_id: String,
    pub assignee_name: Option<String>,
}

/// In-memory issue store.
///
/// Ids are never reused: soft-deleted issues stay resident (and keep their
/// slot in the insertion-order index) but are invisible to every read path.
pub struct IssueStore {
    issues: HashMap<String, Issue>,
    // Insertion order of ids; entries are never removed.
    order: Vec<String>,
    catalog: DeportmentCatalog,
    prefix: String,
}

impl IssueStore {
    /// Create an empty store validating against the given catalog.
    #[must_use]
    pub fn new(catalog: DeportmentCatalog) -> Self {
        Self {
            issues: HashMap::new(),
            order: Vec::new(),
            catalog,
            prefix: "it".to_string(),
        }
    }

    /// Set the ID prefix for new issues.
    pub fn set_prefix(&mut self, prefix: impl Into<String>) {
        self.prefix = prefix.into();
    }

    /// Get the ID prefix.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// The read-only deportment catalog this store validates against.
    #[must_use]
    pub fn catalog(&self) -> &DeportmentCatalog {
        &self.catalog
    }

    // ========================================================================
    // CRUD
    // ========================================================================

    /// Create a new issue and return an owned copy of the stored record.
    ///
    /// # Errors
    ///
    /// Returns `Validation` if the title is blank, or `InvalidReference`
    /// if the category is not in the catalog.
    pub fn create(&mut self, new_issue: &NewIssue) -> Result<Issue> {
        if new_issue.title.trim().is_empty() {
            return Err(TrackerError::validation("title", "cannot be empty"));
        }
        if !self.catalog.contains(&new_issue.category_id) {
            return Err(TrackerError::InvalidReference {
                category_id: new_issue.category_id.clone(),
            });
        }

        let now = Utc::now();
        let id = crate::util::generate_id(&self.prefix, &new_issue.title, now, |candidate| {
            self.issues.contains_key(candidate)
        });

        let issue = Issue {
            id: id.clone(),
            title: new_issue.title.clone(),
            category_id: new_issue.category_id.clone(),
            assignee_name: new_issue.assignee_name.clone(),
            is_deleted: false,
            created_at: now,
            updated_at: now,
        };

        self.issues.insert(id.clone(), issue.clone());
        self.order.push(id.clone());

        debug!(id = %id, category_id = %issue.category_id, "issue created");
        Ok(issue)
    }

    /// Get a single issue by ID.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the issue doesn't exist or is soft-deleted.
    pub fn get(&self, id: &str) -> Result<&Issue> {
        self.issues
            .get(id)
            .filter(|issue| !issue.is_deleted)
            .ok_or_else(|| TrackerError::NotFound { id: id.to_string() })
    }

    /// All non-deleted issues, in insertion order.
    #[must_use]
    pub fn list_active(&self) -> Vec<&Issue> {
        self.order
            .iter()
            .filter_map(|id| self.issues.get(id))
            .filter(|issue| !issue.is_deleted)
            .collect()
    }

    /// Apply a partial update and return an owned copy of the new record.
    ///
    /// Validation completes before any field is written, so a failed
    /// update leaves the record untouched.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` under the same rule as [`Self::get`],
    /// `Validation` for a blank supplied title, or `InvalidReference`
    /// for an unknown supplied category.
    pub fn update(&mut self, id: &str, update: &IssueUpdate) -> Result<Issue> {
        self.get(id)?;

        if let Some(ref title) = update.title {
            if title.trim().is_empty() {
                return Err(TrackerError::validation("title", "cannot be empty"));
            }
        }
        if let Some(ref category_id) = update.category_id {
            if !self.catalog.contains(category_id) {
                return Err(TrackerError::InvalidReference {
                    category_id: category_id.clone(),
                });
            }
        }

        let issue = self
            .issues
            .get_mut(id)
            .ok_or_else(|| TrackerError::NotFound { id: id.to_string() })?;

        if let Some(ref title) = update.title {
            issue.title.clone_from(title);
        }
        if let Some(ref category_id) = update.category_id {
            issue.category_id.clone_from(category_id);
        }
        if let Some(ref assignee) = update.assignee_name {
            issue.assignee_name = Some(assignee.clone());
        }
        issue.updated_at = Utc::now();

        debug!(id = %id, "issue updated");
        Ok(issue.clone())
    }

    /// Soft-delete an issue. There is no un-delete.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the issue doesn't exist or is already
    /// soft-deleted, so a second delete of the same id fails.
    pub fn soft_delete(&mut self, id: &str) -> Result<()> {
        let issue = self
            .issues
            .get_mut(id)
            .filter(|issue| !issue.is_deleted)
            .ok_or_else(|| TrackerError::NotFound { id: id.to_string() })?;

        issue.is_deleted = true;
        issue.updated_at = Utc::now();

        debug!(id = %id, "issue soft-deleted");
        Ok(())
    }

    /// Total number of stored records, including soft-deleted ones.
    #[must_use]
    pub fn len(&self) -> usize {
        self.issues.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }
}
