//! Static deportment reference table.
//!
//! Read-only: seeded once at construction, never mutated afterwards.

use crate::model::Deportment;

/// Lookup table of deportments, fixed at process start.
#[derive(Debug, Clone)]
pub struct DeportmentCatalog {
    entries: Vec<Deportment>,
}

impl DeportmentCatalog {
    /// The built-in table served by the tracker.
    #[must_use]
    pub fn builtin() -> Self {
        Self::from_entries(vec![
            Deportment {
                id: "111".to_string(),
                name: "HR".to_string(),
                description: "Human Resources".to_string(),
            },
            Deportment {
                id: "222".to_string(),
                name: "Finance".to_string(),
                description: "Finance & Accounts".to_string(),
            },
            Deportment {
                id: "333".to_string(),
                name: "IT".to_string(),
                description: "Information Technology".to_string(),
            },
        ])
    }

    /// Build a catalog from explicit entries, listed in id order.
    #[must_use]
    pub fn from_entries(mut entries: Vec<Deportment>) -> Self {
        entries.sort_by(|a, b| a.id.cmp(&b.id));
        Self { entries }
    }

    /// Look up a deportment by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Deportment> {
        self.entries.iter().find(|d| d.id == id)
    }

    /// Check whether an id references an existing deportment.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// All deportments, in id order.
    #[must_use]
    pub fn list(&self) -> &[Deportment] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
