//! Filter + selection state for one consumer of the branch directory.

use serde::{Deserialize, Serialize};

use crate::branch::BranchRecord;
use crate::catalog::BranchDirectory;
use crate::filter::{filter_branches, FilterCriteria};

/// At most one selected branch, held by id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "branch_id", rename_all = "snake_case")]
pub enum Selection {
    #[default]
    Unselected,
    Selected(String),
}

impl Selection {
    #[must_use]
    pub fn branch_id(&self) -> Option<&str> {
        match self {
            Selection::Unselected => None,
            Selection::Selected(id) => Some(id.as_str()),
        }
    }
}

/// Serializable snapshot of a session's mutable state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    #[serde(default)]
    pub criteria: FilterCriteria,
    #[serde(default)]
    pub selection: Selection,
}

/// A filtering/selection session over a shared, read-only directory.
///
/// Every operation is synchronous and total: unknown ids and unmapped
/// branches degrade to "nothing selected" and the default map locator.
#[derive(Debug, Clone)]
pub struct DirectorySession<'a> {
    directory: &'a BranchDirectory,
    state: SessionState,
}

impl<'a> DirectorySession<'a> {
    #[must_use]
    pub fn new(directory: &'a BranchDirectory) -> Self {
        Self::restore(directory, SessionState::default())
    }

    #[must_use]
    pub fn restore(directory: &'a BranchDirectory, state: SessionState) -> Self {
        Self { directory, state }
    }

    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    #[must_use]
    pub fn into_state(self) -> SessionState {
        self.state
    }

    #[must_use]
    pub fn criteria(&self) -> &FilterCriteria {
        &self.state.criteria
    }

    pub fn criteria_mut(&mut self) -> &mut FilterCriteria {
        &mut self.state.criteria
    }

    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        self.state.criteria = criteria;
    }

    /// Branches matching the current criteria, in catalog order.
    #[must_use]
    pub fn visible(&self) -> Vec<&'a BranchRecord> {
        filter_branches(self.directory.catalog.all_branches(), &self.state.criteria)
    }

    /// Selects `id`. Re-selecting the current branch keeps it selected.
    pub fn select(&mut self, id: impl Into<String>) {
        self.state.selection = Selection::Selected(id.into());
    }

    pub fn deselect(&mut self) {
        self.state.selection = Selection::Unselected;
    }

    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.state.selection
    }

    /// The selected branch, or `None` when nothing is selected or the id is
    /// not in the catalog.
    #[must_use]
    pub fn current_selection(&self) -> Option<&'a BranchRecord> {
        let directory: &'a BranchDirectory = self.directory;
        self.state
            .selection
            .branch_id()
            .and_then(|id| directory.catalog.get(id))
    }

    /// Map embed for the current selection; the default locator otherwise.
    #[must_use]
    pub fn map_locator(&self) -> &'a str {
        let directory: &'a BranchDirectory = self.directory;
        directory.locators.resolve(self.current_selection())
    }
}
