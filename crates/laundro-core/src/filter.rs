//! Multi-predicate branch filtering.
//!
//! A branch is visible when it passes every active dimension: district,
//! hours, requested services (all must be offered) and free-text search over
//! name, address and district. Filtering is stable: the result keeps catalog
//! order and is never re-sorted.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::branch::BranchRecord;

/// Sentinel accepted from user input for "no constraint on this dimension".
pub const ALL: &str = "all";

/// User-editable filter state. `None` for district/hours means "all".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub district: Option<String>,
    pub hours: Option<String>,
    /// Every listed service must be offered. Empty means no constraint.
    #[serde(default)]
    pub services: BTreeSet<String>,
    #[serde(default)]
    pub search_text: String,
}

impl FilterCriteria {
    /// Builds criteria from raw user input.
    ///
    /// `"all"` (any case) and blank strings mean "unconstrained". `services`
    /// is a comma-separated list of service keys. `search_text` is kept as
    /// typed; only an empty string leaves search unconstrained.
    #[must_use]
    pub fn from_parts(
        district: Option<&str>,
        hours: Option<&str>,
        services: Option<&str>,
        search_text: Option<&str>,
    ) -> Self {
        Self {
            district: choice(district),
            hours: choice(hours),
            services: services.map(split_services).unwrap_or_default(),
            search_text: search_text.unwrap_or_default().to_string(),
        }
    }

    /// Returns `true` when no dimension is constrained.
    #[must_use]
    pub fn is_unconstrained(&self) -> bool {
        constraint(self.district.as_deref()).is_none()
            && constraint(self.hours.as_deref()).is_none()
            && self.services.is_empty()
            && self.search_text.is_empty()
    }

    /// Tests a single branch against every active dimension.
    #[must_use]
    pub fn matches(&self, branch: &BranchRecord) -> bool {
        self.matches_district(branch)
            && self.matches_hours(branch)
            && self.matches_services(branch)
            && self.matches_search(branch)
    }

    fn matches_district(&self, branch: &BranchRecord) -> bool {
        constraint(self.district.as_deref()).is_none_or(|district| branch.district == district)
    }

    fn matches_hours(&self, branch: &BranchRecord) -> bool {
        constraint(self.hours.as_deref()).is_none_or(|hours| branch.hours == hours)
    }

    fn matches_services(&self, branch: &BranchRecord) -> bool {
        self.services.iter().all(|service| branch.offers(service))
    }

    fn matches_search(&self, branch: &BranchRecord) -> bool {
        if self.search_text.is_empty() {
            return true;
        }
        let needle = self.search_text.to_lowercase();
        [&branch.name, &branch.address, &branch.district]
            .into_iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}

/// Returns the branches that satisfy `criteria`, in catalog order.
#[must_use]
pub fn filter_branches<'a>(
    branches: &'a [BranchRecord],
    criteria: &FilterCriteria,
) -> Vec<&'a BranchRecord> {
    branches.iter().filter(|b| criteria.matches(b)).collect()
}

/// The active value of a district/hours choice. Criteria built by hand or
/// restored from JSON may still carry the `"all"` sentinel or a blank.
fn constraint(value: Option<&str>) -> Option<&str> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty() && !v.eq_ignore_ascii_case(ALL))
}

fn choice(raw: Option<&str>) -> Option<String> {
    constraint(raw).map(ToOwned::to_owned)
}

fn split_services(raw: &str) -> BTreeSet<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

#[cfg(test)]
#[path = "filter_test.rs"]
mod tests;
