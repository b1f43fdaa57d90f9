//! Branch → map-embed resolution.
//!
//! Mapping keys in the source data are a mix of display names and catalog
//! ids, so lookup tries `name` first, then `id`, then the city-wide default.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::branch::BranchRecord;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocatorMapping {
    /// City-wide overview embed used when nothing more specific applies.
    default: String,
    entries: BTreeMap<String, String>,
}

impl LocatorMapping {
    #[must_use]
    pub fn new(default: impl Into<String>, entries: BTreeMap<String, String>) -> Self {
        Self {
            default: default.into(),
            entries,
        }
    }

    #[must_use]
    pub fn default_locator(&self) -> &str {
        &self.default
    }

    #[must_use]
    pub fn try_name(&self, branch: &BranchRecord) -> Option<&str> {
        self.entries.get(&branch.name).map(String::as_str)
    }

    #[must_use]
    pub fn try_id(&self, branch: &BranchRecord) -> Option<&str> {
        self.entries.get(&branch.id).map(String::as_str)
    }

    /// Resolves the embed identifier for the selected branch. Never fails.
    #[must_use]
    pub fn resolve(&self, selected: Option<&BranchRecord>) -> &str {
        selected
            .and_then(|branch| self.try_name(branch).or_else(|| self.try_id(branch)))
            .unwrap_or(self.default.as_str())
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::branch::Coordinates;

    const DEFAULT: &str = "embed-default";

    fn branch(id: &str, name: &str) -> BranchRecord {
        BranchRecord {
            id: id.to_string(),
            name: name.to_string(),
            address: String::new(),
            district: "Баянзүрх".to_string(),
            coordinates: Coordinates { lat: 0.0, lng: 0.0 },
            hours: "08:00-00:00".to_string(),
            phone: String::new(),
            services: vec![],
            images: vec![],
        }
    }

    fn mapping(pairs: &[(&str, &str)]) -> LocatorMapping {
        LocatorMapping::new(
            DEFAULT,
            pairs
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect(),
        )
    }

    #[test]
    fn no_selection_resolves_to_default() {
        assert_eq!(mapping(&[("Барс", "embedA")]).resolve(None), DEFAULT);
    }

    #[test]
    fn name_key_hits_before_id_lookup() {
        let m = mapping(&[("Барс", "embedA")]);
        assert_eq!(m.resolve(Some(&branch("brs-01", "Барс"))), "embedA");
    }

    #[test]
    fn name_wins_when_both_keys_present() {
        let m = mapping(&[("Барс", "by-name"), ("brs-01", "by-id")]);
        assert_eq!(m.resolve(Some(&branch("brs-01", "Барс"))), "by-name");
    }

    #[test]
    fn falls_back_to_id_key() {
        let m = mapping(&[("brs-01", "by-id")]);
        assert_eq!(m.resolve(Some(&branch("brs-01", "Барс"))), "by-id");
    }

    #[test]
    fn unmapped_branch_resolves_to_default() {
        let m = mapping(&[("Барс", "embedA")]);
        assert_eq!(m.resolve(Some(&branch("zs-02", "Зайсан"))), DEFAULT);
    }

    #[test]
    fn both_fallback_paths_converge() {
        let m = mapping(&[]);
        assert!(m.is_empty());
        assert_eq!(m.resolve(None), m.resolve(Some(&branch("x", "y"))));
        assert_eq!(m.resolve(None), m.default_locator());
    }
}
