use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::branch::{BranchRecord, Service};
use crate::locator::LocatorMapping;
use crate::CatalogError;

/// Immutable, ordered collection of branches with memoized projections.
#[derive(Debug, Clone, PartialEq)]
pub struct BranchCatalog {
    branches: Vec<BranchRecord>,
    districts: Vec<String>,
    services: Vec<String>,
}

impl BranchCatalog {
    #[must_use]
    pub fn new(branches: Vec<BranchRecord>) -> Self {
        let districts = branches
            .iter()
            .map(|b| b.district.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let mut services: Vec<String> = Vec::new();
        for service in branches.iter().flat_map(|b| &b.services) {
            if !services.contains(service) {
                services.push(service.clone());
            }
        }

        Self {
            branches,
            districts,
            services,
        }
    }

    #[must_use]
    pub fn all_branches(&self) -> &[BranchRecord] {
        &self.branches
    }

    /// Distinct districts, sorted lexicographically.
    #[must_use]
    pub fn districts(&self) -> &[String] {
        &self.districts
    }

    /// Union of every branch's services in order of first appearance.
    #[must_use]
    pub fn all_services(&self) -> &[String] {
        &self.services
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&BranchRecord> {
        self.branches.iter().find(|b| b.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.branches.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.branches.is_empty()
    }
}

/// The shared read-only data behind every directory session.
#[derive(Debug, Clone, PartialEq)]
pub struct BranchDirectory {
    pub catalog: BranchCatalog,
    pub locators: LocatorMapping,
}

/// On-disk catalog format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogFile {
    pub default_map_embed: String,
    #[serde(default)]
    pub map_embeds: BTreeMap<String, String>,
    pub branches: Vec<BranchRecord>,
}

impl From<CatalogFile> for BranchDirectory {
    fn from(file: CatalogFile) -> Self {
        Self {
            catalog: BranchCatalog::new(file.branches),
            locators: LocatorMapping::new(file.default_map_embed, file.map_embeds),
        }
    }
}

/// The directory compiled into the binary.
#[must_use]
pub fn builtin_directory() -> BranchDirectory {
    BranchDirectory {
        catalog: BranchCatalog::new(crate::builtin::branches()),
        locators: LocatorMapping::new(
            crate::builtin::DEFAULT_MAP_EMBED,
            crate::builtin::map_embeds(),
        ),
    }
}

/// Load and validate a branch directory from a YAML file.
///
/// # Errors
///
/// Returns `CatalogError` if the file cannot be read, parsed, or fails validation.
pub fn load_directory(path: &Path) -> Result<BranchDirectory, CatalogError> {
    let content = std::fs::read_to_string(path).map_err(|e| CatalogError::Io {
        path: path.display().to_string(),
        source: e,
    })?;

    let file: CatalogFile = serde_yaml::from_str(&content)?;

    validate_catalog(&file)?;

    Ok(file.into())
}

fn validate_catalog(file: &CatalogFile) -> Result<(), CatalogError> {
    if file.default_map_embed.trim().is_empty() {
        return Err(CatalogError::Validation(
            "default_map_embed must be non-empty".to_string(),
        ));
    }

    let mut seen_ids = HashSet::new();

    for branch in &file.branches {
        if branch.id.trim().is_empty() {
            return Err(CatalogError::Validation(
                "branch id must be non-empty".to_string(),
            ));
        }

        if branch.name.trim().is_empty() {
            return Err(CatalogError::Validation(format!(
                "branch '{}' has an empty name",
                branch.id
            )));
        }

        if !seen_ids.insert(branch.id.as_str()) {
            return Err(CatalogError::Validation(format!(
                "duplicate branch id: '{}'",
                branch.id
            )));
        }

        let mut seen_services = HashSet::new();
        for service in &branch.services {
            if Service::parse(service).is_none() {
                return Err(CatalogError::Validation(format!(
                    "branch '{}' lists unknown service '{service}'",
                    branch.id
                )));
            }
            if !seen_services.insert(service.as_str()) {
                return Err(CatalogError::Validation(format!(
                    "branch '{}' lists service '{service}' more than once",
                    branch.id
                )));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;
