use serde::{Deserialize, Serialize};

/// One physical laundromat location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BranchRecord {
    /// Stable unique key. Also the display-name fallback.
    pub id: String,
    pub name: String,
    /// Free-text postal description.
    pub address: String,
    /// Administrative district, e.g. `"Хан-Уул"`.
    pub district: String,
    pub coordinates: Coordinates,
    /// Operating hours, e.g. `"08:00-00:00"`.
    pub hours: String,
    pub phone: String,
    /// Service keys offered at this branch. Duplicate-free; order is the
    /// declaration order from the catalog source.
    pub services: Vec<String>,
    #[serde(default)]
    pub images: Vec<String>,
}

impl BranchRecord {
    /// Returns `true` if the branch offers the given service key.
    #[must_use]
    pub fn offers(&self, service: &str) -> bool {
        self.services.iter().any(|s| s == service)
    }

    /// Name to show for the branch, falling back to `id` when `name` is blank.
    #[must_use]
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            &self.id
        } else {
            &self.name
        }
    }
}

/// Approximate location. Informational only.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// The closed set of services a branch can advertise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Service {
    #[serde(rename = "Self-service")]
    SelfService,
    #[serde(rename = "Wash & Dry")]
    WashAndDry,
    #[serde(rename = "Wi-Fi")]
    WiFi,
    #[serde(rename = "Detergent")]
    Detergent,
}

impl Service {
    pub const ALL: [Service; 4] = [
        Service::SelfService,
        Service::WashAndDry,
        Service::WiFi,
        Service::Detergent,
    ];

    /// The key used in catalog data and filter criteria.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Service::SelfService => "Self-service",
            Service::WashAndDry => "Wash & Dry",
            Service::WiFi => "Wi-Fi",
            Service::Detergent => "Detergent",
        }
    }

    /// Maps a service key back to its variant. Exact match only.
    #[must_use]
    pub fn parse(key: &str) -> Option<Service> {
        Self::ALL.into_iter().find(|s| s.key() == key)
    }
}

impl std::fmt::Display for Service {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}
