//! Branch directory command handlers for the CLI.
//!
//! Each handler opens a fresh [`DirectorySession`] over the loaded directory,
//! so filters and selection never outlive a single invocation.

use clap::Subcommand;
use laundro_core::{BranchDirectory, BranchRecord, DirectorySession, FilterCriteria};

/// Sub-commands available under `branches`.
#[derive(Debug, Subcommand)]
pub enum BranchCommands {
    /// List branches matching every given filter
    List {
        /// Exact district name, or "all"
        #[arg(long)]
        district: Option<String>,
        /// Exact opening-hours string, or "all"
        #[arg(long)]
        hours: Option<String>,
        /// Required service key; repeat to require several
        #[arg(long = "service")]
        services: Vec<String>,
        /// Case-insensitive text matched against name, address and district
        #[arg(long)]
        search: Option<String>,
    },
    /// List distinct districts in sorted order
    Districts,
    /// List every offered service in catalog order
    Services,
    /// Show a single branch
    Show {
        /// Branch id (e.g. sansar)
        id: String,
    },
    /// Print the map embed for a branch, or the city-wide default
    Map {
        /// Branch id; omit for the default map
        id: Option<String>,
    },
}

pub(crate) fn criteria_from_args(
    district: Option<&str>,
    hours: Option<&str>,
    services: &[String],
    search: Option<&str>,
) -> FilterCriteria {
    let mut criteria = FilterCriteria::from_parts(district, hours, None, search);
    criteria.services.extend(
        services
            .iter()
            .map(String::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(ToOwned::to_owned),
    );
    criteria
}

pub(crate) fn render_table(branches: &[&BranchRecord]) -> String {
    let mut out = format!(
        "{:<16}{:<26}{:<12}{:<14}SERVICES",
        "ID", "NAME", "DISTRICT", "HOURS"
    );
    for branch in branches {
        out.push('\n');
        out.push_str(&format!(
            "{:<16}{:<26}{:<12}{:<14}{}",
            branch.id,
            branch.display_name(),
            branch.district,
            branch.hours,
            branch.services.join(", ")
        ));
    }
    out
}

pub(crate) fn render_detail(branch: &BranchRecord, map_locator: &str) -> String {
    let services = if branch.services.is_empty() {
        "\u{2014}".to_string()
    } else {
        branch.services.join(", ")
    };
    [
        format!("{} ({})", branch.display_name(), branch.id),
        format!("address:  {}", branch.address),
        format!("district: {}", branch.district),
        format!("hours:    {}", branch.hours),
        format!("phone:    {}", branch.phone),
        format!("services: {services}"),
        format!(
            "location: {:.4}, {:.4}",
            branch.coordinates.lat, branch.coordinates.lng
        ),
        format!("map:      {map_locator}"),
    ]
    .join("\n")
}

/// Dispatches a `branches` sub-command.
///
/// # Errors
///
/// Returns an error if `show` names an unknown branch or JSON output fails
/// to serialize.
pub(crate) fn run(
    directory: &BranchDirectory,
    command: BranchCommands,
    json: bool,
) -> anyhow::Result<()> {
    let mut session = DirectorySession::new(directory);

    match command {
        BranchCommands::List {
            district,
            hours,
            services,
            search,
        } => {
            session.set_criteria(criteria_from_args(
                district.as_deref(),
                hours.as_deref(),
                &services,
                search.as_deref(),
            ));
            let visible = session.visible();
            tracing::debug!(visible = visible.len(), "filtered branch directory");

            if json {
                println!("{}", serde_json::to_string_pretty(&visible)?);
            } else if visible.is_empty() {
                println!("no branches match the given filters");
            } else {
                println!("{}", render_table(&visible));
            }
        }
        BranchCommands::Districts => {
            let districts = directory.catalog.districts();
            if json {
                println!("{}", serde_json::to_string_pretty(districts)?);
            } else {
                districts.iter().for_each(|d| println!("{d}"));
            }
        }
        BranchCommands::Services => {
            let services = directory.catalog.all_services();
            if json {
                println!("{}", serde_json::to_string_pretty(services)?);
            } else {
                services.iter().for_each(|s| println!("{s}"));
            }
        }
        BranchCommands::Show { id } => {
            session.select(id.as_str());
            let branch = session
                .current_selection()
                .ok_or_else(|| anyhow::anyhow!("branch '{id}' not found"))?;

            if json {
                println!("{}", serde_json::to_string_pretty(branch)?);
            } else {
                println!("{}", render_detail(branch, session.map_locator()));
            }
        }
        BranchCommands::Map { id } => {
            if let Some(id) = id {
                session.select(id);
            }
            if session.current_selection().is_none() && session.selection().branch_id().is_some() {
                tracing::warn!("unknown branch id; showing the default map");
            }
            let locator = session.map_locator();
            if json {
                let payload = serde_json::json!({
                    "branch_id": session.current_selection().map(|b| b.id.as_str()),
                    "locator": locator,
                });
                println!("{}", serde_json::to_string_pretty(&payload)?);
            } else {
                println!("{locator}");
            }
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "branches_test.rs"]
mod tests;
