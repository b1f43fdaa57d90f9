use super::*;

#[test]
fn no_command_is_none() {
    let cli = Cli::try_parse_from(["laundro-cli"]).expect("expected valid cli args");
    assert!(cli.command.is_none());
    assert!(!cli.json);
}

#[test]
fn parses_branches_list_without_filters() {
    let cli = Cli::try_parse_from(["laundro-cli", "branches", "list"])
        .expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Some(Commands::Branches {
            command: BranchCommands::List {
                district: None,
                hours: None,
                ref services,
                search: None,
            }
        }) if services.is_empty()
    ));
}

#[test]
fn parses_repeated_service_flags() {
    let cli = Cli::try_parse_from([
        "laundro-cli",
        "branches",
        "list",
        "--service",
        "Wi-Fi",
        "--service",
        "Detergent",
        "--search",
        "emart",
    ])
    .expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Some(Commands::Branches {
            command: BranchCommands::List {
                ref services,
                search: Some(ref s),
                ..
            }
        }) if services == &["Wi-Fi", "Detergent"] && s == "emart"
    ));
}

#[test]
fn parses_branches_show_with_id() {
    let cli = Cli::try_parse_from(["laundro-cli", "branches", "show", "zaisan"])
        .expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Some(Commands::Branches {
            command: BranchCommands::Show { ref id }
        }) if id == "zaisan"
    ));
}

#[test]
fn branches_show_requires_id() {
    assert!(Cli::try_parse_from(["laundro-cli", "branches", "show"]).is_err());
}

#[test]
fn parses_branches_map_without_id() {
    let cli = Cli::try_parse_from(["laundro-cli", "branches", "map"])
        .expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Some(Commands::Branches {
            command: BranchCommands::Map { id: None }
        })
    ));
}

#[test]
fn global_flags_follow_subcommands() {
    let cli = Cli::try_parse_from([
        "laundro-cli",
        "branches",
        "districts",
        "--json",
        "--catalog",
        "config/branches.yaml",
    ])
    .expect("expected valid cli args");
    assert!(cli.json);
    assert_eq!(
        cli.catalog.as_deref(),
        Some(std::path::Path::new("config/branches.yaml"))
    );
    assert!(matches!(
        cli.command,
        Some(Commands::Branches {
            command: BranchCommands::Districts
        })
    ));
}

#[test]
fn parses_chat_text() {
    let cli = Cli::try_parse_from(["laundro-cli", "chat", "хэдэн цагаас онгойх вэ"])
        .expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Some(Commands::Chat { ref text }) if text == "хэдэн цагаас онгойх вэ"
    ));
}

#[test]
fn unknown_subcommand_is_rejected() {
    assert!(Cli::try_parse_from(["laundro-cli", "db", "ping"]).is_err());
}

#[test]
fn load_directory_without_path_uses_builtin() {
    let directory = load_directory(None).expect("builtin directory");
    assert_eq!(directory, laundro_core::builtin_directory());
}

#[test]
fn load_directory_reports_missing_file() {
    let err = load_directory(Some(std::path::Path::new("/nonexistent/branches.yaml")))
        .expect_err("missing file should fail");
    assert!(err.to_string().contains("/nonexistent/branches.yaml"));
    assert!(err
        .chain()
        .any(|cause| matches!(
            cause.downcast_ref::<laundro_core::CatalogError>(),
            Some(laundro_core::CatalogError::Io { .. })
        )));
}
