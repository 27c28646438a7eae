//! CLI argument parsing tests.

use clap::Parser;
use docsapi::cli::{Cli, Command, Entity};

#[test]
fn test_cli_parses_get_subcommand() {
    let cli = Cli::parse_from(["docsapi", "get", "article", "521632244566c845e9b8ff1e"]);

    assert!(!cli.json);
    match cli.command {
        Command::Get { entity, id, draft } => {
            assert_eq!(entity, Entity::Article);
            assert_eq!(id, "521632244566c845e9b8ff1e");
            assert!(!draft);
        }
        _ => panic!("Expected Get command"),
    }
}

#[test]
fn test_get_draft_flag() {
    let cli = Cli::parse_from(["docsapi", "get", "article", "93", "--draft"]);

    match cli.command {
        Command::Get { draft, .. } => assert!(draft),
        _ => panic!("Expected Get command"),
    }
}

#[test]
fn test_cli_parses_list_subcommand() {
    let cli = Cli::parse_from(["docsapi", "list", "categories", "--parent", "col-1"]);

    match cli.command {
        Command::List { entity, parent, .. } => {
            assert_eq!(entity, Entity::Category);
            assert_eq!(parent.as_deref(), Some("col-1"));
        }
        _ => panic!("Expected List command"),
    }
}

#[test]
fn test_list_paging_and_sort_args() {
    let cli = Cli::parse_from([
        "docsapi",
        "list",
        "articles",
        "--parent",
        "cat-1",
        "--page",
        "2",
        "--sort",
        "updatedAt",
        "--order",
        "desc",
        "--status",
        "published",
    ]);

    match cli.command {
        Command::List {
            entity,
            page,
            sort,
            order,
            status,
            ..
        } => {
            assert_eq!(entity, Entity::Article);
            assert_eq!(page, Some(2));
            assert_eq!(sort.as_deref(), Some("updatedAt"));
            assert_eq!(order.as_deref(), Some("desc"));
            assert_eq!(status.as_deref(), Some("published"));
        }
        _ => panic!("Expected List command"),
    }
}

#[test]
fn test_search_defaults_to_wildcard() {
    let cli = Cli::parse_from(["docsapi", "search"]);

    match cli.command {
        Command::Search {
            query,
            page,
            collection,
        } => {
            assert_eq!(query, "*");
            assert_eq!(page, None);
            assert_eq!(collection, None);
        }
        _ => panic!("Expected Search command"),
    }

    let cli = Cli::parse_from(["docsapi", "search", "billing", "--collection", "col-1"]);
    match cli.command {
        Command::Search {
            query, collection, ..
        } => {
            assert_eq!(query, "billing");
            assert_eq!(collection.as_deref(), Some("col-1"));
        }
        _ => panic!("Expected Search command"),
    }
}

#[test]
fn test_cli_parses_delete_subcommand() {
    let cli = Cli::parse_from(["docsapi", "delete", "site", "s-1"]);

    match cli.command {
        Command::Delete { entity, id } => {
            assert_eq!(entity, Entity::Site);
            assert_eq!(id, "s-1");
        }
        _ => panic!("Expected Delete command"),
    }
}

#[test]
fn test_global_json_flag() {
    // --json before subcommand
    let cli = Cli::parse_from(["docsapi", "--json", "list", "sites"]);
    assert!(cli.json);

    // --json after subcommand (global flag)
    let cli = Cli::parse_from(["docsapi", "list", "sites", "--json"]);
    assert!(cli.json);
}

#[test]
fn test_entity_aliases() {
    for (name, expected) in [
        ("site", Entity::Site),
        ("sites", Entity::Site),
        ("collections", Entity::Collection),
        ("revision", Entity::Revision),
        ("revisions", Entity::Revision),
    ] {
        let cli = Cli::parse_from(["docsapi", "list", name]);
        match cli.command {
            Command::List { entity, .. } => assert_eq!(entity, expected),
            _ => panic!("Expected List command"),
        }
    }
}

#[test]
fn test_unknown_entity_rejected() {
    let result = Cli::try_parse_from(["docsapi", "get", "widget", "1"]);
    assert!(result.is_err());
}
