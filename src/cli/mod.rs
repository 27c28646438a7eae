//! CLI argument parsing types.
//!
//! This module provides the command-line interface structure for the docsapi binary.

use clap::{Parser, Subcommand, ValueEnum};

/// Help Scout Docs API command-line interface.
#[derive(Parser, Debug)]
#[command(name = "docsapi", about = "Help Scout Docs API CLI", version)]
pub struct Cli {
    /// Output results as JSON instead of a table.
    #[arg(long, global = true, default_value = "false")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Get a single entity by id (or number for articles, categories and collections).
    Get {
        /// The type of entity to get.
        entity: Entity,

        /// The entity id or number.
        id: String,

        /// Fetch the unpublished draft (articles only).
        #[arg(long)]
        draft: bool,
    },

    /// List entities with optional sorting and pagination.
    List {
        /// The type of entity to list.
        entity: Entity,

        /// Parent id: collection for categories, category for articles,
        /// article for revisions.
        #[arg(long)]
        parent: Option<String>,

        /// Page number (1-indexed).
        #[arg(long)]
        page: Option<u32>,

        /// Sort field (e.g. `order`, `name`, `updatedAt`).
        #[arg(long)]
        sort: Option<String>,

        /// Sort direction (`asc` or `desc`).
        #[arg(long)]
        order: Option<String>,

        /// Status filter for articles (`all`, `published`, `notpublished`).
        #[arg(long)]
        status: Option<String>,
    },

    /// Search articles.
    Search {
        /// Search text; `*` matches everything.
        #[arg(default_value = "*")]
        query: String,

        /// Page number (1-indexed).
        #[arg(long)]
        page: Option<u32>,

        /// Restrict to one collection.
        #[arg(long)]
        collection: Option<String>,
    },

    /// Delete an entity.
    Delete {
        /// The type of entity to delete.
        entity: Entity,

        /// The entity id.
        id: String,
    },
}

/// Entity types that can be operated on.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Entity {
    /// A documentation site.
    #[value(alias = "sites")]
    Site,
    /// A collection of categories.
    #[value(alias = "collections")]
    Collection,
    /// A category of articles.
    #[value(alias = "categories")]
    Category,
    /// An article.
    #[value(alias = "articles")]
    Article,
    /// An article revision.
    #[value(alias = "revisions")]
    Revision,
}
