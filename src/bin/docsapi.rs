//! Help Scout Docs API CLI binary.
//!
//! A command-line interface for browsing and maintaining a Docs site.

use clap::Parser;
use docsapi::cli::{Cli, Command, Entity};
use docsapi::output::PrettyPrint;
use docsapi::{
    get_article, search_articles, Article, ArticleRef, ArticleRevision, ArticleRevisionRef,
    ArticleSearch, Category, Collection, Delete, DocsClient, DocsError, Get, List, Mapped, Params,
    ResourceCollection, Site,
};
use serde::Serialize;
use std::process::ExitCode;
use tabled::{Table, Tabled};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let client = match DocsClient::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("Hint: Set HELPSCOUT_DOCS_API_KEY environment variable");
            return ExitCode::FAILURE;
        }
    };

    match run(&client, cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(client: &DocsClient, cli: Cli) -> docsapi::Result<()> {
    match cli.command {
        Command::Get { entity, id, draft } => handle_get(client, entity, &id, draft, cli.json).await,
        Command::List {
            entity,
            parent,
            page,
            sort,
            order,
            status,
        } => {
            let params = Params::new()
                .page(page)
                .sort(sort)
                .order(order)
                .status(status);
            handle_list(client, entity, parent.as_deref(), &params, cli.json).await
        }
        Command::Search {
            query,
            page,
            collection,
        } => {
            let params = Params::new()
                .query(query)
                .page(page)
                .collection_id(collection);
            let hits = search_articles(client, &params).await?;
            output_collection(hits, cli.json, |a: &ArticleSearch| SearchRow::from(a))
        }
        Command::Delete { entity, id } => handle_delete(client, entity, &id).await,
    }
}

async fn handle_get(
    client: &DocsClient,
    entity: Entity,
    id: &str,
    draft: bool,
    json: bool,
) -> docsapi::Result<()> {
    match entity {
        Entity::Site => output_single(Site::get(client, id).await?, json),
        Entity::Collection => output_single(Collection::get(client, id).await?, json),
        Entity::Category => output_single(Category::get(client, id).await?, json),
        Entity::Article => output_single(get_article(client, id, draft).await?, json),
        Entity::Revision => output_single(ArticleRevision::get(client, id).await?, json),
    }
}

async fn handle_list(
    client: &DocsClient,
    entity: Entity,
    parent: Option<&str>,
    params: &Params,
    json: bool,
) -> docsapi::Result<()> {
    let require_parent = |hint: &str| {
        parent.ok_or_else(|| DocsError::InvalidArgument(format!("--parent <{hint}> is required")))
    };

    match entity {
        Entity::Site => {
            let sites = Site::list(client, &(), params).await?;
            output_collection(sites, json, |s: &Site| SiteRow::from(s))
        }
        Entity::Collection => {
            let collections = Collection::list(client, &(), params).await?;
            output_collection(collections, json, |c: &Collection| CollectionRow::from(c))
        }
        Entity::Category => {
            let collection_id = require_parent("collection-id")?;
            let categories = Category::list(client, collection_id, params).await?;
            output_collection(categories, json, |c: &Category| CategoryRow::from(c))
        }
        Entity::Article => {
            let category_id = require_parent("category-id")?;
            let articles = ArticleRef::list(client, category_id, params).await?;
            output_collection(articles, json, |a: &ArticleRef| ArticleRow::from(a))
        }
        Entity::Revision => {
            let article_id = require_parent("article-id")?;
            let revisions = ArticleRevisionRef::list(client, article_id, params).await?;
            output_collection(revisions, json, |r: &ArticleRevisionRef| RevisionRow::from(r))
        }
    }
}

async fn handle_delete(client: &DocsClient, entity: Entity, id: &str) -> docsapi::Result<()> {
    match entity {
        Entity::Site => Site::delete(client, id).await?,
        Entity::Collection => Collection::delete(client, id).await?,
        Entity::Category => Category::delete(client, id).await?,
        Entity::Article => Article::delete(client, id).await?,
        Entity::Revision => {
            return Err(DocsError::InvalidArgument(
                "revisions cannot be deleted".to_string(),
            ));
        }
    }
    println!("Deleted {id}");
    Ok(())
}

fn output_single<T: Serialize + PrettyPrint>(item: Option<T>, json: bool) -> docsapi::Result<()> {
    match item {
        Some(item) if json => println!("{}", serde_json::to_string_pretty(&item)?),
        Some(item) => println!("{}", item.pretty_print()),
        None => println!("Nothing found"),
    }
    Ok(())
}

fn output_collection<T, R, F>(
    mapped: Mapped<ResourceCollection<T>>,
    json: bool,
    to_row: F,
) -> docsapi::Result<()>
where
    T: Serialize,
    R: Tabled,
    F: Fn(&T) -> R,
{
    let collection = match mapped {
        Mapped::Hydrated(collection) => collection,
        Mapped::Raw(value) => {
            println!("{}", serde_json::to_string_pretty(&value)?);
            return Ok(());
        }
        Mapped::Absent => {
            println!("Nothing found");
            return Ok(());
        }
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&collection.items)?);
    } else {
        let rows: Vec<R> = collection.iter().map(to_row).collect();
        println!("{}", Table::new(rows));
        match (collection.page, collection.pages) {
            (Some(page), Some(pages)) => {
                let total = collection.count.map(|c| format!(" ({c} total items)")).unwrap_or_default();
                println!("\nPage {page}/{pages}{total}");
            }
            _ => println!("\n{} items", collection.len()),
        }
    }
    Ok(())
}

// Table row types for non-JSON output

fn text(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

#[derive(Tabled)]
struct SiteRow {
    id: String,
    title: String,
    subdomain: String,
    status: String,
}

impl From<&Site> for SiteRow {
    fn from(s: &Site) -> Self {
        Self {
            id: text(&s.id),
            title: text(&s.title),
            subdomain: text(&s.sub_domain),
            status: text(&s.status),
        }
    }
}

#[derive(Tabled)]
struct CollectionRow {
    id: String,
    name: String,
    visibility: String,
    articles: String,
}

impl From<&Collection> for CollectionRow {
    fn from(c: &Collection) -> Self {
        Self {
            id: text(&c.id),
            name: text(&c.name),
            visibility: text(&c.visibility),
            articles: c.article_count.map(|n| n.to_string()).unwrap_or_default(),
        }
    }
}

#[derive(Tabled)]
struct CategoryRow {
    id: String,
    order: String,
    name: String,
    articles: String,
}

impl From<&Category> for CategoryRow {
    fn from(c: &Category) -> Self {
        Self {
            id: text(&c.id),
            order: c.order.map(|n| n.to_string()).unwrap_or_default(),
            name: text(&c.name),
            articles: c.article_count.map(|n| n.to_string()).unwrap_or_default(),
        }
    }
}

#[derive(Tabled)]
struct ArticleRow {
    id: String,
    number: String,
    name: String,
    status: String,
}

impl From<&ArticleRef> for ArticleRow {
    fn from(a: &ArticleRef) -> Self {
        Self {
            id: text(&a.id),
            number: a.number.map(|n| n.to_string()).unwrap_or_default(),
            name: text(&a.name),
            status: text(&a.status),
        }
    }
}

#[derive(Tabled)]
struct SearchRow {
    id: String,
    name: String,
    preview: String,
}

impl From<&ArticleSearch> for SearchRow {
    fn from(a: &ArticleSearch) -> Self {
        Self {
            id: text(&a.id),
            name: text(&a.name),
            preview: text(&a.preview).chars().take(60).collect(),
        }
    }
}

#[derive(Tabled)]
struct RevisionRow {
    id: String,
    author: String,
    created: String,
}

impl From<&ArticleRevisionRef> for RevisionRow {
    fn from(r: &ArticleRevisionRef) -> Self {
        Self {
            id: text(&r.id),
            author: r.created_by.as_ref().map(|p| p.full_name()).unwrap_or_default(),
            created: r
                .created_at
                .map(|at| at.format("%Y-%m-%d %H:%M").to_string())
                .unwrap_or_default(),
        }
    }
}
