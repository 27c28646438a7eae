//! Basic example demonstrating the Docs API client.
//!
//! Run with:
//! ```
//! HELPSCOUT_DOCS_API_KEY=your-key cargo run --example basic
//! ```

use docsapi::{
    search_articles, ArticleRef, Category, Collection, DocsClient, Get, List, Params, Site,
};

#[tokio::main]
async fn main() -> docsapi::Result<()> {
    // Initialize tracing for debugging (optional)
    tracing_subscriber::fmt::init();

    // Create client from environment variables
    println!("Creating Docs client...");
    let client = DocsClient::from_env()?;
    println!("Connected to: {}", client.base_url());

    // List sites
    println!("\n--- Sites ---");
    let sites = Site::list(&client, &(), &Params::new()).await?;
    for site in sites.hydrated().unwrap_or_default() {
        println!("  - {:?} ({:?})", site.title, site.id);
    }

    // List first page of collections
    println!("\n--- Collections (first page) ---");
    let collections = Collection::list(&client, &(), &Params::new().page(1).sort("order"))
        .await?
        .hydrated()
        .unwrap_or_default();
    println!("Found {} collections (total: {:?})", collections.len(), collections.count);

    for collection in &collections {
        println!("  - {:?} ({:?})", collection.name, collection.id);
    }

    // Walk into the first collection
    if let Some(collection_id) = collections.iter().find_map(|c| c.id.clone()) {
        println!("\n--- Categories ---");
        let categories = Category::list(&client, &collection_id, &Params::new())
            .await?
            .hydrated()
            .unwrap_or_default();

        for category in &categories {
            println!("  - {:?}", category.name);
        }

        if let Some(category_id) = categories.iter().find_map(|c| c.id.clone()) {
            let category = Category::get(&client, &category_id).await?;
            println!("\nCategory details: {:?}", category.and_then(|c| c.description));

            let articles = ArticleRef::list(&client, &category_id, &Params::new().status("published"))
                .await?
                .hydrated()
                .unwrap_or_default();
            println!("{} published articles", articles.len());
        }
    }

    // Field-limited search returns raw JSON
    println!("\n--- Search ---");
    let hits = search_articles(&client, &Params::new().query("billing").fields("id,name")).await?;
    println!("{:?}", hits.raw());

    Ok(())
}
