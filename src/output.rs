//! Output formatting for CLI display.
//!
//! Provides the [`PrettyPrint`] trait for human-readable output
//! as an alternative to JSON serialization.

use chrono::{DateTime, Utc};

use crate::{Article, ArticleRevision, Category, Collection, Site};

/// Trait for human-readable key-value output.
///
/// Implemented by entity types to provide formatted output
/// suitable for terminal display when `--json` is not specified.
pub trait PrettyPrint {
    /// Returns a formatted string for terminal display.
    fn pretty_print(&self) -> String;
}

fn header(label: &str, id: Option<&str>) -> Vec<String> {
    let title = format!("{label}: {}", id.unwrap_or("(unsaved)"));
    let divider = "─".repeat(title.chars().count().max(30));
    vec![title, divider]
}

fn timestamp(at: &DateTime<Utc>) -> String {
    at.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

impl PrettyPrint for Article {
    fn pretty_print(&self) -> String {
        let mut lines = header("Article", self.id.as_deref());

        if let Some(ref name) = self.name {
            lines.push(format!("Name:           {}", name));
        }
        if let Some(number) = self.number {
            lines.push(format!("Number:         {}", number));
        }
        if let Some(ref status) = self.status {
            let draft = if self.has_draft == Some(true) { " (has draft)" } else { "" };
            lines.push(format!("Status:         {}{}", status, draft));
        }
        if let Some(ref url) = self.public_url {
            lines.push(format!("URL:            {}", url));
        }
        if let Some(views) = self.view_count {
            lines.push(format!("Views:          {}", views));
        }
        if let Some(ref updated) = self.updated_at {
            lines.push(format!("Updated:        {}", timestamp(updated)));
        }

        lines.join("\n")
    }
}

impl PrettyPrint for Category {
    fn pretty_print(&self) -> String {
        let mut lines = header("Category", self.id.as_deref());

        if let Some(ref name) = self.name {
            lines.push(format!("Name:           {}", name));
        }
        if let Some(ref collection) = self.collection_id {
            lines.push(format!("Collection:     {}", collection));
        }
        if let Some(count) = self.article_count {
            lines.push(format!(
                "Articles:       {} ({} published)",
                count,
                self.published_article_count.unwrap_or(0)
            ));
        }
        if let Some(ref visibility) = self.visibility {
            lines.push(format!("Visibility:     {}", visibility));
        }

        lines.join("\n")
    }
}

impl PrettyPrint for Collection {
    fn pretty_print(&self) -> String {
        let mut lines = header("Collection", self.id.as_deref());

        if let Some(ref name) = self.name {
            lines.push(format!("Name:           {}", name));
        }
        if let Some(ref site) = self.site_id {
            lines.push(format!("Site:           {}", site));
        }
        if let Some(ref visibility) = self.visibility {
            lines.push(format!("Visibility:     {}", visibility));
        }
        if let Some(count) = self.article_count {
            lines.push(format!("Articles:       {}", count));
        }

        lines.join("\n")
    }
}

impl PrettyPrint for Site {
    fn pretty_print(&self) -> String {
        let mut lines = header("Site", self.id.as_deref());

        if let Some(ref title) = self.title {
            lines.push(format!("Title:          {}", title));
        }
        if let Some(ref sub_domain) = self.sub_domain {
            lines.push(format!("Subdomain:      {}", sub_domain));
        }
        if let Some(ref cname) = self.cname {
            lines.push(format!("CNAME:          {}", cname));
        }
        if let Some(ref status) = self.status {
            lines.push(format!("Status:         {}", status));
        }

        lines.join("\n")
    }
}

impl PrettyPrint for ArticleRevision {
    fn pretty_print(&self) -> String {
        let mut lines = header("Revision", self.id.as_deref());

        if let Some(ref article) = self.article_id {
            lines.push(format!("Article:        {}", article));
        }
        if let Some(ref author) = self.created_by {
            lines.push(format!("Author:         {}", author.full_name()));
        }
        if let Some(ref created) = self.created_at {
            lines.push(format!("Created:        {}", timestamp(created)));
        }

        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_article_pretty_print_format() {
        let article: Article = serde_json::from_value(serde_json::json!({
            "id": "521632244566c845e9b8ff1e",
            "name": "Welcome",
            "status": "published",
            "hasDraft": true
        }))
        .unwrap();

        let output = article.pretty_print();
        assert!(output.starts_with("Article: 521632244566c845e9b8ff1e"));
        assert!(output.contains("Name:           Welcome"));
        assert!(output.contains("published (has draft)"));
    }

    #[test]
    fn test_unsaved_header() {
        let output = Category::new("col", "FAQ").pretty_print();
        assert!(output.starts_with("Category: (unsaved)"));
    }
}
