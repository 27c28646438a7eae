//! Site model and trait implementations.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::client::DocsClient;
use crate::collection::ResourceCollection;
use crate::error::Result;
use crate::mapper::Mapped;
use crate::params::{Params, DEFAULT_ALLOWED};
use crate::traits::{Create, Delete, Get, List, Resource, Update};

/// A public documentation site.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Site {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// `active` or `inactive`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_domain: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cname: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_public_site: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_width: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_height: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub fav_icon_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub touch_icon_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub home_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub home_link_text: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub bg_color: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_contact_form: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub mailbox_id: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub style_sheet_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub header_code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_by: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Site {
    /// A new, unsaved site.
    pub fn new(sub_domain: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            sub_domain: Some(sub_domain.into()),
            title: Some(title.into()),
            ..Default::default()
        }
    }
}

impl Resource for Site {
    const ENDPOINT: &'static str = "sites";
    const KIND: &'static str = "Site";

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn set_id(&mut self, id: String) {
        self.id = Some(id);
    }
}

#[async_trait]
impl Get for Site {
    #[tracing::instrument(skip(client))]
    async fn get(client: &DocsClient, id: &str) -> Result<Option<Self>> {
        let mapped = client
            .fetch_item(&Self::checked_path(id)?, &Params::new(), &[])
            .await?;
        Ok(mapped.hydrated())
    }
}

#[async_trait]
impl List for Site {
    type Parent = ();

    #[tracing::instrument(skip(client, params))]
    async fn list(
        client: &DocsClient,
        _parent: &(),
        params: &Params,
    ) -> Result<Mapped<ResourceCollection<Self>>> {
        client
            .fetch_collection(Self::ENDPOINT, params, DEFAULT_ALLOWED)
            .await
    }
}

impl Create for Site {}
impl Update for Site {}
impl Delete for Site {}
