//! Trait definitions for Docs API operations.
//!
//! Each entity type implements the traits its endpoints support. Writable
//! entities also implement [`Resource`], which supplies the endpoint and id
//! handling the default `Create`, `Update` and `Delete` methods rely on.

mod create;
mod delete;
mod get;
mod list;
mod resource;
mod update;

pub use create::Create;
pub use delete::Delete;
pub use get::Get;
pub use list::List;
pub(crate) use resource::require_id;
pub use resource::Resource;
pub use update::Update;
