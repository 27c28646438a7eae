//! Docs API model types.

mod article;
mod asset;
mod category;
mod collection;
mod revision;
mod site;

pub use article::*;
pub use asset::*;
pub use category::*;
pub use collection::*;
pub use revision::*;
pub use site::*;
