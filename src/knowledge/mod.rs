//! Knowledge layer served to AI agents.
//!
//! Provides ranked, deterministic guidance grouped by topic:
//! - [`KnowledgeEntry`] (one ranked unit of guidance)
//! - [`KnowledgeProvider`] (owner of one topic's entries)
//! - [`KnowledgeRegistry`] (topic key to provider index, read-only once built)

mod cdk;
mod entry;
mod error;
mod markdown;
mod provider;
mod registry;

pub use cdk::*;
pub use entry::*;
pub use error::*;
pub use markdown::*;
pub use provider::{KnowledgeProvider, StaticProvider};
pub use registry::*;
