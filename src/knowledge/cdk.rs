//! Built-in AWS CDK best-practices guidance.
//!
//! Sourced from a combination of
//! - <https://docs.aws.amazon.com/cdk/v2/guide/best-practices.html>
//! - <https://docs.aws.amazon.com/cdk/v2/guide/best-practices-security.html>
//! - <https://docs.aws.amazon.com/prescriptive-guidance/latest/aws-cdk-layers/best-practices.html>
//! - <https://docs.aws.amazon.com/cdk/v2/guide/hello-world.html> (getting started)
//!
//! plus CDK Nag compliance advice.

use super::entry::KnowledgeEntry;
use super::error::KnowledgeError;
use super::provider::{KnowledgeProvider, StaticProvider};

/// Topic key of the built-in CDK guidance.
pub const CDK_BEST_PRACTICES_TOPIC: &str = "cdk-best-practices";

/// Title of the single CDK guidance entry.
pub const CDK_BEST_PRACTICES_TITLE: &str = "AWS CDK Best Practices";

/// Markdown summary of CDK best practices for AI agents.
pub const CDK_BEST_PRACTICES_SUMMARY: &str = include_str!("../../content/cdk_best_practices.md");

/// Provider serving [`CDK_BEST_PRACTICES_SUMMARY`] as one rank-1 entry.
#[derive(Debug, Clone)]
pub struct CdkBestPracticesProvider {
    inner: StaticProvider,
}

impl CdkBestPracticesProvider {
    /// Create the provider.
    ///
    /// # Errors
    ///
    /// Only fails if the embedded entry is malformed, which the constants
    /// above rule out.
    pub fn new() -> Result<Self, KnowledgeError> {
        let entry = KnowledgeEntry::new(
            1,
            CDK_BEST_PRACTICES_TITLE,
            "",
            CDK_BEST_PRACTICES_SUMMARY,
        )?;
        let inner = StaticProvider::new(CDK_BEST_PRACTICES_TOPIC, vec![entry])?
            .with_description(
                "AWS CDK best practices: project setup, constructs, security, and compliance",
            );
        Ok(Self { inner })
    }
}

impl KnowledgeProvider for CdkBestPracticesProvider {
    fn topic(&self) -> &str {
        self.inner.topic()
    }

    fn description(&self) -> &str {
        self.inner.description()
    }

    fn entries(&self) -> &[KnowledgeEntry] {
        self.inner.entries()
    }
}
