//! Markdown document provider.
//!
//! Splits a markdown document into one knowledge entry per level-2 section
//! using the comrak AST. Documents are read once at startup; the provider
//! holds no file handle afterwards.

use std::path::Path;

use comrak::nodes::{AstNode, NodeValue};
use comrak::{parse_document, Arena, Options};

use super::entry::KnowledgeEntry;
use super::error::KnowledgeError;
use super::provider::{ranked_entries, KnowledgeProvider};

/// Errors raised while loading a markdown document.
#[derive(thiserror::Error, Debug)]
pub enum DocumentError {
    /// The file could not be read.
    #[error("Failed to read document: {0}")]
    Io(#[from] std::io::Error),

    /// The document produced no valid entries.
    #[error(transparent)]
    Knowledge(#[from] KnowledgeError),
}

/// Heading level that starts a new entry.
const SECTION_LEVEL: u8 = 2;

/// Optional metadata applied to every entry of a markdown document.
#[derive(Debug, Clone, Default)]
pub struct MarkdownMetadata {
    /// Title used when the document has no level-2 sections.
    pub title: Option<String>,
    /// Reference URL copied onto every entry.
    pub url: String,
    /// Topic description for listings.
    pub description: String,
}

/// Knowledge provider backed by a markdown document.
#[derive(Debug, Clone)]
pub struct MarkdownProvider {
    topic: String,
    description: String,
    entries: Vec<KnowledgeEntry>,
}

impl MarkdownProvider {
    /// Build a provider from markdown text.
    ///
    /// # Errors
    ///
    /// Returns [`KnowledgeError::InvalidEntry`] if the topic key is blank or padded, or
    /// the document is empty.
    pub fn from_markdown(
        topic: impl Into<String>,
        content: &str,
        metadata: MarkdownMetadata,
    ) -> Result<Self, KnowledgeError> {
        let topic = topic.into();
        if content.trim().is_empty() {
            return Err(KnowledgeError::invalid(format!(
                "document for topic {topic:?} is empty"
            )));
        }

        let sections = split_sections(content);
        let entries = if sections.is_empty() {
            let title = metadata
                .title
                .clone()
                .filter(|t| !t.trim().is_empty())
                .or_else(|| first_heading(content))
                .unwrap_or_else(|| topic.clone());
            vec![KnowledgeEntry::new(
                1,
                title,
                metadata.url.clone(),
                content.trim(),
            )?]
        } else {
            sections
                .into_iter()
                .zip(1u32..)
                .map(|(section, rank)| {
                    let title = if section.title.is_empty() {
                        format!("{topic} section {rank}")
                    } else {
                        section.title
                    };
                    KnowledgeEntry::new(rank, title, metadata.url.clone(), section.body)
                })
                .collect::<Result<Vec<_>, _>>()?
        };

        let entries = ranked_entries(&topic, entries)?;
        Ok(Self {
            topic,
            description: metadata.description,
            entries,
        })
    }

    /// Load a provider from a markdown file.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::Io`] if the file cannot be read, or
    /// [`DocumentError::Knowledge`] if the document produces no valid entries.
    pub async fn load(
        topic: impl Into<String>,
        path: &Path,
        metadata: MarkdownMetadata,
    ) -> Result<Self, DocumentError> {
        let content = tokio::fs::read_to_string(path).await?;
        let provider = Self::from_markdown(topic, &content, metadata)?;
        tracing::debug!(
            path = %path.display(),
            topic = %provider.topic,
            sections = provider.entries.len(),
            "Loaded markdown knowledge document"
        );
        Ok(provider)
    }
}

impl KnowledgeProvider for MarkdownProvider {
    fn topic(&self) -> &str {
        &self.topic
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn entries(&self) -> &[KnowledgeEntry] {
        &self.entries
    }

    /// Keep entries whose title or body contains any query word.
    fn search(&self, query: &str) -> Vec<KnowledgeEntry> {
        let query_lower = query.to_lowercase();
        let words: Vec<&str> = query_lower.split_whitespace().collect();
        if words.is_empty() {
            return self.entries.clone();
        }

        self.entries
            .iter()
            .filter(|entry| {
                let title = entry.title().to_lowercase();
                let body = entry.context().to_lowercase();
                words
                    .iter()
                    .any(|word| title.contains(word) || body.contains(word))
            })
            .cloned()
            .collect()
    }
}

/// A level-2 section of a document.
struct Section {
    title: String,
    body: String,
}

/// Split a document at its level-2 headings.
///
/// Each section's body is the raw markdown from its heading line up to the
/// next level-2 heading. A heading without text yields an empty title.
fn split_sections(content: &str) -> Vec<Section> {
    let arena = Arena::new();
    let root = parse_document(&arena, content, &Options::default());

    let starts: Vec<(usize, String)> = root
        .children()
        .filter_map(|node| {
            let data = node.data.borrow();
            match &data.value {
                NodeValue::Heading(heading) if heading.level == SECTION_LEVEL => {
                    Some((data.sourcepos.start.line, extract_text(node)))
                }
                _ => None,
            }
        })
        .collect();

    let lines = split_lines(content);
    starts
        .iter()
        .enumerate()
        .map(|(i, (line, title))| {
            let begin = line.saturating_sub(1);
            let end = starts
                .get(i + 1)
                .map_or(lines.len(), |(next, _)| next.saturating_sub(1))
                .min(lines.len());
            let body = lines[begin.min(end)..end].join("\n").trim_end().to_string();
            Section {
                title: title.clone(),
                body,
            }
        })
        .collect()
}

/// Split text into lines the way comrak numbers them: `\r\n`, `\n` and a
/// bare `\r` all end a line.
fn split_lines(content: &str) -> Vec<&str> {
    let bytes = content.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                lines.push(&content[start..i]);
                start = i + 1;
            }
            b'\r' => {
                lines.push(&content[start..i]);
                if bytes.get(i + 1) == Some(&b'\n') {
                    i += 1;
                }
                start = i + 1;
            }
            _ => {}
        }
        i += 1;
    }
    if start < bytes.len() {
        lines.push(&content[start..]);
    }
    lines
}

/// Text of the first heading of any level.
fn first_heading(content: &str) -> Option<String> {
    let arena = Arena::new();
    let root = parse_document(&arena, content, &Options::default());
    root.children()
        .find(|node| matches!(node.data.borrow().value, NodeValue::Heading(_)))
        .map(extract_text)
        .filter(|text| !text.is_empty())
}

fn extract_text<'a>(node: &'a AstNode<'a>) -> String {
    let mut text = String::new();
    collect_text(node, &mut text);
    text.trim().to_string()
}

fn collect_text<'a>(node: &'a AstNode<'a>, out: &mut String) {
    match &node.data.borrow().value {
        NodeValue::Text(t) => out.push_str(t),
        NodeValue::Code(c) => out.push_str(&c.literal),
        NodeValue::SoftBreak | NodeValue::LineBreak => out.push(' '),
        _ => {
            for child in node.children() {
                collect_text(child, out);
            }
        }
    }
}
