//! Colored CLI display utilities for knowledge output.

use owo_colors::OwoColorize;

use crate::tools::{RetrieveResponse, TopicsResponse};

/// Maximum description length shown in topic listings.
const DESCRIPTION_MAX_LEN: usize = 80;

/// Truncate a string to a maximum number of characters, adding ellipsis if truncated.
#[must_use]
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        "...".to_string()
    } else {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{kept}...")
    }
}

/// Print the topic listing.
pub fn print_topics(response: &TopicsResponse) {
    if response.topics.is_empty() {
        println!("{}", "No topics registered".dimmed());
        return;
    }

    for topic in &response.topics {
        println!(
            "{} {} {}",
            topic.topic.cyan().bold(),
            format!("({} entries)", topic.entries).dimmed(),
            truncate(&topic.description, DESCRIPTION_MAX_LEN)
        );
    }
}

/// Print the entries of a retrieval response.
pub fn print_entries(response: &RetrieveResponse) {
    if response.results.is_empty() {
        println!(
            "{} no entries for {}",
            "[KNOWLEDGE]".yellow().bold(),
            response.topic.cyan()
        );
        return;
    }

    for entry in &response.results {
        println!(
            "{} #{} {}",
            "[KNOWLEDGE]".blue().bold(),
            entry.rank(),
            entry.title().bold()
        );
        if !entry.url().is_empty() {
            println!("{}", entry.url().underline());
        }
        println!();
        println!("{}", entry.context());
        println!();
    }
}

/// Print an error message to stderr.
pub fn print_error(message: &str) {
    eprintln!("{} {}", "[ERROR]".red().bold(), message);
}
