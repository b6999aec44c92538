//! IaC Knowledge - ranked infrastructure-as-code guidance for AI agents.

pub mod bootstrap;
pub mod config;
pub mod display;
pub mod knowledge;
pub mod server;
pub mod tools;
