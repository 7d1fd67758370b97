//! Domains module containing business logic organized by bounded contexts.
//!
//! Each subdomain represents one MCP capability (tools, resources, prompts)
//! and owns its definitions, registry and error type.

pub mod prompts;
pub mod resources;
pub mod tools;
