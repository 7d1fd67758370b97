//! Tool definitions module.
//!
//! Two tool sets cover the same Search Console API; a server exposes one of
//! them, chosen by configuration. Each tool is a [`ToolDefinition`] in its
//! set's module.

pub mod common;
pub mod google_search_console;
pub mod google_searchconsole;
pub mod tool;

pub use tool::{ToolDefinition, create_route, dispatch, to_tool};
