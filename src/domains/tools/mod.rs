//! Tools domain module.
//!
//! This module handles all tool-related functionality for the MCP server.
//! Each tool wraps exactly one Search Console API operation.
//!
//! ## Architecture
//!
//! - `definitions/` - The two tool sets and the shared `ToolDefinition` plumbing
//! - `router.rs` - Dynamic ToolRouter builder for STDIO/TCP transport
//! - `registry.rs` - Tool names per app and HTTP dispatch
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Implement `ToolDefinition` in the app's module under `definitions/`
//! 2. Export it from the app's `mod.rs`
//! 3. Add its route in `router.rs` with `with_route()`
//! 4. Add it to `tool_names()` and the HTTP dispatch in `registry.rs`

pub mod definitions;
mod error;
mod registry;
pub mod router;

pub use error::ToolError;
pub use registry::ToolRegistry;
pub use router::build_tool_router;
