//! `google_search_console` tool set.
//!
//! Arguments are snake_case (`site_url`, `feed_path`...). Side-effecting
//! tools answer with `{"status": "success", "message": ...}` instead of the
//! empty upstream body.

pub mod analytics;
pub mod sitemaps;
pub mod sites;

pub use analytics::{InspectUrlParams, InspectUrlTool, QuerySearchAnalyticsParams, QuerySearchAnalyticsTool};
pub use sitemaps::{DeleteSitemapTool, GetSitemapTool, ListSitemapsTool, SitemapParams, SubmitSitemapTool};
pub use sites::{AddSiteTool, DeleteSiteTool, GetSiteTool, ListSitesParams, ListSitesTool, SiteParams};
