//! `google_searchconsole` tool set.
//!
//! Arguments use the API's camelCase names (`siteUrl`, `feedpath`,
//! `inspectionUrl`...) and every tool returns the upstream body as-is.

pub mod analytics;
pub mod sitemaps;
pub mod sites;

pub use analytics::{
    IndexInspectUrlParams, IndexInspectUrlTool, QuerySearchAnalyticsParams,
    QuerySearchAnalyticsTool,
};
pub use sitemaps::{
    DeleteSitemapTool, GetSitemapTool, ListSitemapsParams, ListSitemapsTool, SitemapParams,
    SubmitSitemapTool,
};
pub use sites::{AddSiteTool, DeleteSiteTool, GetSiteTool, ListSitesParams, ListSitesTool, SiteParams};
