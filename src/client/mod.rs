//! Google Search Console API client.
//!
//! - `operations` - static descriptors of every upstream endpoint
//! - `search_console` - the client, one method per operation
//! - `backend` - the HTTP seam (`reqwest` in production)
//! - `types` - pass-through API objects
//! - `error` - upstream error taxonomy

pub mod backend;
pub mod error;
pub mod operations;
pub mod search_console;
pub mod types;

#[cfg(test)]
pub(crate) mod fake;

pub use backend::{ApiRequest, ApiResponse, HttpBackend, ReqwestBackend};
pub use error::{ApiError, ApiResult};
pub use operations::{ALL_OPERATIONS, ApiBase, HttpMethod, Operation, ParamLocation, ParamSpec};
pub use search_console::{
    DEFAULT_SEARCHCONSOLE_BASE_URL, DEFAULT_WEBMASTERS_BASE_URL, SearchConsoleClient,
    validate_date_range,
};
pub use types::*;
