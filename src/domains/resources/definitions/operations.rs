//! Operation catalog resources.
//!
//! `gsc://operations/catalog` lists every upstream operation descriptor;
//! the `gsc://operations/{id}` template reads one of them.

use rmcp::model::{AnnotateAble, RawResourceTemplate, ResourceTemplate};

use super::ResourceDefinition;
use crate::client::operations::{Operation, find_operation};
use crate::domains::resources::service::{DynamicResourceType, ResourceContent};

/// URI prefix shared by the catalog and the per-operation template.
const OPERATIONS_PREFIX: &str = "gsc://operations/";

pub const OPERATION_TEMPLATE: &str = "gsc://operations/{id}";

/// The full operation catalog (dynamic).
pub struct OperationsCatalogResource;

impl ResourceDefinition for OperationsCatalogResource {
    const URI: &'static str = "gsc://operations/catalog";
    const NAME: &'static str = "Operation Catalog";
    const DESCRIPTION: &'static str =
        "Every Search Console API operation: verb, API base, path template and parameters";
    const MIME_TYPE: &'static str = "application/json";

    fn content() -> ResourceContent {
        ResourceContent::Dynamic(DynamicResourceType::OperationsCatalog)
    }
}

/// Template for reading a single operation by id, e.g.
/// `gsc://operations/sitemaps.submit`.
pub fn operation_template() -> ResourceTemplate {
    RawResourceTemplate {
        uri_template: OPERATION_TEMPLATE.to_string(),
        name: "Operation Descriptor".to_string(),
        title: Some("Search Console Operation".to_string()),
        description: Some(
            "A single API operation by id, e.g. 'sites.get' or 'searchanalytics.query'"
                .to_string(),
        ),
        mime_type: Some("application/json".to_string()),
    }
    .no_annotation()
}

/// Resolve a `gsc://operations/{id}` URI to its descriptor.
pub fn operation_by_uri(uri: &str) -> Option<&'static Operation> {
    uri.strip_prefix(OPERATIONS_PREFIX)
        .filter(|id| !id.is_empty())
        .and_then(find_operation)
}
