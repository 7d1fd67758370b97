//! Search analytics query reference (static markdown).

use super::ResourceDefinition;
use crate::domains::resources::service::ResourceContent;

pub struct QueryReferenceResource;

impl ResourceDefinition for QueryReferenceResource {
    const URI: &'static str = "gsc://docs/search-analytics";
    const NAME: &'static str = "Search Analytics Reference";
    const DESCRIPTION: &'static str =
        "Accepted values for dimensions, filters, search types, aggregation and data state";
    const MIME_TYPE: &'static str = "text/markdown";

    fn content() -> ResourceContent {
        ResourceContent::Text(REFERENCE.to_string())
    }
}

const REFERENCE: &str = r#"# Search Analytics Query Reference

Dates are `YYYY-MM-DD` in Pacific Time; the start date must not be after the end date.

## Dimensions
`date`, `query`, `page`, `country`, `device`, `searchAppearance`

Each row's `keys` array follows the order of the requested dimensions.

## Dimension filters
A filter group is `{"groupType": "and", "filters": [...]}`. Each filter is
`{"dimension": ..., "operator": ..., "expression": ...}` with operator one of
`equals` (default), `notEquals`, `contains`, `notContains`, `includingRegex`,
`excludingRegex`. Country uses ISO 3166-1 alpha-3 codes; device is `DESKTOP`,
`MOBILE` or `TABLET`.

## Search type
`web` (default), `image`, `video`, `news`, `discover`, `googleNews`

## Aggregation type
`auto` (default), `byPage`, `byProperty`, `byNewsShowcasePanel`

## Data state
`final` (default) for finalized data only, `all` to include fresh data.

## Paging
`rowLimit` 1 to 25000 (default 1000); `startRow` is zero-based.
"#;
