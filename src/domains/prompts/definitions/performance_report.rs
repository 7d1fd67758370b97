//! Search performance report prompt.

use rmcp::model::PromptArgument;
use std::collections::HashMap;

use super::PromptDefinition;
use crate::client::{ApiError, validate_date_range};
use crate::domains::prompts::error::PromptError;
use crate::domains::prompts::templates::{optional_arg, required_arg};

/// Walks an agent through a search analytics report for one property.
pub struct PerformanceReportPrompt;

impl PromptDefinition for PerformanceReportPrompt {
    const NAME: &'static str = "performance_report";
    const DESCRIPTION: &'static str =
        "Summarize clicks, impressions, CTR and position for a property over a date range";

    fn template() -> &'static str {
        r#"Build a search performance report for {{site_url}} covering {{start_date}} to {{end_date}}.

1. Call `get_site` to confirm the property is accessible and note the permission level.
2. Call `query_search_analytics` for the date range {{#if dimensions}}grouped by {{dimensions}}{{else}}grouped by date{{/if}}.
3. Call it again grouped by query with a row limit of 25 to find the top queries.

Report:
- total clicks and impressions, average CTR and average position
- the strongest and weakest {{#if dimensions}}{{dimensions}} rows{{else}}days{{/if}}
- queries with many impressions but a CTR well below the average
- anything that looks like a sudden drop worth investigating

Dates are in Pacific Time and the latest two or three days may still be incomplete."#
    }

    fn arguments() -> Vec<PromptArgument> {
        vec![
            required_arg(
                "site_url",
                "Property URL, e.g. https://www.example.com/ or sc-domain:example.com",
            ),
            required_arg("start_date", "First day of the report (YYYY-MM-DD)"),
            required_arg("end_date", "Last day of the report (YYYY-MM-DD)"),
            optional_arg(
                "dimensions",
                "Comma-separated grouping: date, query, page, country, device, searchAppearance",
            ),
        ]
    }

    fn check(arguments: &HashMap<String, String>) -> Result<(), PromptError> {
        let start = arguments.get("start_date").map(String::as_str).unwrap_or("");
        let end = arguments.get("end_date").map(String::as_str).unwrap_or("");

        validate_date_range(start, end).map_err(|err| match err {
            ApiError::InvalidParameter { name, reason } if name == "endDate" => {
                PromptError::invalid_argument("end_date", reason)
            }
            other => PromptError::invalid_argument("start_date", other.to_string()),
        })
    }
}
