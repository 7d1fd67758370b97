//! URL indexing check prompt.

use rmcp::model::PromptArgument;

use super::PromptDefinition;
use crate::domains::prompts::templates::required_arg;

pub struct IndexingCheckPrompt;

impl PromptDefinition for IndexingCheckPrompt {
    const NAME: &'static str = "indexing_check";
    const DESCRIPTION: &'static str = "Inspect how Google indexed a list of URLs";

    fn template() -> &'static str {
        r#"Check the index status of these URLs in {{site_url}}:

{{urls}}

Inspect each URL with the URL inspection tool, one call per URL, using
{{site_url}} as the property. The URLs must belong to that property.

Summarize in a table: URL, verdict, coverage state, last crawl time,
Google-selected canonical and whether it matches the user-declared canonical.
Call out URLs that are not indexed, blocked by robots.txt, or have mobile
usability or rich result issues."#
    }

    fn arguments() -> Vec<PromptArgument> {
        vec![
            required_arg(
                "site_url",
                "Property URL, e.g. https://www.example.com/ or sc-domain:example.com",
            ),
            required_arg("urls", "URLs to inspect, one per line"),
        ]
    }
}
