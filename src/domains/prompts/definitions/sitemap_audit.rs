//! Sitemap audit prompt.

use rmcp::model::PromptArgument;

use super::PromptDefinition;
use crate::domains::prompts::templates::required_arg;

pub struct SitemapAuditPrompt;

impl PromptDefinition for SitemapAuditPrompt {
    const NAME: &'static str = "sitemap_audit";
    const DESCRIPTION: &'static str = "Review every sitemap submitted for a property";

    fn template() -> &'static str {
        r#"Audit the sitemaps of {{site_url}}.

1. Call `list_sitemaps` for the property.
2. Call `get_sitemap` on each entry for its full details and content counts.

For every sitemap report the path, last submitted and last downloaded dates,
whether it is pending, and its error and warning counts. Then list:
- sitemaps with errors or warnings
- sitemaps not downloaded since they were last submitted
- content types where submitted URLs far exceed indexed URLs

Do not resubmit or delete anything without asking first."#
    }

    fn arguments() -> Vec<PromptArgument> {
        vec![required_arg(
            "site_url",
            "Property URL, e.g. https://www.example.com/ or sc-domain:example.com",
        )]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sitemap_audit_prompt_metadata() {
        assert_eq!(SitemapAuditPrompt::NAME, "sitemap_audit");
        assert!(!SitemapAuditPrompt::DESCRIPTION.is_empty());

        let args = SitemapAuditPrompt::arguments();
        assert_eq!(args.len(), 1);
        assert_eq!(args[0].name, "site_url");
        assert_eq!(args[0].required, Some(true));
    }
}
