//! Prompt templates module.
//!
//! Templates use a small handlebars-like syntax:
//! - `{{variable}}` is replaced with the value of `variable`
//! - `{{#if variable}}content{{/if}}` keeps content only if variable is set
//! - `{{#if variable}}content{{else}}alternative{{/if}}`

use rmcp::model::PromptArgument;
use std::collections::HashMap;

use super::error::PromptError;

const IF_OPEN: &str = "{{#if ";
const ELSE_TAG: &str = "{{else}}";
const ENDIF_TAG: &str = "{{/if}}";

/// Extra checks a prompt runs on its arguments before rendering.
pub type ArgumentCheck = fn(&HashMap<String, String>) -> Result<(), PromptError>;

/// A prompt template that can be instantiated with arguments.
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    /// The unique name of the prompt.
    pub name: String,

    /// A description of what the prompt does.
    pub description: Option<String>,

    /// The arguments that this prompt accepts.
    pub arguments: Vec<PromptArgument>,

    /// The template string with placeholders.
    pub template: String,

    /// Runs after the required-argument check.
    pub check: Option<ArgumentCheck>,
}

impl PromptTemplate {
    /// Create a new prompt template.
    pub fn new(
        name: impl Into<String>,
        description: Option<String>,
        arguments: Vec<PromptArgument>,
        template: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description,
            arguments,
            template: template.into(),
            check: None,
        }
    }

    /// Fail with `MissingArgument` for the first required argument that is
    /// absent or blank, then run the prompt's own check.
    pub fn validate(&self, arguments: &HashMap<String, String>) -> Result<(), PromptError> {
        for arg in self.arguments.iter().filter(|a| a.required.unwrap_or(false)) {
            let present = arguments
                .get(&arg.name)
                .is_some_and(|v| !v.trim().is_empty());
            if !present {
                return Err(PromptError::missing_argument(&arg.name));
            }
        }

        match self.check {
            Some(check) => check(arguments),
            None => Ok(()),
        }
    }

    /// Render the template with the given arguments.
    pub fn render(&self, arguments: &HashMap<String, String>) -> Result<String, PromptError> {
        let mut result = process_conditionals(&self.template, arguments)?;

        for (key, value) in arguments {
            let placeholder = format!("{{{{{}}}}}", key);
            result = result.replace(&placeholder, value);
        }

        Ok(strip_placeholders(&result))
    }
}

/// Build a required prompt argument.
pub fn required_arg(name: &str, description: &str) -> PromptArgument {
    PromptArgument {
        name: name.to_string(),
        title: None,
        description: Some(description.to_string()),
        required: Some(true),
    }
}

/// Build an optional prompt argument.
pub fn optional_arg(name: &str, description: &str) -> PromptArgument {
    PromptArgument {
        name: name.to_string(),
        title: None,
        description: Some(description.to_string()),
        required: Some(false),
    }
}

/// Resolve `{{#if}}` blocks in order. Blocks must not nest.
fn process_conditionals(
    template: &str,
    arguments: &HashMap<String, String>,
) -> Result<String, PromptError> {
    let mut result = template.to_string();

    while let Some(if_start) = result.find(IF_OPEN) {
        let var_end = result[if_start..]
            .find("}}")
            .map(|pos| if_start + pos)
            .ok_or_else(|| PromptError::template("Unclosed {{#if}} tag"))?;
        let var_name = result[if_start + IF_OPEN.len()..var_end].trim();

        let endif_pos = result[var_end..]
            .find(ENDIF_TAG)
            .map(|pos| var_end + pos)
            .ok_or_else(|| PromptError::template("Missing {{/if}} tag"))?;

        let block = &result[var_end + 2..endif_pos];
        let (when_set, when_unset) = match block.find(ELSE_TAG) {
            Some(else_pos) => (&block[..else_pos], &block[else_pos + ELSE_TAG.len()..]),
            None => (block, ""),
        };

        let is_set = arguments.get(var_name).is_some_and(|v| !v.is_empty());
        let replacement = if is_set { when_set } else { when_unset };

        result = format!(
            "{}{}{}",
            &result[..if_start],
            replacement,
            &result[endif_pos + ENDIF_TAG.len()..]
        );
    }

    Ok(result)
}

/// Drop `{{name}}` placeholders left over from optional arguments.
fn strip_placeholders(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(open) = rest.find("{{") {
        match rest[open..].find("}}") {
            Some(close) => {
                let placeholder = &rest[open..open + close + 2];
                result.push_str(&rest[..open]);
                if placeholder.contains('#') || placeholder.contains('/') {
                    result.push_str(placeholder);
                }
                rest = &rest[open + close + 2..];
            }
            None => break,
        }
    }
    result.push_str(rest);

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_simple_substitution() {
        let template = PromptTemplate::new("test", None, vec![], "Report for {{site_url}}.");
        let result = template
            .render(&args(&[("site_url", "sc-domain:example.com")]))
            .unwrap();
        assert_eq!(result, "Report for sc-domain:example.com.");
    }

    #[test]
    fn test_conditional_with_value() {
        let template = PromptTemplate::new(
            "test",
            None,
            vec![],
            "Group{{#if dimensions}} by {{dimensions}}{{/if}}.",
        );
        let result = template.render(&args(&[("dimensions", "query")])).unwrap();
        assert_eq!(result, "Group by query.");
    }

    #[test]
    fn test_conditional_with_else() {
        let template = PromptTemplate::new(
            "test",
            None,
            vec![],
            "Group by {{#if dimensions}}{{dimensions}}{{else}}date{{/if}}.",
        );
        assert_eq!(template.render(&HashMap::new()).unwrap(), "Group by date.");
        assert_eq!(
            template.render(&args(&[("dimensions", "")])).unwrap(),
            "Group by date."
        );
    }

    #[test]
    fn test_multiple_conditionals() {
        let template = PromptTemplate::new(
            "test",
            None,
            vec![],
            "{{#if a}}A{{/if}}-{{#if b}}B{{else}}b{{/if}}",
        );
        assert_eq!(template.render(&args(&[("a", "1")])).unwrap(), "A-b");
    }

    #[test]
    fn test_unclosed_conditional_is_a_template_error() {
        let template = PromptTemplate::new("test", None, vec![], "{{#if a}}never closed");
        let result = template.render(&HashMap::new());
        assert!(matches!(result, Err(PromptError::TemplateError(_))));
    }

    #[test]
    fn test_unmatched_placeholders_removed() {
        let template = PromptTemplate::new("test", None, vec![], "Hello {{missing}}world");
        assert_eq!(template.render(&HashMap::new()).unwrap(), "Hello world");
    }

    #[test]
    fn test_validate_required_arguments() {
        let template = PromptTemplate::new(
            "test",
            None,
            vec![
                required_arg("site_url", "Property"),
                optional_arg("dimensions", "Grouping"),
            ],
            "{{site_url}}",
        );

        assert!(template.validate(&args(&[("site_url", "x")])).is_ok());
        assert!(matches!(
            template.validate(&HashMap::new()),
            Err(PromptError::MissingArgument(name)) if name == "site_url"
        ));
        assert!(template.validate(&args(&[("site_url", "  ")])).is_err());
    }
}
