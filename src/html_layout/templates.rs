//! Cover page template rendering
//!
//! Mustache templates for the A4 page markup and its stylesheet. Values are
//! inserted with `{{ }}` so user input is always HTML-escaped.

use serde::Serialize;

use crate::error::Result;

/// Template selection for cover page output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageTemplate {
    /// Page markup (`.print-container` and its content)
    Markup,
    /// Screen and `@media print` styles for the page
    Stylesheet,
}

/// Get template content by type
pub fn get_template_content(template_type: PageTemplate) -> &'static str {
    match template_type {
        PageTemplate::Markup => include_str!("templates/cover_page.html.mustache"),
        PageTemplate::Stylesheet => include_str!("templates/page.css.mustache"),
    }
}

/// Render a template with any serializable context
pub fn render_template<T: Serialize>(template_type: PageTemplate, context: &T) -> Result<String> {
    let template = mustache::compile_str(get_template_content(template_type))?;
    Ok(template.render_to_string(context)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Empty {}

    #[test]
    fn test_templates_compile() {
        assert!(mustache::compile_str(get_template_content(PageTemplate::Markup)).is_ok());
        assert!(mustache::compile_str(get_template_content(PageTemplate::Stylesheet)).is_ok());
    }

    #[test]
    fn test_missing_values_render_empty() {
        let rendered = render_template(PageTemplate::Markup, &Empty {}).unwrap();
        assert!(rendered.contains("class=\"print-container times-font\""));
        assert!(!rendered.contains("<img"));
    }
}
