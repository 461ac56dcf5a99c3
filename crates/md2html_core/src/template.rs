//! Page template rendering.
//!
//! Only plain `{{ name }}` interpolation is supported and only two names are
//! known: `title` and `content`. Any other placeholder is left in the output as
//! written. There are no loops, conditionals, filters or escaping.

/// Error raised for a template with unbalanced `{{ }}` delimiters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TemplateError {
    /// A `{{` without a matching `}}`.
    #[error("malformed template: unclosed `{{{{` at byte {offset}")]
    Unclosed { offset: usize },

    /// A `{{` opened before the previous placeholder was closed.
    #[error("malformed template: nested `{{{{` at byte {offset}")]
    Nested { offset: usize },
}

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

/// Substitutes `title` and `content` into `template`.
///
/// Whitespace between the braces and the name is optional, so `{{title}}` and
/// `{{ title }}` are equivalent. The substituted values are inserted verbatim
/// and never scanned for placeholders themselves.
pub fn render_template(
    template: &str,
    title: &str,
    content: &str,
) -> Result<String, TemplateError> {
    let mut output = String::with_capacity(template.len() + content.len());
    let mut rest = template;
    let mut offset = 0;

    while let Some(start) = rest.find(OPEN) {
        output.push_str(&rest[..start]);

        let inner_start = start + OPEN.len();
        let Some(inner_len) = rest[inner_start..].find(CLOSE) else {
            return Err(TemplateError::Unclosed {
                offset: offset + start,
            });
        };

        let inner = &rest[inner_start..inner_start + inner_len];
        if let Some(nested) = inner.find(OPEN) {
            return Err(TemplateError::Nested {
                offset: offset + inner_start + nested,
            });
        }

        let end = inner_start + inner_len + CLOSE.len();
        match inner.trim() {
            "title" => output.push_str(title),
            "content" => output.push_str(content),
            _ => output.push_str(&rest[start..end]),
        }

        rest = &rest[end..];
        offset += end;
    }

    output.push_str(rest);

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_template() {
        let template = "<title>{{ title }}</title><body>{{content}}</body>";
        let html = render_template(template, "README", "<h1>Hello</h1>").unwrap();
        assert_eq!(html, "<title>README</title><body><h1>Hello</h1></body>");
    }

    #[test]
    fn test_repeated_placeholders() {
        let html = render_template("{{ title }}|{{ title }}", "a", "").unwrap();
        assert_eq!(html, "a|a");
    }

    #[test]
    fn test_unknown_placeholders_are_kept() {
        let html = render_template("{{ author }} {{ title }} {{}}", "t", "").unwrap();
        assert_eq!(html, "{{ author }} t {{}}");
    }

    #[test]
    fn test_values_are_not_rescanned() {
        let html = render_template("{{ content }}", "t", "{{ title }} {{").unwrap();
        assert_eq!(html, "{{ title }} {{");
    }

    #[test]
    fn test_stray_close_is_literal() {
        let html = render_template("a }} b", "t", "c").unwrap();
        assert_eq!(html, "a }} b");
    }

    #[test]
    fn test_malformed_template() {
        assert_eq!(
            render_template("<p>{{ content </p>", "t", "c"),
            Err(TemplateError::Unclosed { offset: 3 })
        );
        assert_eq!(
            render_template("{{ title }} {{ content {{ title }}", "t", "c"),
            Err(TemplateError::Nested { offset: 23 })
        );
    }

    #[test]
    fn test_template_error_display() {
        assert_eq!(
            TemplateError::Unclosed { offset: 3 }.to_string(),
            "malformed template: unclosed `{{` at byte 3"
        );
    }
}
