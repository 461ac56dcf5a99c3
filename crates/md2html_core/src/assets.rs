//! Embedded assets.

/// Default page template, styled like a GitHub README.
///
/// Contains the `{{ title }}` and `{{ content }}` placeholders.
pub const DEFAULT_TEMPLATE: &str = include_str!("../assets/template.html");

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::render_template;

    #[test]
    fn test_default_template_renders() {
        let html = render_template(DEFAULT_TEMPLATE, "Title", "<p>Body</p>").unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Title</title>"));
        assert!(html.contains("<p>Body</p>"));
        assert!(!html.contains("{{"));
    }
}
