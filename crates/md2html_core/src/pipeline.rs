//! Converts a single markdown file into a styled HTML page.

use crate::assets::DEFAULT_TEMPLATE;
use crate::error::{Error, Result};
use crate::remote::MarkdownConverter;
use crate::rewrite::rewrite_headings;
use crate::template::render_template;
use std::borrow::Cow;
use std::path::{Path, PathBuf};

/// Where the page template comes from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TemplateSource {
    /// The template embedded in the binary.
    #[default]
    Bundled,
    /// A template file on disk.
    File(PathBuf),
}

impl TemplateSource {
    fn load(&self) -> Result<Cow<'static, str>> {
        match self {
            Self::Bundled => Ok(Cow::Borrowed(DEFAULT_TEMPLATE)),
            Self::File(path) => read_to_string(path).map(Cow::Owned),
        }
    }
}

impl std::fmt::Display for TemplateSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bundled => write!(f, "<bundled>"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Inputs of [`compile_markdown_file`].
#[derive(Debug, Clone)]
pub struct CompileRequest {
    pub markdown_path: PathBuf,
    pub template: TemplateSource,
    /// Value of the `{{ title }}` placeholder.
    pub title: String,
    pub output_path: PathBuf,
}

impl CompileRequest {
    /// Creates a request writing next to `markdown_path`, see [`output_path_for`].
    pub fn new(markdown_path: impl Into<PathBuf>, template: TemplateSource, title: String) -> Self {
        let markdown_path = markdown_path.into();
        let output_path = output_path_for(&markdown_path);
        Self {
            markdown_path,
            template,
            title,
            output_path,
        }
    }
}

/// Returns the path of the HTML file for `markdown_path`: same directory,
/// same base name, `.html` extension.
pub fn output_path_for(markdown_path: &Path) -> PathBuf {
    markdown_path.with_extension("html")
}

fn read_to_string(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| Error::ReadFile {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads the markdown file, converts it, wraps it in the page template, adds
/// the TOC anchors and writes the result to `request.output_path`.
///
/// The output file is only written once every previous step succeeded.
/// Returns the final HTML.
pub fn compile_markdown_file<C: MarkdownConverter + ?Sized>(
    converter: &C,
    request: &CompileRequest,
) -> Result<String> {
    let CompileRequest {
        markdown_path,
        template,
        title,
        output_path,
    } = request;

    tracing::info!("Reading provided markdown file {}...", markdown_path.display());
    let markdown = read_to_string(markdown_path)?;

    tracing::info!("Loading HTML template ({template})...");
    let template = template.load()?;

    tracing::info!("Converting markdown using the API...");
    let content = converter.convert(&markdown)?;

    tracing::info!("Styling and formatting HTML...");
    let page = render_template(&template, title, &content)?;

    let rewritten = rewrite_headings(&page);
    tracing::debug!(
        anchored = rewritten.anchored,
        skipped = rewritten.skipped,
        "Linked headings for the table of contents"
    );

    tracing::info!("Writing HTML file to {}...", output_path.display());
    std::fs::write(output_path, &rewritten.html).map_err(|source| Error::WriteFile {
        path: output_path.clone(),
        source,
    })?;

    Ok(rewritten.html)
}
