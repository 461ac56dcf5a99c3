use clap::Parser;
use md2html_config::Config;
use md2html_core::{CompileRequest, ConversionOptions, TemplateSource, DEFAULT_API_URL};
use std::path::PathBuf;
use std::time::Duration;

/// Title used when neither `--title` nor the config file sets one.
pub const DEFAULT_TITLE: &str = "README";

/// Convert Markdown (VSCode style) to HTML in the style of GitHub READMEs.
#[derive(Parser, Debug)]
#[clap(name = "md2html", disable_version_flag = true)]
pub struct Args {
    /// The markdown file to convert to HTML.
    ///
    /// The HTML file is written next to it, with the `.html` extension.
    pub markdown: PathBuf,

    /// File containing the template for the output HTML file.
    ///
    /// The template must contain the `{{ title }}` and `{{ content }}` placeholders.
    #[clap(short = 'j', long)]
    pub template: Option<PathBuf>,

    /// URL for the markdown compiler API.
    #[clap(short, long, alias = "markdown_api")]
    pub markdown_api: Option<String>,

    /// Title that appears in the tab.
    #[clap(short, long)]
    pub title: Option<String>,
}

/// Everything needed to convert one file, with flags and config merged.
#[derive(Debug)]
pub struct Invocation {
    pub request: CompileRequest,
    pub api_url: String,
    pub conversion_options: ConversionOptions,
}

impl Args {
    /// Merges the command line flags with `config`, flags taking precedence.
    pub fn into_invocation(self, config: &Config) -> Invocation {
        let Self {
            markdown,
            template,
            markdown_api,
            title,
        } = self;

        let template = template
            .or_else(|| config.document.template.clone())
            .map(TemplateSource::File)
            .unwrap_or_default();

        let title = title
            .or_else(|| config.document.title.clone())
            .unwrap_or_else(|| DEFAULT_TITLE.to_string());

        let api_url = markdown_api
            .or_else(|| config.conversion.api_url.clone())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let mut conversion_options = ConversionOptions {
            timeout: config.conversion.timeout_secs.map(Duration::from_secs),
            ..Default::default()
        };
        if let Some(user_agent) = &config.conversion.user_agent {
            conversion_options.user_agent = user_agent.clone();
        }

        Invocation {
            request: CompileRequest::new(markdown, template, title),
            api_url,
            conversion_options,
        }
    }
}
