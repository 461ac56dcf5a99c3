mod app;

/// Re-exports.
pub use app::{Args, Invocation, DEFAULT_TITLE};

use anyhow::{anyhow, Context, Result};
use md2html_config::{Config, LogConfig};
use md2html_core::{compile_markdown_file, ConversionClient};
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over `log.max_level`. When `log.log_file` is set
/// the logs are written to that file instead of stderr, the returned guard must
/// be kept alive until the program exits to flush them.
///
/// An invalid `log.max_level` falls back to `info` and is reported as a warning
/// once the subscriber is installed.
pub fn init_logging(log: &LogConfig) -> Result<Option<WorkerGuard>> {
    let (max_level, maybe_level_err) = match parse_max_level(&log.max_level) {
        Ok(level) => (level, None),
        Err(err) => (tracing::Level::INFO, Some(err)),
    };

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(max_level.to_string()));

    let guard = if let Some(log_file) = &log.log_file {
        let log_path = Path::new(log_file);

        let file_name = log_path
            .file_name()
            .ok_or_else(|| anyhow!("no file name in {log_path:?}"))?;

        let directory = match log_path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let file_appender = tracing_appender::rolling::never(directory, file_name);
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(non_blocking)
            .with_ansi(false)
            .finish();

        tracing::subscriber::set_global_default(subscriber)?;

        Some(guard)
    } else {
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .with_ansi(std::io::stderr().is_terminal())
            .finish();

        tracing::subscriber::set_global_default(subscriber)?;

        None
    };

    if let Some(err) = maybe_level_err {
        tracing::warn!("{err:#}, falling back to info");
    }

    Ok(guard)
}

fn parse_max_level(max_level: &str) -> Result<tracing::Level> {
    max_level
        .parse()
        .map_err(|err| anyhow!("invalid log max-level {max_level:?}: {err}"))
}

/// Converts the markdown file given in `args`, returns the path of the HTML file.
pub fn run(args: Args, config: &Config) -> Result<PathBuf> {
    let Invocation {
        request,
        api_url,
        conversion_options,
    } = args.into_invocation(config);

    let client = ConversionClient::new(api_url, conversion_options)
        .context("failed to build the HTTP client")?;

    compile_markdown_file(&client, &request)
        .with_context(|| format!("failed to convert {}", request.markdown_path.display()))?;

    Ok(request.output_path)
}
