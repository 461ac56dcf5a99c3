use clap::Parser;
use cli::Args;
use md2html_config::LoadedConfig;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let LoadedConfig {
        config,
        file_path,
        maybe_error,
    } = md2html_config::load_config(None);

    let _guard = cli::init_logging(&config.log)?;

    if let Some(err) = maybe_error {
        tracing::warn!(?file_path, "Ignoring malformed config file: {err}");
    }

    let output_path = cli::run(args, &config)?;

    tracing::info!("Done, HTML written to {}", output_path.display());

    Ok(())
}
