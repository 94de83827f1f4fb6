use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use pageicon::app::AppContext;
use pageicon::cli::{commands, Cli};
use pageicon::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout carries only the listing
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load().unwrap_or_else(|e| {
            tracing::warn!("Using default configuration: {}", e);
            Config::default()
        }),
    };
    cli.apply_overrides(&mut config);

    let ctx = AppContext::new(config)?;
    let url = commands::normalize_url(&cli.url);

    if cli.wants_best() {
        let preference = cli.preference(&ctx.config);
        commands::best_icon(&ctx, &url, &preference, cli.output.as_deref()).await?;
    } else {
        commands::list_icons(&ctx, &url).await?;
    }

    Ok(())
}
