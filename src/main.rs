use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use cwl_stats::config::DEFAULT_CONFIG_PATH;
use cwl_stats::{collect_report, output_file_name, write_xlsx, CocClient, Config, CwlApi};
use tracing_subscriber::EnvFilter;

/// Export a clan's war league statistics to a spreadsheet
#[derive(Parser)]
#[command(name = "cwl-stats", version, about, long_about = None)]
struct Cli {
    /// JSON file holding the API token and clan tag
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Clan tag to report on, overriding the config file
    #[arg(long)]
    clan: Option<String>,

    /// Directory the spreadsheet is written to
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging();

    let config = Config::load(&cli.config)?;
    let clan = config
        .target_clan(cli.clan.as_deref(), &cli.config)
        .context("check the clan tag")?;
    tracing::info!(clan = %clan, config = %cli.config.display(), "configuration loaded");

    let api = CocClient::new(&config.token, config.timeout())?.with_base_url(&config.base_url);

    let report = collect_report(&api, &clan)
        .await
        .context("failed to fetch the league group")?;

    let info = api
        .clan(&clan)
        .await
        .context("failed to fetch clan info")?;
    tracing::info!(
        name = %info.name,
        level = info.clan_level,
        members = info.members,
        "clan info received"
    );

    let now = chrono::Local::now().naive_local();
    let path = cli.output_dir.join(output_file_name(now, &info.name));
    write_xlsx(&report, &path)?;

    println!("{} produced.", path.display());
    Ok(())
}

/// Log to stderr, filtered by `RUST_LOG` (default `info`).
fn setup_logging() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}
