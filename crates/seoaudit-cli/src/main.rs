use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod audit;
mod inspect;
mod report;

#[derive(Debug, Parser)]
#[command(name = "seoaudit")]
#[command(about = "On-page SEO audit: signals, scores, gaps, and fix prompts")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Audit site pages and write JSON reports.
    Audit {
        /// Site root, e.g. https://www.example.com
        #[arg(long)]
        site: String,
        /// File with one URL per line; skips sitemap discovery.
        #[arg(long)]
        urls: Option<PathBuf>,
        /// Audit config YAML; overrides SEOAUDIT_CONFIG_PATH.
        #[arg(long)]
        config: Option<PathBuf>,
        /// Output directory; overrides SEOAUDIT_OUT_DIR.
        #[arg(long)]
        out_dir: Option<PathBuf>,
        /// Maximum number of pages; overrides SEOAUDIT_MAX_PAGES.
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Fetch one page and print its signals, keywords, score, and gaps.
    Inspect {
        url: String,
        /// Audit config YAML; overrides SEOAUDIT_CONFIG_PATH.
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let app_config = seoaudit_core::load_app_config()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&app_config.log_level)),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Audit {
            site,
            urls,
            config,
            out_dir,
            limit,
        }) => {
            audit::run(
                &app_config,
                &site,
                urls.as_deref(),
                config.as_deref(),
                out_dir.as_deref(),
                limit,
            )
            .await
        }
        Some(Commands::Inspect { url, config }) => {
            inspect::run(&app_config, &url, config.as_deref()).await
        }
        None => {
            println!("seoaudit: use `audit` or `inspect` (see --help)");
            Ok(())
        }
    }
}
