//! Entry point for the portfolio desktop app.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use folio_core::SiteConfig;
use folio_logging::{FileConfig, FolioSubscriberBuilder, LogConfig, LogFormat};

use folio_site::components::App;
use folio_site::state::{self, Services};

/// CSS styles embedded at compile time.
const STYLES_CSS: &str = include_str!("../assets/styles.css");

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(about = "Animated personal portfolio")]
struct Args {
    /// TOML configuration file (defaults are used when omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// GitHub account whose repositories are listed
    #[arg(long)]
    github_user: Option<String>,

    /// Console log format: pretty or json
    #[arg(long, default_value_t = LogFormat::Pretty)]
    log_format: LogFormat,

    /// Log level, overridden by RUST_LOG
    #[arg(long)]
    log_level: Option<String>,

    /// Also write JSONL logs to daily files in this directory
    #[arg(long)]
    log_dir: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut log_config = LogConfig::for_format(args.log_format);
    if let Some(level) = args.log_level {
        log_config.level = level;
    }
    let mut logging = FolioSubscriberBuilder::new().with_config(log_config);
    if let Some(directory) = args.log_dir {
        logging = logging.with_file_output(FileConfig {
            directory,
            ..FileConfig::default()
        });
    }
    let _log_guard = logging.init();

    tracing::info!("Starting portfolio");

    let mut config = SiteConfig::load(args.config.as_deref()).context("loading configuration")?;
    if let Some(user) = args.github_user {
        config.github.user = user;
        config.validate().context("validating --github-user")?;
    }
    tracing::info!(user = %config.github.user, "Configuration loaded");

    state::install(Services::from_config(config).context("building services")?);

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title("ROHINI C - Portfolio")
                        .with_inner_size(LogicalSize::new(1280, 860)),
                )
                .with_custom_head(format!(
                    r#"
                    <link rel="preconnect" href="https://fonts.googleapis.com">
                    <link rel="preconnect" href="https://fonts.gstatic.com" crossorigin>
                    <link href="https://fonts.googleapis.com/css2?family=Playfair+Display:wght@400;500;700&display=swap" rel="stylesheet">
                    <style>{}</style>
                    "#,
                    STYLES_CSS
                )),
        )
        .launch(App);

    Ok(())
}
