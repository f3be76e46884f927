#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod theme;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use cardview_core::{DownloadDirHost, ExportConfig, ProfileRecord};
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use tracing_subscriber::EnvFilter;

use crate::context::{CardProfile, SharedExporter};

/// cardview - Personal business card
#[derive(Parser, Debug)]
#[command(name = "cardview-desktop")]
#[command(about = "cardview - Personal business card with contact export")]
struct Args {
    /// JSON profile to display instead of the built-in one
    #[arg(short, long)]
    profile: Option<PathBuf>,

    /// Directory saved contact files are written to
    #[arg(short, long)]
    download_dir: Option<PathBuf>,

    /// Directory for temporary export files
    #[arg(long)]
    staging_dir: Option<PathBuf>,
}

impl Args {
    fn export_config(&self) -> ExportConfig {
        let mut config = ExportConfig::default();
        if let Some(dir) = &self.download_dir {
            config = config.with_download_dir(dir);
        }
        if let Some(dir) = &self.staging_dir {
            config = config.with_staging_dir(dir);
        }
        config
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let profile = match &args.profile {
        Some(path) => ProfileRecord::load(path)
            .with_context(|| format!("Failed to load profile from {}", path.display()))?,
        None => ProfileRecord::default(),
    };
    let export_config = args.export_config();

    tracing::info!(
        "Showing card for '{}', saving contacts to {:?}",
        profile.name,
        export_config.download_dir
    );

    let title = format!("{} - Business Card", profile.name);

    // Configure desktop window
    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(760.0, 720.0))
            .with_resizable(true),
    );

    let profile: CardProfile = Arc::new(profile);
    let exporter: SharedExporter = Arc::new(DownloadDirHost::new(export_config));

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .with_context(profile)
        .with_context(exporter)
        .launch(app::App);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_defaults() {
        let args = Args::parse_from(["cardview-desktop"]);
        assert!(args.profile.is_none());
        assert_eq!(args.export_config(), ExportConfig::default());
    }

    #[test]
    fn test_args_override_dirs() {
        let args = Args::parse_from([
            "cardview-desktop",
            "--profile",
            "me.json",
            "-d",
            "/tmp/cards",
            "--staging-dir",
            "/tmp/stage",
        ]);
        assert_eq!(args.profile, Some(PathBuf::from("me.json")));

        let config = args.export_config();
        assert_eq!(config.download_dir, PathBuf::from("/tmp/cards"));
        assert_eq!(config.staging_dir, PathBuf::from("/tmp/stage"));
    }
}
