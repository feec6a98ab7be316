#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod hooks;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::{Arc, OnceLock};

use anyhow::Context;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use invitation_core::{ConfigOverrides, InvitationConfig, InvitationContent};
use tracing_subscriber::EnvFilter;

/// Global launch configuration, set once from the command line
static CONFIG: OnceLock<Arc<InvitationConfig>> = OnceLock::new();

/// Get the launch configuration (set from command line or default)
pub fn get_config() -> Arc<InvitationConfig> {
    CONFIG
        .get()
        .cloned()
        .unwrap_or_else(|| Arc::new(InvitationConfig::default()))
}

/// Wedding Invitation - single-page invitation with background music
#[derive(Parser, Debug)]
#[command(name = "invitation-desktop")]
#[command(about = "Wedding invitation with a locked cover, sections and background music")]
struct Args {
    /// Directory holding images/ and music/
    #[arg(short, long, default_value = "assets")]
    asset_dir: PathBuf,

    /// JSON file overriding the built-in invitation content
    #[arg(short, long)]
    content: Option<PathBuf>,

    /// Background music volume (0.0 - 1.0)
    #[arg(long)]
    volume: Option<f32>,

    /// Disable background music
    #[arg(long)]
    no_music: bool,

    /// Log filter, used when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    log: String,
}

/// Build the launch configuration from parsed arguments
fn load_config(args: &Args) -> anyhow::Result<InvitationConfig> {
    let content = match args.content {
        Some(ref path) => InvitationContent::from_json_file(path)
            .with_context(|| format!("failed to load content from {}", path.display()))?,
        None => InvitationContent::default(),
    };

    let overrides = ConfigOverrides {
        volume: args.volume,
        no_music: args.no_music,
    };
    Ok(InvitationConfig::new(args.asset_dir.clone(), content, overrides))
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = load_config(&args)?;
    let title = config.content.title.clone();

    tracing::info!("Starting '{}' with asset dir: {:?}", title, args.asset_dir);

    // Store configuration globally
    let _ = CONFIG.set(Arc::new(config));

    // Phone-shaped window: the page is designed as a vertical scroll
    let window_width = 480.0;
    let window_height = 900.0;

    // Configure desktop window
    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(window_width, window_height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("invitation-desktop").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn defaults_use_builtin_content() {
        let args = parse(&[]);
        assert_eq!(args.asset_dir, PathBuf::from("assets"));

        let config = load_config(&args).unwrap();
        assert_eq!(config.content, InvitationContent::default());
        assert!(config.music_enabled);
        assert_eq!(config.audio.volume, 0.5);
    }

    #[test]
    fn overrides_are_applied() {
        let args = parse(&["--asset-dir", "/srv/wedding", "--volume", "0.2", "--no-music"]);
        let config = load_config(&args).unwrap();

        assert!(!config.music_enabled);
        assert_eq!(config.audio.volume, 0.2);
        assert!(config.audio.sources[0].starts_with("/srv/wedding"));
    }

    #[test]
    fn content_file_replaces_defaults() {
        let mut content = InvitationContent::default();
        content.title = "Sari & Bayu".to_string();

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(serde_json::to_string(&content).unwrap().as_bytes())
            .unwrap();

        let path = file.path().to_str().unwrap().to_string();
        let config = load_config(&parse(&["--content", &path])).unwrap();
        assert_eq!(config.content.title, "Sari & Bayu");
    }

    #[test]
    fn invalid_content_file_is_reported() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(br#"{ "title": "" }"#).unwrap();

        let path = file.path().to_str().unwrap().to_string();
        let err = load_config(&parse(&["--content", &path])).unwrap_err();
        assert!(err.to_string().contains("failed to load content"));
    }
}
